//! The ordered pattern table and the tokenizer that runs it
//!
//! A table is an ordered list of rules. A rule's position is its priority,
//! which the conflict resolver uses to break ties between identical spans.

use tracing::trace;

use super::resolve::resolve;
use super::rules::{PatternRule, Token};
use super::style::Style;
use super::tokens::Category;

/// An ordered set of lexical rules for one language
pub struct PatternTable {
    /// Language name (e.g., "Alterion")
    pub name: String,
    rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Create a new empty table
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Append a rule; its priority becomes its position in the table
    pub fn push(&mut self, mut rule: PatternRule) {
        rule.priority = self.rules.len();
        self.rules.push(rule);
    }

    /// Rules in table order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Override the style of every rule with the given category
    pub fn restyle(&mut self, category: Category, style: Style) -> usize {
        let mut changed = 0;
        for rule in self.rules.iter_mut().filter(|r| r.category == category) {
            rule.style = style;
            changed += 1;
        }
        changed
    }

    /// Run every rule over `line` and collect all candidates
    ///
    /// Nothing is discarded here: duplicates, containment and overlaps are
    /// left for the resolver.
    pub fn tokenize<'a>(&'a self, line: &'a str) -> Vec<Token<'a>> {
        let mut candidates = Vec::new();
        for rule in &self.rules {
            rule.scan_into(line, &mut candidates);
        }
        candidates
    }

    /// Tokenize and resolve one line into its final token sequence
    pub fn highlight_line<'a>(&'a self, line: &'a str) -> Vec<Token<'a>> {
        let candidates = self.tokenize(line);
        let total = candidates.len();
        let tokens = resolve(candidates);
        trace!(candidates = total, kept = tokens.len(), "highlighted line");
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> PatternTable {
        let mut table = PatternTable::new("Test");
        table.push(PatternRule::new("comment", r"//.*", Category::Comment).unwrap());
        table.push(PatternRule::new("number", r"\b\d+\b", Category::Number).unwrap());
        table.push(PatternRule::new("word", r"\b\w+\b", Category::Identifier).unwrap());
        table
    }

    #[test]
    fn test_push_assigns_positions() {
        let table = create_test_table();
        let priorities: Vec<_> = table.rules().iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![0, 1, 2]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_tokenize_keeps_every_candidate() {
        let table = create_test_table();
        // "42" is both a number and a word; "x" a word; the comment covers "y"
        let candidates = table.tokenize("x 42 // y");
        assert_eq!(candidates.len(), 5);
    }

    #[test]
    fn test_highlight_line_resolves() {
        let table = create_test_table();
        let tokens = table.highlight_line("x 42 // y");
        let spans: Vec<_> = tokens.iter().map(|t| (t.start, t.end, t.category)).collect();
        assert_eq!(
            spans,
            vec![
                (0, 1, Category::Identifier),
                // identical span: the later rule wins
                (2, 4, Category::Identifier),
                (5, 9, Category::Comment),
            ]
        );
    }

    #[test]
    fn test_restyle() {
        let mut table = create_test_table();
        let style = Style::rgb(1, 2, 3);
        assert_eq!(table.restyle(Category::Number, style), 1);
        assert_eq!(table.restyle(Category::String, style), 0);
        let tokens = table.tokenize("7");
        assert!(tokens.iter().any(|t| t.category == Category::Number && t.style == style));
    }
}
