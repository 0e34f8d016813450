//! Pattern rules for source annotation
//!
//! This module defines the rule record that the pattern table is made of,
//! and the token every rule match produces.

use std::collections::HashSet;

use regex::{Captures, Regex};

use super::style::Style;
use super::tokens::Category;
use crate::error::{AnnotateError, Result};

/// What part of a match becomes the token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    /// The whole match
    Match,
    /// Only capture group `n`; the rest of the match is context
    Group(usize),
    /// The whole match, rendered by substituting capture group `group`
    /// into `template` (`{text}` and `{style}` placeholders)
    Template { group: usize, template: String },
}

/// A single-line pattern rule
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category assigned to matches
    pub category: Category,
    /// Style emitted with matches
    pub style: Style,
    /// Position in the pattern table (set when the rule is added)
    pub priority: usize,
    /// Which part of the match becomes the token
    pub emit: Emit,
    /// Words this rule must not produce
    pub reject_words: HashSet<String>,
    /// A match directly followed by this character is dropped
    pub reject_before: Option<char>,
}

/// A rule match within one line
///
/// Candidates and final tokens share this type; resolution only drops
/// candidates, it never changes them.
///
/// `start` and `end` are UTF-8 byte offsets so they can slice the line
/// directly. They equal character offsets only for ASCII lines; use
/// [`Token::char_span`] for character positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
    /// The matched text, `line[start..end]`
    pub text: &'a str,
    pub category: Category,
    pub style: Style,
    /// Position of the producing rule in the table
    pub priority: usize,
    /// Submatch substituted into `template`
    pub capture: Option<&'a str>,
    pub template: Option<&'a str>,
}

impl<'a> Token<'a> {
    /// Check whether two tokens share at least one byte
    pub fn intersects(&self, other: &Token<'_>) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Character offsets of this token within `line`, end exclusive
    ///
    /// `line` must be the line the token was scanned from.
    pub fn char_span(&self, line: &str) -> (usize, usize) {
        let start = line[..self.start].chars().count();
        (start, start + self.text.chars().count())
    }
}

impl PatternRule {
    /// Create a new pattern rule emitting the whole match
    pub fn new(name: &str, pattern: &str, category: Category) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| AnnotateError::Pattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            category,
            style: category.default_style(),
            priority: 0,
            emit: Emit::Match,
            reject_words: HashSet::new(),
            reject_before: None,
        })
    }

    /// Builder: emit only capture group `group`
    pub fn with_group(mut self, group: usize) -> Self {
        self.emit = Emit::Group(group);
        self
    }

    /// Builder: render through a template filled from capture group `group`
    pub fn with_template(mut self, group: usize, template: &str) -> Self {
        self.emit = Emit::Template {
            group,
            template: template.to_string(),
        };
        self
    }

    /// Builder: drop matches whose text is one of `words`
    pub fn rejecting<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reject_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder: drop matches directly followed by `ch`
    pub fn rejecting_before(mut self, ch: char) -> Self {
        self.reject_before = Some(ch);
        self
    }

    /// Run a global scan of `line`, pushing one candidate per match
    pub fn scan_into<'a>(&'a self, line: &'a str, out: &mut Vec<Token<'a>>) {
        for caps in self.pattern.captures_iter(line) {
            if let Some(token) = self.token_from(line, &caps) {
                out.push(token);
            }
        }
    }

    fn token_from<'a>(&'a self, line: &'a str, caps: &Captures<'a>) -> Option<Token<'a>> {
        let whole = caps.get(0)?;
        let (span, capture, template) = match &self.emit {
            Emit::Match => (whole, None, None),
            Emit::Group(n) => (caps.get(*n)?, None, None),
            Emit::Template { group, template } => {
                (whole, Some(caps.get(*group)?.as_str()), Some(template.as_str()))
            }
        };
        if span.start() >= span.end() {
            return None;
        }
        if self.reject_words.contains(span.as_str()) {
            return None;
        }
        if let Some(ch) = self.reject_before {
            if line[span.end()..].starts_with(ch) {
                return None;
            }
        }
        Some(Token {
            start: span.start(),
            end: span.end(),
            text: span.as_str(),
            category: self.category,
            style: self.style,
            priority: self.priority,
            capture,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'a>(rule: &'a PatternRule, line: &'a str) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        rule.scan_into(line, &mut out);
        out.iter().map(|t| (t.start, t.end)).collect()
    }

    #[test]
    fn test_pattern_rule_global_scan() {
        let rule = PatternRule::new("number", r"\b\d+\b", Category::Number).unwrap();
        assert_eq!(scan(&rule, "abc 123 def 45"), vec![(4, 7), (12, 14)]);
        assert!(scan(&rule, "no numbers").is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = PatternRule::new("broken", r"(", Category::Comment).err().unwrap();
        assert!(matches!(err, AnnotateError::Pattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_group_emit_uses_submatch_span() {
        let rule = PatternRule::new("call", r"\b([A-Za-z_]\w*)\(", Category::FunctionCall)
            .unwrap()
            .with_group(1);
        assert_eq!(scan(&rule, "foo(bar(1))"), vec![(0, 3), (4, 7)]);
    }

    #[test]
    fn test_template_keeps_whole_span_and_capture() {
        let rule = PatternRule::new("property", r"\.([A-Za-z_]\w*)", Category::Property)
            .unwrap()
            .with_template(1, ".<b>{text}</b>");
        let mut out = Vec::new();
        rule.scan_into("a.len", &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].start, out[0].end), (1, 5));
        assert_eq!(out[0].text, ".len");
        assert_eq!(out[0].capture, Some("len"));
        assert_eq!(out[0].template, Some(".<b>{text}</b>"));
    }

    #[test]
    fn test_rejections() {
        let rule = PatternRule::new("ident", r"\b[A-Za-z_]\w*\b", Category::Identifier)
            .unwrap()
            .rejecting(["let"])
            .rejecting_before('(');
        assert_eq!(scan(&rule, "let x = f(y)"), vec![(4, 5), (10, 11)]);
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        let rule = PatternRule::new("maybe", r"x*", Category::Identifier).unwrap();
        assert_eq!(scan(&rule, "axxb"), vec![(1, 3)]);
    }

    #[test]
    fn test_char_span_counts_characters() {
        let rule = PatternRule::new("word", r"\w+", Category::Identifier).unwrap();
        let line = "é x";
        let mut out = Vec::new();
        rule.scan_into(line, &mut out);
        let x = out.iter().find(|t| t.text == "x").unwrap();
        assert_eq!((x.start, x.end), (3, 4));
        assert_eq!(x.char_span(line), (2, 3));
    }

    #[test]
    fn test_intersects() {
        let rule = PatternRule::new("word", r"\w+", Category::Identifier).unwrap();
        let mut out = Vec::new();
        rule.scan_into("ab cd", &mut out);
        let mut wide = out[0].clone();
        wide.end = 4;
        assert!(!out[0].intersects(&out[1]));
        assert!(wide.intersects(&out[1]));
    }
}
