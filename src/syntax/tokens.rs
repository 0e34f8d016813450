//! Token categories for source annotation
//!
//! Every pattern rule tags its matches with a category. The category
//! decides the designated color a token is rendered in.

use super::style::Style;

/// The nine keyword groups of the Alterion language, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordGroup {
    /// Flow control and async (if, for, await, try, ...)
    Control,
    /// Render and function introducers (render, fn, method, ...)
    Render,
    /// Type declarations (struct, enum, interface, ...)
    TypeDecl,
    /// Module system (use, export, mod, ...)
    Module,
    /// Ownership modifiers (move, ref, owned, ...)
    Ownership,
    /// Literal keywords (true, null, undefined, ...)
    Literal,
    /// Context keywords (self, match, case, ...)
    Context,
    /// Declarations and operators spelled as words (let, new, typeof, ...)
    Declaration,
    /// Built-in output functions (print, println)
    Builtin,
}

impl KeywordGroup {
    /// All groups, in the order their rules appear in the pattern table
    pub const ALL: [KeywordGroup; 9] = [
        KeywordGroup::Control,
        KeywordGroup::Render,
        KeywordGroup::TypeDecl,
        KeywordGroup::Module,
        KeywordGroup::Ownership,
        KeywordGroup::Literal,
        KeywordGroup::Context,
        KeywordGroup::Declaration,
        KeywordGroup::Builtin,
    ];

    /// Name suffix used after `keyword.`
    pub fn name(&self) -> &'static str {
        match self {
            KeywordGroup::Control => "control",
            KeywordGroup::Render => "render",
            KeywordGroup::TypeDecl => "type",
            KeywordGroup::Module => "module",
            KeywordGroup::Ownership => "ownership",
            KeywordGroup::Literal => "literal",
            KeywordGroup::Context => "context",
            KeywordGroup::Declaration => "declaration",
            KeywordGroup::Builtin => "builtin",
        }
    }

    fn default_style(&self) -> Style {
        match self {
            KeywordGroup::Control => Style::rgb(0xc6, 0x78, 0xdd).with_bold(),
            KeywordGroup::Render => Style::rgb(0xe0, 0x6c, 0x75).with_bold(),
            KeywordGroup::TypeDecl => Style::rgb(0xe5, 0xc0, 0x7b).with_bold(),
            KeywordGroup::Module => Style::rgb(0x56, 0xb6, 0xc2),
            KeywordGroup::Ownership => Style::rgb(0xd1, 0x9a, 0x66),
            KeywordGroup::Literal => Style::rgb(0xd1, 0x9a, 0x66).with_bold(),
            KeywordGroup::Context => Style::rgb(0xe0, 0x6c, 0x75),
            KeywordGroup::Declaration => Style::rgb(0xc6, 0x78, 0xdd),
            KeywordGroup::Builtin => Style::rgb(0x61, 0xaf, 0xef).with_bold(),
        }
    }
}

/// Semantic categories a token can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Line comments and single-line block comments
    Comment,
    /// String literals in any of the three quote kinds
    String,
    /// Integer and float literals
    Number,
    /// A keyword from one of the nine groups
    Keyword(KeywordGroup),
    /// Built-in type names
    Type,
    /// Operators, multi- and single-character
    Operator,
    /// Parentheses, braces, square brackets
    Bracket,
    /// Separators (; , . : @ #)
    Punctuation,
    /// Identifier directly followed by `(`
    FunctionCall,
    /// Name after a `.`
    Property,
    /// Any other word
    Identifier,
}

impl Category {
    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Comment => Style::rgb(0x7f, 0x84, 0x8e).with_italic(),
            Category::String => Style::rgb(0x98, 0xc3, 0x79),
            Category::Number => Style::rgb(0xd1, 0x9a, 0x66),
            Category::Keyword(group) => group.default_style(),
            Category::Type => Style::rgb(0xe5, 0xc0, 0x7b),
            Category::Operator => Style::rgb(0x56, 0xb6, 0xc2),
            Category::Bracket => Style::rgb(0xab, 0xb2, 0xbf),
            Category::Punctuation => Style::rgb(0xab, 0xb2, 0xbf),
            Category::FunctionCall => Style::rgb(0x61, 0xaf, 0xef),
            Category::Property => Style::rgb(0xe0, 0x6c, 0x75),
            Category::Identifier => Style::rgb(0xdc, 0xdf, 0xe4),
        }
    }

    /// Get the dotted name of this category (used in config files)
    pub fn name(&self) -> String {
        match self {
            Category::Comment => "comment".to_string(),
            Category::String => "string".to_string(),
            Category::Number => "number".to_string(),
            Category::Keyword(group) => format!("keyword.{}", group.name()),
            Category::Type => "type".to_string(),
            Category::Operator => "operator".to_string(),
            Category::Bracket => "bracket".to_string(),
            Category::Punctuation => "punctuation".to_string(),
            Category::FunctionCall => "function-call".to_string(),
            Category::Property => "property".to_string(),
            Category::Identifier => "identifier".to_string(),
        }
    }

    /// Parse a category from its dotted name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(group) = name.strip_prefix("keyword.") {
            return KeywordGroup::ALL
                .into_iter()
                .find(|g| g.name() == group)
                .map(Category::Keyword);
        }
        match name {
            "comment" => Some(Category::Comment),
            "string" => Some(Category::String),
            "number" => Some(Category::Number),
            "type" => Some(Category::Type),
            "operator" => Some(Category::Operator),
            "bracket" => Some(Category::Bracket),
            "punctuation" => Some(Category::Punctuation),
            "function-call" => Some(Category::FunctionCall),
            "property" => Some(Category::Property),
            "identifier" => Some(Category::Identifier),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        assert!(!Category::Comment.default_style().is_default());
        assert!(!Category::Identifier.default_style().is_default());
        for group in KeywordGroup::ALL {
            assert!(!Category::Keyword(group).default_style().is_default());
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        let categories = [
            Category::Comment,
            Category::Keyword(KeywordGroup::Ownership),
            Category::FunctionCall,
            Category::Identifier,
        ];
        for category in categories {
            assert_eq!(Category::from_name(&category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("keyword"), None);
        assert_eq!(Category::from_name("keyword.loop"), None);
        assert_eq!(Category::from_name(""), None);
    }
}
