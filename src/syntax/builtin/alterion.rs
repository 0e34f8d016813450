//! Alterion pattern table

use crate::error::Result;
use crate::syntax::rules::PatternRule;
use crate::syntax::table::PatternTable;
use crate::syntax::tokens::{Category, KeywordGroup};

/// Keywords per group, in table order
pub static KEYWORD_GROUPS: [(KeywordGroup, &[&str]); 9] = [
    (
        KeywordGroup::Control,
        &[
            "async", "component", "import", "extern", "for", "if", "else", "while", "return",
            "break", "continue", "yield", "await", "throw", "try", "catch", "finally",
        ],
    ),
    (
        KeywordGroup::Render,
        &["render", "script", "function", "fn", "method"],
    ),
    (
        KeywordGroup::TypeDecl,
        &["type", "interface", "struct", "enum", "union"],
    ),
    (
        KeywordGroup::Module,
        &["from", "export", "use", "pub", "mod", "namespace"],
    ),
    (
        KeywordGroup::Ownership,
        &["move", "copy", "ref", "deref", "owned", "borrowed", "shared", "weak"],
    ),
    (
        KeywordGroup::Literal,
        &["true", "false", "null", "none", "undefined"],
    ),
    (
        KeywordGroup::Context,
        &["this", "super", "self", "Self", "match", "case", "default"],
    ),
    (
        KeywordGroup::Declaration,
        &["let", "const", "var", "new", "delete", "as", "is", "typeof"],
    ),
    (KeywordGroup::Builtin, &["print", "println"]),
];

/// Built-in type names
pub static TYPE_NAMES: &[&str] = &[
    "int", "float", "double", "string", "bool", "char", "void", "any", "number", "object",
    "array", "map", "set", "tuple", "Promise", "Result", "Option",
];

/// Template for property access: only the name after the dot is wrapped
const PROPERTY_TEMPLATE: &str = ".<span style=\"{style}\">{text}</span>";

fn word_list(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

/// Every word recognized by a keyword or type-name rule
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    KEYWORD_GROUPS
        .iter()
        .flat_map(|(_, words)| words.iter().copied())
        .chain(TYPE_NAMES.iter().copied())
}

/// Create the Alterion pattern table
pub fn alterion_table() -> Result<PatternTable> {
    let mut table = PatternTable::new("Alterion");

    table.push(PatternRule::new("comment", r"//.*|/\*.*?\*/", Category::Comment)?);

    table.push(PatternRule::new("string_double", r#""(?:[^"\\]|\\.)*""#, Category::String)?);
    table.push(PatternRule::new("string_single", r"'(?:[^'\\]|\\.)*'", Category::String)?);
    table.push(PatternRule::new("string_template", r"`(?:[^`\\]|\\.)*`", Category::String)?);

    table.push(PatternRule::new("float", r"\b\d+\.\d+\b", Category::Number)?);
    table.push(PatternRule::new("integer", r"\b\d+\b", Category::Number)?);

    for &(group, words) in KEYWORD_GROUPS.iter() {
        let name = format!("keyword_{}", group.name());
        table.push(PatternRule::new(&name, &word_list(words), Category::Keyword(group))?);
    }

    table.push(PatternRule::new("type_name", &word_list(TYPE_NAMES), Category::Type)?);

    table.push(PatternRule::new(
        "operator_multi",
        r"=>|->|==|!=|<=|>=|&&|\|\||\*\*|\+\+|--|\+=|-=|\*=|/=|%=",
        Category::Operator,
    )?);
    table.push(PatternRule::new("operator_single", r"[+\-*/%=<>!&|^~?]", Category::Operator)?);

    table.push(PatternRule::new("bracket", r"[(){}\[\]]", Category::Bracket)?);
    table.push(PatternRule::new("punctuation", r"[;,.:@#]", Category::Punctuation)?);

    // Identifier followed by '(': the paren is context, not part of the token
    table.push(
        PatternRule::new("function_call", r"\b([A-Za-z_]\w*)\(", Category::FunctionCall)?
            .with_group(1),
    );

    table.push(
        PatternRule::new("property", r"\.([A-Za-z_]\w*)", Category::Property)?
            .with_template(1, PROPERTY_TEMPLATE),
    );

    table.push(
        PatternRule::new("identifier", r"\b[A-Za-z_]\w*\b", Category::Identifier)?
            .rejecting(reserved_words())
            .rejecting_before('('),
    );

    Ok(table)
}
