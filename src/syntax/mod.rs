//! Syntax annotation
//!
//! This module turns one line of source text into styled output:
//! - the pattern table runs every rule over the line (tokenizer)
//! - the resolver reduces overlapping candidates to a final sequence
//! - the renderers emit HTML or ANSI-styled text

mod style;
mod tokens;
mod rules;
mod table;
mod resolve;
mod render;
mod builtin;

pub use style::{Color, Style};
pub use tokens::{Category, KeywordGroup};
pub use rules::{Emit, PatternRule, Token};
pub use table::PatternTable;
pub use resolve::resolve;
pub use render::{escape_html, render_html, render_terminal};
pub use builtin::{alterion_table, reserved_words, KEYWORD_GROUPS, TYPE_NAMES};
