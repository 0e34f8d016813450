//! Built-in pattern tables
//!
//! The pattern table is compiled in and not configurable at runtime
//! beyond per-category colors.

mod alterion;

pub use alterion::{alterion_table, reserved_words, KEYWORD_GROUPS, TYPE_NAMES};
