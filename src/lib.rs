//! source-annotate - syntax annotation for Alterion source
//!
//! Turns source text into per-line styled markup, pairs brace lines into
//! collapsible regions, and places parser problems on the lines they
//! belong to.
//!
//! ```
//! use source_annotate::annotate::{SourceView, ViewState};
//! use source_annotate::syntax::alterion_table;
//!
//! let table = alterion_table().unwrap();
//! let view = SourceView::new(&table, "fn foo() {\n  let x = 1;\n}");
//! let mut state = ViewState::default();
//! state.folds.toggle(0);
//! assert_eq!(view.annotate(&state).len(), 1);
//! ```

pub mod annotate;
pub mod config;
pub mod error;
pub mod fold;
pub mod output;
pub mod problems;
pub mod results;
pub mod syntax;
