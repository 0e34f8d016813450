//! Annotated source view
//!
//! Ties the per-line highlighter, the buffer's fold regions and the problem
//! index together into per-line output. Fold regions are recomputed when the
//! source changes, not per rendered line.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::fold::{FoldRegions, FoldState};
use crate::problems::{ErrorIndex, ProblemEntry};
use crate::syntax::{render_html, render_terminal, PatternTable};

/// Open problem tooltips, keyed by 0-based line index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    open: HashSet<usize>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the tooltip on `line` is open
    pub fn is_open(&self, line: usize) -> bool {
        self.open.contains(&line)
    }

    /// Open or close the tooltip on `line`, returning whether it is now open
    pub fn toggle(&mut self, line: usize) -> bool {
        if self.open.remove(&line) {
            false
        } else {
            self.open.insert(line);
            true
        }
    }
}

/// Caller-owned view state that survives re-renders
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub folds: FoldState,
    pub tooltips: TooltipState,
}

/// Everything the caller needs to draw one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAnnotation {
    /// 0-based line index
    pub index: usize,
    /// 1-based line number, as used by parser problems
    pub number: usize,
    /// The line as HTML-safe markup
    pub html: String,
    pub has_error: bool,
    /// Whether this line opens a fold region
    pub fold_anchor: bool,
    /// Collapse state; always false for non-anchors
    pub collapsed: bool,
    /// Hidden by a collapsed ancestor region
    pub hidden: bool,
    /// First problem on the line, when its tooltip is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<ProblemEntry>,
}

/// A source buffer prepared for annotation
pub struct SourceView<'t> {
    table: &'t PatternTable,
    lines: Vec<String>,
    folds: FoldRegions,
    problems: ErrorIndex,
}

impl<'t> SourceView<'t> {
    /// Create a view over `source`
    pub fn new(table: &'t PatternTable, source: &str) -> Self {
        let mut view = Self {
            table,
            lines: Vec::new(),
            folds: FoldRegions::default(),
            problems: ErrorIndex::new(),
        };
        view.set_source(source);
        view
    }

    /// Replace the buffer and recompute its fold regions
    pub fn set_source(&mut self, source: &str) {
        self.lines = source.split('\n').map(str::to_string).collect();
        self.folds = FoldRegions::new(source);
        debug!(
            lines = self.lines.len(),
            regions = self.folds.len(),
            "source updated"
        );
    }

    /// Replace the problem index (a new parser feed arrived)
    pub fn set_problems(&mut self, problems: ErrorIndex) {
        self.problems = problems;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn folds(&self) -> &FoldRegions {
        &self.folds
    }

    pub fn problems(&self) -> &ErrorIndex {
        &self.problems
    }

    /// Render line `index` as HTML markup
    pub fn line_html(&self, index: usize) -> Option<String> {
        let line = self.lines.get(index)?;
        Some(render_html(line, &self.table.highlight_line(line)))
    }

    /// Render line `index` with terminal styling
    pub fn line_terminal(&self, index: usize) -> Option<String> {
        let line = self.lines.get(index)?;
        Some(render_terminal(line, &self.table.highlight_line(line)))
    }

    /// Annotate one line, whether or not it is visible
    pub fn annotate_line(&self, index: usize, state: &ViewState) -> Option<LineAnnotation> {
        let html = self.line_html(index)?;
        let number = index + 1;
        let has_error = self.problems.has_error_on_line(number);
        let fold_anchor = self.folds.is_anchor(index);
        let tooltip = if has_error && state.tooltips.is_open(index) {
            self.problems.first_error_on_line(number).cloned()
        } else {
            None
        };

        Some(LineAnnotation {
            index,
            number,
            html,
            has_error,
            fold_anchor,
            collapsed: fold_anchor && state.folds.is_collapsed(index),
            hidden: self.folds.is_hidden(index, &state.folds),
            tooltip,
        })
    }

    /// Annotate every visible line, in order
    pub fn annotate(&self, state: &ViewState) -> Vec<LineAnnotation> {
        self.folds
            .visible_lines(&state.folds)
            .filter_map(|index| self.annotate_line(index, state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::alterion_table;
    use serde_json::json;

    const SOURCE: &str = "fn foo() {\n  let x = 1;\n}";

    #[test]
    fn test_tooltip_toggle() {
        let mut tooltips = TooltipState::new();
        assert!(!tooltips.is_open(2));
        assert!(tooltips.toggle(2));
        assert!(tooltips.is_open(2));
        assert!(!tooltips.toggle(2));
        assert!(!tooltips.is_open(2));
    }

    #[test]
    fn test_annotate_all_lines_visible() {
        let table = alterion_table().unwrap();
        let view = SourceView::new(&table, SOURCE);
        let lines = view.annotate(&ViewState::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].fold_anchor);
        assert!(!lines[0].collapsed);
        assert!(!lines[1].fold_anchor);
        assert!(lines.iter().all(|l| !l.hidden && !l.has_error));
    }

    #[test]
    fn test_collapsed_anchor_stays_visible() {
        let table = alterion_table().unwrap();
        let view = SourceView::new(&table, SOURCE);
        let mut state = ViewState::default();
        state.folds.toggle(0);

        let lines = view.annotate(&state);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].collapsed);
        assert!(view.annotate_line(2, &state).unwrap().hidden);
    }

    #[test]
    fn test_hidden_follows_nested_fold_flags() {
        let table = alterion_table().unwrap();
        let view = SourceView::new(&table, "a {\n  b {\n    c\n  }\n}");
        let mut state = ViewState::default();
        state.folds.toggle(1);
        let hidden: Vec<_> = (0..5)
            .map(|i| view.annotate_line(i, &state).unwrap().hidden)
            .collect();
        assert_eq!(hidden, vec![false, false, true, true, false]);

        state.folds.toggle(0);
        assert!(view.annotate_line(1, &state).unwrap().hidden);
        state.folds.toggle(0);
        assert!(!view.annotate_line(1, &state).unwrap().hidden);
        assert!(view.annotate_line(2, &state).unwrap().hidden);
    }

    #[test]
    fn test_problem_lines_are_one_based() {
        let table = alterion_table().unwrap();
        let mut view = SourceView::new(&table, SOURCE);
        view.set_problems(ErrorIndex::from_json(&json!({
            "children": [{ "error": "unexpected '='", "line": 2, "column": 9 }]
        })));

        let mut state = ViewState::default();
        let line = view.annotate_line(1, &state).unwrap();
        assert!(line.has_error);
        assert_eq!(line.number, 2);
        assert!(line.tooltip.is_none());

        state.tooltips.toggle(1);
        let line = view.annotate_line(1, &state).unwrap();
        assert_eq!(line.tooltip.map(|p| p.column), Some(9));
    }

    #[test]
    fn test_set_source_recomputes_regions() {
        let table = alterion_table().unwrap();
        let mut view = SourceView::new(&table, SOURCE);
        assert_eq!(view.folds().len(), 1);
        view.set_source("a\nb");
        assert!(view.folds().is_empty());
        assert_eq!(view.line_count(), 2);
        assert!(view.annotate_line(2, &ViewState::default()).is_none());
    }
}
