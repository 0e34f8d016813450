//! Whole-document output
//!
//! Formats annotated lines with a gutter (line number, problem mark, fold
//! marker) followed by any open problem tooltips.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::annotate::{LineAnnotation, SourceView};
use crate::error::Result;
use crate::problems::ProblemEntry;
use crate::syntax::escape_html;

const ERROR_MARK: char = '●';
const FOLD_OPEN: char = '▾';
const FOLD_CLOSED: char = '▸';

/// Output format for a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Terminal,
    Json,
}

fn gutter(line: &LineAnnotation, number_width: Option<usize>) -> String {
    let mut out = String::new();
    if let Some(width) = number_width {
        let _ = write!(out, "{:>width$} ", line.number, width = width);
    }
    out.push(if line.has_error { ERROR_MARK } else { ' ' });
    out.push(match (line.fold_anchor, line.collapsed) {
        (true, true) => FOLD_CLOSED,
        (true, false) => FOLD_OPEN,
        _ => ' ',
    });
    out.push(' ');
    out
}

fn number_width(view: &SourceView<'_>, line_numbers: bool) -> Option<usize> {
    line_numbers.then(|| view.line_count().max(1).to_string().len())
}

fn describe(problem: &ProblemEntry) -> String {
    format!("{}:{}: {}", problem.line, problem.column, problem.message)
}

/// Render annotated lines as an HTML fragment
pub fn html_document(view: &SourceView<'_>, lines: &[LineAnnotation], line_numbers: bool) -> String {
    let width = number_width(view, line_numbers);
    let mut out = String::from("<pre class=\"source\">\n");
    for line in lines {
        let _ = writeln!(
            out,
            "<div class=\"line{}\" data-line=\"{}\"><span class=\"gutter\">{}</span><span class=\"code\">{}</span></div>",
            if line.has_error { " error" } else { "" },
            line.number,
            escape_html(&gutter(line, width)),
            line.html
        );
        if let Some(problem) = &line.tooltip {
            let _ = writeln!(
                out,
                "<div class=\"tooltip\" data-line=\"{}\">{}</div>",
                line.number,
                escape_html(&describe(problem))
            );
        }
    }
    out.push_str("</pre>\n");
    out
}

/// Render annotated lines with ANSI styling
///
/// Tooltips point at the reported column with a caret aligned by display
/// width.
pub fn terminal_document(
    view: &SourceView<'_>,
    lines: &[LineAnnotation],
    line_numbers: bool,
) -> String {
    let width = number_width(view, line_numbers);
    let mut out = String::new();
    for line in lines {
        let margin = gutter(line, width);
        let code = view.line_terminal(line.index).unwrap_or_default();
        let _ = writeln!(out, "{}{}", margin, code);

        if let Some(problem) = &line.tooltip {
            let raw = view.lines().get(line.index).map(String::as_str).unwrap_or("");
            let prefix: String = raw
                .chars()
                .take(problem.column.saturating_sub(1))
                .collect();
            let pad = margin.width() + prefix.width();
            let _ = writeln!(out, "{:pad$}^ {}", "", describe(problem), pad = pad);
        }
    }
    out
}

/// Serialize annotated lines as pretty JSON
pub fn json_document(lines: &[LineAnnotation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}
