//! Line renderers
//!
//! Both renderers walk the final token sequence left to right, copying the
//! gaps between tokens through unstyled and wrapping each token in its
//! style. Nothing carries over from one line to the next.

use std::borrow::Cow;
use std::fmt::Write;

use super::rules::Token;

/// Escape `& < > " '` for HTML text and attribute contexts
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Render one line as HTML-safe markup
pub fn render_html(line: &str, tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(line.len() * 4);
    let mut last_end = 0;

    for token in tokens {
        out.push_str(&escape_html(&line[last_end..token.start]));
        let css = token.style.to_css();
        match (token.template, token.capture) {
            (Some(template), Some(capture)) => {
                out.push_str(
                    &template
                        .replace("{style}", &css)
                        .replace("{text}", &escape_html(capture)),
                );
            }
            _ => {
                let _ = write!(
                    out,
                    "<span style=\"{}\">{}</span>",
                    css,
                    escape_html(token.text)
                );
            }
        }
        last_end = token.end;
    }

    out.push_str(&escape_html(&line[last_end..]));
    out
}

/// Render one line with ANSI styling for a terminal
///
/// Templates are an HTML concern; here the whole token text is painted.
pub fn render_terminal(line: &str, tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut last_end = 0;

    for token in tokens {
        out.push_str(&line[last_end..token.start]);
        let _ = write!(out, "{}", token.style.paint(token.text));
        last_end = token.end;
    }

    out.push_str(&line[last_end..]);
    out
}
