//! Style types for annotated output
//!
//! A style carries the designated color of a token category plus a couple
//! of font attributes. The same style renders to an inline CSS declaration
//! for HTML and to a crossterm style for the terminal.

use crossterm::style::{self as term, StyledContent, Stylize};

/// A 24-bit color, or the renderer's default foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#rrggbb` or `#rgb` hex color
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Color::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 17;
                }
                Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
            }
            _ => None,
        }
    }

    /// CSS hex notation, `None` for the default color
    pub fn to_hex(&self) -> Option<String> {
        match self {
            Color::Default => None,
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        }
    }

    fn to_crossterm(self) -> Option<term::Color> {
        match self {
            Color::Default => None,
            Color::Rgb(r, g, b) => Some(term::Color::Rgb { r, g, b }),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Shorthand for a foreground color given as RGB components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::fg(Color::Rgb(r, g, b))
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Inline CSS declaration, e.g. `color:#c678dd;font-weight:bold`
    pub fn to_css(&self) -> String {
        let mut decls = Vec::with_capacity(3);
        if let Some(hex) = self.fg.to_hex() {
            decls.push(format!("color:{}", hex));
        }
        if self.bold {
            decls.push("font-weight:bold".to_string());
        }
        if self.italic {
            decls.push("font-style:italic".to_string());
        }
        decls.join(";")
    }

    /// Wrap `text` in this style for terminal output
    pub fn paint<'a>(&self, text: &'a str) -> StyledContent<&'a str> {
        let mut styled = text.stylize();
        if let Some(color) = self.fg.to_crossterm() {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        styled
    }
}
