//! Text styling and greedy line wrapping.

use crate::types::Colour;

/// Baseline advance between wrapped lines, as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// Approximate advance of one character in em, used when no font is loaded.
pub const FALLBACK_ADVANCE_EM: f32 = 0.6;

/// Horizontal anchor of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Offset to add to `x` for a line of the given width.
    pub fn offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// How a text primitive is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    /// CSS-style family name; `sans-serif`, `serif` and `monospace` are generic.
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color: Colour,
    pub align: TextAlign,
    /// Wrap width. `None` draws the text as a single line.
    pub max_width: Option<f32>,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Colour) -> Self {
        Self {
            font_size,
            font_family: "sans-serif".to_string(),
            font_weight: FontWeight::Normal,
            color,
            align: TextAlign::Left,
            max_width: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn centered(self) -> Self {
        self.align(TextAlign::Center)
    }

    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Distance between consecutive baselines.
    pub fn line_advance(&self) -> f32 {
        self.font_size * LINE_HEIGHT
    }

    /// Width estimate used when no font face is available.
    pub fn fallback_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * FALLBACK_ADVANCE_EM
    }
}

/// Split `text` into lines no wider than `max_width`.
///
/// Words are whitespace-delimited and added greedily: a word that would push
/// the current line past `max_width` starts a new line, unless the line is
/// still empty. A single word wider than `max_width` therefore occupies a
/// line on its own. The last line is always emitted.
pub fn wrap_lines(text: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }

    lines.push(line);
    lines
}

/// Lines a text primitive will emit for `style`.
pub fn layout_lines(text: &str, style: &TextStyle, measure: impl FnMut(&str) -> f32) -> Vec<String> {
    match style.max_width {
        Some(max_width) => wrap_lines(text, max_width, measure),
        None => vec![text.to_string()],
    }
}
