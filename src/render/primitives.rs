//! Stateless drawing operations shared by every composer.
//!
//! Composers only ever talk to a `dyn Primitives`, so the same layout code
//! paints pixels through [`RasterRenderer`](super::RasterRenderer) or records
//! its calls through [`RecordingRenderer`](super::RecordingRenderer).

use crate::types::Colour;

use super::text::{layout_lines, TextStyle};

/// Outline drawn on top of a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Colour,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Colour, width: f32) -> Self {
        Self { color, width }
    }
}

/// A colour stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f32,
    pub color: Colour,
}

/// A full-surface gradient wash.
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    /// Linear gradient from `start` to `end`.
    Linear {
        start: (f32, f32),
        end: (f32, f32),
        stops: Vec<GradientStop>,
    },
    /// Radial gradient fading out from `center` to `radius`.
    Radial {
        center: (f32, f32),
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Two-stop linear gradient.
    pub fn linear(start: (f32, f32), end: (f32, f32), from: Colour, to: Colour) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: two_stops(from, to),
        }
    }

    /// Two-stop radial gradient.
    pub fn radial(center: (f32, f32), radius: f32, inner: Colour, outer: Colour) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops: two_stops(inner, outer),
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

fn two_stops(from: Colour, to: Colour) -> Vec<GradientStop> {
    vec![
        GradientStop {
            offset: 0.0,
            color: from,
        },
        GradientStop {
            offset: 1.0,
            color: to,
        },
    ]
}

/// Drawing operations a composer may issue against a surface.
pub trait Primitives {
    /// Width of `text` rendered as a single line in `style`.
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f32;

    /// Paint one already laid-out line with its baseline at `y`.
    fn fill_text_line(&mut self, line: &str, x: f32, y: f32, style: &TextStyle);

    /// Draw `text` at `(x, y)`, wrapping to `style.max_width` when set.
    ///
    /// Wrapped lines advance the baseline by `font_size * 1.2`. Returns the
    /// number of lines drawn.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> usize {
        let lines = layout_lines(text, style, |candidate| self.measure_text(candidate, style));
        let mut baseline = y;
        for line in &lines {
            self.fill_text_line(line, x, baseline, style);
            baseline += style.line_advance();
        }
        lines.len()
    }

    /// Filled disc, optionally outlined.
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: Colour, stroke: Option<Stroke>);

    /// Background rectangle of the full `width` with a left-aligned foreground
    /// of `width * progress / 100`. `progress` is used as given.
    #[allow(clippy::too_many_arguments)]
    fn draw_progress_bar(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        progress: f32,
        background: Colour,
        fill: Colour,
    );

    /// Paint `gradient` over the whole surface.
    fn fill_gradient(&mut self, gradient: &Gradient);
}

/// Foreground width of a progress bar.
pub fn progress_fill_width(width: f32, progress: f32) -> f32 {
    width * progress / 100.0
}
