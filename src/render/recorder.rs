//! A primitives backend that records calls instead of painting.
//!
//! Lets callers compare the element set two compositions produce, e.g. to
//! check that a missing subtitle really removes the subtitle element.

use crate::types::Colour;

use super::primitives::{Gradient, Primitives, Stroke};
use super::text::{layout_lines, TextStyle};

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        fill: Colour,
        stroke: Option<Stroke>,
    },
    ProgressBar {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        progress: f32,
        background: Colour,
        fill: Colour,
    },
    Gradient(Gradient),
}

impl DrawCall {
    /// Every colour this call paints with.
    pub fn colours(&self) -> Vec<Colour> {
        match self {
            DrawCall::Text { style, .. } => vec![style.color],
            DrawCall::Circle { fill, stroke, .. } => {
                std::iter::once(*fill).chain(stroke.map(|s| s.color)).collect()
            }
            DrawCall::ProgressBar {
                background, fill, ..
            } => vec![*background, *fill],
            DrawCall::Gradient(gradient) => gradient.stops().iter().map(|s| s.color).collect(),
        }
    }
}

/// Records every primitive call in order.
///
/// Text is measured with the fallback metrics, so wrapping is deterministic
/// and independent of installed fonts.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Texts drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Progress values passed to progress bars, in order.
    pub fn progress_values(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::ProgressBar { progress, .. } => Some(*progress),
                _ => None,
            })
            .collect()
    }

    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }
}

impl Primitives for RecordingRenderer {
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f32 {
        style.fallback_width(text)
    }

    fn fill_text_line(&mut self, _line: &str, _x: f32, _y: f32, _style: &TextStyle) {}

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> usize {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
        layout_lines(text, style, |line| style.fallback_width(line)).len()
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: Colour, stroke: Option<Stroke>) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            fill,
            stroke,
        });
    }

    fn draw_progress_bar(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        progress: f32,
        background: Colour,
        fill: Colour,
    ) {
        self.calls.push(DrawCall::ProgressBar {
            x,
            y,
            width,
            height,
            progress,
            background,
            fill,
        });
    }

    fn fill_gradient(&mut self, gradient: &Gradient) {
        self.calls.push(DrawCall::Gradient(gradient.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut rec = RecordingRenderer::new();
        rec.fill_gradient(&Gradient::linear((0.0, 0.0), (1.0, 1.0), Colour::BLACK, Colour::WHITE));
        rec.draw_circle(1.0, 2.0, 3.0, Colour::BLACK, None);
        rec.draw_progress_bar(0.0, 0.0, 10.0, 2.0, 40.0, Colour::WHITE, Colour::BLACK);
        rec.draw_text("hello", 0.0, 0.0, &TextStyle::new(12.0, Colour::BLACK));

        assert_eq!(rec.calls().len(), 4);
        assert!(matches!(rec.calls()[0], DrawCall::Gradient(_)));
        assert_eq!(rec.circle_count(), 1);
        assert_eq!(rec.progress_values(), vec![40.0]);
        assert_eq!(rec.texts(), vec!["hello"]);
    }

    #[test]
    fn test_draw_text_reports_wrapped_line_count() {
        let mut rec = RecordingRenderer::new();
        let style = TextStyle::new(10.0, Colour::BLACK).max_width(30.0);
        assert_eq!(rec.draw_text("aaaa bbbb cccc", 0.0, 0.0, &style), 3);
        assert_eq!(rec.calls().len(), 1);
    }

    #[test]
    fn test_colours_of_call() {
        let call = DrawCall::Circle {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            fill: Colour::WHITE,
            stroke: Some(Stroke::new(Colour::BLACK, 1.0)),
        };
        assert_eq!(call.colours(), vec![Colour::WHITE, Colour::BLACK]);
    }
}
