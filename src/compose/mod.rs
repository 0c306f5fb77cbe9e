//! Template composers.
//!
//! Each composer arranges primitive calls into one fixed card layout. They
//! are pure functions over [`Primitives`]: the only side effect is the calls
//! they issue, and they read colours only from the card's colour scheme.

mod achievement;
mod celebration;
mod family;
mod progress;

use crate::render::{Primitives, TextStyle};
use crate::types::{CardCanvasOptions, CardGenerationData, TemplateKind};

/// Horizontal inset used by every layout.
pub(crate) const PADDING: f32 = 40.0;

/// Paint a complete card of layout `kind` onto `canvas`.
pub fn compose(
    kind: TemplateKind,
    canvas: &mut dyn Primitives,
    data: &CardGenerationData,
    options: &CardCanvasOptions,
) {
    log::debug!(target: "cards", "composing {} card {:?}", kind, data.title);
    match kind {
        TemplateKind::Celebration => celebration::compose(canvas, data, options),
        TemplateKind::Progress => progress::compose(canvas, data, options),
        TemplateKind::Achievement => achievement::compose(canvas, data, options),
        TemplateKind::Family => family::compose(canvas, data, options),
    }
}

/// Draw `text` when the optional field is present. Returns the lines drawn.
pub(crate) fn draw_optional(
    canvas: &mut dyn Primitives,
    text: Option<&str>,
    x: f32,
    y: f32,
    style: &TextStyle,
) -> usize {
    match text {
        Some(text) => canvas.draw_text(text, x, y, style),
        None => 0,
    }
}

/// Height taken by wrapped lines beyond the first. Elements laid out below a
/// text block move down by this much.
pub(crate) fn overflow(lines: usize, style: &TextStyle) -> f32 {
    lines.saturating_sub(1) as f32 * style.line_advance()
}

/// Text width available between the side paddings.
pub(crate) fn content_width(options: &CardCanvasOptions, inset: f32) -> f32 {
    (options.width_f() - 2.0 * inset).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{layout_lines, DrawCall, RecordingRenderer};
    use crate::types::{CardTemplate, Colour};
    use pretty_assertions::assert_eq;

    fn full_data() -> CardGenerationData {
        CardGenerationData::new("First $500 Saved!")
            .with_subtitle("Family Vacation Fund")
            .with_description("Great progress! Only a few more months of saving to go.")
            .with_custom_text("Beach, here we come")
            .with_progress(50.0)
            .with_members(4)
    }

    fn record(kind: TemplateKind, data: &CardGenerationData) -> Vec<DrawCall> {
        let template = CardTemplate::new(kind.id(), "t");
        let options = CardCanvasOptions::from_template(&template, &data.color_scheme);
        let mut rec = RecordingRenderer::new();
        compose(kind, &mut rec, data, &options);
        rec.into_calls()
    }

    fn texts(calls: &[DrawCall]) -> Vec<String> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_layout_draws_all_populated_fields() {
        let data = full_data();
        for kind in TemplateKind::ALL {
            let texts = texts(&record(kind, &data));
            for expected in [
                "First $500 Saved!",
                "Family Vacation Fund",
                "Great progress! Only a few more months of saving to go.",
                "Beach, here we come",
            ] {
                assert!(texts.iter().any(|t| t == expected), "{} missing {:?}", kind, expected);
            }
        }
    }

    #[test]
    fn test_absent_fields_shrink_element_set() {
        let full = full_data();
        let bare = CardGenerationData::new("First $500 Saved!")
            .with_progress(50.0)
            .with_members(4);

        for kind in TemplateKind::ALL {
            let full_calls = record(kind, &full);
            let bare_calls = record(kind, &bare);
            assert_eq!(full_calls.len() - bare_calls.len(), 3, "{}", kind);

            let bare_texts = texts(&bare_calls);
            assert!(!bare_texts.iter().any(|t| t.is_empty()), "{} drew a placeholder", kind);
            assert!(!bare_texts.contains(&"Family Vacation Fund".to_string()));
        }
    }

    #[test]
    fn test_layouts_only_use_scheme_colours() {
        let data = full_data();
        let scheme = data.color_scheme;
        let slots = [
            scheme.background,
            scheme.text,
            scheme.text_secondary,
            scheme.primary,
            scheme.secondary,
            scheme.accent,
        ];
        let opaque = |c: Colour| c.with_alpha(1.0);

        for kind in TemplateKind::ALL {
            for call in record(kind, &data) {
                for colour in call.colours() {
                    assert!(
                        slots.iter().any(|s| opaque(*s) == opaque(colour)),
                        "{} used foreign colour {}",
                        kind,
                        colour
                    );
                }
            }
        }
    }

    #[test]
    fn test_composition_is_deterministic() {
        let data = full_data();
        for kind in TemplateKind::ALL {
            assert_eq!(record(kind, &data), record(kind, &data));
        }
    }

    #[test]
    fn test_layouts_differ() {
        let data = full_data();
        let celebration = record(TemplateKind::Celebration, &data);
        for kind in [TemplateKind::Progress, TemplateKind::Achievement, TemplateKind::Family] {
            assert_ne!(record(kind, &data), celebration, "{}", kind);
        }
    }

    /// (first baseline, last baseline) of each text block, in draw order.
    fn text_blocks(calls: &[DrawCall]) -> Vec<(String, f32, f32)> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, y, style, .. } => {
                    let lines = layout_lines(text, style, |s| style.fallback_width(s)).len();
                    Some((text.clone(), *y, *y + overflow(lines, style)))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_wrapped_text_pushes_following_elements_down() {
        let title = "Our family finally saved enough for the big summer camping trip";
        let data = CardGenerationData::new(title)
            .with_subtitle("Every single week of skipped takeaway dinners added up nicely")
            .with_description("Great progress! Only a few more months of saving to go.")
            .with_custom_text("Beach, here we come")
            .with_progress(50.0);

        for kind in TemplateKind::ALL {
            let calls = record(kind, &data);
            let blocks = text_blocks(&calls);

            let (_, first, last) = blocks.iter().find(|(t, ..)| t == title).cloned().unwrap();
            assert!(last > first, "{} title should wrap", kind);

            for pair in blocks.windows(2) {
                assert!(
                    pair[1].1 > pair[0].2,
                    "{}: {:?} at {} overlaps {:?} ending at {}",
                    kind,
                    pair[1].0,
                    pair[1].1,
                    pair[0].0,
                    pair[0].2
                );
            }

            if kind == TemplateKind::Progress {
                let bar_y = calls
                    .iter()
                    .find_map(|c| match c {
                        DrawCall::ProgressBar { y, .. } => Some(*y),
                        _ => None,
                    })
                    .unwrap();
                let subtitle_end = blocks[1].2;
                assert!(bar_y > subtitle_end, "bar at {} inside subtitle ending at {}", bar_y, subtitle_end);
            }
        }
    }

    #[test]
    fn test_overflow() {
        let style = TextStyle::new(20.0, Colour::BLACK);
        assert_eq!(overflow(0, &style), 0.0);
        assert_eq!(overflow(1, &style), 0.0);
        assert!((overflow(3, &style) - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_content_width_never_negative() {
        let template = CardTemplate::new("progress", "p").with_dimensions(50, 50);
        let options = CardCanvasOptions::from_template(&template, &Default::default());
        assert_eq!(content_width(&options, PADDING), 1.0);
        let template = CardTemplate::new("progress", "p");
        let options = CardCanvasOptions::from_template(&template, &Default::default());
        assert_eq!(content_width(&options, PADDING), 320.0);
    }
}
