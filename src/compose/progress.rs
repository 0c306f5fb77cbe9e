//! Progress layout: left-aligned headline, a goal progress bar and a row of
//! family avatars.

use crate::render::{Gradient, Primitives, Stroke, TextAlign, TextStyle};
use crate::types::{CardCanvasOptions, CardGenerationData};

use super::{content_width, draw_optional, overflow, PADDING};

const BAR_HEIGHT: f32 = 20.0;
const AVATAR_RADIUS: f32 = 20.0;
const AVATAR_SPACING: f32 = 50.0;
const MAX_AVATARS: u32 = 5;

pub(super) fn compose(canvas: &mut dyn Primitives, data: &CardGenerationData, options: &CardCanvasOptions) {
    let scheme = &data.color_scheme;
    let (w, h) = (options.width_f(), options.height_f());
    let text_width = content_width(options, PADDING);

    canvas.fill_gradient(&Gradient::linear(
        (0.0, 0.0),
        (w, h),
        scheme.primary.with_alpha(0.1),
        scheme.secondary.with_alpha(0.1),
    ));

    let title_style = TextStyle::new(28.0, scheme.text).bold().max_width(text_width);
    let lines = canvas.draw_text(&data.title, PADDING, h * 0.15, &title_style);
    let mut shift = overflow(lines, &title_style);

    let subtitle_style = TextStyle::new(16.0, scheme.text_secondary).max_width(text_width);
    let lines = draw_optional(canvas, data.subtitle(), PADDING, h * 0.22 + shift, &subtitle_style);
    shift += overflow(lines, &subtitle_style);

    let progress = data.progress();
    let bar_y = h * 0.4 + shift;
    canvas.draw_progress_bar(
        PADDING,
        bar_y,
        text_width,
        BAR_HEIGHT,
        progress.value(),
        scheme.text_secondary.with_alpha(0.2),
        scheme.primary,
    );
    canvas.draw_text(
        &progress.label(),
        w - PADDING,
        bar_y - 10.0,
        &TextStyle::new(20.0, scheme.primary).bold().align(TextAlign::Right),
    );

    let description_style = TextStyle::new(16.0, scheme.text).max_width(text_width);
    let lines = draw_optional(canvas, data.description(), PADDING, h * 0.6 + shift, &description_style);
    shift += overflow(lines, &description_style);

    draw_optional(
        canvas,
        data.custom_text(),
        PADDING,
        h * 0.7 + shift,
        &TextStyle::new(14.0, scheme.accent).bold().max_width(text_width),
    );

    let avatars = data.family_data.member_count.min(MAX_AVATARS);
    let row_y = h - 60.0;
    for (i, x) in avatar_positions(options.center_x(), avatars).enumerate() {
        log::debug!(target: "cards", "avatar {} of {}", i + 1, avatars);
        canvas.draw_circle(
            x,
            row_y,
            AVATAR_RADIUS,
            scheme.secondary,
            Some(Stroke::new(scheme.background, 2.0)),
        );
    }
}

/// Centres of `count` evenly spaced avatars centred on `center_x`.
fn avatar_positions(center_x: f32, count: u32) -> impl Iterator<Item = f32> {
    let start = center_x - (count.saturating_sub(1) as f32 * AVATAR_SPACING) / 2.0;
    (0..count).map(move |i| start + i as f32 * AVATAR_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingRenderer};
    use crate::types::CardTemplate;

    fn record(data: &CardGenerationData) -> RecordingRenderer {
        let options = CardCanvasOptions::from_template(&CardTemplate::new("progress", "p"), &data.color_scheme);
        let mut rec = RecordingRenderer::new();
        compose(&mut rec, data, &options);
        rec
    }

    #[test]
    fn test_avatar_positions_centred() {
        let xs: Vec<f32> = avatar_positions(200.0, 3).collect();
        assert_eq!(xs, vec![150.0, 200.0, 250.0]);
        let xs: Vec<f32> = avatar_positions(200.0, 1).collect();
        assert_eq!(xs, vec![200.0]);
        assert_eq!(avatar_positions(200.0, 0).count(), 0);
    }

    #[test]
    fn test_bar_receives_clamped_progress() {
        let rec = record(&CardGenerationData::new("Saved").with_progress(50.0));
        assert_eq!(rec.progress_values(), vec![50.0]);
        assert!(rec.texts().contains(&"50%"));

        let rec = record(&CardGenerationData::new("Saved").with_progress(180.0));
        assert_eq!(rec.progress_values(), vec![100.0]);
    }

    #[test]
    fn test_bar_geometry() {
        let rec = record(&CardGenerationData::new("Saved").with_progress(25.0));
        let bar = rec
            .calls()
            .iter()
            .find(|c| matches!(c, DrawCall::ProgressBar { .. }))
            .unwrap();
        match bar {
            DrawCall::ProgressBar { x, y, width, height, .. } => {
                assert_eq!((*x, *y, *width, *height), (PADDING, 160.0, 320.0, BAR_HEIGHT));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_avatar_row_capped_and_omitted() {
        assert_eq!(record(&CardGenerationData::new("x").with_members(3)).circle_count(), 3);
        assert_eq!(record(&CardGenerationData::new("x").with_members(12)).circle_count(), 5);
        assert_eq!(record(&CardGenerationData::new("x").with_members(0)).circle_count(), 0);
    }

    #[test]
    fn test_label_right_aligned() {
        let rec = record(&CardGenerationData::new("x").with_progress(10.0));
        let label = rec.calls().iter().find_map(|c| match c {
            DrawCall::Text { text, x, style, .. } if text == "10%" => Some((*x, style.align)),
            _ => None,
        });
        assert_eq!(label, Some((360.0, TextAlign::Right)));
    }
}
