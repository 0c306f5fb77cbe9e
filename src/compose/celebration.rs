//! Celebration layout: a centred badge framed by title and notes.

use crate::render::{Gradient, Primitives, TextStyle};
use crate::types::{CardCanvasOptions, CardGenerationData};

use super::{content_width, draw_optional, overflow, PADDING};

const BADGE_RADIUS: f32 = 60.0;
const BADGE_GLYPH: &str = "🎉";

pub(super) fn compose(canvas: &mut dyn Primitives, data: &CardGenerationData, options: &CardCanvasOptions) {
    let scheme = &data.color_scheme;
    let (w, h) = (options.width_f(), options.height_f());
    let cx = options.center_x();
    let text_width = content_width(options, PADDING / 2.0);

    canvas.fill_gradient(&Gradient::radial(
        (cx, h / 2.0),
        w.max(h) / 2.0,
        scheme.primary.with_alpha(0.2),
        scheme.secondary.with_alpha(0.1),
    ));

    let title_style = TextStyle::new(32.0, scheme.text).bold().centered().max_width(text_width);
    let lines = canvas.draw_text(&data.title, cx, h * 0.2, &title_style);
    let mut shift = overflow(lines, &title_style);

    let subtitle_style = TextStyle::new(18.0, scheme.text_secondary).centered().max_width(text_width);
    let lines = draw_optional(canvas, data.subtitle(), cx, h * 0.28 + shift, &subtitle_style);
    shift += overflow(lines, &subtitle_style);

    let badge_y = h * 0.5 + shift;
    canvas.draw_circle(cx, badge_y, BADGE_RADIUS, scheme.primary, None);
    canvas.draw_text(
        BADGE_GLYPH,
        cx,
        badge_y + 16.0,
        &TextStyle::new(48.0, scheme.background).centered(),
    );

    let note_width = content_width(options, PADDING * 0.75);
    let description_style = TextStyle::new(16.0, scheme.text).centered().max_width(note_width);
    let lines = draw_optional(canvas, data.description(), cx, h * 0.72 + shift, &description_style);
    shift += overflow(lines, &description_style);

    draw_optional(
        canvas,
        data.custom_text(),
        cx,
        h * 0.85 + shift,
        &TextStyle::new(16.0, scheme.accent).bold().centered().max_width(note_width),
    );
}
