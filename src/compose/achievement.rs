//! Achievement layout: a large trophy badge with a soft glow behind it.

use crate::render::{Gradient, Primitives, Stroke, TextStyle};
use crate::types::{CardCanvasOptions, CardGenerationData};

use super::{content_width, draw_optional, overflow, PADDING};

const BADGE_RADIUS: f32 = 80.0;
const TROPHY_GLYPH: &str = "🏆";

pub(super) fn compose(canvas: &mut dyn Primitives, data: &CardGenerationData, options: &CardCanvasOptions) {
    let scheme = &data.color_scheme;
    let (w, h) = (options.width_f(), options.height_f());
    let cx = options.center_x();
    let badge_y = h * 0.35;

    canvas.fill_gradient(&Gradient::radial(
        (cx, badge_y),
        w * 0.6,
        scheme.primary.with_alpha(0.25),
        scheme.primary.with_alpha(0.0),
    ));

    canvas.draw_circle(
        cx,
        badge_y,
        BADGE_RADIUS,
        scheme.primary,
        Some(Stroke::new(scheme.accent, 4.0)),
    );
    canvas.draw_text(
        TROPHY_GLYPH,
        cx,
        badge_y + 22.0,
        &TextStyle::new(64.0, scheme.background).centered(),
    );

    let text_width = content_width(options, PADDING / 2.0);
    let title_style = TextStyle::new(28.0, scheme.text).bold().centered().max_width(text_width);
    let lines = canvas.draw_text(&data.title, cx, h * 0.65, &title_style);
    let mut shift = overflow(lines, &title_style);

    let subtitle_style = TextStyle::new(18.0, scheme.text_secondary).centered().max_width(text_width);
    let lines = draw_optional(canvas, data.subtitle(), cx, h * 0.72 + shift, &subtitle_style);
    shift += overflow(lines, &subtitle_style);

    let note_width = content_width(options, PADDING * 0.75);
    let description_style = TextStyle::new(14.0, scheme.text).centered().max_width(note_width);
    let lines = draw_optional(canvas, data.description(), cx, h * 0.82 + shift, &description_style);
    shift += overflow(lines, &description_style);

    draw_optional(
        canvas,
        data.custom_text(),
        cx,
        h * 0.92 + shift,
        &TextStyle::new(14.0, scheme.accent).bold().centered().max_width(note_width),
    );
}
