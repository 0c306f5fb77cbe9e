//! Family layout: a family badge flanked by two decorative circles.

use crate::render::{Gradient, Primitives, TextStyle};
use crate::types::{CardCanvasOptions, CardGenerationData};

use super::{content_width, draw_optional, overflow, PADDING};

const BADGE_RADIUS: f32 = 60.0;
const FAMILY_GLYPH: &str = "👨‍👩‍👧‍👦";

/// Offset of the two decorative circles from the badge centre.
const ORBIT_OFFSET: f32 = 50.0;

pub(super) fn compose(canvas: &mut dyn Primitives, data: &CardGenerationData, options: &CardCanvasOptions) {
    let scheme = &data.color_scheme;
    let (w, h) = (options.width_f(), options.height_f());
    let cx = options.center_x();

    canvas.fill_gradient(&Gradient::radial(
        (cx, h / 2.0),
        w.max(h) / 2.0,
        scheme.primary.with_alpha(0.2),
        scheme.primary.with_alpha(0.05),
    ));

    let text_width = content_width(options, PADDING / 2.0);
    let title_style = TextStyle::new(28.0, scheme.text).bold().centered().max_width(text_width);
    let lines = canvas.draw_text(&data.title, cx, h * 0.15, &title_style);
    let mut shift = overflow(lines, &title_style);

    let subtitle_style = TextStyle::new(16.0, scheme.text_secondary).centered().max_width(text_width);
    let lines = draw_optional(canvas, data.subtitle(), cx, h * 0.22 + shift, &subtitle_style);
    shift += overflow(lines, &subtitle_style);

    let badge_y = h * 0.48 + shift;
    canvas.draw_circle(cx, badge_y, BADGE_RADIUS, scheme.primary, None);
    canvas.draw_circle(cx + ORBIT_OFFSET, badge_y - ORBIT_OFFSET, 20.0, scheme.secondary, None);
    canvas.draw_circle(cx - ORBIT_OFFSET, badge_y + ORBIT_OFFSET, 15.0, scheme.accent, None);
    canvas.draw_text(
        FAMILY_GLYPH,
        cx,
        badge_y + 14.0,
        &TextStyle::new(40.0, scheme.background).centered(),
    );

    let note_width = content_width(options, PADDING * 0.75);
    let description_style = TextStyle::new(16.0, scheme.text).centered().max_width(note_width);
    let lines = draw_optional(canvas, data.description(), cx, h * 0.75 + shift, &description_style);
    shift += overflow(lines, &description_style);

    draw_optional(
        canvas,
        data.custom_text(),
        cx,
        h * 0.87 + shift,
        &TextStyle::new(16.0, scheme.accent).bold().centered().max_width(note_width),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingRenderer};
    use crate::types::CardTemplate;

    #[test]
    fn test_decorations_orbit_badge() {
        let data = CardGenerationData::new("Together");
        let options = CardCanvasOptions::from_template(&CardTemplate::new("family", "f"), &data.color_scheme);
        let mut rec = RecordingRenderer::new();
        compose(&mut rec, &data, &options);

        let circles: Vec<(f32, f32, f32)> = rec
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { x, y, radius, .. } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 3);

        let (bx, by, _) = circles[0];
        let (tx, ty, _) = circles[1];
        let (lx, ly, _) = circles[2];
        assert!(tx > bx && ty < by, "first decoration should sit top-right");
        assert!(lx < bx && ly > by, "second decoration should sit bottom-left");
    }
}
