//! Pixel-producing primitives backed by tiny-skia and cosmic-text.

use cosmic_text::{
    Attrs, Buffer, Command, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, Weight,
};
use tiny_skia::{ColorU8, FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Transform};

use crate::types::Colour;

use super::primitives::{progress_fill_width, Gradient, Primitives, Stroke};
use super::surface::Surface;
use super::text::{FontWeight, TextStyle};

/// Draws primitives onto a [`Surface`].
///
/// Text is shaped with cosmic-text and each glyph outline is filled as a
/// vector path. Glyphs without outlines (bitmap colour emoji) are rasterised
/// by swash and composited instead. With an empty font database, widths are
/// estimated and no glyphs are painted.
pub struct RasterRenderer<'s> {
    surface: &'s mut Surface,
    font_system: Option<FontSystem>,
    swash_cache: SwashCache,
}

impl<'s> RasterRenderer<'s> {
    /// Wrap `surface`, taking ownership of a copy of the font database.
    pub fn new(surface: &'s mut Surface, fonts: fontdb::Database) -> Self {
        let font_system = if fonts.is_empty() {
            log::debug!(target: "cards", "no font faces available; text will not be painted");
            None
        } else {
            Some(FontSystem::new_with_locale_and_db("en".to_string(), fonts))
        };

        Self {
            surface,
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    /// Whether text is shaped with real fonts.
    pub fn has_fonts(&self) -> bool {
        self.font_system.is_some()
    }
}

fn paint(color: Colour) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color(color.into());
    paint
}

fn shape(font_system: &mut FontSystem, text: &str, style: &TextStyle) -> Buffer {
    let family = match style.font_family.as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        name => Family::Name(name),
    };
    let weight = match style.font_weight {
        FontWeight::Normal => Weight::NORMAL,
        FontWeight::Bold => Weight::BOLD,
    };
    let attrs = Attrs::new().family(family).weight(weight);

    let metrics = Metrics::new(style.font_size, style.line_advance());
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Glyph outline as a path in font units, flipped to y-down.
fn outline_path(commands: &[Command]) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for cmd in commands {
        match cmd {
            Command::MoveTo(p) => builder.move_to(p.x, -p.y),
            Command::LineTo(p) => builder.line_to(p.x, -p.y),
            Command::QuadTo(ctrl, end) => builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y),
            Command::CurveTo(c1, c2, end) => builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y),
            Command::Close => builder.close(),
        }
    }
    builder.finish()
}

/// Premultiplied pixmap for a rasterised glyph.
///
/// `Mask` images are alpha coverage tinted with `color`; `Color` images are
/// straight RGBA. Subpixel masks are not requested and yield `None`.
fn glyph_pixmap(content: SwashContent, width: u32, height: u32, data: &[u8], color: Colour) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let pixels = pixmap.pixels_mut();

    match content {
        SwashContent::Mask => {
            if data.len() < pixels.len() {
                return None;
            }
            for (pixel, &coverage) in pixels.iter_mut().zip(data) {
                let alpha = (coverage as u16 * color.a as u16 / 255) as u8;
                *pixel = ColorU8::from_rgba(color.r, color.g, color.b, alpha).premultiply();
            }
        }
        SwashContent::Color => {
            if data.len() < pixels.len() * 4 {
                return None;
            }
            for (pixel, rgba) in pixels.iter_mut().zip(data.chunks_exact(4)) {
                *pixel = ColorU8::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3]).premultiply();
            }
        }
        SwashContent::SubpixelMask => return None,
    }

    Some(pixmap)
}

fn line_width(buffer: &Buffer) -> f32 {
    buffer
        .layout_runs()
        .fold(0.0_f32, |width, run| width.max(run.line_w))
}

impl Primitives for RasterRenderer<'_> {
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f32 {
        match self.font_system.as_mut() {
            Some(font_system) => line_width(&shape(font_system, text, style)),
            None => style.fallback_width(text),
        }
    }

    fn fill_text_line(&mut self, line: &str, x: f32, y: f32, style: &TextStyle) {
        log::debug!(target: "cards", "text {:?} at ({}, {})", line, x, y);
        let Some(font_system) = self.font_system.as_mut() else {
            return;
        };

        let buffer = shape(font_system, line, style);
        let base_x = x + style.align.offset(line_width(&buffer));
        let paint = paint(style.color);
        let pixmap = self.surface.pixmap_mut();

        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((base_x, y), 1.0);
                let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = y + glyph.y - glyph.font_size * glyph.y_offset;

                let key = physical.cache_key;
                let outline = self
                    .swash_cache
                    .get_outline_commands(font_system, key)
                    .map(outline_path);

                match outline {
                    Some(Some(path)) => pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        Transform::from_translate(glyph_x, glyph_y),
                        None,
                    ),
                    // Blank glyph such as a space.
                    Some(None) => {}
                    None => {
                        let Some(image) = self.swash_cache.get_image(font_system, key) else {
                            log::debug!(target: "cards", "glyph {} has no outline or image", glyph.glyph_id);
                            continue;
                        };
                        let placement = image.placement;
                        let Some(bitmap) =
                            glyph_pixmap(image.content, placement.width, placement.height, &image.data, style.color)
                        else {
                            continue;
                        };
                        pixmap.draw_pixmap(
                            physical.x + placement.left,
                            physical.y - placement.top,
                            bitmap.as_ref(),
                            &PixmapPaint::default(),
                            Transform::identity(),
                            None,
                        );
                    }
                }
            }
        }
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: Colour, stroke: Option<Stroke>) {
        log::debug!(target: "cards", "circle ({}, {}) r={}", x, y, radius);
        let Some(path) = PathBuilder::from_circle(x, y, radius) else {
            return;
        };
        let pixmap = self.surface.pixmap_mut();

        pixmap.fill_path(&path, &paint(fill), FillRule::Winding, Transform::identity(), None);

        if let Some(stroke) = stroke.filter(|s| s.width > 0.0) {
            let line = tiny_skia::Stroke {
                width: stroke.width,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint(stroke.color), &line, Transform::identity(), None);
        }
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
        log::debug!(target: "cards", "progress bar ({}, {}) {}x{} at {}%", x, y, width, height, progress);
        let pixmap = self.surface.pixmap_mut();

        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            pixmap.fill_rect(rect, &paint(background), Transform::identity(), None);
        }

        let fill_width = progress_fill_width(width, progress);
        if fill_width > 0.0 {
            if let Some(rect) = Rect::from_xywh(x, y, fill_width, height) {
                pixmap.fill_rect(rect, &paint(fill), Transform::identity(), None);
            }
        }
    }

    fn fill_gradient(&mut self, gradient: &Gradient) {
        let stops: Vec<tiny_skia::GradientStop> = gradient
            .stops()
            .iter()
            .map(|stop| tiny_skia::GradientStop::new(stop.offset, stop.color.into()))
            .collect();

        let shader = match gradient {
            Gradient::Linear { start, end, .. } => tiny_skia::LinearGradient::new(
                tiny_skia::Point::from_xy(start.0, start.1),
                tiny_skia::Point::from_xy(end.0, end.1),
                stops,
                tiny_skia::SpreadMode::Pad,
                Transform::identity(),
            ),
            Gradient::Radial { center, radius, .. } => {
                let center = tiny_skia::Point::from_xy(center.0, center.1);
                tiny_skia::RadialGradient::new(
                    center,
                    center,
                    *radius,
                    stops,
                    tiny_skia::SpreadMode::Pad,
                    Transform::identity(),
                )
            }
        };
        let Some(shader) = shader else {
            return;
        };

        let pixmap = self.surface.pixmap_mut();
        let Some(rect) = Rect::from_xywh(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32) else {
            return;
        };
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Default::default()
        };
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}
