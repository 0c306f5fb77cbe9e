//! Template dispatch: card data in, encoded image out.

use crate::compose::compose;
use crate::error::{CardError, Result};
use crate::export::{encode, EncodedImage};
use crate::render::{FontConfig, Primitives, RasterRenderer, Surface};
use crate::types::{CardCanvasOptions, CardGenerationData, CardTemplate, TemplateKind};

/// Renders cards. Holds only an immutable font database, so one renderer
/// can serve concurrent renders; each render allocates its own surface.
#[derive(Clone)]
pub struct CardRenderer {
    fonts: fontdb::Database,
}

impl CardRenderer {
    /// Create a renderer with fonts from `config`.
    pub fn new(config: &FontConfig) -> Self {
        Self {
            fonts: config.load(),
        }
    }

    /// Renderer without any fonts. Layout still runs; glyphs are not painted.
    pub fn without_fonts() -> Self {
        Self {
            fonts: fontdb::Database::new(),
        }
    }

    /// Render `data` with `template` and encode the result as PNG.
    ///
    /// Unknown template ids render with the celebration layout. Any failure
    /// is returned as [`CardError::Render`] wrapping the original cause.
    pub fn render(&self, data: &CardGenerationData, template: &CardTemplate) -> Result<EncodedImage> {
        let surface = self.render_surface(data, template)?;
        encode(&surface).map_err(|e| CardError::render(&template.id, e))
    }

    /// Render onto a fresh surface without encoding.
    pub fn render_surface(&self, data: &CardGenerationData, template: &CardTemplate) -> Result<Surface> {
        let options = CardCanvasOptions::from_template(template, &data.color_scheme);
        let mut surface = Surface::create(&options).map_err(|e| CardError::render(&template.id, e))?;

        let mut renderer = RasterRenderer::new(&mut surface, self.fonts.clone());
        Self::compose_into(&mut renderer, data, template);

        Ok(surface)
    }

    /// Run the composer selected by `template` against any primitives backend.
    pub fn compose_into(canvas: &mut dyn Primitives, data: &CardGenerationData, template: &CardTemplate) {
        let kind = template.kind();
        if TemplateKind::lookup(&template.id).is_none() {
            log::debug!(target: "cards", "unknown template {:?}, using {}", template.id, kind);
        }
        let options = CardCanvasOptions::from_template(template, &data.color_scheme);
        compose(kind, canvas, data, &options);
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(&FontConfig::default())
    }
}
