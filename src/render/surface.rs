//! Off-screen drawing surfaces.

use tiny_skia::Pixmap;

use crate::error::{CardError, Result};
use crate::types::{CardCanvasOptions, Colour};

/// Largest width or height a card surface may have.
pub const MAX_DIMENSION: u32 = 8192;

/// An RGBA raster surface owned by a single render call.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a `width x height` surface filled with the background colour.
    pub fn create(options: &CardCanvasOptions) -> Result<Self> {
        let (width, height) = (options.width, options.height);
        let unavailable = || CardError::SurfaceUnavailable { width, height };

        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(unavailable());
        }

        let mut pixmap = Pixmap::new(width, height).ok_or_else(unavailable)?;
        pixmap.fill(options.background_color.into());
        log::debug!(target: "cards", "surface {}x{} bg {}", width, height, options.background_color);

        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Colour of the pixel at `(x, y)`, with straight alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Colour::new(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Flat straight-alpha RGBA buffer, row-major.
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixmap.data().len());
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            buffer.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        buffer
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardColorScheme, CardTemplate};

    fn options(width: u32, height: u32) -> CardCanvasOptions {
        let template = CardTemplate::new("celebration", "C").with_dimensions(width, height);
        CardCanvasOptions::from_template(&template, &CardColorScheme::default())
    }

    #[test]
    fn test_create_fills_background() {
        let mut opts = options(8, 4);
        opts.background_color = Colour::rgb(10, 20, 30);
        let surface = Surface::create(&opts).unwrap();

        assert_eq!((surface.width(), surface.height()), (8, 4));
        assert_eq!(surface.pixel(0, 0), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(surface.pixel(7, 3), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn test_rgba_buffer_size() {
        let surface = Surface::create(&options(5, 3)).unwrap();
        assert_eq!(surface.to_rgba_buffer().len(), 5 * 3 * 4);
    }

    #[test]
    fn test_zero_dimensions_unavailable() {
        let err = Surface::create(&options(0, 400)).err().unwrap();
        assert!(matches!(err, CardError::SurfaceUnavailable { width: 0, height: 400 }));
    }

    #[test]
    fn test_oversized_unavailable() {
        assert!(Surface::create(&options(MAX_DIMENSION + 1, 10)).is_err());
    }
}
