//! Rendering module for cards.
//!
//! Surfaces, the drawing primitives composers are written against, and the
//! two primitives backends (raster and recording).

mod fonts;
mod primitives;
mod raster;
mod recorder;
mod surface;
mod text;

pub use fonts::FontConfig;
pub use primitives::{progress_fill_width, Gradient, GradientStop, Primitives, Stroke};
pub use raster::RasterRenderer;
pub use recorder::{DrawCall, RecordingRenderer};
pub use surface::{Surface, MAX_DIMENSION};
pub use text::{layout_lines, wrap_lines, FontWeight, TextAlign, TextStyle, LINE_HEIGHT};
