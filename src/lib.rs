//! cards - Shareable milestone card renderer
//!
//! Turns milestone data (title, progress, family members, colour scheme)
//! into a square PNG card using one of four layouts, and exports it as a
//! data URI, a saved file, or a clipboard image.

pub mod cli;
pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod types;

pub use config::CardsConfig;
pub use engine::CardRenderer;
pub use error::{CardError, ClipboardError, Result};
pub use export::{
    card_filename, copy_to_clipboard, decode_data_uri, download, encode, ClipboardHost,
    EncodedImage, SystemClipboard,
};
pub use render::{DrawCall, FontConfig, Gradient, Primitives, RasterRenderer, RecordingRenderer, Surface};
pub use types::{
    BuiltinTemplates, CardCanvasOptions, CardColorScheme, CardGenerationData, CardTemplate, Colour,
    FamilyData, MilestoneData, Progress, TemplateKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use futures::executor::block_on;
    use tempfile::tempdir;

    struct UnavailableClipboard;

    impl ClipboardHost for UnavailableClipboard {
        fn write_image(&self, _png: Vec<u8>) -> impl Future<Output = std::result::Result<(), ClipboardError>> + Send {
            std::future::ready(Err(ClipboardError::Unsupported("headless".to_string())))
        }
    }

    #[test]
    fn test_render_then_export_both_sinks() {
        let data = CardGenerationData::new("First $500 Saved!").with_progress(50.0);
        let template = BuiltinTemplates::get("progress").unwrap();
        let image = CardRenderer::without_fonts().render(&data, &template).unwrap();
        let uri = image.data_uri();

        let clipboard = block_on(copy_to_clipboard(&uri, &UnavailableClipboard));
        assert!(matches!(clipboard, Err(ClipboardError::Unsupported(_))));

        let dir = tempdir().unwrap();
        let name = card_filename(&data.title, &template.id);
        let path = download(&uri, &name, dir.path()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), image.png());
        assert_eq!(decode_data_uri(&uri).unwrap(), image.into_png());
    }
}
