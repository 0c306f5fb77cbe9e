//! PNG encoding and data URIs.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, RgbaImage};

use crate::error::{CardError, Result};
use crate::render::Surface;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A finished card image. Ownership passes to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl EncodedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encoded PNG bytes.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// Self-contained `data:image/png;base64,...` URI.
    pub fn data_uri(&self) -> String {
        format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(&self.png))
    }
}

/// Encode a finished surface as PNG.
pub fn encode(surface: &Surface) -> Result<EncodedImage> {
    let (width, height) = (surface.width(), surface.height());
    let img = RgbaImage::from_raw(width, height, surface.to_rgba_buffer()).ok_or_else(|| {
        CardError::Encode {
            message: format!("pixel buffer does not match {}x{}", width, height),
        }
    })?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| CardError::Encode {
            message: format!("Failed to write PNG: {}", e),
        })?;

    log::debug!(target: "cards", "encoded {}x{} card ({} bytes)", width, height, png.len());
    Ok(EncodedImage { width, height, png })
}

/// Decode the payload of a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let invalid = |message: String| CardError::Parse {
        message,
        help: Some("Expected data:<mime>;base64,<payload>".to_string()),
    };

    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| invalid("Not a data URI".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("Data URI has no payload".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(invalid(format!("Data URI is not base64 encoded: {}", header)));
    }

    STANDARD
        .decode(payload)
        .map_err(|e| invalid(format!("Invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardCanvasOptions, CardColorScheme, CardTemplate, Colour};

    fn surface() -> Surface {
        let template = CardTemplate::new("celebration", "c").with_dimensions(4, 2);
        let mut options = CardCanvasOptions::from_template(&template, &CardColorScheme::default());
        options.background_color = Colour::rgb(255, 0, 0);
        Surface::create(&options).unwrap()
    }

    #[test]
    fn test_encode_reads_back() {
        let encoded = encode(&surface()).unwrap();
        assert_eq!((encoded.width(), encoded.height()), (4, 2));

        let img = image::load_from_memory(encoded.png()).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(3, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode(&surface()).unwrap(), encode(&surface()).unwrap());
    }

    #[test]
    fn test_data_uri_round_trip() {
        let encoded = encode(&surface()).unwrap();
        let uri = encoded.data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), encoded.png());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_data_uri("image/png;base64,AAAA").is_err());
        assert!(decode_data_uri("data:image/png;base64").is_err());
        assert!(decode_data_uri("data:text/plain,hello").is_err());
        assert!(decode_data_uri("data:image/png;base64,@@@").is_err());
    }
}
