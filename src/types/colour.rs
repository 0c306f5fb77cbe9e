//! Colour type and parsing.
//!
//! Card colour schemes arrive as CSS-style strings. They are parsed once into
//! [`Colour`] and every translucent variant a composer needs is derived with
//! [`Colour::with_alpha`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a colour string.
    ///
    /// Supports formats:
    /// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional)
    /// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `0.0..=1.0`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return Self::from_functional(s, args);
        }
        Self::from_hex(s)
    }

    /// Parse a hex colour string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut nibbles = [0xF_u8; 4];
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid(s)),
        }
    }

    fn from_functional(original: &str, args: &str) -> Result<Self> {
        let args = args.strip_suffix(')').ok_or_else(|| invalid(original))?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();

        let channel = |p: &str| -> Result<u8> {
            p.parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.round().clamp(0.0, 255.0) as u8)
                .ok_or_else(|| invalid(original))
        };

        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha = a
                    .parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| invalid(original))?;
                Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?).with_alpha(alpha))
            }
            _ => Err(invalid(original)),
        }
    }

    /// Same colour with its alpha replaced by `alpha` (`0.0..=1.0`).
    ///
    /// The existing alpha is discarded, not multiplied.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for tiny_skia::Color {
    fn from(c: Colour) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl FromStr for Colour {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid(s: &str) -> CardError {
    CardError::Parse {
        message: format!("Invalid colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, #RRGGBBAA, rgb(r, g, b) or rgba(r, g, b, a)".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| CardError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| CardError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
