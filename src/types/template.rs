//! Card templates and the canvas options derived from them.
//!
//! Templates come from a catalog owned by the caller. The engine only needs
//! the id (to pick a layout) and the declared dimensions.
//!
//! # Example
//!
//! ```json
//! {
//!   "id": "progress",
//!   "name": "Progress Tracker",
//!   "isPremium": false,
//!   "layout": { "dimensions": { "width": 400, "height": 400 } }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CardColorScheme, Colour};

/// Width and height used when a template declares no dimensions.
pub const DEFAULT_CARD_SIZE: u32 = 400;

/// The fixed set of card layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Celebration,
    Progress,
    Achievement,
    Family,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Celebration,
        TemplateKind::Progress,
        TemplateKind::Achievement,
        TemplateKind::Family,
    ];

    /// Map a template id to its layout. Unknown ids get the celebration layout.
    pub fn from_id(id: &str) -> Self {
        Self::lookup(id).unwrap_or(TemplateKind::Celebration)
    }

    /// Map a template id to its layout, `None` for unknown ids.
    pub fn lookup(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "celebration" => Some(TemplateKind::Celebration),
            "progress" => Some(TemplateKind::Progress),
            "achievement" => Some(TemplateKind::Achievement),
            "family" => Some(TemplateKind::Family),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Celebration => "celebration",
            TemplateKind::Progress => "progress",
            TemplateKind::Achievement => "achievement",
            TemplateKind::Family => "family",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pixel dimensions of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CARD_SIZE,
            height: DEFAULT_CARD_SIZE,
        }
    }
}

/// Layout section of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateLayout {
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// A card template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub layout: TemplateLayout,
}

impl CardTemplate {
    /// Create a free template with default dimensions.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_premium: false,
            layout: TemplateLayout::default(),
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.layout.dimensions = Some(Dimensions { width, height });
        self
    }

    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    /// Layout this template renders with.
    pub fn kind(&self) -> TemplateKind {
        TemplateKind::from_id(&self.id)
    }

    /// Declared dimensions, or the 400x400 default.
    pub fn dimensions(&self) -> Dimensions {
        self.layout.dimensions.unwrap_or_default()
    }
}

/// Builtin template catalog.
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    fn celebration() -> CardTemplate {
        CardTemplate::new("celebration", "Celebration").with_dimensions(400, 400)
    }

    fn progress() -> CardTemplate {
        CardTemplate::new("progress", "Progress Tracker").with_dimensions(400, 400)
    }

    fn achievement() -> CardTemplate {
        CardTemplate::new("achievement", "Achievement Badge")
            .with_dimensions(400, 400)
            .premium()
    }

    fn family() -> CardTemplate {
        CardTemplate::new("family", "Family Together")
            .with_dimensions(400, 400)
            .premium()
    }

    /// Get a builtin template by id.
    pub fn get(id: &str) -> Option<CardTemplate> {
        TemplateKind::lookup(id).map(Self::for_kind)
    }

    /// Builtin template for a layout.
    pub fn for_kind(kind: TemplateKind) -> CardTemplate {
        match kind {
            TemplateKind::Celebration => Self::celebration(),
            TemplateKind::Progress => Self::progress(),
            TemplateKind::Achievement => Self::achievement(),
            TemplateKind::Family => Self::family(),
        }
    }

    /// Get all builtin templates.
    pub fn all() -> Vec<CardTemplate> {
        TemplateKind::ALL.into_iter().map(Self::for_kind).collect()
    }
}

/// Drawing surface configuration, materialised once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCanvasOptions {
    pub width: u32,
    pub height: u32,
    pub background_color: Colour,
    pub text_color: Colour,
    pub text_secondary_color: Colour,
    pub primary_color: Colour,
    pub secondary_color: Colour,
    pub accent_color: Colour,
}

impl CardCanvasOptions {
    /// Combine a template's dimensions with a colour scheme.
    pub fn from_template(template: &CardTemplate, scheme: &CardColorScheme) -> Self {
        let Dimensions { width, height } = template.dimensions();
        Self {
            width,
            height,
            background_color: scheme.background,
            text_color: scheme.text,
            text_secondary_color: scheme.text_secondary,
            primary_color: scheme.primary,
            secondary_color: scheme.secondary,
            accent_color: scheme.accent,
        }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    pub fn center_x(&self) -> f32 {
        self.width_f() / 2.0
    }
}
