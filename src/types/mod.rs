//! Core types for card rendering.

mod card;
mod colour;
mod template;

pub use card::{CardColorScheme, CardGenerationData, FamilyData, MilestoneData, Progress};
pub use colour::Colour;
pub use template::{
    BuiltinTemplates, CardCanvasOptions, CardTemplate, Dimensions, TemplateKind, TemplateLayout,
    DEFAULT_CARD_SIZE,
};
