//! Card input data.
//!
//! [`CardGenerationData`] is the single input contract shared by every
//! composer. It is built fresh for each render and never mutated.

use serde::{Deserialize, Serialize};

use super::Colour;
use crate::error::{CardError, Result};

/// The six colour slots a card may paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardColorScheme {
    pub background: Colour,
    pub text: Colour,
    pub text_secondary: Colour,
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
}

impl Default for CardColorScheme {
    /// Indigo-on-white scheme used by the free templates.
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            text: Colour::rgb(0x1F, 0x29, 0x37),
            text_secondary: Colour::rgb(0x6B, 0x72, 0x80),
            primary: Colour::rgb(0x63, 0x66, 0xF1),
            secondary: Colour::rgb(0x8B, 0x5C, 0xF6),
            accent: Colour::rgb(0xF5, 0x9E, 0x0B),
        }
    }
}

/// Goal progress in percent, always within `0.0..=100.0`.
///
/// Construction is the only clamp point; NaN becomes zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Progress(f32);

impl Progress {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            Self(Self::MIN)
        } else {
            Self(percent.clamp(Self::MIN, Self::MAX))
        }
    }

    /// Percentage value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Rounded percentage for labels, e.g. `"50%"`.
    pub fn label(self) -> String {
        format!("{}%", self.0.round() as u32)
    }
}

impl From<f32> for Progress {
    fn from(percent: f32) -> Self {
        Self::new(percent)
    }
}

impl From<Progress> for f32 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// The milestone a card celebrates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestoneData {
    pub title: String,
    /// Opaque timestamp string as supplied by the caller.
    pub achieved_at: String,
    pub goal_title: String,
    pub progress_percentage: Progress,
}

/// The family the card belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyData {
    pub name: String,
    pub member_count: u32,
    /// Opaque avatar references; only their count is drawn.
    #[serde(default)]
    pub avatars: Vec<String>,
}

/// Everything a composer needs to paint one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGenerationData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
    #[serde(default)]
    pub milestone_data: MilestoneData,
    #[serde(default)]
    pub family_data: FamilyData,
    #[serde(default)]
    pub color_scheme: CardColorScheme,
}

impl CardGenerationData {
    /// Create card data with just a title and default everything else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: None,
            custom_text: None,
            milestone_data: MilestoneData::default(),
            family_data: FamilyData::default(),
            color_scheme: CardColorScheme::default(),
        }
    }

    /// Parse card data from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CardError::Parse {
            message: format!("Invalid card data: {}", e),
            help: Some("Expected camelCase keys such as title, milestoneData, colorScheme".to_string()),
        })
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_custom_text(mut self, custom_text: impl Into<String>) -> Self {
        self.custom_text = Some(custom_text.into());
        self
    }

    pub fn with_progress(mut self, percent: f32) -> Self {
        self.milestone_data.progress_percentage = Progress::new(percent);
        self
    }

    pub fn with_members(mut self, member_count: u32) -> Self {
        self.family_data.member_count = member_count;
        self
    }

    /// Subtitle, if present and not blank.
    pub fn subtitle(&self) -> Option<&str> {
        non_blank(&self.subtitle)
    }

    /// Description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    /// Custom text, if present and not blank.
    pub fn custom_text(&self) -> Option<&str> {
        non_blank(&self.custom_text)
    }

    pub fn progress(&self) -> Progress {
        self.milestone_data.progress_percentage
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(-5.0).value(), 0.0);
        assert_eq!(Progress::new(150.0).value(), 100.0);
        assert_eq!(Progress::new(f32::NAN).value(), 0.0);
        assert_eq!(Progress::new(42.5).value(), 42.5);
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(Progress::new(49.6).label(), "50%");
        assert_eq!(Progress::new(0.0).label(), "0%");
    }

    #[test]
    fn test_progress_clamped_on_deserialize() {
        let m: MilestoneData = serde_json::from_str(
            r#"{"title":"t","achievedAt":"2024-01-01","goalTitle":"g","progressPercentage":240}"#,
        )
        .unwrap();
        assert_eq!(m.progress_percentage.value(), 100.0);
    }

    #[test]
    fn test_from_json_camel_case() {
        let data = CardGenerationData::from_json(
            r##"{
                "title": "First $500 Saved!",
                "subtitle": "Family Vacation Fund",
                "customText": "Go team",
                "milestoneData": {
                    "title": "First $500",
                    "achievedAt": "2024-06-01T12:00:00Z",
                    "goalTitle": "Vacation",
                    "progressPercentage": 50
                },
                "familyData": { "name": "Rivera", "memberCount": 4, "avatars": [] },
                "colorScheme": {
                    "background": "#ffffff",
                    "text": "#111827",
                    "textSecondary": "#6b7280",
                    "primary": "#10b981",
                    "secondary": "#3b82f6",
                    "accent": "rgba(245, 158, 11, 1)"
                }
            }"##,
        )
        .unwrap();

        assert_eq!(data.subtitle(), Some("Family Vacation Fund"));
        assert_eq!(data.custom_text(), Some("Go team"));
        assert_eq!(data.description(), None);
        assert_eq!(data.progress().value(), 50.0);
        assert_eq!(data.family_data.member_count, 4);
        assert_eq!(data.color_scheme.accent, Colour::rgb(245, 158, 11));
    }

    #[test]
    fn test_from_json_rejects_bad_colour() {
        let err = CardGenerationData::from_json(
            r##"{"title":"x","colorScheme":{"background":"nope","text":"#000","textSecondary":"#000","primary":"#000","secondary":"#000","accent":"#000"}}"##,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let data = CardGenerationData::new("Title")
            .with_subtitle("   ")
            .with_description("");
        assert_eq!(data.subtitle(), None);
        assert_eq!(data.description(), None);
    }
}
