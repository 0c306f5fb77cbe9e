//! Font discovery.
//!
//! The font database is resolved once per [`CardRenderer`](crate::CardRenderer)
//! and cloned into every surface, so renders never rescan the filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Concrete families tried, in order, for the generic `sans-serif` family.
const SANS_SERIF_PREFERENCES: &[&str] = &[
    "Inter",
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

/// Where card text fonts come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Load fonts installed on the host.
    pub system: bool,
    /// Extra directories scanned for TTF/OTF files.
    pub dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            system: true,
            dirs: Vec::new(),
        }
    }
}

impl FontConfig {
    /// Configuration with no fonts at all; text falls back to estimated metrics.
    pub fn none() -> Self {
        Self {
            system: false,
            dirs: Vec::new(),
        }
    }

    /// Build the font database described by this configuration.
    pub fn load(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();

        if self.system {
            db.load_system_fonts();
        }
        for dir in &self.dirs {
            db.load_fonts_dir(dir);
        }

        if let Some(family) = preferred_family(&db, SANS_SERIF_PREFERENCES) {
            db.set_sans_serif_family(family);
        }

        log::debug!(target: "cards", "loaded {} font faces", db.len());
        db
    }
}

/// First preference with at least one face in `db`.
fn preferred_family(db: &fontdb::Database, preferences: &[&str]) -> Option<String> {
    preferences
        .iter()
        .find(|name| {
            db.faces()
                .any(|face| face.families.iter().any(|(family, _)| family.as_str() == **name))
        })
        .map(|name| name.to_string())
}
