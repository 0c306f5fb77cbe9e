//! Project configuration (cards.yaml).
//!
//! Defines where rendered cards go, which template to use by default, and
//! where fonts come from. CLI flags override every setting.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::render::FontConfig;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "cards.yaml";

/// Configuration loaded from cards.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Output directory for saved cards.
    pub output: PathBuf,

    /// Template id used when none is given on the command line.
    pub template: String,

    /// Font sources for card text.
    pub fonts: FontConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            template: "celebration".to_string(),
            fonts: FontConfig::default(),
        }
    }
}

impl CardsConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `cards.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CardError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }
}
