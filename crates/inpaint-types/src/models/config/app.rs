//! Application-level configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::editor::EditorConfig;
use super::generation::GenerationConfig;

/// Full application configuration.
///
/// The API key is deliberately not part of it: keys live in the session only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct AppConfig {
    /// Remote model settings
    #[serde(default)]
    #[validate(nested)]
    pub generation: GenerationConfig,
    /// Mask editor settings
    #[serde(default)]
    #[validate(nested)]
    pub editor: EditorConfig,
}

impl AppConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}
