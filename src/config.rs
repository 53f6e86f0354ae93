//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/duplicator/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::IndentSettings;

/// Configuration that persists across invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Spaces per indentation level (ignored for the unit when using tabs)
    #[serde(default = "default_indentation_width")]
    pub indentation_width: usize,

    /// Indent with a tab character instead of spaces
    #[serde(default)]
    pub uses_tabs: bool,

    /// Prefix of the command identifiers the host sends
    /// (e.g., "com.example.Duplicator" for "com.example.Duplicator.Duplicate")
    #[serde(default = "default_bundle_identifier")]
    pub bundle_identifier: String,
}

fn default_indentation_width() -> usize {
    4
}

fn default_bundle_identifier() -> String {
    "duplicator".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indentation_width: default_indentation_width(),
            uses_tabs: false,
            bundle_identifier: default_bundle_identifier(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from an explicit path, or return defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the config as YAML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn indent_settings(&self) -> IndentSettings {
        IndentSettings {
            width: self.indentation_width,
            uses_tabs: self.uses_tabs,
        }
    }
}
