use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing completion settings, persisted as completion.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

impl CompletionConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("completion.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no completion config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.suggestions.limit == 0 {
            errors.push("suggestions.limit must be at least 1".to_string());
        }

        if self.vocabulary.cutoff_frequency == 0 {
            errors.push("vocabulary.cutoff_frequency must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        for error in self.validate() {
            tracing::warn!(%error, "invalid completion config value, falling back to default");
        }

        Self {
            suggestions: SuggestionsConfig {
                limit: if self.suggestions.limit == 0 {
                    defaults.suggestions.limit
                } else {
                    self.suggestions.limit
                },
                ..self.suggestions.clone()
            },
            vocabulary: VocabularyConfig {
                cutoff_frequency: if self.vocabulary.cutoff_frequency == 0 {
                    defaults.vocabulary.cutoff_frequency
                } else {
                    self.vocabulary.cutoff_frequency
                },
                ..self.vocabulary.clone()
            },
        }
    }
}

/// How suggestions are matched and how many are shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub exact_match: bool,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            case_sensitive: false,
            exact_match: false,
        }
    }
}

fn default_limit() -> usize {
    10
}

/// Which words feed the completion index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Predicted words seen fewer times than this are left out.
    #[serde(default = "default_cutoff_frequency")]
    pub cutoff_frequency: u32,
    #[serde(default = "default_true")]
    pub space_after_autocomplete: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            cutoff_frequency: default_cutoff_frequency(),
            space_after_autocomplete: true,
        }
    }
}

fn default_cutoff_frequency() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
