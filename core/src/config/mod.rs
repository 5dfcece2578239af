use crate::spec::DEFAULT_RESULT_COUNT_PER_PAGE;
use crate::types::{Order, RankingStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = "searchspec.toml";

/// Builder defaults, persisted as searchspec.toml.
///
/// Unknown keys are a parse error so a misspelled setting is never dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecConfig {
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub snippets: SnippetsConfig,
}

impl SpecConfig {
    /// Location of the builder defaults file inside `dir`.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Reads builder defaults. A missing file means built-in defaults.
    pub fn load(path: &Path) -> Result<Self, SpecConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Writes builder defaults as pretty TOML, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), SpecConfigError> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        self.counts()
            .into_iter()
            .filter(|(_, value)| *value < 0)
            .map(|(name, value)| format!("{name} must be non-negative, got {value}"))
            .collect()
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            results: ResultsConfig {
                order: self.results.order,
                ranking_strategy: self.results.ranking_strategy,
                count_per_page: or_default(
                    "results.count_per_page",
                    self.results.count_per_page,
                    defaults.results.count_per_page,
                ),
            },
            snippets: SnippetsConfig {
                count: or_default(
                    "snippets.count",
                    self.snippets.count,
                    defaults.snippets.count,
                ),
                count_per_property: or_default(
                    "snippets.count_per_property",
                    self.snippets.count_per_property,
                    defaults.snippets.count_per_property,
                ),
                max_size: or_default(
                    "snippets.max_size",
                    self.snippets.max_size,
                    defaults.snippets.max_size,
                ),
            },
        }
    }

    fn counts(&self) -> [(&'static str, i32); 4] {
        [
            ("results.count_per_page", self.results.count_per_page),
            ("snippets.count", self.snippets.count),
            ("snippets.count_per_property", self.snippets.count_per_property),
            ("snippets.max_size", self.snippets.max_size),
        ]
    }
}

fn or_default(name: &str, value: i32, default: i32) -> i32 {
    if value < 0 {
        warn!(name, value, default, "replacing invalid config value");
        default
    } else {
        value
    }
}

/// Result paging and ordering defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultsConfig {
    #[serde(default)]
    pub order: Order,
    #[serde(default)]
    pub ranking_strategy: RankingStrategy,
    #[serde(default = "default_count_per_page")]
    pub count_per_page: i32,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            order: Order::default(),
            ranking_strategy: RankingStrategy::default(),
            count_per_page: default_count_per_page(),
        }
    }
}

fn default_count_per_page() -> i32 {
    DEFAULT_RESULT_COUNT_PER_PAGE
}

/// Snippet defaults. All zero means no snippets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetsConfig {
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub count_per_property: i32,
    #[serde(default)]
    pub max_size: i32,
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum SpecConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests;
