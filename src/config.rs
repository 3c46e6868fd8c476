//! Engine configuration, optionally loaded from a TOML file.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Upper bound on dropdown options; `option_limit` may only lower it.
pub const MAX_OPTION_LIMIT: usize = 30;

/// Tunable limits of the filter engine. Every key is optional.
///
/// ```toml
/// min_query_len = 3
/// option_limit = 30
/// min_tag_input_len = 1
/// suggestion_limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Free-text search activates once the trimmed query has this many characters.
    pub min_query_len: usize,
    /// Maximum number of options offered by a tag dropdown, at most [`MAX_OPTION_LIMIT`].
    pub option_limit: usize,
    /// Dropdown input length at which tag autocomplete replaces the plain option list.
    pub min_tag_input_len: usize,
    /// Maximum number of recipe-name suggestions.
    pub suggestion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            option_limit: MAX_OPTION_LIMIT,
            min_tag_input_len: 1,
            suggestion_limit: 10,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded engine config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_OPTION_LIMIT).contains(&self.option_limit) {
            return Err(ConfigError::Invalid(format!(
                "option_limit must be between 1 and {MAX_OPTION_LIMIT}, got {}",
                self.option_limit
            )));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::Invalid(
                "suggestion_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
