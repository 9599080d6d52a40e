//! Run configuration, read from a JSON file. Every field has a default, so
//! `{}` is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::RuleSet;
use crate::error::ConfigError;
use crate::export::VerticalLayout;
use crate::lexicon::LexiconConfig;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub xml: bool,
    pub vertical: bool,
    pub vertical_layout: VerticalLayout,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    pub rule_set: RuleSet,
    pub lexicon: LexiconConfig,
    pub outputs: OutputConfig,
    /// Documents tagged at once by the batch driver.
    pub concurrency: usize,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::default(),
            lexicon: LexiconConfig::default(),
            outputs: OutputConfig::default(),
            concurrency: 8,
        }
    }
}

impl TaggerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
