use std::path::PathBuf;

use language_utils::DocumentError;

use crate::tags::Slot;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{file}:{line}: {reason}")]
    MalformedRecord {
        file: String,
        line: usize,
        reason: &'static str,
    },
    #[error("{file} has {found} category collections, expected {expected}")]
    CollectionCount {
        file: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tag label `{label}` is registered in both {first} and {second}")]
    DuplicateLabel {
        label: &'static str,
        first: Slot,
        second: Slot,
    },
    #[error("tag label `{0}` does not parse back to its tag")]
    Unparseable(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum TaggingError {
    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize annotation xml: {0}")]
    Xml(#[from] quick_xml::se::SeError),
    #[error("failed to write annotations: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RecomputeError {
    #[error("failed to read annotation xml: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
