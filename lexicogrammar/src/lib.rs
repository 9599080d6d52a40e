//! Lexicogrammatical feature tagging over dependency-parsed documents.
//!
//! Every token is classified into a fixed registry of syntactic and semantic
//! categories by an ordered battery of rules, and each document is reduced
//! to a row of frequency and complexity indices.

pub mod aggregate;
pub mod concordance;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod record;
pub mod recompute;
pub mod suffix;
pub mod tags;

pub use aggregate::{DocumentIndices, FeatureCounters};
pub use config::TaggerConfig;
pub use engine::{RuleSet, TaggedDocument, TaggingEngine};
pub use error::{ConfigError, ExportError, LexiconError, RecomputeError, TaggingError};
pub use export::{VerticalLayout, to_vertical, to_xml};
pub use lexicon::{LexicalResources, LexiconConfig};
pub use record::IndexRecord;
pub use recompute::{Recomputed, recompute_from_xml};
pub use tags::{Slot, Tag, TagSlots};
