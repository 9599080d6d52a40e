//! One row of the per-document index table.

use indexmap::IndexMap;

use crate::aggregate::{Counter, DocumentIndices, Ratio};
use crate::tags::Tag;

/// Counts are reported per this many words.
pub const NORM_WORDS: f64 = 10_000.0;

/// Index names in column order.
pub fn index_names() -> Vec<&'static str> {
    let mut names = vec!["nwords", "wrd_length", "mattr"];
    names.extend(Tag::ALL.iter().map(|tag| tag.as_str()));
    names.extend(
        Counter::ALL
            .iter()
            .filter(|counter| !matches!(counter, Counter::Nwords | Counter::Characters))
            .map(|counter| counter.name()),
    );
    names.extend(Ratio::ALL.iter().map(|ratio| ratio.name()));
    names
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IndexRecord {
    pub filename: String,
    pub indices: IndexMap<String, f64>,
}

impl IndexRecord {
    pub fn new(filename: impl Into<String>, document: &DocumentIndices) -> Self {
        let counters = &document.counters;
        let nwords = document.nwords() as f64;
        let normed = |count: u32| {
            if nwords == 0.0 {
                0.0
            } else {
                count as f64 * NORM_WORDS / nwords
            }
        };

        let mut indices = IndexMap::new();
        indices.insert("nwords".to_string(), nwords);
        indices.insert("wrd_length".to_string(), document.wrd_length);
        indices.insert("mattr".to_string(), document.mattr);
        for tag in Tag::ALL {
            indices.insert(tag.as_str().to_string(), normed(counters.tag_count(tag)));
        }
        for counter in Counter::ALL {
            if !matches!(counter, Counter::Nwords | Counter::Characters) {
                indices.insert(counter.name().to_string(), normed(counters.count(counter)));
            }
        }
        for ratio in Ratio::ALL {
            indices.insert(ratio.name().to_string(), document.ratio(ratio));
        }

        Self {
            filename: filename.into(),
            indices,
        }
    }

    pub fn header() -> Vec<&'static str> {
        std::iter::once("filename").chain(index_names()).collect()
    }

    pub fn row(&self) -> Vec<String> {
        std::iter::once(self.filename.clone())
            .chain(self.indices.values().map(|value| value.to_string()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.indices.get(name).copied()
    }
}
