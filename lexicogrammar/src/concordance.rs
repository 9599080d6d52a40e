//! Example sentences for a tag, for checking what a rule actually catches.

use std::hash::{Hash, Hasher};

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

use crate::engine::TaggedDocument;
use crate::export::XmlDocument;
use crate::tags::Tag;

fn marker(label: &str) -> String {
    format!("<--{label}<<<")
}

/// Joins `words`, inserting the marker after each flagged word. Returns
/// `None` when nothing was flagged.
fn marked_sentence<'w>(
    words: impl IntoIterator<Item = (&'w str, bool)>,
    label: &str,
) -> Option<String> {
    let mut out = Vec::new();
    let mut found = false;
    for (word, flagged) in words {
        out.push(word.to_string());
        if flagged {
            found = true;
            out.push(marker(label));
        }
    }
    found.then(|| out.join(" "))
}

/// Every sentence with a token carrying `tag`, marked after each such token.
pub fn find_examples(document: &TaggedDocument, tag: Tag) -> Vec<String> {
    document
        .sentences
        .iter()
        .filter_map(|sentence| {
            marked_sentence(
                sentence
                    .iter()
                    .map(|tagged| (tagged.token.text.as_str(), tagged.slots.contains(tag))),
                tag.as_str(),
            )
        })
        .collect()
}

/// Same as [`find_examples`] over an export. Labels are matched as text, so
/// hand-edited values outside the registry can be searched too.
pub fn find_examples_in_xml(document: &XmlDocument, label: &str) -> Vec<String> {
    document
        .sentences
        .iter()
        .filter_map(|sentence| {
            marked_sentence(
                sentence.words.iter().map(|word| {
                    let flagged = word.biber_tags.values().any(|value| value == label);
                    (word.raw.as_str(), flagged)
                }),
                label,
            )
        })
        .collect()
}

/// Keeps each example with probability `target / len`. The draw for an
/// example depends only on its text and `seed_key`, so reruns keep the
/// same examples.
pub fn sample_examples(examples: Vec<String>, target: usize, seed_key: &str) -> Vec<String> {
    if examples.len() <= target {
        return examples;
    }
    let original = examples.len();
    let keep = target as f64 / original as f64;

    let sampled: Vec<String> = examples
        .into_iter()
        .filter(|example| {
            let mut hasher = FxHasher::default();
            example.hash(&mut hasher);
            seed_key.hash(&mut hasher);
            let mut rng = ChaCha8Rng::seed_from_u64(hasher.finish());
            rng.random_bool(keep)
        })
        .collect();
    debug!("sampled {} of {original} examples for {seed_key}", sampled.len());
    sampled
}
