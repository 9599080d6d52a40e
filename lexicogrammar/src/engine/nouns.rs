use language_utils::PartOfSpeech;

use super::{Analyzer, NominalizationStrategy, TokenContext};
use crate::lexicon::LexicalResources;
use crate::tags::{Tag, TagSlots};

fn is_noun(cx: &TokenContext<'_>) -> bool {
    matches!(cx.token.pos, PartOfSpeech::Noun | PartOfSpeech::Propn)
}

/// Checks one suffix length chosen by the length of the word.
fn length_gated(lexicon: &LexicalResources, word: &str, proper: bool) -> bool {
    let nouns = &lexicon.noun_suffixes;
    let len = word.chars().count();
    if len > 7 && nouns.matches_at(word, 6) {
        return true;
    }
    if len > 6 && nouns.matches_at(word, 5) {
        return true;
    }
    let bucket = match len {
        6.. => 4,
        5 => 3,
        4 => 2,
        _ => return false,
    };
    nouns.matches_at(word, bucket)
        || (proper && lexicon.proper_noun_suffixes.matches_at(word, bucket))
}

fn is_nominalization(cx: &TokenContext<'_>) -> bool {
    let lexicon = cx.lexicon;
    let word = cx.lower();
    let proper = cx.token.pos == PartOfSpeech::Propn;
    let propers = &lexicon.proper_noun_suffixes;
    let nouns = &lexicon.noun_suffixes;

    match cx.rule_set.nominalization() {
        NominalizationStrategy::LengthGated => {
            !lexicon.is_nominal_stop(&cx.lemma()) && length_gated(lexicon, &word, proper)
        }
        NominalizationStrategy::ProperNounFallback => {
            if lexicon.is_nominal_stop(&word) {
                return false;
            }
            (proper && propers.longest_match(&word).is_some())
                || propers
                    .longest_match_within(&word, nouns.min_len(), nouns.max_len())
                    .is_some()
        }
        NominalizationStrategy::GeneralSuffixes => {
            if lexicon.is_nominal_stop(&cx.lemma()) {
                return false;
            }
            (proper && propers.longest_match(&word).is_some())
                || nouns.longest_match(&word).is_some()
        }
    }
}

pub(super) struct Nouns;

impl Analyzer for Nouns {
    fn name(&self) -> &'static str {
        "nouns"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_noun(cx) {
            return;
        }
        slots.assign(Tag::NnAll);
        if is_nominalization(cx) {
            slots.assign(Tag::Nominalization);
        }
    }
}

pub(super) struct NounSemantics;

impl Analyzer for NounSemantics {
    fn name(&self) -> &'static str {
        "noun_semantics"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_noun(cx) {
            return;
        }
        if let Some(class) = cx.lexicon.noun_class(&cx.lemma()) {
            slots.assign(class);
        }
    }
}
