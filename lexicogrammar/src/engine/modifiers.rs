use language_utils::{DependencyRelation, PartOfSpeech};

use super::{Analyzer, TokenContext};
use crate::tags::{Tag, TagSlots};

/// Words that open a turn rather than modify anything.
const DISCOURSE_PARTICLES: [&str; 5] = ["well", "now", "anyway", "anyhow", "anyways"];

pub(super) struct Adjectives;

impl Analyzer for Adjectives {
    fn name(&self) -> &'static str {
        "adjectives"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        let lexicon = cx.lexicon;
        let positional = cx.rule_set.positional_adjective_classes();
        let class = match cx.token.dep {
            DependencyRelation::Acomp => {
                slots.assign(Tag::JjPredicative);
                if positional {
                    lexicon.predicative_adjective_class(&cx.lemma())
                } else {
                    lexicon.attributive_adjective_class(&cx.lemma())
                }
            }
            DependencyRelation::Amod => {
                slots.assign(Tag::JjAttributive);
                positional
                    .then(|| lexicon.attributive_adjective_class(&cx.lemma()))
                    .flatten()
            }
            _ => None,
        };
        if let Some(class) = class {
            slots.assign(class);
        }
    }
}

pub(super) struct Adverbs;

impl Analyzer for Adverbs {
    fn name(&self) -> &'static str {
        "adverbs"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        use DependencyRelation::*;

        if cx.token.pos != PartOfSpeech::Adv && !matches!(cx.token.dep, Npadvmod | Advmod | Intj) {
            return;
        }
        let lemma = cx.lemma();
        if let Some(kind) = cx.lexicon.adverb_type(&lemma) {
            slots.assign(kind);
        }
        if cx.is_sentence_initial() && DISCOURSE_PARTICLES.contains(&cx.lower().as_str()) {
            slots.assign(Tag::DiscourseParticle);
        } else if let Some(stance) = cx.lexicon.stance_adverb_class(&lemma) {
            slots.assign(stance);
        }
    }
}
