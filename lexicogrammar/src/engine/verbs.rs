use language_utils::{DependencyRelation, PartOfSpeech};

use super::complementizer::is_zero_complementizer_clause;
use super::{Analyzer, TokenContext};
use crate::tags::{Tag, TagSlots};

const CONTRACTIONS: [&str; 5] = ["'m", "'ll", "n't", "'re", "'s"];

const MODAL_POSSIBILITY: [&str; 4] = ["can", "may", "might", "could"];
const MODAL_NECESSITY: [&str; 3] = ["ought", "must", "should"];
const MODAL_PREDICTIVE: [&str; 3] = ["will", "would", "shall"];

/// Controllers that make "to" part of a fixed expression rather than an
/// infinitive clause.
const TO_CLAUSE_EXCLUDED: [&str; 2] = ["able", "ought"];

fn is_verb(cx: &TokenContext<'_>) -> bool {
    cx.token.pos == PartOfSpeech::Verb
}

fn is_auxiliary(dep: &DependencyRelation) -> bool {
    matches!(dep, DependencyRelation::Aux | DependencyRelation::Auxpass)
}

/// Intransitive "do" standing in for another verb phrase.
pub(super) struct ProVerbDo;

impl Analyzer for ProVerbDo {
    fn name(&self) -> &'static str {
        "pro_verb_do"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if cx.token.lemma != "do" || !is_verb(cx) || cx.token.dep == DependencyRelation::Aux {
            return;
        }
        let transitive = cx.children().any(|child| {
            matches!(
                child.dep,
                DependencyRelation::Dobj | DependencyRelation::Ccomp
            )
        });
        if !transitive {
            slots.assign(Tag::PvDo);
        }
    }
}

pub(super) struct Contractions;

impl Analyzer for Contractions {
    fn name(&self) -> &'static str {
        "contractions"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if CONTRACTIONS.contains(&cx.lower().as_str()) && cx.token.dep != DependencyRelation::Case
        {
            slots.assign(Tag::Contraction);
        }
    }
}

/// An adverb between the first auxiliary and the verb, as in "has never
/// been".
pub(super) struct SplitAuxiliaries;

impl Analyzer for SplitAuxiliaries {
    fn name(&self) -> &'static str {
        "split_auxiliaries"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_verb(cx) || is_auxiliary(&cx.token.dep) {
            return;
        }
        let first_auxiliary = cx
            .children()
            .filter(|child| is_auxiliary(&child.dep))
            .map(|child| child.i)
            .min();
        let adverb = cx
            .children()
            .filter(|child| child.dep == DependencyRelation::Advmod)
            .map(|child| child.i)
            .last();

        if let (Some(auxiliary), Some(adverb)) = (first_auxiliary, adverb) {
            if auxiliary < adverb && adverb < cx.token.i {
                slots.assign(Tag::SplitAux);
            }
        }
    }
}

pub(super) struct MainVerbBe;

impl Analyzer for MainVerbBe {
    fn name(&self) -> &'static str {
        "main_verb_be"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if cx.lemma() == "be" && !is_auxiliary(&cx.token.dep) {
            slots.assign(Tag::BeMv);
        }
    }
}

/// Tense, aspect and modality, plus the non-finite clause types a verb
/// can head.
pub(super) struct VerbForms;

impl VerbForms {
    fn auxiliary(cx: &TokenContext<'_>, slots: &mut TagSlots) {
        let text = cx.token.text.as_str();
        if MODAL_POSSIBILITY.contains(&text) {
            slots.assign(Tag::ModalPossibility);
        } else if MODAL_NECESSITY.contains(&text) {
            slots.assign(Tag::ModalNecessity);
        } else if MODAL_PREDICTIVE.contains(&text) {
            slots.assign(Tag::ModalPredictive);
        } else if cx.token.tag == "VBD" {
            slots.assign(Tag::PastTense);
        } else {
            slots.assign(Tag::NonPastTense);
        }
    }

    fn to_clause(cx: &TokenContext<'_>, slots: &mut TagSlots) {
        let Some(to) = cx.neighbour(-1) else {
            return;
        };
        if to.lower() != "to" || to.dep != DependencyRelation::Aux || to.head != cx.token.i {
            return;
        }
        let Some(controller) = cx.neighbour(-2) else {
            return;
        };
        if TO_CLAUSE_EXCLUDED.contains(&controller.lower().as_str()) {
            return;
        }

        slots.assign(Tag::ToClause);
        let lemma = controller.lemma.to_lowercase();
        let class = match controller.pos {
            PartOfSpeech::Noun => {
                slots.assign(Tag::ToClauseNoun);
                None
            }
            PartOfSpeech::Verb => {
                slots.assign(Tag::ToClauseVerb);
                cx.lexicon.to_verb_class(&lemma)
            }
            PartOfSpeech::Adj => {
                slots.assign(Tag::ToClauseAdjective);
                cx.lexicon.to_adjective_class(&lemma)
            }
            _ => None,
        };
        if let Some(class) = class {
            slots.assign(class);
        }
    }

    fn tense(cx: &TokenContext<'_>, slots: &mut TagSlots) {
        match cx.token.tag.as_str() {
            "VBD" => {
                slots.assign(Tag::PastTense);
            }
            "VBN" | "VBG" => {
                let perfect = cx
                    .children()
                    .any(|child| child.lemma == "have" && child.dep == DependencyRelation::Aux);
                if perfect {
                    slots.assign(Tag::PerfectAspect);
                }
            }
            _ => {
                slots.assign(Tag::NonPastTense);
            }
        }
    }
}

impl Analyzer for VerbForms {
    fn name(&self) -> &'static str {
        "verb_forms"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_verb(cx) {
            return;
        }
        slots.assign(Tag::Verb);

        if cx.token.dep == DependencyRelation::Aux {
            Self::auxiliary(cx, slots);
            return;
        }

        if is_zero_complementizer_clause(cx) {
            slots.assign(Tag::ComplementizerThat0);
        }
        if cx.token.dep == DependencyRelation::Acl && cx.token.tag == "VBN" {
            slots.assign(Tag::PastParticipialClause);
        }
        Self::to_clause(cx, slots);
        Self::tense(cx, slots);
    }
}

pub(super) struct Passives;

impl Analyzer for Passives {
    fn name(&self) -> &'static str {
        "passives"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_verb(cx) || !cx.has_child(&DependencyRelation::Auxpass) {
            return;
        }
        if cx.has_child(&DependencyRelation::Agent) {
            slots.assign(Tag::ByPassive);
        } else {
            slots.assign(Tag::AgentlessPassive);
        }
    }
}

/// Semantic classes for single verbs and two-word phrasal verbs.
pub(super) struct VerbSemantics;

impl Analyzer for VerbSemantics {
    fn name(&self) -> &'static str {
        "verb_semantics"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if !is_verb(cx) {
            return;
        }
        let lemma = cx.lemma();

        if !cx.has_child(&DependencyRelation::Prt) {
            if let Some(class) = cx.lexicon.verb_class(&lemma) {
                slots.assign(class);
            }
            return;
        }

        let transitive = cx.has_child(&DependencyRelation::Dobj);
        for particle in cx
            .children()
            .filter(|child| child.dep == DependencyRelation::Prt)
        {
            let phrasal = format!("{lemma} {}", particle.lower());
            if cx.lexicon.is_phrasal_verb(&phrasal) {
                slots.assign(Tag::AllPhrasalVerbs);
            }
            if let Some(class) = cx.lexicon.phrasal_class(&phrasal, transitive) {
                slots.assign(class);
            }
        }
    }
}
