use language_utils::{DependencyRelation, PartOfSpeech};

use super::{Analyzer, TokenContext};
use crate::tags::{Tag, TagSlots};

/// Punctuation that never stands in for a prepositional object.
const PLAIN_PUNCTUATION: [&str; 4] = [".", ",", "?", "!"];

const COORDINATORS: [&str; 2] = ["and", "or"];

const WH_TAGS: [&str; 4] = ["WDT", "WP", "WP$", "WRB"];

/// Tokens after which a wh-word may open a direct question.
const QUESTION_OPENERS: [&str; 3] = ["\"", "'", ":"];

/// Adverbial subordinators and prepositions that head a phrase.
pub(super) struct Subordinators;

impl Subordinators {
    fn has_object(cx: &TokenContext<'_>) -> bool {
        use DependencyRelation::*;
        cx.children().any(|child| match child.dep {
            Pobj | Pcomp | Prep | Amod | Cc => true,
            Punct => !PLAIN_PUNCTUATION.contains(&child.text.as_str()),
            _ => false,
        })
    }
}

impl Analyzer for Subordinators {
    fn name(&self) -> &'static str {
        "subordinators"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        match cx.token.dep {
            DependencyRelation::Mark => {
                let tag = match cx.lower().as_str() {
                    "because" => Tag::AdverbialSubordinatorCausitive,
                    "if" | "unless" => Tag::AdverbialSubordinatorConditional,
                    "that" => return,
                    _ => Tag::AdverbialSubordinatorOther,
                };
                slots.assign(tag);
            }
            DependencyRelation::Prep if Self::has_object(cx) => {
                slots.assign(Tag::PrepPhrase);
            }
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conjunct {
    Coordinator,
    Clause,
    Phrase,
}

/// Whether "and" / "or" joins clauses or phrases.
pub(super) struct Coordination;

impl Coordination {
    /// Scope under a verbal head: the conjunction takes the kind of whatever
    /// follows it among the head's coordinators and conjuncts.
    fn verbal_scope(cx: &TokenContext<'_>) -> Option<Tag> {
        let head = cx.head();
        let conjuncts: Vec<(usize, Conjunct)> = cx
            .doc
            .children(head)
            .filter_map(|child| match child.dep {
                DependencyRelation::Cc => Some((child.i, Conjunct::Coordinator)),
                DependencyRelation::Conj => {
                    if cx.doc.has_child_dep(child, &DependencyRelation::Nsubj) {
                        Some((child.i, Conjunct::Clause))
                    } else {
                        Some((child.i, Conjunct::Phrase))
                    }
                }
                _ => None,
            })
            .collect();

        let position = conjuncts
            .iter()
            .position(|(position, _)| *position == cx.token.i)?;
        match conjuncts.get(position + 1)?.1 {
            Conjunct::Coordinator | Conjunct::Clause => Some(Tag::CcClause),
            Conjunct::Phrase => Some(Tag::CcPhrase),
        }
    }
}

impl Analyzer for Coordination {
    fn name(&self) -> &'static str {
        "coordination"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        use PartOfSpeech::*;

        if !COORDINATORS.contains(&cx.lower().as_str()) {
            return;
        }
        let tag = if cx.is_sentence_initial() {
            Some(Tag::CcClause)
        } else {
            match cx.head().pos {
                Noun | Adj | Adv | Pron | Propn | Part => Some(Tag::CcPhrase),
                Verb => Self::verbal_scope(cx),
                _ => None,
            }
        };
        if let Some(tag) = tag {
            slots.assign(tag);
        }
    }
}

/// Wh-questions, wh-clauses and wh-relatives.
pub(super) struct WhWords;

impl WhWords {
    fn is_question(cx: &TokenContext<'_>) -> bool {
        use DependencyRelation::*;

        let opens = cx.is_sentence_initial()
            || cx
                .neighbour(-1)
                .is_some_and(|before| QUESTION_OPENERS.contains(&before.text.as_str()));
        !matches!(cx.head().dep, Csubj | Ccomp | Pcomp)
            && opens
            && cx.doc.sentence(cx.token).has_question_mark
    }

    fn is_clause(cx: &TokenContext<'_>) -> bool {
        cx.neighbour(-1).is_some_and(|before| {
            before.pos == PartOfSpeech::Verb && before.lemma != "be"
        }) && cx.head().dep != DependencyRelation::Advcl
    }
}

impl Analyzer for WhWords {
    fn name(&self) -> &'static str {
        "wh_words"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        use DependencyRelation::*;

        if !WH_TAGS.contains(&cx.token.tag.as_str()) || cx.lower() == "that" {
            return;
        }
        if Self::is_question(cx) {
            slots.assign(Tag::WhQuestion);
        }
        if Self::is_clause(cx) {
            slots.assign(Tag::WhClause);
        }

        let head = cx.head();
        if cx.token.dep == Pobj && cx.doc.head(head).dep == Relcl {
            slots.assign(Tag::WhRelativeClause);
            slots.assign(Tag::WhRelativePrepClause);
        }
        if head.dep == Relcl {
            let relative = match cx.token.dep {
                Nsubj | Nsubjpass => Some(Tag::WhRelativeSubjClause),
                Dobj => Some(Tag::WhRelativeObjClause),
                _ => None,
            };
            if let Some(relative) = relative {
                slots.assign(Tag::WhRelativeClause);
                slots.assign(relative);
            }
        }
    }
}

/// Relative and complement clauses introduced by "that".
pub(super) struct ThatClauses;

impl ThatClauses {
    fn complement(cx: &TokenContext<'_>, slots: &mut TagSlots) {
        slots.assign(Tag::ThatComplementClause);

        let Some(controller) = cx.neighbour(-1) else {
            return;
        };
        let lemma = controller.lemma.to_lowercase();
        let class = match controller.pos {
            PartOfSpeech::Verb => {
                slots.assign(Tag::ThatVerbClause);
                cx.lexicon.that_verb_class(&lemma)
            }
            PartOfSpeech::Noun => {
                slots.assign(Tag::ThatNounClause);
                cx.lexicon.that_noun_class(&lemma)
            }
            PartOfSpeech::Adj => {
                slots.assign(Tag::ThatAdjectiveClause);
                cx.lexicon.that_adjective_class(&lemma)
            }
            _ => None,
        };
        if let Some(class) = class {
            slots.assign(class);
        }
    }
}

impl Analyzer for ThatClauses {
    fn name(&self) -> &'static str {
        "that_clauses"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        use DependencyRelation::*;

        if cx.lower() != "that" {
            return;
        }
        let head = cx.head();
        if matches!(cx.token.dep, Nsubj | Nsubjpass | Dobj | Pobj) && head.dep == Relcl {
            slots.assign(Tag::ThatRelativeClause);
        }
        if matches!(cx.token.dep, Mark | Nsubj) && matches!(head.dep, Ccomp | Acl) {
            Self::complement(cx, slots);
        }
    }
}

#[cfg(test)]
mod tests {
    use language_utils::PartOfSpeech::*;

    use crate::context::tests::tok;
    use crate::engine::tests::{slots_of, tag};
    use crate::tags::{Slot, Tag};

    fn mow_the_lawn(second_subject: bool) -> Vec<language_utils::Token> {
        let mut sentence = vec![
            tok(0, "I", "-PRON-", Pron, "PRP", "nsubj", 1),
            tok(1, "mow", "mow", Verb, "VBP", "ROOT", 1),
            tok(2, "the", "the", Det, "DT", "det", 3),
            tok(3, "lawn", "lawn", Noun, "NN", "dobj", 1),
            tok(4, "and", "and", Cconj, "CC", "cc", 1),
        ];
        if second_subject {
            sentence.extend([
                tok(5, "she", "-PRON-", Pron, "PRP", "nsubj", 6),
                tok(6, "pulls", "pull", Verb, "VBZ", "conj", 1),
                tok(7, "weeds", "weed", Noun, "NNS", "dobj", 6),
            ]);
        } else {
            sentence.extend([
                tok(5, "pulls", "pull", Verb, "VBZ", "conj", 1),
                tok(6, "weeds", "weed", Noun, "NNS", "dobj", 5),
            ]);
        }
        sentence
    }

    #[test]
    fn test_clausal_coordination() {
        let document = tag(vec![mow_the_lawn(true)]);
        assert_eq!(slots_of(&document, "and").get(Slot::SpecTag1), Some(Tag::CcClause));
    }

    #[test]
    fn test_phrasal_coordination() {
        let document = tag(vec![mow_the_lawn(false)]);
        assert_eq!(slots_of(&document, "and").get(Slot::SpecTag1), Some(Tag::CcPhrase));
    }

    #[test]
    fn test_coordination_of_nouns_and_sentence_start() {
        let document = tag(vec![vec![
            tok(0, "And", "and", Cconj, "CC", "cc", 2),
            tok(1, "cats", "cat", Noun, "NNS", "nsubj", 2),
            tok(2, "sleep", "sleep", Verb, "VBP", "ROOT", 2),
            tok(3, "or", "or", Cconj, "CC", "cc", 2),
            tok(4, "eat", "eat", Verb, "VBP", "conj", 2),
        ]]);
        assert!(slots_of(&document, "And").contains(Tag::CcClause));
        assert!(slots_of(&document, "or").contains(Tag::CcPhrase));

        let document = tag(vec![vec![
            tok(0, "Cats", "cat", Noun, "NNS", "nsubj", 3),
            tok(1, "and", "and", Cconj, "CC", "cc", 0),
            tok(2, "dogs", "dog", Noun, "NNS", "conj", 0),
            tok(3, "sleep", "sleep", Verb, "VBP", "ROOT", 3),
        ]]);
        assert!(slots_of(&document, "and").contains(Tag::CcPhrase));
    }

    #[test]
    fn test_trailing_coordinator_gets_nothing() {
        let document = tag(vec![vec![
            tok(0, "Stop", "stop", Verb, "VB", "ROOT", 0),
            tok(1, "and", "and", Cconj, "CC", "cc", 0),
        ]]);
        assert_eq!(slots_of(&document, "and").get(Slot::SpecTag1), None);
    }

    #[test]
    fn test_subordinators_and_prepositions() {
        let document = tag(vec![vec![
            tok(0, "We", "-PRON-", Pron, "PRP", "nsubj", 1),
            tok(1, "left", "leave", Verb, "VBD", "ROOT", 1),
            tok(2, "because", "because", Sconj, "IN", "mark", 4),
            tok(3, "it", "-PRON-", Pron, "PRP", "nsubj", 4),
            tok(4, "rained", "rain", Verb, "VBD", "advcl", 1),
            tok(5, "in", "in", Adp, "IN", "prep", 4),
            tok(6, "town", "town", Noun, "NN", "pobj", 5),
        ]]);
        assert!(slots_of(&document, "because").contains(Tag::AdverbialSubordinatorCausitive));
        assert!(slots_of(&document, "in").contains(Tag::PrepPhrase));
    }

    #[test]
    fn test_wh_question_and_relative() {
        let document = tag(vec![vec![
            tok(0, "What", "what", Pron, "WP", "dobj", 2),
            tok(1, "did", "do", Verb, "VBD", "aux", 2),
            tok(2, "see", "see", Verb, "VB", "ROOT", 2),
            tok(3, "?", "?", Punct, ".", "punct", 2),
        ]]);
        assert!(slots_of(&document, "What").contains(Tag::WhQuestion));

        let document = tag(vec![vec![
            tok(0, "The", "the", Det, "DT", "det", 1),
            tok(1, "man", "man", Noun, "NN", "nsubj", 4),
            tok(2, "who", "who", Pron, "WP", "nsubj", 3),
            tok(3, "came", "come", Verb, "VBD", "relcl", 1),
            tok(4, "left", "leave", Verb, "VBD", "ROOT", 4),
        ]]);
        let who = slots_of(&document, "who");
        assert!(who.contains(Tag::WhRelativeClause));
        assert!(who.contains(Tag::WhRelativeSubjClause));
        assert!(!who.contains(Tag::WhQuestion));
    }

    #[test]
    fn test_wh_clause_after_verb() {
        let document = tag(vec![vec![
            tok(0, "I", "-PRON-", Pron, "PRP", "nsubj", 1),
            tok(1, "know", "know", Verb, "VBP", "ROOT", 1),
            tok(2, "what", "what", Pron, "WP", "dobj", 4),
            tok(3, "you", "-PRON-", Pron, "PRP", "nsubj", 4),
            tok(4, "mean", "mean", Verb, "VBP", "ccomp", 1),
        ]]);
        assert!(slots_of(&document, "what").contains(Tag::WhClause));
    }

    #[test]
    fn test_that_clauses() {
        let document = tag(vec![vec![
            tok(0, "It", "-PRON-", Pron, "PRP", "nsubj", 1),
            tok(1, "is", "be", Verb, "VBZ", "ROOT", 1),
            tok(2, "likely", "likely", Adj, "JJ", "acomp", 1),
            tok(3, "that", "that", Sconj, "IN", "mark", 5),
            tok(4, "she", "-PRON-", Pron, "PRP", "nsubj", 5),
            tok(5, "won", "win", Verb, "VBD", "ccomp", 1),
        ]]);
        let that = slots_of(&document, "that");
        assert!(that.contains(Tag::ThatComplementClause));
        assert!(that.contains(Tag::ThatAdjectiveClause));
        assert!(that.contains(Tag::ThatAdjectiveClauseLikelihood));

        let document = tag(vec![vec![
            tok(0, "The", "the", Det, "DT", "det", 1),
            tok(1, "book", "book", Noun, "NN", "nsubj", 4),
            tok(2, "that", "that", Det, "WDT", "nsubj", 3),
            tok(3, "fell", "fall", Verb, "VBD", "relcl", 1),
            tok(4, "broke", "break", Verb, "VBD", "ROOT", 4),
        ]]);
        let that = slots_of(&document, "that");
        assert!(that.contains(Tag::ThatRelativeClause));
        assert!(!that.contains(Tag::WhRelativeClause));
    }
}
