//! Noun-phrase and clausal complexity counters. These only read the
//! dependency tree, so they also run over trees rebuilt from exports.

use language_utils::{DependencyRelation, PartOfSpeech, Token};

use crate::aggregate::{Counter, FeatureCounters};
use crate::context::DocumentContext;

/// Common nouns and the dependents they carry.
pub fn noun_phrase_complexity(token: &Token, doc: &DocumentContext<'_>, counters: &mut FeatureCounters) {
    if token.pos != PartOfSpeech::Noun {
        return;
    }
    counters.increment(Counter::Np);
    for child in doc.children(token) {
        counters.increment(Counter::NpDeps);
        if let Some(counter) = Counter::noun_phrase_dependency(&child.dep) {
            counters.increment(counter);
        }
    }
}

/// Every non-auxiliary verb heads a clause; a subject makes it finite.
pub fn clausal_complexity(token: &Token, doc: &DocumentContext<'_>, counters: &mut FeatureCounters) {
    use DependencyRelation::*;

    if token.pos != PartOfSpeech::Verb || token.dep == Aux {
        return;
    }
    counters.increment(Counter::AllClauses);

    let finite = doc
        .children(token)
        .any(|child| matches!(child.dep, Nsubj | Nsubjpass));
    if finite {
        counters.increment(Counter::FiniteClause);
        match token.dep {
            Root | Conj => counters.increment(Counter::FiniteIndClause),
            _ => counters.increment(Counter::FiniteDepClause),
        }
        match token.dep {
            Ccomp => counters.increment(Counter::FiniteComplClause),
            Relcl => counters.increment(Counter::FiniteRelativeClause),
            _ => {}
        }
    } else {
        counters.increment(Counter::NonfiniteClause);
    }
    counters.add(Counter::VpDeps, doc.children(token).count() as u32);
}

#[cfg(test)]
mod tests {
    use language_utils::ParsedDocument;
    use language_utils::PartOfSpeech::*;

    use super::*;
    use crate::context::tests::tok;

    fn count(document: &ParsedDocument) -> FeatureCounters {
        let doc = DocumentContext::new(document).unwrap();
        let mut counters = FeatureCounters::default();
        for token in document.tokens() {
            noun_phrase_complexity(token, &doc, &mut counters);
            clausal_complexity(token, &doc, &mut counters);
        }
        counters
    }

    #[test]
    fn test_relative_clause_in_noun_phrase() {
        let document = ParsedDocument {
            name: "test".to_string(),
            sentences: vec![vec![
                tok(0, "The", "the", Det, "DT", "det", 2),
                tok(1, "old", "old", Adj, "JJ", "amod", 2),
                tok(2, "man", "man", Noun, "NN", "nsubj", 6),
                tok(3, "who", "who", Pron, "WP", "nsubj", 4),
                tok(4, "came", "come", Verb, "VBD", "relcl", 2),
                tok(5, "has", "have", Verb, "VBZ", "aux", 6),
                tok(6, "left", "leave", Verb, "VBN", "ROOT", 6),
            ]],
        };
        let counters = count(&document);
        assert_eq!(counters.count(Counter::Np), 1);
        assert_eq!(counters.count(Counter::NpDeps), 3);
        assert_eq!(counters.count(Counter::DetDep), 1);
        assert_eq!(counters.count(Counter::AmodDep), 1);
        assert_eq!(counters.count(Counter::RelclDep), 1);
        assert_eq!(counters.count(Counter::AllClauses), 2);
        assert_eq!(counters.count(Counter::FiniteClause), 2);
        assert_eq!(counters.count(Counter::FiniteIndClause), 1);
        assert_eq!(counters.count(Counter::FiniteDepClause), 1);
        assert_eq!(counters.count(Counter::FiniteRelativeClause), 1);
        assert_eq!(counters.count(Counter::VpDeps), 3);
    }

    #[test]
    fn test_nonfinite_clause() {
        let document = ParsedDocument {
            name: "test".to_string(),
            sentences: vec![vec![
                tok(0, "I", "-PRON-", Pron, "PRP", "nsubj", 1),
                tok(1, "want", "want", Verb, "VBP", "ROOT", 1),
                tok(2, "to", "to", Part, "TO", "aux", 3),
                tok(3, "go", "go", Verb, "VB", "xcomp", 1),
            ]],
        };
        let counters = count(&document);
        assert_eq!(counters.count(Counter::AllClauses), 2);
        assert_eq!(counters.count(Counter::NonfiniteClause), 1);
        assert_eq!(counters.count(Counter::Np), 0);
    }
}
