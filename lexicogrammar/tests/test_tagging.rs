use std::sync::Arc;

use language_utils::PartOfSpeech::{self, *};
use language_utils::{DependencyRelation, ParsedDocument, Token};
use lexicogrammar::aggregate::Counter;
use lexicogrammar::{
    IndexRecord, LexicalResources, RuleSet, Tag, TaggedDocument, TaggingEngine, recompute_from_xml,
    to_xml,
};

fn tok(i: usize, text: &str, lemma: &str, pos: PartOfSpeech, tag: &str, dep: &str, head: usize) -> Token {
    Token {
        text: text.to_string(),
        lemma: lemma.to_string(),
        pos,
        tag: tag.to_string(),
        dep: DependencyRelation::from_label(dep),
        i,
        head,
    }
}

fn tag_with(rule_set: RuleSet, sentences: Vec<Vec<Token>>) -> TaggedDocument {
    let lexicon = Arc::new(LexicalResources::bundled().unwrap());
    let engine = TaggingEngine::new(lexicon, rule_set).unwrap();
    engine
        .tag_document(&ParsedDocument {
            name: "test.json".to_string(),
            sentences,
        })
        .unwrap()
}

fn tag(sentences: Vec<Vec<Token>>) -> TaggedDocument {
    tag_with(RuleSet::default(), sentences)
}

fn tags_of(document: &TaggedDocument, position: usize) -> Vec<Tag> {
    let tagged = document.tokens().nth(position).unwrap();
    tagged.slots.iter().map(|(_, tag)| tag).collect()
}

/// "They said she liked hamburgers. They also said that he didn't."
fn hamburgers() -> Vec<Vec<Token>> {
    vec![
        vec![
            tok(0, "They", "-PRON-", Pron, "PRP", "nsubj", 1),
            tok(1, "said", "say", Verb, "VBD", "ROOT", 1),
            tok(2, "she", "-PRON-", Pron, "PRP", "nsubj", 3),
            tok(3, "liked", "like", Verb, "VBD", "ccomp", 1),
            tok(4, "hamburgers", "hamburger", Noun, "NNS", "dobj", 3),
            tok(5, ".", ".", Punct, ".", "punct", 1),
        ],
        vec![
            tok(6, "They", "-PRON-", Pron, "PRP", "nsubj", 8),
            tok(7, "also", "also", Adv, "RB", "advmod", 8),
            tok(8, "said", "say", Verb, "VBD", "ROOT", 8),
            tok(9, "that", "that", Sconj, "IN", "mark", 11),
            tok(10, "he", "-PRON-", Pron, "PRP", "nsubj", 11),
            tok(11, "did", "do", Verb, "VBD", "ccomp", 8),
            tok(12, "n't", "not", Part, "RB", "neg", 11),
            tok(13, ".", ".", Punct, ".", "punct", 8),
        ],
    ]
}

#[test]
fn test_reported_speech_end_to_end() {
    let document = tag(hamburgers());

    assert!(tags_of(&document, 3).contains(&Tag::ComplementizerThat0));
    let that = tags_of(&document, 9);
    assert!(that.contains(&Tag::ThatComplementClause));
    assert!(that.contains(&Tag::ThatVerbClause));
    assert!(that.contains(&Tag::ThatVerbClauseNonfactive));
    assert!(tags_of(&document, 11).contains(&Tag::PvDo));
    assert!(tags_of(&document, 12).contains(&Tag::Contraction));
    // the overt "that" keeps the second clause out of the zero-complementizer count
    assert!(!tags_of(&document, 11).contains(&Tag::ComplementizerThat0));

    let counters = &document.indices.counters;
    assert_eq!(document.indices.nwords(), 12);
    assert_eq!(counters.tag_count(Tag::Pp3), 4);
    assert_eq!(counters.tag_count(Tag::PpAll), 4);
    assert_eq!(counters.tag_count(Tag::ComplementizerThat0), 1);
    assert_eq!(counters.tag_count(Tag::PastTense), 4);
    assert_eq!(counters.count(Counter::FiniteClause), 4);
    assert_eq!(counters.count(Counter::FiniteIndClause), 2);
    assert_eq!(counters.count(Counter::FiniteComplClause), 2);

    let record = IndexRecord::new(&document.name, &document.indices);
    assert_eq!(record.get("nwords"), Some(12.0));
    assert_eq!(record.get("finite_compl_clause"), Some(2.0 * 10_000.0 / 12.0));
}

#[test]
fn test_coordination_scope() {
    // "I mow the lawn and she waters the plants and flowers."
    let document = tag(vec![vec![
        tok(0, "I", "-PRON-", Pron, "PRP", "nsubj", 1),
        tok(1, "mow", "mow", Verb, "VBP", "ROOT", 1),
        tok(2, "the", "the", Det, "DT", "det", 3),
        tok(3, "lawn", "lawn", Noun, "NN", "dobj", 1),
        tok(4, "and", "and", Cconj, "CC", "cc", 1),
        tok(5, "she", "-PRON-", Pron, "PRP", "nsubj", 6),
        tok(6, "waters", "water", Verb, "VBZ", "conj", 1),
        tok(7, "the", "the", Det, "DT", "det", 8),
        tok(8, "plants", "plant", Noun, "NNS", "dobj", 6),
        tok(9, "and", "and", Cconj, "CC", "cc", 8),
        tok(10, "flowers", "flower", Noun, "NNS", "conj", 8),
        tok(11, ".", ".", Punct, ".", "punct", 1),
    ]]);
    assert!(tags_of(&document, 4).contains(&Tag::CcClause));
    assert!(tags_of(&document, 9).contains(&Tag::CcPhrase));
}

#[test]
fn test_passive_subtypes() {
    // "The cake was eaten by the dog. The window was broken."
    let document = tag(vec![
        vec![
            tok(0, "The", "the", Det, "DT", "det", 1),
            tok(1, "cake", "cake", Noun, "NN", "nsubjpass", 3),
            tok(2, "was", "be", Aux, "VBD", "auxpass", 3),
            tok(3, "eaten", "eat", Verb, "VBN", "ROOT", 3),
            tok(4, "by", "by", Adp, "IN", "agent", 3),
            tok(5, "the", "the", Det, "DT", "det", 6),
            tok(6, "dog", "dog", Noun, "NN", "pobj", 4),
            tok(7, ".", ".", Punct, ".", "punct", 3),
        ],
        vec![
            tok(8, "The", "the", Det, "DT", "det", 9),
            tok(9, "window", "window", Noun, "NN", "nsubjpass", 11),
            tok(10, "was", "be", Aux, "VBD", "auxpass", 11),
            tok(11, "broken", "break", Verb, "VBN", "ROOT", 11),
            tok(12, ".", ".", Punct, ".", "punct", 11),
        ],
    ]);
    assert!(tags_of(&document, 3).contains(&Tag::ByPassive));
    assert!(tags_of(&document, 11).contains(&Tag::AgentlessPassive));
    assert_eq!(document.indices.counters.tag_count(Tag::ByPassive), 1);
    assert_eq!(document.indices.counters.tag_count(Tag::AgentlessPassive), 1);
}

#[test]
fn test_rule_sets_share_one_battery() {
    for rule_set in [RuleSet::Published, RuleSet::Development, RuleSet::Revised] {
        let document = tag_with(rule_set, hamburgers());
        assert_eq!(document.indices.nwords(), 12, "{rule_set}");
        assert!(tags_of(&document, 3).contains(&Tag::ComplementizerThat0), "{rule_set}");
    }
}

#[test]
fn test_xml_export_recomputes_to_same_indices() {
    let document = tag(hamburgers());
    let xml = to_xml(&document).unwrap();
    let recomputed = recompute_from_xml("hamburgers.xml", &xml).unwrap();

    assert!(recomputed.unknown_tags.is_empty());
    assert!(recomputed.structure_recomputed);
    assert_eq!(recomputed.indices.counters.tags, document.indices.counters.tags);
    assert_eq!(recomputed.indices.nwords(), document.indices.nwords());
    assert_eq!(recomputed.indices, document.indices);
}

#[test]
fn test_hand_corrected_export() {
    let document = tag(hamburgers());
    let xml = to_xml(&document)
        .unwrap()
        .replace("spec_tag6=\"complementizer_that0\"", "spec_tag6=\"complementizer_zero\"");
    let recomputed = recompute_from_xml("hamburgers.xml", &xml).unwrap();

    assert_eq!(recomputed.unknown_tags, vec!["complementizer_zero".to_string()]);
    assert_eq!(recomputed.indices.counters.tag_count(Tag::ComplementizerThat0), 0);
    assert_eq!(recomputed.indices.counters.tag_count(Tag::Pp3), 4);
}
