//! Indices from XML exports, so hand-corrected annotations can be counted
//! again without re-running the tagger.

use language_utils::{DependencyRelation, ParsedDocument, PartOfSpeech, Token};
use log::{debug, warn};

use crate::aggregate::{DocumentIndices, FeatureCounters};
use crate::context::DocumentContext;
use crate::engine::{clausal_complexity, noun_phrase_complexity};
use crate::error::RecomputeError;
use crate::export::{XmlDocument, XmlWord};
use crate::tags::Tag;

const NON_WORD_UPOS: [&str; 4] = ["PUNCT", "SYM", "SPACE", "X"];

#[derive(Clone, Debug)]
pub struct Recomputed {
    pub indices: DocumentIndices,
    /// Tag values that are not in the registry, in document order.
    pub unknown_tags: Vec<String>,
    /// False when the dependency tree in the file was inconsistent and only
    /// tag and word counts could be taken.
    pub structure_recomputed: bool,
}

pub fn parse_xml(xml: &str) -> Result<XmlDocument, RecomputeError> {
    Ok(quick_xml::de::from_str(xml)?)
}

fn rebuild_token(word: &XmlWord) -> Token {
    Token {
        text: word.raw.clone(),
        lemma: word.lemma.clone(),
        pos: PartOfSpeech::from_label(&word.upos).unwrap_or(PartOfSpeech::X),
        tag: word.pos.clone(),
        dep: DependencyRelation::from_label(&word.dep.relation),
        i: word.idx,
        head: word.dep.head_id,
    }
}

fn rebuild_document(name: &str, xml: &XmlDocument) -> ParsedDocument {
    ParsedDocument {
        name: name.to_string(),
        sentences: xml
            .sentences
            .iter()
            .map(|sentence| sentence.words.iter().map(rebuild_token).collect())
            .collect(),
    }
}

/// Counts tags by attribute value, whichever slot holds them.
pub fn recompute(name: &str, xml: &XmlDocument) -> Recomputed {
    let mut counters = FeatureCounters::default();
    let mut unknown_tags = Vec::new();

    for word in xml.words() {
        for value in word.biber_tags.values() {
            match Tag::from_label(value) {
                Some(tag) => counters.record_tag(tag),
                None => {
                    warn!("{name}: unknown tag `{value}` on word {}", word.idx);
                    unknown_tags.push(value.to_string());
                }
            }
        }
        if !NON_WORD_UPOS.contains(&word.upos.as_str()) {
            counters.record_word_form(&word.raw, &word.lemma, &word.upos);
        }
    }

    let document = rebuild_document(name, xml);
    let structure_recomputed = match DocumentContext::new(&document) {
        Ok(doc) => {
            for token in document.tokens() {
                noun_phrase_complexity(token, &doc, &mut counters);
                clausal_complexity(token, &doc, &mut counters);
            }
            true
        }
        Err(err) => {
            warn!("{name}: dependency tree not recomputed: {err}");
            false
        }
    };

    let indices = counters.finalize();
    debug!(
        "{name}: recomputed {} words, {} unknown tags",
        indices.nwords(),
        unknown_tags.len()
    );
    Recomputed {
        indices,
        unknown_tags,
        structure_recomputed,
    }
}

pub fn recompute_from_xml(name: &str, xml: &str) -> Result<Recomputed, RecomputeError> {
    Ok(recompute(name, &parse_xml(xml)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Counter;

    const HAND_EDITED: &str = r#"<?xml version="1.0" ?>
<tagged_text>
    <sentence sent_id="0">
        <sentence_text>Dogs bark !</sentence_text>
        <word idx="0">
            <raw>Dogs</raw>
            <lemma>dog</lemma>
            <biber_tags main_tag="nn_all" semantic_tag1="nn_animal"/>
            <UPOS>NOUN</UPOS>
            <POS>NNS</POS>
            <DEP head="bark" head_id="1">nsubj</DEP>
        </word>
        <word idx="1">
            <raw>bark</raw>
            <lemma>bark</lemma>
            <biber_tags main_tag="verb" spec_tag1="non_past_tense"/>
            <UPOS>VERB</UPOS>
            <POS>VBP</POS>
            <DEP head="bark" head_id="1">ROOT</DEP>
        </word>
        <word idx="2">
            <raw>!</raw>
            <lemma>!</lemma>
            <biber_tags/>
            <UPOS>PUNCT</UPOS>
            <POS>.</POS>
            <DEP head="bark" head_id="1">punct</DEP>
        </word>
    </sentence>
</tagged_text>
"#;

    #[test]
    fn test_counts_hand_edited_file() {
        let recomputed = recompute_from_xml("dogs.xml", HAND_EDITED).unwrap();
        let counters = &recomputed.indices.counters;
        assert_eq!(recomputed.indices.nwords(), 2);
        assert_eq!(counters.tag_count(Tag::NnAll), 1);
        assert_eq!(counters.tag_count(Tag::Verb), 1);
        assert_eq!(counters.tag_count(Tag::NonPastTense), 1);
        assert_eq!(recomputed.unknown_tags, vec!["nn_animal".to_string()]);
        assert!(recomputed.structure_recomputed);
        assert_eq!(counters.count(Counter::Np), 1);
        assert_eq!(counters.count(Counter::FiniteIndClause), 1);
        assert_eq!(recomputed.indices.wrd_length, 4.0);
    }

    #[test]
    fn test_inconsistent_tree_keeps_tag_counts() {
        let broken = HAND_EDITED.replace("head_id=\"1\">punct", "head_id=\"9\">punct");
        let recomputed = recompute_from_xml("dogs.xml", &broken).unwrap();
        assert!(!recomputed.structure_recomputed);
        assert_eq!(recomputed.indices.nwords(), 2);
        assert_eq!(recomputed.indices.counters.tag_count(Tag::Verb), 1);
        assert_eq!(recomputed.indices.counters.count(Counter::AllClauses), 0);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(recompute_from_xml("bad.xml", "<tagged_text><sentence>").is_err());
    }
}
