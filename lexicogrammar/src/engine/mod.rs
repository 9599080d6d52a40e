//! The tagging pass: an ordered battery of analyzers run over every token.

mod clauses;
mod complementizer;
mod complexity;
mod modifiers;
mod nouns;
mod pronouns;
mod verbs;

use std::sync::Arc;

use itertools::Itertools;
use language_utils::{DependencyRelation, ParsedDocument, Token};
use log::debug;
use parse_display::{Display, FromStr};

use crate::aggregate::{DocumentIndices, FeatureCounters};
use crate::context::DocumentContext;
use crate::error::{RegistryError, TaggingError};
use crate::lexicon::LexicalResources;
use crate::tags::{Tag, TagSlots, verify_registry};

pub use complexity::{clausal_complexity, noun_phrase_complexity};

/// Which generation of the rules to run.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Display,
    FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Length-gated nominalization, stop list checked on the lemma.
    Published,
    /// Longest-suffix nominalization whose fallback scan reads the
    /// proper-noun table for every noun.
    #[default]
    Development,
    /// Development rules with the general suffix table in the fallback
    /// scan and class lookups matched to adjective position.
    Revised,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NominalizationStrategy {
    LengthGated,
    ProperNounFallback,
    GeneralSuffixes,
}

impl RuleSet {
    pub fn nominalization(self) -> NominalizationStrategy {
        match self {
            RuleSet::Published => NominalizationStrategy::LengthGated,
            RuleSet::Development => NominalizationStrategy::ProperNounFallback,
            RuleSet::Revised => NominalizationStrategy::GeneralSuffixes,
        }
    }

    /// Attributive adjectives get attributive classes and predicative
    /// adjectives predicative ones. Otherwise only predicative adjectives
    /// are classed, against the attributive list.
    pub fn positional_adjective_classes(self) -> bool {
        self == RuleSet::Revised
    }
}

/// Everything an analyzer may look at for one token.
pub struct TokenContext<'a> {
    pub token: &'a Token,
    pub doc: &'a DocumentContext<'a>,
    pub lexicon: &'a LexicalResources,
    pub rule_set: RuleSet,
}

impl<'a> TokenContext<'a> {
    pub fn head(&self) -> &'a Token {
        self.doc.head(self.token)
    }

    pub fn children(&self) -> impl Iterator<Item = &'a Token> + 'a {
        self.doc.children(self.token)
    }

    pub fn has_child(&self, relation: &DependencyRelation) -> bool {
        self.doc.has_child_dep(self.token, relation)
    }

    pub fn neighbour(&self, delta: isize) -> Option<&'a Token> {
        self.doc.offset(self.token, delta)
    }

    pub fn is_sentence_initial(&self) -> bool {
        self.doc.position_in_sentence(self.token) == 0
    }

    pub fn lower(&self) -> String {
        self.token.text.to_lowercase()
    }

    pub fn lemma(&self) -> String {
        self.token.lemma.to_lowercase()
    }
}

pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots);
}

/// The analyzers in the order they run. Later analyzers win when two
/// write the same slot.
pub fn battery() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(pronouns::PersonalPronouns),
        Box::new(pronouns::IndefiniteDemonstrativePronouns),
        Box::new(verbs::ProVerbDo),
        Box::new(verbs::Contractions),
        Box::new(verbs::SplitAuxiliaries),
        Box::new(clauses::Subordinators),
        Box::new(clauses::Coordination),
        Box::new(clauses::WhWords),
        Box::new(nouns::Nouns),
        Box::new(nouns::NounSemantics),
        Box::new(verbs::MainVerbBe),
        Box::new(verbs::VerbForms),
        Box::new(verbs::Passives),
        Box::new(verbs::VerbSemantics),
        Box::new(modifiers::Adjectives),
        Box::new(modifiers::Adverbs),
        Box::new(clauses::ThatClauses),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaggedToken {
    pub token: Token,
    pub head_text: String,
    pub slots: TagSlots,
}

#[derive(Clone, Debug)]
pub struct TaggedDocument {
    pub name: String,
    pub sentences: Vec<Vec<TaggedToken>>,
    pub indices: DocumentIndices,
}

impl TaggedDocument {
    pub fn tokens(&self) -> impl Iterator<Item = &TaggedToken> {
        self.sentences.iter().flatten()
    }

    /// Count of tokens carrying `tag`.
    pub fn tag_count(&self, tag: Tag) -> usize {
        self.tokens()
            .filter(|tagged| tagged.slots.contains(tag))
            .count()
    }
}

pub struct TaggingEngine {
    lexicon: Arc<LexicalResources>,
    rule_set: RuleSet,
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl TaggingEngine {
    pub fn new(lexicon: Arc<LexicalResources>, rule_set: RuleSet) -> Result<Self, RegistryError> {
        verify_registry()?;
        Ok(Self {
            lexicon,
            rule_set,
            analyzers: battery(),
        })
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn tag_document(&self, document: &ParsedDocument) -> Result<TaggedDocument, TaggingError> {
        let doc = DocumentContext::new(document)?;
        let mut counters = FeatureCounters::default();

        let sentences = document
            .sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .map(|token| {
                        let cx = TokenContext {
                            token,
                            doc: &doc,
                            lexicon: &self.lexicon,
                            rule_set: self.rule_set,
                        };
                        let mut slots = TagSlots::default();
                        for analyzer in &self.analyzers {
                            analyzer.analyze(&cx, &mut slots);
                        }

                        counters.record_tags(&slots);
                        counters.record_word(token);
                        noun_phrase_complexity(token, &doc, &mut counters);
                        clausal_complexity(token, &doc, &mut counters);

                        TaggedToken {
                            token: token.clone(),
                            head_text: doc.head(token).text.clone(),
                            slots,
                        }
                    })
                    .collect_vec()
            })
            .collect_vec();

        let indices = counters.finalize();
        debug!(
            "{}: {} sentences, {} words, {} tags",
            document.name,
            sentences.len(),
            indices.nwords(),
            indices.counters.tags.iter().map(|(_, count)| *count).sum::<u32>(),
        );

        Ok(TaggedDocument {
            name: document.name.clone(),
            sentences,
            indices,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use language_utils::PartOfSpeech;

    use super::*;
    use crate::context::tests::tok;

    pub(crate) fn engine(rule_set: RuleSet) -> TaggingEngine {
        let lexicon = LexicalResources::bundled().unwrap();
        TaggingEngine::new(Arc::new(lexicon), rule_set).unwrap()
    }

    pub(crate) fn tag(sentences: Vec<Vec<Token>>) -> TaggedDocument {
        let document = ParsedDocument {
            name: "test".to_string(),
            sentences,
        };
        engine(RuleSet::default()).tag_document(&document).unwrap()
    }

    pub(crate) fn slots_of<'d>(document: &'d TaggedDocument, text: &str) -> &'d TagSlots {
        &document
            .tokens()
            .find(|tagged| tagged.token.text == text)
            .unwrap()
            .slots
    }

    #[test]
    fn test_rule_set_names() {
        assert_eq!(RuleSet::default(), RuleSet::Development);
        assert_eq!("published".parse::<RuleSet>().unwrap(), RuleSet::Published);
        assert_eq!(RuleSet::Revised.to_string(), "revised");
        assert!("newest".parse::<RuleSet>().is_err());
    }

    #[test]
    fn test_battery_names_are_unique() {
        let names = battery().iter().map(|analyzer| analyzer.name()).collect_vec();
        assert_eq!(names.len(), 17);
        assert!(names.iter().all_unique());
    }

    #[test]
    fn test_rejects_inconsistent_document() {
        use PartOfSpeech::*;
        let document = ParsedDocument {
            name: "broken".to_string(),
            sentences: vec![vec![tok(0, "Hi", "hi", Intj, "UH", "ROOT", 3)]],
        };
        let result = engine(RuleSet::default()).tag_document(&document);
        assert!(matches!(result, Err(TaggingError::Document(_))));
    }

    #[test]
    fn test_empty_document() {
        let document = tag(vec![]);
        assert_eq!(document.indices.nwords(), 0);
        assert_eq!(document.indices.mattr, 0.0);
        assert_eq!(document.indices.wrd_length, 0.0);
    }
}
