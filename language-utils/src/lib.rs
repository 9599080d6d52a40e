//! Token-level types shared by the tagger and its tools.
//!
//! Documents arrive already segmented, tagged, lemmatized and parsed. This
//! crate only describes that shape and checks that it is consistent.

pub mod dependency;

pub use dependency::DependencyRelation;

#[derive(
    Clone, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd, Copy,
)]
pub enum PartOfSpeech {
    #[serde(rename = "ADJ")]
    Adj, // adjective
    #[serde(rename = "ADP")]
    Adp, // adposition
    #[serde(rename = "ADV")]
    Adv, // adverb
    #[serde(rename = "AUX")]
    Aux, // auxiliary
    #[serde(rename = "CCONJ")]
    Cconj, // coordinating conjunction
    #[serde(rename = "CONJ")]
    Conj, // coordinating conjunction (older English models)
    #[serde(rename = "DET")]
    Det, // determiner
    #[serde(rename = "INTJ")]
    Intj, // interjection
    #[serde(rename = "NOUN")]
    Noun, // noun
    #[serde(rename = "NUM")]
    Num, // numeral
    #[serde(rename = "PART")]
    Part, // particle
    #[serde(rename = "PRON")]
    Pron, // pronoun
    #[serde(rename = "PROPN")]
    Propn, // proper noun
    #[serde(rename = "PUNCT")]
    Punct, // punctuation
    #[serde(rename = "SCONJ")]
    Sconj, // subordinating conjunction
    #[serde(rename = "SYM")]
    Sym, // symbol
    #[serde(rename = "VERB")]
    Verb, // verb
    #[serde(rename = "SPACE")]
    Space, // space
    #[serde(rename = "X")]
    X, // other
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 19] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Conj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Propn,
        PartOfSpeech::Punct,
        PartOfSpeech::Sconj,
        PartOfSpeech::Sym,
        PartOfSpeech::Verb,
        PartOfSpeech::Space,
        PartOfSpeech::X,
    ];

    /// The label as the parser writes it (`NOUN`, `PROPN`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::X => "X",
        }
    }

    pub fn from_label(label: &str) -> Option<PartOfSpeech> {
        Self::ALL.into_iter().find(|pos| pos.label() == label)
    }

    /// Punctuation, symbols, whitespace and unlabeled tokens are not words.
    pub fn is_word(&self) -> bool {
        !matches!(
            self,
            PartOfSpeech::Punct | PartOfSpeech::Sym | PartOfSpeech::Space | PartOfSpeech::X
        )
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            PartOfSpeech::Adj => "adjective",
            PartOfSpeech::Adp => "adposition",
            PartOfSpeech::Adv => "adverb",
            PartOfSpeech::Aux => "auxiliary",
            PartOfSpeech::Cconj | PartOfSpeech::Conj => "coordinating conjunction",
            PartOfSpeech::Det => "determiner",
            PartOfSpeech::Intj => "interjection",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Num => "numeral",
            PartOfSpeech::Part => "particle",
            PartOfSpeech::Pron => "pronoun",
            PartOfSpeech::Propn => "proper noun",
            PartOfSpeech::Punct => "punctuation",
            PartOfSpeech::Sconj => "subordinating conjunction",
            PartOfSpeech::Sym => "symbol",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Space => "space",
            PartOfSpeech::X => "other",
        };
        write!(f, "{word}")
    }
}

/// One parsed token. `i` and `head` are positions in the whole document,
/// and a sentence root is its own head.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Fine-grained (Penn Treebank) tag.
    pub tag: String,
    pub dep: DependencyRelation,
    pub i: usize,
    pub head: usize,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ParsedDocument {
    #[serde(default)]
    pub name: String,
    pub sentences: Vec<Vec<Token>>,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("token {found} is at document position {expected}")]
    PositionMismatch { expected: usize, found: usize },
    #[error("token {token} has head {head}, but the document only has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },
    #[error("could not read parsed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParsedDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: ParsedDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flatten()
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Positions must follow document order and every head must point
    /// inside the document.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let len = self.token_count();
        for (expected, token) in self.tokens().enumerate() {
            if token.i != expected {
                return Err(DocumentError::PositionMismatch {
                    expected,
                    found: token.i,
                });
            }
            if token.head >= len {
                return Err(DocumentError::HeadOutOfRange {
                    token: token.i,
                    head: token.head,
                    len,
                });
            }
        }
        Ok(())
    }
}

/// Words of a sentence joined by single spaces.
pub fn sentence_text(sentence: &[Token]) -> String {
    sentence
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
