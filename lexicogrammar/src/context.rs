//! Read-only views over a parsed document: heads, children, neighbours and
//! sentence boundaries.

use language_utils::{DependencyRelation, DocumentError, ParsedDocument, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Document position of the first token.
    pub start: usize,
    /// One past the document position of the last token.
    pub end: usize,
    pub has_question_mark: bool,
}

impl SentenceSpan {
    pub fn contains(&self, position: usize) -> bool {
        (self.start..self.end).contains(&position)
    }
}

pub struct DocumentContext<'d> {
    tokens: Vec<&'d Token>,
    children: Vec<Vec<usize>>,
    sentences: Vec<SentenceSpan>,
    sentence_of: Vec<usize>,
}

impl<'d> DocumentContext<'d> {
    pub fn new(document: &'d ParsedDocument) -> Result<Self, DocumentError> {
        document.validate()?;

        let tokens: Vec<&Token> = document.tokens().collect();
        let mut children = vec![Vec::new(); tokens.len()];
        for token in &tokens {
            if token.head != token.i {
                children[token.head].push(token.i);
            }
        }

        let mut sentences = Vec::with_capacity(document.sentences.len());
        let mut sentence_of = Vec::with_capacity(tokens.len());
        let mut start = 0;
        for (index, sentence) in document.sentences.iter().enumerate() {
            sentences.push(SentenceSpan {
                start,
                end: start + sentence.len(),
                has_question_mark: sentence.iter().any(|token| token.text == "?"),
            });
            sentence_of.extend(std::iter::repeat_n(index, sentence.len()));
            start += sentence.len();
        }

        Ok(Self {
            tokens,
            children,
            sentences,
            sentence_of,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, position: usize) -> Option<&'d Token> {
        self.tokens.get(position).copied()
    }

    pub fn head(&self, token: &Token) -> &'d Token {
        // heads are range-checked when the context is built
        self.tokens[token.head]
    }

    /// Tokens whose head is `token`, in document order.
    pub fn children(&self, token: &Token) -> impl Iterator<Item = &'d Token> + '_ {
        self.children[token.i]
            .iter()
            .map(move |&position| self.tokens[position])
    }

    pub fn has_child_dep(&self, token: &Token, relation: &DependencyRelation) -> bool {
        self.children(token).any(|child| &child.dep == relation)
    }

    /// The token `delta` positions away, if it is inside the document.
    pub fn offset(&self, token: &Token, delta: isize) -> Option<&'d Token> {
        token
            .i
            .checked_add_signed(delta)
            .and_then(|position| self.token(position))
    }

    pub fn sentence(&self, token: &Token) -> &SentenceSpan {
        &self.sentences[self.sentence_of[token.i]]
    }

    pub fn position_in_sentence(&self, token: &Token) -> usize {
        token.i - self.sentence(token).start
    }

    pub fn sentences(&self) -> &[SentenceSpan] {
        &self.sentences
    }
}
