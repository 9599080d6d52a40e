//! Annotated-text exports: the tab-separated vertical format and the XML
//! format that recomputation reads back.

use std::fmt::Write as _;

use itertools::Itertools;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::engine::{TaggedDocument, TaggedToken};
use crate::error::ExportError;
use crate::tags::{Slot, TagSlots};

/// Printed for an empty slot in the vertical format.
pub const NOT_APPLICABLE: &str = "n/a";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, FromStr, Serialize, Deserialize)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerticalLayout {
    /// idx word lemma tag dep head_idx, then the slots.
    #[default]
    Simple,
    /// idx word lemma pos tag dep head head_idx, then the slots.
    Full,
}

fn vertical_line(tagged: &TaggedToken, layout: VerticalLayout) -> String {
    let token = &tagged.token;
    let lemma = token.lemma.to_lowercase();
    let index = token.i.to_string();
    let head_index = token.head.to_string();
    let mut columns: Vec<&str> = match layout {
        VerticalLayout::Simple => vec![
            index.as_str(),
            token.text.as_str(),
            lemma.as_str(),
            token.tag.as_str(),
            token.dep.as_str(),
            head_index.as_str(),
        ],
        VerticalLayout::Full => vec![
            index.as_str(),
            token.text.as_str(),
            lemma.as_str(),
            token.pos.label(),
            token.tag.as_str(),
            token.dep.as_str(),
            tagged.head_text.as_str(),
            head_index.as_str(),
        ],
    };
    columns.extend(
        Slot::ALL
            .iter()
            .map(|slot| tagged.slots.get(*slot).map_or(NOT_APPLICABLE, |tag| tag.as_str())),
    );
    columns.join("\t")
}

/// One `#sentence N` block per non-empty sentence. Sentence numbers keep
/// their position in the document even when empty sentences are skipped.
pub fn to_vertical(document: &TaggedDocument, layout: VerticalLayout) -> String {
    let mut out = String::new();
    for (id, sentence) in document.sentences.iter().enumerate() {
        if sentence.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        // writing into a String cannot fail
        let _ = write!(out, "#sentence {id}");
        for tagged in sentence {
            out.push('\n');
            out.push_str(&vertical_line(tagged, layout));
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tagged_text")]
pub struct XmlDocument {
    #[serde(rename = "sentence", default)]
    pub sentences: Vec<XmlSentence>,
}

impl XmlDocument {
    pub fn words(&self) -> impl Iterator<Item = &XmlWord> {
        self.sentences.iter().flat_map(|sentence| &sentence.words)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlSentence {
    #[serde(rename = "@sent_id")]
    pub sent_id: usize,
    #[serde(default)]
    pub sentence_text: String,
    #[serde(rename = "word", default)]
    pub words: Vec<XmlWord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlWord {
    #[serde(rename = "@idx")]
    pub idx: usize,
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub biber_tags: XmlTags,
    #[serde(rename = "UPOS", default)]
    pub upos: String,
    #[serde(rename = "POS", default)]
    pub pos: String,
    #[serde(rename = "DEP")]
    pub dep: XmlDependency,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlDependency {
    #[serde(rename = "@head", default)]
    pub head: String,
    #[serde(rename = "@head_id")]
    pub head_id: usize,
    #[serde(rename = "$text", default)]
    pub relation: String,
}

/// One attribute per filled slot. Attribute values are kept as text so
/// hand-edited files with unknown labels still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlTags {
    #[serde(rename = "@main_tag", skip_serializing_if = "Option::is_none")]
    pub main_tag: Option<String>,
    #[serde(rename = "@main_tag2", skip_serializing_if = "Option::is_none")]
    pub main_tag2: Option<String>,
    #[serde(rename = "@spec_tag1", skip_serializing_if = "Option::is_none")]
    pub spec_tag1: Option<String>,
    #[serde(rename = "@spec_tag2", skip_serializing_if = "Option::is_none")]
    pub spec_tag2: Option<String>,
    #[serde(rename = "@spec_tag3", skip_serializing_if = "Option::is_none")]
    pub spec_tag3: Option<String>,
    #[serde(rename = "@spec_tag4", skip_serializing_if = "Option::is_none")]
    pub spec_tag4: Option<String>,
    #[serde(rename = "@spec_tag5", skip_serializing_if = "Option::is_none")]
    pub spec_tag5: Option<String>,
    #[serde(rename = "@spec_tag6", skip_serializing_if = "Option::is_none")]
    pub spec_tag6: Option<String>,
    #[serde(rename = "@semantic_tag1", skip_serializing_if = "Option::is_none")]
    pub semantic_tag1: Option<String>,
    #[serde(rename = "@semantic_tag2", skip_serializing_if = "Option::is_none")]
    pub semantic_tag2: Option<String>,
}

impl XmlTags {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::MainTag => &mut self.main_tag,
            Slot::MainTag2 => &mut self.main_tag2,
            Slot::SpecTag1 => &mut self.spec_tag1,
            Slot::SpecTag2 => &mut self.spec_tag2,
            Slot::SpecTag3 => &mut self.spec_tag3,
            Slot::SpecTag4 => &mut self.spec_tag4,
            Slot::SpecTag5 => &mut self.spec_tag5,
            Slot::SpecTag6 => &mut self.spec_tag6,
            Slot::SemanticTag1 => &mut self.semantic_tag1,
            Slot::SemanticTag2 => &mut self.semantic_tag2,
        }
    }

    /// Attribute values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [
            &self.main_tag,
            &self.main_tag2,
            &self.spec_tag1,
            &self.spec_tag2,
            &self.spec_tag3,
            &self.spec_tag4,
            &self.spec_tag5,
            &self.spec_tag6,
            &self.semantic_tag1,
            &self.semantic_tag2,
        ]
        .into_iter()
        .filter_map(|value| value.as_deref())
    }
}

impl From<&TagSlots> for XmlTags {
    fn from(slots: &TagSlots) -> Self {
        let mut tags = XmlTags::default();
        for (slot, tag) in slots.iter() {
            *tags.slot_mut(slot) = Some(tag.as_str().to_string());
        }
        tags
    }
}

impl From<&TaggedToken> for XmlWord {
    fn from(tagged: &TaggedToken) -> Self {
        let token = &tagged.token;
        XmlWord {
            idx: token.i,
            raw: token.text.clone(),
            lemma: token.lemma.to_lowercase(),
            biber_tags: XmlTags::from(&tagged.slots),
            upos: token.pos.label().to_string(),
            pos: token.tag.clone(),
            dep: XmlDependency {
                head: tagged.head_text.clone(),
                head_id: token.head,
                relation: token.dep.as_str().to_string(),
            },
        }
    }
}

impl From<&TaggedDocument> for XmlDocument {
    fn from(document: &TaggedDocument) -> Self {
        let sentences = document
            .sentences
            .iter()
            .enumerate()
            .map(|(sent_id, sentence)| XmlSentence {
                sent_id,
                sentence_text: sentence.iter().map(|tagged| &tagged.token.text).join(" "),
                words: sentence.iter().map(XmlWord::from).collect(),
            })
            .collect();
        XmlDocument { sentences }
    }
}

pub fn to_xml(document: &TaggedDocument) -> Result<String, ExportError> {
    let mut xml = String::from("<?xml version=\"1.0\" ?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 4);
    XmlDocument::from(document).serialize(serializer)?;
    xml.push('\n');
    Ok(xml)
}
