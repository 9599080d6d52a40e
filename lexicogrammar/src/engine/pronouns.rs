use language_utils::{DependencyRelation, PartOfSpeech};

use super::{Analyzer, TokenContext};
use crate::tags::{Tag, TagSlots};

const FIRST_PERSON: [&str; 8] = ["i", "we", "our", "us", "my", "me", "ourselves", "myself"];
const SECOND_PERSON: [&str; 7] = ["you", "your", "yourself", "ya", "thy", "thee", "thine"];
const THIRD_PERSON: [&str; 11] = [
    "he",
    "she",
    "they",
    "their",
    "his",
    "them",
    "her",
    "him",
    "themselves",
    "himself",
    "herself",
];

const INDEFINITE: [&str; 15] = [
    "everybody",
    "everyone",
    "everything",
    "somebody",
    "someone",
    "something",
    "anybody",
    "anyone",
    "anything",
    "nobody",
    "noone",
    "none",
    "nothing",
    "one",
    "ones",
];

const DEMONSTRATIVE: [&str; 4] = ["this", "that", "these", "those"];

/// Tokens after which a demonstrative stands on its own.
const DEMONSTRATIVE_BOUNDARY: [&str; 5] = ["who", ".", "!", "?", ":"];

fn person(word: &str) -> Option<Tag> {
    if FIRST_PERSON.contains(&word) {
        Some(Tag::Pp1)
    } else if SECOND_PERSON.contains(&word) {
        Some(Tag::Pp2)
    } else if THIRD_PERSON.contains(&word) {
        Some(Tag::Pp3)
    } else if word == "it" {
        Some(Tag::Pp3It)
    } else {
        None
    }
}

pub(super) struct PersonalPronouns;

impl Analyzer for PersonalPronouns {
    fn name(&self) -> &'static str {
        "personal_pronouns"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        if let Some(tag) = person(&cx.lower()) {
            slots.assign(Tag::PpAll);
            slots.assign(tag);
        }
    }
}

pub(super) struct IndefiniteDemonstrativePronouns;

impl IndefiniteDemonstrativePronouns {
    /// Whether a demonstrative is used as a pronoun rather than a determiner.
    fn is_pronominal(cx: &TokenContext<'_>) -> bool {
        use DependencyRelation::*;

        let head = cx.head();
        let before_boundary = cx
            .neighbour(1)
            .is_some_and(|next| DEMONSTRATIVE_BOUNDARY.contains(&next.lower().as_str()));

        match cx.token.dep {
            Advmod => true,
            _ if before_boundary => true,
            Nsubjpass => head.dep != Relcl,
            Pobj => true,
            Nsubj | Dobj => head.dep != Relcl && head.pos != PartOfSpeech::Noun,
            _ => false,
        }
    }
}

impl Analyzer for IndefiniteDemonstrativePronouns {
    fn name(&self) -> &'static str {
        "indefinite_demonstrative_pronouns"
    }

    fn analyze(&self, cx: &TokenContext<'_>, slots: &mut TagSlots) {
        use DependencyRelation::*;

        let word = cx.lower();
        if INDEFINITE.contains(&word.as_str())
            && matches!(cx.token.dep, Nsubj | Nsubjpass | Dobj | Pobj)
        {
            slots.assign(Tag::PpIndefinite);
        } else if DEMONSTRATIVE.contains(&word.as_str()) && Self::is_pronominal(cx) {
            slots.assign(Tag::PpDemonstrative);
        }
    }
}
