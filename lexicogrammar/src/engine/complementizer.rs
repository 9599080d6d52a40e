//! The zero-complementizer gate: a complement clause whose "that" was left
//! out, as in "They said she liked hamburgers".

use language_utils::DependencyRelation;

use super::TokenContext;

/// Verbs whose clausal complements may drop "that".
const THAT0_VERBS: [&str; 83] = [
    "check", "consider", "ensure", "illustrate", "fear", "say", "assume", "understand", "hold",
    "appreciate", "insist", "feel", "reveal", "indicate", "wish", "decide", "express", "follow",
    "suggest", "saw", "direct", "pray", "observe", "record", "imagine", "see", "think", "show",
    "confirm", "ask", "meant", "acknowledge", "recognize", "need", "accept", "contend", "come",
    "maintain", "believe", "claim", "verify", "demonstrate", "learn", "hope", "thought", "reflect",
    "deduce", "prove", "find", "deny", "wrote", "read", "repeat", "remember", "admit", "adds",
    "advise", "compute", "reach", "trust", "yield", "state", "describe", "realize", "expect",
    "mean", "report", "know", "stress", "note", "told", "held", "explain", "hear", "gather",
    "establish", "suppose", "found", "use", "fancy", "submit", "doubt", "felt",
];

/// Words that introduce a clause overtly.
const OVERT_INTRODUCERS: [&str; 10] = [
    "that", "who", "what", "how", "where", "why", "when", "whose", "whom", "whomever",
];

const WH_NEIGHBOURS: [&str; 2] = ["whatever", "which"];

const AFTER_HEAD_BLOCKERS: [&str; 11] = [
    "\"", "'", ",", ":", "myself", "itself", "herself", "ourself", "ourselves", "themselves",
    "themself",
];

fn is_wh_neighbour(text: &str) -> bool {
    OVERT_INTRODUCERS.contains(&text) || WH_NEIGHBOURS.contains(&text)
}

fn controlled_by_that0_verb(cx: &TokenContext<'_>) -> bool {
    THAT0_VERBS.contains(&cx.head().lemma.to_lowercase().as_str())
}

fn follows_head_as_complement(cx: &TokenContext<'_>) -> bool {
    cx.token.dep == DependencyRelation::Ccomp && cx.token.i > cx.token.head
}

fn has_overt_introducer(cx: &TokenContext<'_>) -> bool {
    cx.children().any(|child| {
        child.dep == DependencyRelation::Mark
            || (OVERT_INTRODUCERS.contains(&child.lower().as_str())
                && child.dep != DependencyRelation::Det)
    })
}

fn has_finite_subject(cx: &TokenContext<'_>) -> bool {
    cx.children().any(|child| {
        matches!(
            child.dep,
            DependencyRelation::Nsubj | DependencyRelation::Csubj
        )
    })
}

/// A gerund with no form of "be" in front of it is not a finite clause.
fn is_bare_gerund(cx: &TokenContext<'_>) -> bool {
    cx.token.tag == "VBG"
        && !cx.children().any(|child| {
            child.dep == DependencyRelation::Aux && child.lemma.eq_ignore_ascii_case("be")
        })
}

fn clear_before_head(cx: &TokenContext<'_>) -> bool {
    cx.doc
        .offset(cx.head(), -1)
        .is_some_and(|before| !is_wh_neighbour(&before.text))
}

fn clear_after_head(cx: &TokenContext<'_>) -> bool {
    cx.doc.offset(cx.head(), 1).is_some_and(|after| {
        !is_wh_neighbour(&after.text) && !AFTER_HEAD_BLOCKERS.contains(&after.text.as_str())
    })
}

fn head_has_direct_object(cx: &TokenContext<'_>) -> bool {
    cx.doc.has_child_dep(cx.head(), &DependencyRelation::Dobj)
}

/// Whether this verb heads a complement clause with an omitted "that".
pub(super) fn is_zero_complementizer_clause(cx: &TokenContext<'_>) -> bool {
    controlled_by_that0_verb(cx)
        && follows_head_as_complement(cx)
        && !has_overt_introducer(cx)
        && has_finite_subject(cx)
        && !is_bare_gerund(cx)
        && clear_before_head(cx)
        && clear_after_head(cx)
        && !head_has_direct_object(cx)
}
