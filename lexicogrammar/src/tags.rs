//! The category registry: every tag a token can carry and the slot it lives in.

use enumap::EnuMap;
use log::trace;
use rustc_hash::FxHashMap;

use crate::error::RegistryError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, EnuMap)]
pub enum Slot {
    MainTag,
    MainTag2,
    SpecTag1,
    SpecTag2,
    SpecTag3,
    SpecTag4,
    SpecTag5,
    SpecTag6,
    SemanticTag1,
    SemanticTag2,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::MainTag => "main_tag",
            Slot::MainTag2 => "main_tag2",
            Slot::SpecTag1 => "spec_tag1",
            Slot::SpecTag2 => "spec_tag2",
            Slot::SpecTag3 => "spec_tag3",
            Slot::SpecTag4 => "spec_tag4",
            Slot::SpecTag5 => "spec_tag5",
            Slot::SpecTag6 => "spec_tag6",
            Slot::SemanticTag1 => "semantic_tag1",
            Slot::SemanticTag2 => "semantic_tag2",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! tags {
    ($($slot:ident { $($variant:ident => $label:literal,)* })*) => {
        /// A label from the category registry. Labels are part of the
        /// export formats and keep their historical spellings.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, EnuMap)]
        pub enum Tag {
            $($($variant,)*)*
        }

        impl Tag {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($(Tag::$variant => $label,)*)*
                }
            }

            pub fn slot(self) -> Slot {
                match self {
                    $($(Tag::$variant => Slot::$slot,)*)*
                }
            }

            pub fn from_label(label: &str) -> Option<Tag> {
                match label {
                    $($($label => Some(Tag::$variant),)*)*
                    _ => None,
                }
            }
        }
    };
}

tags! {
    MainTag {
        NnAll => "nn_all",
        PrepPhrase => "prep_phrase",
        Verb => "verb",
        PpAll => "pp_all",
        WhRelativeClause => "wh_relative_clause",
    }
    MainTag2 {
        AllPhrasalVerbs => "all_phrasal_verbs",
    }
    SpecTag1 {
        Nominalization => "nominalization",
        Pp1 => "pp1",
        Pp2 => "pp2",
        Pp3 => "pp3",
        Pp3It => "pp3_it",
        PpIndefinite => "pp_indefinite",
        PpDemonstrative => "pp_demonstrative",
        CcPhrase => "cc_phrase",
        CcClause => "cc_clause",
        WhQuestion => "wh_question",
        PastTense => "past_tense",
        PerfectAspect => "perfect_aspect",
        NonPastTense => "non_past_tense",
        JjAttributive => "jj_attributive",
        JjPredicative => "jj_predicative",
        DiscourseParticle => "discourse_particle",
        PlaceAdverbials => "place_adverbials",
        TimeAdverbials => "time_adverbials",
        ConjunctsAdverb => "conjuncts_adverb",
        DowntonersAdverb => "downtoners_adverb",
        HedgesAdverb => "hedges_adverb",
        AmplifiersAdverb => "amplifiers_adverb",
        Emphatics => "emphatics",
        WhClause => "wh_clause",
        WhRelativeSubjClause => "wh_relative_subj_clause",
        WhRelativeObjClause => "wh_relative_obj_clause",
        WhRelativePrepClause => "wh_relative_prep_clause",
        ThatRelativeClause => "that_relative_clause",
        ThatComplementClause => "that_complement_clause",
    }
    SpecTag2 {
        PvDo => "pv_do",
        SplitAux => "split_aux",
        BeMv => "be_mv",
        ThatVerbClause => "that_verb_clause",
        ThatAdjectiveClause => "that_adjective_clause",
        ThatNounClause => "that_noun_clause",
    }
    SpecTag3 {
        AdverbialSubordinatorCausitive => "adverbial_subordinator_causitive",
        AdverbialSubordinatorConditional => "adverbial_subordinator_conditional",
        AdverbialSubordinatorOther => "adverbial_subordinator_other",
        AgentlessPassive => "agentless_passive",
        ByPassive => "by_passive",
    }
    SpecTag4 {
        Contraction => "contraction",
        ToClause => "to_clause",
    }
    SpecTag5 {
        ModalPossibility => "modal_possibility",
        ModalNecessity => "modal_necessity",
        ModalPredictive => "modal_predictive",
        ToClauseNoun => "to_clause_noun",
        ToClauseVerb => "to_clause_verb",
        ToClauseAdjective => "to_clause_adjective",
    }
    SpecTag6 {
        PastParticipialClause => "past_participial_clause",
        ComplementizerThat0 => "complementizer_that0",
    }
    SemanticTag1 {
        NnAnimate => "nn_animate",
        NnCognitive => "nn_cognitive",
        NnConcrete => "nn_concrete",
        NnTechnical => "nn_technical",
        NnQuantity => "nn_quantity",
        NnPlace => "nn_place",
        NnGroup => "nn_group",
        NnAbstract => "nn_abstract",
        ActivityVerb => "activity_verb",
        CommunicationVerb => "communication_verb",
        MentalVerb => "mental_verb",
        CausationVerb => "causation_verb",
        OccurrenceVerb => "occurrence_verb",
        ExistenceVerb => "existence_verb",
        AspectualVerb => "aspectual_verb",
        IntransitiveActivityPhrasalVerb => "intransitive_activity_phrasal_verb",
        IntransitiveOccurencePhrasalVerb => "intransitive_occurence_phrasal_verb",
        CopularPhrasalVerb => "copular_phrasal_verb",
        IntransitiveAspectualPhrasalVerb => "intransitive_aspectual_phrasal_verb",
        TransitiveActivityPhrasalVerb => "transitive_activity_phrasal_verb",
        TransitiveMentalPhrasalVerb => "transitive_mental_phrasal_verb",
        TransitiveCommunicationPhrasalVerb => "transitive_communication_phrasal_verb",
        SizeAttributiveAdj => "size_attributive_adj",
        TimeAttributiveAdj => "time_attributive_adj",
        ColorAttributiveAdj => "color_attributive_adj",
        EvaluativeAttributiveAdj => "evaluative_attributive_adj",
        RelationalAttributiveAdj => "relational_attributive_adj",
        TopicalAttributiveAdj => "topical__attributive_adj",
        AttitudinalAdj => "attitudinal_adj",
        LikelihoodAdj => "likelihood_adj",
        CertaintyAdj => "certainty_adj",
        AbilityWillingnessAdj => "ability_willingness_adj",
        PersonalAffectAdj => "personal_affect_adj",
        EaseDifficultyAdj => "ease_difficulty_adj",
        EvaluativeAdj => "evaluative_adj",
        AttitudinalAdverb => "attitudinal_adverb",
        FactiveAdverb => "factive_adverb",
        LikelihoodAdverb => "likelihood_adverb",
        NonfactiveAdverb => "nonfactive_adverb",
        ThatVerbClauseNonfactive => "that_verb_clause_nonfactive",
        ThatVerbClauseAttitudinal => "that_verb_clause_attitudinal",
        ThatVerbClauseFactive => "that_verb_clause_factive",
        ThatVerbClauseLikelihood => "that_verb_clause_likelihood",
        ThatNounClauseNonfactive => "that_noun_clause_nonfactive",
        ThatNounClauseAttitudinal => "that_noun_clause_attitudinal",
        ThatNounClauseFactive => "that_noun_clause_factive",
        ThatNounClauseLikelihood => "that_noun_clause_likelihood",
        ToAdjectiveClauseCertainty => "to_adjective_clause_certainty",
        ToAdjectiveClauseAbilityWillingness => "to_adjective_clause_ability_willingness",
        ToAdjectiveClausePersonalAffect => "to_adjective_clause_personal_affect",
        ToAdjectiveClauseEaseDifficulty => "to_adjective_clause_ease_difficulty",
        ToAdjectiveClauseEvaluative => "to_adjective_clause_evaluative",
        ThatAdjectiveClauseAttitudinal => "that_adjective_clause_attitudinal",
        ThatAdjectiveClauseLikelihood => "that_adjective_clause_likelihood",
    }
    SemanticTag2 {
        ToClauseVerbToSpeechAct => "to_clause_verb_to_speech_act",
        ToClauseVerbCognition => "to_clause_verb_cognition",
        ToClauseVerbDesire => "to_clause_verb_desire",
        ToClauseVerbToCausative => "to_clause_verb_to_causative",
        ToClauseVerbProbability => "to_clause_verb_probability",
        ToClauseAdjectiveCertainty => "to_clause_adjective_certainty",
        ToClauseAdjectiveAbilityWillingness => "to_clause_adjective_ability_willingness",
        ToClauseAdjectivePersonalAffect => "to_clause_adjective_personal_affect",
        ToClauseAdjectiveEaseDifficulty => "to_clause_adjective_ease_difficulty",
        ToClauseAdjectiveEvaluative => "to_clause_adjective_evaluative",
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_label(s).ok_or_else(|| format!("unknown tag `{s}`"))
    }
}

/// Checks that no label is admissible in two slots and that every label
/// parses back to its own tag. Run once before tagging starts.
pub fn verify_registry() -> Result<(), RegistryError> {
    let mut seen: FxHashMap<&'static str, Slot> = FxHashMap::default();
    for tag in Tag::ALL {
        let label = tag.as_str();
        if let Some(first) = seen.insert(label, tag.slot()) {
            return Err(RegistryError::DuplicateLabel {
                label,
                first,
                second: tag.slot(),
            });
        }
        if Tag::from_label(label) != Some(tag) {
            return Err(RegistryError::Unparseable(label));
        }
    }
    Ok(())
}

/// The tags assigned to one token, at most one per slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagSlots(SlotMap<Option<Tag>>);

impl TagSlots {
    /// Writes `tag` into its own slot and returns whatever it displaced.
    pub fn assign(&mut self, tag: Tag) -> Option<Tag> {
        let previous = self.0.get_mut(&tag.slot()).replace(tag);
        if let Some(previous) = previous.filter(|previous| *previous != tag) {
            trace!("{} replaced {previous} with {tag}", tag.slot());
        }
        previous
    }

    pub fn get(&self, slot: Slot) -> Option<Tag> {
        *self.0.get(&slot)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.get(tag.slot()) == Some(tag)
    }

    /// Filled slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Tag)> + '_ {
        self.0.iter().filter_map(|(slot, tag)| tag.map(|tag| (slot, tag)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_disjoint() {
        verify_registry().unwrap();
    }

    #[test]
    fn test_registry_sizes() {
        let count = |slot: Slot| Tag::ALL.iter().filter(|tag| tag.slot() == slot).count();
        assert_eq!(count(Slot::MainTag), 5);
        assert_eq!(count(Slot::MainTag2), 1);
        assert_eq!(count(Slot::SpecTag1), 29);
        assert_eq!(count(Slot::SpecTag6), 2);
        assert_eq!(count(Slot::SemanticTag2), 10);
    }

    #[test]
    fn test_labels_keep_historical_spellings() {
        assert_eq!(
            Tag::from_label("adverbial_subordinator_causitive"),
            Some(Tag::AdverbialSubordinatorCausitive)
        );
        assert_eq!(
            Tag::from_label("topical__attributive_adj"),
            Some(Tag::TopicalAttributiveAdj)
        );
        assert_eq!(Tag::from_label("topical_attributive_adj"), None);
        assert_eq!("pp3_it".parse::<Tag>(), Ok(Tag::Pp3It));
    }

    #[test]
    fn test_assign_routes_to_own_slot() {
        let mut slots = TagSlots::default();
        assert!(slots.is_empty());

        assert_eq!(slots.assign(Tag::Verb), None);
        assert_eq!(slots.assign(Tag::PastTense), None);
        assert_eq!(slots.get(Slot::MainTag), Some(Tag::Verb));
        assert_eq!(slots.get(Slot::SpecTag1), Some(Tag::PastTense));
        assert_eq!(slots.get(Slot::SpecTag2), None);

        assert_eq!(slots.assign(Tag::PerfectAspect), Some(Tag::PastTense));
        assert!(slots.contains(Tag::PerfectAspect));
        assert!(!slots.contains(Tag::PastTense));
        assert_eq!(
            slots.iter().collect::<Vec<_>>(),
            vec![(Slot::MainTag, Tag::Verb), (Slot::SpecTag1, Tag::PerfectAspect)]
        );
    }

    #[test]
    fn test_every_slot_holds_at_most_one_tag() {
        let mut slots = TagSlots::default();
        for tag in Tag::ALL {
            slots.assign(tag);
        }
        let filled: Vec<Slot> = slots.iter().map(|(slot, _)| slot).collect();
        assert_eq!(filled, Slot::ALL.to_vec());
    }
}
