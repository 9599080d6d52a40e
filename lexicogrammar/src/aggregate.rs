//! Document-level counters and the indices derived from them.

use enumap::EnuMap;
use itertools::Itertools;
use language_utils::{DependencyRelation, Token};
use rustc_hash::FxHashMap;

use crate::tags::{Tag, TagMap, TagSlots};

/// Width of the moving window for the type-token ratio.
pub const MATTR_WINDOW: usize = 50;

/// Raw structural counts kept next to the tag counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnuMap)]
pub enum Counter {
    Nwords,
    Characters,
    Np,
    NpDeps,
    RelclDep,
    AmodDep,
    DetDep,
    PrepDep,
    PossDep,
    CcDep,
    AllClauses,
    FiniteClause,
    FiniteIndClause,
    FiniteDepClause,
    FiniteComplClause,
    FiniteRelativeClause,
    NonfiniteClause,
    VpDeps,
}

impl Counter {
    pub fn name(self) -> &'static str {
        match self {
            Counter::Nwords => "nwords",
            Counter::Characters => "characters",
            Counter::Np => "np",
            Counter::NpDeps => "np_deps",
            Counter::RelclDep => "relcl_dep",
            Counter::AmodDep => "amod_dep",
            Counter::DetDep => "det_dep",
            Counter::PrepDep => "prep_dep",
            Counter::PossDep => "poss_dep",
            Counter::CcDep => "cc_dep",
            Counter::AllClauses => "all_clauses",
            Counter::FiniteClause => "finite_clause",
            Counter::FiniteIndClause => "finite_ind_clause",
            Counter::FiniteDepClause => "finite_dep_clause",
            Counter::FiniteComplClause => "finite_compl_clause",
            Counter::FiniteRelativeClause => "finite_relative_clause",
            Counter::NonfiniteClause => "nonfinite_clause",
            Counter::VpDeps => "vp_deps",
        }
    }

    /// The per-relation counter for a dependent of a common noun.
    pub fn noun_phrase_dependency(relation: &DependencyRelation) -> Option<Counter> {
        match relation {
            DependencyRelation::Relcl => Some(Counter::RelclDep),
            DependencyRelation::Amod => Some(Counter::AmodDep),
            DependencyRelation::Det => Some(Counter::DetDep),
            DependencyRelation::Prep => Some(Counter::PrepDep),
            DependencyRelation::Poss => Some(Counter::PossDep),
            DependencyRelation::Cc => Some(Counter::CcDep),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnuMap)]
pub enum Ratio {
    MeanNominalDeps,
    RelclNominal,
    AmodNominal,
    DetNominal,
    PrepNominal,
    PossNominal,
    CcNominal,
    MeanVerbalDeps,
    Mlc,
    Mltu,
    DcC,
    CcompC,
    RelclC,
    InfinitiveProp,
    NonfiniteProp,
}

impl Ratio {
    pub fn name(self) -> &'static str {
        match self {
            Ratio::MeanNominalDeps => "mean_nominal_deps",
            Ratio::RelclNominal => "relcl_nominal",
            Ratio::AmodNominal => "amod_nominal",
            Ratio::DetNominal => "det_nominal",
            Ratio::PrepNominal => "prep_nominal",
            Ratio::PossNominal => "poss_nominal",
            Ratio::CcNominal => "cc_nominal",
            Ratio::MeanVerbalDeps => "mean_verbal_deps",
            Ratio::Mlc => "mlc",
            Ratio::Mltu => "mltu",
            Ratio::DcC => "dc_c",
            Ratio::CcompC => "ccomp_c",
            Ratio::RelclC => "relcl_c",
            Ratio::InfinitiveProp => "infinitive_prop",
            Ratio::NonfiniteProp => "nonfinite_prop",
        }
    }

    fn compute(self, counters: &FeatureCounters) -> f64 {
        let count = |counter: Counter| counters.count(counter) as f64;
        let per_noun = |counter: Counter| safe_divide(count(counter), count(Counter::Np));
        let per_finite = |counter: Counter| safe_divide(count(counter), count(Counter::FiniteClause));
        let per_clause = |n: f64| safe_divide(n, count(Counter::AllClauses));

        match self {
            Ratio::MeanNominalDeps => per_noun(Counter::NpDeps),
            Ratio::RelclNominal => per_noun(Counter::RelclDep),
            Ratio::AmodNominal => per_noun(Counter::AmodDep),
            Ratio::DetNominal => per_noun(Counter::DetDep),
            Ratio::PrepNominal => per_noun(Counter::PrepDep),
            Ratio::PossNominal => per_noun(Counter::PossDep),
            Ratio::CcNominal => per_noun(Counter::CcDep),
            Ratio::MeanVerbalDeps => per_finite(Counter::VpDeps),
            Ratio::Mlc => per_finite(Counter::Nwords),
            Ratio::Mltu => safe_divide(count(Counter::Nwords), count(Counter::FiniteIndClause)),
            Ratio::DcC => per_finite(Counter::FiniteDepClause),
            Ratio::CcompC => per_finite(Counter::FiniteComplClause),
            Ratio::RelclC => per_finite(Counter::FiniteRelativeClause),
            Ratio::InfinitiveProp => per_clause(counters.tag_count(Tag::ToClause) as f64),
            Ratio::NonfiniteProp => per_clause(count(Counter::NonfiniteClause)),
        }
    }
}

pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn type_token_ratio(items: &[String]) -> f64 {
    let types = items.iter().unique().count();
    safe_divide(types as f64, items.len() as f64)
}

/// Moving-average type-token ratio over windows of [`MATTR_WINDOW`] items.
/// Shorter sequences get the plain type-token ratio.
pub fn mattr(items: &[String]) -> f64 {
    if items.len() <= MATTR_WINDOW {
        return type_token_ratio(items);
    }

    let mut frequencies: FxHashMap<&str, usize> = FxHashMap::default();
    for item in &items[..MATTR_WINDOW] {
        *frequencies.entry(item.as_str()).or_default() += 1;
    }
    let mut total = frequencies.len() as f64 / MATTR_WINDOW as f64;
    let mut windows = 1;

    for (leaving, entering) in items.iter().zip(&items[MATTR_WINDOW..]) {
        if let Some(frequency) = frequencies.get_mut(leaving.as_str()) {
            *frequency -= 1;
            if *frequency == 0 {
                frequencies.remove(leaving.as_str());
            }
        }
        *frequencies.entry(entering.as_str()).or_default() += 1;
        total += frequencies.len() as f64 / MATTR_WINDOW as f64;
        windows += 1;
    }
    total / windows as f64
}

/// Everything counted while walking one document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCounters {
    pub tags: TagMap<u32>,
    pub counts: CounterMap<u32>,
    /// `lemma_POS` for every word, in order.
    pub lemma_text: Vec<String>,
}

impl FeatureCounters {
    pub fn tag_count(&self, tag: Tag) -> u32 {
        *self.tags.get(&tag)
    }

    pub fn count(&self, counter: Counter) -> u32 {
        *self.counts.get(&counter)
    }

    pub fn increment(&mut self, counter: Counter) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counter, amount: u32) {
        *self.counts.get_mut(&counter) += amount;
    }

    pub fn record_tag(&mut self, tag: Tag) {
        *self.tags.get_mut(&tag) += 1;
    }

    /// Counts the final value of every filled slot.
    pub fn record_tags(&mut self, slots: &TagSlots) {
        for (_, tag) in slots.iter() {
            self.record_tag(tag);
        }
    }

    pub fn record_word(&mut self, token: &Token) {
        if token.pos.is_word() {
            self.record_word_form(&token.text, &token.lemma, token.pos.label());
        }
    }

    /// Word statistics for a token already known to be a word.
    pub fn record_word_form(&mut self, text: &str, lemma: &str, pos_label: &str) {
        self.increment(Counter::Nwords);
        self.add(Counter::Characters, text.chars().count() as u32);
        let lemma = if lemma.eq_ignore_ascii_case("-PRON-") {
            text.to_lowercase()
        } else {
            lemma.to_lowercase()
        };
        self.lemma_text.push(format!("{lemma}_{pos_label}"));
    }

    pub fn finalize(self) -> DocumentIndices {
        let wrd_length = safe_divide(
            self.count(Counter::Characters) as f64,
            self.count(Counter::Nwords) as f64,
        );
        let mattr = mattr(&self.lemma_text);
        let ratios = RatioMap::from_fn(|ratio| ratio.compute(&self));
        DocumentIndices {
            counters: self,
            wrd_length,
            mattr,
            ratios,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentIndices {
    pub counters: FeatureCounters,
    pub wrd_length: f64,
    pub mattr: f64,
    pub ratios: RatioMap<f64>,
}

impl DocumentIndices {
    pub fn nwords(&self) -> u32 {
        self.counters.count(Counter::Nwords)
    }

    pub fn ratio(&self, ratio: Ratio) -> f64 {
        *self.ratios.get(&ratio)
    }
}

#[cfg(test)]
mod tests {
    use language_utils::PartOfSpeech::*;

    use super::*;
    use crate::context::tests::tok;

    fn items(words: impl IntoIterator<Item = usize>) -> Vec<String> {
        words.into_iter().map(|word| format!("w{word}_NOUN")).collect()
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(3.0, 0.0), 0.0);
        assert_eq!(safe_divide(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_mattr_short_sequences() {
        assert_eq!(mattr(&[]), 0.0);
        assert_eq!(mattr(&items([1, 1, 2, 2])), 0.5);
        assert_eq!(mattr(&items(0..50)), 1.0);
    }

    #[test]
    fn test_mattr_moving_window() {
        // 51 items: two windows, 50 types then 49 types
        let mut sequence = items(0..50);
        sequence.push("w1_NOUN".to_string());
        assert!((mattr(&sequence) - (1.0 + 49.0 / 50.0) / 2.0).abs() < 1e-12);

        let repeated = items(std::iter::repeat_n(7, 120));
        assert!((mattr(&repeated) - 1.0 / 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_word_statistics() {
        let mut counters = FeatureCounters::default();
        counters.record_word(&tok(0, "She", "-PRON-", Pron, "PRP", "nsubj", 1));
        counters.record_word(&tok(1, "Runs", "Run", Verb, "VBZ", "ROOT", 1));
        counters.record_word(&tok(2, ".", ".", Punct, ".", "punct", 1));
        assert_eq!(counters.count(Counter::Nwords), 2);
        assert_eq!(counters.count(Counter::Characters), 7);
        assert_eq!(counters.lemma_text, vec!["she_PRON", "run_VERB"]);

        let indices = counters.finalize();
        assert_eq!(indices.wrd_length, 3.5);
        assert_eq!(indices.mattr, 1.0);
    }

    #[test]
    fn test_ratios() {
        let mut counters = FeatureCounters::default();
        counters.add(Counter::Nwords, 12);
        counters.add(Counter::FiniteClause, 4);
        counters.add(Counter::FiniteIndClause, 2);
        counters.add(Counter::FiniteDepClause, 2);
        counters.add(Counter::AllClauses, 5);
        counters.record_tag(Tag::ToClause);
        let indices = counters.finalize();
        assert_eq!(indices.ratio(Ratio::Mlc), 3.0);
        assert_eq!(indices.ratio(Ratio::Mltu), 6.0);
        assert_eq!(indices.ratio(Ratio::DcC), 0.5);
        assert_eq!(indices.ratio(Ratio::InfinitiveProp), 0.2);
        assert_eq!(indices.ratio(Ratio::MeanNominalDeps), 0.0);
    }

    #[test]
    fn test_generated_names_are_unique() {
        let names = Counter::ALL
            .iter()
            .map(|counter| counter.name())
            .chain(Ratio::ALL.iter().map(|ratio| ratio.name()));
        assert!(names.clone().all_unique());
        assert!(names.clone().all(|name| Tag::from_label(name).is_none()));
    }
}
