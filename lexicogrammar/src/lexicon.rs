//! Word lists and category tables, loaded once and shared read-only.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::LexiconError;
use crate::suffix::SuffixTable;
use crate::tags::Tag;

/// Word (or "lemma particle" phrase) to category name.
pub type CategoryTable = FxHashMap<String, String>;

pub const NOUN_NOMINALIZATION_SUFFIXES: [&str; 58] = [
    "al", "cy", "ee", "er", "or", "ry", "ant", "ent", "dom", "ing", "ity", "ure", "age", "ese",
    "ess", "ful", "ism", "ist", "ite", "let", "als", "ees", "ers", "ors", "ate", "ance", "ence",
    "ment", "ness", "tion", "ship", "ette", "hood", "cies", "ries", "ants", "ents", "doms", "ings",
    "ages", "fuls", "isms", "ists", "ites", "lets", "eses", "ates", "ician", "ities", "ances",
    "ences", "ments", "tions", "ships", "esses", "ettes", "hoods", "nesses",
];

pub const PROPER_NOUN_NOMINALIZATION_SUFFIXES: [&str; 4] = ["an", "ian", "ans", "ians"];

const SEMANTIC_NOUN_CLASSES: [Tag; 8] = [
    Tag::NnAnimate,
    Tag::NnCognitive,
    Tag::NnConcrete,
    Tag::NnTechnical,
    Tag::NnQuantity,
    Tag::NnPlace,
    Tag::NnGroup,
    Tag::NnAbstract,
];

const SEMANTIC_VERB_CLASSES: [Tag; 7] = [
    Tag::ActivityVerb,
    Tag::CommunicationVerb,
    Tag::MentalVerb,
    Tag::CausationVerb,
    Tag::OccurrenceVerb,
    Tag::ExistenceVerb,
    Tag::AspectualVerb,
];

const INTRANSITIVE_PHRASAL_CLASSES: [Tag; 4] = [
    Tag::IntransitiveActivityPhrasalVerb,
    Tag::IntransitiveOccurencePhrasalVerb,
    Tag::CopularPhrasalVerb,
    Tag::IntransitiveAspectualPhrasalVerb,
];

const TRANSITIVE_PHRASAL_CLASSES: [Tag; 3] = [
    Tag::TransitiveActivityPhrasalVerb,
    Tag::TransitiveMentalPhrasalVerb,
    Tag::TransitiveCommunicationPhrasalVerb,
];

const ATTRIBUTIVE_ADJECTIVE_CLASSES: [Tag; 6] = [
    Tag::SizeAttributiveAdj,
    Tag::TimeAttributiveAdj,
    Tag::ColorAttributiveAdj,
    Tag::EvaluativeAttributiveAdj,
    Tag::RelationalAttributiveAdj,
    Tag::TopicalAttributiveAdj,
];

const PREDICATIVE_ADJECTIVE_CLASSES: [Tag; 7] = [
    Tag::AttitudinalAdj,
    Tag::LikelihoodAdj,
    Tag::CertaintyAdj,
    Tag::AbilityWillingnessAdj,
    Tag::PersonalAffectAdj,
    Tag::EaseDifficultyAdj,
    Tag::EvaluativeAdj,
];

const ADVERB_TYPES: [Tag; 8] = [
    Tag::DiscourseParticle,
    Tag::PlaceAdverbials,
    Tag::TimeAdverbials,
    Tag::ConjunctsAdverb,
    Tag::DowntonersAdverb,
    Tag::HedgesAdverb,
    Tag::AmplifiersAdverb,
    Tag::Emphatics,
];

const STANCE_ADVERB_CLASSES: [Tag; 4] = [
    Tag::AttitudinalAdverb,
    Tag::FactiveAdverb,
    Tag::LikelihoodAdverb,
    Tag::NonfactiveAdverb,
];

fn allowed(category: &str, allow_list: &[Tag]) -> Option<Tag> {
    Tag::from_label(category).filter(|tag| allow_list.contains(tag))
}

fn that_verb_tag(category: &str) -> Option<Tag> {
    match category {
        "nonfactive_verb" => Some(Tag::ThatVerbClauseNonfactive),
        "attitudinal_verb" => Some(Tag::ThatVerbClauseAttitudinal),
        "factive_verb" => Some(Tag::ThatVerbClauseFactive),
        "likelihood_verb" => Some(Tag::ThatVerbClauseLikelihood),
        _ => None,
    }
}

fn that_noun_tag(category: &str) -> Option<Tag> {
    match category {
        "nn_nonfactive" => Some(Tag::ThatNounClauseNonfactive),
        "nn_attitudinal" => Some(Tag::ThatNounClauseAttitudinal),
        "nn_factive" | "nn_factive_noun" => Some(Tag::ThatNounClauseFactive),
        "nn_likelihood" => Some(Tag::ThatNounClauseLikelihood),
        _ => None,
    }
}

fn that_adjective_tag(category: &str) -> Option<Tag> {
    match category {
        "attitudinal_adj" => Some(Tag::ThatAdjectiveClauseAttitudinal),
        "likelihood_adj" => Some(Tag::ThatAdjectiveClauseLikelihood),
        _ => None,
    }
}

fn to_verb_tag(category: &str) -> Option<Tag> {
    match category {
        "to_speech_act_verb" => Some(Tag::ToClauseVerbToSpeechAct),
        "cognition_verb" => Some(Tag::ToClauseVerbCognition),
        "desire_verb" => Some(Tag::ToClauseVerbDesire),
        "to_causative_verb" => Some(Tag::ToClauseVerbToCausative),
        "probability_verb" => Some(Tag::ToClauseVerbProbability),
        _ => None,
    }
}

fn to_adjective_tag(category: &str) -> Option<Tag> {
    match category {
        "certainty_adj" => Some(Tag::ToClauseAdjectiveCertainty),
        "ability_willingness_adj" => Some(Tag::ToClauseAdjectiveAbilityWillingness),
        "personal_affect_adj" => Some(Tag::ToClauseAdjectivePersonalAffect),
        "ease_difficulty_adj" => Some(Tag::ToClauseAdjectiveEaseDifficulty),
        "evaluative_adj" => Some(Tag::ToClauseAdjectiveEvaluative),
        _ => None,
    }
}

/// Parses a category file into its collections.
///
/// A line starting with `####` closes the current collection (if it has
/// entries) and starts a new one. Other lines starting with `#` are
/// comments. Every remaining non-blank line is `category<TAB>member...`,
/// and a member listed twice keeps its last category.
pub fn read_category_collections(
    file: &str,
    contents: &str,
) -> Result<Vec<CategoryTable>, LexiconError> {
    let malformed = |line: usize, reason: &'static str| LexiconError::MalformedRecord {
        file: file.to_string(),
        line,
        reason,
    };

    let mut collections = Vec::new();
    let mut current = CategoryTable::default();
    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim_end_matches('\r');
        if line.starts_with("####") {
            if !current.is_empty() {
                collections.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let category = fields.next().unwrap_or_default().trim();
        if category.is_empty() {
            return Err(malformed(line_number, "empty category name"));
        }
        let members: Vec<&str> = fields
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .collect();
        if members.is_empty() {
            return Err(malformed(line_number, "category has no members"));
        }
        for member in members {
            current.insert(member.to_string(), category.to_string());
        }
    }
    if !current.is_empty() {
        collections.push(current);
    }
    Ok(collections)
}

fn single_collection(file: &str, contents: &str) -> Result<CategoryTable, LexiconError> {
    let mut collections = read_category_collections(file, contents)?;
    match collections.len() {
        0 => Ok(CategoryTable::default()),
        1 => Ok(collections.remove(0)),
        found => Err(LexiconError::CollectionCount {
            file: file.to_string(),
            expected: 1,
            found,
        }),
    }
}

fn read_word_list(contents: &str) -> FxHashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Directory holding the resource files. Without one, the lists
    /// compiled into the crate are used.
    pub directory: Option<PathBuf>,
    pub noun_file: String,
    pub verb_file: String,
    pub adjective_file: String,
    pub adverb_file: String,
    pub nominal_stop_file: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            directory: None,
            noun_file: "semantic_class_noun.txt".to_string(),
            verb_file: "semantic_class_verb.txt".to_string(),
            adjective_file: "semantic_class_adj.txt".to_string(),
            adverb_file: "semantic_class_adverb.txt".to_string(),
            nominal_stop_file: "nom_stop_list.txt".to_string(),
        }
    }
}

pub struct ResourceFile<'a> {
    pub name: &'a str,
    pub contents: &'a str,
}

pub struct ResourceFiles<'a> {
    pub noun: ResourceFile<'a>,
    pub verb: ResourceFile<'a>,
    pub adjective: ResourceFile<'a>,
    pub adverb: ResourceFile<'a>,
    pub nominal_stop: ResourceFile<'a>,
}

#[derive(Clone, Debug, Default)]
pub struct LexicalResources {
    pub nouns: CategoryTable,
    pub verbs: CategoryTable,
    pub that_verbs: CategoryTable,
    pub to_verbs: CategoryTable,
    pub phrasal_verbs: CategoryTable,
    pub adjectives: CategoryTable,
    pub adverbs: CategoryTable,
    pub nominal_stop: FxHashSet<String>,
    pub noun_suffixes: SuffixTable,
    pub proper_noun_suffixes: SuffixTable,
}

impl LexicalResources {
    pub fn from_sources(files: &ResourceFiles<'_>) -> Result<Self, LexiconError> {
        let verb_collections = read_category_collections(files.verb.name, files.verb.contents)?;
        let found = verb_collections.len();
        let [verbs, that_verbs, to_verbs, phrasal_verbs]: [CategoryTable; 4] = verb_collections
            .try_into()
            .map_err(|_| LexiconError::CollectionCount {
                file: files.verb.name.to_string(),
                expected: 4,
                found,
            })?;

        let resources = Self {
            nouns: single_collection(files.noun.name, files.noun.contents)?,
            verbs,
            that_verbs,
            to_verbs,
            phrasal_verbs,
            adjectives: single_collection(files.adjective.name, files.adjective.contents)?,
            adverbs: single_collection(files.adverb.name, files.adverb.contents)?,
            nominal_stop: read_word_list(files.nominal_stop.contents),
            noun_suffixes: SuffixTable::new(NOUN_NOMINALIZATION_SUFFIXES),
            proper_noun_suffixes: SuffixTable::new(PROPER_NOUN_NOMINALIZATION_SUFFIXES),
        };
        debug!(
            "lexicon: {} nouns, {} verbs, {} that-verbs, {} to-verbs, {} phrasal verbs, {} adjectives, {} adverbs, {} stop words",
            resources.nouns.len(),
            resources.verbs.len(),
            resources.that_verbs.len(),
            resources.to_verbs.len(),
            resources.phrasal_verbs.len(),
            resources.adjectives.len(),
            resources.adverbs.len(),
            resources.nominal_stop.len(),
        );
        Ok(resources)
    }

    /// The lists shipped with the crate.
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_sources(&ResourceFiles {
            noun: ResourceFile {
                name: "semantic_class_noun.txt",
                contents: include_str!("../resources/semantic_class_noun.txt"),
            },
            verb: ResourceFile {
                name: "semantic_class_verb.txt",
                contents: include_str!("../resources/semantic_class_verb.txt"),
            },
            adjective: ResourceFile {
                name: "semantic_class_adj.txt",
                contents: include_str!("../resources/semantic_class_adj.txt"),
            },
            adverb: ResourceFile {
                name: "semantic_class_adverb.txt",
                contents: include_str!("../resources/semantic_class_adverb.txt"),
            },
            nominal_stop: ResourceFile {
                name: "nom_stop_list.txt",
                contents: include_str!("../resources/nom_stop_list.txt"),
            },
        })
    }

    pub fn load(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let Some(directory) = &config.directory else {
            info!("using bundled lexical resources");
            return Self::bundled();
        };
        info!("loading lexical resources from {}", directory.display());

        let noun = read_file(directory, &config.noun_file)?;
        let verb = read_file(directory, &config.verb_file)?;
        let adjective = read_file(directory, &config.adjective_file)?;
        let adverb = read_file(directory, &config.adverb_file)?;
        let nominal_stop = read_file(directory, &config.nominal_stop_file)?;

        Self::from_sources(&ResourceFiles {
            noun: ResourceFile {
                name: &config.noun_file,
                contents: &noun,
            },
            verb: ResourceFile {
                name: &config.verb_file,
                contents: &verb,
            },
            adjective: ResourceFile {
                name: &config.adjective_file,
                contents: &adjective,
            },
            adverb: ResourceFile {
                name: &config.adverb_file,
                contents: &adverb,
            },
            nominal_stop: ResourceFile {
                name: &config.nominal_stop_file,
                contents: &nominal_stop,
            },
        })
    }

    pub fn is_nominal_stop(&self, word: &str) -> bool {
        self.nominal_stop.contains(word)
    }

    pub fn noun_class(&self, lemma: &str) -> Option<Tag> {
        self.nouns
            .get(lemma)
            .and_then(|category| allowed(category, &SEMANTIC_NOUN_CLASSES))
    }

    pub fn verb_class(&self, lemma: &str) -> Option<Tag> {
        self.verbs
            .get(lemma)
            .and_then(|category| allowed(category, &SEMANTIC_VERB_CLASSES))
    }

    pub fn is_phrasal_verb(&self, phrasal: &str) -> bool {
        self.phrasal_verbs.contains_key(phrasal)
    }

    pub fn phrasal_class(&self, phrasal: &str, transitive: bool) -> Option<Tag> {
        let allow_list: &[Tag] = if transitive {
            &TRANSITIVE_PHRASAL_CLASSES
        } else {
            &INTRANSITIVE_PHRASAL_CLASSES
        };
        self.phrasal_verbs
            .get(phrasal)
            .and_then(|category| allowed(category, allow_list))
    }

    pub fn attributive_adjective_class(&self, lemma: &str) -> Option<Tag> {
        self.adjectives
            .get(lemma)
            .and_then(|category| allowed(category, &ATTRIBUTIVE_ADJECTIVE_CLASSES))
    }

    pub fn predicative_adjective_class(&self, lemma: &str) -> Option<Tag> {
        self.adjectives
            .get(lemma)
            .and_then(|category| allowed(category, &PREDICATIVE_ADJECTIVE_CLASSES))
    }

    pub fn adverb_type(&self, lemma: &str) -> Option<Tag> {
        self.adverbs
            .get(lemma)
            .and_then(|category| allowed(category, &ADVERB_TYPES))
    }

    pub fn stance_adverb_class(&self, lemma: &str) -> Option<Tag> {
        self.adverbs
            .get(lemma)
            .and_then(|category| allowed(category, &STANCE_ADVERB_CLASSES))
    }

    pub fn that_verb_class(&self, lemma: &str) -> Option<Tag> {
        self.that_verbs
            .get(lemma)
            .and_then(|category| that_verb_tag(category))
    }

    pub fn that_noun_class(&self, lemma: &str) -> Option<Tag> {
        self.nouns
            .get(lemma)
            .and_then(|category| that_noun_tag(category))
    }

    pub fn that_adjective_class(&self, lemma: &str) -> Option<Tag> {
        self.adjectives
            .get(lemma)
            .and_then(|category| that_adjective_tag(category))
    }

    pub fn to_verb_class(&self, lemma: &str) -> Option<Tag> {
        self.to_verbs
            .get(lemma)
            .and_then(|category| to_verb_tag(category))
    }

    pub fn to_adjective_class(&self, lemma: &str) -> Option<Tag> {
        self.adjectives
            .get(lemma)
            .and_then(|category| to_adjective_tag(category))
    }
}

fn read_file(directory: &Path, name: &str) -> Result<String, LexiconError> {
    let path = directory.join(name);
    std::fs::read_to_string(&path).map_err(|source| LexiconError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_and_comments() {
        let contents = "# nouns\nnn_animate\tdog\tcat\n####\nnn_place\tcity\n\n";
        let collections = read_category_collections("test.txt", contents).unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].get("dog").map(String::as_str), Some("nn_animate"));
        assert_eq!(collections[1].get("city").map(String::as_str), Some("nn_place"));
        assert!(collections[1].get("dog").is_none());
    }

    #[test]
    fn test_leading_separator_does_not_open_empty_collection() {
        let contents = "####\n# comment\nnn_animate\tdog\n";
        let collections = read_category_collections("test.txt", contents).unwrap();
        assert_eq!(collections.len(), 1);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let contents = "nn_animate\tbat\nnn_concrete\tbat\tball\n";
        let table = single_collection("test.txt", contents).unwrap();
        assert_eq!(table.get("bat").map(String::as_str), Some("nn_concrete"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_malformed_lines_fail_fast() {
        let err = read_category_collections("nouns.txt", "nn_animate\tdog\nnn_place\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MalformedRecord {
                line: 2,
                reason: "category has no members",
                ..
            }
        ));

        let err = read_category_collections("nouns.txt", "\tdog\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MalformedRecord {
                line: 1,
                reason: "empty category name",
                ..
            }
        ));
        assert_eq!(err.to_string(), "nouns.txt:1: empty category name");
    }

    #[test]
    fn test_verb_file_needs_four_collections() {
        let files = ResourceFiles {
            noun: ResourceFile { name: "n", contents: "" },
            verb: ResourceFile {
                name: "verbs.txt",
                contents: "activity_verb\trun\n####\nfactive_verb\tknow\n",
            },
            adjective: ResourceFile { name: "a", contents: "" },
            adverb: ResourceFile { name: "r", contents: "" },
            nominal_stop: ResourceFile { name: "s", contents: "" },
        };
        let err = LexicalResources::from_sources(&files).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::CollectionCount {
                expected: 4,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_allow_lists_block_leakage() {
        let mut resources = LexicalResources::default();
        resources
            .nouns
            .insert("fact".to_string(), "nn_factive".to_string());
        resources
            .nouns
            .insert("dog".to_string(), "nn_animate".to_string());
        resources
            .verbs
            .insert("know".to_string(), "factive_verb".to_string());
        resources
            .that_verbs
            .insert("know".to_string(), "factive_verb".to_string());

        assert_eq!(resources.noun_class("dog"), Some(Tag::NnAnimate));
        assert_eq!(resources.noun_class("fact"), None);
        assert_eq!(resources.that_noun_class("fact"), Some(Tag::ThatNounClauseFactive));
        assert_eq!(resources.verb_class("know"), None);
        assert_eq!(resources.that_verb_class("know"), Some(Tag::ThatVerbClauseFactive));
    }

    #[test]
    fn test_bundled_resources_load() {
        let resources = LexicalResources::bundled().unwrap();
        assert!(!resources.nouns.is_empty());
        assert!(!resources.phrasal_verbs.is_empty());
        assert_eq!(resources.noun_suffixes.min_len(), 2);
        assert_eq!(resources.noun_suffixes.max_len(), 6);
        assert_eq!(resources.proper_noun_suffixes.max_len(), 4);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexiconConfig {
            directory: Some(dir.path().to_path_buf()),
            ..LexiconConfig::default()
        };
        std::fs::write(dir.path().join(&config.noun_file), "nn_place\tharbor\n").unwrap();
        std::fs::write(
            dir.path().join(&config.verb_file),
            "activity_verb\trun\n####\nfactive_verb\tknow\n####\ndesire_verb\twant\n####\ntransitive_activity_phrasal_verb\tpick up\n",
        )
        .unwrap();
        std::fs::write(dir.path().join(&config.adjective_file), "size_attributive_adj\tbig\n").unwrap();
        std::fs::write(dir.path().join(&config.adverb_file), "hedges_adverb\tmaybe\n").unwrap();
        std::fs::write(dir.path().join(&config.nominal_stop_file), "Water\n\n").unwrap();

        let resources = LexicalResources::load(&config).unwrap();
        assert_eq!(resources.noun_class("harbor"), Some(Tag::NnPlace));
        assert_eq!(resources.to_verb_class("want"), Some(Tag::ToClauseVerbDesire));
        assert_eq!(
            resources.phrasal_class("pick up", true),
            Some(Tag::TransitiveActivityPhrasalVerb)
        );
        assert_eq!(resources.phrasal_class("pick up", false), None);
        assert!(resources.is_nominal_stop("water"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexiconConfig {
            directory: Some(dir.path().to_path_buf()),
            ..LexiconConfig::default()
        };
        let err = LexicalResources::load(&config).unwrap_err();
        assert!(matches!(err, LexiconError::Io { ref path, .. } if path.ends_with("semantic_class_noun.txt")));
    }
}
