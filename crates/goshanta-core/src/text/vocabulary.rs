// crates/goshanta-core/src/text/vocabulary.rs
use crate::error::{Result, TravelError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One category key together with the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordBucket {
    pub key: String,
    pub triggers: Vec<String>,
}

/// An ordered list of keyword buckets for one filter dimension.
///
/// Order is significant: [`KeywordTable::first_match`] returns the first
/// bucket in declaration order with a trigger contained in the query, no
/// matter where in the query that trigger appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    buckets: Vec<KeywordBucket>,
}

impl KeywordTable {
    /// Build a table from `(key, triggers)` pairs, keeping their order.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        KeywordTable {
            buckets: pairs
                .iter()
                .map(|(key, triggers)| KeywordBucket {
                    key: (*key).to_string(),
                    triggers: triggers.iter().map(|t| (*t).to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn buckets(&self) -> &[KeywordBucket] {
        &self.buckets
    }

    /// Key of the first bucket with a trigger that is a substring of
    /// `lowered`. The caller lowercases; triggers are stored lowercase.
    pub fn first_match(&self, lowered: &str) -> Option<&str> {
        self.buckets
            .iter()
            .find(|b| b.triggers.iter().any(|t| lowered.contains(t.as_str())))
            .map(|b| b.key.as_str())
    }

    fn validate(&self, dimension: &str) -> Result<()> {
        for bucket in &self.buckets {
            if bucket.key.trim().is_empty() {
                return Err(TravelError::InvalidVocabulary(format!(
                    "{dimension}: bucket with an empty key"
                )));
            }
            if bucket.triggers.is_empty() {
                return Err(TravelError::InvalidVocabulary(format!(
                    "{dimension}.{}: no trigger phrases",
                    bucket.key
                )));
            }
            for trigger in &bucket.triggers {
                // An empty trigger is a substring of every query.
                if trigger.is_empty() {
                    return Err(TravelError::InvalidVocabulary(format!(
                        "{dimension}.{}: empty trigger phrase",
                        bucket.key
                    )));
                }
                if trigger.to_lowercase() != *trigger {
                    return Err(TravelError::InvalidVocabulary(format!(
                        "{dimension}.{}: trigger `{trigger}` is not lowercase",
                        bucket.key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Stop words and keyword tables driving query interpretation.
///
/// The built-in tables are available as [`DEFAULT_VOCABULARY`]; tests and
/// deployments can substitute their own, e.g. loaded from JSON:
///
/// ```json
/// {
///   "stop_words": ["i", "to"],
///   "budget": [{ "key": "low", "triggers": ["cheap"] }],
///   "hobby": [],
///   "idealFor": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub stop_words: HashSet<String>,
    #[serde(default)]
    pub budget: KeywordTable,
    #[serde(default)]
    pub hobby: KeywordTable,
    #[serde(rename = "idealFor", alias = "ideal_for", default)]
    pub ideal_for: KeywordTable,
}

pub static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::builtin);

const STOP_WORDS: &[&str] = &[
    "i", "wanna", "to", "come", "please", "want", "go", "visit", "the", "a", "an", "is", "are",
    "in", "on", "of", "for", "and", "with", "my", "can", "will", "should", "like", "wish",
    "travel",
];

const BUDGET: &[(&str, &[&str])] = &[
    ("low", &["low", "cheap", "budget", "affordable", "economical"]),
    ("medium", &["medium", "moderate", "moderately", "midrange", "average"]),
    ("high", &["high", "expensive", "luxury", "premium"]),
];

const HOBBY: &[(&str, &[&str])] = &[
    ("nature", &["nature", "forest", "eco", "wildlife", "lake", "park"]),
    ("history", &["history", "historical", "museum", "heritage", "palace"]),
    ("photography", &["photography", "photo", "camera", "pictures"]),
    ("adventure", &["adventure", "hiking", "trek", "climbing"]),
    ("picnic", &["picnic", "family trip"]),
];

const IDEAL_FOR: &[(&str, &[&str])] = &[
    ("family", &["family", "kids", "children", "parents"]),
    ("solo", &["solo", "alone", "single"]),
    ("couple", &["couple", "partner", "spouse", "honeymoon"]),
    ("friends", &["friends", "group", "gang"]),
];

impl Vocabulary {
    /// The built-in stop words and keyword tables.
    pub fn builtin() -> Self {
        Vocabulary {
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            budget: KeywordTable::from_pairs(BUDGET),
            hobby: KeywordTable::from_pairs(HOBBY),
            ideal_for: KeywordTable::from_pairs(IDEAL_FOR),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let vocabulary: Vocabulary = serde_json::from_str(s)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TravelError::NotFound(format!("Vocabulary not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject tables that would silently misbehave: empty keys, buckets
    /// without triggers, empty or non-lowercase phrases.
    pub fn validate(&self) -> Result<()> {
        if let Some(word) = self.stop_words.iter().find(|w| w.to_lowercase() != **w) {
            return Err(TravelError::InvalidVocabulary(format!(
                "stop word `{word}` is not lowercase"
            )));
        }
        self.budget.validate("budget")?;
        self.hobby.validate("hobby")?;
        self.ideal_for.validate("idealFor")
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}
