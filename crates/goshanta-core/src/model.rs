// crates/goshanta-core/src/model.rs
use crate::traits::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field paths understood by [`Document::field_values`].
///
/// Paths follow the stored document layout; nested sequences are addressed
/// with a dot (`user_reviews.comment`).
pub mod field {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const DISTRICT: &str = "district";
    pub const DIVISION: &str = "division";
    pub const DIVISIONS: &str = "divisions";
    pub const COUNTRY: &str = "country";
    pub const REVIEW_COMMENT: &str = "user_reviews.comment";
    pub const TAGS: &str = "tags";
    pub const TYPE: &str = "type";
    pub const BUDGET_LEVEL: &str = "budget_level";
    pub const IDEAL_FOR: &str = "ideal_for";
}

/// Price bracket of a spot. A spot without one is stored with no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Low => "low",
            BudgetLevel::Medium => "medium",
            BudgetLevel::High => "high",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(BudgetLevel::Low),
            "medium" => Ok(BudgetLevel::Medium),
            "high" => Ok(BudgetLevel::High),
            _ => Err(()),
        }
    }
}

/// `budget_level` stored as an optional string; `""`, `null` and unknown
/// levels all read as `None`.
mod lenient_budget {
    use super::BudgetLevel;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(level: &Option<BudgetLevel>, s: S) -> Result<S::Ok, S::Error> {
        match level {
            Some(level) => s.serialize_some(level.as_str()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<BudgetLevel>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}

/// A visitor review attached to a spot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub comment: String,
}

/// A point of interest: the primary searchable document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form category such as "lake" or "fort".
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Empty or unrecognised stored values read as unset.
    #[serde(default, with = "lenient_budget")]
    pub budget_level: Option<BudgetLevel>,
    #[serde(default)]
    pub ideal_for: Vec<String>,
    #[serde(default)]
    pub user_reviews: Vec<Review>,
}

/// A country with its divisions embedded by name.
///
/// `divisions` is `None` when the stored document has no list (missing or
/// `null`); searching treats that as no divisions, browsing as not found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub divisions: Option<Vec<String>>,
}

/// A district. `division` is the owning division's name, not a reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub division: String,
}

impl Spot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.user_reviews.iter().map(|r| r.comment.as_str())
    }
}

impl Country {
    pub fn new(name: impl Into<String>, divisions: Vec<String>) -> Self {
        Country {
            id: None,
            name: name.into(),
            divisions: Some(divisions),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn divisions(&self) -> &[String] {
        self.divisions.as_deref().unwrap_or(&[])
    }
}

impl District {
    pub fn new(name: impl Into<String>, division: impl Into<String>) -> Self {
        District {
            id: None,
            name: name.into(),
            division: division.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn division(&self) -> &str {
        &self.division
    }
}

// -----------------------------------------------------------------------------
// DOCUMENT VIEWS
// -----------------------------------------------------------------------------

impl Document for Spot {
    const COLLECTION: &'static str = "spots";

    fn field_values(&self, path: &str) -> Vec<&str> {
        match path {
            field::ID => self.id.as_deref().into_iter().collect(),
            field::NAME => vec![self.name.as_str()],
            field::DESCRIPTION => vec![self.description.as_str()],
            field::DISTRICT => vec![self.district.as_str()],
            field::DIVISION => vec![self.division.as_str()],
            field::COUNTRY => vec![self.country.as_str()],
            field::TYPE => vec![self.kind.as_str()],
            field::TAGS => self.tags.iter().map(String::as_str).collect(),
            field::IDEAL_FOR => self.ideal_for.iter().map(String::as_str).collect(),
            field::REVIEW_COMMENT => self.comments().collect(),
            field::BUDGET_LEVEL => self.budget_level.map(|b| b.as_str()).into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

impl Document for Country {
    const COLLECTION: &'static str = "countries";

    fn field_values(&self, path: &str) -> Vec<&str> {
        match path {
            field::ID => self.id.as_deref().into_iter().collect(),
            field::NAME => vec![self.name.as_str()],
            field::DIVISIONS => self.divisions().iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl Document for District {
    const COLLECTION: &'static str = "districts";

    fn field_values(&self, path: &str) -> Vec<&str> {
        match path {
            field::ID => self.id.as_deref().into_iter().collect(),
            field::NAME => vec![self.name.as_str()],
            field::DIVISION => vec![self.division.as_str()],
            _ => Vec::new(),
        }
    }
}
