// crates/goshanta-core/src/text/category.rs
use super::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Categorical filters inferred from a query.
///
/// `None` means nothing was inferred for that dimension. At most one key per
/// dimension is ever set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub budget: Option<String>,
    pub hobby: Option<String>,
    pub ideal_for: Option<String>,
}

impl SearchFilters {
    /// `true` when no dimension was inferred.
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.hobby.is_none() && self.ideal_for.is_none()
    }
}

/// Infer filters from the *original* query (lowercased, stop words kept).
///
/// Each dimension is resolved independently against its table: the first
/// bucket, in declaration order, with any trigger phrase contained in the
/// query wins. Containment is plain substring search, so `"historyx"`
/// selects `history` and `"family trip"` can match across two words.
///
/// ```rust
/// use goshanta_core::prelude::*;
///
/// let f = extract_filters("Cheap historical museum trip for family", &DEFAULT_VOCABULARY);
/// assert_eq!(f.budget.as_deref(), Some("low"));
/// assert_eq!(f.hobby.as_deref(), Some("history"));
/// assert_eq!(f.ideal_for.as_deref(), Some("family"));
/// ```
pub fn extract_filters(raw: &str, vocabulary: &Vocabulary) -> SearchFilters {
    let query = raw.to_lowercase();
    SearchFilters {
        budget: vocabulary.budget.first_match(&query).map(str::to_owned),
        hobby: vocabulary.hobby.first_match(&query).map(str::to_owned),
        ideal_for: vocabulary.ideal_for.first_match(&query).map(str::to_owned),
    }
}
