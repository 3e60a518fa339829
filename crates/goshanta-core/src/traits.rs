// crates/goshanta-core/src/traits.rs
use crate::error::Result;
use crate::model::{Country, District, Spot};
use crate::query::Predicate;

/// A stored record that predicates can be evaluated against.
///
/// Implementors expose every queryable field as a list of string views. A
/// scalar field yields one value (or none when unset); a sequence field
/// yields one value per element. Predicates treat a field as matching when
/// *any* of its values matches, so `tags ∋ "nature"` and
/// `user_reviews.comment ~ "calm"` need no special casing.
pub trait Document: Clone + Send + Sync + 'static {
    /// Collection name, used in logs and in [`crate::TravelError::DataAccess`].
    const COLLECTION: &'static str;

    /// Values stored under `path`. Unknown paths yield an empty list.
    fn field_values(&self, path: &str) -> Vec<&str>;
}

/// Read-only query capability over one collection.
///
/// This is the seam to the data store. The in-memory
/// [`crate::MemoryCollection`] evaluates predicates directly; other backends
/// translate the [`Predicate`] tree into their own filter language.
///
/// The `Send + Sync` bounds let a search issue queries from several threads
/// when the `parallel` feature is enabled.
pub trait Collection<D: Document>: Send + Sync {
    /// All documents matching `predicate`, in store order.
    fn find(&self, predicate: &Predicate) -> Result<Vec<D>>;

    /// The first document matching `predicate`.
    fn find_one(&self, predicate: &Predicate) -> Result<Option<D>> {
        Ok(self.find(predicate)?.into_iter().next())
    }
}

/// The three collections a search runs against.
///
/// Associated types keep each collection statically typed while letting a
/// store mix backends (e.g. a remote spots collection next to in-memory geo
/// data).
pub trait TravelStore: Send + Sync {
    type Spots: Collection<Spot>;
    type Countries: Collection<Country>;
    type Districts: Collection<District>;

    fn spots(&self) -> &Self::Spots;
    fn countries(&self) -> &Self::Countries;
    fn districts(&self) -> &Self::Districts;
}
