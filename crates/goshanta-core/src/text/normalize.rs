// crates/goshanta-core/src/text/normalize.rs
use std::collections::HashSet;

/// Lowercase `raw`, split on whitespace runs, drop stop words and re-join
/// with single spaces.
///
/// No stemming and no punctuation stripping: `"visit,"` survives even when
/// `"visit"` is a stop word. An input made only of stop words (or of
/// whitespace) yields `""`, which callers must treat as "nothing to search".
///
/// ```rust
/// use goshanta_core::prelude::*;
///
/// let cleaned = normalize("I wanna visit  Sylhet Tea Gardens", &DEFAULT_VOCABULARY.stop_words);
/// assert_eq!(cleaned, "sylhet tea gardens");
/// ```
pub fn normalize(raw: &str, stop_words: &HashSet<String>) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .filter(|word| !stop_words.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}
