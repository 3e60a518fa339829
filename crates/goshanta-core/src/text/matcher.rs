// crates/goshanta-core/src/text/matcher.rs
use serde::Serialize;

/// A case-insensitive, unanchored, literal substring test.
///
/// The token is not a pattern: `"c++"` or `"(sylhet"` match themselves.
/// Matching happens anywhere in the target, including inside a longer word,
/// so `"lake"` hits `"Lakeside"` and `"museum"` hits `"MUSEUMS"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMatcher {
    needle: String,
}

impl TokenMatcher {
    pub fn new(token: &str) -> Self {
        TokenMatcher {
            needle: token.to_lowercase(),
        }
    }

    /// The lowercased token this matcher was compiled from.
    pub fn token(&self) -> &str {
        &self.needle
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        if text.is_ascii() && self.needle.is_ascii() {
            return contains_ascii_ci(text.as_bytes(), self.needle.as_bytes());
        }
        text.to_lowercase().contains(&self.needle)
    }
}

// Allocation-free path for the common all-ASCII case.
fn contains_ascii_ci(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}

/// The compiled matchers of one cleaned query, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenMatcherSet {
    matchers: Vec<TokenMatcher>,
}

impl TokenMatcherSet {
    /// Split `cleaned` on whitespace and compile one matcher per token.
    ///
    /// Empty input gives an empty set; that is the only way to get one.
    pub fn build(cleaned: &str) -> Self {
        TokenMatcherSet {
            matchers: cleaned.split_whitespace().map(TokenMatcher::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenMatcher> {
        self.matchers.iter()
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.matchers.iter().map(TokenMatcher::token).collect()
    }

    /// `true` if any matcher hits `text`.
    pub fn any_match(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(text))
    }
}

impl<'a> IntoIterator for &'a TokenMatcherSet {
    type Item = &'a TokenMatcher;
    type IntoIter = std::slice::Iter<'a, TokenMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_matcher_per_token_in_order() {
        let set = TokenMatcherSet::build("lake museum");
        assert_eq!(set.len(), 2);
        assert_eq!(set.tokens(), vec!["lake", "museum"]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(TokenMatcherSet::build("").is_empty());
        assert!(TokenMatcherSet::build("   ").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_unanchored() {
        let m = TokenMatcher::new("museum");
        assert!(m.is_match("Has a small Museum inside"));
        assert!(m.is_match("MUSEUMS"));
        assert!(!m.is_match("muse"));
    }

    #[test]
    fn tokens_are_literal_not_patterns() {
        assert!(TokenMatcher::new("c++").is_match("Learn C++ here"));
        assert!(!TokenMatcher::new("c++").is_match("ccc"));
        assert!(TokenMatcher::new("(sylhet").is_match("tea (Sylhet)"));
        assert!(!TokenMatcher::new("s.lhet").is_match("sylhet"));
    }

    #[test]
    fn non_ascii_text_still_matches() {
        assert!(TokenMatcher::new("ঢাকা").is_match("রাজধানী ঢাকা"));
        assert!(TokenMatcher::new("zürich").is_match("ZÜRICH old town"));
    }

    #[test]
    fn uppercase_non_ascii_token_is_folded_once() {
        let m = TokenMatcher::new("ZÜRICH");
        assert_eq!(m.token(), "zürich");
        assert!(m.is_match("Zürich old town"));
        assert_eq!(serde_json::to_value(&m).unwrap(), "zürich");
    }

    #[test]
    fn any_match_is_a_disjunction() {
        let set = TokenMatcherSet::build("lake museum");
        assert!(set.any_match("Kaptai Lake"));
        assert!(set.any_match("National Museum"));
        assert!(!set.any_match("Ratargul"));
    }
}
