//! Brand-name heuristics for requests without a resolved brand

use std::sync::LazyLock;

use regex::Regex;

use crate::brand::capitalize;

/// Name used when nothing in the request looks like a brand
pub const DEFAULT_BRAND_NAME: &str = "Your Brand";

/// Something shaped like a URL or bare domain; captures the leading label
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?([a-z0-9][a-z0-9-]*)(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b")
        .expect("valid domain regex")
});

/// A run of capitalized words, e.g. "Maison Dupont"
static CAPITALIZED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}\p{Ll}+(?:\s\p{Lu}\p{Ll}+)*").expect("valid capitalized-word regex")
});

/// Guess a brand name from a URL or free text
///
/// Tries, in order: the leading label of a URL-shaped match (title-cased),
/// the first sequence of capitalized words, then [`DEFAULT_BRAND_NAME`].
pub fn extract_brand_name(text: &str) -> String {
    if let Some(label) = DOMAIN_REGEX.captures(text).and_then(|c| c.get(1)) {
        return capitalize(label.as_str());
    }

    CAPITALIZED_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string())
}
