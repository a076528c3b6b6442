use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

/// URL token grammar: a case-sensitive `http://` or `https://` followed by a
/// run of characters that are neither whitespace nor the `#` anchor marker.
pub const URL_PATTERN: &str = r"https?://[^\s#]+";

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("Failed to compile URL regex pattern"));

/// Iterate over candidate URLs in `text`, left to right.
///
/// Each candidate is borrowed from `text` and ends right before the first
/// whitespace character or `#` that follows the scheme.
pub fn scan_iter(text: &str) -> impl Iterator<Item = &str> {
    // Both schemes share the "http" prefix; skip the regex when it is absent.
    let has_scheme = memmem::find(text.as_bytes(), b"http").is_some();

    URL_REGEX
        .find_iter(if has_scheme { text } else { "" })
        .map(|m| m.as_str())
}

/// Collect all candidate URLs in `text` in order of appearance.
pub fn scan(text: &str) -> Vec<&str> {
    scan_iter(text).collect()
}
