//! Quoted-argument extraction for declaration-call patterns.

use regex::Regex;

/// Extract the quoted first arguments of every non-overlapping match of
/// `pattern`, in order of appearance.
///
/// Absence of matches yields an empty vector; an invalid pattern degrades
/// to the same rather than erroring.
pub fn extract_quoted_args(content: &str, pattern: &str) -> Vec<String> {
    let re = match Regex::new(pattern) {
        Ok(r) => r,
        Err(_) => return Vec::new(),
    };

    re.captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True iff any of the markers appears as a substring of `content`.
pub fn contains_any(content: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| content.contains(m))
}
