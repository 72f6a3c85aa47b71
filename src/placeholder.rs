//! Placeholder detection.
//!
//! A value is a placeholder when it is syntactically well-formed but
//! semantically an unfilled template stand-in, like `CHANGE_ME` or
//! `<your-project>`. Detection is a pure substring check against a fixed
//! marker table, matched case-insensitively.

/// Marker substrings that identify an unfilled template value.
///
/// Stored lowercase; matching lowercases the candidate value first.
const GENERIC_MARKERS: &[&str] = &[
    "change_me",
    "your_",
    "<your-",
    "xxx",
    "placeholder",
    "example",
];

/// Check whether a value is an unfilled template stand-in.
///
/// Matches any generic marker as a case-insensitive substring. This check
/// is independent of any rule-specific placeholder marker, which is matched
/// case-sensitively by the evaluator.
///
/// # Example
///
/// ```
/// use preflight::placeholder::is_placeholder;
///
/// assert!(is_placeholder("CHANGE_ME"));
/// assert!(is_placeholder("<your-project-id>"));
/// assert!(!is_placeholder("my-app"));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    GENERIC_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_change_me() {
        assert!(is_placeholder("CHANGE_ME"));
        assert!(is_placeholder("change_me"));
        assert!(is_placeholder("sk-change_me-key"));
    }

    #[test]
    fn test_detects_your_prefix() {
        assert!(is_placeholder("your_api_key"));
        assert!(is_placeholder("YOUR_TOKEN"));
    }

    #[test]
    fn test_detects_bracketed_template() {
        assert!(is_placeholder("<your-project-id>"));
        assert!(is_placeholder("<YOUR-ORG>"));
    }

    #[test]
    fn test_detects_filler_and_words() {
        assert!(is_placeholder("xxxxxx"));
        assert!(is_placeholder("a-Placeholder-value"));
        assert!(is_placeholder("https://example.com"));
    }

    #[test]
    fn test_real_values_pass() {
        assert!(!is_placeholder("my-app"));
        assert!(!is_placeholder("sk-ant-abc123"));
        assert!(!is_placeholder("ghp_16chartoken"));
        assert!(!is_placeholder(""));
    }
}
