use std::sync::LazyLock;

use regex::Regex;

/// Release entries appear in page text as `VERSION v4.28 (October 13, 2025)`.
/// The version token starts with `v` and carries digits and dots; the date is
/// whatever sits inside the parentheses.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)VERSION\s+(v[\d.]+)\s*\(([^)]+)\)").unwrap());

/// Scan one block of rendered text for `(version, date)` pairs. All matches
/// in the block are returned; no match is an empty vec, not an error.
/// Matches with an empty trimmed capture are discarded.
pub fn match_records(text: &str) -> Vec<(String, String)> {
    VERSION_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let version = caps[1].trim();
            let date = caps[2].trim();
            if version.is_empty() || date.is_empty() {
                return None;
            }
            Some((version.to_string(), date.to_string()))
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_entry() {
        let pairs = match_records("VERSION v4.28 (October 13, 2025)");
        assert_eq!(pairs, vec![("v4.28".to_string(), "October 13, 2025".to_string())]);
    }

    #[test]
    fn case_insensitive_token() {
        let pairs = match_records("Version v1.0 (2025-01-01)");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "v1.0");
    }

    #[test]
    fn multiple_entries_in_one_block() {
        let text = "VERSION v5.00 (January 2, 2025) some notes\nVERSION v4.99 (02/01/2024)";
        let pairs = match_records(text);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("v5.00".into(), "January 2, 2025".into()));
        assert_eq!(pairs[1], ("v4.99".into(), "02/01/2024".into()));
    }

    #[test]
    fn text_without_token_yields_nothing() {
        assert!(match_records("Download the latest build here.").is_empty());
        assert!(match_records("").is_empty());
    }

    #[test]
    fn whitespace_only_date_is_discarded() {
        assert!(match_records("VERSION v2.0 (   )").is_empty());
    }
}
