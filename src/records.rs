use std::collections::HashSet;

use serde::Serialize;

/// One release entry extracted from the page. Immutable once built;
/// downstream only filters and reorders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    pub version: String,
    pub date: String,
    pub url: String,
}

/// Collapse duplicate `(version, date)` keys (first occurrence wins) and
/// order by date descending.
///
/// The sort is plain string comparison: canonical `YYYY-MM-DD` dates order
/// chronologically, fallback strings order wherever lexicographic comparison
/// puts them. The url is deliberately not part of the dedup key.
pub fn dedup_and_sort(records: Vec<VersionRecord>) -> Vec<VersionRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique: Vec<VersionRecord> = records
        .into_iter()
        .filter(|r| seen.insert((r.version.clone(), r.date.clone())))
        .collect();

    // sort_by is stable, so equal dates keep scan order
    unique.sort_by(|a, b| b.date.cmp(&a.date));
    unique
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(version: &str, date: &str, url: &str) -> VersionRecord {
        VersionRecord {
            version: version.into(),
            date: date.into(),
            url: url.into(),
        }
    }

    #[test]
    fn exact_duplicates_collapse_to_one() {
        let out = dedup_and_sort(vec![
            rec("v4.28", "2025-10-13", "https://a.example"),
            rec("v4.28", "2025-10-13", "https://a.example"),
        ]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn url_is_not_part_of_the_key() {
        let out = dedup_and_sort(vec![
            rec("v1", "2025-01-01", "https://a.example"),
            rec("v1", "2025-01-01", "https://b.example"),
        ]);
        assert_eq!(out.len(), 1);
        // first-seen wins
        assert_eq!(out[0].url, "https://a.example");
    }

    #[test]
    fn same_version_different_date_kept_as_distinct() {
        let out = dedup_and_sort(vec![
            rec("v1", "2025-01-01", "u"),
            rec("v1", "January 1, 2025ish", "u"),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dates_sort_descending() {
        let out = dedup_and_sort(vec![
            rec("a", "2025-01-01", "u"),
            rec("b", "2024-06-01", "u"),
            rec("c", "2025-06-01", "u"),
        ]);
        let dates: Vec<&str> = out.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-06-01", "2025-01-01", "2024-06-01"]);
    }

    #[test]
    fn serializes_to_three_string_fields() {
        let json = serde_json::to_value(rec("v4.28", "2025-10-13", "https://a.example")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "v4.28",
                "date": "2025-10-13",
                "url": "https://a.example",
            })
        );
    }
}
