use chrono::NaiveDate;

/// Accepted date formats, tried in order. First match wins, which is what
/// resolves the `MM/DD/YYYY` vs `DD/MM/YYYY` ambiguity: `03/04/2025` is
/// always month-first. Reordering this list changes observable output.
const DATE_FORMATS: [&str; 7] = [
    "%B %d, %Y", // October 13, 2025
    "%b %d, %Y", // Oct 13, 2025
    "%d %B %Y",  // 13 October 2025
    "%d %b %Y",  // 13 Oct 2025
    "%Y-%m-%d",  // 2025-10-13
    "%m/%d/%Y",  // 10/13/2025
    "%d/%m/%Y",  // 13/10/2025
];

/// Result of a normalization attempt. A fallback is not an error; the caller
/// decides whether to log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// Rendered in canonical `YYYY-MM-DD` form.
    Canonical(String),
    /// Matched no accepted format; the trimmed input, unchanged.
    Fallback(String),
}

/// Normalize a raw date string to `YYYY-MM-DD` against the accepted formats.
pub fn normalize_date(raw: &str) -> DateOutcome {
    let trimmed = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return DateOutcome::Canonical(date.format("%Y-%m-%d").to_string());
        }
    }
    DateOutcome::Fallback(trimmed.to_string())
}

// ── Tests ──
