//! Display-label helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Turn an identifier-like name into a human-readable label.
///
/// Inserts a space before every uppercase ASCII letter, then trims
/// surrounding whitespace: `"GoogleSearch"` becomes `"Google Search"`.
#[must_use]
pub fn humanize(label: &str) -> String {
    static UPPERCASE: OnceLock<Regex> = OnceLock::new();
    let regex = UPPERCASE.get_or_init(|| Regex::new(r"([A-Z])").expect("valid regex"));

    regex.replace_all(label, " $1").trim().to_string()
}
