//! Client-side filter policy over the advertised scanner list.

#![allow(clippy::must_use_candidate)]

use crate::types::ScannerDescriptor;
use serde::{Deserialize, Serialize};

/// Name of the pseudo-scanner the backend advertises for on-device
/// number parsing. It is not a selectable remote plugin.
pub const LOCAL_SCANNER: &str = "local";

/// Client-side filter over the scanner list.
///
/// The filter is deliberately a named, standalone policy rather than a
/// condition buried in the fetch path, so dropping an exclusion is a
/// one-line change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScannerFilter {
    /// Keep every advertised scanner
    All,
    /// Drop scanners whose name appears in the list
    Exclude(Vec<String>),
}

impl ScannerFilter {
    /// The filter used for selection lists: everything except the
    /// `local` pseudo-scanner.
    // TODO: drop the `local` exclusion once backends stop advertising it.
    pub fn selectable() -> Self {
        Self::Exclude(vec![LOCAL_SCANNER.to_string()])
    }

    /// Whether a scanner passes the filter.
    pub fn matches(&self, scanner: &ScannerDescriptor) -> bool {
        match self {
            ScannerFilter::All => true,
            ScannerFilter::Exclude(names) => !names.iter().any(|name| name == &scanner.name),
        }
    }

    /// Apply the filter, preserving order and duplicates.
    pub fn apply(&self, scanners: Vec<ScannerDescriptor>) -> Vec<ScannerDescriptor> {
        scanners
            .into_iter()
            .filter(|scanner| self.matches(scanner))
            .collect()
    }
}

impl Default for ScannerFilter {
    fn default() -> Self {
        Self::selectable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> ScannerDescriptor {
        ScannerDescriptor {
            name: name.to_string(),
            description: format!("{name} scanner"),
        }
    }

    #[test]
    fn test_filter_all() {
        let filter = ScannerFilter::All;
        assert!(filter.matches(&descriptor(LOCAL_SCANNER)));
        assert!(filter.matches(&descriptor("numverify")));
    }

    #[test]
    fn test_selectable_excludes_local() {
        let filter = ScannerFilter::selectable();
        assert!(!filter.matches(&descriptor(LOCAL_SCANNER)));
        assert!(filter.matches(&descriptor("numverify")));
        // Exclusion is exact, not a prefix match
        assert!(filter.matches(&descriptor("localscan")));
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = ScannerFilter::selectable();
        let scanners = vec![
            descriptor("googlesearch"),
            descriptor(LOCAL_SCANNER),
            descriptor("numverify"),
            descriptor("ovh"),
        ];

        let kept = filter.apply(scanners);
        let names: Vec<&str> = kept.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["googlesearch", "numverify", "ovh"]);
    }

    #[test]
    fn test_apply_keeps_duplicates() {
        let filter = ScannerFilter::selectable();
        let scanners = vec![
            descriptor("numverify"),
            descriptor(LOCAL_SCANNER),
            descriptor("numverify"),
        ];

        let kept = filter.apply(scanners);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], kept[1]);
    }

    #[test]
    fn test_exclude_empty_keeps_everything() {
        let filter = ScannerFilter::Exclude(vec![]);
        assert!(filter.matches(&descriptor(LOCAL_SCANNER)));
    }
}
