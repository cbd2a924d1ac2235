//! Phone-number normalization and validation.
//!
//! User input arrives full of formatting noise (`+`, parentheses, dashes,
//! spaces, the occasional underscore from URL parameters). [`normalize`]
//! strips that noise without touching alphanumeric characters, and
//! [`is_valid`] decides whether what remains is a plausible phone number.
//!
//! The two steps are deliberately separate: normalization keeps letters,
//! and validation then rejects any input where letters survived. Inputs
//! with alphabetic noise mixed into the digits are refused outright rather
//! than silently stripped down to their digits.

use crate::error::TelescanError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Formatting noise: underscores and anything outside the word class.
fn noise_regex() -> &'static Regex {
    static NOISE: OnceLock<Regex> = OnceLock::new();
    NOISE.get_or_init(|| Regex::new(r"[_\W]+").expect("valid regex"))
}

/// One or more ASCII digits and nothing else.
fn digits_regex() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"))
}

/// Strip formatting noise from a phone-number-like string.
///
/// Removes every underscore and every non-word character; alphanumerics
/// (including non-ASCII letters) survive. Total over all strings and
/// idempotent. The result is not guaranteed to be all digits; that is
/// [`is_valid`]'s job.
#[must_use]
pub fn normalize(input: &str) -> String {
    noise_regex().replace_all(input, "").into_owned()
}

/// Check whether the input normalizes to a plausible phone number.
///
/// True iff the normalized string is all ASCII digits and longer than
/// two characters. Letters surviving normalization fail the digit match,
/// so `"this1 555 4443333"` is invalid even though it contains a valid
/// number.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    let formatted = normalize(input);
    digits_regex().is_match(&formatted) && formatted.len() > 2
}

/// Newtype for normalized phone numbers.
///
/// A `PhoneNumber` always holds three or more ASCII digits, produced by
/// running raw input through [`normalize`] and the [`is_valid`] check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a `PhoneNumber` from raw user input.
    ///
    /// # Errors
    /// Returns error if the input does not normalize to 3+ ASCII digits.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TelescanError> {
        let input = input.as_ref();
        let formatted = normalize(input);

        if digits_regex().is_match(&formatted) && formatted.len() > 2 {
            Ok(Self(formatted))
        } else {
            Err(TelescanError::Validation(format!(
                "invalid phone number: expected 3 or more digits after normalization, got '{input}'"
            )))
        }
    }

    /// Get the normalized digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("+1 (555) 444-3333"), "15554443333");
        assert_eq!(normalize("1/(555)_444-3333"), "15554443333");
        assert_eq!(normalize("+254 (74_370-6303"), "254743706303");
    }

    #[test]
    fn test_normalize_keeps_letters() {
        assert_eq!(normalize("this254 743 706303"), "this254743706303");
        assert_eq!(normalize("call me"), "callme");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        // Word characters are not noise, accented letters included.
        assert_eq!(normalize("tél: 01 23 45"), "tél012345");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" +()-/_ "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["+1 (555) 444-3333", "this1 555", "", "254743706303", "a_b c"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for: {input}");
        }
    }

    #[test]
    fn test_normalize_leaves_no_noise() {
        let noisy = "+1_ (555) 444-3333 ext. 7";
        let formatted = normalize(noisy);
        assert!(!formatted.contains('_'));
        assert!(formatted.chars().all(char::is_alphanumeric));
    }

    #[test]
    fn test_is_valid_accepts_formatted_numbers() {
        assert!(is_valid("+1/(555)_444-3333"));
        assert!(is_valid("1 555 4443333"));
        assert!(is_valid("254743706303"));
    }

    #[test]
    fn test_is_valid_rejects_letter_noise() {
        // Letters survive normalization and break the all-digit match.
        assert!(!is_valid("this1 555 4443333"));
        assert!(!is_valid("five five five"));
    }

    #[test]
    fn test_is_valid_length_boundary() {
        assert!(!is_valid(""));
        assert!(!is_valid("1"));
        assert!(!is_valid("12"));
        assert!(!is_valid("(1) 2"));
        assert!(is_valid("123"));
    }

    #[test]
    fn test_is_valid_rejects_non_ascii_digits() {
        // Arabic-Indic digits are word characters but not 0-9.
        assert!(!is_valid("٣٤٥٦"));
    }

    #[test]
    fn test_phone_number_valid() {
        let number = PhoneNumber::new("+1 (555) 444-3333").expect("valid phone number");
        assert_eq!(number.as_str(), "15554443333");
        assert_eq!(number.to_string(), "15554443333");
    }

    #[test]
    fn test_phone_number_invalid() {
        let invalid = ["", "12", "this1 555 4443333", "no digits here"];
        for input in invalid {
            assert!(PhoneNumber::new(input).is_err(), "should fail for: {input}");
        }
    }

    #[test]
    fn test_phone_number_serialization() {
        let number = PhoneNumber::new("1 555 4443333").expect("valid phone number");
        let json = serde_json::to_string(&number).expect("serialize phone number");
        assert_eq!(json, "\"15554443333\"");
    }
}
