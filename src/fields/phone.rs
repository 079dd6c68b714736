use once_cell::sync::Lazy;
use regex::Regex;

use super::RawValue;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Normalizes a phone number into `DDD-DDD-DDDD` form.
///
/// Every non-digit character is stripped first, so `(123) 456-7890`,
/// `123.456.7890` and `123/456/7890` all normalize to the same value. Any
/// input that does not leave exactly 10 digits yields an empty string:
/// unusable contact numbers are filtered downstream, never surfaced as a
/// malformed pattern or treated as an error.
pub fn normalize_phone(raw: &RawValue) -> String {
    let text = match raw.as_text() {
        None => return String::new(),
        Some(text) => text,
    };

    let digits = NON_DIGIT.replace_all(text, "");
    if digits.len() != 10 {
        return String::new();
    }
    format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuated_numbers_unified() {
        assert_eq!(normalize_phone(&"(123) 456-7890".into()), "123-456-7890");
        assert_eq!(normalize_phone(&"123.456.7890".into()), "123-456-7890");
        assert_eq!(normalize_phone(&"123/456/7890".into()), "123-456-7890");
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        assert_eq!(normalize_phone(&"123-456-7890".into()), "123-456-7890");
    }

    #[test]
    fn test_short_numbers_yield_empty() {
        assert_eq!(normalize_phone(&"123".into()), "");
        assert_eq!(normalize_phone(&"123-456-789".into()), "");
    }

    #[test]
    fn test_long_numbers_yield_empty() {
        assert_eq!(normalize_phone(&"+1 123-456-7890".into()), "");
    }

    #[test]
    fn test_missing_yields_empty() {
        assert_eq!(normalize_phone(&RawValue::Missing), "");
    }

    #[test]
    fn test_non_numeric_noise_yields_empty_never_malformed() {
        assert_eq!(normalize_phone(&"no phone".into()), "");
        assert_eq!(normalize_phone(&"N/a".into()), "");
    }
}
