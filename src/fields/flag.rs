use super::{Normalized, RawValue};
use crate::error::FieldError;

const FIELD: &str = "flag";

/// Normalizes a yes/no field into a boolean.
///
/// The source tables mix `Yes`/`No` with the abbreviated `Y`/`N`; both are
/// accepted case-insensitively. Absent input stays unknown rather than
/// defaulting to either answer.
pub fn normalize_flag(raw: &RawValue) -> Result<Normalized<bool>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text.trim(),
    };

    if text.eq_ignore_ascii_case("yes") || text.eq_ignore_ascii_case("y") {
        return Ok(Normalized::Known(true));
    }
    if text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("n") {
        return Ok(Normalized::Known(false));
    }
    Err(FieldError::format(FIELD, text, "expected Yes/No or Y/N"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_forms_accepted() {
        assert_eq!(normalize_flag(&"Yes".into()), Ok(Normalized::Known(true)));
        assert_eq!(normalize_flag(&"Y".into()), Ok(Normalized::Known(true)));
        assert_eq!(normalize_flag(&"No".into()), Ok(Normalized::Known(false)));
        assert_eq!(normalize_flag(&"N".into()), Ok(Normalized::Known(false)));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_flag(&"yes".into()), Ok(Normalized::Known(true)));
        assert_eq!(normalize_flag(&"nO".into()), Ok(Normalized::Known(false)));
    }

    #[test]
    fn test_missing_is_unknown() {
        assert_eq!(normalize_flag(&RawValue::Missing), Ok(Normalized::Unknown));
    }

    #[test]
    fn test_other_text_is_format_error() {
        assert!(normalize_flag(&"maybe".into()).is_err());
        assert!(normalize_flag(&"123".into()).is_err());
    }
}
