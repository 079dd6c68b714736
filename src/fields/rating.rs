use super::{Normalized, RawValue};
use crate::error::FieldError;

const FIELD: &str = "rating";

/// Normalizes a star-rating field like `"4 ★"` into its integer value.
///
/// The weak-foot, skill-move and reputation columns all carry a trailing
/// star glyph; it is decoration, not data.
pub fn normalize_rating(raw: &RawValue) -> Result<Normalized<u8>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text,
    };

    let stripped = text.trim_end_matches('★').trim();
    let value: u8 = stripped
        .parse()
        .map_err(|_| FieldError::format(FIELD, text, "expected an integer with optional trailing ★"))?;
    Ok(Normalized::Known(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_glyph_stripped() {
        assert_eq!(normalize_rating(&"4 ★".into()), Ok(Normalized::Known(4)));
        assert_eq!(normalize_rating(&"5★".into()), Ok(Normalized::Known(5)));
    }

    #[test]
    fn test_plain_integer_accepted() {
        assert_eq!(normalize_rating(&"3".into()), Ok(Normalized::Known(3)));
    }

    #[test]
    fn test_missing_is_unknown() {
        assert_eq!(normalize_rating(&RawValue::Missing), Ok(Normalized::Unknown));
    }

    #[test]
    fn test_non_numeric_is_format_error() {
        assert!(normalize_rating(&"★★★".into()).is_err());
        assert!(normalize_rating(&"four".into()).is_err());
    }
}
