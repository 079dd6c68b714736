use super::RawValue;
use crate::error::FieldError;

const FIELD: &str = "count";

/// Normalizes an abbreviated hit-count field into an integer.
///
/// Policy: an absent or empty hit count means zero observed hits, not an
/// unknown quantity, so missing input normalizes to `0` rather than to an
/// unknown result. This is a deliberate choice inherited from the source
/// data, where the column is only populated once a record has been hit.
///
/// A trailing `K` multiplies the numeric portion by 1000; the result is
/// truncated to an integer. The abbreviation is lossy: `"1.6K"` cannot be
/// distinguished from any exact value between 1600 and 1699, so callers
/// needing exact counts must treat this field as approximate.
pub fn normalize_count(raw: &RawValue) -> Result<u64, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(0),
        Some(text) => text.trim(),
    };
    if text.is_empty() {
        return Ok(0);
    }

    if let Some(abbreviated) = text.strip_suffix(['K', 'k']) {
        let thousands: f64 = abbreviated.trim().parse().map_err(|_| {
            FieldError::format(FIELD, text, "abbreviated value is not numeric")
        })?;
        if thousands < 0.0 {
            return Err(FieldError::format(FIELD, text, "count cannot be negative"));
        }
        return Ok((thousands * 1000.0).trunc() as u64);
    }

    // Plain values occasionally arrive as floats like "6.0"; the fractional
    // component is discarded.
    let value: f64 = text
        .parse()
        .map_err(|_| FieldError::format(FIELD, text, "value is not numeric"))?;
    if value < 0.0 {
        return Err(FieldError::format(FIELD, text, "count cannot be negative"));
    }
    Ok(value.trunc() as u64)
}
