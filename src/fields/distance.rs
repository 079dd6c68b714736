use once_cell::sync::Lazy;
use regex::Regex;

use super::{Normalized, RawValue};
use crate::error::FieldError;

const FIELD: &str = "distance";

/// Imperial height like `6'2"`: feet, apostrophe, inches, double quote.
static FEET_INCHES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^(\d+)'(\d{1,2})"$"#).unwrap());

/// Normalizes a height field into integer centimeters.
///
/// Two grammars appear in the source data: metric (`"182cm"`), returned
/// exactly, and feet/inches (`6'2"`), converted at 2.54 cm per inch and
/// rounded. Absent input is `Unknown`; anything else is a format error.
pub fn normalize_distance(raw: &RawValue) -> Result<Normalized<u32>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text.trim(),
    };

    if let Some(metric) = text.strip_suffix("cm") {
        let centimeters: u32 = metric.trim().parse().map_err(|_| {
            FieldError::format(FIELD, text, "metric value is not an integer")
        })?;
        return Ok(Normalized::Known(centimeters));
    }

    if let Some(captures) = FEET_INCHES.captures(text) {
        let feet: u32 = captures[1]
            .parse()
            .map_err(|_| FieldError::format(FIELD, text, "feet value out of range"))?;
        let inches: u32 = captures[2]
            .parse()
            .map_err(|_| FieldError::format(FIELD, text, "inch value out of range"))?;
        let total_inches = feet as f64 * 12.0 + inches as f64;
        let centimeters = (total_inches * 2.54).round() as u32;
        return Ok(Normalized::Known(centimeters));
    }

    Err(FieldError::format(FIELD, text, "expected '<n>cm' or '<ft>'<in>\"'"))
}
