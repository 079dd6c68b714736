use super::{Normalized, RawValue};
use crate::error::FieldError;

const FIELD: &str = "mass";

/// Pounds per kilogram used by the source data.
const LBS_PER_KG: f64 = 2.205;

/// Normalizes a weight field into integer kilograms.
///
/// Metric input (`"70kg"`) is returned exactly; pounds (`"154lbs"`) are
/// divided by 2.205 and rounded. Absent input is `Unknown`.
pub fn normalize_mass(raw: &RawValue) -> Result<Normalized<u32>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text.trim(),
    };

    if let Some(metric) = text.strip_suffix("kg") {
        let kilograms: u32 = metric.trim().parse().map_err(|_| {
            FieldError::format(FIELD, text, "metric value is not an integer")
        })?;
        return Ok(Normalized::Known(kilograms));
    }

    if let Some(imperial) = text.strip_suffix("lbs") {
        let pounds: u32 = imperial.trim().parse().map_err(|_| {
            FieldError::format(FIELD, text, "pound value is not an integer")
        })?;
        let kilograms = (pounds as f64 / LBS_PER_KG).round() as u32;
        return Ok(Normalized::Known(kilograms));
    }

    Err(FieldError::format(FIELD, text, "expected '<n>kg' or '<n>lbs'"))
}
