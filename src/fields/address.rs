use super::{Normalized, RawValue};
use crate::domain::AddressParts;
use crate::error::FieldError;

const FIELD: &str = "address";

/// Splits a single-line address into street, state and zip components.
///
/// The source data carries different levels of information per record
/// ("123 Main St", "123 Main St, NY", "123 Main St, NY, 10001"), so only
/// the street is required; at most three comma-separated parts are taken.
pub fn split_address(raw: &RawValue) -> Result<Normalized<AddressParts>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text.trim(),
    };
    if text.is_empty() {
        return Err(FieldError::format(FIELD, text, "address is empty"));
    }

    let mut parts = text.splitn(3, ',').map(|part| part.trim());
    let street = match parts.next() {
        Some(street) if !street.is_empty() => street.to_string(),
        _ => return Err(FieldError::format(FIELD, text, "address has no street component")),
    };
    let state = parts.next().filter(|part| !part.is_empty()).map(str::to_string);
    let zip = parts.next().filter(|part| !part.is_empty()).map(str::to_string);

    Ok(Normalized::Known(AddressParts { street, state, zip }))
}
