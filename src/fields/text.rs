use super::{Normalized, RawValue};

/// Characters that show up as typos around names in the source data.
const NOISE_CHARS: &[char] = &['/', '.', '_'];

/// Cleans a free-text field: trims surrounding whitespace, then strips the
/// noise characters observed around last names and club names from both
/// ends. Interior characters are left alone (`"O'Brien_/"` keeps its
/// apostrophe). Infallible: any present text has a cleaned form.
pub fn clean_text(raw: &RawValue) -> Normalized<String> {
    match raw.as_text() {
        None => Normalized::Unknown,
        Some(text) => {
            let cleaned = text.trim().trim_matches(NOISE_CHARS).trim();
            Normalized::Known(cleaned.to_string())
        }
    }
}
