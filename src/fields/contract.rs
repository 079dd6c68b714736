use super::{Normalized, RawValue};
use crate::domain::ContractTerms;
use crate::error::FieldError;

const FIELD: &str = "contract";

/// The free-agent token is a complete value; the loan marker is only a
/// portion of a longer value (e.g. `"Jun 30, 2021 On Loan"`), so it is
/// matched as a substring.
const FREE_TOKEN: &str = "Free";
const ON_LOAN_MARKER: &str = "On Loan";

/// Separator between the start and end dates of a contract period. The
/// spaces are part of the literal.
const PERIOD_SEPARATOR: &str = " ~ ";

/// Normalizes a contract field into canonical [`ContractTerms`].
///
/// Three formats appear in the source data:
/// - `"Free"` — free agent, no period;
/// - `"... On Loan"` — on loan, no period;
/// - `"2018 ~ 2021"` — a period whose tokens each lead with a 4-digit year.
pub fn normalize_contract(raw: &RawValue) -> Result<Normalized<ContractTerms>, FieldError> {
    let text = match raw.as_text() {
        None => return Ok(Normalized::Unknown),
        Some(text) => text.trim(),
    };

    if text == FREE_TOKEN {
        return Ok(Normalized::Known(ContractTerms::free()));
    }
    if text.contains(ON_LOAN_MARKER) {
        return Ok(Normalized::Known(ContractTerms::on_loan()));
    }

    let mut parts = text.split(PERIOD_SEPARATOR);
    let (start_token, end_token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => {
            return Err(FieldError::format(
                FIELD,
                text,
                "expected exactly two date tokens separated by ' ~ '",
            ))
        }
    };

    let start_year = leading_year(start_token)
        .ok_or_else(|| FieldError::format(FIELD, text, "start token has no leading 4-digit year"))?;
    let end_year = leading_year(end_token)
        .ok_or_else(|| FieldError::format(FIELD, text, "end token has no leading 4-digit year"))?;

    Ok(Normalized::Known(ContractTerms::under_contract(start_year, end_year)))
}

/// Parses the leading 4-digit year of a date token.
fn leading_year(token: &str) -> Option<i32> {
    let token = token.trim();
    if token.len() < 4 {
        return None;
    }
    let head = &token[..4];
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}
