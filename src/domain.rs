use serde::{Deserialize, Serialize};

/// Contract standing of a player record, derived from the raw contract field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Not under contract with any club.
    Free,
    /// Playing for a club on loan; the contract field carries the loan end
    /// date instead of a contract period.
    OnLoan,
    /// Under contract for a start/end year period.
    UnderContract,
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractStatus::Free => write!(f, "Free"),
            ContractStatus::OnLoan => write!(f, "On Loan"),
            ContractStatus::UnderContract => write!(f, "Contract"),
        }
    }
}

/// Canonical form of a contract period field.
///
/// Years are present only when the status is [`ContractStatus::UnderContract`];
/// for free agents and loans the period does not apply and the length is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub length_years: i32,
    pub status: ContractStatus,
}

impl ContractTerms {
    pub fn free() -> Self {
        Self {
            start_year: None,
            end_year: None,
            length_years: 0,
            status: ContractStatus::Free,
        }
    }

    pub fn on_loan() -> Self {
        Self {
            start_year: None,
            end_year: None,
            length_years: 0,
            status: ContractStatus::OnLoan,
        }
    }

    pub fn under_contract(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year: Some(start_year),
            end_year: Some(end_year),
            length_years: end_year - start_year,
            status: ContractStatus::UnderContract,
        }
    }
}

/// Components of a single-line postal address, split on commas.
///
/// The source data carries different levels of information per record, so
/// everything past the street is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParts {
    pub street: String,
    pub state: Option<String>,
    pub zip: Option<String>,
}
