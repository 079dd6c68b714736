use thiserror::Error;

/// Signaled when a present field value does not match any recognized grammar
/// for its field kind. Legitimately-absent input is never an error; it is
/// represented as [`Normalized::Unknown`](crate::fields::Normalized).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unrecognized {field} value '{value}': {reason}")]
    Format {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl FieldError {
    pub fn format(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldError::Format {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No profile registered for dataset: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, CleanError>;
