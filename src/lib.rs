//! fieldnorm — field normalization pipeline for tabular data cleaning.
//!
//! Pure field normalizers (`fields`) convert heterogeneous textual encodings
//! of a quantity into one canonical typed representation; the record
//! pipeline (`pipeline`) applies them to JSON-shaped table rows via dataset
//! profiles and reports per-field outcomes without aborting a batch.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod infra;
pub mod logging;
pub mod pipeline;
