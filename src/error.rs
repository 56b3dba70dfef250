//! Error types for the materialization layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The destination shape is malformed: a field declares an empty column
    /// override or an unknown conversion name. Detected before the query runs.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// Query execution or row-scan failure from the underlying driver,
    /// propagated verbatim. Aborts the call with no partial output.
    #[error("driver error: {0}")]
    Driver(String),

    /// A `json` or `time` conversion tag applied to an incompatible field kind.
    #[error("{tag} tag on field {field} of type {kind} is illegal")]
    IllegalFieldType {
        field: String,
        kind: String,
        tag: String,
    },

    /// Textual parse failure, JSON decode failure, or out-of-range narrowing.
    #[error("conversion failed: {0}")]
    Conversion(String),

    /// No rule bridges the raw value kind to the declared field kind.
    #[error("no conversion from {found} to {expected}")]
    UnsupportedConversion { expected: String, found: String },

    /// Surfaced by the single-row update helper when zero rows matched.
    #[error("no rows matched")]
    NotFound,
}
