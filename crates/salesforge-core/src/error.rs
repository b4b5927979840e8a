use thiserror::Error;

/// Core error type shared across Salesforge crates.
///
/// Every variant describes a single malformed record or entity attribute;
/// the loader maps these into skip-and-warn diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// A record did not have the expected number of separator-delimited fields.
    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },
    /// A record needs at least this many fields.
    #[error("expected at least {expected} fields, got {got}")]
    TooFewFields { expected: usize, got: usize },
    /// A numeric field failed to parse.
    #[error("invalid {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    /// A document-type code outside the closed {CC, CE} set.
    #[error("unknown document type: '{0}'")]
    UnknownDocType(String),
    /// Product ids start at 1.
    #[error("product id must be positive")]
    NonPositiveProductId,
    /// Product names must carry at least one non-whitespace character.
    #[error("product name must not be empty")]
    EmptyName,
    /// A salesman name field was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    /// Sales of zero or negative quantity are rejected.
    #[error("quantity must be positive")]
    NonPositiveQuantity,
    /// A sales-file stem that is not `<docType>_<docNumber>`.
    #[error("invalid salesman key: '{0}'")]
    InvalidSalesmanKey(String),
}

/// Convenience alias for results returned by Salesforge crates.
pub type Result<T> = std::result::Result<T, Error>;
