use thiserror::Error;

/// Failure modes of the aggregation queries.
///
/// None of these are fatal: callers are expected to branch, surface a
/// message, and skip the affected view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested country is not in the table (lookup is exact and
    /// case-sensitive).
    #[error("country not found: {0:?}")]
    CountryNotFound(String),
    /// A ranked query was asked for fewer than one entry.
    #[error("ranking requires n >= 1, got {0}")]
    InvalidLimit(usize),
    /// The record exists but every one of its 16 shares is missing, so no
    /// extremum is defined.
    #[error("country {0:?} has no present values")]
    NoPresentValues(String),
}
