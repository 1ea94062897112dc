//! Engine error taxonomy

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use zonewright_provider::ProviderError;

/// Resolution/mutation engine error type.
///
/// Every engine operation resolves through exactly one `Ok`/`Err`; none of
/// these are retried internally. Retry policy belongs to the caller or to
/// the provider client's transport layer.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No hosted zone matched the requested name or host.
    #[error("No hosted zone found for: {0}")]
    ZoneNotFound(String),

    /// The zone listing itself failed (transport or provider fault).
    #[error("Zone lookup failed: {0}")]
    ZoneLookupFailed(String),

    /// A caller-supplied record type is not in the supported vocabulary.
    ///
    /// An unrecognized type is never silently treated as a wildcard.
    #[error("Invalid record type: {0}")]
    InvalidType(String),

    /// No record set exists at the queried name.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A record set exists at the queried name, but not with the
    /// requested type at this position in provider order.
    #[error("Record {name} exists but not with type {requested} (found {found})")]
    TypeMismatch {
        /// Queried record name.
        name: String,
        /// Type the caller asked for.
        requested: String,
        /// Type actually present at this position.
        found: String,
    },

    /// More than one record set matched the query; refusing to pick one.
    #[error("Ambiguous record selection at {0}: more than one record set matches")]
    AmbiguousSelection(String),

    /// The provider refused the submitted change batch.
    #[error("Update rejected: {0}")]
    UpdateRejected(String),

    /// A record-set page request failed mid-enumeration.
    ///
    /// Records already delivered before the failure are not retracted.
    #[error("Pagination failed: {0}")]
    PaginationFailed(String),
}

impl CoreError {
    /// Whether this error is expected behavior (user input, missing
    /// resource) rather than an operational fault, used for log-level
    /// selection.
    ///
    /// Level `warn` should be used when returning `true`, `error`
    /// otherwise. **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound(_)
                | Self::InvalidType(_)
                | Self::RecordNotFound(_)
                | Self::TypeMismatch { .. }
                | Self::AmbiguousSelection(_)
                | Self::UpdateRejected(_)
        )
    }
}

/// Engine Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
