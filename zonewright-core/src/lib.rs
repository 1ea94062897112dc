//! # zonewright-core
//!
//! Zone/record resolution and mutation engine over a pluggable
//! hosted-zone DNS provider.
//!
//! Given a record name (and optionally a type), the engine locates the
//! owning hosted zone, finds the unique matching record set, rejects
//! ambiguous matches, and performs safe replace updates (delete old +
//! create new in one atomic change batch). It exists so that a command
//! front end can mutate DNS without ever touching the wrong record.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonewright_core::{RecordQuery, Session};
//! use zonewright_provider::{Route53Credentials, create_provider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = create_provider(Route53Credentials::from_env()?);
//!
//! // One session per logical operation; the owning zone is cached on it.
//! let mut session = Session::new(provider);
//!
//! let old = session
//!     .resolve_record(&RecordQuery::with_type("www.example.com", "A"))
//!     .await?;
//!
//! let zone = session.zone_for_host("www.example.com").await?;
//! let mut new = old.clone();
//! new.resource_records[0].value = "198.51.100.7".to_string();
//! session
//!     .update_record(&zone, old, new, Some("repoint www".to_string()))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure semantics
//!
//! Every operation resolves through exactly one `Ok`/`Err`; see
//! [`CoreError`] for the taxonomy. Ambiguity is a hard failure: a point
//! query matching more than one record set returns
//! [`CoreError::AmbiguousSelection`] rather than silently picking the
//! first candidate. Silent wrong-record selection is the one failure
//! mode this engine is built to prevent.

mod changes;
mod error;
mod names;
mod records;
mod session;

#[cfg(test)]
mod test_utils;

pub use error::{CoreError, CoreResult, ProviderError};
pub use names::{is_ambiguous_follower, names_match, normalize, types_match, zone_owns_host};
pub use records::{RecordCursor, RecordQuery};
pub use session::Session;

// Re-export the wire model so callers need only one import path
pub use zonewright_provider::{
    Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, RecordSetPage,
    RecordSetRequest, RecordType, ResourceRecord, ResourceRecordSet, ZoneProvider,
};
