//! # zonewright-provider
//!
//! The provider boundary for hosted-zone DNS management: a neutral wire
//! model (zones, record sets, change batches), the [`ZoneProvider`]
//! capability trait consumed by the resolution engine, and a concrete
//! AWS Route 53 client.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonewright_provider::{
//!     RecordSetRequest, Route53Credentials, ZoneProvider, create_provider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials
//!     let provider = create_provider(Route53Credentials::from_env()?);
//!
//!     // 2. List hosted zones
//!     let zones = provider.list_hosted_zones().await?;
//!     for zone in &zones {
//!         println!("{} ({})", zone.name, zone.id);
//!     }
//!
//!     // 3. Fetch the first page of a zone's record sets
//!     let page = provider
//!         .list_record_sets(&RecordSetRequest::new(zones[0].id.clone()))
//!         .await?;
//!     for record_set in &page.record_sets {
//!         println!("{} {}", record_set.name, record_set.record_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are
//! automatically retried with exponential backoff; everything else is
//! surfaced immediately for the caller to map into its own taxonomy.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export the provider capability trait
pub use traits::ZoneProvider;

// Re-export types
pub use types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus,
    CredentialValidationError, HostedZone, RecordSetPage, RecordSetRequest, RecordType,
    ResourceRecord, ResourceRecordSet, Route53Credentials, UnknownRecordType,
};

// Re-export the concrete provider
pub use providers::Route53Provider;
