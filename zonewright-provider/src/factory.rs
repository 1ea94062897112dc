//! Provider factory functions.

use std::sync::Arc;

use crate::providers::Route53Provider;
use crate::traits::ZoneProvider;
use crate::types::Route53Credentials;

/// Creates a [`ZoneProvider`] instance from the given credentials.
///
/// The provider is wrapped in `Arc<dyn ZoneProvider>` for easy sharing
/// across async tasks and resolution sessions.
///
/// # Examples
///
/// ```rust,no_run
/// use zonewright_provider::{Route53Credentials, create_provider};
///
/// let provider = create_provider(Route53Credentials {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "...".to_string(),
///     region: None,
/// });
/// ```
#[must_use]
pub fn create_provider(credentials: Route53Credentials) -> Arc<dyn ZoneProvider> {
    Arc::new(Route53Provider::new(credentials))
}
