//! AWS Route 53 provider
//!
//! Drives the Route 53 REST XML API directly with SigV4 request signing.
//! Required IAM actions: `route53:ListHostedZones`,
//! `route53:ListResourceRecordSets`, `route53:ChangeResourceRecordSets`.

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 XML request/response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::types::Route53Credentials;

/// Route 53 API host. The service is global; every request goes here.
pub(crate) const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Route 53 API version, the leading path segment of every request.
pub(crate) const API_VERSION: &str = "2013-04-01";
/// Signing region for the global endpoint.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";
/// Service name used in the SigV4 credential scope.
pub(crate) const SERVICE: &str = "route53";

/// AWS Route 53 provider implementation.
///
/// Authenticates via AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use zonewright_provider::{Route53Credentials, Route53Provider};
///
/// let provider = Route53Provider::new(Route53Credentials {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "...".to_string(),
///     region: None,
/// });
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) region: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`] with configurable retry behavior.
pub struct Route53ProviderBuilder {
    credentials: Route53Credentials,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(credentials: Route53Credentials) -> Self {
        Self {
            credentials,
            max_retries: 2,
        }
    }

    /// Set the maximum number of automatic retries for transient errors
    /// (default: 2).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`Route53Provider`] instance.
    #[must_use]
    pub fn build(self) -> Route53Provider {
        Route53Provider {
            client: create_http_client(),
            access_key_id: self.credentials.access_key_id,
            secret_access_key: self.credentials.secret_access_key,
            region: self
                .credentials
                .region
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            max_retries: self.max_retries,
        }
    }
}

impl Route53Provider {
    /// Creates a new Route 53 provider with default settings (2 retries).
    #[must_use]
    pub fn new(credentials: Route53Credentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    #[must_use]
    pub fn builder(credentials: Route53Credentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}

/// Strips the `/hostedzone/` prefix a zone listing puts on zone ids, for
/// use in request paths.
pub(crate) fn bare_zone_id(id: &str) -> &str {
    id.trim_start_matches('/').trim_start_matches("hostedzone/")
}
