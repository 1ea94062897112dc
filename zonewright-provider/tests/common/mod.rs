//! Shared test helpers for live-API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use zonewright_provider::{
    HostedZone, Route53Credentials, ZoneProvider, create_provider,
};

/// Skip the current test when any of the named environment variables is
/// missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it, failing the test
/// otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test
/// otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Live-API test context: a provider built from the environment plus the
/// zone name designated for test records.
pub struct TestContext {
    pub provider: Arc<dyn ZoneProvider>,
    pub domain: String,
}

impl TestContext {
    /// Builds a context from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`
    /// and `TEST_DOMAIN`. Returns `None` when any is missing.
    pub fn route53() -> Option<Self> {
        let credentials = Route53Credentials::from_env().ok()?;
        let domain = std::env::var("TEST_DOMAIN").ok()?;
        Some(Self {
            provider: create_provider(credentials),
            domain,
        })
    }

    /// Finds the hosted zone whose name matches `TEST_DOMAIN`.
    pub async fn find_test_zone(&self) -> Option<HostedZone> {
        let zones = self.provider.list_hosted_zones().await.ok()?;
        let wanted = format!("{}.", self.domain.trim_end_matches('.'));
        zones.into_iter().find(|zone| zone.name == wanted)
    }
}

/// Generates a unique record name under the test domain.
pub fn generate_test_record_name(domain: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{}.", &uuid.to_string()[..8], domain.trim_end_matches('.'))
}
