//! Provider implementations.

pub(crate) mod common;

mod route53;

pub use route53::Route53Provider;
