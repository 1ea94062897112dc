//! DNS name normalization and matching
//!
//! Pure functions shared by zone resolution and record point-lookup.

use zonewright_provider::RecordType;

/// Canonicalizes a DNS name to fully-qualified form by appending the
/// trailing separator when absent. Idempotent and total.
#[must_use]
pub fn normalize(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Whether two names are equal after normalization.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether two record types match. An undefined type is a wildcard and
/// matches anything.
#[must_use]
pub fn types_match(a: Option<RecordType>, b: Option<RecordType>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// Whether the zone named `zone_name` owns `host`, i.e. the zone is an
/// ancestor domain of the host.
#[must_use]
pub fn zone_owns_host(zone_name: &str, host: &str) -> bool {
    let zone = normalize(zone_name);
    normalize(host).ends_with(&format!(".{zone}"))
}

/// Whether the record set following a point-lookup match also satisfies
/// the query, making the selection ambiguous.
///
/// A follower with either cursor field absent never creates ambiguity:
/// an absent cursor means "no more records", not "unknown boundary".
#[must_use]
pub fn is_ambiguous_follower(
    query_name: &str,
    query_type: Option<RecordType>,
    next_name: Option<&str>,
    next_type: Option<RecordType>,
) -> bool {
    match (next_name, next_type) {
        (Some(next_name), Some(next_type)) => {
            names_match(query_name, next_name) && types_match(query_type, Some(next_type))
        }
        _ => false,
    }
}
