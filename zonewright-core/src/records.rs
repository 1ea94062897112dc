//! Record-set enumeration and point lookup

use zonewright_provider::{
    HostedZone, RecordSetPage, RecordSetRequest, RecordType, ResourceRecordSet, ZoneProvider,
};

use crate::error::{CoreError, CoreResult};
use crate::names::{is_ambiguous_follower, names_match, normalize, types_match};
use crate::session::Session;

/// Continuation position within a zone's record sets, as handed back by a
/// truncated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCursor {
    /// Name of the next record set in provider order.
    pub name: String,
    /// Type of the next record set, when the provider declares one.
    pub record_type: Option<RecordType>,
}

/// An underspecified record selector supplied by a caller.
///
/// `record_type` is the caller's raw input; `None` means "match any type
/// at this name". A defined but unrecognized type fails resolution with
/// [`CoreError::InvalidType`] before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    /// Record name to look up; normalized during resolution.
    pub name: String,
    /// Raw record type, if the caller specified one.
    pub record_type: Option<String>,
}

impl RecordQuery {
    /// A wildcard query matching any record type at `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: None,
        }
    }

    /// A query restricted to a specific record type.
    #[must_use]
    pub fn with_type(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: Some(record_type.into()),
        }
    }

    /// Validates the raw type against the supported vocabulary.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidType`] when a type was given but is not
    /// recognized. A bad type must never silently degrade to a wildcard.
    pub fn resolved_type(&self) -> CoreResult<Option<RecordType>> {
        self.record_type
            .as_deref()
            .map(|raw| {
                raw.parse::<RecordType>()
                    .map_err(|_| CoreError::InvalidType(raw.to_string()))
            })
            .transpose()
    }
}

impl Session {
    /// Enumerates a zone's record sets, following provider-side
    /// truncation until exhausted.
    ///
    /// `visit` is invoked for every record set passing `filter` (all of
    /// them when `filter` is `None`), in provider order, starting at
    /// `start` when given. Returns the number of record sets delivered;
    /// returning `Ok` is the single completion signal.
    ///
    /// This is a live traversal of provider state, not a snapshot:
    /// concurrent zone mutation during enumeration may skip or duplicate
    /// records.
    ///
    /// # Errors
    ///
    /// [`CoreError::PaginationFailed`] when any page request fails. The
    /// enumeration aborts; record sets already delivered to `visit` are
    /// not retracted.
    pub async fn for_each_record_set<F>(
        &self,
        zone: &HostedZone,
        filter: Option<&dyn Fn(&ResourceRecordSet) -> bool>,
        start: Option<RecordCursor>,
        mut visit: F,
    ) -> CoreResult<usize>
    where
        F: FnMut(ResourceRecordSet),
    {
        let mut cursor = start;
        let mut delivered = 0_usize;

        loop {
            let mut request = RecordSetRequest::new(zone.id.clone());
            if let Some(position) = cursor.take() {
                request = request.starting_at(position.name, position.record_type);
            }

            let page = self.fetch_page(&request).await?;
            let RecordSetPage {
                record_sets,
                is_truncated,
                next_record_name,
                next_record_type,
            } = page;

            for record_set in record_sets {
                if filter.is_none_or(|keep| keep(&record_set)) {
                    delivered += 1;
                    visit(record_set);
                }
            }

            if !is_truncated {
                break;
            }
            match next_record_name {
                Some(name) => {
                    log::debug!("record listing truncated, continuing at {name}");
                    cursor = Some(RecordCursor {
                        name,
                        record_type: next_record_type,
                    });
                }
                None => {
                    log::warn!("truncated record listing without a continuation cursor, stopping");
                    break;
                }
            }
        }

        Ok(delivered)
    }

    /// Collects a zone's record sets into a `Vec`, following truncation.
    ///
    /// # Errors
    ///
    /// [`CoreError::PaginationFailed`] when any page request fails.
    pub async fn collect_record_sets(
        &self,
        zone: &HostedZone,
        filter: Option<&dyn Fn(&ResourceRecordSet) -> bool>,
    ) -> CoreResult<Vec<ResourceRecordSet>> {
        let mut record_sets = Vec::new();
        self.for_each_record_set(zone, filter, None, |record_set| {
            record_sets.push(record_set);
        })
        .await?;
        Ok(record_sets)
    }

    /// Resolves a query to the unique matching record set in its owning
    /// zone.
    ///
    /// The check order is load-bearing: the type is validated before any
    /// network call, and a clean miss is reported as
    /// [`RecordNotFound`](CoreError::RecordNotFound) before type or
    /// ambiguity checks can obscure it.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidType`] — the query names an unrecognized type.
    /// - [`CoreError::ZoneNotFound`] / [`CoreError::ZoneLookupFailed`] —
    ///   no owning zone.
    /// - [`CoreError::RecordNotFound`] — nothing at that name.
    /// - [`CoreError::TypeMismatch`] — the name exists, the type doesn't.
    /// - [`CoreError::AmbiguousSelection`] — a second record set at the
    ///   same name also satisfies the query; refusing to pick one.
    /// - [`CoreError::PaginationFailed`] — the point lookup's page request
    ///   failed.
    pub async fn resolve_record(&mut self, query: &RecordQuery) -> CoreResult<ResourceRecordSet> {
        let record_type = query.resolved_type()?;
        let name = normalize(&query.name);

        let zone = self.zone_for_host(&name).await?;
        log::debug!(
            "resolving {name} (type {}) in zone {}",
            record_type.map_or("any", RecordType::as_str),
            zone.name
        );

        let request = RecordSetRequest::new(zone.id.clone())
            .starting_at(name.clone(), record_type)
            .max_items(1);
        let page = self.fetch_page(&request).await?;
        let RecordSetPage {
            record_sets,
            next_record_name,
            next_record_type,
            ..
        } = page;

        let record_set = match record_sets.into_iter().next() {
            Some(record_set) if names_match(&record_set.name, &name) => record_set,
            _ => {
                log::warn!("no record set at {name}");
                return Err(CoreError::RecordNotFound(name));
            }
        };

        if !types_match(record_type, Some(record_set.record_type)) {
            return Err(CoreError::TypeMismatch {
                name,
                requested: record_type.map_or_else(|| "ANY".to_string(), |t| t.to_string()),
                found: record_set.record_type.to_string(),
            });
        }

        if is_ambiguous_follower(
            &name,
            record_type,
            next_record_name.as_deref(),
            next_record_type,
        ) {
            log::warn!("query for {name} matches more than one record set");
            return Err(CoreError::AmbiguousSelection(name));
        }

        Ok(record_set)
    }

    async fn fetch_page(&self, request: &RecordSetRequest) -> CoreResult<RecordSetPage> {
        self.provider()
            .list_record_sets(request)
            .await
            .map_err(|e| {
                log::error!("[{}] record page request failed: {e}", self.provider().id());
                CoreError::PaginationFailed(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockZoneProvider, zone};
    use zonewright_provider::{ProviderError, ResourceRecord};

    fn record(name: &str, record_type: RecordType) -> ResourceRecordSet {
        ResourceRecordSet {
            name: name.to_string(),
            record_type,
            ttl: Some(300),
            resource_records: vec![ResourceRecord {
                value: "192.0.2.1".to_string(),
            }],
            alias_target: None,
        }
    }

    fn page(records: Vec<ResourceRecordSet>, next: Option<(&str, RecordType)>) -> RecordSetPage {
        RecordSetPage {
            record_sets: records,
            is_truncated: next.is_some(),
            next_record_name: next.map(|(name, _)| name.to_string()),
            next_record_type: next.map(|(_, record_type)| record_type),
        }
    }

    fn session_with(provider: &Arc<MockZoneProvider>) -> Session {
        Session::new(Arc::clone(provider) as Arc<dyn zonewright_provider::ZoneProvider>)
    }

    // ============ Point resolution ============

    #[tokio::test]
    async fn resolve_typed_query() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(vec![record("a.example.com.", RecordType::A)], None)),
        );
        let mut session = session_with(&provider);

        let found = session
            .resolve_record(&RecordQuery::with_type("a.example.com", "a"))
            .await
            .unwrap();
        assert_eq!(found.name, "a.example.com.");
        assert_eq!(found.record_type, RecordType::A);

        // The lookup must be bounded and positioned at the query
        let requests = provider.record_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_items, Some(1));
        assert_eq!(requests[0].start_record_name.as_deref(), Some("a.example.com."));
        assert_eq!(requests[0].start_record_type, Some(RecordType::A));
    }

    #[tokio::test]
    async fn invalid_type_fails_before_any_provider_call() {
        let provider = Arc::new(
            MockZoneProvider::new().with_zones(vec![zone("/hostedzone/Z1", "example.com.")]),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::with_type("a.example.com", "WKS"))
            .await
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::InvalidType(raw) if raw == "WKS"),
            "unexpected error: {err:?}"
        );
        assert_eq!(provider.zone_list_call_count(), 0);
        assert!(provider.record_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_page_is_record_not_found() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(vec![], None)),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::with_type("a.example.com.", "A"))
            .await
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::RecordNotFound(name) if name == "a.example.com."),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn different_name_is_record_not_found() {
        // The bounded lookup returns the next record in collation order;
        // a name past the query means nothing exists at the query itself.
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(vec![record("b.example.com.", RecordType::A)], None)),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::with_type("a.example.com.", "A"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::RecordNotFound(_)));
    }

    #[tokio::test]
    async fn wrong_type_at_name_is_type_mismatch() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(vec![record("a.example.com.", RecordType::Cname)], None)),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::with_type("a.example.com.", "A"))
            .await
            .unwrap_err();
        assert!(
            matches!(
                &err,
                CoreError::TypeMismatch {
                    requested,
                    found,
                    ..
                } if requested == "A" && found == "CNAME"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn wildcard_with_matching_follower_is_ambiguous() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    vec![record("a.example.com.", RecordType::A)],
                    Some(("a.example.com.", RecordType::Cname)),
                )),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::new("a.example.com."))
            .await
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::AmbiguousSelection(name) if name == "a.example.com."),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn wildcard_with_unrelated_follower_resolves() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    vec![record("a.example.com.", RecordType::A)],
                    Some(("b.example.com.", RecordType::A)),
                )),
        );
        let mut session = session_with(&provider);

        let found = session
            .resolve_record(&RecordQuery::new("a.example.com."))
            .await
            .unwrap();
        assert_eq!(found.record_type, RecordType::A);
    }

    #[tokio::test]
    async fn typed_query_ignores_same_name_follower_of_other_type() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    vec![record("a.example.com.", RecordType::A)],
                    Some(("a.example.com.", RecordType::Txt)),
                )),
        );
        let mut session = session_with(&provider);

        let found = session
            .resolve_record(&RecordQuery::with_type("a.example.com.", "A"))
            .await
            .unwrap();
        assert_eq!(found.record_type, RecordType::A);
    }

    #[tokio::test]
    async fn point_lookup_page_failure_surfaces() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page_error(ProviderError::Timeout {
                    provider: "mock".into(),
                    detail: "30s elapsed".into(),
                }),
        );
        let mut session = session_with(&provider);

        let err = session
            .resolve_record(&RecordQuery::new("a.example.com."))
            .await
            .unwrap_err();
        assert!(
            matches!(&err, CoreError::PaginationFailed(msg) if msg.contains("30s elapsed")),
            "unexpected error: {err:?}"
        );
    }

    // ============ Enumeration ============

    #[tokio::test]
    async fn enumeration_follows_truncation_and_filters() {
        // Three pages (2, 2, 1); keep even-positioned records only
        let records = [
            record("r0.example.com.", RecordType::A),
            record("r1.example.com.", RecordType::A),
            record("r2.example.com.", RecordType::A),
            record("r3.example.com.", RecordType::A),
            record("r4.example.com.", RecordType::A),
        ];
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    records[0..2].to_vec(),
                    Some(("r2.example.com.", RecordType::A)),
                ))
                .with_page(page(
                    records[2..4].to_vec(),
                    Some(("r4.example.com.", RecordType::A)),
                ))
                .with_page(page(records[4..5].to_vec(), None)),
        );
        let session = session_with(&provider);
        let target = zone("/hostedzone/Z1", "example.com.");

        let mut seen = Vec::new();
        let keep = |record_set: &ResourceRecordSet| {
            record_set.name.as_bytes()[1].is_ascii_digit()
                && (record_set.name.as_bytes()[1] - b'0') % 2 == 0
        };
        let delivered = session
            .for_each_record_set(&target, Some(&keep), None, |record_set| {
                seen.push(record_set.name);
            })
            .await
            .unwrap();

        assert_eq!(delivered, 3);
        assert_eq!(
            seen,
            vec!["r0.example.com.", "r2.example.com.", "r4.example.com."]
        );

        // Continuation cursors must be threaded through verbatim
        let requests = provider.record_requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].start_record_name, None);
        assert_eq!(requests[1].start_record_name.as_deref(), Some("r2.example.com."));
        assert_eq!(requests[2].start_record_name.as_deref(), Some("r4.example.com."));
    }

    #[tokio::test]
    async fn enumeration_aborts_on_page_failure_keeping_deliveries() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    vec![record("r0.example.com.", RecordType::A)],
                    Some(("r1.example.com.", RecordType::A)),
                ))
                .with_page_error(ProviderError::NetworkError {
                    provider: "mock".into(),
                    detail: "reset by peer".into(),
                }),
        );
        let session = session_with(&provider);
        let target = zone("/hostedzone/Z1", "example.com.");

        let mut seen = Vec::new();
        let err = session
            .for_each_record_set(&target, None, None, |record_set| {
                seen.push(record_set.name);
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::PaginationFailed(_)));
        // Page one was already delivered and stays delivered
        assert_eq!(seen, vec!["r0.example.com."]);
    }

    #[tokio::test]
    async fn enumeration_can_start_at_a_cursor() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(vec![record("m.example.com.", RecordType::Mx)], None)),
        );
        let session = session_with(&provider);
        let target = zone("/hostedzone/Z1", "example.com.");

        let delivered = session
            .for_each_record_set(
                &target,
                None,
                Some(RecordCursor {
                    name: "m.example.com.".to_string(),
                    record_type: Some(RecordType::Mx),
                }),
                |_| {},
            )
            .await
            .unwrap();
        assert_eq!(delivered, 1);

        let requests = provider.record_requests.lock().unwrap();
        assert_eq!(requests[0].start_record_name.as_deref(), Some("m.example.com."));
        assert_eq!(requests[0].start_record_type, Some(RecordType::Mx));
    }

    #[tokio::test]
    async fn collect_gathers_all_pages() {
        let provider = Arc::new(
            MockZoneProvider::new()
                .with_zones(vec![zone("/hostedzone/Z1", "example.com.")])
                .with_page(page(
                    vec![record("a.example.com.", RecordType::A)],
                    Some(("b.example.com.", RecordType::Txt)),
                ))
                .with_page(page(vec![record("b.example.com.", RecordType::Txt)], None)),
        );
        let session = session_with(&provider);
        let target = zone("/hostedzone/Z1", "example.com.");

        let all = session.collect_record_sets(&target, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].record_type, RecordType::Txt);
    }

    // ============ RecordQuery ============

    #[test]
    fn query_type_is_case_insensitive() {
        let query = RecordQuery::with_type("a.example.com", "cname");
        assert_eq!(query.resolved_type().unwrap(), Some(RecordType::Cname));
    }

    #[test]
    fn query_without_type_is_wildcard() {
        assert_eq!(
            RecordQuery::new("a.example.com").resolved_type().unwrap(),
            None
        );
    }
}
