//! Test helpers
//!
//! A scripted in-memory [`ZoneProvider`] so every resolution path can be
//! driven without a network.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use zonewright_provider::{
    ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, ProviderError, RecordSetPage,
    RecordSetRequest, Result as ProviderResult, ZoneProvider,
};

/// Scripted provider: serves a fixed zone set and a queue of record-set
/// pages, and records every request it receives.
pub struct MockZoneProvider {
    zones: Vec<HostedZone>,
    fail_zone_listing: Option<ProviderError>,
    pages: Mutex<VecDeque<ProviderResult<RecordSetPage>>>,
    change_error: Option<ProviderError>,
    /// Number of `list_hosted_zones` calls observed.
    pub zone_list_calls: AtomicUsize,
    /// Every record-set request observed, in order.
    pub record_requests: Mutex<Vec<RecordSetRequest>>,
    /// Every change-batch submission observed, as `(zone_id, batch)`.
    pub changes: Mutex<Vec<(String, ChangeBatch)>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            fail_zone_listing: None,
            pages: Mutex::new(VecDeque::new()),
            change_error: None,
            zone_list_calls: AtomicUsize::new(0),
            record_requests: Mutex::new(Vec::new()),
            changes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_zones(mut self, zones: Vec<HostedZone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_zone_listing_error(mut self, error: ProviderError) -> Self {
        self.fail_zone_listing = Some(error);
        self
    }

    /// Queues one record-set page; pages are served in queue order, one
    /// per `list_record_sets` call.
    pub fn with_page(self, page: RecordSetPage) -> Self {
        self.pages
            .lock()
            .expect("page queue poisoned")
            .push_back(Ok(page));
        self
    }

    /// Queues a page-request failure.
    pub fn with_page_error(self, error: ProviderError) -> Self {
        self.pages
            .lock()
            .expect("page queue poisoned")
            .push_back(Err(error));
        self
    }

    pub fn with_change_error(mut self, error: ProviderError) -> Self {
        self.change_error = Some(error);
        self
    }

    pub fn zone_list_call_count(&self) -> usize {
        self.zone_list_calls.load(Ordering::SeqCst)
    }
}

pub fn zone(id: &str, name: &str) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones(&self) -> ProviderResult<Vec<HostedZone>> {
        self.zone_list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_zone_listing {
            Some(error) => Err(error.clone()),
            None => Ok(self.zones.clone()),
        }
    }

    async fn list_record_sets(&self, request: &RecordSetRequest) -> ProviderResult<RecordSetPage> {
        self.record_requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());
        self.pages
            .lock()
            .expect("page queue poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(RecordSetPage::default()))
    }

    async fn change_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> ProviderResult<ChangeInfo> {
        self.changes
            .lock()
            .expect("change log poisoned")
            .push((hosted_zone_id.to_string(), batch.clone()));
        match &self.change_error {
            Some(error) => Err(error.clone()),
            None => Ok(ChangeInfo {
                id: "/change/C-MOCK".to_string(),
                status: ChangeStatus::Pending,
                submitted_at: chrono::DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                    .expect("fixed timestamp parses")
                    .with_timezone(&chrono::Utc),
            }),
        }
    }
}
