//! Route 53 `ZoneProvider` trait implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::ZoneProvider;
use crate::types::{ChangeBatch, ChangeInfo, HostedZone, RecordSetPage, RecordSetRequest};

use super::types::{
    ChangeResourceRecordSetsRequest, ChangeResourceRecordSetsResponse, ListHostedZonesResponse,
    ListResourceRecordSetsResponse,
};
use super::{API_VERSION, Route53Provider, bare_zone_id};

#[async_trait]
impl ZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        self.provider_name()
    }

    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        let path = format!("/{API_VERSION}/hostedzone");
        let mut zones = Vec::new();
        let mut marker: Option<String> = None;

        // The listing itself paginates by marker; follow it here so
        // callers always see the complete zone set.
        loop {
            let query = marker
                .as_ref()
                .map(|m| format!("marker={}", urlencoding::encode(m)))
                .unwrap_or_default();

            let response: ListHostedZonesResponse = self.get_xml(&path, &query, None).await?;
            zones.extend(response.hosted_zones.entries.into_iter().map(HostedZone::from));

            if !response.is_truncated {
                break;
            }
            match response.next_marker {
                Some(next) => {
                    log::debug!(
                        "[{}] zone listing truncated, continuing at marker {next}",
                        self.provider_name()
                    );
                    marker = Some(next);
                }
                None => {
                    log::warn!(
                        "[{}] truncated zone listing without NextMarker, stopping",
                        self.provider_name()
                    );
                    break;
                }
            }
        }

        log::debug!(
            "[{}] listed {} hosted zones",
            self.provider_name(),
            zones.len()
        );
        Ok(zones)
    }

    async fn list_record_sets(&self, request: &RecordSetRequest) -> Result<RecordSetPage> {
        let zone_id = bare_zone_id(&request.hosted_zone_id);
        let path = format!("/{API_VERSION}/hostedzone/{zone_id}/rrset");

        let mut params = Vec::new();
        if let Some(max) = request.max_items {
            params.push(format!("maxitems={max}"));
        }
        if let Some(ref name) = request.start_record_name {
            params.push(format!("name={}", urlencoding::encode(name)));
        }
        if let Some(record_type) = request.start_record_type {
            params.push(format!("type={record_type}"));
        }
        let query = params.join("&");

        let response: ListResourceRecordSetsResponse =
            self.get_xml(&path, &query, Some(zone_id)).await?;
        response.into_page(self.provider_name())
    }

    async fn change_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeInfo> {
        let zone_id = bare_zone_id(hosted_zone_id);
        let path = format!("/{API_VERSION}/hostedzone/{zone_id}/rrset");

        let document = ChangeResourceRecordSetsRequest::from_batch(batch);
        let body = quick_xml::se::to_string(&document).map_err(|e| {
            ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            }
        })?;
        let payload = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{body}");

        log::debug!(
            "[{}] submitting change batch of {} change(s) to zone {zone_id}",
            self.provider_name(),
            batch.changes.len()
        );

        let response: ChangeResourceRecordSetsResponse =
            self.post_xml(&path, payload, Some(zone_id)).await?;
        response.change_info.into_change_info(self.provider_name())
    }
}
