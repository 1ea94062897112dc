//! Route 53 XML request/response types
//!
//! The API speaks XML; these types mirror the wire shapes and convert to
//! and from the crate's provider-neutral model.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::types::{
    AliasTarget, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, RecordSetPage, RecordType,
    ResourceRecord, ResourceRecordSet,
};

/// Namespace attached to request documents.
pub(crate) const XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

// ============ ListHostedZones ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ListHostedZonesResponse {
    #[serde(default)]
    pub hosted_zones: XmlHostedZones,
    pub is_truncated: bool,
    pub next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct XmlHostedZones {
    #[serde(rename = "HostedZone", default)]
    pub entries: Vec<XmlHostedZone>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlHostedZone {
    pub id: String,
    pub name: String,
}

impl From<XmlHostedZone> for HostedZone {
    fn from(zone: XmlHostedZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
        }
    }
}

// ============ ListResourceRecordSets ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ListResourceRecordSetsResponse {
    #[serde(default)]
    pub resource_record_sets: XmlRecordSets,
    pub is_truncated: bool,
    pub next_record_name: Option<String>,
    pub next_record_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct XmlRecordSets {
    #[serde(rename = "ResourceRecordSet", default)]
    pub entries: Vec<XmlRecordSet>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlRecordSet {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<XmlResourceRecords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<XmlAliasTarget>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct XmlResourceRecords {
    #[serde(rename = "ResourceRecord", default)]
    pub entries: Vec<XmlResourceRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlResourceRecord {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlAliasTarget {
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    pub evaluate_target_health: bool,
}

impl XmlRecordSet {
    /// Converts a wire record set to the provider-neutral model.
    ///
    /// The record-type vocabulary is closed; a zone containing a type
    /// outside it is surfaced as a parse failure rather than silently
    /// coerced.
    pub(crate) fn into_record_set(self, provider: &str) -> Result<ResourceRecordSet> {
        let record_type = parse_record_type(&self.record_type, provider)?;
        Ok(ResourceRecordSet {
            name: self.name,
            record_type,
            ttl: self.ttl,
            resource_records: self
                .resource_records
                .map(|records| {
                    records
                        .entries
                        .into_iter()
                        .map(|r| ResourceRecord { value: r.value })
                        .collect()
                })
                .unwrap_or_default(),
            alias_target: self.alias_target.map(|alias| AliasTarget {
                hosted_zone_id: alias.hosted_zone_id,
                dns_name: alias.dns_name,
                evaluate_target_health: alias.evaluate_target_health,
            }),
        })
    }
}

impl From<&ResourceRecordSet> for XmlRecordSet {
    fn from(rrs: &ResourceRecordSet) -> Self {
        Self {
            name: rrs.name.clone(),
            record_type: rrs.record_type.as_str().to_string(),
            ttl: rrs.ttl,
            resource_records: if rrs.resource_records.is_empty() {
                None
            } else {
                Some(XmlResourceRecords {
                    entries: rrs
                        .resource_records
                        .iter()
                        .map(|r| XmlResourceRecord {
                            value: r.value.clone(),
                        })
                        .collect(),
                })
            },
            alias_target: rrs.alias_target.as_ref().map(|alias| XmlAliasTarget {
                hosted_zone_id: alias.hosted_zone_id.clone(),
                dns_name: alias.dns_name.clone(),
                evaluate_target_health: alias.evaluate_target_health,
            }),
        }
    }
}

impl ListResourceRecordSetsResponse {
    /// Converts a wire page to the provider-neutral model.
    pub(crate) fn into_page(self, provider: &str) -> Result<RecordSetPage> {
        let record_sets = self
            .resource_record_sets
            .entries
            .into_iter()
            .map(|entry| entry.into_record_set(provider))
            .collect::<Result<Vec<_>>>()?;

        let next_record_type = self
            .next_record_type
            .map(|raw| parse_record_type(&raw, provider))
            .transpose()?;

        Ok(RecordSetPage {
            record_sets,
            is_truncated: self.is_truncated,
            next_record_name: self.next_record_name,
            next_record_type,
        })
    }
}

// ============ ChangeResourceRecordSets ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    pub change_batch: XmlChangeBatch,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlChangeBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub changes: XmlChanges,
}

#[derive(Debug, Serialize)]
pub(crate) struct XmlChanges {
    #[serde(rename = "Change")]
    pub entries: Vec<XmlChange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlChange {
    pub action: String,
    pub resource_record_set: XmlRecordSet,
}

impl ChangeResourceRecordSetsRequest {
    pub(crate) fn from_batch(batch: &ChangeBatch) -> Self {
        Self {
            xmlns: XMLNS,
            change_batch: XmlChangeBatch {
                comment: batch.comment.clone(),
                changes: XmlChanges {
                    entries: batch
                        .changes
                        .iter()
                        .map(|change| XmlChange {
                            action: change.action.to_string(),
                            resource_record_set: XmlRecordSet::from(&change.resource_record_set),
                        })
                        .collect(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChangeResourceRecordSetsResponse {
    pub change_info: XmlChangeInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct XmlChangeInfo {
    pub id: String,
    pub status: String,
    pub submitted_at: String,
}

impl XmlChangeInfo {
    pub(crate) fn into_change_info(self, provider: &str) -> Result<ChangeInfo> {
        let status = match self.status.as_str() {
            "PENDING" => ChangeStatus::Pending,
            "INSYNC" => ChangeStatus::Insync,
            other => {
                return Err(ProviderError::ParseError {
                    provider: provider.to_string(),
                    detail: format!("unrecognized change status: {other}"),
                });
            }
        };
        let submitted_at = chrono::DateTime::parse_from_rfc3339(&self.submitted_at)
            .map_err(|e| ProviderError::ParseError {
                provider: provider.to_string(),
                detail: format!("bad SubmittedAt timestamp '{}': {e}", self.submitted_at),
            })?
            .with_timezone(&chrono::Utc);

        Ok(ChangeInfo {
            id: self.id,
            status,
            submitted_at,
        })
    }
}

// ============ Error documents ============

/// Standard Route 53 error envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiError {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Change-batch rejections arrive under their own root element with one
/// message per offending change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InvalidChangeBatch {
    #[serde(default)]
    pub messages: XmlMessages,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct XmlMessages {
    #[serde(rename = "Message", default)]
    pub entries: Vec<String>,
}

fn parse_record_type(raw: &str, provider: &str) -> Result<RecordType> {
    raw.parse().map_err(|_| ProviderError::ParseError {
        provider: provider.to_string(),
        detail: format!("unsupported record type: {raw}"),
    })
}
