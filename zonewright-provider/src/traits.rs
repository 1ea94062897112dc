use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChangeBatch, ChangeInfo, HostedZone, RecordSetPage, RecordSetRequest};

/// Capability set a hosted-zone DNS provider must expose.
///
/// The resolution engine is parameterized by this trait; nothing in it
/// reaches for a process-wide client. Implementations are expected to be
/// cheap to share behind an `Arc`.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Lists every hosted zone visible to the credentials.
    ///
    /// Implementations follow any provider-side listing pagination
    /// internally; callers always see the complete set.
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>>;

    /// Fetches one page of a zone's record sets.
    ///
    /// Record sets are returned in provider collation order starting at
    /// the request's cursor. A truncated page carries the cursor of the
    /// following record set.
    async fn list_record_sets(&self, request: &RecordSetRequest) -> Result<RecordSetPage>;

    /// Submits a change batch against a zone.
    ///
    /// The batch is atomic on the provider side: all changes apply or
    /// none do.
    async fn change_record_sets(
        &self,
        hosted_zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeInfo>;
}
