//! Record mutation
//!
//! The replace protocol: one change batch deleting the old record set and
//! creating the new one. Identity (`name`, `type`) is never edited in
//! place; the batch swaps identity and payload atomically on the provider
//! side.

use zonewright_provider::{
    Change, ChangeBatch, ChangeInfo, HostedZone, ResourceRecordSet, ZoneProvider,
};

use crate::error::{CoreError, CoreResult};
use crate::session::Session;

impl Session {
    /// Replaces `old` with `new` in `zone` via a single change batch:
    /// `DELETE old` followed by `CREATE new`, with an optional audit
    /// comment.
    ///
    /// At most one batch is issued per call; the provider applies both
    /// changes or neither, and no local rollback is attempted beyond
    /// that.
    ///
    /// # Errors
    ///
    /// [`CoreError::UpdateRejected`] with the provider's message when the
    /// batch is refused (e.g. `old` no longer matches current state) or
    /// the submission fails.
    pub async fn update_record(
        &self,
        zone: &HostedZone,
        old: ResourceRecordSet,
        new: ResourceRecordSet,
        comment: Option<String>,
    ) -> CoreResult<ChangeInfo> {
        log::debug!(
            "replacing {} {} with {} {} in zone {}",
            old.name,
            old.record_type,
            new.name,
            new.record_type,
            zone.name
        );

        let batch = ChangeBatch {
            comment,
            changes: vec![Change::delete(old), Change::create(new)],
        };

        self.provider()
            .change_record_sets(&zone.id, &batch)
            .await
            .map_err(|e| {
                if e.is_expected() {
                    log::warn!("[{}] update rejected: {e}", self.provider().id());
                } else {
                    log::error!("[{}] update failed: {e}", self.provider().id());
                }
                CoreError::UpdateRejected(e.to_string())
            })
    }
}
