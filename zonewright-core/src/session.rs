//! Resolution session
//!
//! A [`Session`] is the caller-scoped context for one logical operation:
//! it holds the injected provider handle and at most one cached hosted
//! zone. Create one per command invocation and discard it when the
//! operation completes; sessions are never shared across operations.

use std::sync::Arc;

use zonewright_provider::{HostedZone, ZoneProvider};

use crate::error::{CoreError, CoreResult};
use crate::names::{names_match, normalize, zone_owns_host};

/// Caller-scoped resolution context.
///
/// The cached zone is a performance hint, populated lazily on the first
/// successful resolution and always re-validated against the current
/// predicate before reuse. Repeated operations within one session avoid
/// re-listing every hosted zone.
pub struct Session {
    provider: Arc<dyn ZoneProvider>,
    cached_zone: Option<HostedZone>,
}

impl Session {
    /// Creates a session over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self {
            provider,
            cached_zone: None,
        }
    }

    /// The provider this session resolves against.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ZoneProvider> {
        &self.provider
    }

    /// The zone cached by a previous resolution, if any.
    #[must_use]
    pub fn cached_zone(&self) -> Option<&HostedZone> {
        self.cached_zone.as_ref()
    }

    /// Finds the first hosted zone satisfying `predicate`, in provider
    /// order.
    ///
    /// A cached zone satisfying the predicate is returned without a
    /// provider call. On a successful listing lookup the found zone
    /// replaces any previously cached one.
    ///
    /// # Errors
    ///
    /// [`CoreError::ZoneNotFound`] when no zone satisfies the predicate
    /// after a full listing; [`CoreError::ZoneLookupFailed`] when the
    /// listing itself fails.
    pub async fn zone_where<P>(&mut self, predicate: P) -> CoreResult<HostedZone>
    where
        P: Fn(&HostedZone) -> bool,
    {
        if let Some(zone) = self.cache_hit(&predicate) {
            return Ok(zone);
        }
        let zones = self.list_zones().await?;
        match zones.into_iter().find(|zone| predicate(zone)) {
            Some(zone) => Ok(self.remember(zone)),
            None => Err(CoreError::ZoneNotFound(
                "no hosted zone satisfied the predicate".to_string(),
            )),
        }
    }

    /// Finds the hosted zone with exactly the given name (normalized).
    ///
    /// # Errors
    ///
    /// [`CoreError::ZoneNotFound`] with the normalized name when no zone
    /// matches; [`CoreError::ZoneLookupFailed`] on listing failure.
    pub async fn zone_named(&mut self, name: &str) -> CoreResult<HostedZone> {
        let wanted = normalize(name);
        let matches = |zone: &HostedZone| names_match(&zone.name, &wanted);

        if let Some(zone) = self.cache_hit(matches) {
            return Ok(zone);
        }
        let zones = self.list_zones().await?;
        match zones.into_iter().find(matches) {
            Some(zone) => Ok(self.remember(zone)),
            None => {
                log::warn!("no hosted zone named {wanted}");
                Err(CoreError::ZoneNotFound(wanted))
            }
        }
    }

    /// Finds the hosted zone owning `host`, i.e. the zone whose name is
    /// an ancestor domain of the host.
    ///
    /// When several zones own the host (`example.com.` and
    /// `sub.example.com.` both exist), the longest matching suffix wins,
    /// independent of provider listing order. A cached zone that owns the
    /// host short-circuits the lookup without re-listing.
    ///
    /// # Errors
    ///
    /// [`CoreError::ZoneNotFound`] with the normalized host when no zone
    /// owns it; [`CoreError::ZoneLookupFailed`] on listing failure.
    pub async fn zone_for_host(&mut self, host: &str) -> CoreResult<HostedZone> {
        let host = normalize(host);
        let owns = |zone: &HostedZone| zone_owns_host(&zone.name, &host);

        if let Some(zone) = self.cache_hit(owns) {
            return Ok(zone);
        }
        let zones = self.list_zones().await?;
        let best = zones
            .into_iter()
            .filter(owns)
            .max_by_key(|zone| normalize(&zone.name).len());
        match best {
            Some(zone) => Ok(self.remember(zone)),
            None => {
                log::warn!("no hosted zone owns {host}");
                Err(CoreError::ZoneNotFound(host))
            }
        }
    }

    fn cache_hit<P>(&self, predicate: P) -> Option<HostedZone>
    where
        P: Fn(&HostedZone) -> bool,
    {
        let zone = self.cached_zone.as_ref().filter(|zone| predicate(zone))?;
        log::debug!("cached zone {} satisfies lookup, skipping listing", zone.name);
        Some(zone.clone())
    }

    async fn list_zones(&self) -> CoreResult<Vec<HostedZone>> {
        self.provider.list_hosted_zones().await.map_err(|e| {
            log::error!("[{}] hosted zone listing failed: {e}", self.provider.id());
            CoreError::ZoneLookupFailed(e.to_string())
        })
    }

    fn remember(&mut self, zone: HostedZone) -> HostedZone {
        self.cached_zone = Some(zone.clone());
        zone
    }
}
