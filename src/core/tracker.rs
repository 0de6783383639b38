use crate::adapters::{build_adapters, HttpFetcher};
use crate::config::toml_config::TrackerConfig;
use crate::core::normalizer::normalize;
use crate::core::orchestrator::{FallbackOrchestrator, Resolution};
use crate::domain::model::{CanonicalVesselStatus, VesselIdentity};
use crate::domain::ports::SourceAdapter;
use crate::utils::error::Result;

/// Entry point: resolves the tracked vessel's current status from whichever source answers first.
pub struct VesselTracker {
    identity: VesselIdentity,
    orchestrator: FallbackOrchestrator,
}

impl VesselTracker {
    pub fn new(identity: VesselIdentity, adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self {
            identity,
            orchestrator: FallbackOrchestrator::new(adapters),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout(), &config.http.user_agent)?;
        let adapters = build_adapters(config, &fetcher)?;
        Ok(Self::new(config.identity(), adapters))
    }

    pub fn identity(&self) -> &VesselIdentity {
        &self.identity
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.orchestrator.source_names()
    }

    /// Same walk as [`resolve_vessel_status`](Self::resolve_vessel_status), keeping the
    /// per-source attempt log.
    pub async fn resolve(&self) -> (CanonicalVesselStatus, Resolution) {
        tracing::info!(
            "Resolving status for {} (IMO {}) via {:?}",
            self.identity.name,
            self.identity.imo,
            self.source_names()
        );
        let resolution = self.orchestrator.resolve().await;
        let status = normalize(resolution.record.clone(), &self.identity);

        if status.ok {
            tracing::info!(
                "✅ {} status from {}",
                status.ship_name,
                status.source.as_deref().unwrap_or("unknown source")
            );
        } else {
            tracing::warn!(
                "❌ No source produced data after {} attempts",
                resolution.attempts.len()
            );
        }
        (status, resolution)
    }

    /// Never fails; an exhausted walk yields `ok == false` with identity fields still set.
    pub async fn resolve_vessel_status(&self) -> CanonicalVesselStatus {
        self.resolve().await.0
    }
}
