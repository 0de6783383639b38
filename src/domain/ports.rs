use crate::domain::model::{PartialVesselRecord, RawSourcePayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One upstream: how to retrieve its payload and how to read it.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<RawSourcePayload>;

    fn parse(&self, raw: RawSourcePayload) -> PartialVesselRecord;

    /// Never fails: transport problems come back as an error-flagged record.
    async fn fetch_and_parse(&self) -> PartialVesselRecord {
        let mut record = match self.fetch().await {
            Ok(raw) => self.parse(raw),
            Err(e) => {
                tracing::warn!("{} unavailable: {}", self.name(), e);
                PartialVesselRecord::failure(self.name(), e.to_string())
            }
        };
        record.source = Some(self.name().to_string());
        record
    }
}
