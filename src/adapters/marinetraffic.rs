use crate::adapters::cruisemapper::unexpected_payload;
use crate::adapters::http::HttpFetcher;
use crate::domain::model::{PartialVesselRecord, RawSourcePayload};
use crate::domain::ports::SourceAdapter;
use crate::extract::marinetraffic::{self, SOURCE_NAME};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct MarineTrafficAdapter {
    fetcher: HttpFetcher,
    base_url: String,
    imo: String,
    api_key: String,
}

impl MarineTrafficAdapter {
    pub fn new(fetcher: HttpFetcher, base_url: &str, imo: &str, api_key: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            imo: imo.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/api/exportvessel/v:8/{}/protocol:jsono/imo:{}",
            self.base_url, self.api_key, self.imo
        )
    }
}

#[async_trait]
impl SourceAdapter for MarineTrafficAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<RawSourcePayload> {
        let json = self.fetcher.get_json(SOURCE_NAME, &self.url(), None).await?;
        Ok(RawSourcePayload::Json(json))
    }

    fn parse(&self, raw: RawSourcePayload) -> PartialVesselRecord {
        match raw {
            RawSourcePayload::Json(json) => marinetraffic::extract(&json),
            RawSourcePayload::Html(_) => unexpected_payload(SOURCE_NAME, "HTML"),
        }
    }
}
