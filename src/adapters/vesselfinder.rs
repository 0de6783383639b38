use crate::adapters::cruisemapper::unexpected_payload;
use crate::adapters::http::HttpFetcher;
use crate::domain::model::{PartialVesselRecord, RawSourcePayload};
use crate::domain::ports::SourceAdapter;
use crate::extract::{vesselfinder_api, vesselfinder_html};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Authenticated AIS endpoint, JSON.
pub struct VesselFinderApiAdapter {
    fetcher: HttpFetcher,
    base_url: String,
    imo: String,
    api_key: String,
}

impl VesselFinderApiAdapter {
    pub fn new(fetcher: HttpFetcher, base_url: &str, imo: &str, api_key: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            imo: imo.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/api/pro/ais/{}", self.base_url, self.imo)
    }
}

#[async_trait]
impl SourceAdapter for VesselFinderApiAdapter {
    fn name(&self) -> &str {
        vesselfinder_api::SOURCE_NAME
    }

    async fn fetch(&self) -> Result<RawSourcePayload> {
        let json = self
            .fetcher
            .get_json(self.name(), &self.url(), Some(&self.api_key))
            .await?;
        Ok(RawSourcePayload::Json(json))
    }

    fn parse(&self, raw: RawSourcePayload) -> PartialVesselRecord {
        match raw {
            RawSourcePayload::Json(json) => vesselfinder_api::extract(&json),
            RawSourcePayload::Html(_) => unexpected_payload(self.name(), "HTML"),
        }
    }
}

/// Public vessel details page.
pub struct VesselFinderHtmlAdapter {
    fetcher: HttpFetcher,
    base_url: String,
    imo: String,
}

impl VesselFinderHtmlAdapter {
    pub fn new(fetcher: HttpFetcher, base_url: &str, imo: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            imo: imo.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/vessels/details/{}", self.base_url, self.imo)
    }
}

#[async_trait]
impl SourceAdapter for VesselFinderHtmlAdapter {
    fn name(&self) -> &str {
        vesselfinder_html::SOURCE_NAME
    }

    async fn fetch(&self) -> Result<RawSourcePayload> {
        let html = self.fetcher.get_text(self.name(), &self.url(), None).await?;
        Ok(RawSourcePayload::Html(html))
    }

    fn parse(&self, raw: RawSourcePayload) -> PartialVesselRecord {
        match raw {
            RawSourcePayload::Html(html) => vesselfinder_html::extract(&html),
            RawSourcePayload::Json(_) => unexpected_payload(self.name(), "JSON"),
        }
    }
}
