use crate::adapters::http::HttpFetcher;
use crate::domain::model::{PartialVesselRecord, RawSourcePayload};
use crate::domain::ports::SourceAdapter;
use crate::extract::cruisemapper::{self, SOURCE_NAME};
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;

pub struct CruiseMapperAdapter {
    fetcher: HttpFetcher,
    base_url: String,
    imo: String,
}

impl CruiseMapperAdapter {
    pub fn new(fetcher: HttpFetcher, base_url: &str, imo: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            imo: imo.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/?imo={}", self.base_url, self.imo)
    }
}

#[async_trait]
impl SourceAdapter for CruiseMapperAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<RawSourcePayload> {
        let html = self.fetcher.get_text(SOURCE_NAME, &self.url(), None).await?;
        Ok(RawSourcePayload::Html(html))
    }

    fn parse(&self, raw: RawSourcePayload) -> PartialVesselRecord {
        match raw {
            RawSourcePayload::Html(html) => cruisemapper::extract(&html),
            RawSourcePayload::Json(_) => unexpected_payload(SOURCE_NAME, "JSON"),
        }
    }
}

pub(crate) fn unexpected_payload(source_name: &str, kind: &str) -> PartialVesselRecord {
    let err = TrackerError::Extraction {
        source_name: source_name.to_string(),
        message: format!("unexpected {} payload", kind),
    };
    PartialVesselRecord::failure(source_name, err.to_string())
}
