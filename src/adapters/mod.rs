// Adapters layer: one SourceAdapter per upstream, all sharing the same HttpFetcher.

pub mod cruisemapper;
pub mod http;
pub mod marinetraffic;
pub mod vesselfinder;

use crate::config::toml_config::TrackerConfig;
use crate::domain::ports::SourceAdapter;
use crate::utils::error::{Result, TrackerError};
use std::fmt;
use std::str::FromStr;

pub use cruisemapper::CruiseMapperAdapter;
pub use http::HttpFetcher;
pub use marinetraffic::MarineTrafficAdapter;
pub use vesselfinder::{VesselFinderApiAdapter, VesselFinderHtmlAdapter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    CruiseMapper,
    VesselFinderApi,
    VesselFinderHtml,
    MarineTraffic,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::CruiseMapper,
        SourceKind::VesselFinderApi,
        SourceKind::VesselFinderHtml,
        SourceKind::MarineTraffic,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SourceKind::CruiseMapper => "cruisemapper",
            SourceKind::VesselFinderApi => "vesselfinder_api",
            SourceKind::VesselFinderHtml => "vesselfinder_html",
            SourceKind::MarineTraffic => "marinetraffic",
        }
    }

    pub fn requires_api_key(self) -> bool {
        matches!(self, SourceKind::VesselFinderApi | SourceKind::MarineTraffic)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SourceKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| TrackerError::UnknownSource {
                name: s.to_string(),
            })
    }
}

/// Instantiates the configured sources in priority order, skipping keyed sources that
/// have no key.
pub fn build_adapters(
    config: &TrackerConfig,
    fetcher: &HttpFetcher,
) -> Result<Vec<Box<dyn SourceAdapter>>> {
    let imo = config.vessel.imo.as_str();
    let sources = &config.sources;
    let mut adapters: Vec<Box<dyn SourceAdapter>> = Vec::new();

    for kind in config.source_order()? {
        let adapter: Box<dyn SourceAdapter> = match kind {
            SourceKind::CruiseMapper => Box::new(CruiseMapperAdapter::new(
                fetcher.clone(),
                &sources.cruisemapper_base_url,
                imo,
            )),
            SourceKind::VesselFinderHtml => Box::new(VesselFinderHtmlAdapter::new(
                fetcher.clone(),
                &sources.vesselfinder_base_url,
                imo,
            )),
            SourceKind::VesselFinderApi => match config.vesselfinder_api_key() {
                Some(key) => Box::new(VesselFinderApiAdapter::new(
                    fetcher.clone(),
                    &sources.vesselfinder_base_url,
                    imo,
                    key,
                )),
                None => {
                    tracing::debug!("Skipping {}: no API key configured", kind);
                    continue;
                }
            },
            SourceKind::MarineTraffic => match config.marinetraffic_api_key() {
                Some(key) => Box::new(MarineTrafficAdapter::new(
                    fetcher.clone(),
                    &sources.marinetraffic_base_url,
                    imo,
                    key,
                )),
                None => {
                    tracing::debug!("Skipping {}: no API key configured", kind);
                    continue;
                }
            },
        };
        adapters.push(adapter);
    }

    Ok(adapters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_source_kind_parsing() {
        assert_eq!("cruisemapper".parse::<SourceKind>().unwrap(), SourceKind::CruiseMapper);
        assert_eq!(
            "VesselFinder-API".parse::<SourceKind>().unwrap(),
            SourceKind::VesselFinderApi
        );
        assert!(matches!(
            "shipfinder".parse::<SourceKind>(),
            Err(TrackerError::UnknownSource { .. })
        ));
    }

    #[test]
    fn test_keyless_sources_skipped() {
        let config = TrackerConfig::default();
        let fetcher = HttpFetcher::new(Duration::from_secs(5), "test").unwrap();
        let adapters = build_adapters(&config, &fetcher).unwrap();

        let names: Vec<&str> = adapters.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["CruiseMapper", "VesselFinder"]);
    }

    #[test]
    fn test_keyed_sources_in_priority_order() {
        let mut config = TrackerConfig::default();
        config.sources.vesselfinder_api_key = Some("vf".to_string());
        config.sources.marinetraffic_api_key = Some("mt".to_string());
        let fetcher = HttpFetcher::new(Duration::from_secs(5), "test").unwrap();
        let adapters = build_adapters(&config, &fetcher).unwrap();

        let names: Vec<&str> = adapters.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["CruiseMapper", "VesselFinder API", "VesselFinder", "MarineTraffic"]
        );
    }
}
