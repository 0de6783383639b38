use crate::adapters::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::adapters::SourceKind;
use crate::domain::model::VesselIdentity;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const VESSELFINDER_API_KEY_ENV: &str = "VESSELFINDER_API_KEY";
pub const MARINETRAFFIC_API_KEY_ENV: &str = "MARINETRAFFIC_API_KEY";

static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub vessel: VesselIdentity,
    pub http: HttpConfig,
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Priority order; the first source with usable data wins.
    pub order: Vec<String>,
    pub cruisemapper_base_url: String,
    pub vesselfinder_base_url: String,
    pub marinetraffic_base_url: String,
    pub vesselfinder_api_key: Option<String>,
    pub marinetraffic_api_key: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            order: SourceKind::ALL.iter().map(|k| k.key().to_string()).collect(),
            cruisemapper_base_url: "https://www.cruisemapper.com".to_string(),
            vesselfinder_base_url: "https://www.vesselfinder.com".to_string(),
            marinetraffic_base_url: "https://services.marinetraffic.com".to_string(),
            vesselfinder_api_key: None,
            marinetraffic_api_key: None,
        }
    }
}

/// Empty strings and unresolved `${VAR}` placeholders count as not configured.
fn configured(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !ENV_VAR_RE.is_match(v))
}

impl TrackerConfig {
    /// Loads a TOML file, then applies API keys from the environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Uses `path` when it exists, otherwise the built-in defaults plus environment keys.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                path.as_ref().display()
            );
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_env(VESSELFINDER_API_KEY_ENV) {
            self.sources.vesselfinder_api_key = Some(key);
        }
        if let Some(key) = non_empty_env(MARINETRAFFIC_API_KEY_ENV) {
            self.sources.marinetraffic_api_key = Some(key);
        }
    }

    pub fn identity(&self) -> VesselIdentity {
        self.vessel.clone()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    pub fn vesselfinder_api_key(&self) -> Option<&str> {
        configured(&self.sources.vesselfinder_api_key)
    }

    pub fn marinetraffic_api_key(&self) -> Option<&str> {
        configured(&self.sources.marinetraffic_api_key)
    }

    pub fn source_order(&self) -> Result<Vec<SourceKind>> {
        self.sources.order.iter().map(|name| name.parse()).collect()
    }

    /// Sources that will actually be queried, in order.
    pub fn available_sources(&self) -> Vec<SourceKind> {
        let Ok(order) = self.source_order() else {
            return Vec::new();
        };
        order
            .into_iter()
            .filter(|kind| match kind {
                SourceKind::VesselFinderApi => self.vesselfinder_api_key().is_some(),
                SourceKind::MarineTraffic => self.marinetraffic_api_key().is_some(),
                _ => true,
            })
            .collect()
    }

    /// Restricts the walk to a single source, e.g. when debugging one site's markup.
    pub fn restrict_to(&mut self, source: &str) -> Result<()> {
        let kind: SourceKind = source.parse()?;
        self.sources.order = vec![kind.key().to_string()];
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("vessel.name", &self.vessel.name)?;
        validation::validate_digits("vessel.imo", &self.vessel.imo, 7)?;
        validation::validate_digits("vessel.mmsi", &self.vessel.mmsi, 9)?;

        validation::validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 120)?;
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        validation::validate_url(
            "sources.cruisemapper_base_url",
            &self.sources.cruisemapper_base_url,
        )?;
        validation::validate_url(
            "sources.vesselfinder_base_url",
            &self.sources.vesselfinder_base_url,
        )?;
        validation::validate_url(
            "sources.marinetraffic_base_url",
            &self.sources.marinetraffic_base_url,
        )?;

        if self.sources.order.is_empty() {
            return Err(TrackerError::MissingConfigError {
                field: "sources.order".to_string(),
            });
        }
        let order = self.source_order()?;
        let keys: Vec<String> = order.iter().map(|k| k.key().to_string()).collect();
        validation::validate_unique("sources.order", &keys)?;

        if self.available_sources().is_empty() {
            return Err(TrackerError::ConfigError {
                message: "No source can be queried: every listed source needs an API key"
                    .to_string(),
            });
        }

        Ok(())
    }
}
