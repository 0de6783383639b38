use crate::utils::error::{Result, TrackerError};
use reqwest::{Client, Response};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "WhereIsCowieBot/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared GET client: one fixed timeout and an identifying User-Agent for every source.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TrackerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn get(&self, source_name: &str, url: &str, bearer: Option<&str>) -> Result<Response> {
        tracing::debug!("{}: GET {}", source_name, redact(url));
        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|error| transport(source_name, error))?;

        let status = response.status();
        tracing::debug!("{}: response status {}", source_name, status);
        if !status.is_success() {
            return Err(TrackerError::HttpStatus {
                source_name: source_name.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    pub async fn get_text(&self, source_name: &str, url: &str, bearer: Option<&str>) -> Result<String> {
        let response = self.get(source_name, url, bearer).await?;
        response
            .text()
            .await
            .map_err(|error| transport(source_name, error))
    }

    pub async fn get_json(
        &self,
        source_name: &str,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value> {
        let response = self.get(source_name, url, bearer).await?;
        response.json().await.map_err(|error| {
            if error.is_decode() {
                TrackerError::Extraction {
                    source_name: source_name.to_string(),
                    message: format!("response is not valid JSON: {}", error.without_url()),
                }
            } else {
                transport(source_name, error)
            }
        })
    }
}

/// reqwest errors print their URL, which may carry an API key.
fn transport(source_name: &str, error: reqwest::Error) -> TrackerError {
    TrackerError::Transport {
        source_name: source_name.to_string(),
        error: error.without_url(),
    }
}

/// MarineTraffic puts the API key in the path; keep it out of the logs.
fn redact(url: &str) -> String {
    match url.find("/exportvessel/v:8/") {
        Some(idx) => {
            let head_len = idx + "/exportvessel/v:8/".len();
            let rest = &url[head_len..];
            let tail = rest.find('/').map(|i| &rest[i..]).unwrap_or("");
            format!("{}***{}", &url[..head_len], tail)
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_redact_marinetraffic_key() {
        assert_eq!(
            redact("https://services.marinetraffic.com/api/exportvessel/v:8/SECRET/protocol:jsono/imo:9818084"),
            "https://services.marinetraffic.com/api/exportvessel/v:8/***/protocol:jsono/imo:9818084"
        );
        assert_eq!(redact("https://example.com/a"), "https://example.com/a");
    }

    #[tokio::test]
    async fn test_sends_user_agent_and_bearer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ais")
                    .header("user-agent", "TestAgent/2.0")
                    .header("authorization", "Bearer k3y");
                then.status(200).body("ok");
            })
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5), "TestAgent/2.0").unwrap();
        let body = fetcher
            .get_text("Test", &server.url("/ais"), Some("k3y"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gone");
                then.status(404);
            })
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5), DEFAULT_USER_AGENT).unwrap();
        let err = fetcher
            .get_text("Test", &server.url("/gone"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, TrackerError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200).delay(Duration::from_secs(3)).body("late");
            })
            .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(200), DEFAULT_USER_AGENT).unwrap();
        let err = fetcher
            .get_text("Test", &server.url("/slow"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, TrackerError::Transport { .. }));
        assert!(!err.to_string().contains("/slow"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_extraction_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/json");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5), DEFAULT_USER_AGENT).unwrap();
        let result = fetcher.get_json("Test", &server.url("/json"), None).await;

        assert!(matches!(result, Err(TrackerError::Extraction { .. })));
    }
}
