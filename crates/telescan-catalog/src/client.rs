//! HTTP client for the scanning backend's v2 API.

use crate::error::{CatalogError, Result};
use crate::filter::ScannerFilter;
use crate::types::{
    DryRunOutcome, ErrorResponse, NumberInput, NumberInsight, RunResponse, ScanInput,
    ScannerDescriptor, ScannerOptions, ScannersResponse,
};
use reqwest::{Client, Response};
use std::time::Duration;
use telescan_core::{ClientConfig, PhoneNumber};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the scanner catalog and scan submission endpoints.
///
/// The base URL is injected at construction; nothing is read from global
/// state. Every call issues a fresh request: there is no cache, no retry,
/// and no fallback. Dropping the returned future is the only way to
/// abandon an in-flight request.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    filter: ScannerFilter,
}

impl CatalogClient {
    /// Create a client for the given backend base URL.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            filter: ScannerFilter::selectable(),
        })
    }

    /// Create a client from the loaded configuration, applying the
    /// configured base URL, timeout, and user agent.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(config.http.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            filter: ScannerFilter::selectable(),
        })
    }

    /// Replace the scanner filter. Mostly useful to see everything the
    /// backend advertises, pseudo-scanners included.
    #[must_use]
    pub fn with_filter(mut self, filter: ScannerFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The backend base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the scanner plugins advertised by the backend.
    ///
    /// Issues `GET {base_url}/v2/scanners` and applies the client's
    /// filter. Server order is preserved; duplicates are kept.
    pub async fn get_scanners(&self) -> Result<Vec<ScannerDescriptor>> {
        let response = self
            .client
            .get(format!("{}/v2/scanners", self.base_url))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: ScannersResponse = Self::decode(response, "scanner list").await?;
        let scanners = body.scanners.unwrap_or_default();
        tracing::debug!("backend advertised {} scanners", scanners.len());

        Ok(self.filter.apply(scanners))
    }

    /// Ask the backend to parse a number without scanning it.
    ///
    /// Issues `POST {base_url}/v2/numbers`.
    pub async fn number_insight(&self, number: &PhoneNumber) -> Result<NumberInsight> {
        let response = self
            .client
            .post(format!("{}/v2/numbers", self.base_url))
            .json(&NumberInput {
                number: number.as_str(),
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Self::decode(response, "number insight").await
    }

    /// Check whether a scanner would accept a number, without scanning.
    ///
    /// Issues `POST {base_url}/v2/scanners/{scanner}/dryrun`. A scanner
    /// rejection is not an error; it comes back as an unsuccessful
    /// [`DryRunOutcome`].
    pub async fn dry_run_scanner(
        &self,
        scanner: &str,
        number: &PhoneNumber,
        options: &ScannerOptions,
    ) -> Result<DryRunOutcome> {
        let response = self
            .client
            .post(format!("{}/v2/scanners/{scanner}/dryrun", self.base_url))
            .json(&ScanInput {
                number: number.as_str(),
                options,
            })
            .send()
            .await?;

        // A scanner rejection arrives as a 400 carrying a regular outcome
        // body; surface it as an outcome, not an API error.
        let status = response.status();
        if !status.is_success() && status != reqwest::StatusCode::BAD_REQUEST {
            return Err(Self::api_error(response).await);
        }

        let text = response.text().await?;
        if let Ok(outcome) = serde_json::from_str::<DryRunOutcome>(&text) {
            return Ok(outcome);
        }
        if let Ok(body) = serde_json::from_str::<ErrorResponse>(&text) {
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body.error,
            });
        }
        Err(CatalogError::Decode {
            message: "dry run outcome: unexpected body".to_string(),
        })
    }

    /// Run a single scanner against a number.
    ///
    /// Issues `POST {base_url}/v2/scanners/{scanner}/run`. The result is
    /// scanner-specific and stays opaque JSON; interpreting it is the
    /// backend's domain.
    pub async fn run_scanner(
        &self,
        scanner: &str,
        number: &PhoneNumber,
        options: &ScannerOptions,
    ) -> Result<serde_json::Value> {
        tracing::debug!("running scanner {}", scanner);
        let response = self
            .client
            .post(format!("{}/v2/scanners/{scanner}/run", self.base_url))
            .json(&ScanInput {
                number: number.as_str(),
                options,
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: RunResponse = Self::decode(response, "scan result").await?;
        Ok(body.result)
    }

    async fn check_status(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Build an API error from a non-success response, pulling the message
    /// out of the backend's `{"error": ...}` body when it has one.
    async fn api_error(response: Response) -> CatalogError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        CatalogError::Api {
            status: status.as_u16(),
            message,
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
        what: &'static str,
    ) -> Result<T> {
        response.json().await.map_err(|e| CatalogError::Decode {
            message: format!("{what}: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new("http://localhost:5000/api").expect("create client");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = CatalogClient::new("http://localhost:5000/api/").expect("create client");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_client_from_config() {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://scanner.internal/api/".to_string();
        config.http.timeout_secs = 5;

        let client = CatalogClient::from_config(&config).expect("create client");
        assert_eq!(client.base_url(), "http://scanner.internal/api");
    }

    #[test]
    fn test_default_filter_is_selectable() {
        let client = CatalogClient::new("http://localhost:5000/api").expect("create client");
        assert!(matches!(client.filter, ScannerFilter::Exclude(_)));

        let client = client.with_filter(ScannerFilter::All);
        assert!(matches!(client.filter, ScannerFilter::All));
    }
}
