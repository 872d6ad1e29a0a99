/// HTTP access to the whirlpool listing
use crate::errors::InspectorResult;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::Client;

/// Something that can produce the raw listing body
///
/// The inspector only depends on this trait; `HttpClient` is the production
/// implementation.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Endpoint the body comes from, used in log lines
    fn endpoint(&self) -> &str;

    /// Fetch the body as text
    ///
    /// Transport failures and non-success statuses are `InspectorError::Request`.
    async fn fetch_body(&self) -> InspectorResult<String>;
}

/// reqwest-backed listing client with default settings
///
/// No custom headers and no timeout override: the request behaves exactly as
/// a default `reqwest::Client` does.
pub struct HttpClient {
    client: Client,
    url: String,
}

impl HttpClient {
    pub fn new(url: impl Into<String>) -> Result<Self, String> {
        let client = Client::builder()
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl PayloadSource for HttpClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> InspectorResult<String> {
        logger::debug(LogTag::Api, &format!("GET {}", self.url));

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        logger::debug(LogTag::Api, &format!("HTTP {} from {}", status, self.url));

        let body = response.error_for_status()?.text().await?;
        logger::verbose(
            LogTag::Api,
            &format!("Received {} bytes from {}", body.len(), self.url),
        );

        Ok(body)
    }
}
