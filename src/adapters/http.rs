use crate::domain::model::Payload;
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `HttpTransport` backed by reqwest. Non-2xx responses surface as
/// `SolidError::Transport` carrying the original reqwest error.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty bodies (201/204 replies) decode to `null`.
async fn decode_body(response: reqwest::Response) -> Result<Payload> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::Null);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Payload> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        decode_body(response.error_for_status()?).await
    }

    async fn post(&self, url: &str, body: &Payload) -> Result<Payload> {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("API response status: {}", response.status());

        decode_body(response.error_for_status()?).await
    }
}
