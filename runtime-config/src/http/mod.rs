use std::time::Duration;

use reqwest::{Body, Client, Response, header::CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

pub const DEFAULT_POST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Posts JSON payloads and rejects any response outside 2xx.
#[derive(Debug, Clone)]
pub struct UrlPoster {
    client: Client,
    timeout: Duration,
}

impl Default for UrlPoster {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl UrlPoster {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_POST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `payload` unchanged as the request body with a JSON content type.
    pub async fn post(&self, url: &str, payload: impl Into<Body>) -> Result<Response> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        warn!("POST {} returned {}", url, status);
        Err(ConfigError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<Response> {
        let body = serde_json::to_vec(payload)?;
        self.post(url, body).await
    }
}

/// One-off POST with the default client and a 5 second timeout.
pub async fn post_url(url: &str, payload: impl Into<Body>) -> Result<Response> {
    UrlPoster::default().post(url, payload).await
}
