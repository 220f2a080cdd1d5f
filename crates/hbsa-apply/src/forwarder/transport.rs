use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::payload::{WebhookPayload, WebhookReply};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Why a single delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error("webhook request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("webhook connection failed: {0}")]
    Connection(String),
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },
    #[error("invalid webhook response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

impl AttemptError {
    /// Transient failures are retried; anything else means the webhook refused the input.
    pub fn is_transient(&self) -> bool {
        match self {
            AttemptError::Timeout(_) | AttemptError::Connection(_) | AttemptError::Decode(_) => {
                true
            }
            AttemptError::Status { status, .. } => {
                let status = *status;
                status == StatusCode::REQUEST_TIMEOUT.as_u16()
                    || status == StatusCode::TOO_MANY_REQUESTS.as_u16()
                    || !(400..500).contains(&status)
            }
            AttemptError::Rejected(reason) => !reports_bad_input(reason),
        }
    }
}

/// Webhook `success:false` replies about malformed input are not worth repeating.
fn reports_bad_input(reason: &str) -> bool {
    let reason = reason.to_ascii_lowercase();
    ["invalid", "missing", "required", "no data received"]
        .iter()
        .any(|marker| reason.contains(marker))
}

/// Seam for the outbound webhook call so delivery can be exercised without a network.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<WebhookReply, AttemptError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportSetupError {
    #[error("webhook URL '{url}' is invalid: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("webhook URL '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("unable to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// reqwest-backed transport. Per-attempt timeouts are enforced by the forwarder.
#[derive(Debug, Clone)]
pub struct HttpWebhookTransport {
    client: Client,
    url: Url,
}

impl HttpWebhookTransport {
    pub fn new(url: &str) -> Result<Self, TransportSetupError> {
        let client = Client::builder().build()?;
        Self::with_client(client, url)
    }

    pub fn with_client(client: Client, url: &str) -> Result<Self, TransportSetupError> {
        let url = Url::parse(url.trim()).map_err(|source| TransportSetupError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransportSetupError::UnsupportedScheme(url.to_string()));
        }
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<WebhookReply, AttemptError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| AttemptError::Connection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        response
            .json::<WebhookReply>()
            .await
            .map_err(|err| AttemptError::Decode(err.to_string()))
    }
}
