use std::time::Duration;

use board_logging::board_trace;
use futures_util::StreamExt;
use url::Url;

use crate::{FailureKind, TransportError};

/// Public job-board API root. The same host serves US and EU boards.
pub const DEFAULT_BASE_URL: &str = "https://boards-api.greenhouse.io/v1/boards";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub listing_timeout: Duration,
    pub detail_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            listing_timeout: Duration::from_secs(15),
            detail_timeout: Duration::from_secs(10),
            redirect_limit: 5,
            max_bytes: 10 * 1024 * 1024,
            user_agent: concat!("board-scrape/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP seam used by the fetch orchestrator. Implementations return the raw
/// body of a successful GET or a classified failure; they never interpret it.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-backed transport. The client handle is built once and shared by
/// every request made through it.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    max_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, TransportError> {
        let redirect_limit = settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .user_agent(settings.user_agent.clone())
            .redirect(policy)
            .build()
            .map_err(|err| {
                TransportError::new(FailureKind::Network, &settings.base_url, err.to_string())
            })?;

        Ok(Self {
            client,
            max_bytes: settings.max_bytes,
        })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| map_reqwest_error(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                url.as_str(),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(too_large(url, self.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| map_reqwest_error(url, err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(too_large(url, self.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        board_trace!("GET {} -> {} ({} bytes)", url, status, bytes.len());

        Ok(bytes)
    }
}

fn too_large(url: &Url, max_bytes: u64, actual: u64) -> TransportError {
    TransportError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        url.as_str(),
        "response too large",
    )
}

fn map_reqwest_error(url: &Url, err: reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    TransportError::new(kind, url.as_str(), err.to_string())
}
