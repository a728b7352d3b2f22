use std::fmt;

use board_core::{KeywordError, ResolveError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} for {url}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub url: String,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: FailureKind, url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything a scrape can fail with. Transport failures pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    UnparseableUrl(#[from] ResolveError),
    #[error("tenant not found: {company_token}")]
    TenantNotFound { company_token: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Keywords(#[from] KeywordError),
}

impl ScrapeError {
    /// Only transport failures may clear up on their own; bad input and
    /// unknown tenants need a corrected request.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::Transport(err) => !matches!(
                err.kind,
                FailureKind::InvalidUrl | FailureKind::TooLarge { .. }
            ),
            ScrapeError::UnparseableUrl(_)
            | ScrapeError::TenantNotFound { .. }
            | ScrapeError::Keywords(_) => false,
        }
    }
}
