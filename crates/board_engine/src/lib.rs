//! Board engine: HTTP transport and the listing/detail fetch orchestration.
mod client;
mod transport;
mod types;

pub use client::{BoardClient, ListingFilters, ScrapeRequest};
pub use transport::{ClientSettings, ReqwestTransport, Transport, DEFAULT_BASE_URL};
pub use types::{FailureKind, ScrapeError, TransportError};
