//! Board core: pure tenant resolution, normalization and keyword filtering.
mod error;
mod matcher;
mod normalize;
mod resolve;
mod sanitize;
mod types;

pub use error::{KeywordError, ResolveError};
pub use matcher::{filter_jobs, searchable_text, KeywordMatcher};
pub use normalize::{normalize_job, normalize_job_at, DEFAULT_LOCATION};
pub use resolve::resolve_tenant;
pub use sanitize::sanitize_content;
pub use types::{
    JobSource, ListingResponse, NormalizedJob, RawJobId, RawJobRecord, RawNamed, Region,
    TenantReference,
};
