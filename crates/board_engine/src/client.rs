use std::collections::BTreeMap;
use std::sync::Arc;

use board_core::{
    filter_jobs, normalize_job, normalize_job_at, resolve_tenant, ListingResponse, NormalizedJob,
    RawJobRecord, TenantReference,
};
use board_logging::{board_debug, board_info, board_warn};
use chrono::Utc;
use futures_util::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::from_slice;
use url::Url;

use crate::transport::{ClientSettings, ReqwestTransport, Transport};
use crate::{FailureKind, ScrapeError, TransportError};

/// Extra query options for the listing endpoint. Entries override the
/// built-in `content=true`.
pub type ListingFilters = BTreeMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct ScrapeRequest {
    pub filters: ListingFilters,
    pub keywords: Vec<String>,
}

/// Talks to one board API. Holds no per-tenant state; every call re-fetches.
#[derive(Clone)]
pub struct BoardClient {
    transport: Arc<dyn Transport>,
    settings: ClientSettings,
}

impl BoardClient {
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(&settings)?;
        Ok(Self::with_transport(Arc::new(transport), settings))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, settings: ClientSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Fetch the raw listing for a tenant. A board with no postings yields an
    /// empty vec; a 404 means the tenant does not exist.
    pub async fn fetch_listing(
        &self,
        tenant: &TenantReference,
        filters: &ListingFilters,
    ) -> Result<Vec<RawJobRecord>, ScrapeError> {
        let mut query = ListingFilters::from([("content".to_string(), "true".to_string())]);
        query.extend(filters.iter().map(|(k, v)| (k.clone(), v.clone())));

        let url = self.endpoint(&[tenant.company_token.as_str(), "jobs"], &query)?;
        board_debug!("Listing jobs for {} ({})", tenant.company_token, tenant.region);

        let bytes = match self.transport.get(&url, self.settings.listing_timeout).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind == FailureKind::HttpStatus(404) => {
                board_warn!("Board reports unknown tenant {}", tenant.company_token);
                return Err(ScrapeError::TenantNotFound {
                    company_token: tenant.company_token.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let listing: ListingResponse = decode(&url, &bytes)?;
        let jobs = listing.into_jobs();
        board_info!("Fetched {} jobs for {}", jobs.len(), tenant.company_token);
        Ok(jobs)
    }

    /// Listing followed by normalization. All jobs share one `scraped_at`.
    pub async fn list_jobs(
        &self,
        tenant: &TenantReference,
        filters: &ListingFilters,
    ) -> Result<Vec<NormalizedJob>, ScrapeError> {
        let raw = self.fetch_listing(tenant, filters).await?;
        let scraped_at = Utc::now();
        Ok(raw
            .into_iter()
            .map(|record| normalize_job_at(record, &tenant.company_token, scraped_at))
            .collect())
    }

    /// Fetch one job with its application questions.
    pub async fn fetch_detail(
        &self,
        tenant: &TenantReference,
        job_id: &str,
    ) -> Result<NormalizedJob, ScrapeError> {
        let query = ListingFilters::from([("questions".to_string(), "true".to_string())]);
        let url = self.endpoint(&[tenant.company_token.as_str(), "jobs", job_id], &query)?;
        board_debug!("Fetching job {} for {}", job_id, tenant.company_token);

        let bytes = self.transport.get(&url, self.settings.detail_timeout).await?;
        let record: RawJobRecord = decode(&url, &bytes)?;
        Ok(normalize_job(record, &tenant.company_token))
    }

    /// Detail fetches for several jobs, issued concurrently. Results come back
    /// in the order of `job_ids`, one per id.
    pub async fn fetch_details<S: AsRef<str>>(
        &self,
        tenant: &TenantReference,
        job_ids: &[S],
    ) -> Vec<Result<NormalizedJob, ScrapeError>> {
        join_all(job_ids.iter().map(|id| self.fetch_detail(tenant, id.as_ref()))).await
    }

    /// Resolve a careers URL, list its jobs and keep those matching the keywords.
    pub async fn scrape(
        &self,
        careers_url: &str,
        request: &ScrapeRequest,
    ) -> Result<Vec<NormalizedJob>, ScrapeError> {
        let tenant = resolve_tenant(careers_url)?;
        let jobs = self.list_jobs(&tenant, &request.filters).await?;
        let total = jobs.len();
        let matched = filter_jobs(jobs, &request.keywords)?;
        if !request.keywords.is_empty() {
            board_info!(
                "{} of {} jobs for {} match {:?}",
                matched.len(),
                total,
                tenant.company_token,
                request.keywords
            );
        }
        Ok(matched)
    }

    fn endpoint(&self, segments: &[&str], query: &ListingFilters) -> Result<Url, TransportError> {
        let invalid = |message: &str| {
            TransportError::new(FailureKind::InvalidUrl, &self.settings.base_url, message)
        };
        let mut url = Url::parse(&self.settings.base_url).map_err(|e| invalid(&e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

fn decode<T: DeserializeOwned>(url: &Url, bytes: &[u8]) -> Result<T, TransportError> {
    from_slice(bytes).map_err(|err| {
        TransportError::new(FailureKind::MalformedBody, url.as_str(), err.to_string())
    })
}
