use chrono::{DateTime, Utc};

use crate::{JobSource, NormalizedJob, RawJobRecord, RawNamed};

/// Location used when the board omits one.
pub const DEFAULT_LOCATION: &str = "Remote";

/// Map a raw board record into the canonical shape, stamped with the current time.
pub fn normalize_job(raw: RawJobRecord, company_token: &str) -> NormalizedJob {
    normalize_job_at(raw, company_token, Utc::now())
}

/// Like [`normalize_job`], with the caller supplying `scraped_at`.
pub fn normalize_job_at(
    raw: RawJobRecord,
    company_token: &str,
    scraped_at: DateTime<Utc>,
) -> NormalizedJob {
    let absolute_url = raw.absolute_url.unwrap_or_default();
    let content = raw.content.unwrap_or_default();
    let location = raw
        .location
        .and_then(|loc| loc.name)
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    NormalizedJob {
        external_id: raw.id.map(|id| id.to_string()).unwrap_or_default(),
        title: raw.title.unwrap_or_default(),
        apply_url: absolute_url.clone(),
        absolute_url,
        location,
        departments: names(raw.departments),
        offices: names(raw.offices),
        html_content: content.clone(),
        content,
        updated_at: raw.updated_at.unwrap_or_default(),
        metadata: raw.metadata.unwrap_or_default(),
        questions: raw.questions.unwrap_or_default(),
        scraped_at,
        source: JobSource::Greenhouse,
        company_token: company_token.to_string(),
    }
}

fn names(entries: Option<Vec<RawNamed>>) -> Vec<String> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.name.unwrap_or_default())
        .collect()
}
