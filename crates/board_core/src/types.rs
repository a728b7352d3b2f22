use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Region tag derived from the careers URL. Informational only: the public
/// board API answers on one host for both regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => write!(f, "us"),
            Region::Eu => write!(f, "eu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantReference {
    pub company_token: String,
    pub region: Region,
}

impl TenantReference {
    pub fn new(company_token: impl Into<String>, region: Region) -> Self {
        Self {
            company_token: company_token.into(),
            region,
        }
    }
}

/// Vendor tag stamped on every normalized job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    #[default]
    Greenhouse,
}

/// Job identifier as the vendor sends it: usually a number, occasionally a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawJobId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawJobId::Number(n) => write!(f, "{n}"),
            RawJobId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawNamed {
    #[serde(default)]
    pub name: Option<String>,
}

/// One job record as returned by the board API. Every field may be absent or
/// null; defaults are applied by [`crate::normalize_job`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJobRecord {
    #[serde(default)]
    pub id: Option<RawJobId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub absolute_url: Option<String>,
    #[serde(default)]
    pub location: Option<RawNamed>,
    #[serde(default)]
    pub departments: Option<Vec<RawNamed>>,
    #[serde(default)]
    pub offices: Option<Vec<RawNamed>>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Vec<Value>>,
    #[serde(default)]
    pub questions: Option<Vec<Value>>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub jobs: Option<Vec<RawJobRecord>>,
}

impl ListingResponse {
    pub fn into_jobs(self) -> Vec<RawJobRecord> {
        self.jobs.unwrap_or_default()
    }
}

/// Vendor-independent job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedJob {
    pub external_id: String,
    pub title: String,
    pub absolute_url: String,
    pub apply_url: String,
    pub location: String,
    pub departments: Vec<String>,
    pub offices: Vec<String>,
    pub content: String,
    pub html_content: String,
    pub updated_at: String,
    pub metadata: Vec<Value>,
    pub questions: Vec<Value>,
    pub scraped_at: DateTime<Utc>,
    pub source: JobSource,
    pub company_token: String,
}
