use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use board_engine::ClientSettings;
use log::LevelFilter;
use serde::Deserialize;

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "board_scrape.ron";

/// Optional overrides read from a RON file. Anything left out keeps the
/// engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub listing_timeout_secs: Option<u64>,
    pub detail_timeout_secs: Option<u64>,
    pub max_bytes: Option<u64>,
    pub user_agent: Option<String>,
    pub log: Option<LogDestination>,
    pub log_level: Option<String>,
    pub keywords: Vec<String>,
}

impl AppConfig {
    /// Load `path` if given (it must exist), otherwise `./board_scrape.ron`
    /// when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::read(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn client_settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        let secs = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_secs).unwrap_or(fallback)
        };
        ClientSettings {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            connect_timeout: secs(self.connect_timeout_secs, defaults.connect_timeout),
            listing_timeout: secs(self.listing_timeout_secs, defaults.listing_timeout),
            detail_timeout: secs(self.detail_timeout_secs, defaults.detail_timeout),
            redirect_limit: defaults.redirect_limit,
            max_bytes: self.max_bytes.unwrap_or(defaults.max_bytes),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    pub fn level(&self) -> Result<LevelFilter> {
        match self.log_level.as_deref() {
            None => Ok(LevelFilter::Info),
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow!("unknown log level `{raw}` in config")),
        }
    }
}
