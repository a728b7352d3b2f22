mod cli;
mod config;
mod logging;

use std::io::{self, Write};

use anyhow::{Context, Result};
use board_core::{resolve_tenant, NormalizedJob};
use board_engine::{BoardClient, ScrapeRequest};
use board_logging::{board_info, board_warn};
use clap::Parser;
use log::LevelFilter;

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.level()?
    };
    logging::initialize(cli.log.or(config.log).unwrap_or_default(), level);

    let jobs = run(&cli, &config).await?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &jobs).context("writing jobs")?;
    writeln!(stdout)?;
    Ok(())
}

async fn run(cli: &Cli, config: &AppConfig) -> Result<Vec<NormalizedJob>> {
    let tenant = resolve_tenant(&cli.url)?;
    board_info!("Scraping {} ({})", tenant.company_token, tenant.region);

    let client = BoardClient::new(config.client_settings()).context("building http client")?;
    let jobs = client
        .scrape(&cli.url, &scrape_request(cli, config))
        .await
        .with_context(|| format!("scraping jobs for {}", tenant.company_token))?;

    if !cli.details {
        return Ok(jobs);
    }

    let ids: Vec<&str> = jobs.iter().map(|job| job.external_id.as_str()).collect();
    let details = client.fetch_details(&tenant, &ids).await;
    Ok(jobs
        .iter()
        .zip(details)
        .map(|(listed, detail)| match detail {
            Ok(job) => job,
            Err(err) => {
                board_warn!("Keeping listing entry for job {}: {}", listed.external_id, err);
                listed.clone()
            }
        })
        .collect())
}

/// Config keywords first, then the ones given on the command line.
fn scrape_request(cli: &Cli, config: &AppConfig) -> ScrapeRequest {
    ScrapeRequest {
        filters: cli.filters.iter().cloned().collect(),
        keywords: config
            .keywords
            .iter()
            .chain(&cli.keywords)
            .cloned()
            .collect(),
    }
}
