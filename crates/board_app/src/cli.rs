use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Scrape one company's public job board and print the postings as JSON.
#[derive(Debug, Clone, Parser)]
#[command(name = "board-scrape", version)]
pub struct Cli {
    /// Careers page URL, e.g. https://boards.greenhouse.io/acme
    pub url: String,

    /// Keep only postings mentioning this keyword as a whole word (repeatable).
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Extra listing query option as KEY=VALUE (repeatable).
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Fetch every matching posting again with its application questions.
    #[arg(long)]
    pub details: bool,

    /// RON config file. Defaults to ./board_scrape.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{parse_filter, Cli};
    use crate::logging::LogDestination;

    #[test]
    fn filter_needs_a_key() {
        assert_eq!(
            parse_filter("department=42"),
            Ok(("department".to_string(), "42".to_string()))
        );
        assert_eq!(parse_filter("q="), Ok(("q".to_string(), String::new())));
        assert!(parse_filter("=42").is_err());
        assert!(parse_filter("department").is_err());
    }

    #[test]
    fn repeated_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "board-scrape",
            "https://boards.greenhouse.io/acme",
            "-k",
            "rust",
            "--keyword",
            "C++",
            "-f",
            "office=7",
            "--log",
            "both",
            "--details",
        ])
        .unwrap();
        assert_eq!(cli.url, "https://boards.greenhouse.io/acme");
        assert_eq!(cli.keywords, vec!["rust", "C++"]);
        assert_eq!(cli.filters, vec![("office".to_string(), "7".to_string())]);
        assert_eq!(cli.log, Some(LogDestination::Both));
        assert!(cli.details);
        assert!(!cli.verbose);
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(["board-scrape"]).is_err());
    }
}
