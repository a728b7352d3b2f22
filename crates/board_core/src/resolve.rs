use percent_encoding::percent_decode_str;
use url::Url;

use crate::{Region, ResolveError, TenantReference};

const EU_HOST: &str = "job-boards.eu.greenhouse.io";

/// Recognized board hosts, tried in order from the bare vendor domain to the
/// most specific regional one.
const BOARD_HOSTS: &[&[&str]] = &[
    &["greenhouse.io", "www.greenhouse.io"],
    &["boards.greenhouse.io"],
    &["job-boards.greenhouse.io"],
    &[EU_HOST],
];

/// Resolve a careers-page URL into the board tenant it points at.
///
/// The tenant token is the first path segment after a recognized host. Embed
/// URLs (`/embed/job_board?for=acme`) carry the token in the `for` parameter
/// instead. The region is decided separately by looking for the EU host
/// anywhere in the input.
pub fn resolve_tenant(raw: &str) -> Result<TenantReference, ResolveError> {
    let unparseable = || ResolveError::UnparseableUrl {
        url: raw.to_string(),
    };

    let trimmed = raw.trim();
    let url = parse_lenient(trimmed).ok_or_else(unparseable)?;
    let host = url.host_str().ok_or_else(unparseable)?;

    let recognized = BOARD_HOSTS
        .iter()
        .any(|aliases| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(host)));
    if !recognized {
        return Err(unparseable());
    }

    let token = tenant_token(&url).ok_or_else(unparseable)?;
    let region = if trimmed.to_ascii_lowercase().contains(EU_HOST) {
        Region::Eu
    } else {
        Region::Us
    };

    Ok(TenantReference::new(token, region))
}

fn parse_lenient(input: &str) -> Option<Url> {
    if input.is_empty() {
        return None;
    }
    match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        // `host:port/path` parses with the host as its scheme.
        Ok(url) if url.scheme().contains('.') => with_https(input),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => with_https(input),
        Err(_) => None,
    }
}

fn with_https(input: &str) -> Option<Url> {
    Url::parse(&format!("https://{input}")).ok()
}

fn tenant_token(url: &Url) -> Option<String> {
    let first = url.path_segments()?.next().filter(|s| !s.is_empty())?;
    if first.eq_ignore_ascii_case("embed") {
        return url
            .query_pairs()
            .find(|(key, _)| key == "for")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty());
    }
    // Segments come back percent-encoded; the token is the decoded slug.
    percent_decode_str(first)
        .decode_utf8()
        .ok()
        .map(|token| token.into_owned())
}
