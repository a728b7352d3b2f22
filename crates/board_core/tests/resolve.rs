use board_core::{resolve_tenant, Region, ResolveError, TenantReference};
use pretty_assertions::assert_eq;

#[test]
fn boards_subdomain_resolves_to_us_tenant() {
    let tenant = resolve_tenant("https://boards.greenhouse.io/acme").unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Us));
}

#[test]
fn eu_job_boards_resolves_to_eu_tenant() {
    let tenant = resolve_tenant("https://job-boards.eu.greenhouse.io/acme").unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Eu));
}

#[test]
fn every_recognized_host_yields_first_path_segment() {
    let cases = [
        "https://greenhouse.io/acme",
        "https://www.greenhouse.io/acme/jobs",
        "http://boards.greenhouse.io/acme/jobs/123",
        "https://job-boards.greenhouse.io/acme?gh_src=abc",
        "  https://BOARDS.greenhouse.io/acme/  ",
        "boards.greenhouse.io/acme",
    ];
    for url in cases {
        let tenant = resolve_tenant(url).unwrap_or_else(|e| panic!("{url}: {e}"));
        assert_eq!(tenant.company_token, "acme", "{url}");
        assert_eq!(tenant.region, Region::Us, "{url}");
    }
}

#[test]
fn token_case_is_preserved() {
    let tenant = resolve_tenant("https://boards.greenhouse.io/AcmeCorp").unwrap();
    assert_eq!(tenant.company_token, "AcmeCorp");
}

#[test]
fn embed_url_uses_for_parameter() {
    let tenant =
        resolve_tenant("https://boards.greenhouse.io/embed/job_board?for=acme&b=https").unwrap();
    assert_eq!(tenant.company_token, "acme");

    let tenant =
        resolve_tenant("https://job-boards.eu.greenhouse.io/embed/job_app?for=acme&token=42")
            .unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Eu));
}

#[test]
fn embed_url_without_for_is_unparseable() {
    assert!(resolve_tenant("https://boards.greenhouse.io/embed/job_board").is_err());
}

#[test]
fn foreign_host_is_unparseable() {
    let err = resolve_tenant("https://example.com/careers").unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnparseableUrl {
            url: "https://example.com/careers".to_string()
        }
    );
}

#[test]
fn lookalike_hosts_are_rejected() {
    for url in [
        "https://greenhouse.io.evil.com/acme",
        "https://notgreenhouse.io/acme",
        "https://boards.greenhouse.io/",
        "https://boards.greenhouse.io",
        "mailto:jobs@greenhouse.io",
        "",
        "   ",
    ] {
        assert!(resolve_tenant(url).is_err(), "{url:?} should not resolve");
    }
}

#[test]
fn unparseable_error_keeps_the_raw_input() {
    let err = resolve_tenant("  not a url  ").unwrap_err();
    assert_eq!(err.to_string(), "unparseable careers url:   not a url  ");
}

#[test]
fn escaped_and_unicode_slugs_decode_to_the_same_token() {
    for url in [
        "https://boards.greenhouse.io/café",
        "https://boards.greenhouse.io/caf%C3%A9",
    ] {
        let tenant = resolve_tenant(url).unwrap();
        assert_eq!(tenant.company_token, "café", "{url}");
    }
}

#[test]
fn region_follows_eu_host_anywhere_in_the_input() {
    let tenant =
        resolve_tenant("https://boards.greenhouse.io/acme?src=job-boards.eu.greenhouse.io")
            .unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Eu));
}

#[test]
fn mixed_case_eu_host_is_still_eu() {
    let tenant = resolve_tenant("https://Job-Boards.EU.Greenhouse.io/acme").unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Eu));
}

#[test]
fn schemeless_host_with_port_resolves() {
    let tenant = resolve_tenant("boards.greenhouse.io:443/acme").unwrap();
    assert_eq!(tenant, TenantReference::new("acme", Region::Us));
}
