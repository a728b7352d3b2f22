use board_core::{
    normalize_job, normalize_job_at, JobSource, NormalizedJob, RawJobRecord, DEFAULT_LOCATION,
};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawJobRecord {
    serde_json::from_value(value).expect("raw record")
}

#[test]
fn full_record_maps_every_field() {
    let record = raw(json!({
        "id": 4012345,
        "title": "Senior Rust Engineer",
        "absolute_url": "https://boards.greenhouse.io/acme/jobs/4012345",
        "location": { "name": "Berlin" },
        "departments": [{ "id": 1, "name": "Engineering" }, { "id": 2, "name": "Platform" }],
        "offices": [{ "id": 9, "name": "EU", "location": "Berlin" }],
        "content": "&lt;p&gt;Build things&lt;/p&gt;",
        "metadata": [{ "id": 7, "name": "Level", "value": "L5", "value_type": "single_select" }],
        "questions": [{ "label": "Resume", "required": true }],
        "updated_at": "2024-03-01T10:00:00-05:00"
    }));
    let stamp = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();

    let job = normalize_job_at(record, "acme", stamp);

    assert_eq!(
        job,
        NormalizedJob {
            external_id: "4012345".into(),
            title: "Senior Rust Engineer".into(),
            absolute_url: "https://boards.greenhouse.io/acme/jobs/4012345".into(),
            apply_url: "https://boards.greenhouse.io/acme/jobs/4012345".into(),
            location: "Berlin".into(),
            departments: vec!["Engineering".into(), "Platform".into()],
            offices: vec!["EU".into()],
            content: "&lt;p&gt;Build things&lt;/p&gt;".into(),
            html_content: "&lt;p&gt;Build things&lt;/p&gt;".into(),
            updated_at: "2024-03-01T10:00:00-05:00".into(),
            metadata: vec![json!({ "id": 7, "name": "Level", "value": "L5", "value_type": "single_select" })],
            questions: vec![json!({ "label": "Resume", "required": true })],
            scraped_at: stamp,
            source: JobSource::Greenhouse,
            company_token: "acme".into(),
        }
    );
}

#[test]
fn empty_record_gets_defaults() {
    let job = normalize_job(raw(json!({})), "acme");
    assert_eq!(job.external_id, "");
    assert_eq!(job.title, "");
    assert_eq!(job.absolute_url, "");
    assert_eq!(job.location, DEFAULT_LOCATION);
    assert!(job.departments.is_empty());
    assert!(job.offices.is_empty());
    assert_eq!(job.content, "");
    assert_eq!(job.updated_at, "");
    assert!(job.metadata.is_empty());
    assert!(job.questions.is_empty());
    assert_eq!(job.company_token, "acme");
}

#[test]
fn null_fields_get_defaults() {
    let job = normalize_job(
        raw(json!({
            "id": null,
            "title": null,
            "location": null,
            "departments": null,
            "offices": null,
            "content": null,
            "metadata": null,
            "questions": null,
            "updated_at": null
        })),
        "acme",
    );
    assert_eq!(job.location, "Remote");
    assert!(job.departments.is_empty());
    assert!(job.metadata.is_empty());
}

#[test]
fn location_without_name_defaults_to_remote() {
    let job = normalize_job(raw(json!({ "location": {} })), "acme");
    assert_eq!(job.location, "Remote");
}

#[test]
fn string_identifier_is_kept_verbatim() {
    let job = normalize_job(raw(json!({ "id": "abc-123" })), "acme");
    assert_eq!(job.external_id, "abc-123");
}

#[test]
fn scraped_at_is_now_not_updated_at() {
    let before = Utc::now();
    let job = normalize_job(raw(json!({ "updated_at": "2020-01-01T00:00:00Z" })), "acme");
    let after = Utc::now();
    assert!(job.scraped_at >= before && job.scraped_at <= after);
    assert_eq!(job.updated_at, "2020-01-01T00:00:00Z");
}

#[test]
fn serialized_form_uses_camel_case_and_vendor_tag() {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let job = normalize_job_at(raw(json!({ "id": 1 })), "acme", stamp);
    let value = serde_json::to_value(&job).unwrap();
    assert_eq!(value["externalId"], "1");
    assert_eq!(value["applyUrl"], "");
    assert_eq!(value["htmlContent"], "");
    assert_eq!(value["companyToken"], "acme");
    assert_eq!(value["source"], "greenhouse");
    assert_eq!(value["scrapedAt"], "2024-01-01T00:00:00Z");
}
