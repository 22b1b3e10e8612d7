use crate::config::CreatorConfig;
use crate::correlate::{RequestCorrelator, correlate_page};
use crate::har::{Creator, Entry, HAR_VERSION, assemble_report, build_entry, build_page};
use crate::test_helpers::{Capture, WALL_TIME};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

fn navigation() -> Capture {
    Capture::new()
        .request("1", "http://x/", 0.0)
        .response("1", 200, 0.1)
        .finished("1", 90, 0.2)
        .request("2", "http://x/app.js", 0.3)
        .finished("2", 0, 0.4)
        .dom_content(1.25)
        .load(1.75)
}

fn creator() -> Creator {
    Creator::from(&CreatorConfig::default())
}

fn entries(capture: &Capture) -> Vec<Entry> {
    let events = capture.events();
    let completed = RequestCorrelator::correlate(&events)
        .unwrap()
        .into_completed();
    completed.iter().map(|r| build_entry(r).unwrap()).collect()
}

#[test]
fn page_is_built_from_page_events() {
    let events = navigation().events();
    let page = build_page(&correlate_page(&events).unwrap(), "page_1");

    assert_eq!(page.id, "page_1");
    assert_eq!(page.title, "http://x/");
    assert_eq!(
        page.started_date_time,
        Utc.timestamp_opt(WALL_TIME as i64, 0).unwrap()
    );
    assert_eq!(page.page_timings.on_content_load, Some(1.25));
    assert_eq!(page.page_timings.on_load, Some(1.75));
}

#[test]
fn empty_capture_builds_untitled_page_at_epoch() {
    let page = build_page(&correlate_page(&[]).unwrap(), "p");

    assert_eq!(page.title, "");
    assert_eq!(page.started_date_time, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(page.page_timings.on_load, None);
}

#[test]
fn report_links_every_entry_to_the_page() {
    // Arrange
    let capture = navigation();
    let events = capture.events();
    let page = build_page(&correlate_page(&events).unwrap(), "page_1");

    // Act
    let har = assemble_report(page, entries(&capture), creator());

    // Assert
    assert_eq!(har.log.version, HAR_VERSION);
    assert_eq!(har.log.creator.name, "chromehar");
    assert_eq!(har.log.pages.len(), 1);
    let urls: Vec<&str> = har
        .log
        .entries
        .iter()
        .map(|e| e.request.url.as_str())
        .collect();
    assert_eq!(urls, vec!["http://x/", "http://x/app.js"]);
    assert!(
        har.log
            .entries
            .iter()
            .all(|e| e.page_ref.as_deref() == Some("page_1"))
    );
}

#[test]
fn report_serializes_with_har_field_names() {
    let capture = navigation();
    let events = capture.events();
    let page = build_page(&correlate_page(&events).unwrap(), "page_1");
    let har = assemble_report(page, entries(&capture), creator());

    let value = serde_json::to_value(&har).unwrap();

    assert_eq!(value["log"]["version"], json!("1.2"));
    assert_eq!(
        value["log"]["creator"],
        json!({ "name": "chromehar", "version": "0.1" })
    );
    assert_eq!(
        value["log"]["pages"][0]["startedDateTime"],
        json!("2023-11-14T22:13:20Z")
    );
    assert_eq!(
        value["log"]["pages"][0]["pageTimings"],
        json!({ "onContentLoad": 1.25, "onLoad": 1.75 })
    );

    let entry = &value["log"]["entries"][0];
    assert_eq!(entry["pageref"], json!("page_1"));
    assert_eq!(entry["cache"], json!({}));
    assert_eq!(entry["response"]["redirectURL"], json!(""));
    assert_eq!(entry["request"]["httpVersion"], json!("http/1.1"));
    assert!(entry.get("serverIPAddress").is_none());
    assert!(entry["timings"].get("dns").is_none());
}

#[test]
fn empty_page_timings_are_omitted() {
    let page = build_page(&correlate_page(&[]).unwrap(), "p");

    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["pageTimings"], json!({}));
}
