use serde_json::json;

use tailwind_playground::preview::Capability;
use tailwind_playground::sync::{ContainerHeight, HeightMessage};
use tailwind_playground::tour::{self, Tour, TourStatus, TOUR_STEPS};
use tailwind_playground::{build_payload, HeightSync, PreviewTemplate, SettingsStore, PREVIEW_SANDBOX};

#[test]
fn link_guard_is_installed_and_sandbox_denies_navigation() {
    let payload = build_payload(r#"<a href="https://example.com">go</a>"#);
    assert!(payload.contains("closest('a')"));
    assert!(payload.contains("preventDefault()"));
    assert!(!PREVIEW_SANDBOX.permits(Capability::TopNavigation));
    assert!(!PREVIEW_SANDBOX.permits(Capability::SameOrigin));
    assert!(PREVIEW_SANDBOX.permits(Capability::Scripts));
}

#[test]
fn guard_can_be_turned_off() {
    let template = PreviewTemplate {
        contain_navigation: false,
        ..PreviewTemplate::default()
    };
    let payload = template.render("<a href=\"/\">x</a>");
    assert!(!payload.contains("closest('a')"));
    assert!(payload.contains("scrollHeight"));
}

#[test]
fn malformed_markup_is_passed_through() {
    let source = "<div class=\"p-4\"><span>unclosed";
    let payload = build_payload(source);
    assert_eq!(payload.matches(source).count(), 1);
    assert_eq!(payload, build_payload(source));
}

#[test]
fn empty_source_still_reports_height() {
    let payload = build_payload("");
    assert!(payload.contains("window.parent.postMessage"));
    assert!(payload.contains("document.body.scrollHeight"));
}

#[test]
fn height_messages_from_raw_json() {
    assert_eq!(
        HeightMessage::from_json(r#"{"height": 0}"#),
        Some(HeightMessage { height: 0.0 })
    );
    assert_eq!(HeightMessage::from_json(r#"{"height": null}"#), None);
    assert_eq!(HeightMessage::from_json("not json"), None);

    let mut sync = HeightSync::default();
    sync.receive(&json!({ "height": 0 }));
    assert_eq!(sync.height(), ContainerHeight::Pixels(32));
    assert_eq!(sync.rendered_px(), Some(300));
}

#[test]
fn first_run_tour_is_offered_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));

    let mut settings = store.load().unwrap();
    assert!(tour::should_prompt(&settings));

    let mut walk = Tour::start(&mut settings);
    store.save(&settings).unwrap();
    for _ in 1..TOUR_STEPS.len() {
        walk.next();
    }
    assert_eq!(walk.current().map(|s| s.target), Some(".btn-download"));
    assert_eq!(walk.next(), TourStatus::Completed);

    let reopened = store.load().unwrap();
    assert!(!tour::should_prompt(&reopened));
}
