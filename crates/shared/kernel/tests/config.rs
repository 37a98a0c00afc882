pub mod fixtures;

use fixtures::*;
use vitrine_kernel::config::{ConfigError, load_config};
use vitrine_kernel::controller::Controller;
use vitrine_kernel::domain::behaviors::Behaviors;
use vitrine_kernel::event::UiEvent;

#[test]
fn missing_or_blank_document_yields_defaults() {
    let cfg = load_config(None).expect("defaults");
    assert_eq!(cfg.behaviors, Behaviors::ALL);

    let blank = load_config(Some("   \n")).expect("defaults");
    assert_eq!(blank, cfg);
}

#[test]
fn partial_document_overrides_only_what_it_names() {
    let cfg = load_config(Some(
        r#"{
            "behaviors": ["drawer", "modal", "faq"],
            "header": { "scrolled_offset": 48.0 },
            "toast": { "dismiss_ms": 6000 }
        }"#,
    ))
    .expect("config loads");

    assert_eq!(cfg.behaviors, Behaviors::OVERLAYS | Behaviors::FAQ);
    assert!((cfg.header.scrolled_offset - 48.0).abs() < f64::EPSILON);
    assert_eq!(cfg.toast.dismiss_ms, 6000);
    assert_eq!(cfg.motion.counter_duration_ms, 1200);
    assert_eq!(cfg.selectors.modal, "[data-modal]");
}

#[test]
fn malformed_document_is_reported_with_context() {
    let err = load_config(Some("{ not json")).expect_err("must fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error ("));
}

#[test]
fn disabled_behaviors_are_not_bound() {
    let landing = Landing::new();
    let page = &landing.page;
    let cfg = load_config(Some(r#"{ "behaviors": ["header", "faq"] }"#)).expect("config loads");

    let mut controller = Controller::mount(page, cfg);
    assert_eq!(controller.bound(), Behaviors::HEADER | Behaviors::FAQ);
    assert_eq!(page.observed_count(), 0);

    let _ = controller.handle(page, UiEvent::Click { target: landing.drawer_open });
    assert!(!page.class(landing.drawer, "open"));
}

#[test]
fn full_page_binds_everything() {
    let landing = Landing::new();
    assert_eq!(landing.mount().bound(), Behaviors::ALL);
}

#[test]
fn custom_classes_flow_through() {
    let landing = Landing::new();
    let page = &landing.page;
    let cfg = load_config(Some(r#"{ "classes": { "open": "is-open", "scroll_lock": "no-scroll" } }"#))
        .expect("config loads");

    let mut controller = Controller::mount(page, cfg);
    let _ = controller.handle(page, UiEvent::Click { target: landing.drawer_open });

    assert!(page.class(landing.drawer, "is-open"));
    assert!(page.class(page.body_id(), "no-scroll"));
}
