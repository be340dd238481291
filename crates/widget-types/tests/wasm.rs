//! WASM-target tests for widget-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use serde_json::json;
use widget_types::config::*;
use widget_types::directive::*;
use widget_types::error::*;
use widget_types::message::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = ChatMessage::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert!(!msg.timestamp.is_empty());
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = ChatMessage::assistant("How can we help?");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "How can we help?");
}

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        r#""assistant""#
    );
}

// ─── Directive Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn directive_service_select_from_wire() {
    let config = json!({
        "services": [{"id": "s1", "name": "Haircut", "price": 40.0}]
    });
    let directive = InputDirective::from_wire(Some("service_select"), Some(&config)).unwrap();
    assert_eq!(directive.input_type(), "service_select");
}

#[wasm_bindgen_test]
fn directive_unknown_type_is_none() {
    let config = json!({"anything": true});
    assert!(InputDirective::from_wire(Some("carousel"), Some(&config)).is_none());
}

#[wasm_bindgen_test]
fn picker_default_date() {
    let config = DateTimePickerConfig {
        min_date: "2024-06-01".to_string(),
        slots: vec![TimeSlot {
            id: "a1".into(),
            date: "2024-06-10".into(),
            time: "14:00".into(),
            staff_name: None,
        }],
    };
    assert_eq!(config.default_date(), "2024-06-10");
}

// ─── Config / Error Tests ────────────────────────────────

#[wasm_bindgen_test]
fn widget_config_defaults() {
    let config = WidgetConfig::new("biz-1");
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.title, DEFAULT_TITLE);
}

#[wasm_bindgen_test]
fn error_display() {
    let err = WidgetError::Network("timed out".to_string());
    assert_eq!(err.to_string(), "Network error: timed out");
}
