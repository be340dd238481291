//! WASM-target tests for widget-core.
//!
//! Mirrors the grammar and surface unit tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use widget_core::encode;
use widget_core::surface::*;
use widget_types::directive::*;

fn service(id: &str, name: &str, price: f64) -> ServiceOption {
    ServiceOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
        duration_minutes: None,
        description: None,
    }
}

// ─── Grammar Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn encode_single_service() {
    let haircut = service("s1", "Haircut", 40.0);
    assert_eq!(
        encode::service_selection(&[&haircut]),
        "I'd like to book: Haircut [service_id:s1]"
    );
}

#[wasm_bindgen_test]
fn encode_slot() {
    let slot = TimeSlot {
        id: "a1".to_string(),
        date: "2024-06-10".to_string(),
        time: "14:00".to_string(),
        staff_name: None,
    };
    assert_eq!(
        encode::slot_selection(&slot),
        "I'd like to book for Monday, June 10 at 2:00 PM [slot:a1]"
    );
}

#[wasm_bindgen_test]
fn encode_contact_phone_only() {
    assert_eq!(
        encode::contact_details(ContactField::all(), "", "555-1212", ""),
        "Phone: 555-1212"
    );
}

// ─── Surface Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn picker_date_change_clears_slot() {
    let config = DateTimePickerConfig {
        min_date: "2024-06-01".to_string(),
        slots: vec![
            TimeSlot {
                id: "a1".to_string(),
                date: "2024-06-10".to_string(),
                time: "14:00".to_string(),
                staff_name: None,
            },
            TimeSlot {
                id: "b1".to_string(),
                date: "2024-06-11".to_string(),
                time: "09:30".to_string(),
                staff_name: None,
            },
        ],
    };
    let mut surface = DateTimePickerSurface::new(config);
    surface.select_slot("a1");
    assert!(surface.can_submit());
    surface.select_date("2024-06-11");
    assert!(!surface.can_submit());
}

#[wasm_bindgen_test]
fn unknown_directive_falls_back_to_text() {
    let directive =
        InputDirective::from_wire(Some("carousel"), Some(&serde_json::json!({})));
    assert!(InputSurface::from_directive(directive).is_text());
}
