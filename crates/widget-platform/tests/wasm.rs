//! WASM-target tests for widget-platform (Node.js runtime).
//!
//! Tests MemoryStore and the session manager over it under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and fetch tests require a browser environment.

use wasm_bindgen_test::*;

use std::rc::Rc;
use widget_core::ports::SessionStore;
use widget_core::session::SessionManager;
use widget_platform::storage::MemoryStore;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("key1", "value1").unwrap();
    assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_overwrite() {
    let store = MemoryStore::new();
    store.set("key", "v1").unwrap();
    store.set("key", "v2").unwrap();
    assert_eq!(store.get("key").unwrap(), Some("v2".to_string()));
}

#[wasm_bindgen_test]
fn memory_store_remove() {
    let store = MemoryStore::new();
    store.set("key", "val").unwrap();
    store.remove("key").unwrap();
    assert!(store.get("key").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_remove_nonexistent() {
    let store = MemoryStore::new();
    store.remove("nonexistent").unwrap();
}

// ─── SessionManager over MemoryStore ─────────────────────

#[wasm_bindgen_test]
fn session_id_is_stable() {
    let manager = SessionManager::new(Rc::new(MemoryStore::new()));
    let first = manager.get_or_create("biz-1");
    assert_eq!(manager.get_or_create("biz-1"), first);
}

#[wasm_bindgen_test]
fn session_rotation_yields_fresh_id() {
    let manager = SessionManager::new(Rc::new(MemoryStore::new()));
    let first = manager.get_or_create("biz-1");
    let rotated = manager.rotate("biz-1");
    assert_ne!(first, rotated);
    assert_eq!(manager.get_or_create("biz-1"), rotated);
}
