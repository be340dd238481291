//! Session identity manager.
//!
//! One opaque session id per business, created lazily on first use and
//! rotated wholesale on reset. The id is persisted through the injected
//! `SessionStore` so a page reload resumes the same conversation.

use std::rc::Rc;

use crate::ports::SessionStore;

pub struct SessionManager {
    store: Rc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    fn storage_key(business_id: &str) -> String {
        format!("chat_widget:session:{}", business_id)
    }

    /// Return the stored id for this business, creating and persisting
    /// one if absent. Store failures degrade to a fresh in-memory id —
    /// the conversation works, it just won't survive a reload.
    pub fn get_or_create(&self, business_id: &str) -> String {
        let key = Self::storage_key(business_id);
        match self.store.get(&key) {
            Ok(Some(id)) if !id.is_empty() => id,
            Ok(_) => self.create(&key),
            Err(e) => {
                log::warn!("Session store read failed ({}): {}", self.store.backend_name(), e);
                self.create(&key)
            }
        }
    }

    /// Discard the stored id unconditionally and mint a fresh one.
    /// The caller is responsible for the (best-effort) server-side
    /// delete; rotation never waits on it and never fails.
    pub fn rotate(&self, business_id: &str) -> String {
        let key = Self::storage_key(business_id);
        if let Err(e) = self.store.remove(&key) {
            log::warn!("Session store remove failed ({}): {}", self.store.backend_name(), e);
        }
        self.create(&key)
    }

    fn create(&self, key: &str) -> String {
        let id = new_session_id();
        if let Err(e) = self.store.set(key, &id) {
            log::warn!("Session store write failed ({}): {}", self.store.backend_name(), e);
        }
        id
    }
}

/// Opaque session token: time component + random component.
fn new_session_id() -> String {
    format!(
        "sess_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple()
    )
}
