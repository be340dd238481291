//! localStorage-backed session store.
//! Persistent across page reloads; synchronous, which the session
//! manager's read-modify-write contract relies on.

use widget_core::ports::SessionStore;
use widget_types::{Result, WidgetError};

pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Grab the window's localStorage. Fails in sandboxed iframes and
    /// privacy modes that disable it — callers fall back to memory.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WidgetError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| WidgetError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
