//! Pick the best available session store.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use widget_core::ports::SessionStore;

use super::{LocalStorageStore, MemoryStore};

/// Open the best available store. Returns a trait object so callers are
/// backend-agnostic. Memory always works, so this cannot fail — the
/// session just won't survive a reload on the fallback path.
pub fn auto_detect_store() -> Rc<dyn SessionStore> {
    match LocalStorageStore::open() {
        Ok(store) => {
            log::info!("Session store: localStorage");
            Rc::new(store)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
