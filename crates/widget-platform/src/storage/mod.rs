pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub mod auto;

pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub use auto::auto_detect_store;
