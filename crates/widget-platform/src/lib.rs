//! Browser platform adapters for the chat widget.
//!
//! Implements the `widget-core` port traits: session storage over
//! localStorage (with an in-memory fallback) and the chat transport
//! over `fetch()` via gloo-net. The wasm-only adapters are target-gated
//! so the rest of the workspace builds and tests natively.

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod transport;
