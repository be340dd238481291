//! Widget App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). It assembles
//! the platform adapters, hands them to the egui shell, and exposes the
//! embedding contract: the host page declares a business id (and
//! optional API base) on the widget's canvas element and the widget
//! self-initializes from that declaration. Hosts that want lifecycle
//! control call `mount` instead and hold the returned handle.
//!
//! Browser-only: on other targets this crate is an empty library.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod entry;

#[cfg(target_arch = "wasm32")]
pub use entry::{mount, WidgetHandle};
