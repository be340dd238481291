//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `widget-core` (pure Rust).
//! Implementations live in `widget-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde_json::Value;
use widget_types::{message::ChatMessage, Result};

// ─── Session Store Port ──────────────────────────────────────

/// Synchronous key-value storage for session identity.
///
/// Deliberately not async: the browser backend is localStorage, and the
/// session manager relies on no suspension point between reading and
/// writing an identifier.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Chat Transport Port ─────────────────────────────────────

/// The opening assistant message for a fresh session.
#[derive(Debug, Clone)]
pub struct Greeting {
    pub business_name: Option<String>,
    pub message: String,
}

/// The agent's reply to a posted message. `input_type`/`input_config`
/// are carried raw; the controller parses them defensively.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub message: String,
    pub input_type: Option<String>,
    pub input_config: Option<Value>,
}

/// The only boundary that talks to the network. Four operations, one
/// round trip each; nothing is retried automatically.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn fetch_history(&self, business_id: &str, session_id: &str)
        -> Result<Vec<ChatMessage>>;

    async fn fetch_greeting(&self, business_id: &str, session_id: &str) -> Result<Greeting>;

    async fn post_message(
        &self,
        business_id: &str,
        session_id: &str,
        message: &str,
    ) -> Result<AgentReply>;

    async fn delete_session(&self, business_id: &str, session_id: &str) -> Result<()>;
}
