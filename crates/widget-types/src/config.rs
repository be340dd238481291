use serde::{Deserialize, Serialize};

/// Widget configuration, declared by the embedding host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Identifier of the business this widget belongs to
    pub business_id: String,
    /// Base URL of the chat API
    pub api_base: String,
    /// Header title shown until the server reports a business name
    pub title: String,
}

impl WidgetConfig {
    pub fn new(business_id: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TITLE: &str = "Chat with us";

/// Shown when the greeting endpoint fails — the user must never see a
/// broken opening state.
pub const FALLBACK_GREETING: &str = "Hi there! How can we help you today?";

/// Appended when a post fails, returning control to text input.
pub const SEND_FAILURE_REPLY: &str =
    "Sorry, something went wrong on our end. Please try sending that again.";
