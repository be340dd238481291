//! HTTP chat transport.
//!
//! Speaks the four business-scoped, session-scoped endpoints over the
//! browser `fetch()` via gloo-net. One request per operation, no
//! automatic retries; non-2xx and network failures map to typed errors
//! the controller degrades on.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use widget_core::ports::{AgentReply, ChatTransport, Greeting};
use widget_types::{message::ChatMessage, Result, WidgetError};

pub struct HttpTransport {
    api_base: String,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { api_base }
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn fetch_history(
        &self,
        business_id: &str,
        session_id: &str,
    ) -> Result<Vec<ChatMessage>> {
        let url = format!(
            "{}/chat/history/{}/{}",
            self.api_base, business_id, session_id
        );
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(api_error(response).await);
        }
        let data: HistoryResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;
        Ok(data.messages)
    }

    async fn fetch_greeting(&self, business_id: &str, session_id: &str) -> Result<Greeting> {
        let url = format!(
            "{}/chat/greeting/{}?session_id={}",
            self.api_base, business_id, session_id
        );
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(api_error(response).await);
        }
        let data: GreetingResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;
        Ok(Greeting {
            business_name: data.business_name,
            message: data.message,
        })
    }

    async fn post_message(
        &self,
        business_id: &str,
        session_id: &str,
        message: &str,
    ) -> Result<AgentReply> {
        let url = format!("{}/chat/message", self.api_base);
        let body = PostMessageRequest {
            business_id,
            session_id,
            message,
        };
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| WidgetError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(api_error(response).await);
        }
        let data: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;
        Ok(AgentReply {
            message: data.message,
            input_type: data.input_type,
            input_config: data.input_config,
        })
    }

    async fn delete_session(&self, business_id: &str, session_id: &str) -> Result<()> {
        let url = format!(
            "{}/chat/session/{}/{}",
            self.api_base, business_id, session_id
        );
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

async fn api_error(response: Response) -> WidgetError {
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    WidgetError::Api { status, message }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct GreetingResponse {
    #[serde(default)]
    business_name: Option<String>,
    message: String,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    business_id: &'a str,
    session_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct PostMessageResponse {
    message: String,
    #[serde(default)]
    input_type: Option<String>,
    #[serde(default)]
    input_config: Option<Value>,
}
