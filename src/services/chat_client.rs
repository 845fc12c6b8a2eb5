use async_trait::async_trait;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::{ChatReply, ChatRequest};
use crate::services::api_client::read_json;
use crate::services::error::ApiError;

/// Webhook del chatbot que genera los consejos (mockeable en tests)
#[async_trait(?Send)]
pub trait AdviceClient {
    async fn request_advice(&self, message: &str) -> Result<ChatReply, ApiError>;
}

#[derive(Clone)]
pub struct ChatClient {
    webhook_url: String,
}

impl ChatClient {
    pub fn new() -> Self {
        Self::with_webhook_url(CONFIG.chat_webhook_url())
    }

    pub fn with_webhook_url(webhook_url: &str) -> Self {
        Self {
            webhook_url: webhook_url.to_string(),
        }
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AdviceClient for ChatClient {
    async fn request_advice(&self, message: &str) -> Result<ChatReply, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        log::info!("💬 [CHAT] Pidiendo consejos a {}", self.webhook_url);

        let response = Request::post(&self.webhook_url)
            .json(&request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}
