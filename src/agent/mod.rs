pub mod wire;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::config::Config;
use crate::errors::AppError;
use wire::{upstream_error_message, GenerateContentRequest, GenerateContentResponse};

/// A hosted model that answers a fully assembled conversation with plain text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AppError>;
}

/// Gemini `generateContent` over REST. One call per request, no retry.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.api_base_url, config.model
            ),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AppError> {
        debug!("Sending {} content(s) to {}", request.contents.len(), self.endpoint);

        // The key travels in a header so it never shows up in logged URLs.
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        if !status.is_success() {
            error!("Error from Gemini API ({status}): {body}");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::MalformedResponse { message: format!("invalid JSON body: {e}") }
        })?;
        parsed.into_first_text()
    }
}
