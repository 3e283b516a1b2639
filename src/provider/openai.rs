//! OpenAI Chat Completions API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiKey;
use crate::error::SiteGenError;
use crate::types::{ChatMessage, Usage};

use super::http::{bearer_headers, build_client, status_to_error};
use super::{Completion, CompletionProvider, CompletionRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiProvider {
    /// Provider against `base_url` (or the public endpoint), with no client-side timeout.
    pub fn new(base_url: Option<String>) -> Result<Self, SiteGenError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SiteGenError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body<'a>(&self, request: &'a CompletionRequest) -> OpenAiChatRequest<'a> {
        OpenAiChatRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.settings.max_tokens,
            temperature: request.settings.temperature,
            n: request.settings.n,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<Completion, SiteGenError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, url = %url, "OpenAI chat completion");

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "OpenAI returned an error status");
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let raw = resp.text().await?;
        let data: OpenAiChatResponse = serde_json::from_str(&raw)?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SiteGenError::api(status.as_u16(), "No choices in completion response"))?;

        let usage = data.usage.map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        if let Some(ref usage) = usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "OpenAI usage"
            );
        }

        Ok(Completion {
            text: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.as_deref().and_then(|r| r.parse().ok()),
            usage,
        })
    }
}

// OpenAI wire types (internal)

#[derive(Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
    n: u32,
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
