//! HTML generation: fixed prompt construction plus one completion call.

use tracing::debug;

use crate::config::SiteGenConfig;
use crate::error::Result;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::types::{ChatMessage, GenerationSettings};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Instructs the model to return markup only.
pub const SYSTEM_PROMPT: &str = "You are an assistant that generates clean, semantic HTML websites \
     without any explanation or surrounding text.";

/// The two-message conversation for a site description.
pub fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("Create a website: {prompt}")),
    ]
}

/// Build the completion request for `prompt` against `model`.
pub fn build_request(prompt: &str, model: &str) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        messages: build_messages(prompt),
        settings: GenerationSettings::default(),
    }
}

/// Generate an HTML document for `prompt`.
///
/// Fails with [`SiteGenError::MissingCredential`](crate::error::SiteGenError::MissingCredential)
/// before the provider is touched when no API key is configured. Provider
/// errors are returned unchanged. The returned string is the first choice's
/// text exactly as received.
pub async fn generate_html(
    provider: &dyn CompletionProvider,
    config: &SiteGenConfig,
    prompt: &str,
    model: &str,
) -> Result<String> {
    let api_key = config.require_api_key()?;
    let request = build_request(prompt, model);

    debug!(
        provider = provider.provider_name(),
        model,
        prompt_len = prompt.len(),
        "requesting completion"
    );
    let completion = provider.complete(api_key, &request).await?;
    debug!(
        finish_reason = ?completion.finish_reason,
        chars = completion.text.len(),
        "completion received"
    );

    Ok(completion.text)
}
