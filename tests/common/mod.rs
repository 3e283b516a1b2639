//! Shared test helpers and stub provider.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use sitegen::config::ApiKey;
use sitegen::error::SiteGenError;
use sitegen::provider::{Completion, CompletionProvider, CompletionRequest};

type Responder = Box<dyn Fn() -> Result<Completion, SiteGenError> + Send + Sync>;

/// A provider that answers from a canned responder and records every call.
pub struct StubProvider {
    responder: Responder,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    /// Always answer with a completion carrying `text`.
    pub fn returning(text: &str) -> Self {
        let text = text.to_string();
        Self::with_responder(move || Ok(Completion::text(text.clone())))
    }

    /// Always fail with the error built by `make_error`.
    pub fn failing(make_error: impl Fn() -> SiteGenError + Send + Sync + 'static) -> Self {
        Self::with_responder(move || Err(make_error()))
    }

    fn with_responder(
        responder: impl Fn() -> Result<Completion, SiteGenError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(
        &self,
        _api_key: &ApiKey,
        request: &CompletionRequest,
    ) -> Result<Completion, SiteGenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)()
    }
}
