//! Per-request state.
//!
//! One [`RequestScope`] is created for each dispatched request and dropped
//! when the response has been built, so concurrent requests can never
//! observe each other's values. Handlers receive the scope behind an `Arc`
//! and use it to read inbound conversation state and to set the outbound
//! context.

use parking_lot::RwLock;
use serde_json::Value;

use palaver_core::Context;

/// Request-scoped storage for conversation state.
#[derive(Debug, Default)]
pub struct RequestScope {
    inner: RwLock<ScopeInner>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    contexts_in: Vec<Context>,
    intent: Option<String>,
    original_request: Option<Value>,
    context_out: Option<Context>,
}

impl RequestScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// The contexts the platform sent with this request.
    pub fn contexts_in(&self) -> Vec<Context> {
        self.inner.read().contexts_in.clone()
    }

    pub fn set_contexts_in(&self, contexts: Vec<Context>) {
        self.inner.write().contexts_in = contexts;
    }

    /// The resolved intent name, if the request carried one.
    pub fn intent(&self) -> Option<String> {
        self.inner.read().intent.clone()
    }

    pub fn set_intent(&self, intent: impl Into<String>) {
        self.inner.write().intent = Some(intent.into());
    }

    /// The opaque original platform request, if present.
    pub fn original_request(&self) -> Option<Value> {
        self.inner.read().original_request.clone()
    }

    pub fn set_original_request(&self, request: Value) {
        self.inner.write().original_request = Some(request);
    }

    /// The outbound context set during handling, if any.
    pub fn context_out(&self) -> Option<Context> {
        self.inner.read().context_out.clone()
    }

    /// Sets the context to send back to the platform with the response.
    pub fn set_context_out(&self, context: Context) {
        self.inner.write().context_out = Some(context);
    }

    /// Removes and returns the outbound context.
    pub fn take_context_out(&self) -> Option<Context> {
        self.inner.write().context_out.take()
    }
}
