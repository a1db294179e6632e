//! The action dispatcher.
//!
//! [`Agent`] owns the action registry and drives one dispatch per inbound
//! request: parse the payload, resolve the action, build the request scope,
//! bind parameters in declared order, invoke the handler, attach the
//! outbound context, and serialize the response envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut agent = Agent::new();
//! agent.register("math.square", &["number"], |_scope, args| async move {
//!     let n = args[0].as_f64()?;
//!     Some(Fulfillment::from(Message::text((n * n).to_string())))
//! });
//!
//! let outcome = agent.dispatch(body).await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use palaver_core::{Fulfillment, WebhookRequest};

use crate::handler::into_handler;
use crate::registry::{ActionRegistry, Registration};
use crate::scope::RequestScope;

/// Errors that can occur while dispatching a request.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The request body was not valid JSON or was missing required fields.
    #[error("malformed webhook payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// No handler is bound to the action and no default handler is set.
    #[error("no handler for action '{0}' and no default specified")]
    UnroutableAction(String),

    /// The response envelope could not be serialized.
    #[error("failed to serialize fulfillment: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// The terminal state of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The handler returned an envelope; carries the serialized JSON body.
    Fulfilled(String),
    /// The handler returned nothing. Translates to an empty 400 response,
    /// the documented way for a handler to signal "no answer".
    NoResult,
}

/// Routes intent-resolution requests to registered action handlers.
///
/// Handlers are registered during application setup via [`Agent::register`]
/// and [`Agent::register_default`]; at request time the agent is shared
/// immutably across connections.
#[derive(Default)]
pub struct Agent {
    registry: ActionRegistry,
}

impl Agent {
    /// Creates an agent with no registered handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an action.
    ///
    /// `params` are the parameter names the handler expects, in the order
    /// the bound values will be passed. Registering the same action again
    /// replaces the earlier handler.
    pub fn register<F, Fut>(&mut self, action: impl Into<String>, params: &[&str], handler: F)
    where
        F: Fn(Arc<RequestScope>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<Fulfillment>> + Send + 'static,
    {
        self.registry.insert(
            action,
            Registration::new(
                params.iter().map(|p| p.to_string()).collect(),
                into_handler(handler),
            ),
        );
    }

    /// Registers the default handler, invoked when no action matches.
    pub fn register_default<F, Fut>(&mut self, params: &[&str], handler: F)
    where
        F: Fn(Arc<RequestScope>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<Fulfillment>> + Send + 'static,
    {
        self.registry.insert_default(Registration::new(
            params.iter().map(|p| p.to_string()).collect(),
            into_handler(handler),
        ));
    }

    /// Read-only access to the registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Dispatches one raw request body to its handler.
    pub async fn dispatch(&self, body: &[u8]) -> DispatchResult<DispatchOutcome> {
        let request = WebhookRequest::from_slice(body).map_err(DispatchError::MalformedPayload)?;
        let action = request.result.action.clone();

        let registration = self
            .registry
            .resolve(&action)
            .ok_or_else(|| DispatchError::UnroutableAction(action.clone()))?;

        // Fresh scope per request; concurrent dispatches never share one.
        let scope = Arc::new(RequestScope::new());
        scope.set_intent(request.result.metadata.intent_name);
        scope.set_contexts_in(request.result.contexts);
        if let Some(original) = request.original_request {
            scope.set_original_request(original);
        }

        // Bind by declared name, in declared order. Missing names bind
        // null; undeclared inbound parameters are ignored.
        let args: Vec<Value> = registration
            .params()
            .iter()
            .map(|name| {
                request
                    .result
                    .parameters
                    .get(name)
                    .cloned()
                    .unwrap_or(Value::Null)
            })
            .collect();

        debug!(action = %action, params = registration.params().len(), "dispatching action");

        match registration.handler().call(scope.clone(), args).await {
            None => {
                debug!(action = %action, "handler returned no result");
                Ok(DispatchOutcome::NoResult)
            }
            Some(mut fulfillment) => {
                if let Some(context) = scope.take_context_out() {
                    fulfillment.set_context_out(context);
                }
                let json =
                    serde_json::to_string(&fulfillment).map_err(DispatchError::Serialize)?;
                Ok(DispatchOutcome::Fulfilled(json))
            }
        }
    }
}
