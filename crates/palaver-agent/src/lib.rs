//! # Palaver Agent
//!
//! Action routing and dispatch for Palaver fulfillment webhooks.
//!
//! An [`Agent`] maps action identifiers to application handlers. For each
//! inbound request it parses the payload, resolves the action (with an
//! optional default fallback), populates a per-request [`RequestScope`],
//! binds the handler's declared parameters by name, and serializes the
//! returned [`Fulfillment`](palaver_core::Fulfillment) envelope.
//!
//! ```rust,ignore
//! use palaver_agent::Agent;
//! use palaver_core::{Fulfillment, Message};
//!
//! let mut agent = Agent::new();
//! agent.register("core.greet", &["name"], |_scope, args| async move {
//!     let name = args[0].as_str().unwrap_or("stranger");
//!     Some(Fulfillment::from(Message::text(format!("Hello, {name}!"))))
//! });
//! ```

pub mod dispatch;
pub mod handler;
pub mod registry;
pub mod scope;

pub use dispatch::{Agent, DispatchError, DispatchOutcome, DispatchResult};
pub use handler::{BoxFuture, BoxedHandler, ErasedHandler, HandlerFn, into_handler};
pub use registry::{ActionRegistry, Registration};
pub use scope::RequestScope;
