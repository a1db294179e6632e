//! # Palaver
//!
//! A Dialogflow (API.AI v1) fulfillment webhook framework for Rust.
//!
//! ## Overview
//!
//! Palaver receives intent-resolution requests from the conversational
//! platform, routes them to application handlers by action name, binds the
//! extracted parameters, and serializes the handler's reply into the
//! platform's response envelope.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────┐     ┌─────────────────────────────┐
//! │ palaver-http│────▶│   Agent    │────▶│ handler "math.square"       │
//! │ (axum route │     │ (registry, │────▶│ handler "weather.get"       │
//! │  + auth)    │     │  binding)  │────▶│ default handler             │
//! └─────────────┘     └────────────┘     └─────────────────────────────┘
//! ```
//!
//! - **palaver-core**: message variants, the fulfillment envelope, and the
//!   inbound payload types
//! - **palaver-agent**: the action registry, per-request scope, and the
//!   dispatch algorithm
//! - **palaver-http**: the single POST route, basic-auth gate, and status
//!   mapping
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use palaver::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut agent = Agent::new();
//!     agent.register("core.greet", &["name"], |_scope, args| async move {
//!         let name = args[0].as_str().unwrap_or("stranger");
//!         Some(Fulfillment::from(Message::text(format!("Hello, {name}!"))))
//!     });
//!
//!     serve(ServeConfig::load()?, agent).await?;
//!     Ok(())
//! }
//! ```

pub use palaver_agent as agent;
pub use palaver_core as core;
pub use palaver_http as http;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use palaver::prelude::*;
/// ```
pub mod prelude {
    // Dispatch - main entry point
    pub use palaver_agent::{Agent, DispatchError, DispatchOutcome, RequestScope};

    // Message model and response envelope
    pub use palaver_core::{
        CardButton, CardMessage, Context, CustomMessage, Fulfillment, ImageMessage, Message,
        MessageType, Platform, QuickReplyMessage, TextMessage,
    };

    // HTTP boundary
    pub use palaver_http::{BasicAuth, ServeConfig, serve, serve_with_shutdown, webhook_router};
}
