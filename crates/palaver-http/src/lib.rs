//! # Palaver HTTP
//!
//! Axum HTTP boundary for Palaver fulfillment webhooks: a single POST
//! route, an optional basic-auth gate, and the translation of dispatch
//! outcomes into HTTP statuses.
//!
//! ```rust,ignore
//! use palaver_agent::Agent;
//! use palaver_http::{ServeConfig, serve};
//!
//! let mut agent = Agent::new();
//! // ... register handlers ...
//! serve(ServeConfig::load()?, agent).await?;
//! ```

pub mod auth;
pub mod config;
pub mod server;

pub use auth::BasicAuth;
pub use config::{ConfigError, ConfigResult, ServeConfig};
pub use server::{serve, serve_with_shutdown, webhook_router};
