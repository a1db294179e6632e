//! The webhook HTTP boundary.
//!
//! Exactly one POST route is registered at the configured path. Everything
//! beyond transport framing (body extraction, the basic-auth short-circuit,
//! status and content-type assignment) is delegated to the
//! [`Agent`](palaver_agent::Agent).
//!
//! Status mapping:
//!
//! | dispatch result            | status | body              |
//! |----------------------------|--------|-------------------|
//! | fulfilled                  | 200    | JSON envelope     |
//! | handler returned nothing   | 400    | empty             |
//! | malformed payload          | 400    | empty             |
//! | failed auth                | 401    | empty             |
//! | unroutable action          | 500    | empty             |

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use palaver_agent::{Agent, DispatchError, DispatchOutcome};

use crate::auth::{BasicAuth, authorized};
use crate::config::ServeConfig;

/// Shared state behind the webhook route.
struct AppState {
    agent: Agent,
    basic_auth: Option<BasicAuth>,
}

/// Builds the axum [`Router`] serving the webhook at `path`.
///
/// Exposed separately from [`serve`] so applications can mount the route on
/// an existing router and tests can drive it in-process.
pub fn webhook_router(agent: Agent, path: &str, basic_auth: Option<BasicAuth>) -> Router {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    Router::new()
        .route(&path, post(webhook))
        .with_state(Arc::new(AppState { agent, basic_auth }))
}

/// Axum handler for the single webhook POST route.
async fn webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(expected) = &state.basic_auth
        && !authorized(&headers, expected)
    {
        debug!("rejecting request with missing or mismatched credentials");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match state.agent.dispatch(&body).await {
        Ok(DispatchOutcome::Fulfilled(json)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Ok(DispatchOutcome::NoResult) => StatusCode::BAD_REQUEST.into_response(),
        Err(e @ DispatchError::MalformedPayload(_)) => {
            warn!(error = %e, "rejecting malformed payload");
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(e) => {
            error!(error = %e, "dispatch failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Binds the configured address and serves the webhook until the process
/// is stopped.
pub async fn serve(config: ServeConfig, agent: Agent) -> std::io::Result<()> {
    serve_with_shutdown(config, agent, CancellationToken::new()).await
}

/// Like [`serve`], but shuts down gracefully when `shutdown` is cancelled.
pub async fn serve_with_shutdown(
    config: ServeConfig,
    agent: Agent,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let router = webhook_router(agent, &config.path, config.basic_auth.clone());
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(addr = %addr, path = %config.path, "webhook server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
}
