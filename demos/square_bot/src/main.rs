//! Square Bot Example
//!
//! A small fulfillment agent that answers the `math.square` action with the
//! square of its `number` parameter, and greets everything else through a
//! default handler.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package square-bot
//!
//! curl -X POST localhost:8080/webhook \
//!   -H 'Content-Type: application/json' \
//!   -d '{"result": {"action": "math.square",
//!                   "parameters": {"number": "7"},
//!                   "metadata": {"intentName": "square"}}}'
//! ```
//!
//! Configuration is read from `palaver.toml` and `PALAVER_*` environment
//! variables (e.g. `PALAVER_PORT=9090`).

use anyhow::Result;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use palaver::prelude::*;

/// Parses a parameter the platform may deliver as a number or a string.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut agent = Agent::new();

    agent.register("math.square", &["number"], |_scope, args| async move {
        let n = as_number(&args[0])?;
        Some(Fulfillment::from(Message::text((n * n).to_string())))
    });

    agent.register_default(&[], |scope, _args| async move {
        let intent = scope.intent().unwrap_or_default();
        scope.set_context_out(Context::new("last-intent", 5));
        Some(Fulfillment::from(Message::text(format!(
            "I don't know how to handle '{intent}' yet."
        ))))
    });

    let config = ServeConfig::load()?;
    info!(addr = %config.bind_addr(), path = %config.path, "starting square bot");
    serve(config, agent).await?;
    Ok(())
}
