//! Inbound webhook payload types.
//!
//! The platform delivers intent-resolution requests as JSON. Only the fields
//! the dispatcher needs are modeled; everything else in the envelope
//! (timestamps, session IDs, scoring metadata) is ignored on parse.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A conversational context: a named, lifespan-limited parameter bag the
/// platform carries across turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name.
    pub name: String,
    /// Remaining number of turns this context stays active.
    #[serde(default)]
    pub lifespan: i64,
    /// Arbitrary parameters attached to the context.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Context {
    /// Creates a context with an empty parameter bag.
    pub fn new(name: impl Into<String>, lifespan: i64) -> Self {
        Self {
            name: name.into(),
            lifespan,
            parameters: Map::new(),
        }
    }

    /// Adds a parameter to the context.
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// A parsed intent-resolution request.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    /// The resolved query: action, parameters, contexts, intent metadata.
    pub result: QueryResult,
    /// The original platform request, passed through opaquely.
    #[serde(rename = "originalRequest", default)]
    pub original_request: Option<Value>,
}

impl WebhookRequest {
    /// Parses a request from a raw JSON body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// The `result` object of an intent-resolution request.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    /// Action identifier naming which fulfillment logic should run.
    pub action: String,
    /// Intent metadata.
    pub metadata: Metadata,
    /// Parameters extracted by the platform, keyed by parameter name.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Contexts active for this turn of the conversation.
    #[serde(default)]
    pub contexts: Vec<Context>,
}

/// Intent metadata attached to a query result.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    /// Display name of the resolved intent.
    #[serde(rename = "intentName")]
    pub intent_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> Value {
        json!({
            "id": "91b20aa5-9ccf-498d-8944-5d3a32ab1b37",
            "timestamp": "2018-02-17T11:26:58.76Z",
            "lang": "en",
            "result": {
                "source": "agent",
                "resolvedQuery": "hello",
                "action": "hello",
                "parameters": {"name": "Ada"},
                "contexts": [
                    {"name": "greeting", "lifespan": 2, "parameters": {"mood": "happy"}}
                ],
                "metadata": {
                    "intentId": "6e4d06c7-bdd0-4e44-b130-a1169f2920c8",
                    "webhookUsed": "true",
                    "intentName": "hello"
                },
                "score": 1.0
            },
            "status": {"code": 200, "errorType": "success"},
            "sessionId": "926e72d8-35ee-4640-8a69-a77c87f475f5"
        })
    }

    #[test]
    fn parses_a_full_platform_request() {
        let body = serde_json::to_vec(&sample_request()).unwrap();
        let request = WebhookRequest::from_slice(&body).unwrap();

        assert_eq!(request.result.action, "hello");
        assert_eq!(request.result.metadata.intent_name, "hello");
        assert_eq!(request.result.parameters["name"], json!("Ada"));
        assert_eq!(request.result.contexts.len(), 1);
        assert_eq!(request.result.contexts[0].name, "greeting");
        assert_eq!(request.result.contexts[0].lifespan, 2);
    }

    #[test]
    fn contexts_and_parameters_default_to_empty() {
        let body = json!({
            "result": {
                "action": "hello",
                "metadata": {"intentName": "hello"}
            }
        });
        let request = WebhookRequest::from_slice(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert!(request.result.parameters.is_empty());
        assert!(request.result.contexts.is_empty());
        assert!(request.original_request.is_none());
    }

    #[test]
    fn missing_action_is_a_parse_error() {
        let body = json!({
            "result": {"metadata": {"intentName": "hello"}}
        });
        assert!(WebhookRequest::from_slice(&serde_json::to_vec(&body).unwrap()).is_err());
    }

    #[test]
    fn original_request_is_passed_through_opaquely() {
        let body = json!({
            "result": {"action": "a", "metadata": {"intentName": "i"}},
            "originalRequest": {"source": "telegram", "data": {"chat_id": 42}}
        });
        let request = WebhookRequest::from_slice(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(
            request.original_request.unwrap()["data"]["chat_id"],
            json!(42)
        );
    }

    #[test]
    fn context_round_trips() {
        let context = Context::new("some-context", 10).with_parameter("key", json!("value"));
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(
            value,
            json!({"name": "some-context", "lifespan": 10, "parameters": {"key": "value"}})
        );
        let back: Context = serde_json::from_value(value).unwrap();
        assert_eq!(back, context);
    }
}
