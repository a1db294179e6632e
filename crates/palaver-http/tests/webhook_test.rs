//! End-to-end tests driving the webhook route in-process.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tower::ServiceExt;

use palaver_agent::Agent;
use palaver_core::{Context, Fulfillment, Message};
use palaver_http::{BasicAuth, webhook_router};

fn platform_request(action: &str) -> String {
    json!({
        "result": {
            "action": action,
            "parameters": {},
            "contexts": [],
            "metadata": {"intentName": action}
        }
    })
    .to_string()
}

async fn post(router: Router, body: &str, authorization: Option<&str>) -> (StatusCode, Option<String>, Vec<u8>) {
    let mut request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    let response = router
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, bytes.to_vec())
}

fn greeting_agent() -> Agent {
    let mut agent = Agent::new();
    agent.register("hello", &[], |scope, _args| async move {
        scope.set_context_out(
            Context::new("some-context", 10).with_parameter("key", json!("value")),
        );
        Some(Fulfillment::from(Message::text("Hi there!")))
    });
    agent
}

#[tokio::test]
async fn fulfilled_dispatch_yields_json_envelope() {
    let router = webhook_router(greeting_agent(), "/webhook", None);
    let (status, content_type, body) = post(router, &platform_request("hello"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!({
            "messages": [{"type": 0, "speech": "Hi there!"}],
            "contextOut": {
                "name": "some-context",
                "lifespan": 10,
                "parameters": {"key": "value"}
            }
        })
    );
}

#[tokio::test]
async fn handler_without_result_yields_empty_400() {
    let mut agent = Agent::new();
    agent.register("silent", &[], |scope, _args| async move {
        scope.set_context_out(Context::new("ignored", 1));
        None
    });
    let router = webhook_router(agent, "/webhook", None);

    let (status, _content_type, body) = post(router, &platform_request("silent"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn malformed_payload_yields_empty_400() {
    let router = webhook_router(greeting_agent(), "/webhook", None);
    let (status, _content_type, body) = post(router, "{not json", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unroutable_action_yields_500() {
    let router = webhook_router(Agent::new(), "/webhook", None);
    let (status, _content_type, body) = post(router, &platform_request("mystery"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn mismatched_credentials_never_reach_the_handler() {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = invocations.clone();

    let mut agent = Agent::new();
    agent.register("hello", &[], move |_scope, _args| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(Fulfillment::from(Message::text("Hi there!")))
        }
    });
    let auth = Some(BasicAuth::new("agent", "hunter2"));
    let router = webhook_router(agent, "/webhook", auth);

    // Absent credentials.
    let (status, _, body) = post(router.clone(), &platform_request("hello"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_empty());

    // Wrong credentials.
    let wrong = format!("Basic {}", STANDARD.encode("agent:wrong"));
    let (status, _, _) = post(router.clone(), &platform_request("hello"), Some(&wrong)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(invocations.load(Ordering::SeqCst), 0);

    // Matching credentials go through.
    let right = format!("Basic {}", STANDARD.encode("agent:hunter2"));
    let (status, _, _) = post(router, &platform_request("hello"), Some(&right)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn only_the_configured_route_and_method_exist() {
    let router = webhook_router(greeting_agent(), "/webhook", None);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/elsewhere")
                .body(Body::from(platform_request("hello")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/webhook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn path_without_leading_slash_is_normalized() {
    let router = webhook_router(greeting_agent(), "webhook", None);
    let (status, _, _) = post(router, &platform_request("hello"), None).await;
    assert_eq!(status, StatusCode::OK);
}
