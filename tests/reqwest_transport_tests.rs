//! End-to-end tests over real HTTP against a local stand-in for the
//! completion endpoint.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Json;
use serde_json::{json, Value};

use junievest::{
    ChatClient, CompletionClient, CompletionConfig, CompletionError, ReqwestTransport, APP_TITLE,
};

#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

fn client_for(addr: SocketAddr, api_key: &str) -> CompletionClient {
    let config = CompletionConfig::new(Some(api_key.to_string()))
        .with_base_url(format!("http://{addr}/api/v1"))
        .with_origin("http://localhost:3000");
    CompletionClient::new(config, Arc::new(ReqwestTransport::new()))
}

#[tokio::test]
async fn posts_persona_and_input_and_returns_first_choice() {
    let seen = Seen::default();

    async fn handler(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        seen.requests.lock().unwrap().push((headers, body));
        Json(json!({"choices": [{"message": {"content": "Pay yourself first."}}]}))
    }

    let app = axum::Router::new()
        .route("/api/v1/chat/completions", post(handler))
        .with_state(seen.clone());
    let addr = serve(app).await;

    let reply = client_for(addr, "sk-test")
        .get_reply("How do I save more?")
        .await
        .expect("reply");
    assert_eq!(reply, "Pay yourself first.");

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (headers, body) = &requests[0];
    assert_eq!(headers["authorization"], "Bearer sk-test");
    assert_eq!(headers["x-title"], APP_TITLE);
    assert_eq!(headers["http-referer"], "http://localhost:3000");
    assert!(headers["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(body["model"], "openai/gpt-4");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "How do I save more?");
}

#[tokio::test]
async fn unauthorized_response_becomes_http_error() {
    async fn handler() -> (StatusCode, &'static str) {
        (StatusCode::UNAUTHORIZED, "Invalid API key")
    }

    let app = axum::Router::new().route("/api/v1/chat/completions", post(handler));
    let addr = serve(app).await;

    let err = client_for(addr, "bad-key")
        .get_reply("test question")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "API request failed: 401 Unauthorized");
    assert_eq!(
        err,
        CompletionError::http(401, "Unauthorized", "Invalid API key")
    );
}

#[tokio::test]
async fn empty_content_over_the_wire_is_empty_reply() {
    async fn handler() -> Json<Value> {
        Json(json!({"choices": [{"message": {"content": ""}}]}))
    }

    let app = axum::Router::new().route("/api/v1/chat/completions", post(handler));
    let addr = serve(app).await;

    let err = client_for(addr, "k")
        .get_reply("test question")
        .await
        .unwrap_err();
    assert_eq!(err, CompletionError::EmptyReply);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(addr, "k")
        .get_reply("test question")
        .await
        .unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    let message = err.to_string().to_lowercase();
    assert!(
        message.contains("connection refused"),
        "cause missing from transport error: {message}"
    );
}
