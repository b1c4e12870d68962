use std::error::Error as StdError;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{HttpRequest, HttpResponse, HttpTransport};
use crate::domain::CompletionError;

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
///
/// No timeout is configured here; whatever the client defaults to applies.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn classify(e: reqwest::Error) -> CompletionError {
        let message = error_chain(&e);
        if e.is_connect() || e.is_timeout() || e.is_request() || e.is_body() {
            CompletionError::transport(message)
        } else {
            CompletionError::unexpected(message)
        }
    }
}

/// `outer: cause: root cause`, walking `source()` to the end.
fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some layers repeat their inner error verbatim in their own message.
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, CompletionError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        debug!("ReqwestTransport: {} -> {status}", request.url);
        let body = response.text().await.map_err(Self::classify)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
