use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::application::{ChatClient, HttpRequest, HttpTransport};
use crate::domain::CompletionError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
const COMPLETIONS_PATH: &str = "/chat/completions";
const MODEL: &str = "openai/gpt-4";
const TEMPERATURE: f64 = 0.7;
pub const APP_TITLE: &str = "JunieVest - Personal Finance Assistant";

/// Returned for blank input without contacting the API.
pub const EMPTY_INPUT_REPLY: &str = "I'd be happy to help! Please ask me a question about budgeting, saving, investing, or any other personal finance topic.";

const SYSTEM_PROMPT: &str = "You are Junie, and you're like that friend who happens to be one of the top wealth advisors in the country. You run a popular YouTube channel with the latest financial tips and have over 1M followers on X, but you're super down-to-earth and talk like you're just hanging out with a buddy. You explain money stuff in a way that actually makes sense - no fancy jargon or cookie-cutter advice. You're warm, encouraging, and genuinely excited to help people build wealth. Think of yourself as that friend who's made it big but still remembers where they came from and wants to lift everyone up with them. Keep it real, keep it friendly, and make complex financial concepts feel totally doable.";

/// Immutable settings for [`CompletionClient`], resolved once at startup.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Sent as `HTTP-Referer` to identify the calling origin.
    pub origin: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl CompletionConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Construct from environment variables:
    ///
    /// | Variable                  | Default                        |
    /// |---------------------------|--------------------------------|
    /// | `OPENROUTER_API_KEY`      | falls back to `VITE_OPENROUTER_API_KEY`, else none |
    /// | `OPENROUTER_BASE_URL`     | `https://openrouter.ai/api/v1` |
    /// | `JUNIEVEST_ORIGIN`        | `http://localhost:3000`        |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let key = non_empty_var("OPENROUTER_API_KEY")
            .or_else(|| non_empty_var("VITE_OPENROUTER_API_KEY"));
        let base = non_empty_var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let origin = non_empty_var("JUNIEVEST_ORIGIN")
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Self::new(key).with_base_url(base).with_origin(origin)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn encode_payload<T: Serialize>(payload: &T) -> Result<serde_json::Value, CompletionError> {
    serde_json::to_value(payload).map_err(|e| {
        error!("CompletionClient: failed to encode request: {e}");
        CompletionError::unexpected(format!("failed to encode request: {e}"))
    })
}

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    temperature: f64,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Every level is optional so shape problems surface as typed errors.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`ChatClient`] for the OpenRouter chat-completions API.
///
/// Sends the fixed Junie persona plus the raw user input, one request per call,
/// and validates the response shape. Holds no mutable state, so concurrent calls
/// are independent. No retries, no streaming, no history.
pub struct CompletionClient {
    transport: Arc<dyn HttpTransport>,
    api_key: Option<String>,
    url: String,
    origin: String,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig, transport: Arc<dyn HttpTransport>) -> Self {
        if config.api_key.is_none() {
            error!("CompletionClient: OpenRouter API key not found in environment variables");
        }
        let url = format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            transport,
            api_key: config.api_key,
            url,
            origin: config.origin,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(&self, api_key: &str, input: &str) -> Result<HttpRequest, CompletionError> {
        let payload = ApiRequest {
            model: MODEL,
            messages: [
                ApiMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ApiMessage {
                    role: "user",
                    content: input,
                },
            ],
            temperature: TEMPERATURE,
        };
        let body = encode_payload(&payload)?;

        Ok(HttpRequest {
            url: self.url.clone(),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {api_key}")),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("HTTP-Referer".to_string(), self.origin.clone()),
                ("X-Title".to_string(), APP_TITLE.to_string()),
            ],
            body,
        })
    }

    /// Pull `choices[0].message.content` out of a success body.
    fn extract_reply(body: &str) -> Result<String, CompletionError> {
        let parsed: ApiResponse = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("CompletionClient: unparseable API response ({e}): {body}");
                return Err(CompletionError::MalformedResponse);
            }
        };

        let first = match parsed.choices.and_then(|c| c.into_iter().next()) {
            Some(choice) => choice,
            None => {
                error!("CompletionClient: no choices in API response: {body}");
                return Err(CompletionError::MalformedResponse);
            }
        };

        let Some(message) = first.message else {
            error!("CompletionClient: first choice has no message: {body}");
            return Err(CompletionError::MalformedResponse);
        };

        match message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => {
                error!("CompletionClient: empty response content from API");
                Err(CompletionError::EmptyReply)
            }
        }
    }
}

#[async_trait]
impl ChatClient for CompletionClient {
    async fn get_reply(&self, input: &str) -> Result<String, CompletionError> {
        if input.trim().is_empty() {
            return Ok(EMPTY_INPUT_REPLY.to_string());
        }

        let Some(api_key) = self.api_key.as_deref() else {
            error!("CompletionClient: cannot make API call, OpenRouter API key is missing");
            return Err(CompletionError::Configuration);
        };

        let request = self.build_request(api_key, input)?;

        info!("CompletionClient: making request to OpenRouter API...");
        let response = match self.transport.post_json(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("CompletionClient: error getting bot response: {e:?}");
                return Err(e);
            }
        };

        if !response.is_success() {
            error!(
                status = response.status,
                status_text = %response.status_text,
                error = %response.body,
                "CompletionClient: API request failed"
            );
            return Err(CompletionError::http(
                response.status,
                response.status_text,
                response.body,
            ));
        }

        info!("CompletionClient: API request successful");
        Self::extract_reply(&response.body)
    }
}
