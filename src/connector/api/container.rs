use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, ChatSessionUseCase};
use crate::connector::adapter::{
    CompletionClient, CompletionConfig, MockChatClient, ReqwestTransport,
};

/// Command-line overrides layered over [`CompletionConfig::from_env`].
#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Use the offline [`MockChatClient`] instead of the completion API.
    pub mock: bool,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub origin: Option<String>,
}

impl ContainerConfig {
    /// Resolve the effective completion settings: flags win over the environment.
    pub fn completion_config(&self) -> CompletionConfig {
        let mut config = CompletionConfig::from_env();
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            config.api_key = Some(key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(origin) = &self.origin {
            config = config.with_origin(origin.clone());
        }
        config
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let client = CompletionClient::new(
                config.completion_config(),
                Arc::new(ReqwestTransport::new()),
            );
            debug!(
                "Using OpenRouter completion client at {} (credential configured: {})",
                client.url(),
                client.has_credential()
            );
            Arc::new(client)
        };

        Self::with_client(chat_client)
    }

    pub fn with_client(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub fn chat_client(&self) -> Arc<dyn ChatClient> {
        Arc::clone(&self.chat_client)
    }

    pub fn session_use_case(&self) -> ChatSessionUseCase {
        ChatSessionUseCase::new(self.chat_client())
    }
}
