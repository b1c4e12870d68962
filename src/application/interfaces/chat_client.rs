use async_trait::async_trait;

use crate::domain::CompletionError;

/// Produces the assistant's reply to a single user utterance.
///
/// Implementors own transport, serialization, and vendor-specific API details.
/// Each call is independent: no conversation history is carried between calls.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn get_reply(&self, input: &str) -> Result<String, CompletionError>;
}
