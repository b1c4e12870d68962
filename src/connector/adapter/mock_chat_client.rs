use async_trait::async_trait;

use crate::application::ChatClient;
use crate::connector::adapter::EMPTY_INPUT_REPLY;
use crate::domain::CompletionError;

/// Offline [`ChatClient`] that never touches the network.
///
/// Applies the same blank-input rule as the real client, then answers with a
/// deterministic canned reply that quotes the question.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn get_reply(&self, input: &str) -> Result<String, CompletionError> {
        let question = input.trim();
        if question.is_empty() {
            return Ok(EMPTY_INPUT_REPLY.to_string());
        }

        Ok(format!(
            "Great question! You asked: \"{question}\". I'm running in offline mode right now, \
             so here's the classic starting point: track your spending for a month, build a \
             small emergency fund, then automate your savings."
        ))
    }
}
