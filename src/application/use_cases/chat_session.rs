use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatMessage, MessageFactory};

/// Shown in place of a reply whenever the client fails.
pub const APOLOGY_TEXT: &str =
    "I'm sorry, I'm having trouble processing your request right now. Please try again.";

/// An append-only conversation, seeded with the welcome message.
///
/// `send` takes `&mut self`, so at most one request is in flight per session.
pub struct ChatSessionUseCase {
    client: Arc<dyn ChatClient>,
    messages: Vec<ChatMessage>,
}

impl ChatSessionUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            messages: vec![MessageFactory::welcome_message()],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's message and the assistant's answer.
    ///
    /// Blank input is ignored and yields `None`. Client failures never escape:
    /// the apology text is appended instead.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(MessageFactory::create_message(input, true));

        let text = match self.client.get_reply(input).await {
            Ok(reply) => {
                debug!("ChatSession: received reply ({} chars)", reply.len());
                reply
            }
            Err(e) => {
                warn!("ChatSession: reply failed, showing apology: {e}");
                APOLOGY_TEXT.to_string()
            }
        };

        self.messages.push(MessageFactory::create_message(text, false));
        self.messages.last()
    }
}
