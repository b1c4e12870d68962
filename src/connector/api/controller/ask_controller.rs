use anyhow::Result;

use crate::MessageFactory;

use super::super::Container;
use super::format_message;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Send a single question; failures propagate so the process exits non-zero.
    pub async fn ask(&self, question: String) -> Result<String> {
        let reply = self.container.chat_client().get_reply(&question).await?;
        Ok(format_message(&MessageFactory::create_message(reply, false)))
    }
}
