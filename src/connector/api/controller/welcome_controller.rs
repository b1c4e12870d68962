use anyhow::Result;

use crate::MessageFactory;

use super::format_message;

pub struct WelcomeController;

impl WelcomeController {
    pub fn new() -> Self {
        Self
    }

    pub async fn welcome(&self) -> Result<String> {
        Ok(format_message(&MessageFactory::welcome_message()))
    }
}

impl Default for WelcomeController {
    fn default() -> Self {
        Self::new()
    }
}
