use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ChatController, WelcomeController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    chat_controller: ChatController<'a>,
    welcome_controller: WelcomeController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            chat_controller: ChatController::new(container),
            welcome_controller: WelcomeController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { question } => self.ask_controller.ask(question.join(" ")).await,
            Commands::Welcome => self.welcome_controller.welcome().await,
            Commands::Chat => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                let turns = self.chat_controller.run(stdin, tokio::io::stdout()).await?;
                Ok(format!("Chat ended after {turns} message(s). Bye!"))
            }
        }
    }
}
