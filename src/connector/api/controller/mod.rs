pub mod ask_controller;
pub mod chat_controller;
pub mod welcome_controller;

pub use ask_controller::AskController;
pub use chat_controller::ChatController;
pub use welcome_controller::WelcomeController;

use crate::ChatMessage;

const ASSISTANT_NAME: &str = "Junie";

/// One transcript line: `Junie [03:04 PM]: text`.
pub fn format_message(message: &ChatMessage) -> String {
    let author = if message.is_user() { "You" } else { ASSISTANT_NAME };
    format!("{} [{}]: {}", author, message.formatted_time(), message.text())
}
