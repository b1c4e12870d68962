use chrono::Utc;
use rand::Rng;

use crate::domain::ChatMessage;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const WELCOME_TEXT: &str = "Hey there! 👋 I'm Junie - think of me as your friend who just happens to know a thing or two about money (okay, maybe more than a thing or two 😄). I've helped tons of people figure out their finances, and I'm genuinely excited to help you too! Whether you want to talk budgeting, investing, saving strategies, or just need someone to break down all that confusing financial stuff - I'm your person. What's on your mind?";

/// Builds [`ChatMessage`] values.
///
/// Stateless: ids combine the current Unix time in milliseconds with a random
/// base-36 suffix, so two messages created within the same millisecond still
/// differ with overwhelming probability.
pub struct MessageFactory;

impl MessageFactory {
    pub fn generate_id() -> String {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("{millis}{suffix}")
    }

    pub fn create_message(text: impl Into<String>, is_user: bool) -> ChatMessage {
        ChatMessage::new(Self::generate_id(), text.into(), is_user, Utc::now())
    }

    pub fn welcome_message() -> ChatMessage {
        Self::create_message(WELCOME_TEXT, false)
    }
}
