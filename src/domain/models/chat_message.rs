use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a conversation.
///
/// Messages are immutable once built; ordering comes from the position in the
/// owning sequence, not from `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: String,
    text: String,
    is_user: bool,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: String, text: String, is_user: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            is_user,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Local wall-clock time as `hh:mm AM`.
    pub fn formatted_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%I:%M %p")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ChatMessage {
        ChatMessage::new(
            "1700000000000abc123def".to_string(),
            "test message".to_string(),
            true,
            Utc.with_ymd_and_hms(2024, 3, 1, 15, 4, 0).unwrap(),
        )
    }

    #[test]
    fn test_accessors() {
        let message = sample();
        assert_eq!(message.id(), "1700000000000abc123def");
        assert_eq!(message.text(), "test message");
        assert!(message.is_user());
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "1700000000000abc123def");
        assert_eq!(json["text"], "test message");
        assert_eq!(json["isUser"], true);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_deserializes_its_own_json() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"isUser\":true"));

        let restored: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_formatted_time_is_twelve_hour() {
        let formatted = sample().formatted_time();
        // "hh:mm AM" / "hh:mm PM"
        assert_eq!(formatted.len(), 8);
        assert_eq!(&formatted[2..3], ":");
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }
}
