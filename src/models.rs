use crate::constants::{DEFAULT_CHAT_TITLE, TITLE_MAX_CHARS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn in a conversation. Immutable once created; order within a
/// chat is chronological.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A stored conversation. The persisted JSON uses camelCase keys so existing
/// `career_chats.json` files keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Title comes from the first message, truncated to 30 characters.
    pub fn derive_title(messages: &[Message]) -> String {
        messages
            .first()
            .map(|m| m.content.chars().take(TITLE_MAX_CHARS).collect::<String>())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_truncates_to_thirty_chars() {
        let messages = vec![Message::user(
            "Bagaimana cara menyusun CV yang menarik untuk fresh graduate?",
        )];
        let title = Chat::derive_title(&messages);
        assert_eq!(title.chars().count(), 30);
        assert!("Bagaimana cara menyusun CV yang menarik untuk fresh graduate?".starts_with(&title));
    }

    #[test]
    fn test_derive_title_short_message_kept_whole() {
        let messages = vec![Message::user("Tips interview?")];
        assert_eq!(Chat::derive_title(&messages), "Tips interview?");
    }

    #[test]
    fn test_derive_title_empty_history_uses_default() {
        assert_eq!(Chat::derive_title(&[]), DEFAULT_CHAT_TITLE);
    }

    #[test]
    fn test_derive_title_multibyte_safe() {
        let messages = vec![Message::user("héllo wörld with ünicode çontent here")];
        let title = Chat::derive_title(&messages);
        assert_eq!(title.chars().count(), 30);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
