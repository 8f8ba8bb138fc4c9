pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, MessageKind, User};

pub const CHAT_ID: i64 = 456;

pub fn create_message(content: &str, kind: MessageKind) -> Message {
    Message {
        id: "100".to_string(),
        user: User {
            id: 123,
            username: Some("seeker".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}
