// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{MessageId, MessageKind};
use crate::domain::shared::models::MediaId;

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub kind: MessageKind,
    pub content: Option<String>,
    pub media_id: Option<MediaId>,
    pub reply_to_id: Option<MessageId>,
}

impl SendMessageRequest {
    pub fn text(content: impl Into<String>) -> Self {
        SendMessageRequest {
            kind: MessageKind::Text,
            content: Some(content.into()),
            media_id: None,
            reply_to_id: None,
        }
    }

    pub fn media(media_id: MediaId) -> Self {
        SendMessageRequest {
            kind: MessageKind::Media,
            content: None,
            media_id: Some(media_id),
            reply_to_id: None,
        }
    }

    pub fn replying_to(mut self, message_id: MessageId) -> Self {
        self.reply_to_id = Some(message_id);
        self
    }
}
