// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::{Emoji, MessageId, MessageKind, TempMessageId};
use crate::domain::shared::models::{ConversationId, MediaId};

/// Commands emitted towards the server. The transport owns the wire encoding;
/// the serde names below match the server's event vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ClientCommand {
    #[serde(rename = "message:send")]
    SendMessage {
        conversation_id: Option<ConversationId>,
        kind: MessageKind,
        content: Option<String>,
        media_id: Option<MediaId>,
        temp_id: TempMessageId,
        reply_to_id: Option<MessageId>,
    },
    #[serde(rename = "message:react")]
    React { message_id: MessageId, emoji: Emoji },
    #[serde(rename = "messages:mark_read")]
    MarkRead { conversation_id: ConversationId },
    #[serde(rename = "typing:start")]
    TypingStart { conversation_id: ConversationId },
    #[serde(rename = "typing:stop")]
    TypingStop { conversation_id: ConversationId },
}
