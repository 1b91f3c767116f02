// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::ConversationId;

/// A conversation as it appears in the cached conversation list.
/// `last_message`/`last_message_at` always reflect the most recently observed
/// authoritative event, never a provisional message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    /// Unread messages as seen by the customer side.
    pub unread_count: u32,
    /// Unread messages as seen by the staff side.
    pub admin_unread_count: u32,
    pub last_message_at: Option<DateTime<Utc>>,
    pub last_message: Option<Message>,
}

/// The optional patch carried by a `conversation:updated` event. An absent
/// field means that sub-update is skipped, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub unread_count: Option<u32>,
    pub admin_unread_count: Option<u32>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub last_message: Option<Message>,
}

impl Conversation {
    pub fn apply_summary(&mut self, summary: &ConversationSummary) {
        if let Some(unread_count) = summary.unread_count {
            self.unread_count = unread_count;
        }
        if let Some(admin_unread_count) = summary.admin_unread_count {
            self.admin_unread_count = admin_unread_count;
        }
        if let Some(last_message_at) = summary.last_message_at {
            self.last_message_at = Some(last_message_at);
        }
        if let Some(last_message) = &summary.last_message {
            self.last_message = Some(last_message.clone());
        }
    }
}
