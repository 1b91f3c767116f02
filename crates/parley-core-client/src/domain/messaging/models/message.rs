// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use parley_utils::id_string;

use crate::domain::messaging::models::{MessageId, TempMessageId};
use crate::domain::shared::models::{ConversationId, MediaId, UserId};

id_string!(Emoji);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Read,
    Failed,
}

/// A message is identified by a client-generated temp id until the server
/// acknowledges it, then by its server-assigned id. The transition happens
/// exactly once; the temp id is retired with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageIdentity {
    Provisional(TempMessageId),
    Confirmed(MessageId),
}

impl MessageIdentity {
    pub fn message_id(&self) -> Option<&MessageId> {
        match self {
            MessageIdentity::Confirmed(id) => Some(id),
            MessageIdentity::Provisional(_) => None,
        }
    }

    pub fn temp_id(&self) -> Option<&TempMessageId> {
        match self {
            MessageIdentity::Provisional(id) => Some(id),
            MessageIdentity::Confirmed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub user_id: UserId,
    pub emoji: Emoji,
    pub reacted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub identity: MessageIdentity,
    /// `None` only for provisional messages created before the server
    /// assigned a conversation id (first contact).
    pub conversation_id: Option<ConversationId>,
    pub sender_id: UserId,
    pub kind: MessageKind,
    pub content: Option<String>,
    pub media_id: Option<MediaId>,
    pub reply_to_id: Option<MessageId>,
    pub status: MessageStatus,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    /// Soft delete. The content is retained for audit, the UI hides it.
    pub deleted_at: Option<DateTime<Utc>>,
    pub reactions: Vec<Reaction>,
}

impl Message {
    pub fn is_provisional(&self) -> bool {
        matches!(self.identity, MessageIdentity::Provisional(_))
    }

    pub fn has_id(&self, id: &MessageId) -> bool {
        self.identity.message_id() == Some(id)
    }

    pub fn has_temp_id(&self, temp_id: &TempMessageId) -> bool {
        self.identity.temp_id() == Some(temp_id)
    }

    /// Adds a reaction unless one with the same (user, emoji) pair exists.
    /// Returns whether the reaction was added.
    pub fn add_reaction(&mut self, reaction: Reaction) -> bool {
        if self
            .reactions
            .iter()
            .any(|r| r.user_id == reaction.user_id && r.emoji == reaction.emoji)
        {
            return false;
        }
        self.reactions.push(reaction);
        true
    }

    /// Removes the reaction matching (user, emoji). Returns whether one was
    /// removed.
    pub fn remove_reaction(&mut self, user_id: &UserId, emoji: &Emoji) -> bool {
        let before = self.reactions.len();
        self.reactions
            .retain(|r| !(&r.user_id == user_id && &r.emoji == emoji));
        self.reactions.len() < before
    }

    pub fn mark_read(&mut self, read_at: DateTime<Utc>) {
        self.status = MessageStatus::Read;
        self.read_at = Some(read_at);
    }

    pub fn mark_deleted(&mut self, deleted_at: DateTime<Utc>) {
        self.deleted_at = Some(deleted_at);
    }
}
