// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::connector::ConnectionError;
use crate::domain::announcements::models::Announcement;
use crate::domain::conversations::models::ConversationSummary;
use crate::domain::messaging::models::{Emoji, Message, MessageId, Reaction, TempMessageId};
use crate::domain::shared::models::{ConversationId, UserId};
use crate::domain::user_info::models::{AccountStatus, MediaPermission};

/// The closed set of events the transport can deliver. Every variant is
/// consumed by exactly one handler.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Events related to the transport's connection status.
    Connection(ConnectionEvent),
    /// Events about messages within a conversation.
    Message(MessageEvent),
    /// Events about conversation summaries.
    Conversation(ConversationEvent),
    /// Events that affect the signed-in user's account.
    UserState(UserStateEvent),
    /// Events about announcements.
    Announcement(AnnouncementEvent),
    /// Another participant started or stopped typing.
    Typing(TypingEvent),
    /// The generic escape hatch for server-side state changes with no
    /// dedicated handler.
    Cache(CacheEvent),
    /// The session ended server-side.
    Session(SessionEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageEvent {
    /// A new message arrived in a conversation.
    Received { message: Message },
    /// The server acknowledged a message we sent. `temp_id` is absent for
    /// confirmations without a client-originated temp id (e.g. a resend).
    Sent {
        temp_id: Option<TempMessageId>,
        message: Message,
    },
    /// A message was soft-deleted.
    Deleted {
        conversation_id: ConversationId,
        message_id: MessageId,
        deleted_at: DateTime<Utc>,
    },
    /// Messages were marked read. With no explicit ids, every sent message in
    /// the conversation is affected.
    Read {
        conversation_id: ConversationId,
        message_ids: Option<Vec<MessageId>>,
        read_by: UserId,
        read_at: DateTime<Utc>,
    },
    /// A reaction was added to or removed from a message.
    Reaction {
        message_id: MessageId,
        change: ReactionChange,
    },
}

/// Each variant carries exactly the fields its action needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionChange {
    Added { reaction: Reaction },
    Removed { user_id: UserId, emoji: Emoji },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEvent {
    Updated {
        conversation_id: ConversationId,
        summary: ConversationSummary,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserStateEvent {
    StatusChanged {
        user_id: UserId,
        status: AccountStatus,
        reason: Option<String>,
    },
    MediaPermissionChanged {
        media_permission: MediaPermission,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnouncementEvent {
    Created {
        announcement: Announcement,
    },
    /// `announcement` is `None` when the update is not disclosed to this
    /// client; the cached announcement views can only be refetched then.
    Updated {
        announcement: Option<Announcement>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypingEvent {
    Started {
        conversation_id: ConversationId,
        user_id: UserId,
        display_name: String,
    },
    Stopped {
        conversation_id: ConversationId,
        user_id: UserId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CacheEvent {
    /// Invalidate every named key, regardless of type. Keys arrive in their
    /// wire spelling; a bare namespace segment invalidates the whole
    /// namespace.
    Invalidate { keys: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Revoked { reason: Option<String> },
    AuthError { message: String },
}
