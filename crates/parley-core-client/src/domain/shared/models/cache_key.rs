// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::shared::models::{AnnouncementId, ConversationId};

/// The conversation a message list belongs to. `Pending` is the distinguished
/// slot for provisional messages created before the server has assigned a
/// conversation id (the very first message of a brand-new conversation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageListScope {
    Conversation(ConversationId),
    Pending,
}

impl From<Option<ConversationId>> for MessageListScope {
    fn from(value: Option<ConversationId>) -> Self {
        match value {
            Some(id) => MessageListScope::Conversation(id),
            None => MessageListScope::Pending,
        }
    }
}

/// Structural key of a query cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Messages(MessageListScope),
    Conversations,
    /// The current user's own conversation (customers have exactly one).
    OwnConversation,
    Announcements,
    Announcement(AnnouncementId),
    AdminUsers,
    AdminAuditLogs,
}

impl CacheKey {
    pub fn messages(conversation_id: ConversationId) -> Self {
        CacheKey::Messages(MessageListScope::Conversation(conversation_id))
    }

    pub fn pending_messages() -> Self {
        CacheKey::Messages(MessageListScope::Pending)
    }
}

/// The leading namespace segment of a key. Wildcard invalidation matches on
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheNamespace {
    Messages,
    Conversations,
    OwnConversation,
    Announcements,
    Admin,
}

impl parley_store::CacheKey for CacheKey {
    type Namespace = CacheNamespace;

    fn namespace(&self) -> CacheNamespace {
        match self {
            CacheKey::Messages(_) => CacheNamespace::Messages,
            CacheKey::Conversations => CacheNamespace::Conversations,
            CacheKey::OwnConversation => CacheNamespace::OwnConversation,
            CacheKey::Announcements | CacheKey::Announcement(_) => CacheNamespace::Announcements,
            CacheKey::AdminUsers | CacheKey::AdminAuditLogs => CacheNamespace::Admin,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum CacheKeyError {
    #[error("Unrecognized cache key '{0}'")]
    UnrecognizedKey(String),
    #[error("Unrecognized cache namespace '{0}'")]
    UnrecognizedNamespace(String),
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Messages(MessageListScope::Conversation(id)) => write!(f, "messages:{id}"),
            CacheKey::Messages(MessageListScope::Pending) => write!(f, "messages:pending"),
            CacheKey::Conversations => write!(f, "conversations"),
            CacheKey::OwnConversation => write!(f, "conversation"),
            CacheKey::Announcements => write!(f, "announcements"),
            CacheKey::Announcement(id) => write!(f, "announcement:{id}"),
            CacheKey::AdminUsers => write!(f, "admin:users"),
            CacheKey::AdminAuditLogs => write!(f, "admin:audit-logs"),
        }
    }
}

impl FromStr for CacheKey {
    type Err = CacheKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.split_once(':') {
            None => match s {
                "conversations" => CacheKey::Conversations,
                "conversation" => CacheKey::OwnConversation,
                "announcements" => CacheKey::Announcements,
                _ => return Err(CacheKeyError::UnrecognizedKey(s.to_string())),
            },
            Some(("messages", "pending")) => CacheKey::pending_messages(),
            Some(("messages", id)) if !id.is_empty() => {
                CacheKey::messages(ConversationId::from(id))
            }
            Some(("announcement", id)) if !id.is_empty() => {
                CacheKey::Announcement(AnnouncementId::from(id))
            }
            Some(("admin", "users")) => CacheKey::AdminUsers,
            Some(("admin", "audit-logs")) => CacheKey::AdminAuditLogs,
            Some(_) => return Err(CacheKeyError::UnrecognizedKey(s.to_string())),
        };
        Ok(key)
    }
}

impl FromStr for CacheNamespace {
    type Err = CacheKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "messages" => Ok(CacheNamespace::Messages),
            "conversations" => Ok(CacheNamespace::Conversations),
            "conversation" => Ok(CacheNamespace::OwnConversation),
            "announcements" => Ok(CacheNamespace::Announcements),
            "admin" => Ok(CacheNamespace::Admin),
            _ => Err(CacheKeyError::UnrecognizedNamespace(s.to_string())),
        }
    }
}
