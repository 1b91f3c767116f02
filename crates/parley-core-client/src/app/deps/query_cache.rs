// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use parley_store::{PagedList, QueryCache};

use crate::domain::announcements::models::Announcement;
use crate::domain::conversations::models::Conversation;
use crate::domain::messaging::models::Message;
use crate::domain::shared::models::CacheKey;

/// The value stored under each cache key. Keys the engine only ever
/// invalidates (the admin views) carry their fetch result as an opaque JSON
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CacheValue {
    Messages(PagedList<Message>),
    Conversations(PagedList<Conversation>),
    Conversation(Conversation),
    Announcements(PagedList<Announcement>),
    Announcement(Announcement),
    Opaque(serde_json::Value),
}

pub type ClientQueryCache = QueryCache<CacheKey, CacheValue>;

impl CacheValue {
    pub fn as_messages(&self) -> Option<&PagedList<Message>> {
        match self {
            CacheValue::Messages(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_messages_mut(&mut self) -> Option<&mut PagedList<Message>> {
        match self {
            CacheValue::Messages(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_conversations(&self) -> Option<&PagedList<Conversation>> {
        match self {
            CacheValue::Conversations(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_conversations_mut(&mut self) -> Option<&mut PagedList<Conversation>> {
        match self {
            CacheValue::Conversations(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_conversation(&self) -> Option<&Conversation> {
        match self {
            CacheValue::Conversation(conversation) => Some(conversation),
            _ => None,
        }
    }

    pub fn as_conversation_mut(&mut self) -> Option<&mut Conversation> {
        match self {
            CacheValue::Conversation(conversation) => Some(conversation),
            _ => None,
        }
    }

    pub fn as_announcements(&self) -> Option<&PagedList<Announcement>> {
        match self {
            CacheValue::Announcements(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_announcements_mut(&mut self) -> Option<&mut PagedList<Announcement>> {
        match self {
            CacheValue::Announcements(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_announcement(&self) -> Option<&Announcement> {
        match self {
            CacheValue::Announcement(announcement) => Some(announcement),
            _ => None,
        }
    }

    pub fn as_announcement_mut(&mut self) -> Option<&mut Announcement> {
        match self {
            CacheValue::Announcement(announcement) => Some(announcement),
            _ => None,
        }
    }
}
