// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! The types an embedding application needs to talk to the client and to
//! interpret cached values.

pub use parley_store::{CacheChange, CacheEntry, Page, PagedList};

pub use crate::app::deps::{CacheValue, ClientQueryCache};
pub use crate::domain::announcements::models::Announcement;
pub use crate::domain::connection::models::ClientCommand;
pub use crate::domain::conversations::models::{Conversation, ConversationSummary};
pub use crate::domain::messaging::models::{
    Emoji, Message, MessageId, MessageIdentity, MessageKind, MessageStatus, Reaction,
    SendMessageRequest, TempMessageId, TypingUser,
};
pub use crate::domain::shared::models::{
    AnnouncementId, CacheKey, CacheKeyError, CacheNamespace, ConnectionState, ConversationId,
    MediaId, MessageListScope, UserId,
};
pub use crate::domain::user_info::models::{
    AccountStatus, CurrentUser, MediaPermission, UserRole,
};
