#![allow(dead_code)]

// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use parley_core_client::app::deps::{AppContext, AppDependencies, CacheValue, ClientQueryCache};
use parley_core_client::app::event_handlers::ClientEventDispatcherTrait;
use parley_core_client::domain::announcements::models::Announcement;
use parley_core_client::domain::conversations::models::Conversation;
use parley_core_client::domain::messaging::models::{
    Message, MessageIdentity, MessageKind, MessageStatus, Reaction, TypingRegistry,
};
use parley_core_client::domain::messaging::services::MessageReconciler;
use parley_core_client::domain::shared::models::CacheKey;
use parley_core_client::domain::user_info::models::{
    AccountStatus, CurrentUser, MediaPermission, UserRole,
};
use parley_core_client::{ClientEvent, IDProvider, TimeProvider};

pub struct ConstantTimeProvider {
    now: DateTime<Utc>,
}

impl ConstantTimeProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl TimeProvider for ConstantTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

pub struct IncrementingIDProvider {
    prefix: String,
    last_id: Mutex<i64>,
}

impl IncrementingIDProvider {
    pub fn new(prefix: &str) -> Self {
        IncrementingIDProvider {
            prefix: prefix.to_string(),
            last_id: Mutex::new(0),
        }
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let mut last_id = self.last_id.lock();
        *last_id += 1;
        format!("{}-{}", self.prefix, *last_id)
    }
}

#[derive(Default)]
pub struct RecordingEventDispatcher {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingEventDispatcher {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().clone()
    }
}

impl ClientEventDispatcherTrait for RecordingEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        self.events.lock().push(event);
    }
}

pub struct TestDeps {
    pub deps: AppDependencies,
    pub ctx: Arc<AppContext>,
    pub query_cache: Arc<ClientQueryCache>,
    pub dispatcher: Arc<RecordingEventDispatcher>,
    pub typing_registry: Arc<TypingRegistry>,
}

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 10, 0, 0).unwrap()
}

pub fn test_deps() -> TestDeps {
    let time_provider: Arc<dyn TimeProvider> = Arc::new(ConstantTimeProvider::new(test_time()));
    let ctx = Arc::new(AppContext::default());
    let query_cache = Arc::new(ClientQueryCache::new(time_provider.clone()));
    let dispatcher = Arc::new(RecordingEventDispatcher::default());
    let typing_registry = Arc::new(TypingRegistry::default());

    let deps = AppDependencies {
        client_event_dispatcher: dispatcher.clone(),
        ctx: ctx.clone(),
        id_provider: Arc::new(IncrementingIDProvider::new("temp")),
        message_reconciler: Arc::new(MessageReconciler::new(query_cache.clone())),
        query_cache: query_cache.clone(),
        time_provider,
        typing_registry: typing_registry.clone(),
    };

    TestDeps {
        deps,
        ctx,
        query_cache,
        dispatcher,
        typing_registry,
    }
}

pub fn customer(id: &str) -> CurrentUser {
    CurrentUser {
        id: id.into(),
        display_name: "Jane Doe".to_string(),
        role: UserRole::Customer,
        status: AccountStatus::Approved,
        media_permission: MediaPermission::Granted,
    }
}

pub fn staff(id: &str) -> CurrentUser {
    CurrentUser {
        role: UserRole::Staff,
        ..customer(id)
    }
}

pub fn confirmed_message(id: &str, conversation_id: &str, sender_id: &str) -> Message {
    Message {
        identity: MessageIdentity::Confirmed(id.into()),
        conversation_id: Some(conversation_id.into()),
        sender_id: sender_id.into(),
        kind: MessageKind::Text,
        content: Some(format!("Message {id}")),
        media_id: None,
        reply_to_id: None,
        status: MessageStatus::Sent,
        sent_at: test_time(),
        read_at: None,
        deleted_at: None,
        reactions: vec![],
    }
}

pub fn provisional_message(
    temp_id: &str,
    conversation_id: Option<&str>,
    sender_id: &str,
) -> Message {
    Message {
        identity: MessageIdentity::Provisional(temp_id.into()),
        conversation_id: conversation_id.map(Into::into),
        sender_id: sender_id.into(),
        kind: MessageKind::Text,
        content: Some(format!("Message {temp_id}")),
        media_id: None,
        reply_to_id: None,
        status: MessageStatus::Sent,
        sent_at: test_time(),
        read_at: None,
        deleted_at: None,
        reactions: vec![],
    }
}

pub fn reaction(user_id: &str, emoji: &str) -> Reaction {
    Reaction {
        user_id: user_id.into(),
        emoji: emoji.into(),
        reacted_at: test_time(),
    }
}

pub fn conversation(id: &str) -> Conversation {
    Conversation {
        id: id.into(),
        unread_count: 0,
        admin_unread_count: 0,
        last_message_at: None,
        last_message: None,
    }
}

pub fn announcement(id: &str) -> Announcement {
    Announcement {
        id: id.into(),
        title: format!("Announcement {id}"),
        body: "Lorem ipsum".to_string(),
        audience: None,
        is_active: true,
        published_at: test_time(),
        expires_at: None,
    }
}

pub fn seed_messages(cache: &ClientQueryCache, key: CacheKey, messages: Vec<Message>) {
    let mut list = parley_store::PagedList::default();
    for message in messages {
        list.append_newest(message);
    }
    cache.set(key, CacheValue::Messages(list));
}

/// Reads the flattened message list under `key`, panicking when the entry is
/// missing or holds a different value shape.
pub fn messages_in(cache: &ClientQueryCache, key: &CacheKey) -> Vec<Message> {
    let Some(CacheValue::Messages(list)) = cache.get(key) else {
        panic!("Expected a cached message list at '{key}'");
    };
    list.iter().cloned().collect()
}

pub fn seed_conversations(cache: &ClientQueryCache, conversations: Vec<Conversation>) {
    let mut list = parley_store::PagedList::default();
    for conversation in conversations {
        list.append_newest(conversation);
    }
    cache.set(CacheKey::Conversations, CacheValue::Conversations(list));
}

pub fn conversations_in(cache: &ClientQueryCache) -> Vec<Conversation> {
    let Some(CacheValue::Conversations(list)) = cache.get(&CacheKey::Conversations) else {
        panic!("Expected a cached conversation list");
    };
    list.iter().cloned().collect()
}

pub fn seed_announcements(cache: &ClientQueryCache, announcements: Vec<Announcement>) {
    let mut list = parley_store::PagedList::default();
    for announcement in announcements {
        list.append_newest(announcement);
    }
    cache.set(CacheKey::Announcements, CacheValue::Announcements(list));
}

pub fn announcements_in(cache: &ClientQueryCache) -> Vec<Announcement> {
    let Some(CacheValue::Announcements(list)) = cache.get(&CacheKey::Announcements) else {
        panic!("Expected a cached announcement list");
    };
    list.iter().cloned().collect()
}
