// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use announcements_event_handler::AnnouncementsEventHandler;
pub use cache_event_handler::CacheEventHandler;
pub use client_event_dispatcher::ClientEventDispatcher;
pub use connection_event_handler::ConnectionEventHandler;
pub use conversations_event_handler::ConversationsEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use server_event::*;
pub use session_event_handler::SessionEventHandler;
pub use typing_event_handler::TypingEventHandler;
pub use user_state_event_handler::UserStateEventHandler;

use crate::ClientEvent;

mod announcements_event_handler;
mod cache_event_handler;
mod client_event_dispatcher;
mod connection_event_handler;
mod conversations_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod server_event;
mod session_event_handler;
mod typing_event_handler;
mod user_state_event_handler;

/// `ServerEventHandler` is a trait representing a handler for server events.
///
/// Implementors of this trait should provide a `handle_event` method, which
/// takes a `ServerEvent` and returns an `Option<ServerEvent>`. If the handler
/// returns `None`, it means the event has been consumed and no further
/// processing should be done. If it returns `Some(event)`, the event is not
/// consumed and should be passed to the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
