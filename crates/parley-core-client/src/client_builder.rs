// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parley_store::{QueryCache, SystemTimeProvider};

use crate::app::deps::{
    AppContext, AppDependencies, DynConnector, DynIDProvider, DynTimeProvider,
};
use crate::app::event_handlers::{
    AnnouncementsEventHandler, CacheEventHandler, ClientEventDispatcher, ConnectionEventHandler,
    ConversationsEventHandler, MessagesEventHandler, ServerEventHandlerQueue, SessionEventHandler,
    TypingEventHandler, UserStateEventHandler,
};
use crate::app::services::{ChatService, ConnectionService};
use crate::client::ClientInner;
use crate::domain::messaging::models::TypingRegistry;
use crate::domain::messaging::services::MessageReconciler;
use crate::util::UUIDProvider;
use crate::{Client, ClientDelegate};

pub struct UndefinedConnector;

pub struct ClientBuilder<C> {
    connector: C,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedConnector> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            connector: UndefinedConnector,
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_connector(self, connector: DynConnector) -> ClientBuilder<DynConnector> {
        ClientBuilder {
            connector,
            delegate: self.delegate,
            id_provider: self.id_provider,
            time_provider: self.time_provider,
        }
    }
}

impl<C> ClientBuilder<C> {
    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_id_provider(mut self, id_provider: DynIDProvider) -> Self {
        self.id_provider = id_provider;
        self
    }

    pub fn set_time_provider(mut self, time_provider: DynTimeProvider) -> Self {
        self.time_provider = time_provider;
        self
    }
}

impl ClientBuilder<DynConnector> {
    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::default());
        let query_cache = Arc::new(QueryCache::new(self.time_provider.clone()));
        let client_event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));
        let message_reconciler = Arc::new(MessageReconciler::new(query_cache.clone()));
        let typing_registry = Arc::new(TypingRegistry::default());

        let deps = AppDependencies {
            client_event_dispatcher: client_event_dispatcher.clone(),
            ctx: ctx.clone(),
            id_provider: self.id_provider,
            message_reconciler,
            query_cache: query_cache.clone(),
            time_provider: self.time_provider,
            typing_registry: typing_registry.clone(),
        };

        // One handler per event family, bound once for the whole session.
        let event_queue = Arc::new(ServerEventHandlerQueue::new());
        event_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&deps)),
            Box::new(MessagesEventHandler::from(&deps)),
            Box::new(ConversationsEventHandler::from(&deps)),
            Box::new(UserStateEventHandler::from(&deps)),
            Box::new(AnnouncementsEventHandler::from(&deps)),
            Box::new(TypingEventHandler::from(&deps)),
            Box::new(CacheEventHandler::from(&deps)),
            Box::new(SessionEventHandler::from(&deps)),
        ]);

        let connection = Arc::new(ConnectionService::new(
            ctx.clone(),
            self.connector,
            event_queue,
            deps.client_event_dispatcher.clone(),
        ));
        let chat = ChatService::new(&deps, connection.clone());

        let inner = Arc::new(ClientInner {
            chat,
            connection,
            ctx,
            query_cache,
            typing_registry,
        });

        client_event_dispatcher.set_client_inner(Arc::downgrade(&inner));

        Client::from(inner)
    }
}
