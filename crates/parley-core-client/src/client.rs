// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::{DynAppContext, DynQueryCache, DynTypingRegistry};
use crate::app::services::{ChatService, ConnectionService};
use crate::client_builder::{ClientBuilder, UndefinedConnector};
use crate::connector::ConnectionError;
use crate::domain::shared::models::ConnectionState;
use crate::domain::user_info::models::CurrentUser;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

pub struct ClientInner {
    pub chat: ChatService,
    pub(crate) connection: Arc<ConnectionService>,
    pub(crate) ctx: DynAppContext,
    pub(crate) query_cache: DynQueryCache,
    pub(crate) typing_registry: DynTypingRegistry,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedConnector> {
        ClientBuilder::new()
    }

    /// Binds the client to the application's authentication state. An
    /// authenticated user with a known id means connect; anything else means
    /// disconnect and discard the session's cached data wholesale.
    pub async fn set_session(&self, user: Option<CurrentUser>) -> Result<(), ConnectionError> {
        match user {
            Some(user) => self.connection.connect(user).await,
            None => {
                self.connection.disconnect().await;
                self.query_cache.clear();
                self.typing_registry.clear_all();
                self.ctx.set_current_user(None);
                Ok(())
            }
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.ctx.current_user()
    }

    /// The shared query cache. Views read snapshots from it and re-read
    /// whenever its change feed announces their key.
    pub fn query_cache(&self) -> DynQueryCache {
        self.query_cache.clone()
    }

    pub fn typing_registry(&self) -> DynTypingRegistry {
        self.typing_registry.clone()
    }
}
