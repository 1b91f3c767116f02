// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{bail, Result};
use parking_lot::RwLock;
use tracing::info;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynConnector};
use crate::app::event_handlers::ServerEventHandlerQueue;
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, PinnedFuture};
use crate::domain::connection::models::ClientCommand;
use crate::domain::shared::models::ConnectionState;
use crate::domain::user_info::models::CurrentUser;
use crate::{ClientEvent, ConnectionEvent as ClientConnectionEvent};

/// Owns the lifecycle of the single shared connection. Nothing else creates
/// or destroys the transport. Event handlers are bound once per authenticated
/// session — transport-level reconnects do not re-attach them.
pub struct ConnectionService {
    ctx: DynAppContext,
    connector: DynConnector,
    event_queue: Arc<ServerEventHandlerQueue>,
    client_event_dispatcher: DynClientEventDispatcher,
    connection: RwLock<Option<Box<dyn Connection>>>,
}

impl ConnectionService {
    pub(crate) fn new(
        ctx: DynAppContext,
        connector: DynConnector,
        event_queue: Arc<ServerEventHandlerQueue>,
        client_event_dispatcher: DynClientEventDispatcher,
    ) -> Self {
        ConnectionService {
            ctx,
            connector,
            event_queue,
            client_event_dispatcher,
            connection: RwLock::new(None),
        }
    }

    pub async fn connect(&self, user: CurrentUser) -> Result<(), ConnectionError> {
        if self.ctx.connection_state() != ConnectionState::Disconnected {
            self.disconnect().await;
        }

        info!("Connecting as '{}'…", user.id);
        self.ctx.set_current_user(Some(user.clone()));
        self.ctx.set_connection_state(ConnectionState::Connecting);

        let event_queue = self.event_queue.clone();
        let event_handler: ConnectionEventHandler = Box::new(move |event| {
            let event_queue = event_queue.clone();
            let fut: PinnedFuture<()> =
                Box::pin(async move { event_queue.handle_event(event).await });
            fut
        });

        let connection = match self.connector.connect(&user.id, event_handler).await {
            Ok(connection) => connection,
            Err(err) => {
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                return Err(err);
            }
        };

        self.connection.write().replace(connection);
        self.ctx.set_connection_state(ConnectionState::Connected);

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged {
                event: ClientConnectionEvent::Connect,
            });

        Ok(())
    }

    /// Tears down the connection and all of its pending listeners atomically.
    pub async fn disconnect(&self) {
        if let Some(connection) = self.connection.write().take() {
            connection.disconnect();
        }
        self.ctx.set_connection_state(ConnectionState::Disconnected);
    }

    pub fn send_command(&self, command: ClientCommand) -> Result<()> {
        let connection = self.connection.read();
        let Some(connection) = connection.as_ref() else {
            bail!("Cannot send command — not connected");
        };
        connection.send_command(command)
    }
}
