// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::domain::shared::models::ConnectionState;
use crate::{ClientEvent, ConnectionEvent as ClientConnectionEvent};

pub struct ConnectionEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ConnectionEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    fn handle_connection_event(&self, event: ConnectionEvent) {
        match event {
            // The transport reconnected on its own. Handlers stay attached;
            // they were bound once for the session.
            ConnectionEvent::Connected => {
                self.ctx.set_connection_state(ConnectionState::Connected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Connect,
                    });
            }
            ConnectionEvent::Disconnected { error } => {
                self.ctx.set_connection_state(ConnectionState::Disconnected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Disconnect { error },
                    });
            }
        }
    }
}
