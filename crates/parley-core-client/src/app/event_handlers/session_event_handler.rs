// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::deps::{AppDependencies, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, SessionEvent};
use crate::{ClientEvent, SignOutReason};

pub struct SessionEventHandler {
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for SessionEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for SessionEventHandler {
    fn name(&self) -> &'static str {
        "session"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        // No cache repair here — the whole cache is discarded when the
        // session is torn down.
        match event {
            ServerEvent::Session(SessionEvent::Revoked { reason }) => {
                info!("Session was revoked server-side");
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::SignOutRequired {
                        reason: SignOutReason::SessionRevoked { reason },
                    });
            }
            ServerEvent::Session(SessionEvent::AuthError { message }) => {
                info!("Received auth error: {message}");
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::SignOutRequired {
                        reason: SignOutReason::AuthenticationError { message },
                    });
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
