// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::event_handlers::ServerEvent;
use crate::domain::connection::models::ClientCommand;
use crate::domain::shared::models::UserId;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{msg:?}")]
    Generic { msg: String },
}

pub type ConnectionEventHandler = Box<dyn Fn(ServerEvent) -> PinnedFuture<()> + Send + Sync>;

/// Creates the transport connection for an authenticated user.
///
/// The transport parses the wire format and invokes the event handler with
/// typed [`ServerEvent`]s. It owns reconnection and backoff; it only emits
/// `ServerEvent::Connection` events for transitions it performs itself, the
/// initial connection is reported by the `connect` future resolving.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        user_id: &UserId,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

pub trait Connection: Send + Sync {
    fn send_command(&self, command: ClientCommand) -> Result<()>;
    fn disconnect(&self);
}
