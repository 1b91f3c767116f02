// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{error, warn};

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};

/// Walks the registered handlers in order until one consumes the event.
/// Handler errors never cross this boundary; recovery happens inside the
/// handlers via invalidation, not via exceptions.
pub struct ServerEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn ServerEventHandler>>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn ServerEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("Ignoring repeated attempt to set handlers in ServerEventHandlerQueue");
        }
    }

    pub async fn handle_event(&self, event: ServerEvent) {
        let mut event = event;
        let handlers = self
            .handlers
            .get()
            .expect("Handlers were not set in ServerEventHandlerQueue");

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }

        warn!("No event handler consumed event {:?}", event);
    }
}
