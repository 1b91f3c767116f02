// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynAppContext, DynTypingRegistry};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, TypingEvent};

pub struct TypingEventHandler {
    ctx: DynAppContext,
    typing_registry: DynTypingRegistry,
}

impl From<&AppDependencies> for TypingEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            typing_registry: deps.typing_registry.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for TypingEventHandler {
    fn name(&self) -> &'static str {
        "typing"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Typing(TypingEvent::Started {
                conversation_id,
                user_id,
                display_name,
            }) => {
                // We won't track our own typing state…
                if self.ctx.current_user().map(|u| u.id) == Some(user_id.clone()) {
                    return Ok(None);
                }
                self.typing_registry
                    .start(conversation_id, user_id, display_name);
            }
            ServerEvent::Typing(TypingEvent::Stopped {
                conversation_id,
                user_id,
            }) => {
                self.typing_registry.stop(&conversation_id, &user_id);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
