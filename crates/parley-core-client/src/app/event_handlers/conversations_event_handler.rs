// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::deps::{AppDependencies, DynQueryCache};
use crate::app::event_handlers::{ConversationEvent, ServerEvent, ServerEventHandler};
use crate::domain::conversations::models::ConversationSummary;
use crate::domain::shared::models::{CacheKey, ConversationId};

pub struct ConversationsEventHandler {
    query_cache: DynQueryCache,
}

impl From<&AppDependencies> for ConversationsEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            query_cache: deps.query_cache.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for ConversationsEventHandler {
    fn name(&self) -> &'static str {
        "conversations"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Conversation(ConversationEvent::Updated {
                conversation_id,
                summary,
            }) => {
                self.handle_conversation_updated(conversation_id, summary);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConversationsEventHandler {
    fn handle_conversation_updated(
        &self,
        conversation_id: ConversationId,
        summary: ConversationSummary,
    ) {
        let mut list_cached = false;
        let mut matched = false;

        self.query_cache.update(&CacheKey::Conversations, |value| {
            let Some(list) = value.as_conversations_mut() else {
                return;
            };
            list_cached = true;
            matched = list.update_where(|c| c.id == conversation_id, |c| c.apply_summary(&summary))
                > 0;
        });

        self.query_cache.update(&CacheKey::OwnConversation, |value| {
            let Some(conversation) = value.as_conversation_mut() else {
                return;
            };
            if conversation.id == conversation_id {
                conversation.apply_summary(&summary);
            }
        });

        // A conversation we have never seen carries related entities that
        // cannot be synthesized client-side; the list has to be refetched.
        if list_cached && !matched {
            info!("Conversation '{conversation_id}' is not in the cached list, invalidating");
            self.query_cache.invalidate(&CacheKey::Conversations);
        }
    }
}
