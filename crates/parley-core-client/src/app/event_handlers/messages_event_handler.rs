// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::app::deps::{AppDependencies, DynAppContext, DynMessageReconciler, DynQueryCache};
use crate::app::event_handlers::{
    MessageEvent, ReactionChange, ServerEvent, ServerEventHandler,
};
use crate::domain::conversations::models::Conversation;
use crate::domain::messaging::models::{Message, MessageId, MessageStatus, TempMessageId};
use crate::domain::messaging::services::ReconciliationOutcome;
use crate::domain::shared::models::{CacheKey, CacheNamespace, ConversationId};
use crate::domain::user_info::models::UserRole;

pub struct MessagesEventHandler {
    ctx: DynAppContext,
    query_cache: DynQueryCache,
    message_reconciler: DynMessageReconciler,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            query_cache: deps.query_cache.clone(),
            message_reconciler: deps.message_reconciler.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => {
                self.handle_message_event(event)?;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        match event {
            MessageEvent::Received { message } => self.handle_received_message(message),
            MessageEvent::Sent { temp_id, message } => {
                self.handle_sent_message(temp_id, message)
            }
            MessageEvent::Deleted {
                conversation_id,
                message_id,
                deleted_at,
            } => self.handle_deleted_message(conversation_id, message_id, deleted_at),
            MessageEvent::Read {
                conversation_id,
                message_ids,
                read_at,
                ..
            } => self.handle_messages_read(conversation_id, message_ids, read_at),
            MessageEvent::Reaction { message_id, change } => {
                self.handle_reaction(message_id, change)
            }
        }
        Ok(())
    }

    fn handle_received_message(&self, message: Message) {
        let Some(conversation_id) = message.conversation_id.clone() else {
            warn!("Dropping received message without a conversation id");
            return;
        };
        let Some(message_id) = message.identity.message_id().cloned() else {
            warn!("Dropping received message without an authoritative id");
            return;
        };

        self.query_cache
            .update(&CacheKey::messages(conversation_id.clone()), |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                // Delivery is at-least-once.
                if list.contains(|m| m.has_id(&message_id)) {
                    return;
                }
                list.append_newest(message.clone());
            });

        // The customer's unread counter and conversation preview are bumped
        // optimistically, ahead of the summary event. The staff side waits
        // for the summary.
        let Some(user) = self.ctx.current_user() else {
            return;
        };
        if user.id == message.sender_id || user.role != UserRole::Customer {
            return;
        }

        self.query_cache.update(&CacheKey::Conversations, |value| {
            let Some(list) = value.as_conversations_mut() else {
                return;
            };
            list.update_where(
                |c| c.id == conversation_id,
                |c| Self::apply_unread_bump(c, &message),
            );
        });
        self.query_cache.update(&CacheKey::OwnConversation, |value| {
            let Some(conversation) = value.as_conversation_mut() else {
                return;
            };
            if conversation.id == conversation_id {
                Self::apply_unread_bump(conversation, &message);
            }
        });
    }

    fn apply_unread_bump(conversation: &mut Conversation, message: &Message) {
        conversation.unread_count += 1;
        conversation.last_message_at = Some(message.sent_at);
        conversation.last_message = Some(message.clone());
    }

    fn handle_sent_message(&self, temp_id: Option<TempMessageId>, message: Message) {
        let Some(conversation_id) = message.conversation_id.clone() else {
            warn!("Dropping send acknowledgement without a conversation id");
            return;
        };

        let outcome = match &temp_id {
            Some(temp_id) => self.message_reconciler.reconcile(temp_id, &message),
            None => ReconciliationOutcome::Miss,
        };

        if outcome == ReconciliationOutcome::Miss {
            // Never drop the acknowledgement: a refetch restores consistency.
            info!(
                "Send acknowledgement for conversation '{conversation_id}' matched no \
                 provisional message, invalidating"
            );
            self.query_cache
                .invalidate(&CacheKey::messages(conversation_id));
        }
    }

    fn handle_deleted_message(
        &self,
        conversation_id: ConversationId,
        message_id: MessageId,
        deleted_at: DateTime<Utc>,
    ) {
        self.query_cache
            .update(&CacheKey::messages(conversation_id), |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                list.update_where(|m| m.has_id(&message_id), |m| m.mark_deleted(deleted_at));
            });
    }

    fn handle_messages_read(
        &self,
        conversation_id: ConversationId,
        message_ids: Option<Vec<MessageId>>,
        read_at: DateTime<Utc>,
    ) {
        self.query_cache
            .update(&CacheKey::messages(conversation_id), |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                match &message_ids {
                    Some(ids) => {
                        for id in ids {
                            list.update_where(|m| m.has_id(id), |m| m.mark_read(read_at));
                        }
                    }
                    None => {
                        list.update_where(
                            |m| m.status == MessageStatus::Sent,
                            |m| m.mark_read(read_at),
                        );
                    }
                }
            });
    }

    fn handle_reaction(&self, message_id: MessageId, change: ReactionChange) {
        // A message may be visible in more than one paginated query, so the
        // change applies to every cached message list.
        for key in self.query_cache.keys_in_namespace(&CacheNamespace::Messages) {
            self.query_cache.update(&key, |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                list.update_where(
                    |m| m.has_id(&message_id),
                    |m| match &change {
                        ReactionChange::Added { reaction } => {
                            m.add_reaction(reaction.clone());
                        }
                        ReactionChange::Removed { user_id, emoji } => {
                            m.remove_reaction(user_id, emoji);
                        }
                    },
                );
            });
        }
    }
}
