// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::warn;

use parley_store::{PagedList, TimeProvider};

use crate::app::deps::{
    AppDependencies, CacheValue, DynAppContext, DynIDProvider, DynQueryCache, DynTimeProvider,
};
use crate::app::services::ConnectionService;
use crate::domain::connection::models::ClientCommand;
use crate::domain::messaging::models::{
    Emoji, Message, MessageId, MessageIdentity, MessageStatus, SendMessageRequest, TempMessageId,
};
use crate::domain::shared::models::{CacheKey, ConversationId, MessageListScope};
use crate::util::IDProvider;

/// The client→server surface. Sending a message inserts a provisional record
/// into the cache before the network round-trip completes; the send
/// acknowledgement later reconciles it against the authoritative record.
pub struct ChatService {
    ctx: DynAppContext,
    query_cache: DynQueryCache,
    connection: Arc<ConnectionService>,
    id_provider: DynIDProvider,
    time_provider: DynTimeProvider,
}

impl ChatService {
    pub(crate) fn new(deps: &AppDependencies, connection: Arc<ConnectionService>) -> Self {
        ChatService {
            ctx: deps.ctx.clone(),
            query_cache: deps.query_cache.clone(),
            connection,
            id_provider: deps.id_provider.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }

    /// Sends a message. `conversation_id` is `None` for the first message of
    /// a brand-new conversation; the provisional record is then filed under
    /// the pending slot until the server names the conversation.
    pub fn send_message(
        &self,
        conversation_id: Option<ConversationId>,
        request: SendMessageRequest,
    ) -> Result<TempMessageId> {
        let user = self
            .ctx
            .current_user()
            .ok_or_else(|| anyhow!("Cannot send a message without an authenticated user"))?;

        let temp_id = TempMessageId::from(self.id_provider.new_id());
        let message = Message {
            identity: MessageIdentity::Provisional(temp_id.clone()),
            conversation_id: conversation_id.clone(),
            sender_id: user.id,
            kind: request.kind,
            content: request.content.clone(),
            media_id: request.media_id.clone(),
            reply_to_id: request.reply_to_id.clone(),
            status: MessageStatus::Sent,
            sent_at: self.time_provider.now(),
            read_at: None,
            deleted_at: None,
            reactions: vec![],
        };

        let key = CacheKey::Messages(MessageListScope::from(conversation_id.clone()));
        self.query_cache.upsert(key.clone(), |value| {
            let mut value = value.unwrap_or_else(|| CacheValue::Messages(PagedList::default()));
            if let Some(list) = value.as_messages_mut() {
                list.append_newest(message.clone());
            }
            value
        });

        let command = ClientCommand::SendMessage {
            conversation_id,
            kind: request.kind,
            content: request.content,
            media_id: request.media_id,
            temp_id: temp_id.clone(),
            reply_to_id: request.reply_to_id,
        };

        if let Err(err) = self.connection.send_command(command) {
            // The provisional record stays visible, flagged as failed, so the
            // user can retry.
            warn!("Failed to send message '{temp_id}': {err}");
            self.query_cache.update(&key, |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                list.update_where(
                    |m| m.has_temp_id(&temp_id),
                    |m| m.status = MessageStatus::Failed,
                );
            });
        }

        Ok(temp_id)
    }

    pub fn react(&self, message_id: MessageId, emoji: Emoji) -> Result<()> {
        self.connection
            .send_command(ClientCommand::React { message_id, emoji })
    }

    pub fn mark_conversation_read(&self, conversation_id: ConversationId) -> Result<()> {
        self.connection
            .send_command(ClientCommand::MarkRead { conversation_id })
    }

    pub fn set_typing(&self, conversation_id: ConversationId, typing: bool) -> Result<()> {
        let command = if typing {
            ClientCommand::TypingStart { conversation_id }
        } else {
            ClientCommand::TypingStop { conversation_id }
        };
        self.connection.send_command(command)
    }
}
