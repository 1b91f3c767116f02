// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{info, warn};

use parley_store::PagedList;

use crate::app::deps::{CacheValue, DynQueryCache};
use crate::domain::messaging::models::{Message, TempMessageId};
use crate::domain::shared::models::CacheKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// The provisional message was found in the confirmed conversation's list
    /// and replaced in its slot.
    ReplacedInPlace,
    /// The provisional message was filed under the pending-conversation key,
    /// removed from there and appended to the confirmed conversation's list.
    MovedFromPending,
    /// The temp id matched nothing. The caller falls back to invalidation.
    Miss,
}

/// Matches a locally-created provisional message to the authoritative record
/// the server returned for it.
///
/// The two-tier lookup exists because the client cannot know the conversation
/// id at creation time for first-contact conversations: such messages are
/// filed under the pending key until the send acknowledgement names the real
/// conversation.
pub struct MessageReconciler {
    query_cache: DynQueryCache,
}

impl MessageReconciler {
    pub fn new(query_cache: DynQueryCache) -> Self {
        MessageReconciler { query_cache }
    }

    pub fn reconcile(
        &self,
        temp_id: &TempMessageId,
        confirmed: &Message,
    ) -> ReconciliationOutcome {
        let Some(conversation_id) = confirmed.conversation_id.clone() else {
            warn!("Cannot reconcile '{temp_id}' — confirmed message carries no conversation id");
            return ReconciliationOutcome::Miss;
        };
        let known_key = CacheKey::messages(conversation_id);

        // Common case: the conversation was known when the message was sent.
        let mut replaced = false;
        self.query_cache.update(&known_key, |value| {
            let Some(list) = value.as_messages_mut() else {
                return;
            };
            replaced = list.replace_first(|m| m.has_temp_id(temp_id), confirmed.clone());
        });
        if replaced {
            return ReconciliationOutcome::ReplacedInPlace;
        }

        // First-contact case: the message was filed before the conversation id
        // existed. The pending slot is filtered, not replaced — it will never
        // be read again under the real conversation id.
        let mut removed = 0;
        self.query_cache
            .update(&CacheKey::pending_messages(), |value| {
                let Some(list) = value.as_messages_mut() else {
                    return;
                };
                removed = list.retain(|m| !m.has_temp_id(temp_id));
            });
        if removed == 0 {
            return ReconciliationOutcome::Miss;
        }

        info!("Moving message '{temp_id}' from the pending slot into its conversation");
        self.query_cache.upsert(known_key, |value| {
            let mut value = value.unwrap_or_else(|| CacheValue::Messages(PagedList::default()));
            if let Some(list) = value.as_messages_mut() {
                let already_present = confirmed
                    .identity
                    .message_id()
                    .map(|id| list.contains(|m| m.has_id(id)))
                    .unwrap_or_default();
                if !already_present {
                    list.append_newest(confirmed.clone());
                }
            }
            value
        });
        ReconciliationOutcome::MovedFromPending
    }
}
