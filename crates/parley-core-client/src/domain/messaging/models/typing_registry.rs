// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::shared::models::{ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct TypingUser {
    pub user_id: UserId,
    pub display_name: String,
}

/// Ephemeral per-conversation record of who is currently typing. Entries are
/// added on "typing start" events and removed on "typing stop" or when the
/// owning view leaves the conversation. Nothing here is persisted.
#[derive(Default)]
pub struct TypingRegistry {
    state: RwLock<HashMap<ConversationId, IndexMap<UserId, String>>>,
}

impl TypingRegistry {
    pub fn start(&self, conversation_id: ConversationId, user_id: UserId, display_name: String) {
        self.state
            .write()
            .entry(conversation_id)
            .or_default()
            .insert(user_id, display_name);
    }

    pub fn stop(&self, conversation_id: &ConversationId, user_id: &UserId) {
        let mut state = self.state.write();
        let Some(users) = state.get_mut(conversation_id) else {
            return;
        };
        users.shift_remove(user_id);
        if users.is_empty() {
            state.remove(conversation_id);
        }
    }

    /// Users typing in `conversation_id`, in the order they started.
    pub fn typing_users(&self, conversation_id: &ConversationId) -> Vec<TypingUser> {
        self.state
            .read()
            .get(conversation_id)
            .map(|users| {
                users
                    .iter()
                    .map(|(user_id, display_name)| TypingUser {
                        user_id: user_id.clone(),
                        display_name: display_name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear_conversation(&self, conversation_id: &ConversationId) {
        self.state.write().remove(conversation_id);
    }

    pub fn clear_all(&self) {
        self.state.write().clear();
    }
}
