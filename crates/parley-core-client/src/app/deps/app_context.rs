// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::shared::models::ConnectionState;
use crate::domain::user_info::models::CurrentUser;

/// Process-wide state shared by all handlers and services: the connection
/// state machine and the authenticated user's record.
#[derive(Default)]
pub struct AppContext {
    pub connection_state: RwLock<ConnectionState>,
    pub current_user: RwLock<Option<CurrentUser>>,
}

impl AppContext {
    pub fn connection_state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    pub fn set_connection_state(&self, state: ConnectionState) {
        *self.connection_state.write() = state;
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.current_user.read().clone()
    }

    pub fn set_current_user(&self, user: Option<CurrentUser>) {
        *self.current_user.write() = user;
    }

    /// Patches the current user in place. No-op when nobody is signed in;
    /// returns whether a record was patched.
    pub fn update_current_user(&self, f: impl FnOnce(&mut CurrentUser)) -> bool {
        let mut guard = self.current_user.write();
        let Some(user) = guard.as_mut() else {
            return false;
        };
        f(user);
        true
    }
}
