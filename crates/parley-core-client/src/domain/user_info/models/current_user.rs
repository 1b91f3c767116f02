// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Staff,
    Admin,
}

impl UserRole {
    /// Staff and admins see the unfiltered view of announcements and do not
    /// take part in the optimistic unread bump.
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserRole::Staff | UserRole::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Approved,
    Suspended,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MediaPermission {
    #[default]
    Denied,
    Granted,
}

/// The in-memory record of the authenticated user. Owned by the `AppContext`;
/// patched in place by user-state events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: UserId,
    pub display_name: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub media_permission: MediaPermission,
}
