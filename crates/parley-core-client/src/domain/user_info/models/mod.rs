// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use current_user::{AccountStatus, CurrentUser, MediaPermission, UserRole};

mod current_user;
