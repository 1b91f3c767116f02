// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::AnnouncementId;
use crate::domain::user_info::models::UserRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub body: String,
    /// `None` targets everyone.
    pub audience: Option<Vec<UserRole>>,
    pub is_active: bool,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Announcement {
    /// The visibility rule applied at fetch time for unprivileged viewers:
    /// active, not expired, role-targeted or untargeted. Privileged viewers
    /// bypass this entirely.
    pub fn is_visible_to(&self, role: UserRole, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if self.expires_at.map(|expires_at| expires_at <= now) == Some(true) {
            return false;
        }
        self.audience
            .as_ref()
            .map(|audience| audience.contains(&role))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn announcement() -> Announcement {
        Announcement {
            id: "a1".into(),
            title: "Scheduled maintenance".to_string(),
            body: "We'll be offline for a bit.".to_string(),
            audience: None,
            is_active: true,
            published_at: Utc.with_ymd_and_hms(2024, 5, 14, 10, 0, 0).unwrap(),
            expires_at: None,
        }
    }

    #[test]
    fn test_visibility_rule() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 12, 0, 0).unwrap();

        assert!(announcement().is_visible_to(UserRole::Customer, now));

        let mut inactive = announcement();
        inactive.is_active = false;
        assert!(!inactive.is_visible_to(UserRole::Customer, now));

        let mut expired = announcement();
        expired.expires_at = Some(Utc.with_ymd_and_hms(2024, 5, 14, 11, 0, 0).unwrap());
        assert!(!expired.is_visible_to(UserRole::Customer, now));

        let mut targeted = announcement();
        targeted.audience = Some(vec![UserRole::Staff]);
        assert!(!targeted.is_visible_to(UserRole::Customer, now));
        assert!(targeted.is_visible_to(UserRole::Staff, now));
    }
}
