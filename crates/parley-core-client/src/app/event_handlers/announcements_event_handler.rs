// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use parley_store::TimeProvider;

use crate::app::deps::{AppDependencies, DynAppContext, DynQueryCache, DynTimeProvider};
use crate::app::event_handlers::{AnnouncementEvent, ServerEvent, ServerEventHandler};
use crate::domain::announcements::models::Announcement;
use crate::domain::shared::models::{CacheKey, CacheNamespace};

pub struct AnnouncementsEventHandler {
    ctx: DynAppContext,
    query_cache: DynQueryCache,
    time_provider: DynTimeProvider,
}

impl From<&AppDependencies> for AnnouncementsEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            query_cache: deps.query_cache.clone(),
            time_provider: deps.time_provider.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for AnnouncementsEventHandler {
    fn name(&self) -> &'static str {
        "announcements"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Announcement(AnnouncementEvent::Created { announcement }) => {
                self.handle_announcement_created(announcement);
            }
            ServerEvent::Announcement(AnnouncementEvent::Updated { announcement }) => {
                match announcement {
                    Some(announcement) => self.handle_announcement_updated(announcement),
                    None => {
                        // An update we are not allowed to see in full. All we
                        // can do is refetch.
                        self.query_cache
                            .invalidate_namespace(&CacheNamespace::Announcements);
                    }
                }
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl AnnouncementsEventHandler {
    fn handle_announcement_created(&self, announcement: Announcement) {
        let updated = self.query_cache.update(&CacheKey::Announcements, |value| {
            let Some(list) = value.as_announcements_mut() else {
                return;
            };
            if list.contains(|a| a.id == announcement.id) {
                return;
            }
            list.prepend_newest(announcement.clone());
        });

        if !updated {
            info!("No cached announcement list to prepend to, invalidating");
            self.query_cache.invalidate(&CacheKey::Announcements);
        }
    }

    fn handle_announcement_updated(&self, announcement: Announcement) {
        let Some(user) = self.ctx.current_user() else {
            return;
        };
        let now = self.time_provider.now();
        let visible = user.role.is_privileged() || announcement.is_visible_to(user.role, now);

        self.query_cache.update(&CacheKey::Announcements, |value| {
            let Some(list) = value.as_announcements_mut() else {
                return;
            };
            if visible {
                list.replace_first(|a| a.id == announcement.id, announcement.clone());
            } else {
                // The same visibility rule as the initial fetch: what would
                // not have been fetched is removed.
                list.retain(|a| a.id != announcement.id);
            }
        });

        self.query_cache.update(
            &CacheKey::Announcement(announcement.id.clone()),
            |value| {
                if let Some(existing) = value.as_announcement_mut() {
                    *existing = announcement.clone();
                }
            },
        );
    }
}
