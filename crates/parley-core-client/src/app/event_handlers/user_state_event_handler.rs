// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::app::deps::{AppDependencies, DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, UserStateEvent};
use crate::domain::shared::models::UserId;
use crate::domain::user_info::models::{AccountStatus, MediaPermission};
use crate::{AccountNotice, ClientEvent};

pub struct UserStateEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for UserStateEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for UserStateEventHandler {
    fn name(&self) -> &'static str {
        "user_state"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::UserState(event) => match event {
                UserStateEvent::StatusChanged {
                    user_id,
                    status,
                    reason,
                } => self.handle_status_changed(user_id, status, reason),
                UserStateEvent::MediaPermissionChanged { media_permission } => {
                    self.handle_media_permission_changed(media_permission)
                }
            },
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl UserStateEventHandler {
    fn handle_status_changed(
        &self,
        user_id: UserId,
        status: AccountStatus,
        reason: Option<String>,
    ) {
        let Some(user) = self.ctx.current_user() else {
            return;
        };
        if user.id != user_id {
            // Other accounts' transitions only matter to the admin views,
            // which are refreshed via cache invalidation.
            debug!("Ignoring status change for user '{user_id}'");
            return;
        }

        let previous = user.status;
        self.ctx.update_current_user(|u| u.status = status);

        if previous == status {
            return;
        }
        info!("Account status changed from {previous} to {status}");

        match status {
            AccountStatus::Approved if previous == AccountStatus::Pending => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::AccountNotice {
                        notice: AccountNotice::Approved,
                    });
            }
            AccountStatus::Suspended => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::AccountNotice {
                        notice: AccountNotice::Suspended { reason },
                    });
            }
            _ => (),
        }
    }

    fn handle_media_permission_changed(&self, media_permission: MediaPermission) {
        self.ctx
            .update_current_user(|u| u.media_permission = media_permission);
    }
}
