// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::app::deps::{AppDependencies, DynQueryCache};
use crate::app::event_handlers::{CacheEvent, ServerEvent, ServerEventHandler};
use crate::domain::shared::models::{CacheKey, CacheNamespace};

pub struct CacheEventHandler {
    query_cache: DynQueryCache,
}

impl From<&AppDependencies> for CacheEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            query_cache: deps.query_cache.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for CacheEventHandler {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Cache(CacheEvent::Invalidate { keys }) => {
                self.handle_invalidation(keys);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl CacheEventHandler {
    fn handle_invalidation(&self, keys: Vec<String>) {
        let mut exact_keys = Vec::new();

        for raw in &keys {
            if let Ok(key) = raw.parse::<CacheKey>() {
                exact_keys.push(key);
            } else if let Ok(namespace) = raw.parse::<CacheNamespace>() {
                self.query_cache.invalidate_namespace(&namespace);
            } else {
                warn!("Ignoring unrecognized cache key '{raw}'");
            }
        }

        self.query_cache.invalidate_all(exact_keys);
    }
}
