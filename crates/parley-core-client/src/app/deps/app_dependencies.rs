// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parley_store::TimeProvider;

use crate::app::deps::app_context::AppContext;
use crate::app::deps::query_cache::ClientQueryCache;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::connector::Connector;
use crate::domain::messaging::models::TypingRegistry;
use crate::domain::messaging::services::MessageReconciler;
use crate::util::IDProvider;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConnector = Arc<dyn Connector>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynMessageReconciler = Arc<MessageReconciler>;
pub(crate) type DynQueryCache = Arc<ClientQueryCache>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynTypingRegistry = Arc<TypingRegistry>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub message_reconciler: DynMessageReconciler,
    pub query_cache: DynQueryCache,
    pub time_provider: DynTimeProvider,
    pub typing_registry: DynTypingRegistry,
}
