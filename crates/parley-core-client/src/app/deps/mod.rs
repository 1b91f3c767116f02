// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::AppContext;
pub use app_dependencies::*;
pub use query_cache::{CacheValue, ClientQueryCache};

mod app_context;
mod app_dependencies;
mod query_cache;
