// parley-core-client/parley-store
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::paged_list::{Page, PagedList};
pub use crate::query_cache::{CacheChange, CacheEntry, CacheKey, QueryCache};
pub use crate::time_provider::{SystemTimeProvider, TimeProvider};
