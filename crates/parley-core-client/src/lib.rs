// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::ClientBuilder;
pub use client_event::{AccountNotice, ClientEvent, ConnectionEvent, SignOutReason};
pub use parley_store::{SystemTimeProvider, TimeProvider};
pub use util::{IDProvider, UUIDProvider};

pub use app::dtos;

pub mod app;
mod client;
mod client_builder;
mod client_event;
pub mod connector;
pub mod domain;
pub(crate) mod util;
