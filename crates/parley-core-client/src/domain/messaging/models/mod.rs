// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{Emoji, Message, MessageIdentity, MessageKind, MessageStatus, Reaction};
pub use message_id::{MessageId, TempMessageId};
pub use send_message_request::SendMessageRequest;
pub use typing_registry::{TypingRegistry, TypingUser};

mod message;
mod message_id;
mod send_message_request;
mod typing_registry;
