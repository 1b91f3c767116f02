// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_utils::id_string;

id_string!(
    /// Server-assigned unique identifier of a conversation. First-contact
    /// messages are created before any such id exists client-side.
    ConversationId
);
