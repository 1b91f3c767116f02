// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::connector::ConnectionError;

/// Events surfaced to the embedding application via the [`ClientDelegate`].
/// Data changes are not announced here — views observe those through the
/// query cache's change feed.
///
/// [`ClientDelegate`]: crate::ClientDelegate
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// Something about the signed-in account deserves the user's attention.
    AccountNotice { notice: AccountNotice },

    /// The session is no longer valid; the application must sign the user
    /// out. The cache is not repaired — it is discarded with the session.
    SignOutRequired { reason: SignOutReason },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccountNotice {
    /// The account left the approval queue.
    Approved,
    Suspended { reason: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignOutReason {
    SessionRevoked { reason: Option<String> },
    AuthenticationError { message: String },
}
