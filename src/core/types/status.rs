//! Connection lifecycle state.

/// Process-wide connection state, advanced only by transport events.
///
/// `start` is allowed only from `Disconnected`; a transport-initiated
/// disconnect resets to `Disconnected`, after which `start` may be called
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Authenticated,
    Connected,
}
