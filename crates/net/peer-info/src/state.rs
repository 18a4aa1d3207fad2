//! Single-link connection state.

use libp2p::Multiaddr;

/// Which multiaddr, if any, the peer is currently reached through.
///
/// Only one link is tracked; connecting again overwrites the previous address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(Multiaddr),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    pub fn multiaddr(&self) -> Option<&Multiaddr> {
        match self {
            ConnectionState::Connected(addr) => Some(addr),
            ConnectionState::Disconnected => None,
        }
    }
}
