//! Error types for peer info operations.

use libp2p::Multiaddr;
use waypoint_net_identity::IdentityError;
use waypoint_net_multiaddr_set::MultiaddrSetError;

/// Errors from [`PeerInfo`](crate::PeerInfo) construction and connection tracking.
#[derive(Debug, thiserror::Error)]
pub enum PeerInfoError {
    #[error("missing peer identity, use PeerInfo::create to generate one")]
    MissingIdentity,
    #[error("can't connect to {0}: not in the peer's multiaddr set")]
    UnknownAddress(Multiaddr),
    #[error(transparent)]
    InvalidAddress(#[from] MultiaddrSetError),
    #[error("invalid snapshot identity: {0}")]
    Identity(#[from] IdentityError),
}
