//! Error types for peer identity operations.

use libp2p::PeerId;

/// Errors from [`PeerIdentity`](crate::PeerIdentity) construction and decoding.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid peer id: {0}")]
    InvalidPeerId(#[from] libp2p::identity::ParseError),
    #[error("invalid key encoding: {0}")]
    InvalidKey(#[from] libp2p::identity::DecodingError),
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("key does not derive peer id {0}")]
    KeyMismatch(PeerId),
    #[error("invalid identity json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("key generation failed: {0}")]
    Generation(#[from] tokio::task::JoinError),
}
