//! Error types for multiaddr set operations.

/// Errors from [`MultiaddrSet`](crate::MultiaddrSet) operations.
#[derive(Debug, thiserror::Error)]
pub enum MultiaddrSetError {
    #[error("invalid multiaddr: {0}")]
    InvalidAddress(#[from] libp2p::multiaddr::Error),
}
