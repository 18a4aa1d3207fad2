//! Conversion of textual and binary input into [`Multiaddr`].

use bytes::Bytes;
use libp2p::Multiaddr;

use crate::error::MultiaddrSetError;

/// A value that can be converted into a canonical [`Multiaddr`].
///
/// Every public operation of [`MultiaddrSet`](crate::MultiaddrSet) that accepts an
/// address goes through this conversion once, at its entry.
pub trait IntoMultiaddr {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError>;
}

impl IntoMultiaddr for Multiaddr {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        Ok(self)
    }
}

impl IntoMultiaddr for &Multiaddr {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        Ok(self.clone())
    }
}

impl IntoMultiaddr for &str {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        Ok(self.parse()?)
    }
}

impl IntoMultiaddr for String {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        self.as_str().into_multiaddr()
    }
}

impl IntoMultiaddr for &String {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        self.as_str().into_multiaddr()
    }
}

impl IntoMultiaddr for &[u8] {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        self.to_vec().into_multiaddr()
    }
}

impl IntoMultiaddr for Vec<u8> {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        Ok(Multiaddr::try_from(self)?)
    }
}

impl IntoMultiaddr for Bytes {
    fn into_multiaddr(self) -> Result<Multiaddr, MultiaddrSetError> {
        self.to_vec().into_multiaddr()
    }
}

/// Returns true if `value` converts to a valid [`Multiaddr`].
pub fn is_multiaddr(value: impl IntoMultiaddr) -> bool {
    value.into_multiaddr().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn text_and_bytes_agree() {
        let from_text = "/ip4/127.0.0.1/tcp/5001".into_multiaddr().unwrap();
        let from_bytes = from_text.to_vec().into_multiaddr().unwrap();
        let from_shared = Bytes::from(from_text.to_vec()).into_multiaddr().unwrap();

        assert_eq!(from_text, from_bytes);
        assert_eq!(from_text, from_shared);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_matches!(
            "not-a-multiaddr".into_multiaddr(),
            Err(MultiaddrSetError::InvalidAddress(_))
        );
        assert_matches!(
            "/ip4/300.0.0.1/tcp/1".into_multiaddr(),
            Err(MultiaddrSetError::InvalidAddress(_))
        );
    }

    #[test]
    fn rejects_malformed_bytes() {
        assert_matches!(
            vec![0xff_u8, 0xff, 0xff].into_multiaddr(),
            Err(MultiaddrSetError::InvalidAddress(_))
        );
    }

    #[test]
    fn predicate() {
        assert!(is_multiaddr("/ip6/::1/udp/4001/quic-v1"));
        assert!(!is_multiaddr("bananas"));
    }
}
