//! Set of protocol identifiers a peer supports.

use hashlink::LinkedHashSet;

/// Insertion-ordered set of protocol ids (e.g. `/ipfs/ping/1.0.0`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolSet {
    protocols: LinkedHashSet<String>,
}

impl ProtocolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the protocol was not already present.
    pub fn insert(&mut self, protocol: impl Into<String>) -> bool {
        let protocol = protocol.into();
        if self.protocols.contains(&protocol) {
            return false;
        }
        self.protocols.insert(protocol)
    }

    pub fn contains(&self, protocol: &str) -> bool {
        self.protocols.contains(protocol)
    }

    /// Returns true if the protocol was present.
    pub fn remove(&mut self, protocol: &str) -> bool {
        self.protocols.remove(protocol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.protocols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    pub fn clear(&mut self) {
        self.protocols.clear();
    }
}

impl<S: Into<String>> Extend<S> for ProtocolSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for protocol in iter {
            self.insert(protocol);
        }
    }
}
