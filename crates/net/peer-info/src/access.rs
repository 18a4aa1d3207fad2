//! Element-wise mutable views of a peer's collections.
//!
//! [`PeerInfo`](crate::PeerInfo) owns its multiaddr set and protocol set. These
//! views let callers add and remove entries but never swap a collection out, so
//! the quarantine and the connection invariant stay with the peer.
//!
//! ```compile_fail
//! # use waypoint_net_peer_info::{MultiaddrSet, PeerIdentity, PeerInfo};
//! # fn swap(info: &mut PeerInfo) {
//! *info.multiaddrs_mut() = MultiaddrSet::new();
//! # }
//! ```
//!
//! ```compile_fail
//! # use waypoint_net_peer_info::{PeerInfo, ProtocolSet};
//! # fn swap(info: &mut PeerInfo) {
//! *info.protocols_mut() = ProtocolSet::new();
//! # }
//! ```

use std::ops::Deref;

use waypoint_net_multiaddr_set::{IntoMultiaddr, MultiaddrSet, MultiaddrSetError, Observation};

use crate::protocols::ProtocolSet;

/// Mutable view of a peer's [`MultiaddrSet`].
///
/// Reads go through [`Deref`].
#[derive(Debug)]
pub struct MultiaddrsMut<'a> {
    set: &'a mut MultiaddrSet,
}

impl<'a> MultiaddrsMut<'a> {
    pub(crate) fn new(set: &'a mut MultiaddrSet) -> Self {
        Self { set }
    }

    pub fn add(&mut self, addr: impl IntoMultiaddr) -> Result<(), MultiaddrSetError> {
        self.set.add(addr)
    }

    pub fn add_safe(&mut self, addr: impl IntoMultiaddr) -> Result<Observation, MultiaddrSetError> {
        self.set.add_safe(addr)
    }

    pub fn delete(&mut self, addr: impl IntoMultiaddr) -> Result<bool, MultiaddrSetError> {
        self.set.delete(addr)
    }

    /// See [`MultiaddrSet::replace`]; not atomic.
    pub fn replace<E, F>(&mut self, existing: E, fresh: F) -> Result<(), MultiaddrSetError>
    where
        E: IntoIterator,
        E::Item: IntoMultiaddr,
        F: IntoIterator,
        F::Item: IntoMultiaddr,
    {
        self.set.replace(existing, fresh)
    }

    /// Remove all addresses. Pending observations are kept.
    pub fn clear(&mut self) {
        self.set.clear();
    }
}

impl Deref for MultiaddrsMut<'_> {
    type Target = MultiaddrSet;

    fn deref(&self) -> &Self::Target {
        &*self.set
    }
}

/// Mutable view of a peer's [`ProtocolSet`].
#[derive(Debug)]
pub struct ProtocolsMut<'a> {
    protocols: &'a mut ProtocolSet,
}

impl<'a> ProtocolsMut<'a> {
    pub(crate) fn new(protocols: &'a mut ProtocolSet) -> Self {
        Self { protocols }
    }

    /// Returns true if the protocol was not already present.
    pub fn insert(&mut self, protocol: impl Into<String>) -> bool {
        self.protocols.insert(protocol)
    }

    /// Returns true if the protocol was present.
    pub fn remove(&mut self, protocol: &str) -> bool {
        self.protocols.remove(protocol)
    }

    pub fn clear(&mut self) {
        self.protocols.clear();
    }
}

impl<S: Into<String>> Extend<S> for ProtocolsMut<'_> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.protocols.extend(iter);
    }
}

impl Deref for ProtocolsMut<'_> {
    type Target = ProtocolSet;

    fn deref(&self) -> &Self::Target {
        &*self.protocols
    }
}
