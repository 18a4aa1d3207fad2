//! Insertion-ordered multiaddr set with an observation quarantine.

use std::collections::HashSet;

use hashlink::LinkedHashSet;
use libp2p::Multiaddr;
use tracing::{debug, trace};

use crate::error::MultiaddrSetError;
use crate::format::AddrFormat;
use crate::normalize::IntoMultiaddr;
use crate::options::EndpointShape;

/// Outcome of [`MultiaddrSet::add_safe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Observation {
    /// Seen for the second time; moved from quarantine into the set.
    Confirmed,
    /// First sighting; held in quarantine, the set is unchanged.
    Pending,
}

impl Observation {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Observation::Confirmed)
    }
}

/// The multiaddrs at which a peer can be reached.
///
/// Elements are unique by byte equality and iterate in insertion order.
/// Addresses reported by untrusted observers go through [`add_safe`](Self::add_safe),
/// which only admits an address once it has been observed twice. Quarantined
/// addresses are not part of the set and do not count towards [`len`](Self::len).
///
/// Not internally synchronized; share behind a lock.
#[derive(Debug, Clone, Default)]
pub struct MultiaddrSet {
    multiaddrs: LinkedHashSet<Multiaddr>,
    observed: LinkedHashSet<Multiaddr>,
}

impl MultiaddrSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an initial list, dropping duplicates.
    pub fn with_multiaddrs(multiaddrs: impl IntoIterator<Item = Multiaddr>) -> Self {
        let mut set = Self::new();
        for addr in multiaddrs {
            set.insert(addr);
        }
        set
    }

    fn insert(&mut self, addr: Multiaddr) {
        if !self.multiaddrs.contains(&addr) {
            trace!(%addr, "adding multiaddr");
            self.multiaddrs.insert(addr);
        }
    }

    /// Add an address. Adding an address already in the set is a no-op.
    pub fn add(&mut self, addr: impl IntoMultiaddr) -> Result<(), MultiaddrSetError> {
        self.insert(addr.into_multiaddr()?);
        Ok(())
    }

    /// Add an observed address once it has been reported twice.
    ///
    /// The first report quarantines the address and returns
    /// [`Observation::Pending`]. A second report of an equal address releases it
    /// from quarantine into the set and returns [`Observation::Confirmed`].
    /// The quarantine is unbounded.
    pub fn add_safe(&mut self, addr: impl IntoMultiaddr) -> Result<Observation, MultiaddrSetError> {
        let addr = addr.into_multiaddr()?;

        if self.observed.remove(&addr) {
            debug!(%addr, "observed multiaddr confirmed");
            self.insert(addr);
            return Ok(Observation::Confirmed);
        }

        trace!(%addr, "quarantining observed multiaddr");
        self.observed.insert(addr);
        Ok(Observation::Pending)
    }

    /// Remove an address. Returns whether it was present.
    pub fn delete(&mut self, addr: impl IntoMultiaddr) -> Result<bool, MultiaddrSetError> {
        let addr = addr.into_multiaddr()?;
        let removed = self.multiaddrs.remove(&addr);
        if removed {
            trace!(%addr, "deleted multiaddr");
        }
        Ok(removed)
    }

    pub fn has(&self, addr: impl IntoMultiaddr) -> Result<bool, MultiaddrSetError> {
        Ok(self.contains(&addr.into_multiaddr()?))
    }

    pub fn contains(&self, addr: &Multiaddr) -> bool {
        self.multiaddrs.contains(addr)
    }

    /// Delete every address in `existing`, then add every address in `fresh`.
    ///
    /// Not atomic: each address is converted as it is reached, so a malformed
    /// entry stops the operation with earlier removals and insertions applied.
    /// Validate the inputs up front if all-or-nothing behaviour is needed.
    pub fn replace<E, F>(&mut self, existing: E, fresh: F) -> Result<(), MultiaddrSetError>
    where
        E: IntoIterator,
        E::Item: IntoMultiaddr,
        F: IntoIterator,
        F::Item: IntoMultiaddr,
    {
        for addr in existing {
            self.delete(addr)?;
        }
        for addr in fresh {
            self.add(addr)?;
        }
        Ok(())
    }

    /// Remove all addresses. Quarantined observations are kept.
    pub fn clear(&mut self) {
        self.multiaddrs.clear();
    }

    pub fn len(&self) -> usize {
        self.multiaddrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multiaddrs.is_empty()
    }

    /// Number of addresses waiting in quarantine.
    pub fn pending_len(&self) -> usize {
        self.observed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Multiaddr> {
        self.multiaddrs.iter()
    }

    /// Snapshot of the set in iteration order.
    pub fn to_vec(&self) -> Vec<Multiaddr> {
        self.multiaddrs.iter().cloned().collect()
    }

    /// Call `f` with every address and its position.
    pub fn for_each(&self, mut f: impl FnMut(&Multiaddr, usize)) {
        for (index, addr) in self.multiaddrs.iter().enumerate() {
            f(addr, index);
        }
    }

    /// Addresses matching `format`, in iteration order.
    pub fn filter_by<F: AddrFormat + ?Sized>(&self, format: &F) -> Vec<Multiaddr> {
        self.multiaddrs
            .iter()
            .filter(|addr| format.matches(addr))
            .cloned()
            .collect()
    }

    /// One address per `(port, transport)` endpoint shape.
    ///
    /// The first address seen for a shape wins, whatever its family. Addresses
    /// without a shape (no host/port prefix) are all kept. The set itself is
    /// not modified.
    pub fn distinct(&self) -> Vec<Multiaddr> {
        let mut seen = HashSet::new();
        self.multiaddrs
            .iter()
            .filter(|addr| match EndpointShape::of(addr) {
                Some(shape) => seen.insert(shape),
                None => true,
            })
            .cloned()
            .collect()
    }
}

impl<'a> IntoIterator for &'a MultiaddrSet {
    type Item = &'a Multiaddr;
    type IntoIter = hashlink::linked_hash_set::Iter<'a, Multiaddr>;

    fn into_iter(self) -> Self::IntoIter {
        self.multiaddrs.iter()
    }
}

impl FromIterator<Multiaddr> for MultiaddrSet {
    fn from_iter<T: IntoIterator<Item = Multiaddr>>(iter: T) -> Self {
        Self::with_multiaddrs(iter)
    }
}
