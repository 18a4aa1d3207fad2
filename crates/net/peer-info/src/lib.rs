//! Peer identity, reachable multiaddrs and connection state for libp2p overlays.
//!
//! - [`PeerInfo`] - Binds a [`PeerIdentity`] to its [`MultiaddrSet`], supported
//!   protocols and the multiaddr currently in use
//! - [`ConnectionState`] - `Disconnected` / `Connected(addr)` state machine
//! - [`PeerInfoSnapshot`] - Serializable view, plus the [`is_peer_info`] shape check
//!
//! Nothing here performs I/O; all operations are synchronous except
//! [`PeerInfo::create`], which may generate a key on the blocking pool.

mod access;
mod error;
mod protocols;
mod snapshot;
mod state;

pub use access::{MultiaddrsMut, ProtocolsMut};
pub use error::PeerInfoError;
pub use protocols::ProtocolSet;
pub use snapshot::{PeerInfoSnapshot, is_peer_info};
pub use state::ConnectionState;

pub use waypoint_net_identity::{IdentityError, IdentityJson, PeerIdentity, is_identity};
pub use waypoint_net_multiaddr_set::{
    AddrFormat, Format, IntoMultiaddr, MultiaddrSet, MultiaddrSetError, Observation,
};

use libp2p::Multiaddr;
use libp2p::multiaddr::Protocol;
use tracing::debug;

/// Where [`PeerInfo::create`] gets its identity from.
#[derive(Debug, Clone)]
pub enum IdentitySource {
    /// Generate a fresh keypair.
    Generate,
    Identity(PeerIdentity),
    Json(IdentityJson),
    /// Peer id multihash bytes.
    Bytes(Vec<u8>),
}

impl From<PeerIdentity> for IdentitySource {
    fn from(identity: PeerIdentity) -> Self {
        IdentitySource::Identity(identity)
    }
}

impl From<Option<PeerIdentity>> for IdentitySource {
    fn from(identity: Option<PeerIdentity>) -> Self {
        identity.map_or(IdentitySource::Generate, IdentitySource::Identity)
    }
}

impl From<IdentityJson> for IdentitySource {
    fn from(json: IdentityJson) -> Self {
        IdentitySource::Json(json)
    }
}

/// A peer on the overlay: who it is, where it can be reached, and which
/// address is in use.
///
/// The connected address must be in [`multiaddrs`](Self::multiaddrs) or be the
/// peer's own `/p2p/<id>` address at the time [`connect`](Self::connect) is
/// called. Later changes to the set do not disconnect the peer.
///
/// Not internally synchronized; share behind a lock.
#[derive(Debug, Clone)]
pub struct PeerInfo {
    id: PeerIdentity,
    multiaddrs: MultiaddrSet,
    protocols: ProtocolSet,
    connection: ConnectionState,
}

impl PeerInfo {
    pub fn new(id: PeerIdentity) -> Self {
        Self {
            id,
            multiaddrs: MultiaddrSet::new(),
            protocols: ProtocolSet::new(),
            connection: ConnectionState::Disconnected,
        }
    }

    /// Checked constructor for callers that may not have an identity yet.
    pub fn try_new(id: Option<PeerIdentity>) -> Result<Self, PeerInfoError> {
        id.map(Self::new).ok_or(PeerInfoError::MissingIdentity)
    }

    /// Build a `PeerInfo`, generating or decoding the identity as needed.
    ///
    /// Identity errors are returned as-is.
    pub async fn create(source: impl Into<IdentitySource>) -> Result<Self, IdentityError> {
        let id = match source.into() {
            IdentitySource::Generate => PeerIdentity::generate().await?,
            IdentitySource::Identity(id) => id,
            IdentitySource::Json(json) => PeerIdentity::from_json(&json)?,
            IdentitySource::Bytes(bytes) => PeerIdentity::from_bytes(&bytes)?,
        };
        Ok(Self::new(id))
    }

    pub fn id(&self) -> &PeerIdentity {
        &self.id
    }

    pub fn multiaddrs(&self) -> &MultiaddrSet {
        &self.multiaddrs
    }

    /// Element-wise access to the multiaddr set. The set itself can't be
    /// replaced.
    pub fn multiaddrs_mut(&mut self) -> MultiaddrsMut<'_> {
        MultiaddrsMut::new(&mut self.multiaddrs)
    }

    pub fn protocols(&self) -> &ProtocolSet {
        &self.protocols
    }

    pub fn protocols_mut(&mut self) -> ProtocolsMut<'_> {
        ProtocolsMut::new(&mut self.protocols)
    }

    /// The `/p2p/<id>` address standing for the peer itself.
    pub fn self_multiaddr(&self) -> Multiaddr {
        Multiaddr::empty().with(Protocol::P2p(self.id.peer_id()))
    }

    /// Record `addr` as the address in use, replacing any previous one.
    ///
    /// Fails with [`PeerInfoError::UnknownAddress`] unless `addr` is in the
    /// multiaddr set or is [`self_multiaddr`](Self::self_multiaddr); the state
    /// is unchanged on failure.
    pub fn connect(&mut self, addr: impl IntoMultiaddr) -> Result<(), PeerInfoError> {
        let addr = addr.into_multiaddr()?;
        if !self.multiaddrs.contains(&addr) && addr != self.self_multiaddr() {
            return Err(PeerInfoError::UnknownAddress(addr));
        }

        debug!(peer = %self.id, %addr, "peer connected");
        self.connection = ConnectionState::Connected(addr);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if self.connection.is_connected() {
            debug!(peer = %self.id, "peer disconnected");
        }
        self.connection = ConnectionState::Disconnected;
    }

    /// The address in use, or `None` when disconnected.
    pub fn is_connected(&self) -> Option<&Multiaddr> {
        self.connection.multiaddr()
    }

    pub fn connection_state(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn snapshot(&self) -> PeerInfoSnapshot {
        PeerInfoSnapshot {
            id: self.id.to_base58(),
            multiaddrs: self.multiaddrs.to_vec(),
            protocols: self.protocols.iter().map(str::to_owned).collect(),
            connected: self.connection.multiaddr().cloned(),
        }
    }

    /// Rebuild a `PeerInfo` from a snapshot. The connected address is
    /// re-validated through [`connect`](Self::connect).
    pub fn from_snapshot(snapshot: PeerInfoSnapshot) -> Result<Self, PeerInfoError> {
        let mut info = Self::new(PeerIdentity::from_base58(&snapshot.id)?);
        info.multiaddrs = MultiaddrSet::with_multiaddrs(snapshot.multiaddrs);
        info.protocols.extend(snapshot.protocols);
        if let Some(addr) = snapshot.connected {
            info.connect(addr)?;
        }
        Ok(info)
    }
}
