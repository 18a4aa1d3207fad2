//! Peer identity for libp2p overlays.
//!
//! Provides [`PeerIdentity`], a [`PeerId`] optionally backed by its public key or
//! full [`Keypair`]. Identities are compared by peer id only.
//!
//! Encodings:
//! - base58 string ([`PeerIdentity::to_base58`])
//! - multihash bytes ([`PeerIdentity::to_bytes`])
//! - JSON ([`IdentityJson`]) carrying hex protobuf-encoded keys

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod json;

pub use error::IdentityError;
pub use json::{IdentityJson, is_identity};

use std::fmt;
use std::hash::{Hash, Hasher};

use libp2p::PeerId;
use libp2p::identity::{Keypair, PublicKey};
use tracing::debug;

/// A peer's identity.
///
/// Holds at least the [`PeerId`]. Identities built from a key also carry the
/// public key; locally generated identities carry the whole keypair.
#[derive(Clone)]
pub struct PeerIdentity {
    peer_id: PeerId,
    /// Public key, if known.
    public_key: Option<PublicKey>,
    /// Signing keypair, only present for local identities.
    keypair: Option<Keypair>,
}

impl PeerIdentity {
    /// Generates a fresh Ed25519 identity on the blocking thread pool.
    pub async fn generate() -> Result<Self, IdentityError> {
        let keypair = tokio::task::spawn_blocking(Keypair::generate_ed25519).await?;
        let identity = Self::from_keypair(keypair);
        debug!(peer = %identity, "generated identity");
        Ok(identity)
    }

    pub fn from_keypair(keypair: Keypair) -> Self {
        let public_key = keypair.public();
        Self {
            peer_id: public_key.to_peer_id(),
            public_key: Some(public_key),
            keypair: Some(keypair),
        }
    }

    pub fn from_public_key(public_key: PublicKey) -> Self {
        Self {
            peer_id: public_key.to_peer_id(),
            public_key: Some(public_key),
            keypair: None,
        }
    }

    pub fn from_peer_id(peer_id: PeerId) -> Self {
        Self {
            peer_id,
            public_key: None,
            keypair: None,
        }
    }

    pub fn from_base58(encoded: &str) -> Result<Self, IdentityError> {
        Ok(Self::from_peer_id(encoded.parse()?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        Ok(Self::from_peer_id(PeerId::from_bytes(bytes)?))
    }

    /// Decodes the JSON form, checking that any supplied key derives `id`.
    pub fn from_json(json: &IdentityJson) -> Result<Self, IdentityError> {
        let peer_id: PeerId = json.id.parse()?;

        let keypair = match &json.priv_key {
            Some(encoded) => Some(Keypair::from_protobuf_encoding(&hex::decode(encoded)?)?),
            None => None,
        };
        let public_key = match &json.pub_key {
            Some(encoded) => Some(PublicKey::try_decode_protobuf(&hex::decode(encoded)?)?),
            None => None,
        };

        let derived = keypair
            .as_ref()
            .map(Keypair::public)
            .into_iter()
            .chain(public_key.clone());
        for key in derived {
            if key.to_peer_id() != peer_id {
                return Err(IdentityError::KeyMismatch(peer_id));
            }
        }

        Ok(Self {
            peer_id,
            public_key: keypair.as_ref().map(Keypair::public).or(public_key),
            keypair,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, IdentityError> {
        Self::from_json(&serde_json::from_str(json)?)
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    pub fn keypair(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }

    pub fn has_private_key(&self) -> bool {
        self.keypair.is_some()
    }

    /// Stable string encoding.
    pub fn to_base58(&self) -> String {
        self.peer_id.to_base58()
    }

    /// Canonical byte encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.peer_id.to_bytes()
    }

    pub fn to_json(&self) -> Result<IdentityJson, IdentityError> {
        let priv_key = match &self.keypair {
            Some(keypair) => Some(hex::encode(keypair.to_protobuf_encoding()?)),
            None => None,
        };
        Ok(IdentityJson {
            id: self.to_base58(),
            pub_key: self
                .public_key
                .as_ref()
                .map(|key| hex::encode(key.encode_protobuf())),
            priv_key,
        })
    }

    pub fn to_json_string(&self) -> Result<String, IdentityError> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }
}

impl PartialEq for PeerIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.peer_id == other.peer_id
    }
}

impl Eq for PeerIdentity {}

impl Hash for PeerIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.peer_id.hash(state);
    }
}

impl fmt::Debug for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerIdentity")
            .field("peer_id", &self.peer_id)
            .field("has_public_key", &self.public_key.is_some())
            .field("has_private_key", &self.keypair.is_some())
            .finish()
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.peer_id, f)
    }
}

impl From<Keypair> for PeerIdentity {
    fn from(keypair: Keypair) -> Self {
        Self::from_keypair(keypair)
    }
}

impl From<PeerId> for PeerIdentity {
    fn from(peer_id: PeerId) -> Self {
        Self::from_peer_id(peer_id)
    }
}
