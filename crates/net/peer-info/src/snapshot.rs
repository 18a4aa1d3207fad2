//! Serializable peer info snapshots.

use libp2p::Multiaddr;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Serializable view of a [`PeerInfo`](crate::PeerInfo).
///
/// Holds the base58 peer id only; key material is never part of a snapshot.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfoSnapshot {
    pub id: String,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub multiaddrs: Vec<Multiaddr>,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<Multiaddr>,
}

/// Returns true if `value` has the shape of a serialized peer info: an object
/// with non-null `id` and `multiaddrs` fields.
///
/// A structural check for values crossing module boundaries, not a validation.
pub fn is_peer_info(value: &serde_json::Value) -> bool {
    value.as_object().is_some_and(|object| {
        ["id", "multiaddrs"]
            .iter()
            .all(|field| object.get(*field).is_some_and(|v| !v.is_null()))
    })
}
