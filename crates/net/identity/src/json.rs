//! JSON form of a peer identity.

use libp2p::PeerId;
use serde::{Deserialize, Serialize};

/// Serializable identity: base58 peer id plus optional hex-encoded keys.
///
/// Keys use the libp2p protobuf key encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityJson {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priv_key: Option<String>,
}

/// Returns true if `value` looks like a serialized identity: an object whose
/// `id` is a string decoding to a [`PeerId`].
///
/// Keys are not inspected.
pub fn is_identity(value: &serde_json::Value) -> bool {
    value
        .get("id")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|id| id.parse::<PeerId>().is_ok())
}
