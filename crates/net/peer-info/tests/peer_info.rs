//! End-to-end behaviour of `PeerInfo` and its multiaddr set.

use assert_matches::assert_matches;
use libp2p::Multiaddr;
use proptest::prelude::*;
use proptest_arbitrary_interop::arb;
use waypoint_net_multiaddr_set::arbitrary_multiaddr;
use waypoint_net_peer_info::{
    ConnectionState, Format, IdentityError, IdentityJson, IdentitySource, PeerIdentity, PeerInfo,
    PeerInfoError, is_peer_info,
};
use waypoint_observability::{LogArgs, init_logging};

fn ma(s: &str) -> Multiaddr {
    s.parse().unwrap()
}

/// Route set and connection events through the workspace subscriber. Only the
/// first call in the test binary installs it.
fn init_tracing() {
    let _ = init_logging(&LogArgs {
        verbosity: 2,
        ..Default::default()
    });
}

fn local_peer(n: u8) -> PeerInfo {
    init_tracing();
    let key = libp2p::identity::ed25519::SecretKey::try_from_bytes([n; 32]).unwrap();
    let keypair =
        libp2p::identity::Keypair::from(libp2p::identity::ed25519::Keypair::from(key));
    PeerInfo::new(PeerIdentity::from_keypair(keypair))
}

#[tokio::test]
async fn create_generates_identity() {
    init_tracing();
    let info = PeerInfo::create(IdentitySource::Generate).await.unwrap();
    assert!(info.id().has_private_key());

    let other = PeerInfo::create(None::<PeerIdentity>).await.unwrap();
    assert_ne!(info.id(), other.id());
}

#[tokio::test]
async fn create_with_existing_identity() {
    init_tracing();
    let id = PeerIdentity::generate().await.unwrap();
    let info = PeerInfo::create(id.clone()).await.unwrap();
    assert_eq!(info.id(), &id);

    let twin = PeerInfo::new(id.clone());
    assert_eq!(twin.id(), info.id());
}

#[tokio::test]
async fn create_from_json_roundtrip() {
    init_tracing();
    let generated = PeerInfo::create(IdentitySource::Generate).await.unwrap();
    let json = generated.id().to_json().unwrap();

    let info = PeerInfo::create(json.clone()).await.unwrap();
    assert_eq!(info.id(), generated.id());
    assert_eq!(info.id().to_json().unwrap(), json);

    let from_bytes = PeerInfo::create(IdentitySource::Bytes(generated.id().to_bytes()))
        .await
        .unwrap();
    assert_eq!(from_bytes.id(), generated.id());
}

#[tokio::test]
async fn create_propagates_identity_errors() {
    let json = IdentityJson {
        id: "not-a-peer-id".into(),
        pub_key: None,
        priv_key: None,
    };
    assert_matches!(
        PeerInfo::create(json).await,
        Err(IdentityError::InvalidPeerId(_))
    );
}

#[test]
fn construction_without_identity_fails() {
    assert_matches!(PeerInfo::try_new(None), Err(PeerInfoError::MissingIdentity));
}

#[test]
fn shape_predicate_on_serialized_info() {
    let info = local_peer(1);
    let value = serde_json::to_value(info.snapshot()).unwrap();
    let id_only = serde_json::to_value(info.id().to_json().unwrap()).unwrap();

    assert!(is_peer_info(&value));
    assert!(!is_peer_info(&id_only));
    assert!(!is_peer_info(&serde_json::json!("bananas")));
}

#[test]
fn add_and_delete() {
    let mut info = local_peer(2);
    let a = ma("/ip4/127.0.0.1/tcp/5001");
    let b = ma("/ip4/127.0.0.1/tcp/5002");

    info.multiaddrs_mut().add(&a).unwrap();
    info.multiaddrs_mut().add(&a).unwrap();
    assert_eq!(info.multiaddrs().len(), 1);

    info.multiaddrs_mut().add(&b).unwrap();
    assert_eq!(info.multiaddrs().len(), 2);

    assert!(info.multiaddrs_mut().delete(&a).unwrap());
    assert_eq!(info.multiaddrs().len(), 1);
    assert!(!info.multiaddrs().has(&a).unwrap());
    assert!(info.multiaddrs().has(&b).unwrap());
}

#[test]
fn add_safe_quorum() {
    let mut info = local_peer(3);
    let addr = ma("/ip4/127.0.0.1/tcp/5001");

    let _ = info.multiaddrs_mut().add_safe(&addr).unwrap();
    assert_eq!(info.multiaddrs().len(), 0);

    let _ = info.multiaddrs_mut().add_safe(&addr).unwrap();
    assert_eq!(info.multiaddrs().len(), 1);
    assert!(info.multiaddrs().has(&addr).unwrap());
}

#[test]
fn replace_keeps_untouched_addresses() {
    let mut info = local_peer(4);
    let [a, b, c, d, e, f] = [5001, 5002, 5003, 5004, 5005, 5006]
        .map(|port| ma(&format!("/ip4/127.0.0.1/tcp/{port}")));

    for addr in [&a, &b, &e, &f] {
        info.multiaddrs_mut().add(addr).unwrap();
    }
    info.multiaddrs_mut()
        .replace([&a, &b], [&c, &d])
        .unwrap();

    let set = info.multiaddrs();
    assert_eq!(set.len(), 4);
    assert!(!set.contains(&a) && !set.contains(&b));
    assert!([&c, &d, &e, &f].iter().all(|addr| set.contains(addr)));
}

#[test]
fn distinct_across_families() {
    let mut info = local_peer(5);
    for addr in [
        "/ip4/127.0.0.1/tcp/5001",
        "/ip6/::/tcp/5001",
        "/ip6/::/udp/5002",
        "/ip4/127.0.0.1/udp/5002",
    ] {
        info.multiaddrs_mut().add(addr).unwrap();
    }

    assert_eq!(
        info.multiaddrs().distinct(),
        vec![ma("/ip4/127.0.0.1/tcp/5001"), ma("/ip6/::/udp/5002")]
    );
}

#[test]
fn filter_dialable_web_sockets() {
    let mut info = local_peer(6);
    info.multiaddrs_mut().add("/ip4/127.0.0.1/tcp/5001").unwrap();
    info.multiaddrs_mut().add("/ip4/127.0.0.1/tcp/5002/ws").unwrap();

    assert_eq!(
        info.multiaddrs().filter_by(&Format::web_sockets()),
        vec![ma("/ip4/127.0.0.1/tcp/5002/ws")]
    );
}

#[test]
fn connect_and_disconnect() {
    let mut info = local_peer(7);
    info.multiaddrs_mut().add("/ip4/127.0.0.1/tcp/5001").unwrap();

    info.connect("/ip4/127.0.0.1/tcp/5001").unwrap();
    assert_eq!(info.is_connected(), Some(&ma("/ip4/127.0.0.1/tcp/5001")));

    info.disconnect();
    assert!(info.is_connected().is_none());
    info.disconnect();
    assert_eq!(info.connection_state(), &ConnectionState::Disconnected);

    assert_matches!(
        info.connect("/ip4/127.0.0.1/tcp/5001/ws"),
        Err(PeerInfoError::UnknownAddress(_))
    );
}

#[test]
fn logging_installs_once() {
    init_tracing();
    assert!(init_logging(&LogArgs::default()).is_err());
}

#[test]
fn clear_empties_the_set() {
    let mut info = local_peer(8);
    info.multiaddrs_mut().add("/ip4/127.0.0.1/tcp/5001").unwrap();
    info.multiaddrs_mut().clear();
    assert_eq!(info.multiaddrs().len(), 0);
}

#[derive(Debug, Clone)]
struct ArbMultiaddr(Multiaddr);

impl<'a> arbitrary::Arbitrary<'a> for ArbMultiaddr {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        arbitrary_multiaddr(u).map(Self)
    }
}

proptest! {
    #[test]
    fn connect_succeeds_only_for_members(
        known in proptest::collection::vec(arb::<ArbMultiaddr>(), 1..8),
        probe in arb::<ArbMultiaddr>(),
    ) {
        let mut info = local_peer(9);
        for ArbMultiaddr(addr) in &known {
            info.multiaddrs_mut().add(addr).unwrap();
        }

        let ArbMultiaddr(probe) = probe;
        let result = info.connect(&probe);
        if info.multiaddrs().contains(&probe) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(info.is_connected(), Some(&probe));
        } else {
            prop_assert!(matches!(result, Err(PeerInfoError::UnknownAddress(_))));
            prop_assert!(info.is_connected().is_none());
        }

        info.disconnect();
        prop_assert!(info.is_connected().is_none());
    }
}
