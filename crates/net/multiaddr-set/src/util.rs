//! Property-testing helpers.

use libp2p::Multiaddr;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Generate a random valid thin-waist multiaddr for property testing.
///
/// Ports are drawn from a narrow range so that generated sets regularly contain
/// several addresses with the same endpoint shape.
pub fn arbitrary_multiaddr(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Multiaddr> {
    let use_ipv6: bool = u.arbitrary()?;
    let use_udp: bool = u.arbitrary()?;
    let with_suffix: bool = u.arbitrary()?;
    let port: u16 = u.int_in_range(4001..=4004)?;

    let host = if use_ipv6 {
        let bytes: [u8; 16] = u.arbitrary()?;
        format!("/ip6/{}", Ipv6Addr::from(bytes))
    } else {
        let bytes: [u8; 4] = u.arbitrary()?;
        format!("/ip4/{}", Ipv4Addr::from(bytes))
    };

    let addr = match (use_udp, with_suffix) {
        (false, false) => format!("{host}/tcp/{port}"),
        (false, true) => format!("{host}/tcp/{port}/ws"),
        (true, false) => format!("{host}/udp/{port}"),
        (true, true) => format!("{host}/udp/{port}/quic-v1"),
    };

    addr.parse().map_err(|_| arbitrary::Error::IncorrectFormat)
}
