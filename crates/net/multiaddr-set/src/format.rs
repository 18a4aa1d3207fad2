//! Multiaddr format matchers.
//!
//! A [`Format`] is a pattern over the protocol components of a multiaddr, built
//! from single-segment bases with [`Format::and`] (sequence) and [`Format::or`]
//! (first matching alternative). Matching is greedy, left to right, and succeeds
//! only when the whole address is consumed.
//!
//! ```
//! use waypoint_net_multiaddr_set::{AddrFormat, Format};
//!
//! let ws = Format::web_sockets();
//! assert!(ws.matches(&"/ip4/127.0.0.1/tcp/5001/ws".parse().unwrap()));
//! assert!(!ws.matches(&"/ip4/127.0.0.1/tcp/5001".parse().unwrap()));
//! ```

use libp2p::Multiaddr;
use libp2p::multiaddr::Protocol;

/// Predicate over multiaddrs, used by [`MultiaddrSet::filter_by`](crate::MultiaddrSet::filter_by).
pub trait AddrFormat {
    fn matches(&self, addr: &Multiaddr) -> bool;
}

impl<F> AddrFormat for F
where
    F: Fn(&Multiaddr) -> bool,
{
    fn matches(&self, addr: &Multiaddr) -> bool {
        self(addr)
    }
}

/// A single protocol component a [`Format`] can match, ignoring its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Ip4,
    Ip6,
    Dns,
    Dns4,
    Dns6,
    Dnsaddr,
    Tcp,
    Udp,
    Quic,
    QuicV1,
    Tls,
    Ws,
    Wss,
    WebTransport,
    P2p,
    P2pCircuit,
}

impl Segment {
    fn matches(self, protocol: &Protocol<'_>) -> bool {
        matches!(
            (self, protocol),
            (Segment::Ip4, Protocol::Ip4(_))
                | (Segment::Ip6, Protocol::Ip6(_))
                | (Segment::Dns, Protocol::Dns(_))
                | (Segment::Dns4, Protocol::Dns4(_))
                | (Segment::Dns6, Protocol::Dns6(_))
                | (Segment::Dnsaddr, Protocol::Dnsaddr(_))
                | (Segment::Tcp, Protocol::Tcp(_))
                | (Segment::Udp, Protocol::Udp(_))
                | (Segment::Quic, Protocol::Quic)
                | (Segment::QuicV1, Protocol::QuicV1)
                | (Segment::Tls, Protocol::Tls)
                | (Segment::Ws, Protocol::Ws(_))
                | (Segment::Wss, Protocol::Wss(_))
                | (Segment::WebTransport, Protocol::WebTransport)
                | (Segment::P2p, Protocol::P2p(_))
                | (Segment::P2pCircuit, Protocol::P2pCircuit)
        )
    }
}

/// Composable multiaddr pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Base(Segment),
    And(Vec<Format>),
    Or(Vec<Format>),
}

impl Format {
    pub fn base(segment: Segment) -> Self {
        Format::Base(segment)
    }

    pub fn and(parts: impl IntoIterator<Item = Format>) -> Self {
        Format::And(parts.into_iter().collect())
    }

    pub fn or(alternatives: impl IntoIterator<Item = Format>) -> Self {
        Format::Or(alternatives.into_iter().collect())
    }

    /// Number of leading components consumed by this pattern, if it matches.
    fn consume(&self, protocols: &[Protocol<'_>]) -> Option<usize> {
        match self {
            Format::Base(segment) => protocols
                .first()
                .filter(|protocol| segment.matches(protocol))
                .map(|_| 1),
            Format::And(parts) => {
                let mut consumed = 0;
                for part in parts {
                    consumed += part.consume(protocols.get(consumed..)?)?;
                }
                Some(consumed)
            }
            Format::Or(alternatives) => alternatives.iter().find_map(|alt| alt.consume(protocols)),
        }
    }

    pub fn dns() -> Self {
        Self::or([
            Self::base(Segment::Dns),
            Self::base(Segment::Dns4),
            Self::base(Segment::Dns6),
            Self::base(Segment::Dnsaddr),
        ])
    }

    pub fn ip() -> Self {
        Self::or([Self::base(Segment::Ip4), Self::base(Segment::Ip6)])
    }

    fn host() -> Self {
        Self::or([Self::ip(), Self::dns()])
    }

    pub fn tcp() -> Self {
        Self::and([Self::host(), Self::base(Segment::Tcp)])
    }

    pub fn udp() -> Self {
        Self::and([Self::host(), Self::base(Segment::Udp)])
    }

    pub fn quic() -> Self {
        Self::and([Self::udp(), Self::base(Segment::Quic)])
    }

    pub fn quic_v1() -> Self {
        Self::and([Self::udp(), Self::base(Segment::QuicV1)])
    }

    pub fn web_sockets() -> Self {
        Self::and([Self::tcp(), Self::base(Segment::Ws)])
    }

    pub fn web_sockets_secure() -> Self {
        Self::or([
            Self::and([Self::tcp(), Self::base(Segment::Wss)]),
            Self::and([
                Self::tcp(),
                Self::base(Segment::Tls),
                Self::base(Segment::Ws),
            ]),
        ])
    }

    /// Any dialable transport endpoint. Longer alternatives come first since
    /// matching picks the first alternative that fits.
    pub fn reachable() -> Self {
        Self::or([
            Self::web_sockets_secure(),
            Self::web_sockets(),
            Self::quic_v1(),
            Self::quic(),
            Self::tcp(),
            Self::udp(),
        ])
    }

    pub fn p2p() -> Self {
        Self::or([
            Self::and([Self::reachable(), Self::base(Segment::P2p)]),
            Self::base(Segment::P2p),
        ])
    }

    pub fn circuit() -> Self {
        Self::or([
            Self::and([
                Self::p2p(),
                Self::base(Segment::P2pCircuit),
                Self::base(Segment::P2p),
            ]),
            Self::and([Self::p2p(), Self::base(Segment::P2pCircuit)]),
            Self::and([Self::base(Segment::P2pCircuit), Self::base(Segment::P2p)]),
            Self::base(Segment::P2pCircuit),
        ])
    }
}

impl AddrFormat for Format {
    fn matches(&self, addr: &Multiaddr) -> bool {
        let protocols: Vec<Protocol<'_>> = addr.iter().collect();
        self.consume(&protocols) == Some(protocols.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> libp2p::PeerId {
        let key = libp2p::identity::ed25519::SecretKey::try_from_bytes([7u8; 32]).unwrap();
        libp2p::identity::Keypair::from(libp2p::identity::ed25519::Keypair::from(key))
            .public()
            .to_peer_id()
    }

    fn ma(s: &str) -> Multiaddr {
        s.parse().unwrap()
    }

    #[test]
    fn tcp_requires_exact_shape() {
        let tcp = Format::tcp();
        assert!(tcp.matches(&ma("/ip4/127.0.0.1/tcp/5001")));
        assert!(tcp.matches(&ma("/ip6/::1/tcp/5001")));
        assert!(tcp.matches(&ma("/dns4/example.com/tcp/5001")));
        assert!(!tcp.matches(&ma("/ip4/127.0.0.1/udp/5001")));
        assert!(!tcp.matches(&ma("/ip4/127.0.0.1/tcp/5001/ws")));
        assert!(!tcp.matches(&ma("/ip4/127.0.0.1")));
    }

    #[test]
    fn web_sockets_variants() {
        assert!(Format::web_sockets().matches(&ma("/ip4/127.0.0.1/tcp/80/ws")));
        assert!(!Format::web_sockets().matches(&ma("/ip4/127.0.0.1/tcp/443/wss")));

        let wss = Format::web_sockets_secure();
        assert!(wss.matches(&ma("/ip4/127.0.0.1/tcp/443/wss")));
        assert!(wss.matches(&ma("/dns4/example.com/tcp/443/tls/ws")));
        assert!(!wss.matches(&ma("/ip4/127.0.0.1/tcp/80/ws")));
    }

    #[test]
    fn quic_versions() {
        assert!(Format::quic_v1().matches(&ma("/ip4/1.2.3.4/udp/4001/quic-v1")));
        assert!(!Format::quic_v1().matches(&ma("/ip4/1.2.3.4/udp/4001/quic")));
        assert!(Format::quic().matches(&ma("/ip4/1.2.3.4/udp/4001/quic")));
    }

    #[test]
    fn p2p_with_and_without_transport() {
        let peer = peer();
        let p2p = Format::p2p();
        assert!(p2p.matches(&ma(&format!("/p2p/{peer}"))));
        assert!(p2p.matches(&ma(&format!("/ip4/1.2.3.4/tcp/4001/p2p/{peer}"))));
        assert!(p2p.matches(&ma(&format!("/ip4/1.2.3.4/tcp/4001/ws/p2p/{peer}"))));
        assert!(!p2p.matches(&ma("/ip4/1.2.3.4/tcp/4001")));
    }

    #[test]
    fn circuit_addresses() {
        let peer = peer();
        let circuit = Format::circuit();
        assert!(circuit.matches(&ma(&format!(
            "/ip4/1.2.3.4/tcp/4001/p2p/{peer}/p2p-circuit/p2p/{peer}"
        ))));
        assert!(circuit.matches(&ma("/p2p-circuit")));
        assert!(!circuit.matches(&ma("/ip4/1.2.3.4/tcp/4001")));
    }

    #[test]
    fn closures_are_formats() {
        let loopback = |addr: &Multiaddr| {
            matches!(addr.iter().next(), Some(Protocol::Ip4(ip)) if ip.is_loopback())
        };
        assert!(loopback.matches(&ma("/ip4/127.0.0.1/tcp/1")));
        assert!(!loopback.matches(&ma("/ip4/10.0.0.1/tcp/1")));
    }
}
