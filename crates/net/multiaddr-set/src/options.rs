//! Host/transport/port view of a multiaddr and the endpoint shape derived from it.

use std::fmt;

use libp2p::Multiaddr;
use libp2p::multiaddr::Protocol;

/// Address family of the leading host component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
    /// Name-based host without a fixed family (`/dns`, `/dnsaddr`).
    Unspecified,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => f.write_str("ipv4"),
            Family::Ipv6 => f.write_str("ipv6"),
            Family::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Port-carrying transport following the host component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Tcp,
    Udp,
    Sctp,
    Dccp,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Tcp => f.write_str("tcp"),
            Transport::Udp => f.write_str("udp"),
            Transport::Sctp => f.write_str("sctp"),
            Transport::Dccp => f.write_str("dccp"),
        }
    }
}

/// The `{family, host, transport, port}` view of a "thin waist" multiaddr.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressOptions {
    pub family: Family,
    pub host: String,
    pub transport: Transport,
    pub port: u16,
}

impl AddressOptions {
    /// Derive options from the first two components of `addr`.
    ///
    /// Returns `None` unless the address starts with a host (`ip4`, `ip6`, `dns*`)
    /// followed by a port-carrying transport. Trailing components (`/ws`, `/p2p/..`)
    /// are ignored.
    pub fn from_multiaddr(addr: &Multiaddr) -> Option<Self> {
        let mut iter = addr.iter();

        let (family, host) = match iter.next()? {
            Protocol::Ip4(ip) => (Family::Ipv4, ip.to_string()),
            Protocol::Ip6(ip) => (Family::Ipv6, ip.to_string()),
            Protocol::Dns4(name) => (Family::Ipv4, name.into_owned()),
            Protocol::Dns6(name) => (Family::Ipv6, name.into_owned()),
            Protocol::Dns(name) | Protocol::Dnsaddr(name) => (Family::Unspecified, name.into_owned()),
            _ => return None,
        };

        let (transport, port) = match iter.next()? {
            Protocol::Tcp(port) => (Transport::Tcp, port),
            Protocol::Udp(port) => (Transport::Udp, port),
            Protocol::Sctp(port) => (Transport::Sctp, port),
            Protocol::Dccp(port) => (Transport::Dccp, port),
            _ => return None,
        };

        Some(Self {
            family,
            host,
            transport,
            port,
        })
    }

    pub fn shape(&self) -> EndpointShape {
        EndpointShape {
            transport: self.transport,
            port: self.port,
        }
    }
}

/// The `(port, transport)` pair of an address, ignoring host and family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointShape {
    pub transport: Transport,
    pub port: u16,
}

impl EndpointShape {
    pub fn of(addr: &Multiaddr) -> Option<Self> {
        AddressOptions::from_multiaddr(addr).map(|options| options.shape())
    }
}

impl fmt::Display for EndpointShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.transport, self.port)
    }
}
