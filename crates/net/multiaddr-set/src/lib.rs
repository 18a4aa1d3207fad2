//! Multiaddr sets for libp2p peers.
//!
//! - [`MultiaddrSet`] - Deduplicated, insertion-ordered address set with an
//!   observation quarantine ([`MultiaddrSet::add_safe`])
//! - [`IntoMultiaddr`] - Normalization of text and bytes into [`Multiaddr`]
//! - [`AddressOptions`] / [`EndpointShape`] - Host/transport/port views used by
//!   [`MultiaddrSet::distinct`]
//! - [`Format`] - Composable address-format matchers used by
//!   [`MultiaddrSet::filter_by`]

mod error;
mod format;
mod normalize;
mod options;
mod set;
mod util;

pub use error::MultiaddrSetError;
pub use format::{AddrFormat, Format, Segment};
pub use normalize::{IntoMultiaddr, is_multiaddr};
pub use options::{AddressOptions, EndpointShape, Family, Transport};
pub use set::{MultiaddrSet, Observation};
pub use util::arbitrary_multiaddr;

pub use libp2p::Multiaddr;
