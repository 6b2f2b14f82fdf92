//! # strictip-core
//!
//! Strict parsing and formatting of IPv4/IPv6 addresses, ports and
//! `address:port` endpoints.
//!
//! Only canonical text is accepted: no leading zeros in IPv4 blocks, no
//! signs or radix prefixes in ports, no dotted IPv4 tails or zone ids in
//! IPv6, no whitespace. The `parse_*` / `format_*` functions work on
//! caller-supplied byte buffers and never allocate; the value types wrap them
//! with `FromStr`/`Display` and explicit conversions to `std::net`.

#![deny(unsafe_code)]

pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod ipv4;
pub mod ipv6;
pub mod native;
pub mod port;
#[cfg(feature = "serde")]
mod serde_impls;

pub use dispatch::{parse_ip_addr, parse_socket_addr};
pub use endpoint::{Ipv4Endpoint, Ipv6Endpoint};
pub use error::{
    AddressFamily, FamilyMismatch, FormatError, ParseError, PortRangeError, ValueKind,
};
pub use ipv4::{Ipv4Address, format_ipv4, parse_ipv4, parse_ipv4_into};
pub use ipv6::{Ipv6Address, format_ipv6, parse_ipv6, parse_ipv6_into};
pub use port::{Port, format_port, parse_port};
