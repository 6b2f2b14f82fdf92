//! Family-agnostic parsing into `std::net` types.
//!
//! Each helper tries the IPv4 grammar first and falls back to IPv6. The two
//! grammars never overlap, so the order only affects speed.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::endpoint::{Ipv4Endpoint, Ipv6Endpoint};
use crate::error::{ParseError, ValueKind};
use crate::ipv4::{Ipv4Address, parse_ipv4};
use crate::ipv6::{Ipv6Address, parse_ipv6};

/// Parses a strict IPv4 or IPv6 address literal.
pub fn parse_ip_addr(text: &str) -> Result<IpAddr, ParseError> {
    let bytes = text.as_bytes();
    if let Some(octets) = parse_ipv4(bytes) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    parse_ipv6(bytes)
        .map(|octets| IpAddr::V6(Ipv6Addr::from(octets)))
        .ok_or(ParseError::new(ValueKind::IpAddress))
}

/// Parses a strict `a.b.c.d:port` or `[v6]:port` literal.
pub fn parse_socket_addr(text: &str) -> Result<SocketAddr, ParseError> {
    let bytes = text.as_bytes();
    if let Some(endpoint) = Ipv4Endpoint::parse_bytes(bytes) {
        return Ok(SocketAddr::from(endpoint));
    }
    Ipv6Endpoint::parse_bytes(bytes)
        .map(SocketAddr::from)
        .ok_or(ParseError::new(ValueKind::SocketAddress))
}

pub fn parse_ipv4_addr(text: &str) -> Result<Ipv4Addr, ParseError> {
    Ipv4Address::parse(text).map(Ipv4Address::to_native)
}

pub fn parse_ipv6_addr(text: &str) -> Result<Ipv6Addr, ParseError> {
    Ipv6Address::parse(text).map(Ipv6Address::to_native)
}

pub fn parse_socket_addr_v4(text: &str) -> Result<SocketAddrV4, ParseError> {
    Ipv4Endpoint::parse(text).map(Ipv4Endpoint::to_native)
}

pub fn parse_socket_addr_v6(text: &str) -> Result<SocketAddrV6, ParseError> {
    Ipv6Endpoint::parse(text).map(Ipv6Endpoint::to_native)
}
