//! Error types shared by every codec.
//!
//! Parsing has exactly one failure mode: the input is malformed. The error
//! carries the kind of value that was being parsed, not the offending
//! position.

use thiserror::Error;

/// The kind of value a parse was attempting to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Port,
    Ipv4Address,
    Ipv6Address,
    Ipv4Endpoint,
    Ipv6Endpoint,
    IpAddress,
    SocketAddress,
}

impl ValueKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Ipv4Address => "IPv4 address",
            Self::Ipv6Address => "IPv6 address",
            Self::Ipv4Endpoint => "IPv4 endpoint",
            Self::Ipv6Endpoint => "IPv6 endpoint",
            Self::IpAddress => "IP address",
            Self::SocketAddress => "socket address",
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Malformed textual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("an invalid {kind} was specified")]
pub struct ParseError {
    kind: ValueKind,
}

impl ParseError {
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self { kind }
    }

    /// The kind of value that failed to parse.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Failure while writing canonical text into a caller-supplied buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Address family of a native address or socket address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Inet,
    Inet6,
}

impl core::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Inet => f.write_str("IPv4"),
            Self::Inet6 => f.write_str("IPv6"),
        }
    }
}

/// A native value of the wrong address family was offered for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("incompatible address family: expected {expected}, found {found}")]
pub struct FamilyMismatch {
    pub expected: AddressFamily,
    pub found: AddressFamily,
}

/// An integer outside `0..=65535` was offered as a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("port value {0} is outside 0..=65535")]
pub struct PortRangeError(pub i64);
