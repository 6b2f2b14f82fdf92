//! Address/port endpoints: `a.b.c.d:port` and `[v6]:port`.
//!
//! The composers only locate separators and frame bounds; the address and
//! port codecs do all of the validation.

use crate::error::{FormatError, ParseError, ValueKind};
use crate::ipv4::{Ipv4Address, parse_ipv4};
use crate::ipv6::{Ipv6Address, parse_ipv6};
use crate::port::{Port, parse_port};

/// Appends `bytes` at `*cursor`, failing without writing if they do not fit.
fn put(dst: &mut [u8], cursor: &mut usize, bytes: &[u8]) -> Result<(), FormatError> {
    let end = *cursor + bytes.len();
    if end > dst.len() {
        return Err(FormatError::BufferTooSmall {
            needed: end,
            available: dst.len(),
        });
    }
    dst[*cursor..end].copy_from_slice(bytes);
    *cursor = end;
    Ok(())
}

/// Runs an inner formatter on the unused tail of `dst`, reporting the needed
/// size relative to the whole buffer.
fn put_with(
    dst: &mut [u8],
    cursor: &mut usize,
    write: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>,
) -> Result<(), FormatError> {
    let start = *cursor;
    let written = write(&mut dst[start..]).map_err(|err| match err {
        FormatError::BufferTooSmall { needed, .. } => FormatError::BufferTooSmall {
            needed: start + needed,
            available: dst.len(),
        },
    })?;
    *cursor = start + written;
    Ok(())
}

// ---------------------------------------------------------------------------
// IPv4
// ---------------------------------------------------------------------------

/// An IPv4 address paired with a port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Endpoint {
    address: Ipv4Address,
    port: Port,
}

impl Ipv4Endpoint {
    pub const BYTE_COUNT: usize = Ipv4Address::BYTE_COUNT + Port::BYTE_COUNT;
    pub const MIN_CHARS: usize = Ipv4Address::MIN_CHARS + 1 + Port::MIN_CHARS;
    pub const MAX_CHARS: usize = Ipv4Address::MAX_CHARS + 1 + Port::MAX_CHARS;

    #[must_use]
    pub const fn new(address: Ipv4Address, port: Port) -> Self {
        Self { address, port }
    }

    #[must_use]
    pub const fn address(&self) -> Ipv4Address {
        self.address
    }

    #[must_use]
    pub const fn port(&self) -> Port {
        self.port
    }

    /// Parses `a.b.c.d:port` from raw bytes.
    pub fn parse_bytes(text: &[u8]) -> Option<Self> {
        if text.len() < Self::MIN_CHARS || text.len() > Self::MAX_CHARS {
            return None;
        }

        let separator = text.iter().rposition(|&c| c == b':')?;
        let address = Ipv4Address::from_octets(parse_ipv4(&text[..separator])?);
        let port = Port::new(parse_port(&text[separator + 1..])?);
        Some(Self::new(address, port))
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or(ParseError::new(ValueKind::Ipv4Endpoint))
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Writes `address:port` into `dst`, returning the byte count.
    pub fn format_into(&self, dst: &mut [u8]) -> Result<usize, FormatError> {
        let mut cursor = 0;
        put_with(dst, &mut cursor, |buf| self.address.format_into(buf))?;
        put(dst, &mut cursor, b":")?;
        put_with(dst, &mut cursor, |buf| self.port.format_into(buf))?;
        Ok(cursor)
    }
}

impl core::str::FromStr for Ipv4Endpoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Ipv4Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buf = [0u8; Self::MAX_CHARS];
        let len = self.format_into(&mut buf).map_err(|_| core::fmt::Error)?;
        let text = core::str::from_utf8(&buf[..len]).map_err(|_| core::fmt::Error)?;
        f.pad(text)
    }
}

// ---------------------------------------------------------------------------
// IPv6
// ---------------------------------------------------------------------------

/// An IPv6 address paired with a port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Endpoint {
    address: Ipv6Address,
    port: Port,
}

impl Ipv6Endpoint {
    pub const BYTE_COUNT: usize = Ipv6Address::BYTE_COUNT + Port::BYTE_COUNT;
    /// `[::]:0`
    pub const MIN_CHARS: usize = 1 + Ipv6Address::MIN_CHARS + 2 + Port::MIN_CHARS;
    pub const MAX_CHARS: usize = 1 + Ipv6Address::MAX_CHARS + 2 + Port::MAX_CHARS;

    #[must_use]
    pub const fn new(address: Ipv6Address, port: Port) -> Self {
        Self { address, port }
    }

    #[must_use]
    pub const fn address(&self) -> Ipv6Address {
        self.address
    }

    #[must_use]
    pub const fn port(&self) -> Port {
        self.port
    }

    /// Parses `[addr]:port` from raw bytes.
    pub fn parse_bytes(text: &[u8]) -> Option<Self> {
        if text.len() < Self::MIN_CHARS || text.len() > Self::MAX_CHARS {
            return None;
        }
        if text[0] != b'[' {
            return None;
        }

        let separator = text.iter().rposition(|&c| c == b':')?;
        // The opening bracket sits at index 0, so the closing one needs index >= 1.
        if separator < 2 || text[separator - 1] != b']' {
            return None;
        }

        let address = Ipv6Address::from_octets(parse_ipv6(&text[1..separator - 1])?);
        let port = Port::new(parse_port(&text[separator + 1..])?);
        Some(Self::new(address, port))
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or(ParseError::new(ValueKind::Ipv6Endpoint))
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Writes `[address]:port` into `dst`, returning the byte count.
    pub fn format_into(&self, dst: &mut [u8]) -> Result<usize, FormatError> {
        let mut cursor = 0;
        put(dst, &mut cursor, b"[")?;
        put_with(dst, &mut cursor, |buf| self.address.format_into(buf))?;
        put(dst, &mut cursor, b"]:")?;
        put_with(dst, &mut cursor, |buf| self.port.format_into(buf))?;
        Ok(cursor)
    }
}

impl core::str::FromStr for Ipv6Endpoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Ipv6Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buf = [0u8; Self::MAX_CHARS];
        let len = self.format_into(&mut buf).map_err(|_| core::fmt::Error)?;
        let text = core::str::from_utf8(&buf[..len]).map_err(|_| core::fmt::Error)?;
        f.pad(text)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
