//! IPv4 addresses in strict dotted-decimal form.
//!
//! Exactly four blocks, each 1-3 ASCII digits with a value of at most 255.
//! Multi-digit blocks may not start with `0` (octal ambiguity).

use crate::error::{FormatError, ParseError, ValueKind};
use crate::port::write_decimal;

const MALFORMED: ParseError = ParseError::new(ValueKind::Ipv4Address);

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Parses a dotted-quad IPv4 literal into `dst[..4]`.
///
/// Block `i` of the text lands in `dst[i]`. `dst` is left untouched on
/// failure. Fails if `dst` is shorter than four bytes.
pub fn parse_ipv4_into(text: &[u8], dst: &mut [u8]) -> Result<(), ParseError> {
    if dst.len() < Ipv4Address::BYTE_COUNT {
        return Err(MALFORMED);
    }
    let octets = parse_ipv4(text).ok_or(MALFORMED)?;
    dst[..Ipv4Address::BYTE_COUNT].copy_from_slice(&octets);
    Ok(())
}

/// Parses a dotted-quad IPv4 literal into its four octets.
pub fn parse_ipv4(text: &[u8]) -> Option<[u8; 4]> {
    if text.len() < Ipv4Address::MIN_CHARS || text.len() > Ipv4Address::MAX_CHARS {
        return None;
    }

    let mut octets = [0u8; 4];
    let mut rest = text;
    for (index, octet) in octets.iter_mut().enumerate() {
        // The last block runs to the end of input; any stray dot in it is
        // rejected by the digit scan.
        let block = if index == 3 {
            rest
        } else {
            let dot = rest.iter().position(|&c| c == b'.')?;
            let block = &rest[..dot];
            rest = &rest[dot + 1..];
            block
        };
        *octet = parse_block(block)?;
    }
    Some(octets)
}

fn parse_block(block: &[u8]) -> Option<u8> {
    if block.is_empty() || block.len() > 3 {
        return None;
    }
    if block.len() > 1 && block[0] == b'0' {
        return None;
    }

    let mut value: u16 = 0;
    for &c in block {
        if !c.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u16::from(c - b'0');
    }
    u8::try_from(value).ok()
}

/// Writes `octets` as dotted decimal into `dst`, returning the byte count.
pub fn format_ipv4(octets: &[u8; 4], dst: &mut [u8]) -> Result<usize, FormatError> {
    let mut scratch = [0u8; Ipv4Address::MAX_CHARS];
    let mut len = 0;
    for (index, &octet) in octets.iter().enumerate() {
        if index > 0 {
            scratch[len] = b'.';
            len += 1;
        }
        len += write_decimal(u32::from(octet), &mut scratch[len..])?;
    }

    if dst.len() < len {
        return Err(FormatError::BufferTooSmall {
            needed: len,
            available: dst.len(),
        });
    }
    dst[..len].copy_from_slice(&scratch[..len]);
    Ok(len)
}

// ---------------------------------------------------------------------------
// Ipv4Address
// ---------------------------------------------------------------------------

/// An IPv4 address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    pub const BYTE_COUNT: usize = 4;
    /// `0.0.0.0`
    pub const MIN_CHARS: usize = 7;
    /// `255.255.255.255`
    pub const MAX_CHARS: usize = 4 * 3 + 3;

    /// `0.0.0.0`, the wildcard address.
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0);
    /// `127.0.0.1`
    pub const LOOPBACK: Self = Self::new(127, 0, 0, 1);
    /// `255.255.255.255`
    pub const BROADCAST: Self = Self::new(255, 255, 255, 255);
    /// Historical "no address" sentinel; same bits as [`Self::BROADCAST`].
    pub const NONE: Self = Self::BROADCAST;

    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    #[must_use]
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    /// Builds an address from the first four bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than four bytes.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() >= Self::BYTE_COUNT,
            "IPv4 address needs {} bytes, got {}",
            Self::BYTE_COUNT,
            bytes.len()
        );
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Octets in textual order.
    #[must_use]
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Copies the octets into `dst[..4]`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than four bytes.
    pub fn write_bytes_into(&self, dst: &mut [u8]) {
        assert!(
            dst.len() >= Self::BYTE_COUNT,
            "destination needs {} bytes, got {}",
            Self::BYTE_COUNT,
            dst.len()
        );
        dst[..Self::BYTE_COUNT].copy_from_slice(&self.octets);
    }

    /// Network-order integer (first octet most significant).
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self::from_octets(bits.to_be_bytes())
    }

    /// Legacy wire value: first octet in the least significant byte.
    #[must_use]
    pub const fn to_wire_u32(self) -> u32 {
        u32::from_le_bytes(self.octets)
    }

    #[must_use]
    pub const fn from_wire_u32(value: u32) -> Self {
        Self::from_octets(value.to_le_bytes())
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or(MALFORMED)
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        parse_ipv4(text.as_bytes()).map(Self::from_octets)
    }

    /// Writes the dotted-decimal form into `dst`.
    pub fn format_into(&self, dst: &mut [u8]) -> Result<usize, FormatError> {
        format_ipv4(&self.octets, dst)
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv4Address> for [u8; 4] {
    fn from(address: Ipv4Address) -> Self {
        address.octets
    }
}

impl core::str::FromStr for Ipv4Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Ipv4Address {
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
