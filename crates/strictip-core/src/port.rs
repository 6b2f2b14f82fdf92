//! 16-bit port numbers.
//!
//! Ports are plain unsigned decimals: no sign, no whitespace, no radix
//! prefixes, 1 to 5 characters.

use crate::error::{FormatError, ParseError, PortRangeError, ValueKind};

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Parses a decimal port.
///
/// Leading zeros are accepted as long as the text fits in five characters;
/// the accumulated value is what gets range-checked.
pub fn parse_port(text: &[u8]) -> Option<u16> {
    if text.len() < Port::MIN_CHARS || text.len() > Port::MAX_CHARS {
        return None;
    }

    let mut value: u32 = 0;
    for &c in text {
        if !c.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(c - b'0');
    }

    u16::try_from(value).ok()
}

/// Writes `port` as canonical decimal into `dst`, returning the byte count.
pub fn format_port(port: u16, dst: &mut [u8]) -> Result<usize, FormatError> {
    write_decimal(u32::from(port), dst)
}

/// Number of decimal digits needed for `value`.
pub(crate) const fn decimal_len(value: u32) -> usize {
    let mut len = 1;
    let mut rest = value / 10;
    while rest != 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Writes `value` in decimal with no leading zeros.
pub(crate) fn write_decimal(mut value: u32, dst: &mut [u8]) -> Result<usize, FormatError> {
    let len = decimal_len(value);
    if dst.len() < len {
        return Err(FormatError::BufferTooSmall {
            needed: len,
            available: dst.len(),
        });
    }

    let mut i = len;
    loop {
        i -= 1;
        dst[i] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    Ok(len)
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// A transport-layer port number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u16);

impl Port {
    pub const MAX: u16 = u16::MAX;
    pub const BYTE_COUNT: usize = 2;
    pub const MIN_CHARS: usize = 1;
    pub const MAX_CHARS: usize = 5;

    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Parses a port, reporting malformed input as an error.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or(ParseError::new(ValueKind::Port))
    }

    /// Parses a port, returning `None` on malformed input.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        parse_port(text.as_bytes()).map(Self)
    }

    /// Writes the canonical decimal form into `dst`.
    pub fn format_into(self, dst: &mut [u8]) -> Result<usize, FormatError> {
        format_port(self.0, dst)
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl TryFrom<i32> for Port {
    type Error = PortRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| PortRangeError(i64::from(value)))
    }
}

impl core::str::FromStr for Port {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Port {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
