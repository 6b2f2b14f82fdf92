//! IPv6 addresses in strict colon-hex form.
//!
//! Accepts 1-8 groups of 1-4 hex digits with at most one `::` elision.
//! Dotted IPv4 tails and zone identifiers are not part of the grammar.
//! Formatting follows RFC 5952 so that the output always parses back.

use crate::error::{FormatError, ParseError, ValueKind};

const MALFORMED: ParseError = ParseError::new(ValueKind::Ipv6Address);

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses an IPv6 literal into `dst[..16]` (network byte order).
///
/// `dst` is left untouched on failure. Fails if `dst` is shorter than
/// sixteen bytes.
pub fn parse_ipv6_into(text: &[u8], dst: &mut [u8]) -> Result<(), ParseError> {
    if dst.len() < Ipv6Address::BYTE_COUNT {
        return Err(MALFORMED);
    }
    let octets = parse_ipv6(text).ok_or(MALFORMED)?;
    dst[..Ipv6Address::BYTE_COUNT].copy_from_slice(&octets);
    Ok(())
}

/// Parses an IPv6 literal into its sixteen network-order bytes.
///
/// The text is split on every `:`. Empty blocks are either anchors (the
/// outer half of a leading or trailing `::`, worth one zero group) or the
/// single elision marker. Groups are written two bytes at a time; if fewer
/// than sixteen bytes result, everything written after the elision point is
/// moved to the end and the gap is zero-filled.
pub fn parse_ipv6(text: &[u8]) -> Option<[u8; 16]> {
    if text.len() < Ipv6Address::MIN_CHARS || text.len() > Ipv6Address::MAX_CHARS {
        return None;
    }

    let last = text.iter().filter(|&&c| c == b':').count();
    let mut out = [0u8; 16];
    let mut offset = 0usize;
    let mut elision: Option<usize> = None;
    let mut anchored = false;
    let mut prev_empty = false;

    let mut blocks = text.split(|&c| c == b':').enumerate().peekable();
    while let Some((position, block)) = blocks.next() {
        let group = if block.is_empty() {
            let leading = position == 0 && blocks.peek().is_some_and(|(_, next)| next.is_empty());
            let trailing = position == last && prev_empty;
            prev_empty = true;
            if leading || trailing {
                anchored = true;
                0
            } else if position == 0 || position == last || elision.is_some() {
                // Lone leading/trailing colon, or a second `::`.
                return None;
            } else {
                elision = Some(offset);
                continue;
            }
        } else {
            prev_empty = false;
            parse_group(block)?
        };

        if offset >= Ipv6Address::BYTE_COUNT {
            return None; // more than eight groups
        }
        out[offset..offset + 2].copy_from_slice(&group.to_be_bytes());
        offset += 2;
    }

    match elision {
        None if offset != Ipv6Address::BYTE_COUNT => None,
        None => Some(out),
        // An elision between explicit groups must stand for at least one group.
        Some(_) if offset == Ipv6Address::BYTE_COUNT && !anchored => None,
        Some(gap_start) => {
            let tail = offset - gap_start;
            let tail_start = Ipv6Address::BYTE_COUNT - tail;
            out.copy_within(gap_start..offset, tail_start);
            out[gap_start..tail_start].fill(0);
            Some(out)
        }
    }
}

fn parse_group(block: &[u8]) -> Option<u16> {
    if block.is_empty() || block.len() > Ipv6Address::MAX_BLOCK_CHARS {
        return None;
    }

    let mut value: u16 = 0;
    for &c in block {
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        value = (value << 4) | u16::from(digit);
    }
    Some(value)
}

// ---------------------------------------------------------------------------
// Formatting (canonical RFC 5952)
// ---------------------------------------------------------------------------

/// Writes `octets` as canonical IPv6 text into `dst`, returning the byte count.
///
/// The longest run of two or more zero groups collapses to `::` (first run
/// wins ties); groups are lowercase hex without leading zeros. Addresses
/// with an embedded IPv4 value are still written as pure hex.
pub fn format_ipv6(octets: &[u8; 16], dst: &mut [u8]) -> Result<usize, FormatError> {
    let groups = segments_of(octets);
    let (run_start, run_len) = longest_zero_run(&groups);

    let mut scratch = [0u8; Ipv6Address::MAX_CHARS];
    let mut len = 0usize;
    let mut i = 0usize;
    while i < groups.len() {
        if run_len > 0 && i == run_start {
            scratch[len] = b':';
            scratch[len + 1] = b':';
            len += 2;
            i += run_len;
            continue;
        }
        if i > 0 && !(run_len > 0 && i == run_start + run_len) {
            scratch[len] = b':';
            len += 1;
        }
        len += write_hex(groups[i], &mut scratch[len..]);
        i += 1;
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

fn segments_of(octets: &[u8; 16]) -> [u16; 8] {
    let mut groups = [0u16; 8];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = u16::from_be_bytes([octets[i * 2], octets[i * 2 + 1]]);
    }
    groups
}

/// Returns `(start, len)` of the first longest zero run, or `len == 0` if no
/// run of at least two groups exists.
fn longest_zero_run(groups: &[u16; 8]) -> (usize, usize) {
    let mut best = (0usize, 0usize);
    let mut cur_start = 0usize;
    let mut cur_len = 0usize;

    for (i, &g) in groups.iter().enumerate() {
        if g == 0 {
            if cur_len == 0 {
                cur_start = i;
            }
            cur_len += 1;
            if cur_len > best.1 {
                best = (cur_start, cur_len);
            }
        } else {
            cur_len = 0;
        }
    }

    if best.1 < 2 { (0, 0) } else { best }
}

fn write_hex(value: u16, dst: &mut [u8]) -> usize {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut shift = 12u32;
    while shift > 0 && (value >> shift) & 0xF == 0 {
        shift -= 4;
    }

    let mut len = 0;
    loop {
        dst[len] = DIGITS[usize::from((value >> shift) & 0xF)];
        len += 1;
        if shift == 0 {
            break;
        }
        shift -= 4;
    }
    len
}

// ---------------------------------------------------------------------------
// Ipv6Address
// ---------------------------------------------------------------------------

/// An IPv6 address stored as two big-endian 64-bit halves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Address {
    hi: u64,
    lo: u64,
}

impl Ipv6Address {
    pub const BYTE_COUNT: usize = 16;
    pub const BLOCK_COUNT: usize = 8;
    pub const MAX_BLOCK_CHARS: usize = 4;
    /// `::`
    pub const MIN_CHARS: usize = 2;
    pub const MAX_CHARS: usize =
        Self::BLOCK_COUNT * Self::MAX_BLOCK_CHARS + (Self::BLOCK_COUNT - 1);

    /// `::`
    pub const UNSPECIFIED: Self = Self::from_halves(0, 0);
    /// `::1`
    pub const LOOPBACK: Self = Self::from_halves(0, 1);
    /// Historical "no address" sentinel; same bits as [`Self::UNSPECIFIED`].
    pub const NONE: Self = Self::UNSPECIFIED;

    /// Builds an address from its eight 16-bit groups.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        let hi = ((a as u64) << 48) | ((b as u64) << 32) | ((c as u64) << 16) | d as u64;
        let lo = ((e as u64) << 48) | ((f as u64) << 32) | ((g as u64) << 16) | h as u64;
        Self { hi, lo }
    }

    #[must_use]
    pub const fn from_halves(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// The `(high, low)` halves.
    #[must_use]
    pub const fn halves(&self) -> (u64, u64) {
        (self.hi, self.lo)
    }

    #[must_use]
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        let bits = u128::from_be_bytes(octets);
        Self {
            hi: (bits >> 64) as u64,
            lo: bits as u64,
        }
    }

    #[must_use]
    pub const fn octets(&self) -> [u8; 16] {
        (((self.hi as u128) << 64) | self.lo as u128).to_be_bytes()
    }

    #[must_use]
    pub fn segments(&self) -> [u16; 8] {
        segments_of(&self.octets())
    }

    /// Builds an address from the first sixteen bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than sixteen bytes.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() >= Self::BYTE_COUNT,
            "IPv6 address needs {} bytes, got {}",
            Self::BYTE_COUNT,
            bytes.len()
        );
        let mut octets = [0u8; 16];
        octets.copy_from_slice(&bytes[..Self::BYTE_COUNT]);
        Self::from_octets(octets)
    }

    /// Copies the network-order bytes into `dst[..16]`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than sixteen bytes.
    pub fn write_bytes_into(&self, dst: &mut [u8]) {
        assert!(
            dst.len() >= Self::BYTE_COUNT,
            "destination needs {} bytes, got {}",
            Self::BYTE_COUNT,
            dst.len()
        );
        dst[..Self::BYTE_COUNT].copy_from_slice(&self.octets());
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or(MALFORMED)
    }

    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        parse_ipv6(text.as_bytes()).map(Self::from_octets)
    }

    /// Writes the canonical text form into `dst`.
    pub fn format_into(&self, dst: &mut [u8]) -> Result<usize, FormatError> {
        format_ipv6(&self.octets(), dst)
    }
}

impl From<[u8; 16]> for Ipv6Address {
    fn from(octets: [u8; 16]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv6Address> for [u8; 16] {
    fn from(address: Ipv6Address) -> Self {
        address.octets()
    }
}

impl core::str::FromStr for Ipv6Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Ipv6Address {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Option<[u8; 16]> {
        parse_ipv6(text.as_bytes())
    }

    fn formatted(octets: &[u8; 16]) -> String {
        let mut buf = [0u8; Ipv6Address::MAX_CHARS];
        let n = format_ipv6(octets, &mut buf).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_parse_ipv6_anchored_forms() {
        assert_eq!(parsed("::"), Some([0u8; 16]));

        let mut loopback = [0u8; 16];
        loopback[15] = 1;
        assert_eq!(parsed("::1"), Some(loopback));

        let mut one = [0u8; 16];
        one[1] = 1;
        assert_eq!(parsed("1::"), Some(one));
    }

    #[test]
    fn test_parse_ipv6_middle_elision() {
        assert_eq!(
            parsed("1:2::3:4:5"),
            Some([0, 1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3, 0, 4, 0, 5])
        );
        assert_eq!(
            parsed("2001:db8::1"),
            Some([0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1])
        );
    }

    #[test]
    fn test_parse_ipv6_full_form() {
        assert_eq!(
            parsed("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            Some([0xFF; 16])
        );
        assert_eq!(
            parsed("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            Some([
                0x20, 0x01, 0x0d, 0xb8, 0x85, 0xa3, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2e, 0x03, 0x70,
                0x73, 0x34,
            ])
        );
    }

    #[test]
    fn test_parse_ipv6_uppercase_hex() {
        let octets = parsed("FE80::1").unwrap();
        assert_eq!(octets[0], 0xFE);
        assert_eq!(octets[1], 0x80);
        assert_eq!(octets[15], 1);
    }

    #[test]
    fn test_parse_ipv6_elision_at_group_edges() {
        // `::` standing for exactly one group at either end.
        assert_eq!(
            parsed("::2:3:4:5:6:7:8"),
            Some([0, 0, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8])
        );
        assert_eq!(
            parsed("1:2:3:4:5:6:7::"),
            Some([0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 0])
        );
        assert_eq!(
            parsed("1::3:4:5:6:7:8"),
            Some([0, 1, 0, 0, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8])
        );
    }

    #[test]
    fn test_parse_ipv6_invalid() {
        assert_eq!(parsed(":::"), None);
        assert_eq!(parsed("0:0:0:1:2:3:4:5:0"), None); // nine groups
        assert_eq!(parsed("0:0:0:0:0:fffff:102:405"), None); // five hex digits
        assert_eq!(parsed("00000::1"), None);
        assert_eq!(parsed(""), None);
        assert_eq!(parsed(":"), None);
        assert_eq!(parsed(":1"), None);
        assert_eq!(parsed("1:"), None);
        assert_eq!(parsed(":1::2"), None);
        assert_eq!(parsed("1::2:"), None);
        assert_eq!(parsed("1::2::3"), None);
        assert_eq!(parsed("1:::2"), None);
        assert_eq!(parsed("1:2:3:4:5:6:7"), None); // too few groups
        assert_eq!(parsed("1:2:3:4:5:6:7:8:"), None);
        assert_eq!(parsed("::1:2:3:4:5:6:7:8"), None);
        assert_eq!(parsed("1:2:3:4:5:6:7:8::"), None);
        assert_eq!(parsed("1::2:3:4:5:6:7:8"), None); // elision of zero groups
        assert_eq!(parsed("g::1"), None);
        assert_eq!(parsed("::ffff:1.2.3.4"), None); // dotted tail
        assert_eq!(parsed("fe80::1%eth0"), None); // zone id
        assert_eq!(parsed(" ::1"), None);
    }

    #[test]
    fn test_parse_ipv6_length_bounds() {
        assert_eq!(parsed("1"), None);
        // 40 characters: one extra leading zero somewhere.
        assert_eq!(parsed("0ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"), None);
    }

    #[test]
    fn test_parse_ipv6_into_buffer() {
        let mut buf = [0xFFu8; 32];
        assert_eq!(parse_ipv6_into(b"::1", &mut buf), Ok(()));
        assert_eq!(buf[15], 1);
        assert_eq!(&buf[..15], &[0u8; 15]);
        // Bytes beyond 16 are untouched.
        assert_eq!(buf[16], 0xFF);

        let mut short = [0u8; 15];
        assert_eq!(parse_ipv6_into(b"::1", &mut short), Err(MALFORMED));
    }

    #[test]
    fn test_format_ipv6_canonical() {
        assert_eq!(formatted(&[0u8; 16]), "::");
        let mut loopback = [0u8; 16];
        loopback[15] = 1;
        assert_eq!(formatted(&loopback), "::1");
        assert_eq!(
            formatted(&[0xFF; 16]),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
        let mut fe80 = [0u8; 16];
        fe80[0] = 0xfe;
        fe80[1] = 0x80;
        assert_eq!(formatted(&fe80), "fe80::");
    }

    #[test]
    fn test_format_ipv6_single_zero_group_not_collapsed() {
        let octets = Ipv6Address::new(0x2001, 0xdb8, 0, 1, 1, 1, 1, 1).octets();
        assert_eq!(formatted(&octets), "2001:db8:0:1:1:1:1:1");
    }

    #[test]
    fn test_format_ipv6_longest_run_wins() {
        let octets = Ipv6Address::new(1, 0, 0, 2, 0, 0, 0, 3).octets();
        assert_eq!(formatted(&octets), "1:0:0:2::3");
    }

    #[test]
    fn test_format_ipv6_first_run_wins_ties() {
        let octets = Ipv6Address::new(1, 0, 0, 2, 3, 0, 0, 4).octets();
        assert_eq!(formatted(&octets), "1::2:3:0:0:4");
    }

    #[test]
    fn test_format_ipv6_mapped_stays_hex() {
        let octets = Ipv6Address::new(0, 0, 0, 0, 0, 0xffff, 0x0102, 0x0304).octets();
        assert_eq!(formatted(&octets), "::ffff:102:304");
    }

    #[test]
    fn test_format_ipv6_short_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(
            format_ipv6(&Ipv6Address::LOOPBACK.octets(), &mut buf),
            Err(FormatError::BufferTooSmall {
                needed: 3,
                available: 2
            })
        );
        let mut exact = [0u8; 3];
        assert_eq!(
            format_ipv6(&Ipv6Address::LOOPBACK.octets(), &mut exact),
            Ok(3)
        );
        assert_eq!(&exact, b"::1");
    }

    #[test]
    fn test_roundtrip_ipv6() {
        let cases = [
            ("::", "::"),
            ("::1", "::1"),
            ("1::", "1::"),
            ("1:2::3:4:5", "1:2::3:4:5"),
            ("2001:0DB8::0001", "2001:db8::1"),
            ("1:0:0:0:0:0:0:8", "1::8"),
            (
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
                "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
            ),
        ];
        for (input, expected) in cases {
            let address = Ipv6Address::parse(input).unwrap();
            let text = address.to_string();
            assert_eq!(text, expected, "input={input:?}");
            assert_eq!(Ipv6Address::parse(&text), Ok(address));
        }
    }

    #[test]
    fn test_equality_requires_both_halves() {
        let a = Ipv6Address::from_halves(1, 2);
        assert_eq!(a, Ipv6Address::from_halves(1, 2));
        assert_ne!(a, Ipv6Address::from_halves(1, 3));
        assert_ne!(a, Ipv6Address::from_halves(5, 2));
    }

    #[test]
    fn test_halves_are_big_endian() {
        let address = Ipv6Address::parse("1:2:3:4:5:6:7:8").unwrap();
        assert_eq!(
            address.halves(),
            (0x0001_0002_0003_0004, 0x0005_0006_0007_0008)
        );
        assert_eq!(address.segments(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Ipv6Address::from_octets(address.octets()), address);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Ipv6Address::MAX_CHARS, 39);
        assert_eq!(Ipv6Address::UNSPECIFIED.to_string(), "::");
        assert_eq!(Ipv6Address::LOOPBACK.to_string(), "::1");
        assert_eq!(Ipv6Address::NONE, Ipv6Address::UNSPECIFIED);
    }

    #[test]
    #[should_panic(expected = "IPv6 address needs 16 bytes")]
    fn test_from_short_slice_panics() {
        let _ = Ipv6Address::from_slice(&[0u8; 15]);
    }
}
