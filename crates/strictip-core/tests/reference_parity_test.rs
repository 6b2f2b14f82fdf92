//! Integration test: strict codecs vs the `std::net` reference parsers.
//!
//! Every literal the strict grammar accepts must decode to the same bytes
//! the standard library produces, and must format back to the same canonical
//! text. Literals outside the strict grammar are checked for rejection.
//!
//! Run: cargo test -p strictip-core --test reference_parity_test

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6};

use strictip_core::{
    Ipv4Address, Ipv4Endpoint, Ipv6Address, Ipv6Endpoint, Port, parse_ip_addr, parse_ipv4,
    parse_ipv6, parse_socket_addr,
};

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

const IPV4_VALID: &[&str] = &[
    "127.0.0.1",
    "1.1.1.1",
    "255.255.255.255",
    "0.0.0.0",
    "8.8.4.4",
    "192.168.100.200",
    "10.0.0.10",
];

const IPV4_INVALID: &[&str] = &[
    "127.0.0.",
    ".1.1.1",
    "8.8..4.4",
    "256.256.256.256",
    "1.2.3",
    "1.2.3.4.5",
    "007.0.0.1",
    "0x7f.0.0.1",
    "1.2.3.4\n",
    "",
];

const IPV6_VALID: &[&str] = &[
    "::",
    "::1",
    "1::",
    "1:2::3:4:5",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    "2001:db8::8a2e:370:7334",
    "2001:0db8:0000:0000:0000:0000:0000:0001",
    "fe80::1ff:fe23:4567:890a",
    "FE80::ABCD",
    "::2:3:4:5:6:7:8",
    "1:2:3:4:5:6:7::",
    "0:0:0:0:0:0:0:0",
];

const IPV6_INVALID: &[&str] = &[
    ":::",
    "0:0:0:1:2:3:4:5:0",
    "0:0:0:0:0:fffff:102:405",
    "1::2::3",
    ":1",
    "1:",
    "1:2:3:4:5:6:7",
    "::ffff:192.168.1.1",
    "fe80::1%1",
    "[::1]",
    "",
];

// ---------------------------------------------------------------------------
// IPv4
// ---------------------------------------------------------------------------

#[test]
fn ipv4_valid_literals_match_std() {
    for &text in IPV4_VALID {
        let reference: Ipv4Addr = text.parse().expect("reference accepts corpus literal");
        let strict = Ipv4Address::parse(text).expect("strict accepts corpus literal");
        assert_eq!(strict.octets(), reference.octets(), "{text}");
        assert_eq!(strict.to_string(), reference.to_string(), "{text}");
        assert_eq!(
            strict.to_string(),
            text,
            "canonical literal must format to itself"
        );
    }
}

#[test]
fn ipv4_invalid_literals_rejected() {
    for &text in IPV4_INVALID {
        assert_eq!(parse_ipv4(text.as_bytes()), None, "{text:?}");
    }
}

// ---------------------------------------------------------------------------
// IPv6
// ---------------------------------------------------------------------------

#[test]
fn ipv6_valid_literals_match_std() {
    for &text in IPV6_VALID {
        let reference: Ipv6Addr = text.parse().expect("reference accepts corpus literal");
        let strict = Ipv6Address::parse(text).expect("strict accepts corpus literal");
        assert_eq!(strict.octets(), reference.octets(), "{text}");
        assert_eq!(strict.to_string(), reference.to_string(), "{text}");
    }
}

#[test]
fn ipv6_invalid_literals_rejected() {
    for &text in IPV6_INVALID {
        assert_eq!(parse_ipv6(text.as_bytes()), None, "{text:?}");
    }
}

#[test]
fn ipv6_formatting_is_idempotent() {
    for &text in IPV6_VALID {
        let first = Ipv6Address::parse(text).unwrap();
        let canonical = first.to_string();
        let second = Ipv6Address::parse(&canonical).unwrap();
        assert_eq!(first, second, "{text}");
        assert_eq!(second.to_string(), canonical, "{text}");
    }
}

#[test]
fn ipv6_exhaustive_zero_patterns_match_std() {
    // Every combination of zero / non-zero groups exercises every elision
    // position the formatter can choose.
    for mask in 0u16..256 {
        let mut segments = [0u16; 8];
        for (i, segment) in segments.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *segment = 0x1000 + i as u16;
            }
        }
        let native = Ipv6Addr::from(segments);
        if native.to_ipv4_mapped().is_some() {
            continue; // std prints a dotted tail here
        }
        let strict = Ipv6Address::from_native(native);
        let text = strict.to_string();
        assert_eq!(text, native.to_string(), "mask={mask:#010b}");
        assert_eq!(Ipv6Address::parse(&text), Ok(strict), "mask={mask:#010b}");
    }
}

// ---------------------------------------------------------------------------
// Ports and endpoints
// ---------------------------------------------------------------------------

#[test]
fn port_boundaries() {
    assert_eq!(Port::try_parse("0"), Some(Port::new(0)));
    assert_eq!(Port::try_parse("65535"), Some(Port::new(65535)));
    for bad in ["65536", "-1", "+1", ""] {
        assert_eq!(Port::try_parse(bad), None, "{bad:?}");
    }
}

#[test]
fn endpoint_composition() {
    let v4 = Ipv4Endpoint::parse("127.0.0.1:65535").unwrap();
    assert_eq!(v4.address().to_string(), "127.0.0.1");
    assert_eq!(v4.port().get(), 65535);
    assert_eq!(
        v4.to_native(),
        "127.0.0.1:65535".parse::<SocketAddrV4>().unwrap()
    );

    let v6 = Ipv6Endpoint::parse("[::1]:42").unwrap();
    assert_eq!(v6.address().to_string(), "::1");
    assert_eq!(v6.port().get(), 42);
    assert_eq!(v6.to_native(), "[::1]:42".parse::<SocketAddrV6>().unwrap());

    assert!(Ipv6Endpoint::try_parse("[::1]:").is_none());
    assert!(Ipv4Endpoint::try_parse("1.1.1.1::42").is_none());
}

#[test]
fn dispatch_matches_std_for_valid_input() {
    for &text in IPV4_VALID.iter().chain(IPV6_VALID) {
        assert_eq!(parse_ip_addr(text).ok(), text.parse().ok(), "{text}");
    }
    for text in ["1.2.3.4:80", "[::1]:443", "[2001:db8::1]:65535"] {
        assert_eq!(parse_socket_addr(text).ok(), text.parse().ok(), "{text}");
    }
}
