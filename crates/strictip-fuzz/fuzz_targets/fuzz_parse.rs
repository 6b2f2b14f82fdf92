#![no_main]
use libfuzzer_sys::fuzz_target;
use strictip_core::{
    Ipv4Address, Ipv4Endpoint, Ipv6Address, Ipv6Endpoint, Port, format_ipv4, format_ipv6,
    format_port, parse_ipv4, parse_ipv6, parse_port,
};

// Anything accepted must format within MAX_CHARS and parse back to the same value.
fuzz_target!(|data: &[u8]| {
    if let Some(octets) = parse_ipv4(data) {
        let mut buf = [0u8; Ipv4Address::MAX_CHARS];
        let n = format_ipv4(&octets, &mut buf).expect("MAX_CHARS fits");
        assert_eq!(parse_ipv4(&buf[..n]), Some(octets));
    }

    if let Some(octets) = parse_ipv6(data) {
        let mut buf = [0u8; Ipv6Address::MAX_CHARS];
        let n = format_ipv6(&octets, &mut buf).expect("MAX_CHARS fits");
        assert_eq!(parse_ipv6(&buf[..n]), Some(octets));
        // Canonical text is a fixed point.
        let mut again = [0u8; Ipv6Address::MAX_CHARS];
        let m = format_ipv6(&octets, &mut again).expect("MAX_CHARS fits");
        assert_eq!(&buf[..n], &again[..m]);
    }

    if let Some(port) = parse_port(data) {
        let mut buf = [0u8; Port::MAX_CHARS];
        let n = format_port(port, &mut buf).expect("MAX_CHARS fits");
        assert_eq!(parse_port(&buf[..n]), Some(port));
    }

    if let Some(endpoint) = Ipv4Endpoint::parse_bytes(data) {
        let mut buf = [0u8; Ipv4Endpoint::MAX_CHARS];
        let n = endpoint.format_into(&mut buf).expect("MAX_CHARS fits");
        assert_eq!(Ipv4Endpoint::parse_bytes(&buf[..n]), Some(endpoint));
    }

    if let Some(endpoint) = Ipv6Endpoint::parse_bytes(data) {
        let mut buf = [0u8; Ipv6Endpoint::MAX_CHARS];
        let n = endpoint.format_into(&mut buf).expect("MAX_CHARS fits");
        assert_eq!(Ipv6Endpoint::parse_bytes(&buf[..n]), Some(endpoint));
    }

    // Strict acceptance implies std acceptance of the same value.
    if let Ok(text) = core::str::from_utf8(data) {
        if let Some(addr) = Ipv4Address::try_parse(text) {
            let host = text.parse::<std::net::Ipv4Addr>().ok();
            assert_eq!(host, Some(addr.to_native()));
        }
        if let Some(addr) = Ipv6Address::try_parse(text) {
            let host = text.parse::<std::net::Ipv6Addr>().ok();
            assert_eq!(host, Some(addr.to_native()));
        }
    }
});
