#![no_main]
use libfuzzer_sys::fuzz_target;
use strictip_core::{Ipv4Address, Ipv4Endpoint, Ipv6Address, Ipv6Endpoint, Port};

// Every binary value formats within MAX_CHARS and parses back to itself.
fuzz_target!(|data: &[u8]| {
    if data.len() < 22 {
        return;
    }

    let v4 = Ipv4Address::from_slice(&data[..4]);
    let v6 = Ipv6Address::from_slice(&data[4..20]);
    let port = Port::new(u16::from_be_bytes([data[20], data[21]]));

    let mut buf = [0u8; Ipv6Endpoint::MAX_CHARS];

    let n = v4.format_into(&mut buf).expect("MAX_CHARS fits");
    assert!(n <= Ipv4Address::MAX_CHARS);
    let text = core::str::from_utf8(&buf[..n]).expect("ascii output");
    assert_eq!(Ipv4Address::try_parse(text), Some(v4));
    assert_eq!(text, v4.to_native().to_string());

    let n = v6.format_into(&mut buf).expect("MAX_CHARS fits");
    assert!(n <= Ipv6Address::MAX_CHARS);
    let text = core::str::from_utf8(&buf[..n]).expect("ascii output");
    assert_eq!(Ipv6Address::try_parse(text), Some(v6));

    let endpoint = Ipv4Endpoint::new(v4, port);
    let n = endpoint.format_into(&mut buf).expect("MAX_CHARS fits");
    assert!(n <= Ipv4Endpoint::MAX_CHARS);
    assert_eq!(Ipv4Endpoint::parse_bytes(&buf[..n]), Some(endpoint));

    let endpoint = Ipv6Endpoint::new(v6, port);
    let n = endpoint.format_into(&mut buf).expect("MAX_CHARS fits");
    assert_eq!(Ipv6Endpoint::parse_bytes(&buf[..n]), Some(endpoint));

    // Too-small buffers fail instead of truncating.
    let mut short = [0u8; 1];
    assert!(v6.format_into(&mut short).is_err());
});
