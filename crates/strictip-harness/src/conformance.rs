//! Side-by-side execution of one fixture case.
//!
//! The strict codec output is what fixtures assert on. The `std::net` host
//! parser runs on the same input so reports can flag every place where the
//! strict grammar deliberately diverges from the platform.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use strictip_core::{
    Ipv4Address, Ipv4Endpoint, Ipv6Address, Ipv6Endpoint, Port, parse_ip_addr, parse_socket_addr,
};
use thiserror::Error;

/// Output recorded for rejected input.
pub const REJECTED: &str = "error";

/// Every function name a fixture may reference.
pub const SUPPORTED_FUNCTIONS: &[&str] = &[
    "port_parse",
    "ipv4_parse",
    "ipv6_parse",
    "ipv4_endpoint_parse",
    "ipv6_endpoint_parse",
    "ip_parse",
    "socket_parse",
    "ipv4_format_bytes",
    "ipv6_format_bytes",
];

/// Result of running one case through both implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRun {
    pub impl_output: String,
    pub host_output: String,
    pub host_parity: bool,
    pub note: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConformanceError {
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("byte input must be {expected} hex-encoded bytes, got '{input}'")]
    InvalidHexInput { expected: usize, input: String },
}

fn render<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| REJECTED.to_string(), |v| v.to_string())
}

/// Decodes lowercase or uppercase hex into exactly `N` bytes.
fn decode_hex<const N: usize>(input: &str) -> Result<[u8; N], ConformanceError> {
    let invalid = || ConformanceError::InvalidHexInput {
        expected: N,
        input: input.to_string(),
    };
    if input.len() != N * 2 || !input.is_ascii() {
        return Err(invalid());
    }

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&input[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(out)
}

/// Execute `function` on `input` with both the strict codec and the host.
pub fn execute_case(function: &str, input: &str) -> Result<CaseRun, ConformanceError> {
    let (impl_output, host_output, host_parity) = match function {
        "port_parse" => {
            let strict = Port::try_parse(input).map(Port::get);
            let host = input.parse::<u16>().ok();
            (render(strict), render(host), strict == host)
        }
        "ipv4_parse" => {
            let strict = Ipv4Address::try_parse(input);
            let host = input.parse::<Ipv4Addr>().ok();
            let parity = strict.map(Ipv4Address::to_native) == host;
            (render(strict), render(host), parity)
        }
        "ipv6_parse" => {
            let strict = Ipv6Address::try_parse(input);
            let host = input.parse::<Ipv6Addr>().ok();
            let parity = strict.map(Ipv6Address::to_native) == host;
            (render(strict), render(host), parity)
        }
        "ipv4_endpoint_parse" => {
            let strict = Ipv4Endpoint::try_parse(input);
            let host = input.parse::<SocketAddrV4>().ok();
            let parity = strict.map(Ipv4Endpoint::to_native) == host;
            (render(strict), render(host), parity)
        }
        "ipv6_endpoint_parse" => {
            let strict = Ipv6Endpoint::try_parse(input);
            let host = input.parse::<SocketAddrV6>().ok();
            let parity = strict.map(Ipv6Endpoint::to_native) == host;
            (render(strict), render(host), parity)
        }
        "ip_parse" => {
            let strict = parse_ip_addr(input).ok();
            let host = input.parse::<IpAddr>().ok();
            let impl_output = match strict {
                Some(IpAddr::V4(v4)) => Ipv4Address::from_native(v4).to_string(),
                Some(IpAddr::V6(v6)) => Ipv6Address::from_native(v6).to_string(),
                None => REJECTED.to_string(),
            };
            (impl_output, render(host), strict == host)
        }
        "socket_parse" => {
            let strict = parse_socket_addr(input).ok();
            let host = input.parse::<SocketAddr>().ok();
            let impl_output = match strict {
                Some(SocketAddr::V4(v4)) => Ipv4Endpoint::from_native(v4).to_string(),
                Some(SocketAddr::V6(v6)) => Ipv6Endpoint::from_native(v6).to_string(),
                None => REJECTED.to_string(),
            };
            (impl_output, render(host), strict == host)
        }
        "ipv4_format_bytes" => {
            let octets = decode_hex::<4>(input)?;
            let strict = Ipv4Address::from_octets(octets).to_string();
            let host = Ipv4Addr::from(octets).to_string();
            let parity = strict == host;
            (strict, host, parity)
        }
        "ipv6_format_bytes" => {
            let octets = decode_hex::<16>(input)?;
            let strict = Ipv6Address::from_octets(octets).to_string();
            let host = Ipv6Addr::from(octets).to_string();
            let parity = strict == host;
            (strict, host, parity)
        }
        other => return Err(ConformanceError::UnsupportedFunction(other.to_string())),
    };

    let note = if host_parity {
        None
    } else {
        let divergence = format!("host divergence: strict={impl_output}, host={host_output}");
        Some(divergence)
    };

    Ok(CaseRun {
        impl_output,
        host_output,
        host_parity,
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_case_reports_host_leniency() {
        let run = execute_case("port_parse", "+1").unwrap();
        assert_eq!(run.impl_output, REJECTED);
        assert_eq!(run.host_output, "1");
        assert!(!run.host_parity);
        assert!(run.note.unwrap().contains("host divergence"));
    }

    #[test]
    fn ipv6_parse_case_matches_host() {
        let run = execute_case("ipv6_parse", "2001:0DB8::1").unwrap();
        assert_eq!(run.impl_output, "2001:db8::1");
        assert_eq!(run.host_output, "2001:db8::1");
        assert!(run.host_parity);
        assert_eq!(run.note, None);
    }

    #[test]
    fn mapped_ipv6_is_rejected_but_host_accepts() {
        let run = execute_case("ipv6_parse", "::ffff:1.2.3.4").unwrap();
        assert_eq!(run.impl_output, REJECTED);
        assert_eq!(run.host_output, "::ffff:1.2.3.4");
        assert!(!run.host_parity);
    }

    #[test]
    fn byte_formatting_cases() {
        let run = execute_case("ipv4_format_bytes", "7f000001").unwrap();
        assert_eq!(run.impl_output, "127.0.0.1");
        assert!(run.host_parity);

        let run = execute_case("ipv6_format_bytes", "00000000000000000000ffff01020304").unwrap();
        assert_eq!(run.impl_output, "::ffff:102:304");
        assert_eq!(run.host_output, "::ffff:1.2.3.4");
        assert!(!run.host_parity);
    }

    #[test]
    fn endpoint_cases() {
        let run = execute_case("ipv6_endpoint_parse", "[::1]:42").unwrap();
        assert_eq!(run.impl_output, "[::1]:42");
        assert!(run.host_parity);

        let run = execute_case("socket_parse", "1.1.1.1::42").unwrap();
        assert_eq!(run.impl_output, REJECTED);
        assert_eq!(run.host_output, REJECTED);
        assert!(run.host_parity);
    }

    #[test]
    fn unsupported_function_and_bad_hex() {
        assert_eq!(
            execute_case("inet_aton", "1.2.3.4"),
            Err(ConformanceError::UnsupportedFunction("inet_aton".into()))
        );
        assert!(matches!(
            execute_case("ipv4_format_bytes", "7f00"),
            Err(ConformanceError::InvalidHexInput { expected: 4, .. })
        ));
        assert!(execute_case("ipv4_format_bytes", "zz000001").is_err());
    }
}
