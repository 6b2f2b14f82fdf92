//! Conversions between the strict value types and `std::net`.
//!
//! Family mismatches surface as [`FamilyMismatch`] through `TryFrom`; the
//! same-family conversions are infallible. IPv6 flow info and scope ids do
//! not exist on the strict side and are dropped (or zeroed on the way out).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::endpoint::{Ipv4Endpoint, Ipv6Endpoint};
use crate::error::{AddressFamily, FamilyMismatch};
use crate::ipv4::Ipv4Address;
use crate::ipv6::Ipv6Address;
use crate::port::Port;

fn family_of_ip(address: &IpAddr) -> AddressFamily {
    match address {
        IpAddr::V4(_) => AddressFamily::Inet,
        IpAddr::V6(_) => AddressFamily::Inet6,
    }
}

fn family_of_socket(address: &SocketAddr) -> AddressFamily {
    match address {
        SocketAddr::V4(_) => AddressFamily::Inet,
        SocketAddr::V6(_) => AddressFamily::Inet6,
    }
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

impl Ipv4Address {
    #[must_use]
    pub const fn from_native(address: Ipv4Addr) -> Self {
        Self::from_octets(address.octets())
    }

    #[must_use]
    pub const fn to_native(self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets();
        Ipv4Addr::new(a, b, c, d)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(address: Ipv4Addr) -> Self {
        Self::from_native(address)
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        address.to_native()
    }
}

impl From<Ipv4Address> for IpAddr {
    fn from(address: Ipv4Address) -> Self {
        IpAddr::V4(address.to_native())
    }
}

impl TryFrom<IpAddr> for Ipv4Address {
    type Error = FamilyMismatch;

    fn try_from(address: IpAddr) -> Result<Self, Self::Error> {
        match address {
            IpAddr::V4(v4) => Ok(Self::from_native(v4)),
            other => Err(FamilyMismatch {
                expected: AddressFamily::Inet,
                found: family_of_ip(&other),
            }),
        }
    }
}

impl Ipv6Address {
    #[must_use]
    pub const fn from_native(address: Ipv6Addr) -> Self {
        Self::from_octets(address.octets())
    }

    #[must_use]
    pub const fn to_native(self) -> Ipv6Addr {
        Ipv6Addr::from_bits(u128::from_be_bytes(self.octets()))
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(address: Ipv6Addr) -> Self {
        Self::from_native(address)
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(address: Ipv6Address) -> Self {
        address.to_native()
    }
}

impl From<Ipv6Address> for IpAddr {
    fn from(address: Ipv6Address) -> Self {
        IpAddr::V6(address.to_native())
    }
}

impl TryFrom<IpAddr> for Ipv6Address {
    type Error = FamilyMismatch;

    fn try_from(address: IpAddr) -> Result<Self, Self::Error> {
        match address {
            IpAddr::V6(v6) => Ok(Self::from_native(v6)),
            other => Err(FamilyMismatch {
                expected: AddressFamily::Inet6,
                found: family_of_ip(&other),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

impl Ipv4Endpoint {
    #[must_use]
    pub fn from_native(endpoint: SocketAddrV4) -> Self {
        Self::new(
            Ipv4Address::from_native(*endpoint.ip()),
            Port::new(endpoint.port()),
        )
    }

    #[must_use]
    pub fn to_native(self) -> SocketAddrV4 {
        SocketAddrV4::new(self.address().to_native(), self.port().get())
    }
}

impl From<SocketAddrV4> for Ipv4Endpoint {
    fn from(endpoint: SocketAddrV4) -> Self {
        Self::from_native(endpoint)
    }
}

impl From<Ipv4Endpoint> for SocketAddr {
    fn from(endpoint: Ipv4Endpoint) -> Self {
        SocketAddr::V4(endpoint.to_native())
    }
}

impl TryFrom<SocketAddr> for Ipv4Endpoint {
    type Error = FamilyMismatch;

    fn try_from(endpoint: SocketAddr) -> Result<Self, Self::Error> {
        match endpoint {
            SocketAddr::V4(v4) => Ok(Self::from_native(v4)),
            other => Err(FamilyMismatch {
                expected: AddressFamily::Inet,
                found: family_of_socket(&other),
            }),
        }
    }
}

impl Ipv6Endpoint {
    #[must_use]
    pub fn from_native(endpoint: SocketAddrV6) -> Self {
        Self::new(
            Ipv6Address::from_native(*endpoint.ip()),
            Port::new(endpoint.port()),
        )
    }

    #[must_use]
    pub fn to_native(self) -> SocketAddrV6 {
        SocketAddrV6::new(self.address().to_native(), self.port().get(), 0, 0)
    }
}

impl From<SocketAddrV6> for Ipv6Endpoint {
    fn from(endpoint: SocketAddrV6) -> Self {
        Self::from_native(endpoint)
    }
}

impl From<Ipv6Endpoint> for SocketAddr {
    fn from(endpoint: Ipv6Endpoint) -> Self {
        SocketAddr::V6(endpoint.to_native())
    }
}

impl TryFrom<SocketAddr> for Ipv6Endpoint {
    type Error = FamilyMismatch;

    fn try_from(endpoint: SocketAddr) -> Result<Self, Self::Error> {
        match endpoint {
            SocketAddr::V6(v6) => Ok(Self::from_native(v6)),
            other => Err(FamilyMismatch {
                expected: AddressFamily::Inet6,
                found: family_of_socket(&other),
            }),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
