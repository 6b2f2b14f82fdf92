//! `serde` support: every value type travels as its canonical string and is
//! read back through the strict parser.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::endpoint::{Ipv4Endpoint, Ipv6Endpoint};
use crate::ipv4::Ipv4Address;
use crate::ipv6::Ipv6Address;
use crate::port::Port;

struct StrictVisitor<T>(PhantomData<T>, &'static str);

impl<T> Visitor<'_> for StrictVisitor<T>
where
    T: core::str::FromStr<Err = crate::ParseError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.1)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

macro_rules! string_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(StrictVisitor(PhantomData, $expecting))
            }
        }
    };
}

string_serde!(Ipv4Address, "a strict dotted-decimal IPv4 address");
string_serde!(Ipv6Address, "a strict colon-hex IPv6 address");
string_serde!(Ipv4Endpoint, "a strict `a.b.c.d:port` endpoint");
string_serde!(Ipv6Endpoint, "a strict `[v6]:port` endpoint");

// Ports serialize as numbers; decimal strings are accepted on input too.
impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.get())
    }
}

struct PortVisitor;

impl Visitor<'_> for PortVisitor {
    type Value = Port;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a port number in 0..=65535")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Port, E> {
        u16::try_from(v)
            .map(Port::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Port, E> {
        u16::try_from(v)
            .map(Port::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Port, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Port {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PortVisitor)
    }
}
