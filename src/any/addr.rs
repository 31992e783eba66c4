use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::{
    concrete::{self, Afi, Ipv4, Ipv6},
    error::{err, Error, Kind},
    options::Flags,
    traits::primitive::Address as _,
};

use super::delegate;

/// An IP address of either family.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub enum Address {
    /// IPv4 variant.
    Ipv4(concrete::Address<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Address<Ipv6>),
}

impl Address {
    /// Get the address family of `self`.
    pub const fn afi(&self) -> Afi {
        match self {
            Self::Ipv4(_) => Afi::Ipv4,
            Self::Ipv6(_) => Afi::Ipv6,
        }
    }

    /// Check whether `self` is an IPv4 address.
    pub const fn is_ipv4(&self) -> bool {
        matches!(self, Self::Ipv4(_))
    }

    /// Check whether `self` is an IPv6 address.
    pub const fn is_ipv6(&self) -> bool {
        matches!(self, Self::Ipv6(_))
    }

    /// Get the integer value of `self`, widened to 128 bits.
    pub fn to_u128(&self) -> u128 {
        match self {
            Self::Ipv4(addr) => addr.into_primitive().widen(),
            Self::Ipv6(addr) => addr.into_primitive().widen(),
        }
    }

    /// Construct an address from a bare integer: IPv4 when the value
    /// fits in 32 bits, IPv6 otherwise.
    pub fn from_uint(value: u128) -> Self {
        match u32::try_from(value) {
            Ok(value) => Self::Ipv4(concrete::Address::new(value)),
            Err(_) => Self::Ipv6(concrete::Address::new(value)),
        }
    }

    /// Construct an address from packed big-endian bytes, selecting the
    /// family by length.
    ///
    /// # Errors
    ///
    /// Fails unless `octets` is exactly 4 or 16 bytes long.
    pub fn from_octets(octets: &[u8]) -> Result<Self, Error> {
        match *octets {
            [a, b, c, d] => Ok(Self::Ipv4(concrete::Address::from_octets([a, b, c, d]))),
            _ => octets
                .try_into()
                .map(|octets: [u8; 16]| Self::Ipv6(concrete::Address::from_octets(octets)))
                .map_err(|_| err!(Kind::Format, "expected 4 or 16 packed bytes")),
        }
    }

    /// Parse an address literal under the grammar selected by `flags`.
    ///
    /// The family is sniffed from the literal: anything containing a
    /// colon is taken to be IPv6.
    pub fn parse_with(s: &str, flags: Flags) -> Result<Self, Error> {
        if s.contains(':') {
            concrete::Address::parse_with(s, flags).map(Self::Ipv6)
        } else {
            concrete::Address::parse_with(s, flags).map(Self::Ipv4)
        }
    }

    /// Convert to the canonical representation across families: the
    /// embedded IPv4 address for IPv4-mapped values, `self` otherwise.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_canonical(&self) -> Self {
        match self {
            Self::Ipv4(_) => *self,
            Self::Ipv6(ipv6_addr) => ipv6_addr.to_canonical(),
        }
    }

    /// Add an integer offset, failing if the result leaves the family's
    /// value range.
    pub fn checked_add(self, rhs: u128) -> Result<Self, Error> {
        match self {
            Self::Ipv4(addr) => addr.checked_add(rhs).map(Self::Ipv4),
            Self::Ipv6(addr) => addr.checked_add(rhs).map(Self::Ipv6),
        }
    }

    /// Subtract an integer offset, failing if the result leaves the
    /// family's value range.
    pub fn checked_sub(self, rhs: u128) -> Result<Self, Error> {
        match self {
            Self::Ipv4(addr) => addr.checked_sub(rhs).map(Self::Ipv4),
            Self::Ipv6(addr) => addr.checked_sub(rhs).map(Self::Ipv6),
        }
    }

    /// The DNS reverse-lookup name of `self`.
    #[cfg(feature = "std")]
    pub fn reverse_dns(&self) -> std::string::String {
        match self {
            Self::Ipv4(addr) => addr.reverse_dns(),
            Self::Ipv6(addr) => addr.reverse_dns(),
        }
    }

    delegate! {
        /// Check whether `self` is the family's limited-broadcast address.
        pub fn is_broadcast(&self) -> bool;
        /// Check whether `self` is a loopback address.
        pub fn is_loopback(&self) -> bool;
        /// Check whether `self` is a link-local address.
        pub fn is_link_local(&self) -> bool;
        /// Check whether `self` is a multicast address.
        pub fn is_multicast(&self) -> bool;
        /// Check whether `self` is a private-use address.
        pub fn is_private(&self) -> bool;
        /// Check whether `self` is an IETF-reserved address.
        pub fn is_reserved(&self) -> bool;
        /// Check whether `self` is a unicast address.
        pub fn is_unicast(&self) -> bool;
        /// Check whether `self` is the family's unspecified address.
        pub fn is_unspecified(&self) -> bool;
        /// Check whether the bit pattern of `self` is a contiguous netmask.
        pub fn is_netmask(&self) -> bool;
        /// Check whether the bit pattern of `self` is a contiguous hostmask.
        pub fn is_hostmask(&self) -> bool;
        /// Number of bits needed to represent the integer value of `self`.
        pub fn bit_length(&self) -> u8;
    }
}

macro_rules! impl_from_address {
    ( $( $af:ident ),* $(,)? ) => {
        $(
            impl From<concrete::Address<$af>> for Address {
                fn from(addr: concrete::Address<$af>) -> Self {
                    Self::$af(addr)
                }
            }

            impl From<<$af as crate::traits::Afi>::Primitive> for Address {
                fn from(primitive: <$af as crate::traits::Afi>::Primitive) -> Self {
                    Self::$af(concrete::Address::new(primitive))
                }
            }
        )*
    }
}
impl_from_address!(Ipv4, Ipv6);

#[cfg(feature = "std")]
impl From<std::net::IpAddr> for Address {
    fn from(addr: std::net::IpAddr) -> Self {
        match addr {
            std::net::IpAddr::V4(addr) => Self::Ipv4(addr.into()),
            std::net::IpAddr::V6(addr) => Self::Ipv6(addr.into()),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Ipv4(addr), Self::Ipv4(other)) => addr.cmp(other),
            (Self::Ipv6(addr), Self::Ipv6(other)) => addr.cmp(other),
            // IPv4 sorts before IPv6
            (Self::Ipv4(_), Self::Ipv6(_)) => Ordering::Less,
            (Self::Ipv6(_), Self::Ipv4(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_partial_cmp {
    ( $( $af:ident ),* $(,)? ) => {
        $(
            impl PartialEq<concrete::Address<$af>> for Address {
                fn eq(&self, other: &concrete::Address<$af>) -> bool {
                    if let Self::$af(addr) = self {
                        addr.eq(other)
                    } else {
                        false
                    }
                }
            }

            impl PartialEq<Address> for concrete::Address<$af> {
                fn eq(&self, other: &Address) -> bool {
                    other.eq(self)
                }
            }

            impl PartialOrd<concrete::Address<$af>> for Address {
                fn partial_cmp(&self, other: &concrete::Address<$af>) -> Option<Ordering> {
                    self.partial_cmp(&Address::from(*other))
                }
            }

            impl PartialOrd<Address> for concrete::Address<$af> {
                fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    }
}
impl_partial_cmp!(Ipv4, Ipv6);

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Flags::default())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(addr) => addr.fmt(f),
            Self::Ipv6(addr) => addr.fmt(f),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address<Any>::")?;
        match self {
            Self::Ipv4(addr) => write!(f, "Ipv4({})", addr),
            Self::Ipv6(addr) => write!(f, "Ipv6({})", addr),
        }
    }
}

crate::concrete::impl_try_from_any! {
    Address {
        Address::Ipv4 => concrete::Address<Ipv4>,
        Address::Ipv6 => concrete::Address<Ipv6>,
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any, Arbitrary},
    prop_oneof,
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl Arbitrary for Address {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<concrete::Address<Ipv4>>().prop_map(Self::Ipv4),
            any::<concrete::Address<Ipv6>>().prop_map(Self::Ipv6),
        ]
        .boxed()
    }
}
