use core::fmt;
use core::str::FromStr;

use crate::{
    concrete::{self, Afi, Glob, Ipv4, Ipv6},
    error::Error,
};

use super::{delegate, Address, Interface, Prefix};

/// A closed interval of IP addresses of either family.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Range {
    /// IPv4 variant.
    Ipv4(concrete::Range<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Range<Ipv6>),
}

impl Range {
    /// Get the address family of `self`.
    pub const fn afi(&self) -> Afi {
        match self {
            Self::Ipv4(_) => Afi::Ipv4,
            Self::Ipv6(_) => Afi::Ipv6,
        }
    }

    /// Get the first address of this range.
    pub fn first(&self) -> Address {
        match self {
            Self::Ipv4(range) => Address::Ipv4(range.first()),
            Self::Ipv6(range) => Address::Ipv6(range.first()),
        }
    }

    /// Get the last address of this range.
    pub fn last(&self) -> Address {
        match self {
            Self::Ipv4(range) => Address::Ipv4(range.last()),
            Self::Ipv6(range) => Address::Ipv6(range.last()),
        }
    }

    delegate! {
        /// Number of addresses covered by this range, or `None` when the
        /// count overflows `u128`.
        pub fn size(&self) -> Option<u128>;
    }

    /// Check whether an address falls within this range.
    ///
    /// An address of the other family is never contained.
    pub fn contains(&self, addr: &Address) -> bool {
        match (self, addr) {
            (Self::Ipv4(range), Address::Ipv4(addr)) => range.contains(*addr),
            (Self::Ipv6(range), Address::Ipv6(addr)) => range.contains(*addr),
            _ => false,
        }
    }

    /// Iterate the addresses of this range, lazily.
    pub fn iter(&self) -> Addresses {
        match self {
            Self::Ipv4(range) => Addresses::Ipv4(range.iter()),
            Self::Ipv6(range) => Addresses::Ipv6(range.iter()),
        }
    }

    /// Decompose this range into the unique minimal ordered sequence of
    /// prefix-aligned CIDR blocks covering exactly its addresses.
    pub fn cidrs(&self) -> Cidrs {
        match self {
            Self::Ipv4(range) => Cidrs::Ipv4(range.cidrs()),
            Self::Ipv6(range) => Cidrs::Ipv6(range.cidrs()),
        }
    }

}

macro_rules! impl_from_range {
    ( $( $af:ident ),* $(,)? ) => {
        $(
            impl From<concrete::Range<$af>> for Range {
                fn from(range: concrete::Range<$af>) -> Self {
                    Self::$af(range)
                }
            }

            impl From<concrete::Prefix<$af>> for Range {
                fn from(prefix: concrete::Prefix<$af>) -> Self {
                    Self::$af(prefix.into())
                }
            }

            impl From<concrete::Address<$af>> for Range {
                fn from(addr: concrete::Address<$af>) -> Self {
                    Self::$af(addr.into())
                }
            }
        )*
    }
}
impl_from_range!(Ipv4, Ipv6);

impl From<Address> for Range {
    fn from(addr: Address) -> Self {
        match addr {
            Address::Ipv4(addr) => addr.into(),
            Address::Ipv6(addr) => addr.into(),
        }
    }
}

impl From<Prefix> for Range {
    fn from(prefix: Prefix) -> Self {
        match prefix {
            Prefix::Ipv4(prefix) => prefix.into(),
            Prefix::Ipv6(prefix) => prefix.into(),
        }
    }
}

impl From<Interface> for Range {
    fn from(interface: Interface) -> Self {
        interface.range()
    }
}

impl From<Glob> for Range {
    fn from(glob: Glob) -> Self {
        Self::Ipv4(glob.range())
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse().map(Self::Ipv6)
        } else {
            s.parse().map(Self::Ipv4)
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(range) => range.fmt(f),
            Self::Ipv6(range) => range.fmt(f),
        }
    }
}

impl IntoIterator for Range {
    type Item = Address;
    type IntoIter = Addresses;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

crate::concrete::impl_try_from_any! {
    Range {
        Range::Ipv4 => concrete::Range<Ipv4>,
        Range::Ipv6 => concrete::Range<Ipv6>,
    }
}

/// Lazy iterator over the addresses of a [`Range`].
#[derive(Clone, Copy, Debug)]
pub enum Addresses {
    /// IPv4 variant.
    Ipv4(concrete::Addresses<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Addresses<Ipv6>),
}

impl Iterator for Addresses {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ipv4(addrs) => addrs.next().map(Address::Ipv4),
            Self::Ipv6(addrs) => addrs.next().map(Address::Ipv6),
        }
    }
}

/// Lazy iterator decomposing a [`Range`] into CIDR blocks.
#[derive(Clone, Copy, Debug)]
pub enum Cidrs {
    /// IPv4 variant.
    Ipv4(concrete::Cidrs<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Cidrs<Ipv6>),
}

impl Iterator for Cidrs {
    type Item = Prefix;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ipv4(cidrs) => cidrs.next().map(Prefix::Ipv4),
            Self::Ipv6(cidrs) => cidrs.next().map(Prefix::Ipv6),
        }
    }
}
