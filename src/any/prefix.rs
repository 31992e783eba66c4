use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::{
    concrete::{self, Afi, Ipv4, Ipv6},
    error::Error,
    options::Flags,
};

use super::{delegate, Address};

/// An IP prefix of either family.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub enum Prefix {
    /// IPv4 variant.
    Ipv4(concrete::Prefix<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Prefix<Ipv6>),
}

impl Prefix {
    /// Get the address family of `self`.
    pub const fn afi(&self) -> Afi {
        match self {
            Self::Ipv4(_) => Afi::Ipv4,
            Self::Ipv6(_) => Afi::Ipv6,
        }
    }

    /// Get the network address of this prefix.
    pub fn network(&self) -> Address {
        match self {
            Self::Ipv4(prefix) => Address::Ipv4(prefix.network()),
            Self::Ipv6(prefix) => Address::Ipv6(prefix.network()),
        }
    }

    /// Get the last address covered by this prefix.
    pub fn broadcast(&self) -> Address {
        match self {
            Self::Ipv4(prefix) => Address::Ipv4(prefix.broadcast()),
            Self::Ipv6(prefix) => Address::Ipv6(prefix.broadcast()),
        }
    }

    /// Get the length of this prefix.
    pub fn length(&self) -> u8 {
        match self {
            Self::Ipv4(prefix) => prefix.length().into_primitive(),
            Self::Ipv6(prefix) => prefix.length().into_primitive(),
        }
    }

    /// Check whether an address falls within this prefix.
    ///
    /// An address of the other family is never contained.
    pub fn contains(&self, addr: &Address) -> bool {
        match (self, addr) {
            (Self::Ipv4(prefix), Address::Ipv4(addr)) => prefix.contains(*addr),
            (Self::Ipv6(prefix), Address::Ipv6(addr)) => prefix.contains(*addr),
            _ => false,
        }
    }

    /// Check whether another prefix is covered by this prefix.
    pub fn covers(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ipv4(prefix), Self::Ipv4(other)) => prefix.covers(other),
            (Self::Ipv6(prefix), Self::Ipv6(other)) => prefix.covers(other),
            _ => false,
        }
    }

    delegate! {
        /// Number of addresses covered by this prefix, or `None` when
        /// the count overflows `u128`.
        pub fn size(&self) -> Option<u128>;
    }

    /// Parse a prefix literal under the grammar selected by `flags`.
    pub fn parse_with(s: &str, flags: Flags) -> Result<Self, Error> {
        if s.contains(':') {
            concrete::Interface::<Ipv6>::parse_with(s, flags)
                .map(|interface| Self::Ipv6(interface.trunc()))
        } else {
            concrete::Interface::<Ipv4>::parse_with(s, flags)
                .map(|interface| Self::Ipv4(interface.trunc()))
        }
    }
}

macro_rules! impl_from_prefix {
    ( $( $af:ident ),* $(,)? ) => {
        $(
            impl From<concrete::Prefix<$af>> for Prefix {
                fn from(prefix: concrete::Prefix<$af>) -> Self {
                    Self::$af(prefix)
                }
            }
        )*
    }
}
impl_from_prefix!(Ipv4, Ipv6);

impl Ord for Prefix {
    fn cmp(&self, other: &Self) -> Ordering {
        self.network()
            .cmp(&other.network())
            .then_with(|| self.length().cmp(&other.length()))
    }
}

impl PartialOrd for Prefix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse().map(Self::Ipv6)
        } else {
            s.parse().map(Self::Ipv4)
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(prefix) => prefix.fmt(f),
            Self::Ipv6(prefix) => prefix.fmt(f),
        }
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix<Any>::")?;
        match self {
            Self::Ipv4(prefix) => write!(f, "Ipv4({})", prefix),
            Self::Ipv6(prefix) => write!(f, "Ipv6({})", prefix),
        }
    }
}

crate::concrete::impl_try_from_any! {
    Prefix {
        Prefix::Ipv4 => concrete::Prefix<Ipv4>,
        Prefix::Ipv6 => concrete::Prefix<Ipv6>,
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any, Arbitrary},
    prop_oneof,
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl Arbitrary for Prefix {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<concrete::Prefix<Ipv4>>().prop_map(Self::Ipv4),
            any::<concrete::Prefix<Ipv6>>().prop_map(Self::Ipv6),
        ]
        .boxed()
    }
}
