use core::fmt;
use core::str::FromStr;

use crate::{
    concrete::{self, Afi, Ipv4, Ipv6},
    error::Error,
    options::Flags,
};

use super::{Address, Prefix, Range};

/// An IP interface of either family: an address with a prefix length,
/// host bits retained.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Interface {
    /// IPv4 variant.
    Ipv4(concrete::Interface<Ipv4>),
    /// IPv6 variant.
    Ipv6(concrete::Interface<Ipv6>),
}

impl Interface {
    /// Get the address family of `self`.
    pub const fn afi(&self) -> Afi {
        match self {
            Self::Ipv4(_) => Afi::Ipv4,
            Self::Ipv6(_) => Afi::Ipv6,
        }
    }

    /// Get the address of this interface.
    pub fn addr(&self) -> Address {
        match self {
            Self::Ipv4(interface) => Address::Ipv4(interface.addr()),
            Self::Ipv6(interface) => Address::Ipv6(interface.addr()),
        }
    }

    /// Get the network address of this interface.
    pub fn network(&self) -> Address {
        match self {
            Self::Ipv4(interface) => Address::Ipv4(interface.network()),
            Self::Ipv6(interface) => Address::Ipv6(interface.network()),
        }
    }

    /// Get the last address of the covering prefix.
    pub fn broadcast(&self) -> Address {
        match self {
            Self::Ipv4(interface) => Address::Ipv4(interface.broadcast()),
            Self::Ipv6(interface) => Address::Ipv6(interface.broadcast()),
        }
    }

    /// Get the covering prefix, discarding the host bits.
    pub fn trunc(&self) -> Prefix {
        match self {
            Self::Ipv4(interface) => Prefix::Ipv4(interface.trunc()),
            Self::Ipv6(interface) => Prefix::Ipv6(interface.trunc()),
        }
    }

    /// Get the closed interval `[network, broadcast]` covered by this
    /// interface.
    pub fn range(&self) -> Range {
        match self {
            Self::Ipv4(interface) => Range::Ipv4(interface.range()),
            Self::Ipv6(interface) => Range::Ipv6(interface.range()),
        }
    }

    /// Get the prefix length of this interface.
    pub fn length(&self) -> u8 {
        match self {
            Self::Ipv4(interface) => interface.length().into_primitive(),
            Self::Ipv6(interface) => interface.length().into_primitive(),
        }
    }

    /// Parse an interface literal under the grammar selected by `flags`.
    pub fn parse_with(s: &str, flags: Flags) -> Result<Self, Error> {
        if s.contains(':') {
            concrete::Interface::parse_with(s, flags).map(Self::Ipv6)
        } else {
            concrete::Interface::parse_with(s, flags).map(Self::Ipv4)
        }
    }
}

macro_rules! impl_from_interface {
    ( $( $af:ident ),* $(,)? ) => {
        $(
            impl From<concrete::Interface<$af>> for Interface {
                fn from(interface: concrete::Interface<$af>) -> Self {
                    Self::$af(interface)
                }
            }
        )*
    }
}
impl_from_interface!(Ipv4, Ipv6);

impl FromStr for Interface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Flags::default())
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(interface) => interface.fmt(f),
            Self::Ipv6(interface) => interface.fmt(f),
        }
    }
}

crate::concrete::impl_try_from_any! {
    Interface {
        Interface::Ipv4 => concrete::Interface<Ipv4>,
        Interface::Ipv6 => concrete::Interface<Ipv6>,
    }
}
