use core::fmt;

use crate::traits;

/// The IPv4 address family.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ipv4 {}

/// The IPv6 address family.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ipv6 {}

/// The 48-bit EUI family: MAC addresses.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Eui48 {}

/// The 64-bit EUI family.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Eui64 {}

impl traits::Afi for Ipv4 {
    type Octets = [u8; 4];
    type Primitive = u32;
    fn as_afi() -> Afi {
        Afi::Ipv4
    }
}

impl traits::Afi for Ipv6 {
    type Octets = [u8; 16];
    type Primitive = u128;
    fn as_afi() -> Afi {
        Afi::Ipv6
    }
}

impl traits::Efi for Eui48 {
    type Octets = [u8; 6];
    type Primitive = u64;
    fn as_efi() -> Efi {
        Efi::Eui48
    }
}

impl traits::Efi for Eui64 {
    type Octets = [u8; 8];
    type Primitive = u64;
    fn as_efi() -> Efi {
        Efi::Eui64
    }
}

/// Enumeration of concrete IP address families.
///
/// # Examples
///
/// ``` rust
/// use addr::traits::Afi as _;
/// use addr::{Ipv4, Ipv6};
///
/// assert_eq!(Ipv4::as_afi().to_string(), "ipv4");
/// assert_eq!(Ipv6::as_afi().to_string(), "ipv6");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Afi {
    /// Variant representing the IPv4 address family.
    Ipv4,
    /// Variant representing the IPv6 address family.
    Ipv6,
}

impl fmt::Display for Afi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => f.write_str("ipv4"),
            Self::Ipv6 => f.write_str("ipv6"),
        }
    }
}

/// Enumeration of concrete EUI families.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Efi {
    /// Variant representing the EUI-48 family.
    Eui48,
    /// Variant representing the EUI-64 family.
    Eui64,
}

impl fmt::Display for Efi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eui48 => f.write_str("eui-48"),
            Self::Eui64 => f.write_str("eui-64"),
        }
    }
}
