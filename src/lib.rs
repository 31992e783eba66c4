//! Types and an interval algebra for network addresses, generic over
//! address families: IPv4 and IPv6 addresses, CIDR prefixes, arbitrary
//! ranges and globs, EUI-48/EUI-64 hardware addresses, and the IEEE
//! OUI/IAB registry index.
#![no_std]
// #![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Address-family generic value types and per-family marker types.
pub mod concrete;
/// Enumerated types ranging over all families of a kind.
pub mod any;
/// Canonical and dialected address formatting.
pub mod fmt;
/// Family and primitive traits underpinning the generic types.
pub mod traits;

/// Free-function CIDR algebra: merge, exclude, span, match.
#[cfg(feature = "std")]
pub mod cidr;
/// IEEE OUI / IAB registration lookup.
#[cfg(feature = "std")]
pub mod registry;
/// Arbitrary subsets of the IPv4 and IPv6 address spaces.
#[cfg(feature = "std")]
pub mod set;

mod error;
mod options;
mod parser;
mod valid;

pub use self::concrete::{
    Address, Afi, Dialect, Efi, Eui, Eui48, Eui64, Glob, Hostmask, Interface,
    Ipv4, Ipv6, Netmask, Prefix, PrefixLength, Range,
};
pub use self::error::{Error, Kind};
pub use self::options::Flags;
pub use self::valid::{valid_eui48, valid_eui64, valid_glob, valid_ipv4, valid_ipv6};

#[cfg(feature = "std")]
pub use self::registry::{Iab, Oui};
#[cfg(feature = "std")]
pub use self::set::IpSet;
