use core::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use core::hash::Hash;
use core::ops::RangeInclusive;

use num_traits::{CheckedAdd, CheckedSub, PrimInt, Unsigned};

use crate::{
    concrete::eui::Dialect,
    error::Error,
    options::Flags,
    parser, traits,
};

/// Underlying integer-like type used to represent an IP address of
/// address family `A`.
///
/// Carries the per-family capability set: bit width, bounds, the
/// RFC-derived classification ranges, byte-order conversions and the
/// textual grammar entry points.
pub trait Address<A: traits::Afi>:
    PrimInt
    + Unsigned
    + CheckedAdd
    + CheckedSub
    + Default
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + Hash
    + 'static
{
    /// Bit width of addresses of this address family.
    const MAX_LENGTH: u8;

    /// "All-zeros" address representation.
    const ZERO: Self;
    /// "All-ones" address representation (the family's maximum value).
    const ONES: Self;

    /// The family's limited-broadcast address, where one exists.
    const BROADCAST: Option<Self>;

    const LOOPBACK_RANGE: RangeInclusive<Self>;
    const LINK_LOCAL_RANGE: RangeInclusive<Self>;
    const MULTICAST_RANGE: RangeInclusive<Self>;
    const PRIVATE_RANGES: &'static [RangeInclusive<Self>];
    const RESERVED_RANGES: &'static [RangeInclusive<Self>];

    /// Convert to the family's big-endian byte representation.
    fn to_be_bytes(self) -> A::Octets;

    /// Convert from the family's big-endian byte representation.
    fn from_be_bytes(bytes: A::Octets) -> Self;

    /// Widen to the crate's common 128-bit working type.
    fn widen(self) -> u128;

    /// Narrow from the common 128-bit working type, failing on values
    /// wider than the family width.
    fn narrow(value: u128) -> Option<Self>;

    /// Parse an address literal under the grammar selected by `flags`.
    fn parse_addr(s: &str, flags: Flags) -> Result<Self, Error>;

    /// Parse a prefix literal under the grammar selected by `flags`,
    /// returning the address value and prefix length.
    fn parse_prefix(s: &str, flags: Flags) -> Result<(Self, u8), Error>;
}

macro_rules! ipv4 {
    ($a:literal, $b:literal, $c:literal, $d:literal) => {
        u32::from_be_bytes([$a, $b, $c, $d])
    };
}

impl Address<crate::concrete::Ipv4> for u32 {
    const MAX_LENGTH: u8 = 32;

    const ZERO: Self = 0x0000_0000;
    const ONES: Self = 0xffff_ffff;

    const BROADCAST: Option<Self> = Some(Self::ONES);

    const LOOPBACK_RANGE: RangeInclusive<Self> = ipv4!(127, 0, 0, 0)..=ipv4!(127, 255, 255, 255);
    const LINK_LOCAL_RANGE: RangeInclusive<Self> =
        ipv4!(169, 254, 0, 0)..=ipv4!(169, 254, 255, 255);
    const MULTICAST_RANGE: RangeInclusive<Self> = ipv4!(224, 0, 0, 0)..=ipv4!(239, 255, 255, 255);
    const PRIVATE_RANGES: &'static [RangeInclusive<Self>] = &[
        ipv4!(10, 0, 0, 0)..=ipv4!(10, 255, 255, 255),
        ipv4!(172, 16, 0, 0)..=ipv4!(172, 31, 255, 255),
        ipv4!(192, 168, 0, 0)..=ipv4!(192, 168, 255, 255),
    ];
    const RESERVED_RANGES: &'static [RangeInclusive<Self>] =
        &[ipv4!(240, 0, 0, 0)..=ipv4!(255, 255, 255, 255)];

    fn to_be_bytes(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self::from_be_bytes(bytes)
    }

    fn widen(self) -> u128 {
        self.into()
    }

    fn narrow(value: u128) -> Option<Self> {
        value.try_into().ok()
    }

    fn parse_addr(s: &str, flags: Flags) -> Result<Self, Error> {
        parser::ipv4::parse_addr(s, flags)
    }

    fn parse_prefix(s: &str, flags: Flags) -> Result<(Self, u8), Error> {
        parser::ipv4::parse_prefix(s, flags)
    }
}

impl Address<crate::concrete::Ipv6> for u128 {
    const MAX_LENGTH: u8 = 128;

    const ZERO: Self = 0x0000_0000_0000_0000_0000_0000_0000_0000;
    const ONES: Self = 0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff;

    const BROADCAST: Option<Self> = None;

    const LOOPBACK_RANGE: RangeInclusive<Self> = 0x1..=0x1;
    const LINK_LOCAL_RANGE: RangeInclusive<Self> =
        0xfe80_0000_0000_0000_0000_0000_0000_0000..=0xfebf_ffff_ffff_ffff_ffff_ffff_ffff_ffff;
    const MULTICAST_RANGE: RangeInclusive<Self> =
        0xff00_0000_0000_0000_0000_0000_0000_0000..=0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff;
    // unique-local and (deprecated) site-local
    const PRIVATE_RANGES: &'static [RangeInclusive<Self>] = &[
        0xfc00_0000_0000_0000_0000_0000_0000_0000..=0xfdff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xfec0_0000_0000_0000_0000_0000_0000_0000..=0xfeff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
    ];
    // the IETF-reserved portions of the IPv6 space
    const RESERVED_RANGES: &'static [RangeInclusive<Self>] = &[
        0x0000_0000_0000_0000_0000_0000_0000_0000..=0x00ff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x0100_0000_0000_0000_0000_0000_0000_0000..=0x01ff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x0200_0000_0000_0000_0000_0000_0000_0000..=0x03ff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x0400_0000_0000_0000_0000_0000_0000_0000..=0x07ff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x0800_0000_0000_0000_0000_0000_0000_0000..=0x0fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x1000_0000_0000_0000_0000_0000_0000_0000..=0x1fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x4000_0000_0000_0000_0000_0000_0000_0000..=0x5fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x6000_0000_0000_0000_0000_0000_0000_0000..=0x7fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0x8000_0000_0000_0000_0000_0000_0000_0000..=0x9fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xa000_0000_0000_0000_0000_0000_0000_0000..=0xbfff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xc000_0000_0000_0000_0000_0000_0000_0000..=0xdfff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xe000_0000_0000_0000_0000_0000_0000_0000..=0xefff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xf000_0000_0000_0000_0000_0000_0000_0000..=0xf7ff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xf800_0000_0000_0000_0000_0000_0000_0000..=0xfbff_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
        0xfe00_0000_0000_0000_0000_0000_0000_0000..=0xfe7f_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
    ];

    fn to_be_bytes(self) -> [u8; 16] {
        self.to_be_bytes()
    }

    fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_be_bytes(bytes)
    }

    fn widen(self) -> u128 {
        self
    }

    fn narrow(value: u128) -> Option<Self> {
        Some(value)
    }

    fn parse_addr(s: &str, flags: Flags) -> Result<Self, Error> {
        parser::ipv6::parse_addr(s, flags).map(|(addr, _zone)| addr)
    }

    fn parse_prefix(s: &str, flags: Flags) -> Result<(Self, u8), Error> {
        parser::ipv6::parse_prefix(s, flags)
    }
}

/// Conversions between the 128-bit IPv6 primitive and its hextet view.
pub trait IntoIpv6Segments {
    /// Split into eight 16-bit segments, most significant first.
    fn into_segments(self) -> [u16; 8];
    /// Join eight 16-bit segments, most significant first.
    fn from_segments(segments: [u16; 8]) -> Self;
}

impl IntoIpv6Segments for u128 {
    fn into_segments(self) -> [u16; 8] {
        let octets = self.to_be_bytes();
        let mut segments = [0u16; 8];
        segments.iter_mut().enumerate().for_each(|(i, segment)| {
            *segment = u16::from_be_bytes([octets[2 * i], octets[2 * i + 1]]);
        });
        segments
    }

    fn from_segments(segments: [u16; 8]) -> Self {
        let mut octets = [0u8; 16];
        segments.iter().enumerate().for_each(|(i, segment)| {
            octets[2 * i..2 * i + 2].copy_from_slice(&segment.to_be_bytes());
        });
        Self::from_be_bytes(octets)
    }
}

/// Underlying integer-like type used to represent an EUI of family `A`.
pub trait Eui<A: traits::Efi>:
    PrimInt
    + Unsigned
    + CheckedAdd
    + CheckedSub
    + Default
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + Hash
    + 'static
{
    /// Bit width of identifiers of this family.
    const MAX_LENGTH: u8;

    /// "All-zeros" identifier representation.
    const ZERO: Self;
    /// "All-ones" identifier representation (the family's maximum value).
    const ONES: Self;

    /// Convert to the family's big-endian byte representation.
    fn to_be_bytes(self) -> A::Octets;

    /// Convert from the family's big-endian byte representation.
    fn from_be_bytes(bytes: A::Octets) -> Self;

    /// Widen to the crate's common 128-bit working type.
    fn widen(self) -> u128;

    /// Narrow from the common 128-bit working type, failing on values
    /// wider than the family width.
    fn narrow(value: u128) -> Option<Self>;

    /// Parse an identifier literal, detecting the dialect it is written in.
    fn parse(s: &str) -> Result<(Self, Dialect), Error>;
}

impl Eui<crate::concrete::Eui48> for u64 {
    const MAX_LENGTH: u8 = 48;

    const ZERO: Self = 0x0000_0000_0000;
    const ONES: Self = 0xffff_ffff_ffff;

    fn to_be_bytes(self) -> [u8; 6] {
        let bytes = u64::to_be_bytes(self);
        [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]]
    }

    fn from_be_bytes(bytes: [u8; 6]) -> Self {
        let mut buf = [0u8; 8];
        buf[2..].copy_from_slice(&bytes);
        u64::from_be_bytes(buf)
    }

    fn widen(self) -> u128 {
        self.into()
    }

    fn narrow(value: u128) -> Option<Self> {
        let narrowed: u64 = value.try_into().ok()?;
        (narrowed <= <Self as Eui<crate::concrete::Eui48>>::ONES).then_some(narrowed)
    }

    fn parse(s: &str) -> Result<(Self, Dialect), Error> {
        parser::eui::parse::<6>(s)
    }
}

impl Eui<crate::concrete::Eui64> for u64 {
    const MAX_LENGTH: u8 = 64;

    const ZERO: Self = 0x0000_0000_0000_0000;
    const ONES: Self = 0xffff_ffff_ffff_ffff;

    fn to_be_bytes(self) -> [u8; 8] {
        u64::to_be_bytes(self)
    }

    fn from_be_bytes(bytes: [u8; 8]) -> Self {
        u64::from_be_bytes(bytes)
    }

    fn widen(self) -> u128 {
        self.into()
    }

    fn narrow(value: u128) -> Option<Self> {
        value.try_into().ok()
    }

    fn parse(s: &str) -> Result<(Self, Dialect), Error> {
        parser::eui::parse::<8>(s)
    }
}
