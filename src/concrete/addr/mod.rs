use core::fmt;
use core::str::FromStr;

use crate::{
    error::{err, Error, Kind},
    fmt::AddressDisplay,
    options::Flags,
    traits::{primitive::Address as _, Afi},
};
use num_traits::PrimInt;

use super::PrefixLength;

mod convert;
mod ops;

mod ipv4;
mod ipv6;

#[allow(clippy::wildcard_imports)]
mod private {
    use super::*;

    /// An IP address of address family `A`.
    #[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Address<A: Afi>(A::Primitive);

    impl<A: Afi> Address<A> {
        /// Construct a new [`Address<A>`] from an integer primitive
        /// appropriate to `A`.
        pub const fn new(inner: A::Primitive) -> Self {
            Self(inner)
        }

        /// Get the primitive integer value, consuming `self`.
        pub const fn into_primitive(self) -> A::Primitive {
            self.0
        }
    }
}

pub use self::private::Address;

impl<A: Afi> Address<A> {
    /// The "all-zeros" address of family `A`.
    pub const ZEROS: Self = Self::new(A::Primitive::ZERO);
    /// The "all-ones" address of family `A`.
    pub const ONES: Self = Self::new(A::Primitive::ONES);
    /// The unspecified address of family `A`.
    pub const UNSPECIFIED: Self = Self::ZEROS;

    /// Construct a new [`Address<A>`] from big-endian octets.
    pub fn from_octets(octets: A::Octets) -> Self {
        Self::new(A::Primitive::from_be_bytes(octets))
    }

    /// Get the big-endian octet representation of `self`.
    pub fn octets(&self) -> A::Octets {
        self.into_primitive().to_be_bytes()
    }

    /// Parse an address literal under the grammar selected by `flags`.
    pub fn parse_with(s: &str, flags: Flags) -> Result<Self, Error> {
        A::Primitive::parse_addr(s, flags).map(Self::new)
    }

    /// Number of bits needed to represent the integer value of `self`.
    pub fn bit_length(&self) -> u8 {
        A::Primitive::MAX_LENGTH - self.into_primitive().leading_zeros() as u8
    }

    /// Add an integer offset, failing if the result leaves the family's
    /// value range.
    pub fn checked_add(self, rhs: u128) -> Result<Self, Error> {
        self.into_primitive()
            .widen()
            .checked_add(rhs)
            .and_then(A::Primitive::narrow)
            .map(Self::new)
            .ok_or_else(|| err!(Kind::Format, "address offset out of range"))
    }

    /// Subtract an integer offset, failing if the result leaves the
    /// family's value range.
    pub fn checked_sub(self, rhs: u128) -> Result<Self, Error> {
        self.into_primitive()
            .widen()
            .checked_sub(rhs)
            .and_then(A::Primitive::narrow)
            .map(Self::new)
            .ok_or_else(|| err!(Kind::Format, "address offset out of range"))
    }

    /// Compute the length of the common prefix of `self` and another
    /// [`Address<A>`].
    #[allow(clippy::missing_panics_doc)]
    pub fn common_length(self, other: Self) -> PrefixLength<A> {
        // ok to unwrap here as long as primitive width invariants hold
        let length = ((self ^ other).leading_zeros() as u8).min(A::Primitive::MAX_LENGTH);
        PrefixLength::<A>::from_primitive(length).unwrap()
    }

    /// The family's limited-broadcast address, if one exists.
    pub fn is_broadcast(&self) -> bool {
        A::Primitive::BROADCAST
            .map(|broadcast| self.into_primitive() == broadcast)
            .unwrap_or(false)
    }

    /// Check whether `self` is a loopback address.
    pub fn is_loopback(&self) -> bool {
        A::Primitive::LOOPBACK_RANGE.contains(&self.into_primitive())
    }

    /// Check whether `self` is a link-local address.
    pub fn is_link_local(&self) -> bool {
        A::Primitive::LINK_LOCAL_RANGE.contains(&self.into_primitive())
    }

    /// Check whether `self` is a multicast address.
    pub fn is_multicast(&self) -> bool {
        A::Primitive::MULTICAST_RANGE.contains(&self.into_primitive())
    }

    /// Check whether `self` falls within the family's private-use ranges.
    pub fn is_private(&self) -> bool {
        A::Primitive::PRIVATE_RANGES
            .iter()
            .any(|range| range.contains(&self.into_primitive()))
    }

    /// Check whether `self` falls within the family's IETF-reserved ranges.
    pub fn is_reserved(&self) -> bool {
        A::Primitive::RESERVED_RANGES
            .iter()
            .any(|range| range.contains(&self.into_primitive()))
    }

    /// Check whether `self` is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast() && !self.is_broadcast()
    }

    /// Check whether `self` is the family's unspecified address.
    pub fn is_unspecified(&self) -> bool {
        self == &Self::UNSPECIFIED
    }

    /// Check whether the bit pattern of `self` is a contiguous netmask.
    pub fn is_netmask(&self) -> bool {
        let primitive = self.into_primitive();
        (!primitive).leading_zeros() + primitive.trailing_zeros()
            == u32::from(A::Primitive::MAX_LENGTH)
    }

    /// Check whether the bit pattern of `self` is a contiguous hostmask.
    pub fn is_hostmask(&self) -> bool {
        let primitive = self.into_primitive();
        primitive.leading_zeros() + (!primitive).trailing_zeros()
            == u32::from(A::Primitive::MAX_LENGTH)
    }
}

/// Compute the length, as a [`PrefixLength<A>`], of the common prefix of
/// two [`Address<A>`].
pub fn common_length<A: Afi>(lhs: Address<A>, rhs: Address<A>) -> PrefixLength<A> {
    lhs.common_length(rhs)
}

impl<A: Afi> FromStr for Address<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Flags::default())
    }
}

impl<A: Afi> fmt::Display for Address<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.into_primitive().fmt_addr(f)
    }
}

impl<A: Afi> fmt::Debug for Address<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address<{:?}>({})", A::as_afi(), self)
    }
}

macro_rules! impl_int_views {
    ( $( $trait:ident ),* $(,)? ) => {
        $(
            impl<A: Afi> fmt::$trait for Address<A> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.into_primitive(), f)
                }
            }
        )*
    }
}
impl_int_views!(Binary, LowerHex, UpperHex, Octal);

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any_with, Arbitrary, ParamsFor, StrategyFor},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl<A: Afi> Arbitrary for Address<A>
where
    A: 'static,
    A::Primitive: Arbitrary + 'static,
    StrategyFor<A::Primitive>: 'static,
{
    type Parameters = ParamsFor<A::Primitive>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        any_with::<A::Primitive>(params).prop_map(Self::new).boxed()
    }
}
