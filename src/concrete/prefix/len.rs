use core::fmt;
use core::marker::PhantomData;
use core::ops::Neg;

use crate::{
    error::{err, Error, Kind},
    traits::{primitive::Address as _, Afi},
};

#[allow(clippy::wildcard_imports)]
mod private {
    use super::*;

    /// An IP prefix length guaranteed to be within appropriate bounds for
    /// address family `A`.
    #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct PrefixLength<A: Afi>(u8, PhantomData<A>);

    impl<A: Afi> PrefixLength<A> {
        /// Minimum valid value of [`PrefixLength<A>`].
        pub const MIN: Self = Self(0, PhantomData);

        /// Maximum valid value of [`PrefixLength<A>`].
        pub const MAX: Self = Self(A::Primitive::MAX_LENGTH, PhantomData);

        /// Construct a new [`PrefixLength<A>`] from an integer primitive.
        ///
        /// # Errors
        ///
        /// Fails if `n` is greater than the bit width of address family
        /// `A`.
        pub fn from_primitive(n: u8) -> Result<Self, Error> {
            if n <= A::Primitive::MAX_LENGTH {
                Ok(Self(n, PhantomData))
            } else {
                Err(err!(Kind::Format, "prefix length out of bounds"))
            }
        }

        /// Get the inner integer value, consuming `self`.
        pub const fn into_primitive(self) -> u8 {
            self.0
        }
    }
}

pub use self::private::PrefixLength;

impl<A: Afi> PrefixLength<A> {
    /// Returns a new [`PrefixLength<A>`] one less than `self`, unless
    /// `self` is already the minimum possible value.
    ///
    /// # Errors
    ///
    /// Fails if `self` is equal to zero.
    pub fn decrement(self) -> Result<Self, Error> {
        let length = self.into_primitive();
        if length > 0 {
            Self::from_primitive(length - 1)
        } else {
            Err(err!(Kind::Format, "prefix length underflow"))
        }
    }

    /// Returns a new [`PrefixLength<A>`] one greater than `self`, unless
    /// `self` is already the maximum possible value.
    ///
    /// # Errors
    ///
    /// Fails if `self` is equal to the family bit width.
    pub fn increment(self) -> Result<Self, Error> {
        Self::from_primitive(self.into_primitive() + 1)
    }
}

impl<A: Afi> fmt::Display for PrefixLength<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.into_primitive().fmt(f)
    }
}

impl<A: Afi> Neg for PrefixLength<A> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // ok to unwrap since 0 <= self.0 <= A::MAX_LENGTH
        Self::from_primitive(A::Primitive::MAX_LENGTH - self.into_primitive()).unwrap()
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl<A: Afi> Arbitrary for PrefixLength<A> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..=A::Primitive::MAX_LENGTH)
            .prop_map(|l| Self::from_primitive(l).unwrap())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Ipv4, Ipv6};

    #[test]
    fn bounds_are_enforced() {
        assert!(PrefixLength::<Ipv4>::from_primitive(33).is_err());
        assert!(PrefixLength::<Ipv6>::from_primitive(129).is_err());
        assert!(PrefixLength::<Ipv6>::from_primitive(128).is_ok());
    }

    #[test]
    fn negation_gives_host_length() {
        let length = PrefixLength::<Ipv4>::from_primitive(20).unwrap();
        assert_eq!((-length).into_primitive(), 12);
    }

    #[test]
    fn decrement_at_zero_fails() {
        assert!(PrefixLength::<Ipv4>::MIN.decrement().is_err());
    }

    #[test]
    fn increment_at_max_fails() {
        assert!(PrefixLength::<Ipv4>::MAX.increment().is_err());
    }
}
