use core::fmt;
use core::str::FromStr;

use num_traits::{CheckedAdd as _, One as _, PrimInt as _};

use crate::{
    error::{err, Error, Kind},
    traits::{primitive::Address as _, Afi},
};

use super::{Address, Prefix, PrefixLength};

#[allow(clippy::wildcard_imports)]
mod private {
    use super::*;

    /// A closed interval of IP addresses of family `A`, with no alignment
    /// requirement.
    #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Range<A: Afi> {
        first: Address<A>,
        last: Address<A>,
    }

    impl<A: Afi> Range<A> {
        /// Construct a new [`Range<A>`] from its first and last addresses.
        ///
        /// # Errors
        ///
        /// Fails if `first > last`.
        pub fn new(first: Address<A>, last: Address<A>) -> Result<Self, Error> {
            if first <= last {
                Ok(Self { first, last })
            } else {
                Err(err!(Kind::Format, "range bounds out of order"))
            }
        }

        /// Get the first address of this range.
        pub const fn first(&self) -> Address<A> {
            self.first
        }

        /// Get the last address of this range.
        pub const fn last(&self) -> Address<A> {
            self.last
        }
    }
}

pub use self::private::Range;

impl<A: Afi> Range<A> {
    /// Number of addresses covered by this range, or `None` when the
    /// count overflows `u128`.
    pub fn size(&self) -> Option<u128> {
        (self.last().into_primitive().widen() - self.first().into_primitive().widen())
            .checked_add(1)
    }

    /// Check whether an address falls within this range.
    pub fn contains(&self, addr: Address<A>) -> bool {
        self.first() <= addr && addr <= self.last()
    }

    /// Check whether another range is covered by this range.
    pub fn covers(&self, other: &Self) -> bool {
        self.first() <= other.first() && other.last() <= self.last()
    }

    /// Check whether `self` and `other` cover any address in common.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.first() <= other.last() && other.first() <= self.last()
    }

    /// Check whether `other` begins immediately after `self` ends.
    pub fn precedes(&self, other: &Self) -> bool {
        self.last()
            .checked_add(1)
            .map(|next| next == other.first())
            .unwrap_or(false)
    }

    /// Iterate the addresses of this range, lazily.
    pub fn iter(&self) -> Addresses<A> {
        Addresses {
            cursor: Some(self.first().into_primitive()),
            last: self.last().into_primitive(),
        }
    }

    /// Decompose this range into the unique minimal ordered sequence of
    /// prefix-aligned CIDR blocks covering exactly its addresses.
    ///
    /// Blocks are yielded lazily in ascending order.
    pub fn cidrs(&self) -> Cidrs<A> {
        Cidrs {
            cursor: Some(self.first().into_primitive()),
            last: self.last().into_primitive(),
        }
    }
}

impl<A: Afi> From<Prefix<A>> for Range<A> {
    fn from(prefix: Prefix<A>) -> Self {
        // infallible: network <= broadcast for any prefix
        Self::new(prefix.network(), prefix.broadcast()).unwrap()
    }
}

impl<A: Afi> From<Address<A>> for Range<A> {
    fn from(addr: Address<A>) -> Self {
        // infallible: a single address is a well-ordered range
        Self::new(addr, addr).unwrap()
    }
}

impl<A: Afi> FromStr for Range<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, last) = s
            .split_once('-')
            .ok_or_else(|| err!(Kind::Format, "expected '<first>-<last>'"))?;
        Self::new(first.parse()?, last.parse()?)
    }
}

impl<A: Afi> fmt::Display for Range<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first(), self.last())
    }
}

impl<A: Afi> IntoIterator for Range<A> {
    type Item = Address<A>;
    type IntoIter = Addresses<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the addresses of a [`Range<A>`].
///
/// Addresses are produced on demand; the range is never materialized.
#[derive(Clone, Copy, Debug)]
pub struct Addresses<A: Afi> {
    cursor: Option<A::Primitive>,
    last: A::Primitive,
}

impl<A: Afi> Iterator for Addresses<A> {
    type Item = Address<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        if current > self.last {
            self.cursor = None;
            return None;
        }
        self.cursor = current.checked_add(&A::Primitive::one());
        Some(Address::new(current))
    }
}

/// Lazy iterator decomposing a [`Range<A>`] into CIDR blocks.
///
/// Each step emits the largest prefix-aligned block starting at the
/// current position that does not overrun the range.
#[derive(Clone, Copy, Debug)]
pub struct Cidrs<A: Afi> {
    cursor: Option<A::Primitive>,
    last: A::Primitive,
}

impl<A: Afi> Iterator for Cidrs<A> {
    type Item = Prefix<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cursor?;
        let width = A::Primitive::MAX_LENGTH;
        let align = if first == A::Primitive::ZERO {
            width
        } else {
            first.trailing_zeros() as u8
        };
        let span = {
            let diff = self.last - first;
            if diff == A::Primitive::ONES {
                width
            } else {
                // floor(log2(diff + 1))
                width - 1 - ((diff + A::Primitive::one()).leading_zeros() as u8)
            }
        };
        let block_bits = align.min(span);
        // ok to unwrap: block_bits <= width
        let length = PrefixLength::from_primitive(width - block_bits).unwrap();
        let block = Prefix::new(Address::new(first), length);
        let block_last: A::Primitive = block.broadcast().into_primitive();
        self.cursor = if block_last < self.last {
            block_last.checked_add(&A::Primitive::one())
        } else {
            None
        };
        Some(block)
    }
}
