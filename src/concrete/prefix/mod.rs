#![allow(clippy::module_name_repetitions)]

use core::cmp::min;
use core::fmt;
use core::str::FromStr;

use crate::{
    error::{err, Error, Kind},
    options::Flags,
    traits::{primitive::Address as _, Afi},
};

use super::{common_length, Address, Hostmask, Netmask};

mod len;
pub use self::len::PrefixLength;

mod subprefixes;
pub use self::subprefixes::Subprefixes;

mod supernets;
pub use self::supernets::Supernets;

#[allow(clippy::wildcard_imports)]
mod private {
    use super::*;

    /// An IP prefix, consisting of a network address and prefix length.
    ///
    /// The host bits of the address are always zero.
    #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Prefix<A: Afi> {
        prefix: Address<A>,
        length: PrefixLength<A>,
    }

    impl<A: Afi> Prefix<A> {
        /// The "default" prefix containing all addresses of address
        /// family `A`.
        pub const DEFAULT: Self = Self {
            prefix: Address::ZEROS,
            length: PrefixLength::MIN,
        };

        /// Construct a new [`Prefix<A>`] from an address and prefix
        /// length.
        ///
        /// The host bits of `prefix` will be automatically set to zero.
        pub fn new(mut prefix: Address<A>, length: PrefixLength<A>) -> Self {
            prefix &= Netmask::from(length);
            Self { prefix, length }
        }

        /// Get the network address of this prefix.
        pub const fn network(&self) -> Address<A> {
            self.prefix
        }

        /// Get the length of this prefix.
        pub const fn length(&self) -> PrefixLength<A> {
            self.length
        }
    }
}

pub use self::private::Prefix;

impl<A: Afi> Prefix<A> {
    /// Get the netmask of this prefix.
    pub fn netmask(&self) -> Netmask<A> {
        self.length().into()
    }

    /// Get the hostmask of this prefix.
    pub fn hostmask(&self) -> Hostmask<A> {
        self.length().into()
    }

    /// Get the last address covered by this prefix (the IPv4 directed
    /// broadcast address).
    pub fn broadcast(&self) -> Address<A> {
        self.network() | self.hostmask()
    }

    /// Number of addresses covered by this prefix, or `None` when the
    /// count overflows `u128`.
    pub fn size(&self) -> Option<u128> {
        let host_bits = u32::from(A::Primitive::MAX_LENGTH - self.length().into_primitive());
        1u128.checked_shl(host_bits)
    }

    /// Check whether an address falls within this prefix.
    pub fn contains(&self, addr: Address<A>) -> bool {
        self.network() <= addr && addr <= self.broadcast()
    }

    /// Check whether another prefix is covered by this prefix.
    pub fn covers(&self, other: &Self) -> bool {
        self.length() <= other.length() && other.network() & self.netmask() == self.network()
    }

    /// Check whether `self` and `other` cover any address in common.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.covers(other) || other.covers(self)
    }

    /// Get the prefix one bit shorter than `self` that covers it, unless
    /// `self` is already the whole address space.
    pub fn supernet(&self) -> Option<Self> {
        self.length()
            .decrement()
            .map(|length| Self::new(self.network(), length))
            .ok()
    }

    /// Iterate the supernets of `self`, tightest first, ending with the
    /// whole address space.
    pub fn supernets(&self) -> Supernets<A> {
        Supernets::new(*self)
    }

    /// Check whether `self` and `other` share a parent prefix one bit
    /// shorter.
    pub fn is_sibling(&self, other: &Self) -> bool {
        self.supernet() == other.supernet()
    }

    /// Iterate the prefix-aligned children of `self` of length
    /// `new_length`.
    ///
    /// # Errors
    ///
    /// Fails if `new_length` is shorter than the length of `self`.
    pub fn subnets(&self, new_length: PrefixLength<A>) -> Result<Subprefixes<A>, Error> {
        Subprefixes::new(*self, new_length)
    }

    /// Compute the smallest prefix covering every prefix yielded by
    /// `iter`.
    ///
    /// # Errors
    ///
    /// Fails if `iter` is empty.
    pub fn spanning<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut iter = iter.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| err!(Kind::Format, "cannot span an empty collection"))?;
        let (lo, hi) = iter.fold(
            (first.network(), first.broadcast()),
            |(lo, hi), prefix| (lo.min(prefix.network()), hi.max(prefix.broadcast())),
        );
        Ok(Self::new(lo, common_length(lo, hi)))
    }

    fn common_with(&self, other: &Self) -> Self {
        let min_length = min(self.length(), other.length());
        let common_length = common_length(self.network(), other.network());
        let length = min(min_length, common_length);
        Self::new(self.network(), length)
    }

    /// Compute the longest prefix covering both `self` and `other`.
    pub fn common_supernet(&self, other: &Self) -> Self {
        self.common_with(other)
    }
}

impl<A: Afi> From<Address<A>> for Prefix<A> {
    fn from(addr: Address<A>) -> Self {
        Self::new(addr, PrefixLength::MAX)
    }
}

impl<A: Afi> FromStr for Prefix<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        A::Primitive::parse_prefix(s, Flags::default()).and_then(|(addr, len)| {
            Ok(Self::new(
                Address::new(addr),
                PrefixLength::from_primitive(len)?,
            ))
        })
    }
}

impl<A: Afi> fmt::Display for Prefix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.length())
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any_with, Arbitrary, ParamsFor, StrategyFor},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl<A: Afi> Arbitrary for Prefix<A>
where
    Address<A>: Arbitrary,
    StrategyFor<Address<A>>: 'static,
    PrefixLength<A>: Arbitrary,
    StrategyFor<PrefixLength<A>>: 'static,
{
    type Parameters = ParamsFor<(Address<A>, PrefixLength<A>)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        (
            any_with::<Address<A>>(params.0),
            any_with::<PrefixLength<A>>(params.1),
        )
            .prop_map(|(prefix, length)| Self::new(prefix, length))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    use crate::{Ipv4, Ipv6};

    #[test]
    fn host_bits_are_zeroed() {
        let prefix = "192.0.2.55/24".parse::<Prefix<Ipv4>>().unwrap();
        assert_eq!(prefix.to_string(), "192.0.2.0/24");
    }

    #[test]
    fn network_and_broadcast() {
        let prefix = "10.0.0.0/8".parse::<Prefix<Ipv4>>().unwrap();
        assert_eq!(prefix.network().to_string(), "10.0.0.0");
        assert_eq!(prefix.broadcast().to_string(), "10.255.255.255");
    }

    #[test]
    fn masks() {
        let prefix = "198.51.100.0/22".parse::<Prefix<Ipv4>>().unwrap();
        assert_eq!(prefix.netmask().to_string(), "255.255.252.0");
        assert_eq!(prefix.hostmask().to_string(), "0.0.3.255");
    }

    #[test]
    fn size_of_blocks() {
        assert_eq!(
            "10.0.0.0/8".parse::<Prefix<Ipv4>>().unwrap().size(),
            Some(1 << 24)
        );
        assert_eq!("::/0".parse::<Prefix<Ipv6>>().unwrap().size(), None);
        assert_eq!(
            "2001:db8::/32".parse::<Prefix<Ipv6>>().unwrap().size(),
            Some(1 << 96)
        );
    }

    #[test]
    fn contains_addresses() {
        let prefix = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        assert!(prefix.contains("192.0.2.255".parse().unwrap()));
        assert!(!prefix.contains("192.0.3.0".parse().unwrap()));
    }

    #[test]
    fn covers_subprefixes() {
        let outer = "10.0.0.0/8".parse::<Prefix<Ipv4>>().unwrap();
        let inner = "10.128.0.0/9".parse::<Prefix<Ipv4>>().unwrap();
        assert!(outer.covers(&inner));
        assert!(!inner.covers(&outer));
        assert!(outer.covers(&outer));
    }

    #[test]
    fn supernet_walk() {
        let prefix = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let supernet = prefix.supernet().unwrap();
        assert_eq!(supernet.to_string(), "192.0.2.0/23");
        assert_eq!(Prefix::<Ipv4>::DEFAULT.supernet(), None);
    }

    #[test]
    fn supernets_tightest_first() {
        let prefix = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let supernets: std::vec::Vec<_> = prefix
            .supernets()
            .take(3)
            .map(|p| p.to_string())
            .collect();
        assert_eq!(supernets, ["192.0.2.0/23", "192.0.0.0/22", "192.0.0.0/21"]);
        assert_eq!(prefix.supernets().count(), 24);
    }

    #[test]
    fn siblings() {
        let lhs = "192.0.2.0/25".parse::<Prefix<Ipv4>>().unwrap();
        let rhs = "192.0.2.128/25".parse::<Prefix<Ipv4>>().unwrap();
        assert!(lhs.is_sibling(&rhs));
    }

    #[test]
    fn subnet_partition() {
        let prefix = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let length = PrefixLength::from_primitive(26).unwrap();
        let subnets: std::vec::Vec<_> = prefix
            .subnets(length)
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(
            subnets,
            [
                "192.0.2.0/26",
                "192.0.2.64/26",
                "192.0.2.128/26",
                "192.0.2.192/26"
            ]
        );
    }

    #[test]
    fn subnet_shorter_length_fails() {
        let prefix = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let length = PrefixLength::from_primitive(23).unwrap();
        assert!(prefix.subnets(length).is_err());
    }

    #[test]
    fn spanning_cidr() {
        let prefixes: std::vec::Vec<Prefix<Ipv4>> = ["192.0.2.0/27", "192.0.2.192/27"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(
            Prefix::spanning(prefixes).unwrap().to_string(),
            "192.0.2.0/24"
        );
    }

    #[test]
    fn spanning_empty_fails() {
        assert!(Prefix::<Ipv6>::spanning(core::iter::empty()).is_err());
    }

    #[test]
    fn whole_space_subnets() {
        let length = PrefixLength::from_primitive(1).unwrap();
        let halves: std::vec::Vec<_> = Prefix::<Ipv4>::DEFAULT
            .subnets(length)
            .unwrap()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(halves, ["0.0.0.0/1", "128.0.0.0/1"]);
    }
}
