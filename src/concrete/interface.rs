use core::fmt;
use core::str::FromStr;

use crate::{
    error::Error,
    options::Flags,
    traits::{primitive::Address as _, Afi},
};

use super::{Address, Addresses, Hostmask, Netmask, Prefix, PrefixLength, Range};

#[allow(clippy::wildcard_imports)]
mod private {
    use super::*;

    /// An IP interface: an address together with a prefix length.
    ///
    /// Unlike [`Prefix<A>`], the host bits of the address are retained,
    /// so `10.0.0.1/24` keeps `10.0.0.1` as its address while its
    /// network is `10.0.0.0`.
    #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Interface<A: Afi> {
        address: Address<A>,
        length: PrefixLength<A>,
    }

    impl<A: Afi> Interface<A> {
        /// Construct a new [`Interface<A>`] from an address and prefix
        /// length.
        pub const fn new(address: Address<A>, length: PrefixLength<A>) -> Self {
            Self { address, length }
        }

        /// Get the address of this interface.
        pub const fn addr(&self) -> Address<A> {
            self.address
        }

        /// Get the prefix length of this interface.
        pub const fn length(&self) -> PrefixLength<A> {
            self.length
        }
    }
}

pub use self::private::Interface;

impl<A: Afi> Interface<A> {
    /// Parse an interface literal under the grammar selected by `flags`.
    ///
    /// A bare address is given the family's full prefix length (`/32` or
    /// `/128`); classful inference is never performed. [`Flags::NOHOST`]
    /// zeros the host bits of the parsed address.
    pub fn parse_with(s: &str, flags: Flags) -> Result<Self, Error> {
        let (addr, length) = match A::Primitive::parse_prefix(s, flags) {
            Ok((addr, len)) => (addr, PrefixLength::from_primitive(len)?),
            Err(_) => (A::Primitive::parse_addr(s, flags)?, PrefixLength::MAX),
        };
        let mut address = Address::new(addr);
        if flags.contains(Flags::NOHOST) {
            address &= Netmask::from(length);
        }
        Ok(Self::new(address, length))
    }

    /// Get the covering prefix, discarding the host bits.
    pub fn trunc(&self) -> Prefix<A> {
        Prefix::new(self.addr(), self.length())
    }

    /// Get the network address of this interface.
    pub fn network(&self) -> Address<A> {
        self.trunc().network()
    }

    /// Get the last address of the covering prefix.
    pub fn broadcast(&self) -> Address<A> {
        self.trunc().broadcast()
    }

    /// Get the netmask of this interface.
    pub fn netmask(&self) -> Netmask<A> {
        self.length().into()
    }

    /// Get the hostmask of this interface.
    pub fn hostmask(&self) -> Hostmask<A> {
        self.length().into()
    }

    /// Get the closed interval `[network, broadcast]` covered by this
    /// interface.
    pub fn range(&self) -> Range<A> {
        self.trunc().into()
    }

    /// Iterate every address covered by this interface.
    pub fn addresses(&self) -> Addresses<A> {
        self.range().iter()
    }

    /// Iterate every address covered by this interface, omitting the
    /// broadcast address when [`Flags::NOBROADCAST`] is set and the
    /// family has one.
    pub fn addresses_with(&self, flags: Flags) -> Addresses<A> {
        let range = self.range();
        if flags.contains(Flags::NOBROADCAST)
            && A::Primitive::BROADCAST.is_some()
            && self.network() < self.broadcast()
        {
            // infallible: network < broadcast
            Range::new(range.first(), self.broadcast().checked_sub(1).unwrap())
                .unwrap()
                .iter()
        } else {
            range.iter()
        }
    }

    /// Iterate the usable host addresses of this interface.
    ///
    /// For families with a broadcast address (IPv4) the network and
    /// broadcast addresses are omitted for prefixes of length 30 and
    /// shorter. For IPv6 the subnet-router anycast address (the network
    /// address) is omitted. Prefixes covering one or two addresses yield
    /// every address.
    pub fn hosts(&self) -> Hosts<A> {
        let network = self.network();
        let broadcast = self.broadcast();
        let length = self.length().into_primitive();
        let (first, last) = if A::Primitive::BROADCAST.is_some() {
            if length >= A::Primitive::MAX_LENGTH - 1 {
                (network, broadcast)
            } else {
                // infallible: the block covers at least four addresses
                (
                    network.checked_add(1).unwrap(),
                    broadcast.checked_sub(1).unwrap(),
                )
            }
        } else if length == A::Primitive::MAX_LENGTH {
            (network, broadcast)
        } else {
            (network.checked_add(1).unwrap(), broadcast)
        };
        // infallible: first <= last by construction
        Hosts(Range::new(first, last).unwrap().iter())
    }
}

/// Iterator over the usable host addresses of an [`Interface<A>`].
///
/// Returned by [`Interface::hosts`].
#[derive(Clone, Copy, Debug)]
pub struct Hosts<A: Afi>(Addresses<A>);

impl<A: Afi> Iterator for Hosts<A> {
    type Item = Address<A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<A: Afi> IntoIterator for Interface<A> {
    type Item = Address<A>;
    type IntoIter = Addresses<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses()
    }
}

impl<A: Afi> From<Address<A>> for Interface<A> {
    fn from(addr: Address<A>) -> Self {
        Self::new(addr, PrefixLength::MAX)
    }
}

impl<A: Afi> From<Prefix<A>> for Interface<A> {
    fn from(prefix: Prefix<A>) -> Self {
        Self::new(prefix.network(), prefix.length())
    }
}

impl<A: Afi> FromStr for Interface<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Flags::default())
    }
}

impl<A: Afi> fmt::Display for Interface<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.length())
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any_with, Arbitrary, ParamsFor, StrategyFor},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl<A: Afi> Arbitrary for Interface<A>
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
            .prop_map(|(address, length)| Self::new(address, length))
            .boxed()
    }
}
