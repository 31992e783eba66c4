use core::borrow::Borrow as _;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::{
    error::{err, Error, Kind},
    traits::{primitive::Eui as _, Efi},
};

use super::{Address, Eui48, Eui64, Ipv6, Prefix};

mod dialect;
pub use self::dialect::Dialect;

const UL_BIT: u64 = 0x02;
const IG_BIT: u64 = 0x01;

/// An EUI (hardware address) of family `A`, carrying the display dialect
/// it was written in.
///
/// The dialect affects formatting only: equality, ordering and hashing
/// consider the integer value alone.
#[derive(Clone, Copy)]
pub struct Eui<A: Efi> {
    value: A::Primitive,
    dialect: Dialect,
}

impl<A: Efi> Eui<A> {
    /// Construct a new [`Eui<A>`] from an integer primitive appropriate
    /// to `A`.
    pub fn new(value: A::Primitive) -> Self {
        Self {
            value,
            dialect: Dialect::default(),
        }
    }

    /// Construct a new [`Eui<A>`] from big-endian octets.
    pub fn from_octets(octets: A::Octets) -> Self {
        Self::new(A::Primitive::from_be_bytes(octets))
    }

    /// Get the primitive integer value, consuming `self`.
    pub const fn into_primitive(self) -> A::Primitive {
        self.value
    }

    /// Get the display dialect of `self`.
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Return `self` with a different display dialect.
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Get the big-endian octet representation of `self`.
    pub fn octets(&self) -> A::Octets {
        self.into_primitive().to_be_bytes()
    }

    /// Get the word view of `self`: one 8-bit word per octet, most
    /// significant first.
    pub fn words(&self) -> A::Octets {
        self.octets()
    }

    /// Get the 24-bit organizationally unique identifier bits of `self`.
    pub fn oui_bits(&self) -> u32 {
        let bits = self.into_primitive().widen() >> usize::from(A::Primitive::MAX_LENGTH - 24);
        bits as u32
    }

    /// Display adapter for the extension identifier (the bits following
    /// the OUI), in the dialect of `self`.
    pub fn ei(&self) -> Ei<A> {
        Ei(*self)
    }

    /// Check whether the U/L bit marks `self` universally administered.
    pub fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Check whether the U/L bit marks `self` locally administered.
    pub fn is_local(&self) -> bool {
        self.into_primitive().widen() >> usize::from(A::Primitive::MAX_LENGTH - 8)
            & u128::from(UL_BIT)
            != 0
    }

    /// Check whether the I/G bit marks `self` as a group (multicast)
    /// identifier.
    pub fn is_multicast(&self) -> bool {
        self.into_primitive().widen() >> usize::from(A::Primitive::MAX_LENGTH - 8)
            & u128::from(IG_BIT)
            != 0
    }

    /// Check whether the I/G bit marks `self` as an individual (unicast)
    /// identifier.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Add an integer offset, failing if the result leaves the family's
    /// value range.
    pub fn checked_add(self, rhs: u128) -> Result<Self, Error> {
        self.into_primitive()
            .widen()
            .checked_add(rhs)
            .and_then(A::Primitive::narrow)
            .map(|value| Self::new(value).with_dialect(self.dialect))
            .ok_or_else(|| err!(Kind::Format, "identifier offset out of range"))
    }

    /// Subtract an integer offset, failing if the result leaves the
    /// family's value range.
    pub fn checked_sub(self, rhs: u128) -> Result<Self, Error> {
        self.into_primitive()
            .widen()
            .checked_sub(rhs)
            .and_then(A::Primitive::narrow)
            .map(|value| Self::new(value).with_dialect(self.dialect))
            .ok_or_else(|| err!(Kind::Format, "identifier offset out of range"))
    }
}

impl Eui<Eui48> {
    /// Promote to an EUI-64 by inserting `FF-FE` between the OUI and the
    /// extension identifier.
    pub fn eui64(&self) -> Eui<Eui64> {
        let value = self.into_primitive();
        Eui::new(((value & 0xffff_ff00_0000) << 16) | 0x0000_00ff_fe00_0000 | (value & 0x00ff_ffff))
    }

    /// The modified EUI-64 interface identifier: the EUI-64 promotion
    /// with the U/L bit inverted (RFC 4291 appendix A).
    pub fn modified_eui64(&self) -> Eui<Eui64> {
        let eui64 = self.eui64();
        Eui::new(eui64.into_primitive() ^ (UL_BIT << 56))
    }

    /// Derive an IPv6 address by combining a prefix with the modified
    /// EUI-64 interface identifier of `self`.
    pub fn ipv6(&self, prefix: Prefix<Ipv6>) -> Address<Ipv6> {
        let iid = Address::new(u128::from(self.modified_eui64().into_primitive()));
        prefix.network() | (iid & super::Hostmask::from(prefix.length()))
    }

    /// Derive the IPv6 link-local address of `self` (`fe80::/64`).
    pub fn ipv6_link_local(&self) -> Address<Ipv6> {
        // ok to unwrap: the literal is a well-formed prefix
        self.ipv6("fe80::/64".parse().unwrap())
    }
}

impl Eui<Eui64> {
    /// The modified EUI-64 interface identifier: `self` with the U/L bit
    /// inverted.
    pub fn modified(&self) -> Self {
        Self::new(self.into_primitive() ^ (UL_BIT << 56))
    }

    /// Derive an IPv6 address by combining a prefix with the modified
    /// interface identifier of `self`.
    pub fn ipv6(&self, prefix: Prefix<Ipv6>) -> Address<Ipv6> {
        let iid = Address::new(u128::from(self.modified().into_primitive()));
        prefix.network() | (iid & super::Hostmask::from(prefix.length()))
    }

    /// Derive the IPv6 link-local address of `self` (`fe80::/64`).
    pub fn ipv6_link_local(&self) -> Address<Ipv6> {
        self.ipv6("fe80::/64".parse().unwrap())
    }
}

impl<A: Efi> PartialEq for Eui<A> {
    fn eq(&self, other: &Self) -> bool {
        self.into_primitive() == other.into_primitive()
    }
}

impl<A: Efi> Eq for Eui<A> {}

impl<A: Efi> PartialOrd for Eui<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Efi> Ord for Eui<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_primitive().cmp(&other.into_primitive())
    }
}

impl<A: Efi> Hash for Eui<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.into_primitive().hash(state);
    }
}

impl<A: Efi> FromStr for Eui<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        A::Primitive::parse(s).map(|(value, dialect)| Self::new(value).with_dialect(dialect))
    }
}

impl<A: Efi> fmt::Display for Eui<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dialect.fmt_octets(self.octets().borrow(), f)
    }
}

impl<A: Efi> fmt::Debug for Eui<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eui<{:?}>({})", A::as_efi(), self)
    }
}

/// Display adapter for the extension identifier of an [`Eui<A>`].
pub struct Ei<A: Efi>(Eui<A>);

impl<A: Efi> fmt::Display for Ei<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .dialect()
            .fmt_octets(&self.0.octets().borrow()[3..], f)
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any, Arbitrary},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl<A: Efi> Arbitrary for Eui<A>
where
    A: 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<u128>()
            .prop_map(|value| Self::new(A::Primitive::narrow(value & A::Primitive::ONES.widen()).unwrap()))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    #[test]
    fn default_dialect_is_ieee_dash() {
        let eui = Eui::<Eui48>::new(0x001b_7749_54fd);
        assert_eq!(eui.to_string(), "00-1B-77-49-54-FD");
    }

    #[test]
    fn parsed_dialect_is_kept() {
        let eui: Eui<Eui48> = "0:1b:77:49:54:fd".parse().unwrap();
        assert_eq!(eui.to_string(), "0:1b:77:49:54:fd");
    }

    #[test]
    fn dialect_override() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert_eq!(
            eui.with_dialect(Dialect::UnixExpanded).to_string(),
            "00:1b:77:49:54:fd"
        );
        assert_eq!(eui.with_dialect(Dialect::Cisco).to_string(), "001b.7749.54fd");
        assert_eq!(eui.with_dialect(Dialect::Bare).to_string(), "001B774954FD");
        assert_eq!(
            eui.with_dialect(Dialect::Pgsql).to_string(),
            "001b77:4954fd"
        );
    }

    #[test]
    fn dialect_does_not_affect_equality() {
        let lhs: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        let rhs: Eui<Eui48> = "001b.7749.54fd".parse().unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn oui_and_ei_split() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert_eq!(eui.oui_bits(), 0x001b_77);
        assert_eq!(eui.ei().to_string(), "49-54-FD");
    }

    #[test]
    fn universal_local_bit() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert!(eui.is_universal());
        assert!(eui.with_dialect(Dialect::Dash).is_unicast());
        let local: Eui<Eui48> = "02-00-00-00-00-01".parse().unwrap();
        assert!(local.is_local());
    }

    #[test]
    fn group_bit() {
        let group: Eui<Eui48> = "01-00-5E-00-00-01".parse().unwrap();
        assert!(group.is_multicast());
        assert!(!group.is_unicast());
    }

    #[test]
    fn eui64_promotion() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert_eq!(eui.eui64().to_string(), "00-1B-77-FF-FE-49-54-FD");
    }

    #[test]
    fn modified_eui64_flips_ul_bit() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert_eq!(
            eui.modified_eui64().into_primitive(),
            0x021b_77ff_fe49_54fd
        );
    }

    #[test]
    fn ipv6_derivation() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        let prefix: Prefix<Ipv6> = "fe80::/10".parse().unwrap();
        assert_eq!(eui.ipv6(prefix).to_string(), "fe80::21b:77ff:fe49:54fd");
    }

    #[test]
    fn ipv6_link_local() {
        let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
        assert_eq!(
            eui.ipv6_link_local().to_string(),
            "fe80::21b:77ff:fe49:54fd"
        );
    }

    #[test]
    fn eui64_ipv6_derivation() {
        let eui: Eui<Eui64> = "02-1B-77-FF-FE-49-54-FD".parse().unwrap();
        // the U/L bit is flipped back during derivation
        assert_eq!(
            eui.ipv6_link_local().to_string(),
            "fe80::1b:77ff:fe49:54fd"
        );
    }

    #[test]
    fn offset_arithmetic() {
        let eui: Eui<Eui48> = "00-00-00-00-00-FF".parse().unwrap();
        assert_eq!(
            eui.checked_add(1).unwrap().to_string(),
            "00-00-00-00-01-00"
        );
        assert!(Eui::<Eui48>::new(0xffff_ffff_ffff).checked_add(1).is_err());
    }
}
