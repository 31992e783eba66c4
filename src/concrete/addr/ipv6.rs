use super::Address;
use crate::{
    any,
    concrete::{Ipv4, Ipv6},
    error::{err, Error, Kind},
    fmt::{Full, Verbose},
    options::Flags,
    parser,
    traits::primitive::IntoIpv6Segments as _,
};

const MAPPED_PREFIX: u128 = 0xffff_0000_0000;

impl Address<Ipv6> {
    /// Get the word view of `self`: eight 16-bit hextets, most
    /// significant first.
    pub fn segments(&self) -> [u16; 8] {
        self.into_primitive().into_segments()
    }

    /// Parse an IPv6 address literal, returning any `%zone` suffix
    /// alongside the address.
    ///
    /// The zone identifier never affects the integer value of the
    /// address.
    pub fn parse_zoned(s: &str) -> Result<(Self, Option<&str>), Error> {
        parser::ipv6::parse_addr(s, Flags::default())
            .map(|(addr, zone)| (Self::new(addr), zone))
    }

    /// Check whether `self` is an IPv4-mapped address (`::ffff:a.b.c.d`).
    pub fn is_ipv4_mapped(&self) -> bool {
        self.into_primitive() >> 32 == MAPPED_PREFIX >> 32
    }

    /// Check whether `self` is an IPv4-compatible address (`::a.b.c.d`,
    /// excluding `::` and `::1`).
    pub fn is_ipv4_compat(&self) -> bool {
        self.into_primitive() >> 32 == 0 && self.into_primitive() > 1
    }

    /// Extract the IPv4 address from an IPv4-mapped or IPv4-compatible
    /// value.
    ///
    /// # Errors
    ///
    /// Fails with a [`Kind::Conversion`][crate::Kind] error when `self`
    /// lies in neither window.
    pub fn to_ipv4(self) -> Result<Address<Ipv4>, Error> {
        if self.is_ipv4_mapped() || self.is_ipv4_compat() {
            // the value fits in the low 32 bits
            Ok(Address::new(self.into_primitive() as u32))
        } else {
            Err(err!(Kind::Conversion, "not an IPv4-mapped or IPv4-compatible address"))
        }
    }

    /// Convert to the canonical representation across families: the
    /// embedded IPv4 address for IPv4-mapped values, `self` otherwise.
    pub fn to_canonical(self) -> any::Address {
        if self.is_ipv4_mapped() {
            any::Address::Ipv4(Address::new(self.into_primitive() as u32))
        } else {
            any::Address::Ipv6(self)
        }
    }

    /// Display `self` in the uncompressed lowercase dialect.
    pub fn full(self) -> Full<Self> {
        Full(self)
    }

    /// Display `self` in the uncompressed uppercase dialect.
    pub fn verbose(self) -> Verbose<Self> {
        Verbose(self)
    }

    /// The DNS reverse-lookup name of `self` in the `ip6.arpa` zone.
    #[cfg(feature = "std")]
    pub fn reverse_dns(&self) -> std::string::String {
        use core::fmt::Write as _;

        let mut name = std::string::String::with_capacity(72);
        self.octets().iter().rev().for_each(|octet| {
            // infallible: writing to a `String`
            _ = write!(name, "{:x}.{:x}.", octet & 0xf, octet >> 4);
        });
        name.push_str("ip6.arpa");
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    #[test]
    fn mapped_is_mapped() {
        let addr = "::ffff:192.0.2.1".parse::<Address<Ipv6>>().unwrap();
        assert!(addr.is_ipv4_mapped());
        assert!(!addr.is_ipv4_compat());
    }

    #[test]
    fn compat_is_compat() {
        let addr = "::192.0.2.1".parse::<Address<Ipv6>>().unwrap();
        assert!(addr.is_ipv4_compat());
        assert!(!addr.is_ipv4_mapped());
    }

    #[test]
    fn loopback_is_not_compat() {
        assert!(!"::1".parse::<Address<Ipv6>>().unwrap().is_ipv4_compat());
    }

    #[test]
    fn to_ipv4_round_trip() {
        let mapped = "::ffff:192.0.2.1".parse::<Address<Ipv6>>().unwrap();
        assert_eq!(mapped.to_ipv4().unwrap().to_string(), "192.0.2.1");
    }

    #[test]
    fn to_ipv4_rejects_global_unicast() {
        let addr = "2001:db8::1".parse::<Address<Ipv6>>().unwrap();
        assert_eq!(addr.to_ipv4().unwrap_err().kind(), Kind::Conversion);
    }

    #[test]
    fn canonical_extracts_mapped() {
        let mapped = "::ffff:192.0.2.1".parse::<Address<Ipv6>>().unwrap();
        assert_eq!(mapped.to_canonical().to_string(), "192.0.2.1");
    }

    #[test]
    fn full_and_verbose_dialects() {
        let addr = "2001:db8::ff00:42:8329".parse::<Address<Ipv6>>().unwrap();
        assert_eq!(
            addr.full().to_string(),
            "2001:0db8:0000:0000:0000:ff00:0042:8329"
        );
        assert_eq!(
            addr.verbose().to_string(),
            "2001:0DB8:0000:0000:0000:FF00:0042:8329"
        );
    }

    #[test]
    fn zoned_parse() {
        let (addr, zone) = Address::<Ipv6>::parse_zoned("fe80::1%eth0").unwrap();
        assert_eq!(addr.to_string(), "fe80::1");
        assert_eq!(zone, Some("eth0"));
    }

    #[test]
    fn reverse_dns_name() {
        let addr = "2001:db8::1".parse::<Address<Ipv6>>().unwrap();
        assert_eq!(
            addr.reverse_dns(),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }
}
