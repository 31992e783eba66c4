use super::Address;
use crate::concrete::{Ipv4, Ipv6};

impl Address<Ipv4> {
    /// Get the word view of `self`: four 8-bit words, most significant
    /// first.
    pub fn words(&self) -> [u8; 4] {
        self.octets()
    }

    /// Derive the IPv4-mapped IPv6 address `::ffff:a.b.c.d`.
    pub fn to_ipv6_mapped(self) -> Address<Ipv6> {
        Address::new(0xffff_0000_0000 | u128::from(self.into_primitive()))
    }

    /// Derive the (deprecated) IPv4-compatible IPv6 address `::a.b.c.d`.
    pub fn to_ipv6_compat(self) -> Address<Ipv6> {
        Address::new(u128::from(self.into_primitive()))
    }

    /// The DNS reverse-lookup name of `self` in the `in-addr.arpa` zone.
    #[cfg(feature = "std")]
    pub fn reverse_dns(&self) -> std::string::String {
        let [a, b, c, d] = self.octets();
        std::format!("{}.{}.{}.{}.in-addr.arpa", d, c, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    #[test]
    fn mapped_derivation() {
        let addr = "192.0.2.1".parse::<Address<Ipv4>>().unwrap();
        assert_eq!(addr.to_ipv6_mapped().to_string(), "::ffff:192.0.2.1");
    }

    #[test]
    fn compat_derivation() {
        let addr = "192.0.2.1".parse::<Address<Ipv4>>().unwrap();
        assert_eq!(addr.to_ipv6_compat().to_string(), "::192.0.2.1");
    }

    #[test]
    fn reverse_dns_name() {
        let addr = "192.0.2.1".parse::<Address<Ipv4>>().unwrap();
        assert_eq!(addr.reverse_dns(), "1.2.0.192.in-addr.arpa");
    }
}
