#![cfg(feature = "std")]

use super::Address;
use crate::concrete::{Ipv4, Ipv6};

impl From<std::net::Ipv4Addr> for Address<Ipv4> {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Self::new(addr.into())
    }
}

impl From<std::net::Ipv6Addr> for Address<Ipv6> {
    fn from(addr: std::net::Ipv6Addr) -> Self {
        Self::new(addr.into())
    }
}

impl From<Address<Ipv4>> for std::net::Ipv4Addr {
    fn from(addr: Address<Ipv4>) -> Self {
        addr.into_primitive().into()
    }
}

impl From<Address<Ipv6>> for std::net::Ipv6Addr {
    fn from(addr: Address<Ipv6>) -> Self {
        addr.into_primitive().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdlib_round_trip() {
        let stdlib: std::net::Ipv4Addr = "198.51.100.7".parse().unwrap();
        let addr = Address::<Ipv4>::from(stdlib);
        assert_eq!(std::net::Ipv4Addr::from(addr), stdlib);
    }
}
