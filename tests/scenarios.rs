//! End-to-end behavioral checks exercising the public API surface.

use addr::{
    any, cidr,
    concrete::{Address, Eui, Eui48, Glob, Interface, Ipv4, Ipv6, Prefix, Range},
    Flags, IpSet, Kind, Oui,
};

#[test]
fn strict_and_loose_ipv4_parsing() {
    let strict = Address::<Ipv4>::parse_with("192.168.0.1", Flags::INET_PTON).unwrap();
    assert_eq!(strict.octets(), [192, 168, 0, 1]);
    assert_eq!(u32::from_be_bytes(strict.octets()), 3_232_235_521);

    let loose = Address::<Ipv4>::parse_with("0xC0.0xA8.0.1", Flags::default()).unwrap();
    assert_eq!(loose, strict);

    let error = Address::<Ipv4>::parse_with("0xC0.0xA8.0.1", Flags::INET_PTON).unwrap_err();
    assert_eq!(error.kind(), Kind::Format);
}

#[test]
fn rfc5952_compact_formatting() {
    let addr: Address<Ipv6> = "2001:0db8:0000:0000:0000:ff00:0042:8329".parse().unwrap();
    assert_eq!(addr.to_string(), "2001:db8::ff00:42:8329");

    let addr: Address<Ipv6> = "0:0:0:0:0:0:0:1".parse().unwrap();
    assert_eq!(addr.to_string(), "::1");

    // the left-most of two equal-or-longer zero runs is collapsed
    let addr: Address<Ipv6> = "1:0:0:4:0:0:0:8".parse().unwrap();
    assert_eq!(addr.to_string(), "1:0:0:4::8");
}

#[test]
fn formatting_round_trips() {
    for repr in [
        "0.0.0.0",
        "203.0.113.255",
        "::",
        "::1",
        "2001:db8::ff00:42:8329",
        "fe80::1",
    ] {
        let addr: any::Address = repr.parse().unwrap();
        assert_eq!(addr.to_string(), repr);
        assert_eq!(addr.to_string().parse::<any::Address>().unwrap(), addr);
    }
}

#[test]
fn packed_round_trips() {
    let addr: Address<Ipv6> = "2001:db8::1".parse().unwrap();
    assert_eq!(addr.octets().len(), 16);
    assert_eq!(Address::<Ipv6>::from_octets(addr.octets()), addr);

    let addr: Address<Ipv4> = "198.51.100.200".parse().unwrap();
    assert_eq!(addr.octets().len(), 4);
    assert_eq!(Address::<Ipv4>::from_octets(addr.octets()), addr);
}

#[test]
fn range_cidr_decomposition() {
    let range: Range<Ipv4> = "192.0.2.1-192.0.2.9".parse().unwrap();
    let cidrs: Vec<_> = range.cidrs().map(|cidr| cidr.to_string()).collect();
    assert_eq!(
        cidrs,
        ["192.0.2.1/32", "192.0.2.2/31", "192.0.2.4/30", "192.0.2.8/31"]
    );
}

#[test]
fn set_difference_scenario() {
    let result = IpSet::from_iter(["10.0.0.0/8".parse::<any::Prefix>().unwrap()])
        - IpSet::from_iter(["10.1.0.0/16".parse::<any::Prefix>().unwrap()]);
    let cidrs: Vec<_> = result.iter_cidrs().map(|cidr| cidr.to_string()).collect();
    assert_eq!(
        cidrs,
        [
            "10.0.0.0/16",
            "10.2.0.0/15",
            "10.4.0.0/14",
            "10.8.0.0/13",
            "10.16.0.0/12",
            "10.32.0.0/11",
            "10.64.0.0/10",
            "10.128.0.0/9"
        ]
    );
}

#[test]
fn glob_scenarios() {
    let glob: Glob = "192.0.*.*".parse().unwrap();
    let cidrs: Vec<_> = glob.cidrs().map(|cidr| cidr.to_string()).collect();
    assert_eq!(cidrs, ["192.0.0.0/16"]);

    let glob: Glob = "10.0.0.1-5".parse().unwrap();
    assert_eq!(glob.range(), "10.0.0.1-10.0.0.5".parse().unwrap());
}

#[test]
fn eui_to_ipv6_derivation() {
    let eui: Eui<Eui48> = "00-1B-77-49-54-FD".parse().unwrap();
    let interface: Interface<Ipv6> = "fe80::/10".parse().unwrap();
    let derived = eui.ipv6(interface.trunc());
    assert_eq!(
        derived,
        "fe80::21b:77ff:fe49:54fd".parse::<Address<Ipv6>>().unwrap()
    );
}

#[test]
fn oui_registration_lookup() {
    let oui: Oui = "00-1B-77".parse().unwrap();
    assert_eq!(oui.registration(0).unwrap().org(), "Intel Corporate");
}

#[test]
fn network_interval_invariants() {
    for repr in ["10.0.0.1/24", "172.16.33.7/12", "192.0.2.1/32"] {
        let interface: Interface<Ipv4> = repr.parse().unwrap();
        assert!(interface.network() <= interface.addr());
        assert!(interface.addr() <= interface.broadcast());
        let size = interface.trunc().size().unwrap();
        let first = u128::from(u32::from_be_bytes(interface.network().octets()));
        let last = u128::from(u32::from_be_bytes(interface.broadcast().octets()));
        assert_eq!(last - first + 1, size);
    }
}

#[test]
fn matching_cidr_selection() {
    let cidrs: Vec<Prefix<Ipv4>> = ["10.0.0.0/8", "10.0.0.0/12", "192.0.2.0/24"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let addr = "10.0.0.1".parse().unwrap();
    assert_eq!(
        cidr::largest_matching(addr, &cidrs).unwrap().to_string(),
        "10.0.0.0/8"
    );
    assert_eq!(
        cidr::smallest_matching(addr, &cidrs).unwrap().to_string(),
        "10.0.0.0/12"
    );
    assert_eq!(cidr::all_matching(addr, &cidrs).len(), 2);
}

#[test]
fn cross_family_arithmetic_is_rejected() {
    let mapped: Address<Ipv6> = "2001:db8::1".parse().unwrap();
    assert_eq!(mapped.to_ipv4().unwrap_err().kind(), Kind::Conversion);

    let mixed = cidr::spanning_any([
        "10.0.0.0/8".parse::<any::Prefix>().unwrap(),
        "2001:db8::/32".parse().unwrap(),
    ]);
    assert_eq!(mixed.unwrap_err().kind(), Kind::Conversion);
}
