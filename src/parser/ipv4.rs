use crate::{
    error::{err, Error, Kind},
    options::Flags,
};

use super::Parser;

// `inet_aton` packing: groups before the last are octets, the last group
// fills the remaining bytes.
fn pack_legacy(groups: &[u32]) -> Option<u32> {
    let (&last, head) = groups.split_last()?;
    let mut value = 0u32;
    for (i, &octet) in head.iter().enumerate() {
        if octet > 0xff {
            return None;
        }
        value |= octet << (24 - 8 * i);
    }
    let last_width = 8 * (4 - head.len() as u32);
    if last_width < 32 && (last >> last_width) != 0 {
        return None;
    }
    Some(value | last)
}

// Abbreviated prefix packing: every group is an octet, missing trailing
// octets are zero.
fn pack_padded(groups: &[u32]) -> Option<u32> {
    let mut value = 0u32;
    for (i, &octet) in groups.iter().enumerate() {
        if octet > 0xff {
            return None;
        }
        value |= octet << (24 - 8 * i);
    }
    Some(value)
}

// A dotted quad in place of a prefix length: a contiguous netmask, or a
// hostmask (inverted netmask).
fn mask_to_length(mask: u32) -> Option<u8> {
    if mask.leading_ones() + mask.trailing_zeros() == 32 {
        Some(mask.leading_ones() as u8)
    } else if mask.leading_zeros() + mask.trailing_ones() == 32 {
        Some(mask.leading_zeros() as u8)
    } else {
        None
    }
}

#[inline(always)]
pub(crate) fn parse_addr(input: &str, flags: Flags) -> Result<u32, Error> {
    let zerofill = flags.contains(Flags::ZEROFILL);
    if flags.contains(Flags::INET_PTON) {
        Parser::new(input)
            .take_only(|p| p.take_ipv4_octets(zerofill))
            .map(u32::from_be_bytes)
    } else {
        Parser::new(input)
            .take_only(|p| p.take_legacy_groups(zerofill))
            .and_then(|(groups, count)| pack_legacy(&groups[..count]))
    }
    .ok_or_else(|| err!(Kind::Format, "invalid IPv4 address literal"))
}

#[inline(always)]
pub(crate) fn parse_prefix(input: &str, flags: Flags) -> Result<(u32, u8), Error> {
    let zerofill = flags.contains(Flags::ZEROFILL);
    let strict = flags.contains(Flags::INET_PTON);
    Parser::new(input)
        .take_only(|p| {
            let addr = if strict {
                u32::from_be_bytes(p.take_ipv4_octets(zerofill)?)
            } else {
                let (groups, count) = p.take_legacy_groups(zerofill)?;
                pack_padded(&groups[..count])?
            };
            _ = p.skip(b"/")?;
            if let Some(mask) = p.atomically(|p| {
                p.take_ipv4_octets(false).map(u32::from_be_bytes)
            }) {
                Some((addr, mask_to_length(mask)?))
            } else {
                Some((addr, p.take_number(10, 3, false)?))
            }
        })
        .ok_or_else(|| err!(Kind::Format, "invalid IPv4 prefix literal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotted_quad() {
        let addr = parse_addr("10.1.1.1", Flags::default()).unwrap();
        assert_eq!(addr, 0x0a01_0101);
    }

    #[test]
    fn parse_strict_dotted_quad() {
        let addr = parse_addr("192.168.0.1", Flags::INET_PTON).unwrap();
        assert_eq!(addr, 3_232_235_521);
    }

    #[test]
    fn legacy_hex_octets() {
        let addr = parse_addr("0xC0.0xA8.0.1", Flags::default()).unwrap();
        assert_eq!(addr, 3_232_235_521);
    }

    #[test]
    fn legacy_octal_octets() {
        let addr = parse_addr("0300.0250.0.01", Flags::default()).unwrap();
        assert_eq!(addr, 0xc0a8_0001);
    }

    #[test]
    fn legacy_partial_forms() {
        assert_eq!(parse_addr("127", Flags::default()).unwrap(), 127);
        assert_eq!(parse_addr("127.1", Flags::default()).unwrap(), 0x7f00_0001);
        assert_eq!(
            parse_addr("127.0.1", Flags::default()).unwrap(),
            0x7f00_0001
        );
    }

    #[test]
    fn legacy_single_group_bounds() {
        assert_eq!(
            parse_addr("4294967295", Flags::default()).unwrap(),
            u32::MAX
        );
        assert!(parse_addr("4294967296", Flags::default()).is_err());
    }

    #[test]
    fn legacy_middle_group_overflow() {
        assert!(parse_addr("10.256.0.1", Flags::default()).is_err());
    }

    #[test]
    fn strict_rejects_radix_prefixes() {
        assert!(parse_addr("0xC0.0xA8.0.1", Flags::INET_PTON).is_err());
    }

    #[test]
    fn strict_rejects_leading_zeros() {
        assert!(parse_addr("1.01.0.0", Flags::INET_PTON).is_err());
    }

    #[test]
    fn strict_rejects_partial_forms() {
        assert!(parse_addr("127.1", Flags::INET_PTON).is_err());
    }

    #[test]
    fn zerofill_strips_leading_zeros() {
        let addr = parse_addr("010.010.010.010", Flags::ZEROFILL).unwrap();
        assert_eq!(addr, 0x0a0a_0a0a);
    }

    #[test]
    fn zerofill_with_strict() {
        let flags = Flags::INET_PTON | Flags::ZEROFILL;
        let addr = parse_addr("192.168.000.001", flags).unwrap();
        assert_eq!(addr, 0xc0a8_0001);
    }

    #[test]
    fn empty_octets() {
        assert!(parse_addr("...", Flags::default()).is_err());
    }

    #[test]
    fn consume_all_input() {
        assert!(parse_addr("192.168.0.1\0", Flags::default()).is_err());
    }

    #[test]
    fn parse_simple_prefix() {
        let prefix = parse_prefix("192.0.2.0/24", Flags::default()).unwrap();
        assert_eq!(prefix, (0xc000_0200, 24));
    }

    #[test]
    fn parse_netmask_prefix() {
        let prefix = parse_prefix("192.0.2.0/255.255.255.0", Flags::default()).unwrap();
        assert_eq!(prefix, (0xc000_0200, 24));
    }

    #[test]
    fn parse_hostmask_prefix() {
        let prefix = parse_prefix("192.0.2.0/0.0.0.255", Flags::default()).unwrap();
        assert_eq!(prefix, (0xc000_0200, 24));
    }

    #[test]
    fn non_contiguous_mask() {
        assert!(parse_prefix("192.0.2.0/255.0.255.0", Flags::default()).is_err());
    }

    #[test]
    fn parse_abbreviated_prefixes() {
        assert_eq!(
            parse_prefix("10/8", Flags::default()).unwrap(),
            (0x0a00_0000, 8)
        );
        assert_eq!(
            parse_prefix("192.168/16", Flags::default()).unwrap(),
            (0xc0a8_0000, 16)
        );
    }

    #[test]
    fn host_bits_are_preserved() {
        let prefix = parse_prefix("10.0.0.1/24", Flags::default()).unwrap();
        assert_eq!(prefix, (0x0a00_0001, 24));
    }

    #[test]
    fn length_out_of_bounds_is_delegated() {
        // lengths are range-checked by `PrefixLength`, not the parser
        assert_eq!(
            parse_prefix("10.0.0.0/255", Flags::default()).unwrap(),
            (0x0a00_0000, 255)
        );
    }

    #[cfg(feature = "std")]
    mod proptests {
        use std::net::Ipv4Addr;
        use std::string::ToString;

        use proptest::{arbitrary::any, proptest};

        use super::*;

        proptest! {
            #[test]
            fn parse_any_ipv4_addr(addr in any::<Ipv4Addr>()) {
                let addr_num: u32 = addr.into();
                let addr_parsed = parse_addr(&addr.to_string(), Flags::INET_PTON).unwrap();
                assert_eq!(addr_num, addr_parsed);
            }
        }

        proptest! {
            #[test]
            fn strict_matches_stdlib(s in r"\PC*") {
                let stdlib: Option<Ipv4Addr> = s.parse().ok();
                assert_eq!(
                    parse_addr(&s, Flags::INET_PTON).ok(),
                    stdlib.map(u32::from)
                );
            }
        }
    }
}
