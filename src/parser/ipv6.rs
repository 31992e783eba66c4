use crate::{
    error::{err, Error, Kind},
    options::Flags,
    traits::primitive::IntoIpv6Segments as _,
};

use super::Parser;

#[inline(always)]
pub(crate) fn parse_addr(input: &str, _flags: Flags) -> Result<(u128, Option<&str>), Error> {
    let (addr_part, zone) = match input.split_once('%') {
        Some((addr_part, zone)) => {
            if zone.is_empty() || zone.contains('/') {
                return Err(err!(Kind::Format, "invalid IPv6 zone identifier"));
            }
            (addr_part, Some(zone))
        }
        None => (input, None),
    };
    Parser::new(addr_part)
        .take_only(Parser::take_ipv6_segments)
        .map(|segments| (u128::from_segments(segments), zone))
        .ok_or_else(|| err!(Kind::Format, "invalid IPv6 address literal"))
}

#[inline(always)]
pub(crate) fn parse_prefix(input: &str, _flags: Flags) -> Result<(u128, u8), Error> {
    Parser::new(input)
        .take_with_length(Parser::take_ipv6_segments)
        .map(|(segments, len)| (u128::from_segments(segments), len))
        .ok_or_else(|| err!(Kind::Format, "invalid IPv6 prefix literal"))
}
