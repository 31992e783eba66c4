use crate::{
    concrete::eui::Dialect,
    error::{err, Error, Kind},
};

use super::Parser;

fn pack(octets: &[u8]) -> u64 {
    octets
        .iter()
        .fold(0u64, |value, &octet| (value << 8) | u64::from(octet))
}

// Grammars are tried strictest first; the matching grammar also selects
// the value's display dialect.
#[inline(always)]
pub(crate) fn parse<const N: usize>(input: &str) -> Result<(u64, Dialect), Error> {
    if let Some(octets) = Parser::new(input).take_only(|p| p.take_eui_octets::<N>(b"-", true)) {
        return Ok((pack(&octets), Dialect::Dash));
    }
    if N == 6 {
        if let Some(octets) = Parser::new(input).take_only(Parser::take_eui_pgsql) {
            return Ok((pack(&octets), Dialect::Pgsql));
        }
    }
    if let Some(octets) = Parser::new(input).take_only(Parser::take_eui_cisco::<N>) {
        return Ok((pack(&octets), Dialect::Cisco));
    }
    if let Some(octets) = Parser::new(input).take_only(|p| p.take_eui_octets::<N>(b":", true)) {
        return Ok((pack(&octets), Dialect::UnixExpanded));
    }
    if let Some(octets) = Parser::new(input).take_only(|p| p.take_eui_octets::<N>(b":", false)) {
        return Ok((pack(&octets), Dialect::Unix));
    }
    if let Some(octets) = Parser::new(input).take_only(Parser::take_eui_bare::<N>) {
        return Ok((pack(&octets), Dialect::Bare));
    }
    Err(err!(Kind::Format, "invalid EUI literal"))
}

// `AA-BB-CC` or bare `AABBCC`
#[inline(always)]
pub(crate) fn parse_oui(input: &str) -> Result<u32, Error> {
    Parser::new(input)
        .take_only(|p| p.take_eui_octets::<3>(b"-", true))
        .or_else(|| Parser::new(input).take_only(Parser::take_eui_bare::<3>))
        .map(|octets| {
            octets
                .iter()
                .fold(0u32, |value, &octet| (value << 8) | u32::from(octet))
        })
        .ok_or_else(|| err!(Kind::Format, "invalid OUI literal"))
}
