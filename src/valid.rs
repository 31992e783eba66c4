//! Boolean validators layered over the fallible parsers.
//!
//! Each validator reports whether a literal is well-formed under the
//! relevant grammar; none of them can fail.

use crate::{options::Flags, parser};

/// Check whether `s` is a valid IPv4 address literal under the grammar
/// selected by `flags`.
pub fn valid_ipv4(s: &str, flags: Flags) -> bool {
    parser::ipv4::parse_addr(s, flags).is_ok()
}

/// Check whether `s` is a valid IPv6 address literal.
pub fn valid_ipv6(s: &str) -> bool {
    parser::ipv6::parse_addr(s, Flags::default()).is_ok()
}

/// Check whether `s` is a valid EUI-48 literal in any supported dialect.
pub fn valid_eui48(s: &str) -> bool {
    parser::eui::parse::<6>(s).is_ok()
}

/// Check whether `s` is a valid EUI-64 literal in any supported dialect.
pub fn valid_eui64(s: &str) -> bool {
    parser::eui::parse::<8>(s).is_ok()
}

/// Check whether `s` is a valid IPv4 glob literal.
pub fn valid_glob(s: &str) -> bool {
    parser::glob::parse(s).is_ok()
}
