use core::fmt;

use crate::{
    concrete::{Address, Ipv4, Ipv6},
    traits::{
        primitive::{self, IntoIpv6Segments},
        Afi,
    },
};

#[derive(Copy, Clone, Default)]
struct Span {
    start: usize,
    length: usize,
}

fn fmt_segments(segments: &[u16], sep: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some((first, tail)) = segments.split_first() {
        write!(f, "{:x}", first)?;
        tail.iter()
            .try_for_each(|segment| write!(f, "{}{:x}", sep, segment))?;
    }
    Ok(())
}

/// IP address style formatting.
pub trait AddressDisplay<A: Afi> {
    /// Format `self` using the canonical representation for IP addresses
    /// of address-family `A`.
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<P: primitive::Address<Ipv4>> AddressDisplay<Ipv4> for P {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_be_bytes().fmt_addr(f)
    }
}

#[allow(clippy::many_single_char_names)]
impl AddressDisplay<Ipv4> for <Ipv4 as Afi>::Octets {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

// RFC 5952: lowercase, leading zeros suppressed, the longest (left-most on
// ties) run of two or more zero hextets collapsed to `::`. Values inside
// the IPv4-mapped and IPv4-compatible windows keep a dotted-quad tail.
#[allow(clippy::many_single_char_names)]
impl<P: primitive::Address<Ipv6> + IntoIpv6Segments> AddressDisplay<Ipv6> for P {
    fn fmt_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.into_segments() {
            [0, 0, 0, 0, 0, 0, 0, 0] => f.write_str("::"),
            [0, 0, 0, 0, 0, 0, 0, 1] => f.write_str("::1"),
            [0, 0, 0, 0, 0, mapped @ (0 | 0xffff), high, low] => {
                f.write_str("::")?;
                if mapped == 0xffff {
                    f.write_str("ffff:")?;
                }
                let [a, b] = high.to_be_bytes();
                let [c, d] = low.to_be_bytes();
                ([a, b, c, d]).fmt_addr(f)
            }
            segments => {
                let (head, tail) = {
                    let mut longest = Span::default();
                    let mut current = Span::default();
                    segments.iter().enumerate().for_each(|(i, segment)| {
                        if segment == &0 {
                            if current.length == 0 {
                                current.start = i;
                            }
                            current.length += 1;
                            if current.length > longest.length {
                                longest = current;
                            }
                        } else {
                            current = Span::default();
                        }
                    });
                    if longest.length > 1 {
                        (
                            &segments[0..longest.start],
                            Some(&segments[longest.start + longest.length..]),
                        )
                    } else {
                        (&segments[..], None)
                    }
                };
                fmt_segments(head, ':', f)?;
                if let Some(tail) = tail {
                    f.write_str("::")?;
                    fmt_segments(tail, ':', f)?;
                }
                Ok(())
            }
        }
    }
}

/// Display adapter for the uncompressed lowercase IPv6 dialect.
///
/// Every hextet is written with its leading zeros and no `::` collapse is
/// performed. For IPv4 addresses the canonical form is already maximal,
/// so this is a no-op wrapper.
pub struct Full<T>(pub(crate) T);

/// Display adapter for the uncompressed uppercase IPv6 dialect.
pub struct Verbose<T>(pub(crate) T);

impl fmt::Display for Full<Address<Ipv6>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, tail @ ..] = self.0.into_primitive().into_segments();
        write!(f, "{:04x}", first)?;
        tail.iter()
            .try_for_each(|segment| write!(f, ":{:04x}", segment))
    }
}

impl fmt::Display for Verbose<Address<Ipv6>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, tail @ ..] = self.0.into_primitive().into_segments();
        write!(f, "{:04X}", first)?;
        tail.iter()
            .try_for_each(|segment| write!(f, ":{:04X}", segment))
    }
}

impl fmt::Display for Full<Address<Ipv4>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Verbose<Address<Ipv4>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
