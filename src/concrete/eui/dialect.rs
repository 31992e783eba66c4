use core::fmt;

/// Textual dialects for EUI formatting.
///
/// The parser records the dialect a value was written in; formatting
/// defaults to that dialect and can be overridden per value.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Dialect {
    /// IEEE dash-separated, uppercase: `AA-BB-CC-DD-EE-FF`.
    #[default]
    Dash,
    /// UNIX colon-separated, lowercase, leading zeros compressed:
    /// `a:bb:cc:dd:ee:ff`.
    Unix,
    /// UNIX colon-separated, lowercase, zero-padded:
    /// `aa:bb:cc:dd:ee:ff`.
    UnixExpanded,
    /// Cisco dot-separated 16-bit groups, lowercase: `aabb.ccdd.eeff`.
    Cisco,
    /// Bare uppercase hex digits: `AABBCCDDEEFF`.
    Bare,
    /// PostgreSQL halved form, lowercase: `aabbcc:ddeeff`.
    Pgsql,
}

impl Dialect {
    pub(crate) fn fmt_octets(self, octets: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dash => Self::fmt_separated(octets, "-", true, f),
            Self::Unix => {
                let mut sep = "";
                octets.iter().try_for_each(|octet| {
                    let result = write!(f, "{}{:x}", sep, octet);
                    sep = ":";
                    result
                })
            }
            Self::UnixExpanded => Self::fmt_separated(octets, ":", false, f),
            Self::Cisco => {
                let mut sep = "";
                octets.chunks(2).try_for_each(|group| {
                    let result = match group {
                        [hi, lo] => write!(f, "{}{:02x}{:02x}", sep, hi, lo),
                        [only] => write!(f, "{}{:02x}", sep, only),
                        _ => Ok(()),
                    };
                    sep = ".";
                    result
                })
            }
            Self::Bare => octets
                .iter()
                .try_for_each(|octet| write!(f, "{:02X}", octet)),
            Self::Pgsql => {
                let (hi, lo) = octets.split_at(octets.len() / 2);
                hi.iter()
                    .try_for_each(|octet| write!(f, "{:02x}", octet))?;
                f.write_str(":")?;
                lo.iter().try_for_each(|octet| write!(f, "{:02x}", octet))
            }
        }
    }

    fn fmt_separated(
        octets: &[u8],
        sep: &str,
        upper: bool,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut current = "";
        octets.iter().try_for_each(|octet| {
            let result = if upper {
                write!(f, "{}{:02X}", current, octet)
            } else {
                write!(f, "{}{:02x}", current, octet)
            };
            current = sep;
            result
        })
    }
}
