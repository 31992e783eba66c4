use core::fmt;
use core::str::FromStr;

use crate::{
    error::{err, Error, Kind},
    parser,
};

use super::{Address, Cidrs, Ipv4, Prefix, Range};

/// An IPv4 glob: four dotted components, each a decimal octet, a hyphen
/// range, or a `*` wildcard.
///
/// Non-singleton components are only permitted in a contiguous suffix, so
/// every glob denotes a single contiguous address interval.
///
/// ``` rust
/// use addr::Glob;
///
/// let glob: Glob = "192.0.2.0-127".parse().unwrap();
/// assert_eq!(glob.to_string(), "192.0.2.0-127");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Glob {
    components: [(u8, u8); 4],
}

impl Glob {
    /// Get the first address matched by this glob.
    pub fn first(&self) -> Address<Ipv4> {
        let [a, b, c, d] = self.components.map(|(lo, _)| lo);
        Address::from_octets([a, b, c, d])
    }

    /// Get the last address matched by this glob.
    pub fn last(&self) -> Address<Ipv4> {
        let [a, b, c, d] = self.components.map(|(_, hi)| hi);
        Address::from_octets([a, b, c, d])
    }

    /// Get the contiguous address interval matched by this glob.
    pub fn range(&self) -> Range<Ipv4> {
        // infallible: components are ordered and suffix-contiguous
        Range::new(self.first(), self.last()).unwrap()
    }

    /// Decompose this glob into CIDR blocks.
    pub fn cidrs(&self) -> Cidrs<Ipv4> {
        self.range().cidrs()
    }

    /// Check whether an address is matched by this glob.
    pub fn contains(&self, addr: Address<Ipv4>) -> bool {
        self.range().contains(addr)
    }
}

impl FromStr for Glob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::glob::parse(s).map(|components| Self { components })
    }
}

impl TryFrom<Range<Ipv4>> for Glob {
    type Error = Error;

    fn try_from(range: Range<Ipv4>) -> Result<Self, Self::Error> {
        let first = range.first().octets();
        let last = range.last().octets();
        let mut components = [(0, 0); 4];
        let mut widened = false;
        for (i, component) in components.iter_mut().enumerate() {
            if widened {
                if first[i] != 0 || last[i] != 255 {
                    return Err(err!(Kind::Format, "range is not glob-expressible"));
                }
                *component = (0, 255);
            } else {
                if first[i] > last[i] {
                    return Err(err!(Kind::Format, "range is not glob-expressible"));
                }
                *component = (first[i], last[i]);
                widened = first[i] != last[i];
            }
        }
        Ok(Self { components })
    }
}

impl From<Prefix<Ipv4>> for Glob {
    fn from(prefix: Prefix<Ipv4>) -> Self {
        // infallible: a prefix-aligned block is always glob-expressible
        Self::try_from(Range::from(prefix)).unwrap()
    }
}

impl From<Glob> for Range<Ipv4> {
    fn from(glob: Glob) -> Self {
        glob.range()
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        let mut sep = "";
        components.try_for_each(|&(lo, hi)| {
            let result = match (lo, hi) {
                (0, 255) => write!(f, "{}*", sep),
                (lo, hi) if lo == hi => write!(f, "{}{}", sep, lo),
                (lo, hi) => write!(f, "{}{}-{}", sep, lo, hi),
            };
            sep = ".";
            result
        })
    }
}

#[cfg(any(test, feature = "arbitrary"))]
use proptest::{
    arbitrary::{any, Arbitrary},
    strategy::{BoxedStrategy, Strategy},
};

#[cfg(any(test, feature = "arbitrary"))]
impl Arbitrary for Glob {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<Prefix<Ipv4>>().prop_map(Self::from).boxed()
    }
}
