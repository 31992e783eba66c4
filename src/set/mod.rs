//! Arbitrary subsets of the combined IPv4 and IPv6 address spaces,
//! represented canonically as sorted disjoint CIDR lists.

use std::vec::Vec;

use crate::{
    any, cidr,
    concrete::{Ipv4, Ipv6, Prefix, Range},
    traits::Afi,
};

mod ops;

/// A set of IP addresses of either family.
///
/// The backing representation is one canonical CIDR list per family:
/// sorted ascending, pairwise disjoint, and merge-irreducible. Every
/// public operation re-establishes these invariants, so equality over
/// the stored lists coincides with equality of the denoted point sets.
///
/// Anything reducible to a contiguous range can be inserted or removed:
/// addresses, prefixes, interfaces, ranges, globs.
///
/// ``` rust
/// use addr::IpSet;
/// use addr::any;
///
/// let mut set = IpSet::new();
/// set.insert("192.0.2.0/25".parse::<any::Prefix>().unwrap())
///     .insert("192.0.2.128/25".parse::<any::Prefix>().unwrap());
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct IpSet {
    v4: Vec<Prefix<Ipv4>>,
    v6: Vec<Prefix<Ipv6>>,
}

fn insert_cidrs<A: Afi>(list: &mut Vec<Prefix<A>>, add: impl IntoIterator<Item = Prefix<A>>) {
    list.extend(add);
    *list = cidr::merge(std::mem::take(list));
}

// `list` is sorted and disjoint: binary search for the affected blocks,
// then splice in their exclusions.
fn remove_cidr<A: Afi>(list: &mut Vec<Prefix<A>>, del: Prefix<A>) {
    let start = list.partition_point(|cidr| cidr.broadcast() < del.network());
    let end = list.partition_point(|cidr| cidr.network() <= del.broadcast());
    if start >= end {
        return;
    }
    let replacement: Vec<_> = list[start..end]
        .iter()
        .flat_map(|&cidr| cidr::exclude(cidr, del))
        .collect();
    _ = list.splice(start..end, replacement);
}

fn covers_range<A: Afi>(list: &[Prefix<A>], range: &Range<A>) -> bool {
    let mut cursor = range.first();
    loop {
        let index = list.partition_point(|cidr| cidr.broadcast() < cursor);
        let Some(cidr) = list.get(index) else {
            return false;
        };
        if !cidr.contains(cursor) {
            return false;
        }
        if cidr.broadcast() >= range.last() {
            return true;
        }
        // ok to unwrap: cidr.broadcast() < range.last() <= ONES
        cursor = cidr.broadcast().checked_add(1).unwrap();
    }
}

// Two CIDR blocks are either nested or disjoint, so the four cases are
// exhaustive.
fn intersect<A: Afi>(lhs: &[Prefix<A>], rhs: &[Prefix<A>]) -> Vec<Prefix<A>> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while let (Some(&a), Some(&b)) = (lhs.get(i), rhs.get(j)) {
        if a.covers(&b) {
            out.push(b);
            j += 1;
        } else if b.covers(&a) {
            out.push(a);
            i += 1;
        } else if a.broadcast() < b.network() {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

fn difference<A: Afi>(lhs: &[Prefix<A>], rhs: &[Prefix<A>]) -> Vec<Prefix<A>> {
    let mut out = lhs.to_vec();
    rhs.iter().for_each(|&del| remove_cidr(&mut out, del));
    out
}

fn is_chain<A: Afi>(list: &[Prefix<A>]) -> bool {
    list.windows(2)
        .all(|pair| Range::from(pair[0]).precedes(&Range::from(pair[1])))
}

impl IpSet {
    /// Construct a new, empty [`IpSet`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            v4: Vec::new(),
            v6: Vec::new(),
        }
    }

    pub(crate) const fn from_parts(v4: Vec<Prefix<Ipv4>>, v6: Vec<Prefix<Ipv6>>) -> Self {
        Self { v4, v6 }
    }

    /// Insert an `item` into `self`.
    pub fn insert<T>(&mut self, item: T) -> &mut Self
    where
        T: Into<any::Range>,
    {
        match item.into() {
            any::Range::Ipv4(range) => insert_cidrs(&mut self.v4, range.cidrs()),
            any::Range::Ipv6(range) => insert_cidrs(&mut self.v6, range.cidrs()),
        }
        self
    }

    /// Remove an `item` from `self`.
    pub fn remove<T>(&mut self, item: T) -> &mut Self
    where
        T: Into<any::Range>,
    {
        match item.into() {
            any::Range::Ipv4(range) => range
                .cidrs()
                .for_each(|cidr| remove_cidr(&mut self.v4, cidr)),
            any::Range::Ipv6(range) => range
                .cidrs()
                .for_each(|cidr| remove_cidr(&mut self.v6, cidr)),
        }
        self
    }

    /// Check whether every address of `item` is a member of `self`.
    pub fn contains<T>(&self, item: T) -> bool
    where
        T: Into<any::Range>,
    {
        match item.into() {
            any::Range::Ipv4(range) => covers_range(&self.v4, &range),
            any::Range::Ipv6(range) => covers_range(&self.v6, &range),
        }
    }

    /// Number of stored CIDR blocks.
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    /// Check whether `self` denotes the empty set.
    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// Number of member addresses, or `None` when the count overflows
    /// `u128`.
    pub fn size(&self) -> Option<u128> {
        self.iter_cidrs()
            .try_fold(0u128, |total, cidr| total.checked_add(cidr.size()?))
    }

    /// Iterate the stored CIDR blocks, ascending, IPv4 before IPv6.
    pub fn iter_cidrs(&self) -> impl Iterator<Item = any::Prefix> + '_ {
        self.v4
            .iter()
            .copied()
            .map(any::Prefix::Ipv4)
            .chain(self.v6.iter().copied().map(any::Prefix::Ipv6))
    }

    /// Iterate every member address, lazily, ascending, IPv4 before
    /// IPv6.
    pub fn addresses(&self) -> impl Iterator<Item = any::Address> + '_ {
        self.iter_cidrs()
            .flat_map(|cidr| any::Range::from(cidr).iter())
    }

    /// Check whether `self` and `other` have no members in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        intersect(&self.v4, &other.v4).is_empty() && intersect(&self.v6, &other.v6).is_empty()
    }

    /// Check whether every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.v4
            .iter()
            .all(|cidr| covers_range(&other.v4, &Range::from(*cidr)))
            && self
                .v6
                .iter()
                .all(|cidr| covers_range(&other.v6, &Range::from(*cidr)))
    }

    /// Check whether every member of `other` is a member of `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Check whether the members of `self` form one contiguous interval.
    ///
    /// The empty set is contiguous; a set spanning both families is not.
    pub fn is_contiguous(&self) -> bool {
        match (self.v4.is_empty(), self.v6.is_empty()) {
            (true, true) => true,
            (false, true) => is_chain(&self.v4),
            (true, false) => is_chain(&self.v6),
            (false, false) => false,
        }
    }

    pub(crate) fn union_parts(&self, other: &Self) -> Self {
        Self::from_parts(
            cidr::merge(self.v4.iter().chain(other.v4.iter()).copied()),
            cidr::merge(self.v6.iter().chain(other.v6.iter()).copied()),
        )
    }

    pub(crate) fn intersection_parts(&self, other: &Self) -> Self {
        Self::from_parts(
            intersect(&self.v4, &other.v4),
            intersect(&self.v6, &other.v6),
        )
    }

    pub(crate) fn difference_parts(&self, other: &Self) -> Self {
        Self::from_parts(
            difference(&self.v4, &other.v4),
            difference(&self.v6, &other.v6),
        )
    }
}

impl<T> FromIterator<T> for IpSet
where
    T: Into<any::Range>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|item| {
            _ = set.insert(item);
        });
        set
    }
}

impl<T> Extend<T> for IpSet
where
    T: Into<any::Range>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            _ = self.insert(item);
        });
    }
}
