//! Free-function algebra over CIDR lists: canonical merging, exclusion,
//! spanning, and matching scans.

use std::vec::Vec;

use crate::{
    any,
    concrete::{Address, Prefix, Range},
    error::{err, Error, Kind},
    traits::Afi,
};

/// Reduce a collection of prefixes to the canonical minimum-cardinality
/// list covering the same addresses.
///
/// The result is sorted ascending, disjoint, and irreducible: adjacent
/// sibling blocks are merged into their parent transitively, and covered
/// blocks are absorbed.
pub fn merge<A: Afi>(prefixes: impl IntoIterator<Item = Prefix<A>>) -> Vec<Prefix<A>> {
    let mut intervals: Vec<Range<A>> = prefixes.into_iter().map(Range::from).collect();
    intervals.sort();
    let mut coalesced: Vec<Range<A>> = Vec::with_capacity(intervals.len());
    for range in intervals {
        if let Some(tail) = coalesced.last_mut() {
            if tail.overlaps(&range) || tail.precedes(&range) {
                if range.last() > tail.last() {
                    // ok to unwrap: tail.first() <= range.last()
                    *tail = Range::new(tail.first(), range.last()).unwrap();
                }
                continue;
            }
        }
        coalesced.push(range);
    }
    coalesced.iter().flat_map(Range::cidrs).collect()
}

/// Merge a mixed-family collection of prefixes, partitioning IPv4 before
/// IPv6.
pub fn merge_any(prefixes: impl IntoIterator<Item = any::Prefix>) -> Vec<any::Prefix> {
    let (mut v4, mut v6) = (Vec::new(), Vec::new());
    prefixes.into_iter().for_each(|prefix| match prefix {
        any::Prefix::Ipv4(prefix) => v4.push(prefix),
        any::Prefix::Ipv6(prefix) => v6.push(prefix),
    });
    merge(v4)
        .into_iter()
        .map(any::Prefix::Ipv4)
        .chain(merge(v6).into_iter().map(any::Prefix::Ipv6))
        .collect()
}

/// Compute the list of prefixes covering `target` with `excluded`
/// removed, by repeated subdivision of the halves that intersect it.
///
/// The result is sorted ascending and disjoint.
pub fn exclude<A: Afi>(target: Prefix<A>, excluded: Prefix<A>) -> Vec<Prefix<A>> {
    if !target.overlaps(&excluded) {
        return std::vec![target];
    }
    if excluded.covers(&target) {
        return Vec::new();
    }
    let mut remainder = Vec::new();
    let mut cursor = target;
    while cursor.length() < excluded.length() {
        // both ok to unwrap: cursor strictly covers excluded, so halving
        // cannot pass the family width
        let length = cursor.length().increment().unwrap();
        let mut halves = cursor.subnets(length).unwrap();
        let lower = halves.next().unwrap();
        let upper = halves.next().unwrap();
        if lower.covers(&excluded) {
            remainder.push(upper);
            cursor = lower;
        } else {
            remainder.push(lower);
            cursor = upper;
        }
    }
    remainder.sort();
    remainder
}

/// Compute the smallest prefix covering every prefix in `prefixes`.
///
/// # Errors
///
/// Fails with a `Format` error if `prefixes` is empty.
pub fn spanning<A: Afi>(
    prefixes: impl IntoIterator<Item = Prefix<A>>,
) -> Result<Prefix<A>, Error> {
    Prefix::spanning(prefixes)
}

/// Compute the smallest prefix covering every prefix in a mixed-family
/// collection.
///
/// # Errors
///
/// Fails with a `Conversion` error if the collection mixes address
/// families, or a `Format` error if it is empty.
pub fn spanning_any(
    prefixes: impl IntoIterator<Item = any::Prefix>,
) -> Result<any::Prefix, Error> {
    let (mut v4, mut v6) = (Vec::new(), Vec::new());
    prefixes.into_iter().for_each(|prefix| match prefix {
        any::Prefix::Ipv4(prefix) => v4.push(prefix),
        any::Prefix::Ipv6(prefix) => v6.push(prefix),
    });
    match (v4.is_empty(), v6.is_empty()) {
        (false, true) => spanning(v4).map(any::Prefix::Ipv4),
        (true, false) => spanning(v6).map(any::Prefix::Ipv6),
        (false, false) => Err(err!(
            Kind::Conversion,
            "cannot span prefixes of mixed address families"
        )),
        (true, true) => Err(err!(Kind::Format, "cannot span an empty collection")),
    }
}

/// Reassemble a sorted, contiguous CIDR list into the range it covers.
///
/// # Errors
///
/// Fails with a `Format` error if the list is empty, unsorted, or has
/// gaps.
pub fn to_range<A: Afi>(cidrs: &[Prefix<A>]) -> Result<Range<A>, Error> {
    let first = cidrs
        .first()
        .ok_or_else(|| err!(Kind::Format, "empty CIDR list"))?;
    let contiguous = cidrs
        .windows(2)
        .all(|pair| Range::from(pair[0]).precedes(&Range::from(pair[1])));
    if contiguous {
        // ok to unwrap: the chain is ordered
        Ok(Range::new(first.network(), cidrs[cidrs.len() - 1].broadcast()).unwrap())
    } else {
        Err(err!(Kind::Format, "CIDR list is not contiguous"))
    }
}

/// Every prefix in `cidrs` containing `addr`.
pub fn all_matching<A: Afi>(addr: Address<A>, cidrs: &[Prefix<A>]) -> Vec<Prefix<A>> {
    cidrs
        .iter()
        .filter(|cidr| cidr.contains(addr))
        .copied()
        .collect()
}

/// The shortest-length (widest) prefix in `cidrs` containing `addr`.
pub fn largest_matching<A: Afi>(addr: Address<A>, cidrs: &[Prefix<A>]) -> Option<Prefix<A>> {
    cidrs
        .iter()
        .filter(|cidr| cidr.contains(addr))
        .min_by_key(|cidr| cidr.length())
        .copied()
}

/// The longest-length (tightest) prefix in `cidrs` containing `addr`.
pub fn smallest_matching<A: Afi>(addr: Address<A>, cidrs: &[Prefix<A>]) -> Option<Prefix<A>> {
    cidrs
        .iter()
        .filter(|cidr| cidr.contains(addr))
        .max_by_key(|cidr| cidr.length())
        .copied()
}

/// Iterate the distinct addresses covered by a mixed collection of
/// ranges, ascending, IPv4 before IPv6.
///
/// Duplicate coverage is eliminated before iteration begins; addresses
/// are produced lazily.
pub fn iter_unique_ips(
    ranges: impl IntoIterator<Item = any::Range>,
) -> impl Iterator<Item = any::Address> {
    merge_any(ranges.into_iter().flat_map(|range| range.cidrs()))
        .into_iter()
        .flat_map(|prefix| any::Range::from(prefix).iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    use crate::{Ipv4, Ipv6};

    fn prefixes<A: Afi>(reprs: &[&str]) -> Vec<Prefix<A>> {
        reprs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn reprs<A: Afi>(prefixes: &[Prefix<A>]) -> Vec<std::string::String> {
        prefixes.iter().map(|prefix| prefix.to_string()).collect()
    }

    #[test]
    fn merge_adjacent_siblings() {
        let merged = merge(prefixes::<Ipv4>(&["192.0.2.0/25", "192.0.2.128/25"]));
        assert_eq!(reprs(&merged), ["192.0.2.0/24"]);
    }

    #[test]
    fn merge_absorbs_covered_blocks() {
        let merged = merge(prefixes::<Ipv4>(&[
            "10.0.0.0/8",
            "10.1.0.0/16",
            "10.2.3.0/24",
        ]));
        assert_eq!(reprs(&merged), ["10.0.0.0/8"]);
    }

    #[test]
    fn merge_is_transitive() {
        let merged = merge(prefixes::<Ipv4>(&[
            "192.0.2.0/26",
            "192.0.2.64/26",
            "192.0.2.128/26",
            "192.0.2.192/26",
        ]));
        assert_eq!(reprs(&merged), ["192.0.2.0/24"]);
    }

    #[test]
    fn merge_keeps_disjoint_blocks() {
        let input = prefixes::<Ipv4>(&["192.0.2.0/25", "198.51.100.0/24"]);
        let merged = merge(input.clone());
        assert_eq!(merged, input);
    }

    #[test]
    fn merge_adjacent_non_siblings_stay_split() {
        // adjacent but with no common aligned parent
        let input = prefixes::<Ipv4>(&["192.0.2.128/25", "192.0.3.0/25"]);
        let merged = merge(input.clone());
        assert_eq!(merged, input);
    }

    #[test]
    fn merge_is_idempotent() {
        let once = merge(prefixes::<Ipv4>(&[
            "10.0.0.0/9",
            "10.128.0.0/9",
            "192.0.2.0/24",
        ]));
        let twice = merge(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_is_order_independent() {
        let forward = merge(prefixes::<Ipv4>(&["10.0.0.0/9", "192.0.2.0/24", "10.128.0.0/9"]));
        let reverse = merge(prefixes::<Ipv4>(&["10.128.0.0/9", "192.0.2.0/24", "10.0.0.0/9"]));
        assert_eq!(forward, reverse);
    }

    #[test]
    fn merge_partitions_families() {
        let mixed = std::vec![
            "2001:db8::/33".parse::<any::Prefix>().unwrap(),
            "10.0.0.0/8".parse().unwrap(),
            "2001:db8:8000::/33".parse().unwrap(),
        ];
        let merged: Vec<_> = merge_any(mixed).iter().map(ToString::to_string).collect();
        assert_eq!(merged, ["10.0.0.0/8", "2001:db8::/32"]);
    }

    #[test]
    fn exclude_disjoint_is_identity() {
        let target = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let excluded = "198.51.100.0/24".parse().unwrap();
        assert_eq!(exclude(target, excluded), [target]);
    }

    #[test]
    fn exclude_covering_is_empty() {
        let target = "192.0.2.0/25".parse::<Prefix<Ipv4>>().unwrap();
        let excluded = "192.0.2.0/24".parse().unwrap();
        assert!(exclude(target, excluded).is_empty());
    }

    #[test]
    fn exclude_subprefix_splits() {
        let target = "10.0.0.0/8".parse::<Prefix<Ipv4>>().unwrap();
        let excluded = "10.1.0.0/16".parse().unwrap();
        assert_eq!(
            reprs(&exclude(target, excluded)),
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
    fn exclude_union_law() {
        let target = "192.0.2.0/24".parse::<Prefix<Ipv4>>().unwrap();
        let excluded = "192.0.2.64/26".parse().unwrap();
        let remainder = exclude(target, excluded);
        let total: u128 = remainder.iter().map(|cidr| cidr.size().unwrap()).sum();
        assert_eq!(total, 256 - 64);
        assert!(remainder.iter().all(|cidr| !cidr.overlaps(&excluded)));
        assert!(remainder.iter().all(|cidr| target.covers(cidr)));
    }

    #[test]
    fn spanning_mixed_families_fails() {
        let mixed = std::vec![
            "10.0.0.0/8".parse::<any::Prefix>().unwrap(),
            "2001:db8::/32".parse().unwrap(),
        ];
        assert_eq!(
            spanning_any(mixed).unwrap_err().kind(),
            Kind::Conversion
        );
    }

    #[test]
    fn spanning_single_family() {
        let prefixes = prefixes::<Ipv6>(&["2001:db8:f00::/48", "2001:db8::/48"]);
        assert_eq!(
            spanning(prefixes).unwrap().to_string(),
            "2001:db8::/36"
        );
    }

    #[test]
    fn range_reassembly() {
        let range = "192.0.2.1-192.0.2.9".parse::<Range<Ipv4>>().unwrap();
        let cidrs: Vec<_> = range.cidrs().collect();
        assert_eq!(to_range(&cidrs).unwrap(), range);
    }

    #[test]
    fn range_reassembly_rejects_gaps() {
        let cidrs = prefixes::<Ipv4>(&["192.0.2.0/25", "192.0.3.0/24"]);
        assert!(to_range(&cidrs).is_err());
    }

    #[test]
    fn matching_scans() {
        let cidrs = prefixes::<Ipv4>(&["10.0.0.0/8", "10.0.0.0/16", "192.0.2.0/24"]);
        let addr = "10.0.0.1".parse().unwrap();
        assert_eq!(
            largest_matching(addr, &cidrs).unwrap().to_string(),
            "10.0.0.0/8"
        );
        assert_eq!(
            smallest_matching(addr, &cidrs).unwrap().to_string(),
            "10.0.0.0/16"
        );
        assert_eq!(all_matching(addr, &cidrs).len(), 2);
        assert_eq!(largest_matching("172.16.0.1".parse().unwrap(), &cidrs), None);
    }

    #[test]
    fn unique_ips_deduplicate() {
        let ranges = std::vec![
            "192.0.2.0-192.0.2.3".parse::<any::Range>().unwrap(),
            "192.0.2.2-192.0.2.5".parse().unwrap(),
        ];
        let ips: Vec<_> = iter_unique_ips(ranges).map(|ip| ip.to_string()).collect();
        assert_eq!(
            ips,
            [
                "192.0.2.0",
                "192.0.2.1",
                "192.0.2.2",
                "192.0.2.3",
                "192.0.2.4",
                "192.0.2.5"
            ]
        );
    }
}
