use core::ops::{Add, BitAnd, BitOr, BitXor, Sub};

use num_traits::Zero;

use super::IpSet;

impl BitOr for IpSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union_parts(&rhs)
    }
}

impl BitAnd for IpSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection_parts(&rhs)
    }
}

impl Sub for IpSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference_parts(&rhs)
    }
}

impl BitXor for IpSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.union_parts(&rhs) - self.intersection_parts(&rhs)
    }
}

impl Add for IpSet {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Self) -> Self::Output {
        self | rhs
    }
}

impl Zero for IpSet {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_ref_ops {
    ( $( $trait:ident :: $fn:ident ),* $(,)? ) => {
        $(
            impl $trait for &IpSet {
                type Output = IpSet;

                fn $fn(self, rhs: Self) -> Self::Output {
                    self.clone().$fn(rhs.clone())
                }
            }
        )*
    }
}
impl_ref_ops!(BitOr::bitor, BitAnd::bitand, Sub::sub, BitXor::bitxor);

#[cfg(test)]
mod tests {
    use super::*;

    use std::{string::ToString, vec::Vec};

    use crate::any;

    fn set(reprs: &[&str]) -> IpSet {
        reprs
            .iter()
            .map(|s| s.parse::<any::Prefix>().unwrap())
            .collect()
    }

    fn reprs(set: &IpSet) -> Vec<std::string::String> {
        set.iter_cidrs().map(|cidr| cidr.to_string()).collect()
    }

    #[test]
    fn union_merges() {
        let union = set(&["192.0.2.0/25"]) | set(&["192.0.2.128/25", "10.0.0.0/8"]);
        assert_eq!(reprs(&union), ["10.0.0.0/8", "192.0.2.0/24"]);
    }

    #[test]
    fn intersection_takes_tighter_blocks() {
        let intersection = set(&["10.0.0.0/8", "192.0.2.0/24"]) & set(&["10.1.0.0/16"]);
        assert_eq!(reprs(&intersection), ["10.1.0.0/16"]);
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let intersection = set(&["10.0.0.0/8"]) & set(&["192.0.2.0/24"]);
        assert!(intersection.is_empty());
    }

    #[test]
    fn difference_excludes() {
        let difference = set(&["192.0.2.0/24"]) - set(&["192.0.2.0/25"]);
        assert_eq!(reprs(&difference), ["192.0.2.128/25"]);
    }

    #[test]
    fn symmetric_difference() {
        let lhs = set(&["192.0.2.0/25", "198.51.100.0/24"]);
        let rhs = set(&["192.0.2.128/25", "198.51.100.0/24"]);
        let sym = lhs ^ rhs;
        assert_eq!(reprs(&sym), ["192.0.2.0/24"]);
    }

    #[test]
    fn zero_is_the_empty_set() {
        assert!(IpSet::zero().is_zero());
        assert!(!set(&["10.0.0.0/8"]).is_zero());
    }

    #[test]
    fn operator_results_are_canonical() {
        let union = &set(&["0.0.0.0/1"]) | &set(&["128.0.0.0/1"]);
        assert_eq!(reprs(&union), ["0.0.0.0/0"]);
    }
}
