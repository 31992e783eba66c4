use crate::error::{err, Error, Kind};

use super::Parser;

// The contiguous-suffix law: right of the first non-singleton component,
// every component must span its full range. This is what makes a glob
// denote a single contiguous integer interval.
fn check_suffix_law(components: &[(u8, u8); 4]) -> bool {
    let mut widened = false;
    for &(lo, hi) in components {
        if widened && (lo, hi) != (0, 255) {
            return false;
        }
        if lo != hi {
            widened = true;
        }
    }
    true
}

#[inline(always)]
pub(crate) fn parse(input: &str) -> Result<[(u8, u8); 4], Error> {
    Parser::new(input)
        .take_only(Parser::take_glob)
        .filter(|components| components.iter().all(|&(lo, hi)| lo <= hi))
        .filter(check_suffix_law)
        .ok_or_else(|| err!(Kind::Format, "invalid IPv4 glob literal"))
}
