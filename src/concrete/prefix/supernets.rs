use crate::traits::Afi;

use super::{Address, Prefix, PrefixLength};

/// Iterator over the supernets of a prefix, tightest first.
///
/// Returned by [`Prefix::supernets`].
#[derive(Clone, Copy, Debug)]
pub struct Supernets<A: Afi> {
    network: Address<A>,
    length: Option<PrefixLength<A>>,
}

impl<A: Afi> Supernets<A> {
    pub(crate) fn new(prefix: Prefix<A>) -> Self {
        Self {
            network: prefix.network(),
            length: prefix.length().decrement().ok(),
        }
    }
}

impl<A: Afi> Iterator for Supernets<A> {
    type Item = Prefix<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = self.length?;
        self.length = length.decrement().ok();
        Some(Prefix::new(self.network, length))
    }
}
