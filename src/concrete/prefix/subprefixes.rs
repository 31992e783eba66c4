use crate::{
    error::{err, Error, Kind},
    traits::Afi,
};

use super::{Address, Prefix, PrefixLength};

/// Iterator over the prefix-aligned children of a covering prefix.
///
/// Returned by [`Prefix::subnets`].
#[derive(Clone, Copy, Debug)]
pub struct Subprefixes<A: Afi> {
    cursor: Option<Address<A>>,
    end: Address<A>,
    length: PrefixLength<A>,
}

impl<A: Afi> Subprefixes<A> {
    pub(crate) fn new(parent: Prefix<A>, length: PrefixLength<A>) -> Result<Self, Error> {
        if length < parent.length() {
            return Err(err!(
                Kind::Format,
                "subprefix length shorter than covering prefix"
            ));
        }
        Ok(Self {
            cursor: Some(parent.network()),
            end: parent.broadcast(),
            length,
        })
    }
}

impl<A: Afi> Iterator for Subprefixes<A> {
    type Item = Prefix<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.cursor?;
        if network > self.end {
            self.cursor = None;
            return None;
        }
        let item = Prefix::new(network, self.length);
        // overflow past the end of the address space ends iteration
        self.cursor = item.broadcast().checked_add(1).ok();
        Some(item)
    }
}
