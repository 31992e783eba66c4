use core::ops::{BitAnd, BitAndAssign, BitOr, BitXor};

use super::{
    super::{Hostmask, Netmask},
    Address,
};
use crate::traits::Afi;

impl<A: Afi> BitAnd<Netmask<A>> for Address<A> {
    type Output = Self;

    fn bitand(self, mask: Netmask<A>) -> Self::Output {
        Self::new(self.into_primitive() & mask.into_primitive())
    }
}

impl<A: Afi> BitAnd<Hostmask<A>> for Address<A> {
    type Output = Self;

    fn bitand(self, mask: Hostmask<A>) -> Self::Output {
        Self::new(self.into_primitive() & mask.into_primitive())
    }
}

impl<A: Afi> BitOr<Hostmask<A>> for Address<A> {
    type Output = Self;

    fn bitor(self, mask: Hostmask<A>) -> Self::Output {
        Self::new(self.into_primitive() | mask.into_primitive())
    }
}

impl<A: Afi> BitOr<Self> for Address<A> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.into_primitive() | rhs.into_primitive())
    }
}

impl<A: Afi, T> BitAndAssign<T> for Address<A>
where
    Self: BitAnd<T, Output = Self>,
{
    fn bitand_assign(&mut self, rhs: T) {
        *self = self.bitand(rhs);
    }
}

impl<A: Afi> BitXor<Self> for Address<A> {
    type Output = A::Primitive;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.into_primitive() ^ rhs.into_primitive()
    }
}
