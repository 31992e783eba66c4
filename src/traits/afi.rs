use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::Hash;

use crate::{concrete, fmt};

use super::primitive;

/// An interface for describing an IP address family.
pub trait Afi: Copy + Debug + Hash + Ord + 'static {
    // This bound is required to satisfy coherence rules when implementing
    // `From<A::Octets> for Address<A>`
    /// The big-endian byte array representation of addresses of this
    /// address family.
    type Octets: Borrow<[u8]> + Copy + Debug + Eq + Hash + 'static;

    /// The primitive integer type used to store address values of this
    /// address family.
    type Primitive: primitive::Address<Self> + fmt::AddressDisplay<Self>;

    /// Get the [`concrete::Afi`] variant associated with `Self`.
    fn as_afi() -> concrete::Afi;
}

/// An interface for describing an EUI (hardware address) family.
pub trait Efi: Copy + Debug + Hash + Ord + 'static {
    /// The big-endian byte array representation of identifiers of this
    /// family.
    type Octets: Borrow<[u8]> + Copy + Debug + Eq + Hash + 'static;

    /// The primitive integer type used to store identifier values of this
    /// family.
    type Primitive: primitive::Eui<Self>;

    /// Get the [`concrete::Efi`] variant associated with `Self`.
    fn as_efi() -> concrete::Efi;
}
