//! Traits describing address families and the integer primitives used to
//! represent their values.

mod afi;
pub use self::afi::{Afi, Efi};

/// Traits bounding the integer primitives backing each address family.
pub mod primitive;
