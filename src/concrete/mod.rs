//! Address-family generic value types, and the per-family marker types
//! used to parameterize them.

mod af;
pub use self::af::{Afi, Efi, Eui48, Eui64, Ipv4, Ipv6};

mod addr;
pub use self::addr::{common_length, Address};

mod mask;
pub use self::mask::{Hostmask, Netmask};

mod interface;
pub use self::interface::{Hosts, Interface};

mod prefix;
pub use self::prefix::{Prefix, PrefixLength, Subprefixes, Supernets};

mod range;
pub use self::range::{Addresses, Cidrs, Range};

mod glob;
pub use self::glob::Glob;

pub(crate) mod eui;
pub use self::eui::{Dialect, Ei, Eui};

macro_rules! impl_try_from_any {
    ( $any_ty:ty {
        $( $variant:path => $concrete_ty:ty ),* $(,)?
    } ) => {
        $(
            impl TryFrom<$any_ty> for $concrete_ty {
                type Error = $crate::error::Error;

                fn try_from(from: $any_ty) -> Result<Self, Self::Error> {
                    if let $variant(inner) = from {
                        Ok(inner)
                    } else {
                        Err($crate::error::err!($crate::error::Kind::Conversion))
                    }
                }
            }
        )*
    }
}
pub(crate) use impl_try_from_any;
