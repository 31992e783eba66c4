//! Enumerated types ranging over both IP address families, for contexts
//! where the family is chosen at runtime.

mod addr;
pub use self::addr::Address;

mod interface;
pub use self::interface::Interface;

mod prefix;
pub use self::prefix::Prefix;

mod range;
pub use self::range::{Addresses, Cidrs, Range};

macro_rules! delegate {
    ( $( $(#[$attr:meta])* pub fn $fn:ident(&self) -> $ret:ty; )* ) => {
        $(
            $(#[$attr])*
            pub fn $fn(&self) -> $ret {
                match self {
                    Self::Ipv4(inner) => inner.$fn(),
                    Self::Ipv6(inner) => inner.$fn(),
                }
            }
        )*
    }
}
use delegate;
