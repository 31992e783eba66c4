use core::ops::{BitOr, BitOrAssign};

/// Parse and construction options, combinable with `|`.
///
/// ``` rust
/// use addr::{Address, Flags, Ipv4};
///
/// let strict = Flags::INET_PTON;
/// assert!(Address::<Ipv4>::parse_with("0x7f.0.0.1", strict).is_err());
/// assert!(Address::<Ipv4>::parse_with("0x7f.0.0.1", Flags::default()).is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Flags(u8);

impl Flags {
    /// Strict IPv4 parsing: exactly four decimal octets in `0..=255`, no
    /// leading zeros. Required when parsing untrusted input.
    pub const INET_PTON: Self = Self(0b0000_0001);
    /// Strip leading zeros from IPv4 octets, then parse every octet as
    /// decimal. A compatibility shim for zero-padded legacy data.
    pub const ZEROFILL: Self = Self(0b0000_0010);
    /// Zero the host bits when constructing an [`Interface`][if].
    ///
    /// [if]: crate::concrete::Interface
    pub const NOHOST: Self = Self(0b0000_0100);
    /// Omit the broadcast address when iterating an IPv4 interface.
    pub const NOBROADCAST: Self = Self(0b0000_1000);

    /// Short alias for [`Flags::INET_PTON`].
    pub const P: Self = Self::INET_PTON;
    /// Short alias for [`Flags::ZEROFILL`].
    pub const Z: Self = Self::ZEROFILL;
    /// Short alias for [`Flags::NOHOST`].
    pub const N: Self = Self::NOHOST;

    /// Check whether every flag set in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
