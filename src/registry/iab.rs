use core::fmt;
use core::str::FromStr;

use crate::{
    concrete::{Eui, Eui48},
    error::{err, Error, Kind},
};

use super::{iab_index, IabEntry};

// the OUIs reserved by the IEEE for individual address blocks
const LEGACY_IAB_OUI: u32 = 0x0050_c2;
const NEW_IAB_OUI: u32 = 0x40d8_55;

/// A 36-bit individual address block prefix with its registration
/// record.
///
/// IABs are 12-bit carve-outs of the reserved OUIs `00-50-C2` and
/// `40-D8-55`. As with [`Oui`][super::Oui], construction performs the
/// registry lookup.
#[derive(Clone, Copy, Debug)]
pub struct Iab {
    prefix: u64,
    entry: &'static IabEntry,
}

impl Iab {
    /// Look up a 36-bit prefix in the IAB registry.
    ///
    /// # Errors
    ///
    /// Fails with a `Format` error if `prefix` does not fit in 36 bits
    /// or is not carved from a reserved IAB OUI, or a `NotRegistered`
    /// error if no registration exists.
    pub fn new(prefix: u64) -> Result<Self, Error> {
        if prefix >= 1 << 36 {
            return Err(err!(Kind::Format, "IAB prefix wider than 36 bits"));
        }
        let oui = (prefix >> 12) as u32;
        if oui != LEGACY_IAB_OUI && oui != NEW_IAB_OUI {
            return Err(err!(Kind::Format, "not an IAB-reserved OUI"));
        }
        iab_index()
            .lookup(prefix)
            .map(|entry| Self { prefix, entry })
            .ok_or_else(|| err!(Kind::NotRegistered))
    }

    /// The 36-bit prefix value.
    pub const fn prefix(&self) -> u64 {
        self.prefix
    }

    /// The registration record of this block.
    pub const fn registration(&self) -> &'static IabEntry {
        self.entry
    }

    /// The organization name of the registration.
    pub fn org(&self) -> &'static str {
        self.entry.org()
    }
}

impl Eui<Eui48> {
    /// Look up the individual address block covering `self`.
    ///
    /// # Errors
    ///
    /// Fails with a `Format` error if the OUI of `self` is not
    /// IAB-reserved, or a `NotRegistered` error if the carved block has
    /// no registration.
    pub fn iab(&self) -> Result<Iab, Error> {
        Iab::new(self.into_primitive() >> 12)
    }

    /// Check whether `self` falls within a registered individual
    /// address block.
    pub fn is_iab(&self) -> bool {
        self.iab().is_ok()
    }
}

impl PartialEq for Iab {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
    }
}

impl Eq for Iab {}

impl core::hash::Hash for Iab {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
    }
}

impl FromStr for Iab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // a full EUI-48 literal; the low 12 bits are ignored
        let (value, _) = <u64 as crate::traits::primitive::Eui<Eui48>>::parse(s)?;
        Self::new(value >> 12)
    }
}

impl fmt::Display for Iab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = (self.prefix << 12).to_be_bytes();
        let mut sep = "";
        octets[2..].iter().try_for_each(|octet| {
            let result = write!(f, "{}{:02X}", sep, octet);
            sep = "-";
            result
        })
    }
}
