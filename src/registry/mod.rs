//! IEEE OUI / IAB registration lookup over the bundled flat-file
//! registries.
//!
//! Indices are built once on first access, shared process-wide, and
//! immutable afterwards.

use std::collections::HashMap;
use std::vec::Vec;

use once_cell::sync::Lazy;

/// The `oui.idx` companion-file codec.
pub mod index;
pub use self::index::IndexRecord;

mod parse;
pub use self::parse::{IabEntry, OuiEntry};

mod iab;
pub use self::iab::Iab;

mod oui;
pub use self::oui::Oui;

pub(crate) const OUI_DATA: &str = include_str!("data/oui.txt");
pub(crate) const IAB_DATA: &str = include_str!("data/iab.txt");

/// The in-memory index over `oui.txt`.
pub struct OuiIndex {
    entries: HashMap<u32, Vec<OuiEntry>>,
    skipped: usize,
}

impl OuiIndex {
    fn build(data: &str) -> Self {
        let scan = parse::scan_oui(data);
        let mut entries: HashMap<u32, Vec<OuiEntry>> = HashMap::new();
        // duplicate registrations are kept in file order
        scan.entries
            .into_iter()
            .for_each(|entry| entries.entry(entry.oui()).or_default().push(entry));
        Self {
            entries,
            skipped: scan.skipped,
        }
    }

    /// The registrations recorded against a 24-bit prefix, in file
    /// order.
    pub fn lookup(&self, oui: u32) -> Option<&[OuiEntry]> {
        self.entries.get(&oui).map(Vec::as_slice)
    }

    /// Number of malformed lines skipped while building the index.
    pub const fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

/// The in-memory index over `iab.txt`.
pub struct IabIndex {
    entries: HashMap<u64, IabEntry>,
    skipped: usize,
}

impl IabIndex {
    fn build(data: &str) -> Self {
        let scan = parse::scan_iab(data);
        let mut entries = HashMap::new();
        scan.entries.into_iter().for_each(|entry| {
            _ = entries.insert(entry.prefix(), entry);
        });
        Self {
            entries,
            skipped: scan.skipped,
        }
    }

    /// The registration recorded against a 36-bit prefix.
    pub fn lookup(&self, prefix: u64) -> Option<&IabEntry> {
        self.entries.get(&prefix)
    }

    /// Number of malformed lines skipped while building the index.
    pub const fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

static OUI_INDEX: Lazy<OuiIndex> = Lazy::new(|| OuiIndex::build(OUI_DATA));
static IAB_INDEX: Lazy<IabIndex> = Lazy::new(|| IabIndex::build(IAB_DATA));

/// Get the process-wide OUI index, building it on first access.
pub fn oui_index() -> &'static OuiIndex {
    &OUI_INDEX
}

/// Get the process-wide IAB index, building it on first access.
pub fn iab_index() -> &'static IabIndex {
    &IAB_INDEX
}
