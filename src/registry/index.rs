//! The `oui.idx` companion-file codec.
//!
//! One record per line, `prefix<TAB>offset<TAB>length<TAB>count`, sorted
//! by prefix ascending. The index lets a later lookup seek directly to
//! the byte range of a prefix's records instead of rescanning the whole
//! registry. [`generate`] doubles as the build-time regeneration utility
//! run whenever the source data file changes.

use std::string::String;
use std::vec::Vec;

use core::fmt::Write as _;

use crate::error::{err, Error, Kind};

use super::parse as scanner;

/// One line of an `oui.idx` file: the byte range holding every record
/// for a 24-bit prefix.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct IndexRecord {
    /// The 24-bit prefix.
    pub prefix: u32,
    /// Byte offset of the prefix's first record.
    pub offset: u64,
    /// Byte length spanning all of the prefix's records.
    pub length: u32,
    /// Number of records registered against the prefix.
    pub count: u32,
}

/// Generate `oui.idx` content from raw `oui.txt` data.
pub fn generate(data: &str) -> String {
    let scan = scanner::scan_oui(data);
    let mut records: Vec<IndexRecord> = Vec::new();
    for entry in &scan.entries {
        let offset = entry.offset() as u64;
        let end = offset + entry.size() as u64;
        match records.iter_mut().find(|record| record.prefix == entry.oui()) {
            Some(record) => {
                record.length = (end - record.offset) as u32;
                record.count += 1;
            }
            None => records.push(IndexRecord {
                prefix: entry.oui(),
                offset,
                length: entry.size() as u32,
                count: 1,
            }),
        }
    }
    records.sort_by_key(|record| record.prefix);
    let mut out = String::new();
    records.iter().for_each(|record| {
        // infallible: writing to a `String`
        _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            record.prefix, record.offset, record.length, record.count
        );
    });
    out
}

/// Parse `oui.idx` content.
///
/// # Errors
///
/// Fails with a `Format` error on malformed records or out-of-order
/// prefixes.
pub fn parse(idx: &str) -> Result<Vec<IndexRecord>, Error> {
    let mut records = Vec::new();
    for line in idx.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields = line.split('\t');
        let record = (|| {
            Some(IndexRecord {
                prefix: fields.next()?.parse().ok()?,
                offset: fields.next()?.parse().ok()?,
                length: fields.next()?.parse().ok()?,
                count: fields.next()?.parse().ok()?,
            })
        })()
        .ok_or_else(|| err!(Kind::Format, "malformed index record"))?;
        if fields.next().is_some() {
            return Err(err!(Kind::Format, "malformed index record"));
        }
        records.push(record);
    }
    if records.windows(2).any(|pair| pair[0].prefix >= pair[1].prefix) {
        return Err(err!(Kind::Format, "index records out of order"));
    }
    Ok(records)
}

/// Seek to the byte range named by an index record and parse only the
/// records found there.
pub fn lookup(data: &str, record: &IndexRecord) -> Option<Vec<super::OuiEntry>> {
    let start = usize::try_from(record.offset).ok()?;
    let end = start.checked_add(record.length as usize)?;
    let slice = data.get(start..end)?;
    let scan = scanner::scan_oui(slice);
    (scan.entries.len() == record.count as usize).then_some(scan.entries)
}
