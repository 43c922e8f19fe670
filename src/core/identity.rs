//! Content-derived row identity.
//!
//! Two records describing the same event in either table must hash to the
//! same identity; that hash is the only cross-table correspondence the
//! reconciler has. The default scheme concatenates the stringified date,
//! event name, and room description with no separator and hashes the
//! result, so field-boundary collisions are possible (name "AB" + room "C"
//! equals name "A" + room "BC"). The trait seam exists so a delimiter-safe
//! encoding can replace it without touching callers.

use crate::errors::AppResult;
use crate::models::record::EventRecord;
use crate::models::table::EventTable;

pub type Identity = u32;

pub trait IdentityScheme {
    fn identity(&self, record: &EventRecord) -> AppResult<Identity>;
}

/// Default scheme: `str(date) + name + location`, hashed with
/// [`string_hash`]. Fails when the record resolves neither date column.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatHash;

impl IdentityScheme for ConcatHash {
    fn identity(&self, record: &EventRecord) -> AppResult<Identity> {
        // An unparseable date cell still stringifies and hashes fine;
        // only a record with neither date column is rejected.
        let cell = record
            .date_cell()
            .ok_or(crate::errors::AppError::MissingDateColumn { row: record.row })?;

        let mut s = cell.to_field_string();
        s.push_str(&record.name());
        s.push_str(&record.location());
        Ok(string_hash(&s))
    }
}

/// djb2 bitwise variant: h = 5381, then h = h * 33 ^ unit over the UTF-16
/// code units in reverse order, wrapping at 32 bits. Deterministic across
/// runs; no seeding.
pub fn string_hash(s: &str) -> u32 {
    let mut h: u32 = 5381;
    let units: Vec<u16> = s.encode_utf16().collect();
    for unit in units.into_iter().rev() {
        h = h.wrapping_mul(33) ^ u32::from(unit);
    }
    h
}

/// Identity for every record of a table, aligned with `table.records`.
pub fn tag_table(scheme: &dyn IdentityScheme, table: &EventTable) -> AppResult<Vec<Identity>> {
    table
        .records
        .iter()
        .map(|record| scheme.identity(record))
        .collect()
}
