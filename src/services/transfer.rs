//! Bulk export and import over one table
//!
//! Exports write the whole table in id order. Imports decode tolerantly,
//! skip rows that cannot become drafts, optionally suppress duplicates of
//! already-stored records, and report everything in counts rather than
//! failing partway through a file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ShoeboxError, ShoeboxResult};
use crate::interchange::{csv, json, Format};
use crate::models::{Record, RecordId};
use crate::store::{ListOrder, Table};

/// Outcome of one import run
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows inserted into the table
    pub inserted: usize,
    /// Rows skipped because an equal record was already stored
    pub duplicates: usize,
    /// Rows skipped because they could not become a valid draft
    pub skipped: usize,
    /// One line per skipped row, in document order
    pub messages: Vec<String>,
    /// Ids assigned to the inserted rows, in insertion order
    pub imported_ids: Vec<RecordId>,
}

/// Bulk interchange over one record table
pub struct TransferService<'a, K: Record> {
    table: &'a Table<K>,
}

impl<'a, K: Record> TransferService<'a, K> {
    pub fn new(table: &'a Table<K>) -> Self {
        Self { table }
    }

    /// Write the whole table to a file, returning the record count
    ///
    /// An empty table is not an error; the file still gets its header or
    /// empty array.
    pub fn export(&self, path: &Path, format: Format) -> ShoeboxResult<usize> {
        let records = self.table.list(ListOrder::Id)?;

        let file = File::create(path).map_err(|e| ShoeboxError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        match format {
            Format::Csv => csv::write_records(&mut writer, &records),
            Format::Json => json::write_records(&mut writer, &records),
        }
        .map_err(|e| ShoeboxError::io(path, e))?;
        writer.flush().map_err(|e| ShoeboxError::io(path, e))?;

        Ok(records.len())
    }

    /// Read a file into the table, returning what happened per row
    ///
    /// Only an unreadable file or an undecodable document fails the whole
    /// import. With `skip_duplicates`, rows whose natural key matches a
    /// stored record are counted instead of inserted; kinds without a
    /// natural key never skip.
    pub fn import(
        &self,
        path: &Path,
        format: Format,
        skip_duplicates: bool,
    ) -> ShoeboxResult<ImportReport> {
        let file = File::open(path).map_err(|e| ShoeboxError::io(path, e))?;
        let reader = BufReader::new(file);
        let rows = match format {
            Format::Csv => csv::read_records::<K, _>(reader),
            Format::Json => json::read_records::<K, _>(reader),
        }
        .map_err(|message| ShoeboxError::malformed(path, message))?;

        let mut report = ImportReport::default();
        for (idx, row) in rows.into_iter().enumerate() {
            let draft = match row {
                Ok(draft) => draft,
                Err(reason) => {
                    report.skipped += 1;
                    report.messages.push(format!("row {}: {}", idx + 1, reason));
                    continue;
                }
            };

            if skip_duplicates && self.table.find_duplicate(&draft)?.is_some() {
                report.duplicates += 1;
                continue;
            }

            let id = self.table.insert(&draft)?;
            report.inserted += 1;
            report.imported_ids.push(id);
        }

        Ok(report)
    }
}
