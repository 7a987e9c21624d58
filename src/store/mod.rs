//! Append-only CSV store for check-in records.
//!
//! One row per check-in, five fields, no header line. Appends funnel
//! through an internal lock so rows from concurrent submissions never
//! interleave; reads re-scan the file on every call, the page always
//! wants the latest rows and the log stays small.

use crate::errors::{AppError, AppResult};
use crate::models::record::{CheckinRecord, COORD_PLACEHOLDER};
use csv::{ReaderBuilder, Writer};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

pub struct CheckinStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl CheckinStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. Existing rows are never touched: the file is
    /// opened in append mode and created on first write.
    pub fn append(&self, record: &CheckinRecord) -> AppResult<()> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record([
            record.name.as_str(),
            record.id_number.as_str(),
            record.timestamp.as_str(),
            record.latitude.as_str(),
            record.longitude.as_str(),
        ])?;
        wtr.flush()?;

        Ok(())
    }

    /// Load every record in file order (oldest first). A missing file is
    /// an empty log, not an error.
    ///
    /// Rows are not re-validated. Rows from before coordinates were
    /// recorded carry only three fields and load with the placeholder;
    /// anything shorter than that is a corrupt file.
    pub fn load_all(&self) -> AppResult<Vec<CheckinRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            if row.len() < 3 {
                return Err(AppError::MalformedRow(idx + 1));
            }
            let field = |i: usize| row.get(i).unwrap_or_default().to_string();
            let coord = |i: usize| match row.get(i) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => COORD_PLACEHOLDER.to_string(),
            };
            records.push(CheckinRecord {
                name: field(0),
                id_number: field(1),
                timestamp: field(2),
                latitude: coord(3),
                longitude: coord(4),
            });
        }

        Ok(records)
    }

    /// Number of persisted records.
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.load_all()?.len())
    }
}
