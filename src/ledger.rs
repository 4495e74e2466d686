use crate::domain::ExpenseRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Written at the front of the store so spreadsheet tools keep non-ASCII
/// category labels intact.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

const HEADER: [&str; 4] = ["date", "category", "amount", "note"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No ledger file at {path}. Record an expense first with: gastos add")]
    NotFound { path: PathBuf },

    #[error("Failed to access ledger file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row failed to parse. Read-side only.
    #[error("Malformed ledger file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write ledger file {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Durable, append-only, ordered store of expense records.
///
/// Persisted as a flat CSV table (UTF-8 with BOM, header row, one row per
/// record in insertion order). A record's identity is its file position;
/// there is no id column and no update or delete.
///
/// Known limitation: concurrent external modification of the file is
/// unsupported. There is no locking or conflict detection.
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty store with the four-column header if none exists.
    /// Idempotent. Returns true when a new file was created.
    pub fn ensure_initialized(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.write_snapshot(&[])?;
        Ok(true)
    }

    /// Adds `record` as the new last element of the persisted sequence.
    ///
    /// The full sequence is rewritten to a sibling temp file which is then
    /// renamed over the store, so an append either fully succeeds or leaves
    /// the store unchanged. No business-rule validation is applied.
    pub fn append(&self, record: ExpenseRecord) -> Result<(), StoreError> {
        let mut records = if self.path.exists() {
            self.read_all()?
        } else {
            Vec::new()
        };
        records.push(record);
        self.write_snapshot(&records)
    }

    /// Returns every record in insertion order. A store that exists but
    /// holds zero records yields an empty Vec, not an error.
    pub fn read_all(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }

        let raw = fs::read(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);

        let mut reader = csv::Reader::from_reader(raw);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: ExpenseRecord = row.map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn write_snapshot(&self, records: &[ExpenseRecord]) -> Result<(), StoreError> {
        let mut buf = Vec::from(UTF8_BOM);
        {
            // Header is written by hand, so serialize() must not emit its own.
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            writer.write_record(HEADER).map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;
            for record in records {
                writer.serialize(record).map_err(|source| StoreError::Encode {
                    path: self.path.clone(),
                    source,
                })?;
            }
            writer.flush().map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, &buf).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
