//! JSON file persistence for [`HistoryLog`].
//!
//! The file holds a pretty-printed JSON array of entries, newest first. A
//! missing file reads as an empty log; every save rewrites the whole file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::HistoryError;
use crate::log::HistoryLog;

/// A history log stored in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
    capacity: usize,
}

impl FileHistoryStore {
    /// Create a store for `path` that keeps at most `capacity` entries.
    ///
    /// Nothing is read or written until the first [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self {
            path: path.into(),
            capacity,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the log. A missing file yields an empty log; a file holding
    /// more than `capacity` entries is truncated to the newest ones.
    pub fn load<T: DeserializeOwned>(&self) -> Result<HistoryLog<T>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return HistoryLog::new(self.capacity);
            }
            Err(source) => return Err(self.io_error(source)),
        };
        let entries = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            HistoryError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        HistoryLog::from_entries(self.capacity, entries)
    }

    /// Write the whole log, creating parent directories as needed.
    pub fn save<T: Serialize>(&self, log: &HistoryLog<T>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, log.entries()).map_err(|source| {
            HistoryError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), entries = log.len(), "history saved");
        Ok(())
    }

    /// Load, record `record` at the front, and save. Returns the new
    /// entry's id.
    pub fn append<T: Serialize + DeserializeOwned>(&self, record: T) -> Result<Uuid, HistoryError> {
        let mut log = self.load::<T>()?;
        let id = log.push(record);
        self.save(&log)?;

        info!(path = %self.path.display(), %id, entries = log.len(), "history entry recorded");
        Ok(id)
    }

    /// Remove every entry, leaving an empty array on disk.
    pub fn clear(&self) -> Result<(), HistoryError> {
        let empty: HistoryLog<serde_json::Value> = HistoryLog::new(self.capacity)?;
        self.save(&empty)
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
