// Rust guideline compliant 2026-08-28

//! Storage module for the tasks document.
//!
//! This module reads and writes the whole `tasks.json` document, with
//! atomic writes and file locking for concurrent access. Loading is
//! forgiving: a missing, unparsable, or invalid document yields the
//! default empty document with a warning rather than an error.

use crate::models::TaskData;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Storage engine for the tasks document.
///
/// Manages JSON file operations with atomic replacement and file
/// locking for concurrent access.
pub struct Storage {
    /// Path to the tasks JSON file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tasks JSON file
    ///
    /// # Returns
    ///
    /// A new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    /// Validates that the path is suitable for storage operations.
    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the tasks file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads the tasks document.
    ///
    /// Never fails on bad input: a missing file is a fresh start, and a
    /// file that cannot be parsed or fails validation is reported on
    /// stderr and replaced in memory by the default document. Subtask
    /// parent back-references are normalized after load.
    ///
    /// # Returns
    ///
    /// The loaded (or default) document.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures other than the file being
    /// absent.
    pub fn load(&self) -> Result<TaskData> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TaskData::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let mut data: TaskData = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                eprintln!(
                    "Warning: could not parse {}: {}; starting from an empty document",
                    self.path.display(),
                    e
                );
                return Ok(TaskData::default());
            }
        };

        data.normalize();
        if let Err(e) = data.validate() {
            eprintln!(
                "Warning: invalid document at {}: {}; starting from an empty document",
                self.path.display(),
                e
            );
            return Ok(TaskData::default());
        }

        Ok(data)
    }

    /// Saves the tasks document.
    ///
    /// Validates first, then writes to a temp file in the same
    /// directory and renames it over the target so readers never
    /// observe a partial document.
    ///
    /// # Arguments
    ///
    /// * `data` - The document to save
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save(&self, data: &TaskData) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        data.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&temp_path)?;
            let json = serde_json::to_string_pretty(data)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl Storage {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// Acquires a platform-appropriate file lock (flock on Unix,
    /// LockFileEx on Windows) before executing the closure, ensuring
    /// that concurrent write operations are serialized.
    ///
    /// # Arguments
    ///
    /// * `f` - The closure to execute while holding the lock
    ///
    /// # Returns
    ///
    /// The result of the closure execution.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure
    /// returns an error.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        // fs2 has no timeout support; try_lock fails fast instead of
        // blocking forever on a stuck writer.
        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        // Ensure lock is released (even if closure fails)
        let _ = lock_file.unlock();

        result
    }
}
