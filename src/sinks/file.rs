//! File sink implementation

use crate::core::{LoggerError, Result, WriteSyncer};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file through a buffered writer.
///
/// `sync` flushes the buffer and asks the OS to persist the data.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
    #[cfg(feature = "file")]
    locked: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            #[cfg(feature = "file")]
            locked: false,
        })
    }

    /// Take an exclusive advisory lock so no other process appends to the
    /// same file. Fails if the lock is already held.
    #[cfg(feature = "file")]
    pub fn with_exclusive_lock(mut self) -> Result<Self> {
        use fs2::FileExt;

        self.writer
            .get_ref()
            .try_lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        self.locked = true;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WriteSyncer for FileSink {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.flush();
        #[cfg(feature = "file")]
        if self.locked {
            let _ = fs2::FileExt::unlock(self.writer.get_ref());
        }
    }
}
