//! File-backed loggers

use crate::core::{Logger, LoggerBuilder, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::Path;

/// Open `path` for appending, creating it with permission bits `mode` if it
/// does not exist, and position the cursor at end of file.
///
/// `mode` is only honored on Unix.
pub fn open_log_file(path: impl AsRef<Path>, mode: u32) -> Result<File> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path).map_err(|e| {
        LoggerError::io_operation("opening log file", path.display().to_string(), e)
    })?;

    file.seek(SeekFrom::End(0)).map_err(|e| {
        LoggerError::io_operation("seeking to end of log file", path.display().to_string(), e)
    })?;

    Ok(file)
}

impl Logger {
    /// Take ownership of an open file; closing the logger syncs and releases it.
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self::from_write_closer(file)
    }

    /// Open (or create) a log file in append mode.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sink_logger::Logger;
    ///
    /// let logger = Logger::from_path("/var/log/app.log", 0o640)?;
    /// logger.info(&[&"service started"]);
    /// logger.close()?;
    /// # Ok::<(), sink_logger::LoggerError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>, mode: u32) -> Result<Self> {
        Ok(Self::from_file(open_log_file(path, mode)?))
    }
}

impl LoggerBuilder {
    /// Build the Logger over a file opened with [`open_log_file`]
    pub fn path(self, path: impl AsRef<Path>, mode: u32) -> Result<Logger> {
        Ok(self.write_closer(open_log_file(path, mode)?))
    }
}
