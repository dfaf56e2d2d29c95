//! Loggers over the process output streams

use crate::core::{Logger, LoggerBuilder};
use std::io;

impl Logger {
    /// Logger writing to standard output. Closing it does no I/O.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Logger writing to standard error. Closing it does no I/O.
    #[must_use]
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }
}

impl LoggerBuilder {
    pub fn stdout(self) -> Logger {
        self.writer(io::stdout())
    }

    pub fn stderr(self) -> Logger {
        self.writer(io::stderr())
    }
}
