//! Byte sinks a logger writes into

use std::fs::File;
use std::io::{self, Write};

/// A writer that owns a resource needing explicit finalization.
pub trait WriteClose: Write + Send {
    /// Release the underlying resource. Called at most once by a logger.
    fn close(&mut self) -> io::Result<()>;
}

impl WriteClose for File {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

/// Pairs any writer with a closer function.
///
/// # Example
///
/// ```
/// use sink_logger::core::sink::ClosingWriter;
/// use sink_logger::Logger;
///
/// let writer = ClosingWriter::new(Vec::new(), |buf: &mut Vec<u8>| {
///     buf.clear();
///     Ok(())
/// });
/// let logger = Logger::from_write_closer(writer);
/// logger.close().expect("closer succeeds");
/// ```
pub struct ClosingWriter<W, F> {
    inner: W,
    closer: Option<F>,
}

impl<W, F> ClosingWriter<W, F>
where
    W: Write + Send,
    F: FnOnce(&mut W) -> io::Result<()> + Send,
{
    pub fn new(inner: W, closer: F) -> Self {
        Self {
            inner,
            closer: Some(closer),
        }
    }
}

impl<W, F> Write for ClosingWriter<W, F>
where
    W: Write + Send,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W, F> WriteClose for ClosingWriter<W, F>
where
    W: Write + Send,
    F: FnOnce(&mut W) -> io::Result<()> + Send,
{
    fn close(&mut self) -> io::Result<()> {
        match self.closer.take() {
            Some(closer) => closer(&mut self.inner),
            None => Ok(()),
        }
    }
}

/// Destination of a logger, tagged by whether the logger owns its lifecycle.
pub enum Sink {
    /// A borrowed stream such as stdout; closing it does no I/O.
    Detached(Box<dyn Write + Send>),
    /// A resource the logger opened or was handed ownership of.
    Closable(Box<dyn WriteClose>),
}

impl Sink {
    pub fn detached(writer: impl Write + Send + 'static) -> Self {
        Sink::Detached(Box::new(writer))
    }

    pub fn closable(writer: impl WriteClose + 'static) -> Self {
        Sink::Closable(Box::new(writer))
    }

    /// Whether closing this sink runs a finalizer.
    pub fn has_closer(&self) -> bool {
        matches!(self, Sink::Closable(_))
    }

    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Sink::Detached(w) => w.write_all(bytes),
            Sink::Closable(w) => w.write_all(bytes),
        }
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Detached(w) => w.flush(),
            Sink::Closable(w) => w.flush(),
        }
    }

    /// Consume the sink, running its finalizer if it has one.
    pub(crate) fn close(self) -> io::Result<()> {
        match self {
            Sink::Detached(_) => Ok(()),
            Sink::Closable(mut w) => w.close(),
        }
    }
}
