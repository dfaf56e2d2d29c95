//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{EmittedError, LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::{ClosingWriter, Sink, WriteClose},
    terminator::{MockTerminator, ProcessExit, Terminator},
    timestamp::TimestampFormat,
};
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::sync::Arc;

/// Prefix of lines written by [`Logger::abort`]
pub const ABORT_PREFIX: &str = "ABORT";

/// Callback invoked after every Error or Critical line
pub type ErrorHandler = Arc<dyn Fn(&EmittedError) + Send + Sync>;

/// A leveled logger writing one line per call into a single sink.
///
/// Every write and the final close happen under one lock, so lines from
/// concurrent callers never interleave. Once closed, further lines are
/// silently discarded.
///
/// # Example
///
/// ```
/// use sink_logger::prelude::*;
///
/// let mut logger = Logger::from_writer(std::io::sink());
/// logger.set_level(LogLevel::Debug);
/// logger.debug(&[&"cache size", &42]);
/// logger.infof(format_args!("listening on port {}", 8080));
/// logger.close().expect("stdout-like sinks close without I/O");
/// ```
pub struct Logger {
    name: Option<String>,
    level: LogLevel,
    timestamp_format: TimestampFormat,
    error_handler: Option<ErrorHandler>,
    terminator: Arc<dyn Terminator>,
    /// `None` once the logger is closed
    sink: Mutex<Option<Sink>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Wrap a sink with the default level (Info) and timestamp layout.
    #[must_use]
    pub fn from_sink(sink: Sink) -> Self {
        Self {
            name: None,
            level: LogLevel::default(),
            timestamp_format: TimestampFormat::default(),
            error_handler: None,
            terminator: Arc::new(ProcessExit),
            sink: Mutex::new(Some(sink)),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Wrap a writer the logger does not own; closing does no I/O.
    #[must_use]
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self::from_sink(Sink::detached(writer))
    }

    /// Wrap a writer whose `close` runs when the logger is closed.
    #[must_use]
    pub fn from_write_closer(writer: impl WriteClose + 'static) -> Self {
        Self::from_sink(Sink::closable(writer))
    }

    /// Wrap a writer together with the function that finalizes it.
    #[must_use]
    pub fn from_writer_with_closer<W, F>(writer: W, closer: F) -> Self
    where
        W: Write + Send + 'static,
        F: FnOnce(&mut W) -> io::Result<()> + Send + 'static,
    {
        Self::from_write_closer(ClosingWriter::new(writer, closer))
    }

    /// Build a logger from a configuration over the given sink.
    #[must_use]
    pub fn from_config(config: LoggerConfig, sink: Sink) -> Self {
        let mut logger = Self::from_sink(sink);
        logger.name = config.name;
        logger.level = config.level;
        logger.timestamp_format = config.timestamp_format;
        logger
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn set_timestamp_format(&mut self, format: TimestampFormat) {
        self.timestamp_format = format;
    }

    /// Set a custom strftime layout for the timestamp.
    ///
    /// Fails with [`LoggerError::InvalidConfiguration`] on an unknown
    /// specifier and keeps the current layout.
    pub fn set_layout(&mut self, layout: impl Into<String>) -> Result<()> {
        self.timestamp_format = TimestampFormat::try_custom(layout)?;
        Ok(())
    }

    /// Install the callback run after every Error or Critical line
    pub fn set_error_handler<F>(&mut self, handler: F)
    where
        F: Fn(&EmittedError) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
    }

    pub fn clear_error_handler(&mut self) {
        self.error_handler = None;
    }

    pub fn set_terminator(&mut self, terminator: Arc<dyn Terminator>) {
        self.terminator = terminator;
    }

    /// Whether a line at `level` would be written
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level)
    }

    pub fn is_closed(&self) -> bool {
        self.sink.lock().is_none()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Render a full line: `[<ts>] <PREFIX> - a b c\n`, or `[<ts>] a b c\n`
    /// without a prefix.
    fn format_line(&self, prefix: Option<&str>, args: &[&dyn Display]) -> String {
        let mut line = String::with_capacity(64);
        line.push('[');
        line.push_str(&self.timestamp_format.now());
        line.push(']');

        if let Some(prefix) = prefix {
            line.push(' ');
            line.push_str(prefix);
            line.push_str(" -");
        }

        for arg in args {
            // Writing into a String cannot fail
            let _ = write!(line, " {}", arg);
        }

        line.push('\n');
        line
    }

    fn write_line(&self, line: &str) {
        let mut guard = self.sink.lock();
        let Some(sink) = guard.as_mut() else {
            self.metrics.record_discarded();
            return;
        };

        match sink.write_all(line.as_bytes()) {
            Ok(()) => {
                self.metrics.record_emitted();
            }
            Err(e) => self.report_write_failure(&e),
        }
    }

    /// Write failures never reach the caller; alert on stderr on the first
    /// one and every 1000th after.
    fn report_write_failure(&self, error: &io::Error) {
        let failures = self.metrics.record_write_failure() + 1;
        if failures == 1 || failures % 1000 == 0 {
            eprintln!(
                "[LOGGER WARNING] Log sink write failed ({} failures so far): {}",
                failures, error
            );
        }
    }

    fn handle_error(&self, level: LogLevel, line: &str) {
        if let Some(ref handler) = self.error_handler {
            let line = line.strip_suffix('\n').unwrap_or(line);
            handler(&EmittedError::new(level, line));
        }
    }

    fn emit(&self, level: LogLevel, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let line = self.format_line(level.prefix(), args);
        self.write_line(&line);

        if level.triggers_handler() {
            self.handle_error(level, &line);
        }
    }

    /// Write a line without prefix, whatever the threshold.
    pub fn log(&self, args: &[&dyn Display]) {
        let line = self.format_line(None, args);
        self.write_line(&line);
    }

    pub fn logf(&self, args: fmt::Arguments<'_>) {
        self.log(&[&args]);
    }

    #[inline]
    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Debug, args);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debug(&[&args]);
    }

    #[inline]
    pub fn info(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Info, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args]);
    }

    #[inline]
    pub fn warn(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Warning, args);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warn(&[&args]);
    }

    #[inline]
    pub fn error(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Error, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args]);
    }

    #[inline]
    pub fn critical(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Critical, args);
    }

    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.critical(&[&args]);
    }

    /// Write an `ABORT` line whatever the threshold, then hand `code` to the
    /// terminator. With the default terminator this exits the process.
    pub fn abort(&self, code: i32, args: &[&dyn Display]) {
        let line = self.format_line(Some(ABORT_PREFIX), args);
        self.write_line(&line);

        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before abort: {}", e);
        }

        self.terminator.terminate(code);
    }

    pub fn abortf(&self, code: i32, args: fmt::Arguments<'_>) {
        self.abort(code, &[&args]);
    }

    /// Flush the sink. Does nothing once closed.
    pub fn flush(&self) -> Result<()> {
        if let Some(sink) = self.sink.lock().as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Close the logger.
    ///
    /// The first call runs the sink's closer, if any, under the write lock
    /// and returns its error. Later calls return `Ok(())`.
    pub fn close(&self) -> Result<()> {
        let mut guard = self.sink.lock();
        match guard.take() {
            Some(sink) => sink.close().map_err(|e| {
                LoggerError::io_operation(
                    "closing log sink",
                    self.name().unwrap_or("unnamed logger"),
                    e,
                )
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // None once closed
        let owns_sink = self.sink.lock().as_ref().map(Sink::has_closer);
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("timestamp_format", &self.timestamp_format)
            .field("has_error_handler", &self.error_handler.is_some())
            .field("owns_sink", &owns_sink)
            .field("closed", &owns_sink.is_none())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger closing with {} failed writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }

        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to close log sink during drop: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("audit")
///     .level(LogLevel::Warning)
///     .layout("%H:%M:%S")
///     .error_handler(|err| eprintln!("ALERT: {}", err))
///     .writer(std::io::sink());
/// assert_eq!(logger.name(), Some("audit"));
/// ```
pub struct LoggerBuilder {
    name: Option<String>,
    level: LogLevel,
    timestamp_format: TimestampFormat,
    error_handler: Option<ErrorHandler>,
    terminator: Arc<dyn Terminator>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            level: LogLevel::default(),
            timestamp_format: TimestampFormat::default(),
            error_handler: None,
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Apply every field of a configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.name = config.name;
        self.level = config.level;
        self.timestamp_format = config.timestamp_format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a custom strftime layout for timestamps.
    ///
    /// A layout chrono cannot render is stamped verbatim; go through
    /// [`TimestampFormat::try_custom`] to reject it instead.
    #[must_use = "builder methods return a new value"]
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.timestamp_format = TimestampFormat::Custom(layout.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EmittedError) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = terminator;
        self
    }

    /// Keep `abort` from exiting the process
    #[must_use = "builder methods return a new value"]
    pub fn mock(self) -> Self {
        self.terminator(Arc::new(MockTerminator::new()))
    }

    /// Build the Logger over an arbitrary sink
    pub fn sink(self, sink: Sink) -> Logger {
        let mut logger = Logger::from_sink(sink);
        logger.name = self.name;
        logger.level = self.level;
        logger.timestamp_format = self.timestamp_format;
        logger.error_handler = self.error_handler;
        logger.terminator = self.terminator;
        logger
    }

    pub fn writer(self, writer: impl Write + Send + 'static) -> Logger {
        self.sink(Sink::detached(writer))
    }

    pub fn write_closer(self, writer: impl WriteClose + 'static) -> Logger {
        self.sink(Sink::closable(writer))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }

        fn reset(&self) {
            self.0.lock().clear();
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn buffer_logger(level: LogLevel) -> (SharedBuffer, Logger) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .level(level)
            .layout("TS")
            .mock()
            .writer(buffer.clone());
        (buffer, logger)
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::from_writer(io::sink());
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.timestamp_format(), &TimestampFormat::Rfc3339Nano);
        assert!(logger.name().is_none());
        assert!(!logger.is_closed());
    }

    #[test]
    fn test_line_format() {
        let (buffer, logger) = buffer_logger(LogLevel::Debug);
        logger.info(&[&"answer", &42, &true]);
        assert_eq!(buffer.contents(), "[TS] INFO - answer 42 true\n");
    }

    #[test]
    fn test_log_has_no_prefix() {
        let (buffer, logger) = buffer_logger(LogLevel::Disable);
        logger.log(&[&"plain", &1]);
        assert_eq!(buffer.contents(), "[TS] plain 1\n");
    }

    #[test]
    fn test_zero_args() {
        let (buffer, logger) = buffer_logger(LogLevel::Debug);
        logger.warn(&[]);
        logger.log(&[]);
        assert_eq!(buffer.contents(), "[TS] WARNING -\n[TS]\n");
    }

    #[test]
    fn test_formatted_variant_is_single_argument() {
        let (buffer, logger) = buffer_logger(LogLevel::Debug);
        logger.debugf(format_args!("{} == {} must be {}", 42, 42, true));
        assert_eq!(buffer.contents(), "[TS] DEBUG - 42 == 42 must be true\n");
    }

    #[test]
    fn test_below_threshold_writes_nothing() {
        let (buffer, logger) = buffer_logger(LogLevel::Critical);
        logger.debug(&[&"x"]);
        logger.info(&[&"x"]);
        logger.warn(&[&"x"]);
        logger.error(&[&"x"]);
        assert!(buffer.contents().is_empty());
        assert_eq!(logger.metrics().filtered_count(), 4);
        assert_eq!(logger.metrics().emitted_count(), 0);
    }

    #[test]
    fn test_error_handler_receives_line() {
        let seen: Arc<Mutex<Vec<EmittedError>>> = Arc::default();
        let seen_clone = Arc::clone(&seen);
        let (buffer, mut logger) = buffer_logger(LogLevel::Debug);
        logger.set_error_handler(move |err| seen_clone.lock().push(err.clone()));

        logger.error(&[&"noooo"]);
        logger.criticalf(format_args!("{} {}", "ahhh", 2));
        logger.warn(&[&"not handled"]);
        logger.log(&[&"not handled"]);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].line(), "[TS] ERROR - noooo");
        assert_eq!(seen[0].level(), LogLevel::Error);
        assert_eq!(seen[1].to_string(), "[TS] CRITICAL - ahhh 2");
        assert!(buffer.contents().starts_with("[TS] ERROR - noooo\n"));
    }

    #[test]
    fn test_handler_not_called_when_filtered() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let (_buffer, mut logger) = buffer_logger(LogLevel::Critical);
        logger.set_error_handler(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        logger.error(&[&"filtered"]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.critical(&[&"passes"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "ERROR - boom")]
    fn test_panicking_handler_propagates() {
        let (_buffer, mut logger) = buffer_logger(LogLevel::Info);
        logger.set_error_handler(|err| panic!("{}", err));
        logger.error(&[&"boom"]);
    }

    #[test]
    fn test_abort_with_mock_terminator() {
        let buffer = SharedBuffer::default();
        let mock = Arc::new(MockTerminator::new());
        let logger = Logger::builder()
            .level(LogLevel::Disable)
            .layout("TS")
            .terminator(mock.clone())
            .writer(buffer.clone());

        logger.abort(42, &[&"aborting"]);
        assert_eq!(buffer.contents(), "[TS] ABORT - aborting\n");
        assert_eq!(mock.codes(), vec![42]);

        buffer.reset();
        logger.abortf(3, format_args!("code {}", 3));
        assert_eq!(buffer.contents(), "[TS] ABORT - code 3\n");
        assert_eq!(mock.last_code(), Some(3));
    }

    #[test]
    fn test_writes_after_close_are_discarded() {
        let (buffer, logger) = buffer_logger(LogLevel::Debug);
        logger.info(&[&"before"]);
        logger.close().expect("close detached sink");
        logger.info(&[&"after"]);
        logger.log(&[&"after"]);

        assert_eq!(buffer.contents(), "[TS] INFO - before\n");
        assert!(logger.is_closed());
        assert_eq!(logger.metrics().discarded_count(), 2);
        assert!(logger.flush().is_ok());
    }

    #[test]
    fn test_close_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let logger = Logger::from_writer_with_closer(Vec::new(), move |_buf: &mut Vec<u8>| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        logger.close().expect("first close");
        logger.close().expect("second close");
        drop(logger);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_propagates_closer_error() {
        let logger = Logger::builder().name("audit").sink(Sink::closable(
            ClosingWriter::new(Vec::new(), |_buf: &mut Vec<u8>| {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }),
        ));

        let err = logger.close().expect_err("closer error surfaces");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("audit"));
        assert!(logger.close().is_ok());
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let logger = Logger::from_writer(FailingWriter);
        logger.info(&[&"lost"]);
        logger.error(&[&"lost"]);
        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().emitted_count(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig::new()
            .with_name("svc")
            .with_level(LogLevel::Warning)
            .with_timestamp_format(TimestampFormat::custom("X"));
        let buffer = SharedBuffer::default();
        let logger = Logger::from_config(config, Sink::detached(buffer.clone()));

        assert_eq!(logger.name(), Some("svc"));
        logger.info(&[&"hidden"]);
        logger.warn(&[&"shown"]);
        assert_eq!(buffer.contents(), "[X] WARNING - shown\n");
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().writer(io::sink());
        assert_eq!(logger.level(), LogLevel::Info);
        assert!(logger.name().is_none());
    }

    #[test]
    fn test_debug_output() {
        let logger = Logger::builder().name("dbg").writer(io::sink());
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("dbg"));
        assert!(rendered.contains("owns_sink: Some(false)"));
        assert!(rendered.contains("closed: false"));

        logger.close().expect("close");
        assert!(format!("{:?}", logger).contains("owns_sink: None"));
    }

    #[test]
    fn test_unrenderable_layout_does_not_panic() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder().layout("%Q").writer(buffer.clone());
        logger.info(&[&"hello"]);
        assert_eq!(buffer.contents(), "[%Q] INFO - hello\n");
    }

    #[test]
    fn test_set_layout_rejects_unknown_specifier() {
        let mut logger = Logger::from_writer(io::sink());
        let err = logger.set_layout("%Y %Q").expect_err("bad layout rejected");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert_eq!(logger.timestamp_format(), &TimestampFormat::Rfc3339Nano);

        logger.set_layout("%H:%M").expect("valid layout");
        assert_eq!(logger.timestamp_format(), &TimestampFormat::custom("%H:%M"));
    }
}
