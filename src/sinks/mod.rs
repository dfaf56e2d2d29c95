//! Sink-specific constructors

pub mod console;
pub mod file;

pub use file::open_log_file;
