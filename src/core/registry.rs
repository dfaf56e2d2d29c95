//! Named registry of shared loggers
//!
//! Lets independent call sites share one logger by name. A registry is an
//! ordinary value: create one at startup and hand it to whoever needs it.
//! Entries are never replaced or removed.

use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// # Example
///
/// ```
/// use sink_logger::{Logger, LoggerRegistry};
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::new();
/// let audit = Arc::new(Logger::builder().name("audit").writer(std::io::sink()));
///
/// registry.share(Arc::clone(&audit)).expect("first registration");
/// assert!(registry.share(audit).is_err());
/// assert!(registry.get("audit").is_some());
/// ```
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `logger` under `name`.
    ///
    /// Fails with [`LoggerError::AlreadyRegistered`] if the name is taken; the
    /// existing entry is kept.
    pub fn register(&self, name: impl Into<String>, logger: Arc<Logger>) -> Result<()> {
        let name = name.into();
        let mut loggers = self.loggers.lock();
        if loggers.contains_key(&name) {
            return Err(LoggerError::already_registered(name));
        }
        loggers.insert(name, logger);
        Ok(())
    }

    /// Register `logger` under its own name.
    pub fn share(&self, logger: Arc<Logger>) -> Result<()> {
        let name = logger
            .name()
            .map(str::to_owned)
            .ok_or_else(|| LoggerError::config("LoggerRegistry", "cannot share an unnamed logger"))?;
        self.register(name, logger)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
