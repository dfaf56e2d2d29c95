//! Process termination used by `Logger::abort`

use parking_lot::Mutex;

/// What happens after an abort line has been written.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Exits the process with the abort code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Records abort codes and returns control to the caller.
///
/// Intended for tests that need to assert on abort output.
#[derive(Debug, Default)]
pub struct MockTerminator {
    codes: Mutex<Vec<i32>>,
}

impl MockTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes passed to `terminate`, oldest first
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }

    pub fn last_code(&self) -> Option<i32> {
        self.codes.lock().last().copied()
    }
}

impl Terminator for MockTerminator {
    fn terminate(&self, code: i32) {
        self.codes.lock().push(code);
    }
}
