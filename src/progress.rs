// src/progress.rs
use std::io::Write;

/// Lightweight progress reporting used by long-running loops (per-PEP fetches,
/// per-article fetches). Frontends implement this to surface status to users;
/// it never changes control flow.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Called when one logical unit completes (e.g., a PEP page was processed).
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// `done/total` counter redrawn in place on stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r\x1b[2K{}/{} {}", self.done, self.total, label);
        let _ = err.flush();
    }

    fn finish(&mut self) {
        if self.done > 0 {
            eprintln!();
        }
    }
}
