// src/progress.rs
/// Lightweight progress reporting used by long-running fetch workflows.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item finished. `seq` counts completions, 1-based.
    fn item_done(&mut self, _seq: usize, _label: &str) {}

    /// One item failed; the workflow continues without it.
    fn item_failed(&mut self, _seq: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
