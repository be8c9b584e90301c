use std::path::PathBuf;

/// Why a tool run did not succeed for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The tool ran and exited unsuccessfully. `None` when killed by a signal.
    Exit(Option<i32>),
    /// The program could not be started (not installed, not executable, ...).
    Launch(String),
}

/// A file whose tool run did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub matched: Vec<PathBuf>,
    pub failures: Vec<ToolFailure>,
}

impl RunResult {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.matched.len().saturating_sub(self.failures.len())
    }
}
