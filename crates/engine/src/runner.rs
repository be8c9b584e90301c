use crate::error::Result;
use crate::stats::{FailureKind, RunResult, ToolFailure};
use crate::tool::{Invocation, ToolCommand};
use std::path::Path;

/// What happens to a file the walker selected.
pub trait FileAction {
    /// # Errors
    /// Any error aborts the walk.
    fn on_file(&mut self, path: &Path) -> Result<()>;
}

impl<F> FileAction for F
where
    F: FnMut(&Path) -> Result<()>,
{
    fn on_file(&mut self, path: &Path) -> Result<()> {
        self(path)
    }
}

/// Runs one external tool per file, sequentially, with inherited stdio.
///
/// A non-zero exit or a program that cannot be started is recorded and
/// logged; neither stops the sweep.
pub struct ToolRunner<A> {
    tool: ToolCommand,
    dry_run: bool,
    announce: A,
    result: RunResult,
}

impl<A> ToolRunner<A>
where
    A: FnMut(&Invocation),
{
    pub fn new(tool: ToolCommand, dry_run: bool, announce: A) -> Self {
        Self {
            tool,
            dry_run,
            announce,
            result: RunResult::default(),
        }
    }

    #[must_use]
    pub fn finish(self) -> RunResult {
        self.result
    }
}

impl<A> FileAction for ToolRunner<A>
where
    A: FnMut(&Invocation),
{
    fn on_file(&mut self, path: &Path) -> Result<()> {
        let inv = self.tool.invocation(path);
        self.result.matched.push(path.to_path_buf());
        (self.announce)(&inv);

        if self.dry_run {
            return Ok(());
        }

        log::debug!("spawning {inv}");
        let kind = match inv.to_command().status() {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => {
                log::warn!("{} exited with {status} for {}", inv.program, path.display());
                FailureKind::Exit(status.code())
            }
            Err(e) => {
                log::warn!("failed to launch {} for {}: {e}", inv.program, path.display());
                FailureKind::Launch(e.to_string())
            }
        };
        self.result.failures.push(ToolFailure {
            path: path.to_path_buf(),
            kind,
        });
        Ok(())
    }
}
