// crates/cli/src/presentation.rs
use owo_colors::OwoColorize;
use srcsweep_engine::stats::RunResult;
use srcsweep_engine::tool::Invocation;

/// Formats the per-file status line and the closing summary.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    color: bool,
    dry_run: bool,
}

impl Presenter {
    #[must_use]
    pub const fn new(color: bool, dry_run: bool) -> Self {
        Self { color, dry_run }
    }

    #[must_use]
    pub fn status_line(&self, inv: &Invocation) -> String {
        if self.dry_run {
            let label = "Would run:";
            return if self.color {
                format!("{} {}", label.cyan(), inv.yellow())
            } else {
                format!("{label} {inv}")
            };
        }

        let label = format!("Running {} for:", inv.kind.name());
        let path = inv.path.display();
        if self.color {
            format!("{} {}", label.cyan(), path.yellow())
        } else {
            format!("{label} {path}")
        }
    }

    #[must_use]
    pub fn summary_line(&self, result: &RunResult) -> String {
        let files = plural(result.matched.len(), "file");
        if self.dry_run {
            return format!("{files} matched (dry run)");
        }
        let failed = result.failures.len();
        if failed == 0 {
            let line = format!("{files} processed");
            if self.color {
                line.green().to_string()
            } else {
                line
            }
        } else {
            let ok = result.succeeded();
            let line = format!("{files} processed, {ok} succeeded, {failed} failed");
            if self.color {
                line.red().to_string()
            } else {
                line
            }
        }
    }

    pub fn print_status(&self, inv: &Invocation) {
        println!("{}", self.status_line(inv));
    }

    pub fn print_summary(&self, result: &RunResult) {
        println!("{}", self.summary_line(result));
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
