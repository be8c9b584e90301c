// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filter;
pub mod runner;
pub mod stats;
pub mod tool;
pub mod walker;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::runner::{FileAction, ToolRunner};
use crate::stats::RunResult;
use crate::tool::Invocation;

/// Sweep the configured directories and run the tool on every match.
///
/// `announce` is called once per matched file, before the tool starts.
///
/// # Errors
///
/// Returns an error for a missing or unlistable directory or an empty
/// extension list. A tool that exits non-zero or cannot be started is
/// reported in `RunResult::failures` instead.
pub fn run<A>(config: &Config, announce: A) -> Result<RunResult>
where
    A: FnMut(&Invocation),
{
    let root = config.walk.absolute_root()?;
    let filter = config.walk.filter();
    if filter.is_empty() {
        return Err(EngineError::Config("no file extensions configured".into()));
    }

    log::debug!(
        "sweeping {} ({} directories) with {:?} tool `{}`",
        root.display(),
        config.walk.subdirectories.len(),
        config.tool.kind,
        config.tool.program
    );

    let mut runner = ToolRunner::new(config.tool.clone(), config.dry_run, announce);
    walker::walk(
        &root,
        config.walk.subdirectories.as_slice(),
        |p| filter.matches(p),
        |p| runner.on_file(p),
    )?;

    let result = runner.finish();
    log::info!(
        "{} files matched, {} tool failures",
        result.matched.len(),
        result.failures.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, WalkConfigBuilder};
    use crate::tool::ToolCommand;
    use std::fs;
    use std::path::Path;

    fn project() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (dir, file) in [
            ("include", "window.hpp"),
            ("src", "window.cpp"),
            ("src", "CMakeLists.txt"),
            ("tests", "circle.cpp"),
        ] {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
            fs::write(tmp.path().join(dir).join(file), "").unwrap();
        }
        tmp
    }

    fn config(root: &Path, tool: ToolCommand) -> Config {
        let walk = WalkConfigBuilder::default().root(root).build().unwrap();
        ConfigBuilder::default()
            .walk(walk)
            .tool(tool)
            .dry_run(true)
            .finish()
            .unwrap()
    }

    #[test]
    fn dry_run_visits_every_source_in_directory_order() {
        let tmp = project();
        let cfg = config(tmp.path(), ToolCommand::clang_format("clang-format"));

        let mut lines = Vec::new();
        let result = run(&cfg, |inv| lines.push(inv.path.clone())).unwrap();

        let root = std::path::absolute(tmp.path()).unwrap();
        assert_eq!(
            result.matched,
            vec![
                root.join("include/window.hpp"),
                root.join("src/window.cpp"),
                root.join("tests/circle.cpp"),
            ]
        );
        assert_eq!(lines, result.matched);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn tidy_fix_reaches_every_invocation() {
        let tmp = project();
        let tool = ToolCommand::clang_tidy("clang-tidy", tmp.path(), ".*", true);
        let cfg = config(tmp.path(), tool);

        let mut invocations = Vec::new();
        run(&cfg, |inv| invocations.push(inv.clone())).unwrap();

        assert_eq!(invocations.len(), 3);
        for inv in &invocations {
            let last = inv.args.last().map(|a| a.to_string_lossy().into_owned());
            assert_eq!(last.as_deref(), Some("-fix"));
        }
    }

    #[test]
    fn missing_tests_directory_aborts() {
        let tmp = project();
        fs::remove_dir_all(tmp.path().join("tests")).unwrap();
        let cfg = config(tmp.path(), ToolCommand::clang_format("clang-format"));

        let err = run(&cfg, |_| {}).unwrap_err();
        assert!(matches!(err, EngineError::DirectoryNotFound { .. }));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let tmp = project();
        let mut cfg = config(tmp.path(), ToolCommand::clang_format("clang-format"));
        cfg.walk.extensions.clear();

        let err = run(&cfg, |_| {}).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
