// crates/cli/src/config.rs
use crate::args::{Args, ToolArgs};
use crate::error::{AppError, Result};
pub use srcsweep_engine::config::{Config, ConfigBuilder, ConfigFile, WalkConfig};
use srcsweep_engine::tool::ToolCommand;

/// Layering: built-in defaults, then the YAML file, then CLI flags.
impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let walk = walk_config_from_args(args)?;

        let tool = match &args.command {
            ToolArgs::Format(format) => ToolCommand::clang_format(format.binary.clone()),
            ToolArgs::Tidy(tidy) => {
                let build_path = match &tidy.build_path {
                    Some(path) => path.clone(),
                    None => walk.absolute_root()?,
                };
                ToolCommand::clang_tidy(
                    tidy.binary.clone(),
                    &build_path,
                    &tidy.header_filter,
                    tidy.fix,
                )
            }
        };

        Ok(ConfigBuilder::default()
            .walk(walk)
            .tool(tool)
            .dry_run(args.behavior.dry_run)
            .finish()?)
    }
}

fn walk_config_from_args(args: &Args) -> Result<WalkConfig> {
    let layout = &args.layout;
    let mut walk = WalkConfig::default();

    if let Some(path) = &layout.config {
        walk = walk.merged_with(ConfigFile::load(path)?);
    }
    if let Some(root) = &layout.root {
        walk.root = root.clone();
    }
    if !layout.dirs.is_empty() {
        walk.subdirectories = layout.dirs.clone();
    }
    if !layout.exts.is_empty() {
        walk.extensions = layout.exts.clone();
    }
    Ok(walk)
}
