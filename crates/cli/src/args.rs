// crates/cli/src/args.rs
use crate::options::ColorChoice;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};
use srcsweep_engine::tool::{DEFAULT_FORMAT_PROGRAM, DEFAULT_HEADER_FILTER, DEFAULT_TIDY_PROGRAM};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "srcsweep",
    version,
    about = "Run clang-format or clang-tidy over a project's include/src/tests directories"
)]
pub struct Args {
    #[command(flatten)]
    pub layout: LayoutOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(subcommand)]
    pub command: ToolArgs,
}

#[derive(ClapArgs, Debug)]
pub struct LayoutOptions {
    /// Project root the directories are resolved against [default: .]
    #[arg(long, global = true, value_hint = ValueHint::DirPath, help_heading = "Layout")]
    pub root: Option<PathBuf>,

    /// Directory to scan, relative to the root (repeatable; replaces include,src,tests)
    #[arg(
        long = "dir",
        value_delimiter = ',',
        global = true,
        value_hint = ValueHint::DirPath,
        help_heading = "Layout"
    )]
    pub dirs: Vec<PathBuf>,

    /// File extension to process (repeatable; replaces cpp,hpp)
    #[arg(long = "ext", value_delimiter = ',', global = true, help_heading = "Layout")]
    pub exts: Vec<String>,

    /// YAML file with root/subdirectories/extensions
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "Layout")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Print the commands without running them
    #[arg(long, global = true, help_heading = "Behavior")]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value = "auto", global = true, help_heading = "Behavior")]
    pub color: ColorChoice,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Behavior")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Behavior")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ToolArgs {
    /// Reformat every matching file in place with clang-format
    Format(FormatArgs),
    /// Run clang-tidy on every matching file
    Tidy(TidyArgs),
}

#[derive(ClapArgs, Debug)]
pub struct FormatArgs {
    /// clang-format executable
    #[arg(long, default_value = DEFAULT_FORMAT_PROGRAM)]
    pub binary: String,
}

#[derive(ClapArgs, Debug)]
pub struct TidyArgs {
    /// clang-tidy executable
    #[arg(long, default_value = DEFAULT_TIDY_PROGRAM)]
    pub binary: String,

    /// Apply suggested fixes
    #[arg(long)]
    pub fix: bool,

    /// Directory containing compile_commands.json [default: the project root]
    #[arg(short = 'p', long, value_hint = ValueHint::DirPath)]
    pub build_path: Option<PathBuf>,

    /// Regex of headers whose diagnostics are shown
    #[arg(long, default_value = DEFAULT_HEADER_FILTER)]
    pub header_filter: String,
}
