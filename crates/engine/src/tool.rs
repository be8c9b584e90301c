use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_FORMAT_PROGRAM: &str = "clang-format";
pub const DEFAULT_TIDY_PROGRAM: &str = "clang-tidy";
pub const DEFAULT_HEADER_FILTER: &str = ".*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Format,
    Tidy,
}

impl ToolKind {
    /// Tool name shown in status lines, independent of the configured binary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Format => DEFAULT_FORMAT_PROGRAM,
            Self::Tidy => DEFAULT_TIDY_PROGRAM,
        }
    }
}

/// Argument-vector template for one external tool.
///
/// The command for a file is `program leading_args.. <file> trailing_args..`.
/// Nothing goes through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub kind: ToolKind,
    pub program: String,
    pub leading_args: Vec<OsString>,
    pub trailing_args: Vec<OsString>,
}

impl ToolCommand {
    /// `clang-format -i <file>`: reformat in place.
    pub fn clang_format(program: impl Into<String>) -> Self {
        Self {
            kind: ToolKind::Format,
            program: program.into(),
            leading_args: vec!["-i".into()],
            trailing_args: Vec::new(),
        }
    }

    /// `clang-tidy -header-filter=<filter> -p <build_path> <file> [-fix]`.
    ///
    /// `build_path` is the directory holding `compile_commands.json`.
    pub fn clang_tidy(
        program: impl Into<String>,
        build_path: &Path,
        header_filter: &str,
        fix: bool,
    ) -> Self {
        let trailing_args = if fix { vec!["-fix".into()] } else { Vec::new() };
        Self {
            kind: ToolKind::Tidy,
            program: program.into(),
            leading_args: vec![
                format!("-header-filter={header_filter}").into(),
                "-p".into(),
                build_path.as_os_str().to_owned(),
            ],
            trailing_args,
        }
    }

    #[must_use]
    pub fn invocation(&self, path: &Path) -> Invocation {
        let mut args = Vec::with_capacity(self.leading_args.len() + 1 + self.trailing_args.len());
        args.extend(self.leading_args.iter().cloned());
        args.push(path.as_os_str().to_owned());
        args.extend(self.trailing_args.iter().cloned());
        Invocation {
            kind: self.kind,
            program: self.program.clone(),
            args,
            path: path.to_path_buf(),
        }
    }
}

/// A fully resolved command for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: ToolKind,
    pub program: String,
    pub args: Vec<OsString>,
    pub path: PathBuf,
}

impl Invocation {
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    /// Shell-like rendering for status lines; arguments containing spaces are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
