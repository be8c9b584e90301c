use crate::error::{EngineError, Result};
use crate::filter::ExtensionFilter;
use crate::tool::ToolCommand;
use derive_builder::Builder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project directories scanned when nothing else is configured:
/// public headers, sources and tests.
pub const DEFAULT_SUBDIRECTORIES: &[&str] = &["include", "src", "tests"];

/// Suffixes recognised as C++ sources or headers.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "hpp"];

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct WalkConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "default_subdirectories()")]
    pub subdirectories: Vec<PathBuf>,
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            subdirectories: default_subdirectories(),
            extensions: default_extensions(),
        }
    }
}

fn default_subdirectories() -> Vec<PathBuf> {
    DEFAULT_SUBDIRECTORIES.iter().map(PathBuf::from).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

impl WalkConfig {
    /// Resolve `root` to an absolute path without touching the filesystem.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn absolute_root(&self) -> Result<PathBuf> {
        Ok(std::path::absolute(&self.root)?)
    }

    #[must_use]
    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(self.extensions.as_slice())
    }

    /// Overlay the values present in a config file.
    #[must_use]
    pub fn merged_with(mut self, file: ConfigFile) -> Self {
        if let Some(root) = file.root {
            self.root = root;
        }
        if let Some(dirs) = file.subdirectories {
            self.subdirectories = dirs;
        }
        if let Some(exts) = file.extensions {
            self.extensions = exts;
        }
        self
    }
}

/// On-disk YAML layout description. Every key is optional.
///
/// ```yaml
/// root: ..
/// subdirectories: [include, src, tests]
/// extensions: [cpp, hpp]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub subdirectories: Option<Vec<PathBuf>>,
    pub extensions: Option<Vec<String>>,
}

impl ConfigFile {
    /// Load and parse a YAML config file.
    ///
    /// A relative `root` is resolved against the directory holding the file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML for this layout.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file = Self::parse(&text)?;
        if let Some(root) = file.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            file.root = Some(if root.is_relative() {
                base.join(root)
            } else {
                root
            });
        }
        Ok(file)
    }

    /// # Errors
    /// Returns an error if `text` is not valid YAML for this layout.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkConfig,
    pub tool: ToolCommand,
    #[builder(default)]
    pub dry_run: bool,
}

impl ConfigBuilder {
    /// # Errors
    /// Returns an error if a required field (the tool) was never set.
    pub fn finish(&self) -> Result<Config> {
        self.build().map_err(|e| EngineError::Config(e.to_string()))
    }
}
