use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::Path;

/// Visit the immediate files of each `subdirectories` entry under `root`.
///
/// Directories are processed in the given order. Within a directory, entries
/// come in whatever order the OS listing returns. Nested directories are not
/// descended into and are never offered to `is_match`.
///
/// Paths handed to the callbacks are `root.join(subdir).join(name)`, so they
/// are absolute whenever `root` is.
///
/// # Errors
/// Fails fast with [`EngineError::DirectoryNotFound`] or
/// [`EngineError::NotADirectory`] on the first unusable directory, or with
/// [`EngineError::ReadDir`] when an existing directory cannot be listed;
/// directories after it are not visited. An error returned by `on_match`
/// stops the walk and is returned unchanged.
pub fn walk<D, M, F>(root: &Path, subdirectories: &[D], is_match: M, mut on_match: F) -> Result<()>
where
    D: AsRef<Path>,
    M: Fn(&Path) -> bool,
    F: FnMut(&Path) -> Result<()>,
{
    for sub in subdirectories {
        let dir = root.join(sub.as_ref());
        ensure_listable(&dir)?;
        log::trace!("listing {}", dir.display());

        let listing = WalkBuilder::new(&dir)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(1))
            .build();

        for entry in listing {
            let entry = entry.map_err(|source| EngineError::ReadDir {
                path: dir.clone(),
                source,
            })?;
            // depth 0 is `dir` itself
            if entry.depth() == 0 || entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }
            let path = entry.path();
            if is_match(path) {
                on_match(path)?;
            }
        }
    }
    Ok(())
}

fn ensure_listable(dir: &Path) -> Result<()> {
    let meta = std::fs::metadata(dir).map_err(|source| EngineError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(EngineError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}
