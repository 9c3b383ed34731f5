//! Mapping manifest filenames onto the family's output directory.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Joins a `/`-separated manifest filename under `root`.
///
/// Rejects absolute paths, `..`, and anything else that would escape `root`
/// or name the directory itself.
pub fn resolve(root: &Path, filename: &str) -> Result<PathBuf> {
    let rel = Path::new(filename);
    let mut out = root.to_path_buf();
    let mut pushed = false;
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                out.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::UnsafePath(filename.to_string()));
            }
        }
    }
    if !pushed || filename.contains('\\') {
        return Err(Error::UnsafePath(filename.to_string()));
    }
    Ok(out)
}

/// Creates the parent directory of `path` (and its ancestors) if missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }
    Ok(())
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, data).map_err(|e| Error::io("write", path, e))
}
