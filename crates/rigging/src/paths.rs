//! Project root and output directory resolution.
//!
//! Every later path is composed from the root, so a relative root is
//! rejected here rather than silently misplacing output.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use rigging_config::DEFAULT_DEST_DIR;

use crate::error::{Result, SynthError};

/// Join `path` onto `base` and normalize `.`/`..` lexically.
///
/// An absolute `path` replaces `base`, so resolving an already-resolved
/// path yields it unchanged.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    base.join(path).clean()
}

/// Compute the absolute project root.
///
/// `caller` is the location of the configuration file that declared the
/// project. When known, `root_dir` (default `.`) is taken relative to its
/// directory; otherwise `root_dir` is used verbatim.
pub fn resolve_root(root_dir: Option<&Path>, caller: Option<&Path>) -> Result<PathBuf> {
    let root = match caller {
        Some(caller) => {
            let base = caller.parent().unwrap_or_else(|| Path::new(""));
            Some(resolve(base, root_dir.unwrap_or_else(|| Path::new("."))))
        }
        None => root_dir.map(Path::clean),
    };

    let root = root.ok_or(SynthError::RootUndetermined)?;
    if !root.is_absolute() {
        return Err(SynthError::RootNotAbsolute { path: root });
    }
    Ok(root)
}

/// Absolute output directory: `dest_dir` (default `dist`) under `root`.
pub fn resolve_dest(root: &Path, dest_dir: Option<&Path>) -> PathBuf {
    resolve(root, dest_dir.unwrap_or_else(|| Path::new(DEFAULT_DEST_DIR)))
}
