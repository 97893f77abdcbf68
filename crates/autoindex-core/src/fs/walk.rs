//! Recursive file discovery and root-relative path cleaning.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};
use crate::fs::path::{normalize_path, to_slash_normalized, RelativePath};

/// Collect every file nested anywhere beneath `dir`.
///
/// Depth-first, entries in whatever order the filesystem reports them.
/// Anything that is not a directory (symlinks included) counts as a file.
pub fn collect_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    collect_files_recursive(dir, &mut files)?;
    Ok(files)
}

fn collect_files_recursive(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = fs::read_dir(dir).map_err(read_dir_err)?;
    tracing::debug!(dir = %dir, "scanning directory");

    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        let path = Utf8PathBuf::try_from(entry.path())?;

        if entry.file_type()?.is_dir() {
            collect_files_recursive(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Turn absolute file paths into root-relative ones.
///
/// Returns one slot per input; the slot for `index_file` is `None` so the
/// generated index never references itself. Comparison is exact string
/// equality on the normalized paths. Only `root` and `index_file` are
/// validated; discovered names are taken as the filesystem reports them.
pub fn clean_file_paths(
    root: &Utf8Path,
    files: &[Utf8PathBuf],
    index_file: &Utf8Path,
) -> Result<Vec<Option<RelativePath>>> {
    let root = normalize_path(root)?;
    let index_file = normalize_path(index_file)?;

    files
        .iter()
        .map(|file| {
            let file = to_slash_normalized(file);
            if file == index_file {
                return Ok(None);
            }
            RelativePath::strip_root(&root, &file).map(Some)
        })
        .collect()
}
