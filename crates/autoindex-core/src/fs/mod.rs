//! FS layer: directory traversal and the root-relative path type
//! every index entry is keyed from.

pub mod path;
pub mod walk;

pub use path::{normalize_path, RelativePath};
pub use walk::{clean_file_paths, collect_files};
