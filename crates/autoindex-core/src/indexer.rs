//! Entry point: walk the index file's directory and render its index.

use camino::{Utf8Path, Utf8PathBuf};

use crate::assembler::build_paths_yaml_string;
use crate::config::{BoatsRc, GetIndexYamlOptions};
use crate::error::Result;
use crate::fs::{clean_file_paths, collect_files, normalize_path};

/// Generates index documents relative to an explicit working directory.
///
/// Each call is an independent pass over the current filesystem; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct AutoIndexer {
    working_dir: Utf8PathBuf,
}

impl AutoIndexer {
    pub fn new(working_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Resolve against the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
        Ok(Self::new(cwd))
    }

    pub fn working_dir(&self) -> &Utf8Path {
        &self.working_dir
    }

    /// Build the YAML index for `index_file`, a path relative to the working
    /// directory (absolute paths are used as is).
    ///
    /// Every file under the index file's directory is referenced except the
    /// index file itself. The result is returned, not written.
    pub fn get_index_yaml(
        &self,
        index_file: &Utf8Path,
        boatsrc: &BoatsRc,
        options: &GetIndexYamlOptions,
    ) -> Result<String> {
        let working_dir = if self.working_dir.is_absolute() {
            self.working_dir.clone()
        } else {
            Utf8PathBuf::try_from(std::path::absolute(&self.working_dir)?)?
        };
        let index_path = Utf8PathBuf::from(normalize_path(&working_dir.join(index_file))?);
        let dir = index_path
            .parent()
            .map_or_else(|| Utf8PathBuf::from("/"), Utf8Path::to_path_buf);

        let _span = tracing::debug_span!("get_index_yaml", index = %index_path).entered();

        let files = collect_files(&dir)?;
        let mut clean_paths = clean_file_paths(&dir, &files, &index_path)?;
        // filesystem order is not stable across platforms
        clean_paths.sort();

        tracing::info!(
            root = %dir,
            files = files.len(),
            paths = options.paths,
            channels = options.channels,
            components = options.components,
            "building index"
        );
        if !options.any_mode() {
            tracing::warn!("no indexing mode enabled, index will be empty");
        }

        build_paths_yaml_string(&clean_paths, boatsrc, options)
    }
}

/// One-shot form of [`AutoIndexer::get_index_yaml`].
pub fn get_index_yaml(
    working_dir: &Utf8Path,
    index_file: &Utf8Path,
    boatsrc: &BoatsRc,
    options: &GetIndexYamlOptions,
) -> Result<String> {
    AutoIndexer::new(working_dir).get_index_yaml(index_file, boatsrc, options)
}
