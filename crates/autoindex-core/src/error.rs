use camino::Utf8PathBuf;
use thiserror::Error;

/// Canonical errors for autoindex core
#[derive(Error, Debug)]
pub enum Error {
    // -------- FS / Paths --------
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    #[error("invalid path provided: {0}")]
    InvalidPath(String),

    // -------- Config --------
    #[error("failed to parse {path}: {source}")]
    Config {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid channel separator rule: {0}")]
    InvalidRule(String),

    // -------- Wrapped sources --------
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl From<camino::FromPathBufError> for Error {
    fn from(err: camino::FromPathBufError) -> Self {
        Error::NonUtf8Path(err.into_path_buf().display().to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
