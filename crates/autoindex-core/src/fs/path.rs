use std::fmt;

use camino::Utf8Path;
use normalize_path::NormalizePath;
use path_slash::PathExt;

use crate::error::{Error, Result};

/// Normalize the provided path to the canonical slash format.
///
/// Rules:
/// - Must be non-empty, no control characters
/// - Normalize OS separators, collapse `.`/`..`
/// - Convert to POSIX slashes
/// - Strip trailing slashes (except root)
pub fn normalize_path(path: &Utf8Path) -> Result<String> {
    let s = path.as_str();
    if s.is_empty() {
        return Err(Error::InvalidPath("empty path".to_string()));
    }
    if s.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidPath(format!("contains control chars: {s:?}")));
    }

    Ok(to_slash_normalized(path))
}

/// Same normalization without validation, for paths the filesystem handed us.
pub(crate) fn to_slash_normalized(path: &Utf8Path) -> String {
    let mut out = path
        .as_std_path()
        .normalize()
        .to_slash_lossy()
        .into_owned();

    // remove trailing slashes (keep "/" as-is)
    if out.len() > 1 {
        while out.ends_with('/') {
            out.pop();
        }
    }
    out
}

/// A root-relative, forward-slash path such as `/users/list.get.yml`.
///
/// Always carries a leading `/`, which is what lets [`RelativePath::to_ref`]
/// produce `./users/list.get.yml` by prefixing a single dot.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Build from any slash or OS path, normalizing it first.
    pub fn new(path: &str) -> Result<Self> {
        let normalized = normalize_path(Utf8Path::new(path))?;
        Ok(Self::from_normalized(&normalized))
    }

    /// Strip `root` off an absolute, already normalized `absolute` path.
    pub fn strip_root(root: &str, absolute: &str) -> Result<Self> {
        let rest = absolute.strip_prefix(root).ok_or_else(|| {
            Error::InvalidPath(format!("{absolute} is not inside {root}"))
        })?;
        Ok(Self::from_normalized(rest))
    }

    fn from_normalized(rest: &str) -> Self {
        if rest.starts_with('/') {
            Self(rest.to_owned())
        } else {
            Self(format!("/{rest}"))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parent directory, `/` for top-level files.
    pub fn dirname(&self) -> &str {
        match self.0.rfind('/') {
            Some(0) | None => "/",
            Some(i) => &self.0[..i],
        }
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(i) => &self.0[i + 1..],
            None => &self.0,
        }
    }

    /// The `$ref` value pointing at this file from the index root.
    pub fn to_ref(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        RelativePath::new(value)
    }
}

impl From<RelativePath> for String {
    fn from(p: RelativePath) -> Self {
        p.0
    }
}
