//! `.boatsrc` project configuration and per-invocation indexing options.

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name looked up by [`BoatsRc::discover`].
pub const BOATSRC_FILE_NAME: &str = ".boatsrc";

/// Project configuration. Read-only input to the indexer.
///
/// Unknown keys (template engine settings and the like) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoatsRc {
    /// Glob options shared by every channel separator rule.
    pub picomatch_options: PicomatchOptions,
    /// Use English pluralization rules for `models` component keys.
    pub fancy_pluralization: bool,
}

/// Glob matching options, named after the picomatch flags `.boatsrc` files carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PicomatchOptions {
    /// Bash semantics: `*` crosses `/` and backslash is a literal.
    pub bash: bool,
    /// Case-insensitive matching.
    pub nocase: bool,
    /// Let wildcards match `.`-leading path segments.
    pub dot: bool,
}

impl BoatsRc {
    /// Parse a `.boatsrc` JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        read_json(path)
    }

    /// Load `dir/.boatsrc` if present, defaults otherwise.
    pub fn discover(dir: &Utf8Path) -> Result<Self> {
        let path = dir.join(BOATSRC_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path, "loading boatsrc");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Which indexing modes run, and how each one names its keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetIndexYamlOptions {
    /// Index by directory, nested by HTTP method.
    pub paths: bool,
    /// Index by channel name.
    pub channels: bool,
    /// Index by component key.
    pub components: bool,
    pub auto_component_indexer_options: Option<AutoComponentIndexerOptions>,
    pub auto_channel_indexer_options: Option<AutoChannelIndexerOptions>,
}

impl GetIndexYamlOptions {
    /// Parse an options JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        read_json(path)
    }

    pub fn any_mode(&self) -> bool {
        self.paths || self.channels || self.components
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoComponentIndexerOptions {
    /// Literal text deleted from every generated key, e.g. `Model`.
    pub remove: Option<String>,
    /// Keep the first character lower-case.
    pub dont_uc_first: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoChannelIndexerOptions {
    /// Ordered rules, first match wins.
    pub channel_separators: Vec<ChannelSeparator>,
}

/// A `(glob, separator)` pair flattening a matching path into a channel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSeparator {
    #[serde(rename = "match")]
    pub pattern: String,
    pub separator: String,
}

impl ChannelSeparator {
    pub fn new(pattern: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            separator: separator.into(),
        }
    }
}

impl std::str::FromStr for ChannelSeparator {
    type Err = Error;

    /// Parses `GLOB=SEPARATOR`, splitting on the last `=`.
    fn from_str(s: &str) -> Result<Self> {
        let (pattern, separator) = s
            .rsplit_once('=')
            .ok_or_else(|| Error::InvalidRule(format!("expected GLOB=SEPARATOR, got {s:?}")))?;
        if pattern.is_empty() {
            return Err(Error::InvalidRule(format!("empty glob in {s:?}")));
        }
        Ok(Self::new(pattern, separator))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boatsrc_ignores_unknown_keys() {
        let raw = r#"{
            "nunjucksOptions": { "tags": {} },
            "picomatchOptions": { "bash": true },
            "fancyPluralization": true
        }"#;
        let rc: BoatsRc = serde_json::from_str(raw).unwrap();

        assert!(rc.picomatch_options.bash);
        assert!(!rc.picomatch_options.nocase);
        assert!(rc.fancy_pluralization);
    }

    #[test]
    fn test_boatsrc_empty_object_is_default() {
        let rc: BoatsRc = serde_json::from_str("{}").unwrap();
        assert_eq!(rc, BoatsRc::default());
    }

    #[test]
    fn test_options_parse_channel_rules_in_order() {
        let raw = r#"{
            "channels": true,
            "autoChannelIndexerOptions": {
                "channelSeparators": [
                    { "match": "/users/**", "separator": "." },
                    { "match": "/**", "separator": "-" }
                ]
            }
        }"#;
        let opts: GetIndexYamlOptions = serde_json::from_str(raw).unwrap();

        assert!(opts.channels && !opts.paths && !opts.components);
        let rules = opts.auto_channel_indexer_options.unwrap().channel_separators;
        assert_eq!(rules[0], ChannelSeparator::new("/users/**", "."));
        assert_eq!(rules[1], ChannelSeparator::new("/**", "-"));
    }

    #[test]
    fn test_separator_from_str() {
        let rule: ChannelSeparator = "/users/**=.".parse().unwrap();
        assert_eq!(rule, ChannelSeparator::new("/users/**", "."));

        // separator may be empty, glob may not
        let rule: ChannelSeparator = "/a/**=".parse().unwrap();
        assert_eq!(rule.separator, "");
        assert!("=.".parse::<ChannelSeparator>().is_err());
        assert!("/a/**".parse::<ChannelSeparator>().is_err());
    }

    #[test]
    fn test_discover_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        assert_eq!(BoatsRc::discover(dir).unwrap(), BoatsRc::default());
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let path = dir.join(BOATSRC_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        match BoatsRc::discover(dir) {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
