//! Channel-name derivation from ordered `(glob, separator)` rules.

use crate::config::{AutoChannelIndexerOptions, PicomatchOptions};
use crate::error::Result;
use crate::tools::extension::remove_file_extension;
use crate::tools::matcher::GlobMatcher;

/// Compiled separator rules, evaluated in order, first match wins.
///
/// Without rules the extension-less path is the channel name as is.
#[derive(Debug, Clone, Default)]
pub struct ChannelNameResolver {
    rules: Vec<(GlobMatcher, String)>,
}

impl ChannelNameResolver {
    /// Compile every rule up front; an invalid glob fails the whole resolver.
    pub fn new(
        picomatch: &PicomatchOptions,
        options: Option<&AutoChannelIndexerOptions>,
    ) -> Result<Self> {
        let rules = options
            .map(|o| o.channel_separators.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|rule| {
                let matcher = GlobMatcher::compile(&rule.pattern, picomatch)?;
                Ok((matcher, rule.separator.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Channel key for a root-relative path such as `/users/{id}/events.yml`.
    pub fn resolve(&self, clean_path: &str) -> String {
        let base = remove_file_extension(clean_path);

        for (matcher, separator) in &self.rules {
            if matcher.is_match(base) {
                tracing::trace!(path = base, rule = matcher.pattern(), "channel rule matched");
                let trimmed = base.strip_prefix('/').unwrap_or(base);
                return trimmed.split('/').collect::<Vec<_>>().join(separator);
            }
        }

        base.to_owned()
    }
}
