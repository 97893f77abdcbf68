use globset::{GlobBuilder, GlobMatcher as Inner};

use crate::config::PicomatchOptions;
use crate::error::Result;

/// Thin wrapper around `globset::GlobMatcher` with picomatch semantics on top:
/// - `a/**` also matches `a` itself
/// - unless `dot` is set, a `.`-leading segment only matches when the
///   pattern spells out a `.`-leading segment of its own
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    inner: Inner,
    /// `a` for a pattern `a/**`
    parent: Option<Inner>,
    /// `.`-leading segments named by the pattern; `None` when `dot` is set.
    dot_segments: Option<Vec<String>>,
    nocase: bool,
}

impl GlobMatcher {
    /// Compile a glob pattern into a matcher.
    pub fn compile(pattern: &str, opts: &PicomatchOptions) -> Result<Self> {
        let inner = build(pattern, opts)?;
        let parent = match pattern.strip_suffix("/**") {
            Some(parent) if !parent.is_empty() => Some(build(parent, opts)?),
            _ => None,
        };
        let dot_segments = (!opts.dot).then(|| {
            pattern
                .split('/')
                .filter(|s| s.starts_with('.'))
                .map(str::to_owned)
                .collect()
        });

        Ok(Self {
            inner,
            parent,
            dot_segments,
            nocase: opts.nocase,
        })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        let matched = self.inner.is_match(candidate)
            || self.parent.as_ref().is_some_and(|p| p.is_match(candidate));
        matched && self.dots_allowed(candidate)
    }

    fn dots_allowed(&self, candidate: &str) -> bool {
        let Some(named) = &self.dot_segments else {
            return true;
        };
        candidate
            .split('/')
            .filter(|s| s.starts_with('.'))
            .all(|segment| {
                named.iter().any(|n| {
                    n.starts_with(".*")
                        || n == segment
                        || (self.nocase && n.eq_ignore_ascii_case(segment))
                        || (n.contains(['*', '?', '[', '{']) && n.len() > 1)
                })
            })
    }

    /// The pattern this matcher was compiled from.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.inner.glob().glob()
    }
}

fn build(pattern: &str, opts: &PicomatchOptions) -> Result<Inner> {
    let glob = GlobBuilder::new(pattern)
        .case_insensitive(opts.nocase)
        .literal_separator(!opts.bash)
        .backslash_escape(!opts.bash)
        .build()?;
    Ok(glob.compile_matcher())
}
