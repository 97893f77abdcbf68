use once_cell::sync::Lazy;
use regex::Regex;

/// Final `.ext` of the last path segment.
static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("valid regex"));

/// Strip exactly one trailing extension.
///
/// Dots inside directory names are left alone, as is a segment without one.
pub fn remove_file_extension(path: &str) -> &str {
    match EXTENSION.find(path) {
        Some(m) => &path[..m.start()],
        None => path,
    }
}
