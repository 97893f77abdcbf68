//! Component (schema) keys built from file paths.

use crate::config::AutoComponentIndexerOptions;
use crate::tools::extension::remove_file_extension;

/// Build the component key for `clean_path`.
///
/// Segments are PascalCased and concatenated. A trailing `model` segment
/// names its directory, a trailing `models` segment names its directory in
/// plural: `/weather/models.yml` → `Weathers`.
pub fn build_index_from_path(
    clean_path: &str,
    options: Option<&AutoComponentIndexerOptions>,
    fancy_pluralization: bool,
) -> String {
    let mut segments: Vec<String> = remove_file_extension(clean_path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(pascal_case)
        .collect();

    let plural = match segments.last().map(String::as_str) {
        Some("Model") => Some(false),
        Some("Models") => Some(true),
        _ => None,
    };
    if let Some(plural) = plural.filter(|_| segments.len() > 1) {
        segments.pop();
        if let Some(last) = segments.last_mut().filter(|_| plural) {
            *last = pluralize(last, fancy_pluralization);
        }
    }

    let mut key = segments.concat();

    if let Some(opts) = options {
        if let Some(remove) = opts.remove.as_deref().filter(|r| !r.is_empty()) {
            key = key.replace(remove, "");
        }
        if opts.dont_uc_first {
            key = lower_first(&key);
        }
    }
    key
}

/// `user-profile_v2` → `UserProfileV2`
fn pascal_case(segment: &str) -> String {
    segment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pluralize(word: &str, fancy: bool) -> String {
    if !fancy {
        return format!("{word}s");
    }

    let lower = word.to_lowercase();
    const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];
    const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

    // already plural, `News` stays `News`
    if lower.ends_with('s') && !lower.ends_with("ss") {
        return word.to_owned();
    }
    if SIBILANTS.iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let before = stem.chars().last().map(|c| c.to_ascii_lowercase());
        if before.is_some_and(|c| !VOWELS.contains(&c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_pascal_cased() {
        assert_eq!(build_index_from_path("/user/post.yml", None, false), "UserPost");
        assert_eq!(
            build_index_from_path("/user-profile/get_v2.yml", None, false),
            "UserProfileGetV2"
        );
    }

    #[test]
    fn test_model_names_directory() {
        assert_eq!(build_index_from_path("/weather/model.yml", None, false), "Weather");
        assert_eq!(build_index_from_path("/user/id/model.yml", None, false), "UserId");
        // a lone model file keeps its name
        assert_eq!(build_index_from_path("/model.yml", None, false), "Model");
    }

    #[test]
    fn test_models_pluralizes_directory() {
        assert_eq!(build_index_from_path("/weather/models.yml", None, false), "Weathers");
        assert_eq!(build_index_from_path("/category/models.yml", None, false), "Categorys");
        assert_eq!(build_index_from_path("/category/models.yml", None, true), "Categories");
        assert_eq!(build_index_from_path("/box/models.yml", None, true), "Boxes");
        assert_eq!(build_index_from_path("/day/models.yml", None, true), "Days");
        assert_eq!(build_index_from_path("/address/models.yml", None, true), "Addresses");
        assert_eq!(build_index_from_path("/news/models.yml", None, true), "News");
    }

    #[test]
    fn test_remove_and_dont_uc_first() {
        let opts = AutoComponentIndexerOptions {
            remove: Some("Model".to_string()),
            dont_uc_first: true,
        };
        assert_eq!(
            build_index_from_path("/weather/weatherModel.yml", Some(&opts), false),
            "weatherWeather"
        );
        assert_eq!(build_index_from_path("/pet/get.yml", Some(&opts), false), "petGet");
    }
}
