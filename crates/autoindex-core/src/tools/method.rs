use crate::tools::extension::remove_file_extension;

/// Extensions that may sit under a template suffix, as in `get.yml.njk`.
const DOCUMENT_EXTENSIONS: [&str; 3] = [".yml", ".yaml", ".json"];

/// Derive the HTTP method key from a path file name.
///
/// `get.yml` → `get`, `list.post.yml` → `post`, `delete.yml.njk` → `delete`.
/// The method keeps the case it has in the file name.
pub fn get_method_from_file_name(file_name: &str) -> String {
    let mut stem = remove_file_extension(file_name);
    if let Some(ext) = DOCUMENT_EXTENSIONS
        .iter()
        .find(|ext| stem.to_ascii_lowercase().ends_with(*ext))
    {
        stem = &stem[..stem.len() - ext.len()];
    }

    let method = match stem.rfind('.') {
        Some(i) => &stem[i + 1..],
        None => stem,
    };
    method.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_method_file() {
        assert_eq!(get_method_from_file_name("get.yml"), "get");
    }

    #[test]
    fn test_method_case_is_preserved() {
        assert_eq!(get_method_from_file_name("POST.yaml"), "POST");
        assert_eq!(get_method_from_file_name("list.Get.yml"), "Get");
    }

    #[test]
    fn test_prefixed_method_file() {
        assert_eq!(get_method_from_file_name("list.get.yml"), "get");
        assert_eq!(get_method_from_file_name("list.post.yml"), "post");
    }

    #[test]
    fn test_template_suffix() {
        assert_eq!(get_method_from_file_name("delete.yml.njk"), "delete");
        assert_eq!(get_method_from_file_name("list.put.json.njk"), "put");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(get_method_from_file_name("patch"), "patch");
    }
}
