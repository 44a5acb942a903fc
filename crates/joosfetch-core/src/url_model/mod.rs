//! URL and output filename derivation for a (category, feature) pair.
//!
//! Both are plain string concatenation: labels are expected to already be
//! valid path segments and are never escaped.

use std::path::{Path, PathBuf};

/// Suffix appended to the feature to form the remote page name.
pub const PAGE_SUFFIX: &str = ".html";

/// Extension of the saved text dump.
pub const TEXT_EXTENSION: &str = ".txt";

/// Builds `base_url + category + "/" + feature + ".html"`.
///
/// # Examples
///
/// - `page_url("https://host/joos/", "features", "if")` → `"https://host/joos/features/if.html"`
pub fn page_url(base_url: &str, category: &str, feature: &str) -> String {
    let mut url =
        String::with_capacity(base_url.len() + category.len() + feature.len() + 1 + PAGE_SUFFIX.len());
    url.push_str(base_url);
    url.push_str(category);
    url.push('/');
    url.push_str(feature);
    url.push_str(PAGE_SUFFIX);
    url
}

/// Builds `category + "_" + feature + ".txt"`.
pub fn output_filename(category: &str, feature: &str) -> String {
    format!("{category}_{feature}{TEXT_EXTENSION}")
}

/// Full path of the text dump for a pair inside `output_dir`.
pub fn output_path(output_dir: &Path, category: &str, feature: &str) -> PathBuf {
    output_dir.join(output_filename(category, feature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{pairs, BASE_URL, CATEGORIES, FEATURES};

    #[test]
    fn page_url_concatenates() {
        assert_eq!(
            page_url(BASE_URL, "features", "extends"),
            "https://student.cs.uwaterloo.ca/~cs444/joos/features/extends.html"
        );
        assert_eq!(
            page_url("http://127.0.0.1:8080/", "features", "array_return"),
            "http://127.0.0.1:8080/features/array_return.html"
        );
    }

    #[test]
    fn page_url_does_not_insert_or_escape_separators() {
        // Base without trailing slash is used verbatim.
        assert_eq!(page_url("https://h/joos", "a", "b"), "https://h/joosa/b.html");
        assert_eq!(page_url("https://h/", "a b", "c%d"), "https://h/a b/c%d.html");
    }

    #[test]
    fn output_filename_format() {
        assert_eq!(output_filename("features", "if"), "features_if.txt");
        assert_eq!(
            output_filename("features", "array_return"),
            "features_array_return.txt"
        );
    }

    #[test]
    fn output_path_joins_dir() {
        let p = output_path(Path::new("joos_features"), "features", "this");
        assert_eq!(p, Path::new("joos_features").join("features_this.txt"));
    }

    #[test]
    fn every_catalog_pair_maps_deterministically() {
        for p in pairs(CATEGORIES, FEATURES) {
            let expected_url = format!("{}{}/{}.html", BASE_URL, p.category, p.feature);
            assert_eq!(page_url(BASE_URL, p.category, p.feature), expected_url);
            let expected_name = format!("{}_{}.txt", p.category, p.feature);
            assert_eq!(output_filename(p.category, p.feature), expected_name);
            assert_eq!(
                page_url(BASE_URL, p.category, p.feature),
                page_url(BASE_URL, p.category, p.feature)
            );
        }
    }
}
