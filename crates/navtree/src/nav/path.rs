//! Link path composition.

use url::Url;

/// Join a resolved base path and a fragment with exactly one `/` at the
/// boundary.
///
/// The result always starts with `/`. It ends with `/` when the last non-empty
/// fragment did (or the base did, if the fragment is empty), and for the root.
///
/// ```
/// use navtree::nav::join_path;
///
/// assert_eq!(join_path("/zh/guide/", "bar/"), "/zh/guide/bar/");
/// assert_eq!(join_path("/a", "/b"), "/a/b");
/// assert_eq!(join_path("", ""), "/");
/// ```
#[must_use]
pub fn join_path(base: &str, fragment: &str) -> String {
    let trailing = if fragment.is_empty() {
        base.ends_with('/')
    } else {
        fragment.ends_with('/')
    };

    let segments: Vec<&str> = base
        .split('/')
        .chain(fragment.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut joined = String::with_capacity(base.len() + fragment.len() + 2);
    joined.push('/');
    joined.push_str(&segments.join("/"));
    if trailing && !segments.is_empty() {
        joined.push('/');
    }
    joined
}

/// Whether a link points outside the site and must not be prefixed.
///
/// Absolute URLs with any scheme (`https:`, `mailto:`, `javascript:`) and
/// protocol-relative links (`//cdn.example.com/`) are external.
#[must_use]
pub fn is_external(link: &str) -> bool {
    link.starts_with("//") || Url::parse(link).is_ok()
}

/// Resolve `fragment` against an effective prefix.
///
/// External fragments are returned as written. Under an external prefix the
/// fragment is appended with exactly one `/`; otherwise [`join_path`] applies.
#[must_use]
pub fn compose(base: &str, fragment: &str) -> String {
    if is_external(fragment) {
        return fragment.to_string();
    }
    if !is_external(base) {
        return join_path(base, fragment);
    }

    let fragment = fragment.trim_start_matches('/');
    if fragment.is_empty() {
        return base.to_string();
    }
    format!("{}/{fragment}", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_adds_missing_separators() {
        assert_eq!(join_path("/a", "b"), "/a/b");
        assert_eq!(join_path("a", "b"), "/a/b");
    }

    #[test]
    fn test_join_collapses_duplicate_separators() {
        assert_eq!(join_path("/a/", "/b"), "/a/b");
        assert_eq!(join_path("//a//", "//b//"), "/a/b/");
    }

    #[test]
    fn test_join_keeps_fragment_trailing_slash() {
        assert_eq!(join_path("/zh/guide/", "bar/"), "/zh/guide/bar/");
        assert_eq!(join_path("/zh/guide/", "bar"), "/zh/guide/bar");
    }

    #[test]
    fn test_join_empty_fragment_keeps_base_shape() {
        assert_eq!(join_path("/zh/guide/", ""), "/zh/guide/");
        assert_eq!(join_path("/zh/guide", ""), "/zh/guide");
    }

    #[test]
    fn test_join_root() {
        assert_eq!(join_path("", ""), "/");
        assert_eq!(join_path("", "/"), "/");
        assert_eq!(join_path("/", "/"), "/");
    }

    #[test]
    fn test_join_bare_path_unchanged() {
        assert_eq!(join_path("", "/demo/"), "/demo/");
    }

    #[test]
    fn test_join_keeps_file_names_and_fragments() {
        assert_eq!(
            join_path("/guide/", "intro.md#setup"),
            "/guide/intro.md#setup"
        );
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://theme-hope.vuejs.press/"));
        assert!(is_external("http://example.com"));
        assert!(is_external("mailto:someone@example.com"));
        assert!(is_external("tel:+100"));
        assert!(is_external("javascript:void(0)"));
        assert!(is_external("//cdn.example.com/doc/"));
        assert!(!is_external("/demo/"));
        assert!(!is_external("guide/"));
        assert!(!is_external("intro.md#setup"));
        assert!(!is_external("://missing-scheme"));
        assert!(!is_external("/redirect?to=a://b"));
    }

    #[test]
    fn test_compose_site_paths() {
        assert_eq!(compose("/zh/", "bar/"), "/zh/bar/");
        assert_eq!(compose("", ""), "/");
    }

    #[test]
    fn test_compose_keeps_external_fragment() {
        assert_eq!(compose("/zh/", "javascript:void(0)"), "javascript:void(0)");
        assert_eq!(compose("/zh/", "//cdn.example.com/doc/"), "//cdn.example.com/doc/");
        assert_eq!(
            compose("/zh/", "https://github.com/u/"),
            "https://github.com/u/"
        );
    }

    #[test]
    fn test_compose_under_external_prefix() {
        assert_eq!(compose("https://github.com/u/", "repo"), "https://github.com/u/repo");
        assert_eq!(compose("https://github.com/u", "/repo/"), "https://github.com/u/repo/");
        assert_eq!(compose("https://github.com/u/", ""), "https://github.com/u/");
        assert_eq!(compose("//cdn.example.com", "a.js"), "//cdn.example.com/a.js");
    }
}
