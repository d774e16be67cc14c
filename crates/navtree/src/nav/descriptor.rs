//! Author-supplied navbar entries, before resolution.

use serde::{Deserialize, Serialize};

/// A raw navbar entry: a bare link path or a descriptor object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// A bare path such as `"/demo/"`, resolved to an unlabelled leaf.
    Path(String),
    /// A structured entry with a label and optional link, prefix or children.
    Item(NavDescriptor),
}

/// A structured navbar entry as written in the site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavDescriptor {
    /// Display label.
    pub text: String,
    /// Symbolic icon identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Direct navigation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Path segment prepended to every descendant link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Route pattern the renderer uses to mark the item active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Ordered submenu entries.
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// Shorthand for a bare path entry.
    #[must_use]
    pub fn path(link: impl Into<String>) -> Self {
        Self::Path(link.into())
    }
}

impl From<&str> for NavEntry {
    fn from(link: &str) -> Self {
        Self::Path(link.to_string())
    }
}

impl From<NavDescriptor> for NavEntry {
    fn from(descriptor: NavDescriptor) -> Self {
        Self::Item(descriptor)
    }
}

impl NavDescriptor {
    /// Create a descriptor with only a label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the link.
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the active-match pattern.
    #[must_use]
    pub fn active_match(mut self, pattern: impl Into<String>) -> Self {
        self.active_match = Some(pattern.into());
        self
    }

    /// Set the children.
    #[must_use]
    pub fn children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bare_path() {
        let entry: NavEntry = serde_json::from_str(r#""/demo/""#).unwrap();
        assert_eq!(entry, NavEntry::path("/demo/"));
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{
            "text": "计算机基础",
            "icon": "lightbulb",
            "prefix": "/zh/guide/",
            "activeMatch": "^/zh/guide/",
            "children": ["intro/", {"text": "操作系统", "prefix": "bar/", "children": []}]
        }"#;
        let entry: NavEntry = serde_json::from_str(json).unwrap();
        let NavEntry::Item(descriptor) = entry else {
            panic!("expected a descriptor");
        };
        assert_eq!(descriptor.text, "计算机基础");
        assert_eq!(descriptor.icon.as_deref(), Some("lightbulb"));
        assert_eq!(descriptor.prefix.as_deref(), Some("/zh/guide/"));
        assert_eq!(descriptor.active_match.as_deref(), Some("^/zh/guide/"));
        assert_eq!(descriptor.children.len(), 2);
        assert_eq!(descriptor.children[0], NavEntry::path("intro/"));
    }

    #[test]
    fn test_deserialize_children_default_to_empty() {
        let entry: NavEntry = serde_json::from_str(r#"{"text": "Empty", "icon": "x"}"#).unwrap();
        assert_eq!(
            entry,
            NavEntry::Item(NavDescriptor::new("Empty").icon("x"))
        );
    }

    #[test]
    fn test_deserialize_rejects_descriptor_without_text() {
        let result: Result<NavEntry, _> = serde_json::from_str(r#"{"link": "/a/"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<NavEntry, _> =
            serde_json::from_str(r#"{"text": "A", "link": "/a/", "lnik": "/b/"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_methods() {
        let descriptor = NavDescriptor::new("Guide")
            .icon("book")
            .link("/guide/")
            .prefix("/zh/")
            .active_match("^/guide")
            .children(vec!["a/".into(), "b/".into()]);
        assert_eq!(descriptor.text, "Guide");
        assert_eq!(descriptor.icon.as_deref(), Some("book"));
        assert_eq!(descriptor.link.as_deref(), Some("/guide/"));
        assert_eq!(descriptor.prefix.as_deref(), Some("/zh/"));
        assert_eq!(descriptor.active_match.as_deref(), Some("^/guide"));
        assert_eq!(descriptor.children.len(), 2);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&NavDescriptor::new("A").link("/a/")).unwrap();
        assert_eq!(json, r#"{"text":"A","link":"/a/","children":[]}"#);
    }
}
