//! Resolved navbar items, as handed to the rendering layer.

use serde::Serialize;

/// A resolved navbar node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// A navigable entry.
    Link(NavLink),
    /// A submenu.
    Group(NavGroup),
}

/// A leaf with a fully resolved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Display label; absent for bare path entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Symbolic icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Resolved link path, or an external URL as written.
    pub link: String,
    /// Route pattern for active highlighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

/// A submenu holding ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavGroup {
    /// Display label.
    pub text: String,
    /// Symbolic icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Effective prefix applied to the children.
    pub prefix: String,
    /// Resolved link, when the author gave the group one as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Route pattern for active highlighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Ordered children, never empty.
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Display label, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Link(link) => link.text.as_deref(),
            Self::Group(group) => Some(&group.text),
        }
    }

    /// Icon identifier, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::Link(link) => link.icon.as_deref(),
            Self::Group(group) => group.icon.as_deref(),
        }
    }

    /// Resolved link, if the item is navigable.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.link),
            Self::Group(group) => group.link.as_deref(),
        }
    }

    /// Children; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavItem] {
        match self {
            Self::Link(_) => &[],
            Self::Group(group) => &group.children,
        }
    }

    /// Whether this is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Link(_) => 1,
            Self::Group(group) => leaf_count(&group.children),
        }
    }

    /// Height of this subtree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + depth(self.children())
    }
}

/// Total number of leaves in a navbar.
#[must_use]
pub fn leaf_count(items: &[NavItem]) -> usize {
    items.iter().map(NavItem::leaf_count).sum()
}

/// Height of the deepest branch in a navbar; 0 for an empty navbar.
#[must_use]
pub fn depth(items: &[NavItem]) -> usize {
    items.iter().map(NavItem::depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(link: &str) -> NavItem {
        NavItem::Link(NavLink {
            text: None,
            icon: None,
            link: link.to_string(),
            active_match: None,
        })
    }

    fn group(text: &str, children: Vec<NavItem>) -> NavItem {
        NavItem::Group(NavGroup {
            text: text.to_string(),
            icon: Some("lightbulb".to_string()),
            prefix: "/zh/".to_string(),
            link: None,
            active_match: None,
            children,
        })
    }

    #[test]
    fn test_leaf_accessors() {
        let item = leaf("/demo/");
        assert!(item.is_leaf());
        assert_eq!(item.link(), Some("/demo/"));
        assert_eq!(item.text(), None);
        assert!(item.children().is_empty());
    }

    #[test]
    fn test_group_accessors() {
        let item = group("Guide", vec![leaf("/a/")]);
        assert!(!item.is_leaf());
        assert_eq!(item.text(), Some("Guide"));
        assert_eq!(item.icon(), Some("lightbulb"));
        assert_eq!(item.link(), None);
        assert_eq!(item.children().len(), 1);
    }

    #[test]
    fn test_leaf_count_and_depth() {
        let items = vec![
            leaf("/"),
            group("A", vec![leaf("/a/"), group("B", vec![leaf("/b/"), leaf("/c/")])]),
        ];
        assert_eq!(leaf_count(&items), 4);
        assert_eq!(depth(&items), 3);
        assert_eq!(depth(&[]), 0);
    }

    #[test]
    fn test_serialize_leaf() {
        let json = serde_json::to_string(&leaf("/demo/")).unwrap();
        assert_eq!(json, r#"{"link":"/demo/"}"#);
    }

    #[test]
    fn test_serialize_group() {
        let item = NavItem::Group(NavGroup {
            text: "Guide".to_string(),
            icon: None,
            prefix: "/guide/".to_string(),
            link: None,
            active_match: Some("^/guide/".to_string()),
            children: vec![leaf("/guide/a")],
        });
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Guide","prefix":"/guide/","activeMatch":"^/guide/","children":[{"link":"/guide/a"}]}"#
        );
    }
}
