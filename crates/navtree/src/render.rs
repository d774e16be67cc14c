//! Output formats for a resolved navbar.

use crate::error::Result;
use crate::nav::NavItem;

/// Serialize the navbar as JSON for the rendering layer.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(items: &[NavItem], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    Ok(json)
}

/// Render the navbar as an indented text outline.
///
/// Groups print as `text/  [prefix]`, labelled links as `text -> link` and
/// bare links as the link alone. Each level is indented by two spaces.
#[must_use]
pub fn outline(items: &[NavItem]) -> String {
    let mut out = String::new();
    push_outline(&mut out, items, 0);
    out
}

fn push_outline(out: &mut String, items: &[NavItem], level: usize) {
    let indent = "  ".repeat(level);
    for item in items {
        let line = match item {
            NavItem::Group(group) => format!("{}/  [{}]", group.text, group.prefix),
            NavItem::Link(link) => match &link.text {
                Some(text) => format!("{text} -> {}", link.link),
                None => link.link.clone(),
            },
        };
        out.push_str(&indent);
        out.push_str(&line);
        out.push('\n');
        push_outline(out, item.children(), level + 1);
    }
}
