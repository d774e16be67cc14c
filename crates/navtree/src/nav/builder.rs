//! Resolution of navbar entries into a path-resolved tree.
//!
//! Resolution is a single depth-first pass. Each node's effective prefix is its
//! parent's effective prefix joined with its own `prefix`; leaf links are joined
//! onto the effective prefix. The first invalid entry aborts the whole build.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use super::descriptor::{NavDescriptor, NavEntry};
use super::item::{self, NavGroup, NavItem, NavLink};
use super::path::compose;
use crate::error::{Error, IndexPath, Result};

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Options controlling resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Deepest allowed nesting level; top-level entries are level 1.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Resolves navbar entries with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct NavBuilder {
    options: BuildOptions,
}

impl NavBuilder {
    /// Create a builder with the given options.
    #[must_use]
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Resolve `entries` into an ordered navbar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] for a descriptor with no link, prefix
    /// or children, [`Error::InvalidActiveMatch`] for a pattern that does not
    /// compile, and [`Error::DepthExceeded`] when nesting passes
    /// `max_depth`. Nothing is returned on error.
    pub fn build(&self, entries: &[NavEntry]) -> Result<Vec<NavItem>> {
        debug!(entries = entries.len(), "building navbar");
        let items = self.resolve_all(entries, "", &IndexPath::root())?;
        debug!(
            items = items.len(),
            leaves = item::leaf_count(&items),
            "navbar resolved"
        );
        Ok(items)
    }

    fn resolve_all(
        &self,
        entries: &[NavEntry],
        parent_prefix: &str,
        parent_path: &IndexPath,
    ) -> Result<Vec<NavItem>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.resolve(entry, parent_prefix, &parent_path.child(index)))
            .collect()
    }

    fn resolve(&self, entry: &NavEntry, parent_prefix: &str, path: &IndexPath) -> Result<NavItem> {
        if path.depth() > self.options.max_depth {
            return Err(Error::DepthExceeded {
                path: path.clone(),
                max_depth: self.options.max_depth,
            });
        }

        match entry {
            NavEntry::Path(link) => {
                let link = compose(parent_prefix, link);
                trace!(%path, %link, "resolved bare link");
                Ok(NavItem::Link(NavLink {
                    text: None,
                    icon: None,
                    link,
                    active_match: None,
                }))
            }
            NavEntry::Item(descriptor) => self.resolve_descriptor(descriptor, parent_prefix, path),
        }
    }

    fn resolve_descriptor(
        &self,
        descriptor: &NavDescriptor,
        parent_prefix: &str,
        path: &IndexPath,
    ) -> Result<NavItem> {
        if let Some(pattern) = &descriptor.active_match {
            Regex::new(pattern).map_err(|source| Error::InvalidActiveMatch {
                path: path.clone(),
                pattern: pattern.clone(),
                source,
            })?;
        }

        let prefix = match &descriptor.prefix {
            Some(own) => compose(parent_prefix, own),
            None => parent_prefix.to_string(),
        };
        let link = descriptor
            .link
            .as_deref()
            .map(|link| compose(&prefix, link));

        if !descriptor.children.is_empty() {
            let children = self.resolve_all(&descriptor.children, &prefix, path)?;
            trace!(%path, text = %descriptor.text, %prefix, "resolved group");
            return Ok(NavItem::Group(NavGroup {
                text: descriptor.text.clone(),
                icon: descriptor.icon.clone(),
                prefix: compose(&prefix, ""),
                link,
                active_match: descriptor.active_match.clone(),
                children,
            }));
        }

        // A childless entry with only a prefix links to the prefix itself.
        let link = match (link, &descriptor.prefix) {
            (Some(link), _) => link,
            (None, Some(_)) => compose(&prefix, ""),
            (None, None) => return Err(Error::MalformedEntry { path: path.clone() }),
        };
        trace!(%path, text = %descriptor.text, %link, "resolved link");
        Ok(NavItem::Link(NavLink {
            text: Some(descriptor.text.clone()),
            icon: descriptor.icon.clone(),
            link,
            active_match: descriptor.active_match.clone(),
        }))
    }
}

/// Resolve `entries` with default options.
///
/// # Errors
///
/// See [`NavBuilder::build`].
pub fn build(entries: &[NavEntry]) -> Result<Vec<NavItem>> {
    NavBuilder::default().build(entries)
}

/// A resolved link that appears on more than one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateLink {
    /// The colliding link.
    pub link: String,
    /// How many items resolve to it.
    pub count: usize,
}

/// Find links shared by more than one item, in order of first appearance.
#[must_use]
pub fn duplicate_links(items: &[NavItem]) -> Vec<DuplicateLink> {
    fn collect<'a>(
        items: &'a [NavItem],
        seen: &mut Vec<(&'a str, usize)>,
        index: &mut HashMap<&'a str, usize>,
    ) {
        for item in items {
            if let Some(link) = item.link() {
                match index.get(link) {
                    Some(&slot) => seen[slot].1 += 1,
                    None => {
                        index.insert(link, seen.len());
                        seen.push((link, 1));
                    }
                }
            }
            collect(item.children(), seen, index);
        }
    }

    let mut seen = Vec::new();
    let mut index = HashMap::new();
    collect(items, &mut seen, &mut index);

    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(link, count)| DuplicateLink {
            link: link.to_string(),
            count,
        })
        .collect()
}
