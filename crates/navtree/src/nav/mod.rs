//! Navigation tree construction.
//!
//! Site authors describe the navbar as an ordered list of [`NavEntry`] values:
//! either bare link paths or [`NavDescriptor`] objects with a label, optional
//! icon, link, prefix and children. [`build`] resolves that list into
//! [`NavItem`]s whose links carry every ancestor prefix.
//!
//! # Example
//!
//! ```
//! use navtree::nav::{build, NavDescriptor, NavEntry};
//!
//! let entries = vec![
//!     NavEntry::path("/"),
//!     NavDescriptor::new("Guide")
//!         .prefix("/zh/guide/")
//!         .children(vec![NavDescriptor::new("Java").prefix("bar/").into()])
//!         .into(),
//! ];
//!
//! let items = build(&entries).unwrap();
//! assert_eq!(items[0].link(), Some("/"));
//! assert_eq!(items[1].children()[0].link(), Some("/zh/guide/bar/"));
//! ```

mod builder;
mod descriptor;
mod item;
mod path;

pub use builder::{
    build, duplicate_links, BuildOptions, DuplicateLink, NavBuilder, DEFAULT_MAX_DEPTH,
};
pub use descriptor::{NavDescriptor, NavEntry};
pub use item::{depth, leaf_count, NavGroup, NavItem, NavLink};
pub use path::{compose, is_external, join_path};
