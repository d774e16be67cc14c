//! `navtree` - Navigation tree builder for static documentation sites
//!
//! This library turns a declarative navbar description (bare link paths and
//! nested descriptor objects with prefixes) into an ordered tree with fully
//! resolved links, ready for a theme's rendering layer.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod render;

pub use config::Config;
pub use error::{Error, IndexPath, Result};
pub use logging::init_logging;
pub use nav::{build, NavBuilder, NavDescriptor, NavEntry, NavItem};
