//! Site configuration for navtree.
//!
//! This module loads site metadata, builder options and the raw navbar entries
//! using figment, supporting TOML or JSON config files, environment variables,
//! and defaults.

use std::io;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::nav::{
    duplicate_links, BuildOptions, NavBuilder, NavEntry, NavItem, DEFAULT_MAX_DEPTH,
};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "navtree.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "navtree";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "NAVTREE_";

/// Site configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `NAVTREE_`, nested keys split on `__`)
/// 2. TOML or JSON config file, `~/.config/navtree/navtree.toml` by default
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Navbar builder options.
    pub build: BuildConfig,
    /// Raw navbar entries, in display order.
    pub navbar: Vec<NavEntry>,
}

/// Site metadata passed through to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Deployment base path. Must start and end with `/`.
    pub base: String,
    /// Site language tag.
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

/// Navbar builder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Deepest allowed navbar nesting level.
    pub max_depth: usize,
    /// Log a warning for every link shared by several navbar items.
    pub warn_duplicates: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
            lang: "en-US".to_string(),
            title: String::new(),
            description: String::new(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            warn_duplicates: true,
        }
    }
}

impl BuildConfig {
    /// Builder options derived from this configuration.
    #[must_use]
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            max_depth: self.max_depth,
        }
    }
}

impl Config {
    /// Load configuration from all sources using the default config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A path ending in `.json` is read as JSON, anything else as TOML. An
    /// explicitly given file must exist; a missing default file is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the given file does not exist, or if configuration
    /// loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_file(&path, true),
            None => Self::load_file(&Self::default_config_path(), false),
        }
    }

    fn load_file(config_file: &Path, required: bool) -> Result<Self> {
        debug!(path = %config_file.display(), required, "loading configuration");

        if required && !config_file.is_file() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration file not found: {}", config_file.display()),
            )));
        }

        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if is_json(config_file) {
            figment.merge(Json::file(config_file))
        } else {
            figment.merge(Toml::file(config_file))
        };
        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// Navbar entries are checked by [`Config::build_navbar`], not here.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.site.base.starts_with('/') || !self.site.base.ends_with('/') {
            return Err(Error::config_validation(format!(
                "site.base ({}) must start and end with '/'",
                self.site.base
            )));
        }

        if self.site.lang.trim().is_empty() {
            return Err(Error::config_validation("site.lang must not be empty"));
        }

        if self.build.max_depth == 0 {
            return Err(Error::config_validation(
                "build.max_depth must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Resolve the configured navbar.
    ///
    /// Duplicate links are logged as warnings when `build.warn_duplicates` is
    /// set; they never fail the build.
    ///
    /// # Errors
    ///
    /// Returns the first builder error encountered.
    pub fn build_navbar(&self) -> Result<Vec<NavItem>> {
        let items = NavBuilder::new(self.build.options()).build(&self.navbar)?;

        if self.build.warn_duplicates {
            for duplicate in duplicate_links(&items) {
                warn!(
                    link = %duplicate.link,
                    count = duplicate.count,
                    "navbar link is shared by several items"
                );
            }
        }

        Ok(items)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
