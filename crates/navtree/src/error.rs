//! Error types for navtree.
//!
//! Builder errors carry the [`IndexPath`] of the offending descriptor so a site
//! author can find the mistake in their configuration.

use std::fmt;

use thiserror::Error;

/// Position of a descriptor in the navbar, as indices from the root.
///
/// Displayed as `navbar[2].children[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexPath(Vec<usize>);

impl IndexPath {
    /// The path of the navbar root (no indices).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Return a new path one level deeper.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Nesting depth (number of indices).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The raw indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for IndexPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navbar")?;
        for (level, index) in self.0.iter().enumerate() {
            if level == 0 {
                write!(f, "[{index}]")?;
            } else {
                write!(f, ".children[{index}]")?;
            }
        }
        Ok(())
    }
}

/// The main error type for navtree operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Builder Errors ===
    /// A descriptor has no link, no prefix and no children.
    #[error("malformed navbar entry at {path}: entry has no link, prefix or children")]
    MalformedEntry {
        /// Position of the descriptor.
        path: IndexPath,
    },

    /// An `activeMatch` pattern failed to compile.
    #[error("invalid activeMatch pattern '{pattern}' at {path}: {source}")]
    InvalidActiveMatch {
        /// Position of the descriptor.
        path: IndexPath,
        /// The pattern as written.
        pattern: String,
        /// The underlying error.
        #[source]
        source: regex::Error,
    },

    /// Nesting is deeper than the configured maximum.
    #[error("navbar entry at {path} exceeds maximum nesting depth of {max_depth}")]
    DepthExceeded {
        /// Position of the first descriptor past the limit.
        path: IndexPath,
        /// The configured limit.
        max_depth: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for navtree operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// The index path of the offending descriptor, for builder errors.
    #[must_use]
    pub fn index_path(&self) -> Option<&IndexPath> {
        match self {
            Self::MalformedEntry { path }
            | Self::InvalidActiveMatch { path, .. }
            | Self::DepthExceeded { path, .. } => Some(path),
            _ => None,
        }
    }
}
