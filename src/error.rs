//! Error types for asset generation
//!
//! Everything in [`AssetError`] aborts the run. Structural SVG anomalies are
//! reported separately as [`MalformedSvgInput`] so callers can log them and
//! carry on with the untouched document.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal errors raised while generating the asset tree
#[derive(Debug, Error)]
pub enum AssetError {
    /// Target root is not a pre-existing directory
    #[error("Target: {} is not a valid, pre-existing directory", .0.display())]
    InvalidTarget(PathBuf),

    /// Wine source root was not given
    #[error("Wine Source directory not specified")]
    MissingSource,

    /// Wine source root is not a pre-existing directory
    #[error("Wine Source directory: {} is not a valid, pre-existing directory", .0.display())]
    InvalidSource(PathBuf),

    /// Settings file could not be read or parsed
    #[error("Invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    /// The external translator failed for a phrase
    #[error("Unable to translate \"{phrase}\" to locale: {locale} ({reason})")]
    TranslationUnavailable {
        phrase: String,
        locale: String,
        reason: String,
    },

    /// Filesystem failure on a specific path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An SVG file is not well-formed XML
    #[error("Failed to parse SVG {}: {message}", path.display())]
    SvgParse { path: PathBuf, message: String },
}

impl AssetError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for asset generation
pub type Result<T> = std::result::Result<T, AssetError>;

/// A structural element an SVG transform relies on is absent.
///
/// Never fatal: the transform leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedSvgInput {
    #[error("base icon has no <defs> element")]
    MissingBaseDefs,

    #[error("overlay icon has no <defs> element")]
    MissingOverlayDefs,

    #[error("overlay icon has no top-level <g> element")]
    MissingOverlayGroup,

    #[error("no top-level <g> element carries an id")]
    NoTaggedGroups,
}
