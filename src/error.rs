//! Unified error types for the feature pack loader.
//!
//! Setup is a one-shot, startup-time operation, so every error raised
//! during discovery is fatal: the whole setup aborts and no registry is
//! ever exposed. The single exception is [`FeaturePackError::UnresolvedConst`],
//! which is deferred to the first use of an alias accessor because the
//! host's symbol table may not be fully populated at setup time.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::ident::UnitKind;

/// The main error type for feature pack operations.
#[derive(Error, Debug)]
pub enum FeaturePackError {
    /// Setup was invoked a second time in the same process.
    #[error("feature pack already set up")]
    AlreadySetup,

    /// The configured features root is missing or not a directory.
    #[error("features path does not exist: '{path}'")]
    InvalidFeaturesPath { path: PathBuf },

    /// A unit directory violates the naming convention.
    #[error("{kind} '{path}' does not have a valid ID. Expected format: {expected}")]
    InvalidIdentifier {
        kind: UnitKind,
        path: PathBuf,
        expected: &'static str,
    },

    /// A required manifest file is absent.
    #[error("manifest file not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// A manifest file exists but its content is malformed.
    #[error("failed to load manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Two units in the same scope share a name, which would break the
    /// scan-based lookup.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateUnit { kind: UnitKind, name: String },

    /// An alias target could not be found in the host's symbol table.
    /// Raised at first use, not at setup time.
    #[error("unresolved constant: {qualified}")]
    UnresolvedConst { qualified: String },

    /// An after-initialize hook returned an error.
    #[error("after-initialize hook failed for {unit}: {message}")]
    HookFailed { unit: String, message: String },

    /// A routable unit has no routes file to draw.
    #[error("{unit} routes file not found in {path}")]
    NoRoutesFile { unit: String, path: PathBuf },

    /// A unit's manifest lacks the `url` key required by routing.
    #[error("manifest for {unit} does not declare a url")]
    MissingUrl { unit: String },

    /// I/O errors from directory scanning and file reading.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for feature pack operations.
pub type Result<T> = std::result::Result<T, FeaturePackError>;

impl FeaturePackError {
    /// Create an invalid-features-path error.
    pub fn invalid_features_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFeaturesPath { path: path.into() }
    }

    /// Create an invalid-identifier error for a unit directory.
    pub fn invalid_identifier(kind: UnitKind, path: impl Into<PathBuf>) -> Self {
        Self::InvalidIdentifier {
            kind,
            path: path.into(),
            expected: kind.pattern_hint(),
        }
    }

    /// Create a manifest-not-found error.
    pub fn manifest_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create a manifest parse error.
    pub fn manifest_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate-unit error.
    pub fn duplicate_unit(kind: UnitKind, name: impl Into<String>) -> Self {
        Self::DuplicateUnit {
            kind,
            name: name.into(),
        }
    }

    /// Create an unresolved-constant error.
    pub fn unresolved_const(qualified: impl Into<String>) -> Self {
        Self::UnresolvedConst {
            qualified: qualified.into(),
        }
    }

    /// Create a hook-failed error.
    pub fn hook_failed(unit: impl Into<String>, message: impl ToString) -> Self {
        Self::HookFailed {
            unit: unit.into(),
            message: message.to_string(),
        }
    }

    /// Create a no-routes-file error.
    pub fn no_routes_file(unit: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::NoRoutesFile {
            unit: unit.into(),
            path: path.into(),
        }
    }

    /// Create a missing-url error.
    pub fn missing_url(unit: impl Into<String>) -> Self {
        Self::MissingUrl { unit: unit.into() }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<io::Error> for FeaturePackError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}
