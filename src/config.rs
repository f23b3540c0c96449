//! Setup configuration and filesystem conventions.
//!
//! The layout conventions are fixed: each group keeps its own metadata
//! under a `_group_space` directory, each unit carries a `manifest.yaml`,
//! and controllers, routes and after-initialize scripts live under
//! well-known names. Only the application root, the features directory
//! and the namespace root are configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory inside a group holding its own manifest, controller,
/// routes, hook and views.
pub const GROUP_SPACE_DIR: &str = "_group_space";

/// Required per-unit manifest file.
pub const MANIFEST_FILE_NAME: &str = "manifest.yaml";

/// Optional per-unit controller, special-loaded by the host framework.
pub const CONTROLLER_FILE_NAME: &str = "controller.rb";

/// Optional per-unit routes script, drawn by the routing collaborator.
pub const ROUTES_FILE_NAME: &str = "routes.rb";

/// Optional one-time initialization script.
pub const AFTER_INITIALIZE_FILE_NAME: &str = "after_initialize.rb";

/// Directory names starting with this character are not unit candidates.
pub const EXCLUDED_PREFIX: char = '_';

/// Default features directory, relative to the application root.
pub const DEFAULT_FEATURES_DIR: &str = "app/feature_packs";

/// Default namespace under which unit types are resolved.
pub const DEFAULT_NAMESPACE_ROOT: &str = "FeaturePack";

/// Configuration for a setup run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SetupConfig {
    /// The application root directory.
    pub root: PathBuf,
    /// Features directory, relative to `root`.
    pub features_dir: PathBuf,
    /// Namespace prefix for `type_name` and alias resolution.
    pub namespace_root: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            features_dir: PathBuf::from(DEFAULT_FEATURES_DIR),
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
        }
    }
}

impl SetupConfig {
    /// Create a config rooted at the given application directory, with
    /// default conventions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Override the features directory (relative to the root).
    pub fn with_features_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.features_dir = dir.into();
        self
    }

    /// Override the namespace root.
    pub fn with_namespace_root(mut self, ns: impl Into<String>) -> Self {
        self.namespace_root = ns.into();
        self
    }

    /// The absolute (root-joined) features directory.
    pub fn features_path(&self) -> PathBuf {
        self.root.join(&self.features_dir)
    }
}

/// Check whether a directory base name marks a non-unit entry.
pub fn is_excluded_name(name: &str) -> bool {
    name.starts_with(EXCLUDED_PREFIX)
}

/// The group-space directory for a group directory.
pub fn group_space_path(group_dir: &Path) -> PathBuf {
    group_dir.join(GROUP_SPACE_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SetupConfig::default();
        assert_eq!(config.features_dir, PathBuf::from("app/feature_packs"));
        assert_eq!(config.namespace_root, "FeaturePack");
    }

    #[test]
    fn test_features_path_joins_root() {
        let config = SetupConfig::new("/srv/app");
        assert_eq!(
            config.features_path(),
            PathBuf::from("/srv/app/app/feature_packs")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = SetupConfig::new("/srv/app")
            .with_features_dir("packs")
            .with_namespace_root("Packs");
        assert_eq!(config.features_path(), PathBuf::from("/srv/app/packs"));
        assert_eq!(config.namespace_root, "Packs");
    }

    #[test]
    fn test_is_excluded_name() {
        assert!(is_excluded_name("_group_space"));
        assert!(!is_excluded_name("group_1_foo"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SetupConfig::new("/srv/app");
        let json = serde_json::to_string(&config).unwrap();
        let back: SetupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
