//! The process-wide registry and its read facade.
//!
//! The registry is an explicit immutable value constructed by a single
//! setup run and passed to whichever collaborator needs it. There is no
//! mutation API once it exists; the side lists and group sequence are
//! populated during discovery only.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::feature::Feature;
use crate::core::group::Group;

/// The in-memory catalog produced by a successful setup run.
#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    pub(crate) root_path: PathBuf,
    pub(crate) features_path: PathBuf,
    pub(crate) groups: Vec<Group>,
    pub(crate) ignored_paths: Vec<PathBuf>,
    pub(crate) group_controller_paths: Vec<PathBuf>,
    pub(crate) feature_controller_paths: Vec<PathBuf>,
    pub(crate) javascript_paths: Vec<PathBuf>,
}

impl Registry {
    /// Find a group by name. Returns `None` for unknown names; lookups
    /// never fail.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Find a feature within a group. Returns `None` when either the
    /// group or the feature is absent.
    pub fn feature(&self, group_name: &str, feature_name: &str) -> Option<&Feature> {
        self.group(group_name)?.feature(feature_name)
    }

    /// The application root.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The features root directory.
    pub fn features_path(&self) -> &Path {
        &self.features_path
    }

    /// Discovered groups, in deterministic discovery order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Paths the host's autoloader must skip: feature routes scripts,
    /// feature controllers and after-initialize scripts, all relative
    /// to the application root.
    pub fn ignored_paths(&self) -> &[PathBuf] {
        &self.ignored_paths
    }

    /// Group controller paths, relative to the application root.
    pub fn group_controller_paths(&self) -> &[PathBuf] {
        &self.group_controller_paths
    }

    /// Feature controller paths, relative to the application root.
    pub fn feature_controller_paths(&self) -> &[PathBuf] {
        &self.feature_controller_paths
    }

    /// Discovered javascript assets, relative to the features root,
    /// sorted. Top-level underscore directories are excluded.
    pub fn javascript_paths(&self) -> &[PathBuf] {
        &self.javascript_paths
    }
}
