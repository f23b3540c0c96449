//! Feature catalog entries.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::aliases::{AliasBindings, ConstResolver};
use crate::error::Result;
use crate::paths;

/// One vertical slice of functionality nested inside a group:
/// controller, views, routes and manifest.
///
/// The group relationship is carried as plain data (`group_name`,
/// `group_base_dir`) rather than an ownership edge; it is only needed
/// for namespace and fallback-path resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    /// Matched directory-name prefix minus its trailing separator,
    /// e.g. `feature_bar-001`.
    pub id: String,
    /// Symbolic name, e.g. `bar`.
    pub name: String,
    /// Name of the owning group.
    pub group_name: String,
    /// Directory base name of the owning group.
    pub group_base_dir: String,
    /// Absolute path, used for filesystem existence checks.
    pub absolute_path: PathBuf,
    /// Path relative to the application root, used for autoload
    /// exclusion.
    pub relative_path: PathBuf,
    /// Path relative to the features root, used for URL and view path
    /// construction, e.g. `group_foo-001_foo/feature_bar-001_bar`.
    pub sub_path: PathBuf,
    /// Filesystem path of the routes script, used to decide whether the
    /// file exists.
    pub routes_file_path: PathBuf,
    /// Logical extensionless routes reference handed to the routing
    /// collaborator, present only when the routes script exists.
    pub routes_file: Option<PathBuf>,
    /// Absolute views directory.
    pub views_absolute_path: PathBuf,
    /// Features-root-relative views directory.
    pub views_relative_path: PathBuf,
    /// Features-root-relative javascript directory.
    pub javascript_relative_path: PathBuf,
    /// Fully-qualified type name, e.g. `FeaturePack::Foo::Bar`.
    pub type_name: String,
    /// The feature's manifest.
    pub manifest: crate::manifest::Manifest,
    /// Alias bindings from the manifest's `const_aliases`.
    pub aliases: AliasBindings,
    /// Unit-scoped state writable by the after-initialize hook.
    pub state: IndexMap<String, serde_json::Value>,
}

impl Feature {
    /// A named view path under the feature's views prefix.
    pub fn view(&self, view_name: &str) -> String {
        paths::logical_join(&self.views_relative_path, view_name)
    }

    /// A named javascript module path under the feature's javascript
    /// directory.
    pub fn javascript_module(&self, file_name: &str) -> String {
        paths::logical_join(&self.javascript_relative_path, file_name)
    }

    /// Resolve a declared alias inside this feature's namespace.
    pub fn resolve_alias<R: ConstResolver>(&self, alias: &str, resolver: &R) -> Result<R::Const> {
        self.aliases.resolve(&self.type_name, alias, resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn sample_feature() -> Feature {
        let sub_path = PathBuf::from("group_123_test_group/feature_456_test_feature");
        Feature {
            id: "feature_456".to_string(),
            name: "test_feature".to_string(),
            group_name: "test_group".to_string(),
            group_base_dir: "group_123_test_group".to_string(),
            absolute_path: PathBuf::from("/srv/app/app/feature_packs")
                .join(&sub_path),
            relative_path: PathBuf::from("app/feature_packs").join(&sub_path),
            sub_path: sub_path.clone(),
            routes_file_path: PathBuf::from("/srv/app/app/feature_packs")
                .join(&sub_path)
                .join("routes.rb"),
            routes_file: None,
            views_absolute_path: PathBuf::from("/srv/app/app/feature_packs")
                .join(&sub_path)
                .join("views"),
            views_relative_path: sub_path.join("views"),
            javascript_relative_path: sub_path.join("javascript"),
            type_name: "FeaturePack::TestGroup::TestFeature".to_string(),
            manifest: Manifest::default(),
            aliases: AliasBindings::default(),
            state: IndexMap::new(),
        }
    }

    #[test]
    fn test_view() {
        let feature = sample_feature();
        assert_eq!(
            feature.view("index"),
            "group_123_test_group/feature_456_test_feature/views/index"
        );
    }

    #[test]
    fn test_javascript_module() {
        let feature = sample_feature();
        assert_eq!(
            feature.javascript_module("app.js"),
            "group_123_test_group/feature_456_test_feature/javascript/app.js"
        );
    }

    #[test]
    fn test_type_name_joins_group_and_feature() {
        let feature = sample_feature();
        assert_eq!(feature.type_name, "FeaturePack::TestGroup::TestFeature");
    }
}
