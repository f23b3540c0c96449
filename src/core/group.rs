//! Group catalog entries.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::aliases::{AliasBindings, ConstResolver};
use crate::config::GROUP_SPACE_DIR;
use crate::core::feature::Feature;
use crate::error::Result;

/// A top-level namespace bundling related features, with its own
/// manifest, optional routes, optional views and optional hook.
///
/// Built during discovery; the features sequence is append-only while
/// discovery runs and immutable once the registry is exposed.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    /// Matched directory-name prefix minus its trailing separator,
    /// e.g. `group_foo-001`.
    pub id: String,
    /// Symbolic name, the directory-name remainder, e.g. `foo`.
    pub name: String,
    /// Absolute path of the group directory.
    pub path: PathBuf,
    /// Path relative to the application root, used for autoload
    /// exclusion and asset URL construction.
    pub relative_path: PathBuf,
    /// Directory base name, e.g. `group_foo-001_foo`.
    pub base_dir: String,
    /// The group's `_group_space` directory, home of its manifest,
    /// controller, routes, hook and views.
    pub metadata_path: PathBuf,
    /// Logical extensionless routes reference, present only when the
    /// group has a routes script.
    pub routes_file: Option<PathBuf>,
    /// Fully-qualified type name, e.g. `FeaturePack::Foo`.
    pub type_name: String,
    /// The group's manifest.
    pub manifest: crate::manifest::Manifest,
    /// Alias bindings from the manifest's `const_aliases`.
    pub aliases: AliasBindings,
    /// Features in discovery order.
    pub features: Vec<Feature>,
    /// Unit-scoped state writable by the after-initialize hook.
    pub state: IndexMap<String, serde_json::Value>,
}

impl Group {
    /// Find a feature by name. Linear scan; names are unique within a
    /// group.
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.name == name)
    }

    /// The group's views prefix, e.g.
    /// `group_foo-001_foo/_group_space/views`.
    pub fn views_path(&self) -> String {
        format!("{}/{}/views", self.base_dir, GROUP_SPACE_DIR)
    }

    /// A named view path under the group's views prefix.
    pub fn view(&self, view_name: &str) -> String {
        format!("{}/{view_name}", self.views_path())
    }

    /// A named javascript module path under the group's javascript
    /// directory.
    pub fn javascript_module(&self, file_name: &str) -> String {
        format!("{}/{}/javascript/{file_name}", self.base_dir, GROUP_SPACE_DIR)
    }

    /// Resolve a declared alias inside this group's namespace.
    pub fn resolve_alias<R: ConstResolver>(&self, alias: &str, resolver: &R) -> Result<R::Const> {
        self.aliases.resolve(&self.type_name, alias, resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn sample_group(name: &str, base_dir: &str) -> Group {
        Group {
            id: "group_123".to_string(),
            name: name.to_string(),
            path: PathBuf::from(format!("/srv/app/app/feature_packs/{base_dir}")),
            relative_path: PathBuf::from(format!("app/feature_packs/{base_dir}")),
            base_dir: base_dir.to_string(),
            metadata_path: PathBuf::from(format!(
                "/srv/app/app/feature_packs/{base_dir}/_group_space"
            )),
            routes_file: None,
            type_name: format!("FeaturePack::{}", heck::AsUpperCamelCase(name)),
            manifest: Manifest::default(),
            aliases: AliasBindings::default(),
            features: Vec::new(),
            state: IndexMap::new(),
        }
    }

    #[test]
    fn test_views_path() {
        let group = sample_group("test_group", "group_123_test_group");
        assert_eq!(group.views_path(), "group_123_test_group/_group_space/views");
    }

    #[test]
    fn test_view() {
        let group = sample_group("test_group", "group_123_test_group");
        assert_eq!(
            group.view("index"),
            "group_123_test_group/_group_space/views/index"
        );
    }

    #[test]
    fn test_javascript_module() {
        let group = sample_group("test_group", "group_123_test_group");
        assert_eq!(
            group.javascript_module("app.js"),
            "group_123_test_group/_group_space/javascript/app.js"
        );
    }

    #[test]
    fn test_feature_lookup_on_empty_group() {
        let group = sample_group("test_group", "group_123_test_group");
        assert!(group.feature("anything").is_none());
    }

    #[test]
    fn test_type_name_is_camelized() {
        let group = sample_group("test_group", "group_123_test_group");
        assert_eq!(group.type_name, "FeaturePack::TestGroup");
    }
}
