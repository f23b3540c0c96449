//! View lookup prefixes and layout fallback resolution.
//!
//! Rendering itself is the host's concern. The core only supplies the
//! path prefixes to search and resolves header/footer layout partials
//! against a host-provided existence check, feature-first with group
//! fallback.

use serde::Serialize;

use crate::core::{Feature, Group};
use crate::paths;

/// Host-side template existence check.
pub trait TemplateStore {
    /// Whether a partial template named `name` exists under `prefix`.
    fn partial_exists(&self, name: &str, prefix: &str) -> bool;
}

/// Resolved header/footer layout paths for one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutPaths {
    /// Header partial view path, if any.
    pub header: Option<String>,
    /// Footer partial view path, if any.
    pub footer: Option<String>,
}

/// Prepend a lookup prefix unless it is already present.
pub fn prepend_prefix(prefixes: &mut Vec<String>, prefix: &str) {
    if !prefixes.iter().any(|existing| existing == prefix) {
        prefixes.insert(0, prefix.to_string());
    }
}

/// Resolve a group's own header/footer layouts.
pub fn group_layouts<S: TemplateStore>(group: &Group, store: &S) -> LayoutPaths {
    let partials = format!("{}/partials", group.views_path());
    LayoutPaths {
        header: store
            .partial_exists("header", &partials)
            .then(|| group.view("partials/header")),
        footer: store
            .partial_exists("footer", &partials)
            .then(|| group.view("partials/footer")),
    }
}

/// Resolve a feature's header/footer layouts with group fallback.
///
/// Search order, independently for each partial: the feature's own
/// `partials` directory, then the owning group's, then none.
pub fn feature_layouts<S: TemplateStore>(
    feature: &Feature,
    group: &Group,
    store: &S,
) -> LayoutPaths {
    let feature_partials = paths::logical_join(&feature.views_relative_path, "partials");
    let group_partials = format!("{}/partials", group.views_path());

    let resolve = |name: &str| {
        if store.partial_exists(name, &feature_partials) {
            Some(feature.view(&format!("partials/{name}")))
        } else if store.partial_exists(name, &group_partials) {
            Some(group.view(&format!("partials/{name}")))
        } else {
            None
        }
    };

    LayoutPaths {
        header: resolve("header"),
        footer: resolve("footer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::discovery::{setup_with, SetupFlag};
    use crate::hooks::HookRegistry;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    /// Template store backed by a set of `(name, prefix)` pairs.
    struct SetStore(HashSet<(String, String)>);

    impl SetStore {
        fn with(entries: &[(&str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(name, prefix)| (name.to_string(), prefix.to_string()))
                    .collect(),
            )
        }
    }

    impl TemplateStore for SetStore {
        fn partial_exists(&self, name: &str, prefix: &str) -> bool {
            self.0.contains(&(name.to_string(), prefix.to_string()))
        }
    }

    fn fixture() -> (Group, Feature) {
        let temp = TempDir::new().unwrap();
        let group_dir = temp.path().join("app/feature_packs/group_1_foo");
        fs::create_dir_all(group_dir.join("_group_space")).unwrap();
        fs::write(group_dir.join("_group_space/manifest.yaml"), "url: /foo\n").unwrap();
        let feature_dir = group_dir.join("feature_2_bar");
        fs::create_dir_all(&feature_dir).unwrap();
        fs::write(feature_dir.join("manifest.yaml"), "url: /bar\n").unwrap();

        let registry = setup_with(
            SetupConfig::new(temp.path()),
            HookRegistry::new(),
            &SetupFlag::new(),
        )
        .unwrap();
        let group = registry.group("foo").unwrap().clone();
        let feature = group.feature("bar").unwrap().clone();
        (group, feature)
    }

    #[test]
    fn test_prepend_prefix_is_idempotent() {
        let mut prefixes = vec!["app/views".to_string()];
        prepend_prefix(&mut prefixes, "group_1_foo/feature_2_bar/views");
        prepend_prefix(&mut prefixes, "group_1_foo/feature_2_bar/views");
        assert_eq!(
            prefixes,
            vec!["group_1_foo/feature_2_bar/views", "app/views"]
        );
    }

    #[test]
    fn test_feature_partial_wins_over_group() {
        let (group, feature) = fixture();
        let store = SetStore::with(&[
            ("header", "group_1_foo/feature_2_bar/views/partials"),
            ("header", "group_1_foo/_group_space/views/partials"),
        ]);

        let layouts = feature_layouts(&feature, &group, &store);
        assert_eq!(
            layouts.header.as_deref(),
            Some("group_1_foo/feature_2_bar/views/partials/header")
        );
        assert!(layouts.footer.is_none());
    }

    #[test]
    fn test_group_fallback_when_feature_partial_absent() {
        let (group, feature) = fixture();
        let store = SetStore::with(&[("footer", "group_1_foo/_group_space/views/partials")]);

        let layouts = feature_layouts(&feature, &group, &store);
        assert!(layouts.header.is_none());
        assert_eq!(
            layouts.footer.as_deref(),
            Some("group_1_foo/_group_space/views/partials/footer")
        );
    }

    #[test]
    fn test_header_and_footer_resolve_independently() {
        let (group, feature) = fixture();
        let store = SetStore::with(&[
            ("header", "group_1_foo/feature_2_bar/views/partials"),
            ("footer", "group_1_foo/_group_space/views/partials"),
        ]);

        let layouts = feature_layouts(&feature, &group, &store);
        assert_eq!(
            layouts.header.as_deref(),
            Some("group_1_foo/feature_2_bar/views/partials/header")
        );
        assert_eq!(
            layouts.footer.as_deref(),
            Some("group_1_foo/_group_space/views/partials/footer")
        );
    }

    #[test]
    fn test_group_layouts() {
        let (group, _) = fixture();
        let store = SetStore::with(&[("header", "group_1_foo/_group_space/views/partials")]);

        let layouts = group_layouts(&group, &store);
        assert_eq!(
            layouts.header.as_deref(),
            Some("group_1_foo/_group_space/views/partials/header")
        );
        assert!(layouts.footer.is_none());
    }
}
