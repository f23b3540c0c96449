//! List command: print the discovered catalog.

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::core::{Feature, Group};

/// Options for the list command.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Application root to scan.
    pub root: PathBuf,
    /// Features directory override, relative to the root.
    pub features_dir: Option<PathBuf>,
    /// Output as JSON.
    pub json: bool,
}

/// Simplified group info for output.
#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    /// Group id.
    pub id: String,
    /// Group name.
    pub name: String,
    /// URL prefix, if declared.
    pub url: Option<String>,
    /// Whether the group has its own routes file.
    pub has_routes: bool,
    /// Features in discovery order.
    pub features: Vec<FeatureInfo>,
}

/// Simplified feature info for output.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureInfo {
    /// Feature id.
    pub id: String,
    /// Feature name.
    pub name: String,
    /// URL prefix, if declared.
    pub url: Option<String>,
    /// Whether the feature has a routes file.
    pub has_routes: bool,
}

impl GroupInfo {
    fn from_group(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            url: group.manifest.url.clone(),
            has_routes: group.routes_file.is_some(),
            features: group.features.iter().map(FeatureInfo::from_feature).collect(),
        }
    }
}

impl FeatureInfo {
    fn from_feature(feature: &Feature) -> Self {
        Self {
            id: feature.id.clone(),
            name: feature.name.clone(),
            url: feature.manifest.url.clone(),
            has_routes: feature.routes_file.is_some(),
        }
    }
}

/// Output format for the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    /// Whether discovery succeeded.
    pub success: bool,
    /// Discovered groups.
    pub groups: Vec<GroupInfo>,
    /// Error message if discovery failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the list command.
pub fn run(options: &ListOptions) -> ListOutput {
    match super::discover(&options.root, options.features_dir.as_ref()) {
        Ok(registry) => ListOutput {
            success: true,
            groups: registry.groups().iter().map(GroupInfo::from_group).collect(),
            error: None,
        },
        Err(err) => ListOutput {
            success: false,
            groups: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

/// Render the output for the terminal.
pub fn render(output: &ListOutput, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(output).unwrap_or_default();
    }
    if let Some(error) = &output.error {
        return format!("list failed: {error}");
    }

    let mut rendered = String::new();
    for group in &output.groups {
        let url = group.url.as_deref().unwrap_or("-");
        let _ = writeln!(rendered, "{} ({}) url={url}", group.name, group.id);
        for feature in &group.features {
            let url = feature.url.as_deref().unwrap_or("-");
            let _ = writeln!(rendered, "  {} ({}) url={url}", feature.name, feature.id);
        }
    }
    if rendered.is_empty() {
        rendered.push_str("no groups discovered\n");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_renders_tree() {
        let temp = TempDir::new().unwrap();
        let group_dir = temp.path().join("app/feature_packs/group_1_foo");
        fs::create_dir_all(group_dir.join("_group_space")).unwrap();
        fs::write(group_dir.join("_group_space/manifest.yaml"), "url: /foo\n").unwrap();
        let feature_dir = group_dir.join("feature_2_bar");
        fs::create_dir_all(&feature_dir).unwrap();
        fs::write(feature_dir.join("manifest.yaml"), "url: /bar\n").unwrap();

        let output = run(&ListOptions {
            root: temp.path().to_path_buf(),
            features_dir: None,
            json: false,
        });
        assert!(output.success);
        assert_eq!(output.groups.len(), 1);
        assert_eq!(output.groups[0].features.len(), 1);

        let rendered = render(&output, false);
        assert!(rendered.contains("foo (group_1)"));
        assert!(rendered.contains("  bar (feature_2) url=/bar"));
    }

    #[test]
    fn test_list_empty_tree() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app/feature_packs")).unwrap();

        let output = run(&ListOptions {
            root: temp.path().to_path_buf(),
            features_dir: None,
            json: false,
        });
        assert!(output.success);
        assert_eq!(render(&output, false), "no groups discovered\n");
    }
}
