//! Check command: validate a features tree.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::Registry;

/// Options for the check command.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Application root to scan.
    pub root: PathBuf,
    /// Features directory override, relative to the root.
    pub features_dir: Option<PathBuf>,
    /// Output as JSON.
    pub json: bool,
}

/// Output format for the check command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Whether discovery succeeded.
    pub success: bool,
    /// Number of discovered groups.
    pub groups: usize,
    /// Number of discovered features across all groups.
    pub features: usize,
    /// Number of discovered javascript assets.
    pub javascript_files: usize,
    /// Error message if discovery failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckOutput {
    fn success(registry: &Registry) -> Self {
        Self {
            success: true,
            groups: registry.groups().len(),
            features: registry.groups().iter().map(|g| g.features.len()).sum(),
            javascript_files: registry.javascript_paths().len(),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            groups: 0,
            features: 0,
            javascript_files: 0,
            error: Some(error.into()),
        }
    }
}

/// Run the check command.
pub fn run(options: &CheckOptions) -> CheckOutput {
    match super::discover(&options.root, options.features_dir.as_ref()) {
        Ok(registry) => CheckOutput::success(&registry),
        Err(err) => CheckOutput::failure(err.to_string()),
    }
}

/// Render the output for the terminal.
pub fn render(output: &CheckOutput, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(output).unwrap_or_default();
    }
    match &output.error {
        Some(error) => format!("check failed: {error}"),
        None => format!(
            "ok: {} groups, {} features, {} javascript files",
            output.groups, output.features, output.javascript_files
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(root: &std::path::Path) -> CheckOptions {
        CheckOptions {
            root: root.to_path_buf(),
            features_dir: None,
            json: false,
        }
    }

    #[test]
    fn test_check_valid_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("app/feature_packs/group_1_foo/_group_space");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.yaml"), "url: /foo\n").unwrap();

        let output = run(&options(temp.path()));
        assert!(output.success);
        assert_eq!(output.groups, 1);
        assert!(render(&output, false).starts_with("ok:"));
    }

    #[test]
    fn test_check_invalid_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("app/feature_packs/grp_1_bad/_group_space");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("manifest.yaml"), "url: /bad\n").unwrap();

        let output = run(&options(temp.path()));
        assert!(!output.success);
        assert!(render(&output, false).contains("grp_1_bad"));
    }

    #[test]
    fn test_check_json_rendering() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app/feature_packs")).unwrap();

        let output = run(&options(temp.path()));
        let rendered = render(&output, true);
        assert!(rendered.contains("\"success\": true"));
    }
}
