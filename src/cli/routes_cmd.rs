//! Routes command: print the route plan.

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::routes::{RouteEntry, RoutePlan};

/// Options for the routes command.
#[derive(Debug, Clone)]
pub struct RoutesOptions {
    /// Application root to scan.
    pub root: PathBuf,
    /// Features directory override, relative to the root.
    pub features_dir: Option<PathBuf>,
    /// Output as JSON.
    pub json: bool,
}

/// Output format for the routes command.
#[derive(Debug, Clone, Serialize)]
pub struct RoutesOutput {
    /// Whether the plan was built.
    pub success: bool,
    /// Route entries in registration order.
    pub entries: Vec<RouteEntry>,
    /// Error message if discovery or plan building failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the routes command.
pub fn run(options: &RoutesOptions) -> RoutesOutput {
    let plan = super::discover(&options.root, options.features_dir.as_ref())
        .and_then(|registry| RoutePlan::build(&registry));
    match plan {
        Ok(plan) => RoutesOutput {
            success: true,
            entries: plan.entries,
            error: None,
        },
        Err(err) => RoutesOutput {
            success: false,
            entries: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

/// Render the output for the terminal.
pub fn render(output: &RoutesOutput, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(output).unwrap_or_default();
    }
    if let Some(error) = &output.error {
        return format!("routes failed: {error}");
    }

    let mut rendered = String::new();
    for entry in &output.entries {
        let line = match entry {
            RouteEntry::Index {
                url,
                route_name,
                action,
            } => format!("GET {url} -> {action} (as {route_name})"),
            RouteEntry::GroupScope {
                url, routes_file, ..
            } => format!("scope {url} draw {}", routes_file.display()),
            RouteEntry::FeatureScope {
                group,
                group_url,
                url,
                routes_file,
                ..
            } => format!(
                "namespace {group} ({group_url}) scope {url} draw {}",
                routes_file.display()
            ),
        };
        let _ = writeln!(rendered, "{line}");
    }
    if rendered.is_empty() {
        rendered.push_str("no routes\n");
    }
    rendered
}
