//! Route plan construction.
//!
//! The core never drives the host's routing DSL. It hands the routing
//! collaborator an ordered plan: per group, an optional default index
//! route, a scope drawing the group's routes file, and one scoped entry
//! per feature. Entries appear in registry order, so registration order
//! follows discovery order.
//!
//! This is where the manifest's minimum contract is enforced: a unit
//! with no `url` fails here, not at discovery time.

use serde::Serialize;
use std::path::PathBuf;

use crate::core::Registry;
use crate::error::{FeaturePackError, Result};

/// One routing instruction for the host framework.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteEntry {
    /// Default index route a group serves unless it is namespace-only.
    Index {
        /// URL prefix from the group's manifest.
        url: String,
        /// Route name, the group name.
        route_name: String,
        /// Controller action in `<controller>#<action>` form.
        action: String,
    },
    /// Scope drawing a group's own routes file.
    GroupScope {
        /// URL prefix from the group's manifest.
        url: String,
        /// Scope name, the group name.
        route_name: String,
        /// Logical extensionless routes reference.
        routes_file: PathBuf,
    },
    /// Scope drawing a feature's routes file inside its group's
    /// namespace.
    FeatureScope {
        /// The owning group's name (routing namespace).
        group: String,
        /// The owning group's URL prefix.
        group_url: String,
        /// URL prefix from the feature's manifest.
        url: String,
        /// Scope name, the feature name.
        route_name: String,
        /// Logical extensionless routes reference.
        routes_file: PathBuf,
    },
}

/// The ordered routing plan for every discovered unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Entries in registration order.
    pub entries: Vec<RouteEntry>,
}

impl RoutePlan {
    /// Build the plan from a finished registry.
    ///
    /// # Errors
    ///
    /// `MissingUrl` when a unit's manifest lacks `url`; `NoRoutesFile`
    /// when a feature, or a group that is not namespace-only, has no
    /// routes file to draw.
    pub fn build(registry: &Registry) -> Result<Self> {
        let mut entries = Vec::new();

        for group in registry.groups() {
            let group_url = group
                .manifest
                .url
                .clone()
                .ok_or_else(|| FeaturePackError::missing_url(format!("group '{}'", group.name)))?;

            if !group.manifest.namespace_only {
                entries.push(RouteEntry::Index {
                    url: group_url.clone(),
                    route_name: group.name.clone(),
                    action: format!("{}#home", group.name),
                });

                let routes_file = group.routes_file.clone().ok_or_else(|| {
                    FeaturePackError::no_routes_file(
                        format!("group '{}'", group.name),
                        &group.metadata_path,
                    )
                })?;
                entries.push(RouteEntry::GroupScope {
                    url: group_url.clone(),
                    route_name: group.name.clone(),
                    routes_file,
                });
            }

            for feature in &group.features {
                let url = feature.manifest.url.clone().ok_or_else(|| {
                    FeaturePackError::missing_url(format!(
                        "feature '{}/{}'",
                        group.name, feature.name
                    ))
                })?;
                let routes_file = feature.routes_file.clone().ok_or_else(|| {
                    FeaturePackError::no_routes_file(
                        format!("feature '{}/{}'", group.name, feature.name),
                        &feature.routes_file_path,
                    )
                })?;
                entries.push(RouteEntry::FeatureScope {
                    group: group.name.clone(),
                    group_url: group_url.clone(),
                    url,
                    route_name: feature.name.clone(),
                    routes_file,
                });
            }
        }

        Ok(Self { entries })
    }
}
