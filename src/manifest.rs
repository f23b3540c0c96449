//! Per-unit manifest loading.
//!
//! Every group and feature carries a `manifest.yaml` describing its URL
//! prefix and other declarative configuration. The well-known keys are
//! typed and validated at load time; everything else is preserved, in
//! declaration order, under [`Manifest::extra`].
//!
//! A missing file and a malformed file are distinct errors
//! ([`crate::FeaturePackError::ManifestNotFound`] vs
//! [`crate::FeaturePackError::ManifestParse`]); both are fatal to setup.

use indexmap::IndexMap;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FeaturePackError, Result};
use crate::util::read_to_string_limited;

/// A manifest-declared short name resolving to a constant within the
/// owning unit's namespace.
///
/// The YAML shape is a single-entry mapping, `- Widget: SomeType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstAlias {
    /// The short accessor name.
    pub alias: String,
    /// The target constant name, relative to the unit's namespace.
    pub target: String,
}

impl Serialize for ConstAlias {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.alias, &self.target)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConstAlias {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = IndexMap::<String, String>::deserialize(deserializer)?;
        if entries.len() != 1 {
            return Err(D::Error::custom(
                "const_aliases entries must be single-key mappings",
            ));
        }
        let (alias, target) = entries.into_iter().next().expect("len checked above");
        Ok(Self { alias, target })
    }
}

/// Typed view of a unit's `manifest.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// URL prefix consumed by routing. Required for routable units, but
    /// absence is only surfaced when the route plan is built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Suppresses the group's default index route.
    pub namespace_only: bool,
    /// Declared constant aliases, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub const_aliases: Vec<ConstAlias>,
    /// All other keys, declaration order preserved, nesting allowed.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml_ng::Value>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// `ManifestNotFound` when the file is absent, `ManifestParse` when
    /// its content does not deserialize.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FeaturePackError::manifest_not_found(path));
        }
        let content = read_to_string_limited(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| FeaturePackError::manifest_parse(path, e.to_string()))
    }
}
