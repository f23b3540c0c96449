//! Identifier parsing for group and feature directory names.
//!
//! Directory names follow the conventions `group_<id>_<name>` and
//! `feature_<id>_<name>`. The id runs from the kind prefix up to the
//! first separator after it, so ids may contain hyphens but never
//! underscores (`group_foo-001_foo` parses as id `group_foo-001`,
//! name `foo`). A name that does not match the convention fails
//! discovery entirely rather than being skipped.

use serde::{Deserialize, Serialize};

/// The two unit kinds the loader discovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Top-level namespace bundling related features.
    Group,
    /// A vertical slice nested inside a group.
    Feature,
}

impl UnitKind {
    /// The directory-name prefix for this kind, including the trailing
    /// separator.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Group => "group_",
            Self::Feature => "feature_",
        }
    }

    /// Human-readable shape of a valid directory name.
    pub fn pattern_hint(&self) -> &'static str {
        match self {
            Self::Group => "group_<id>_<name>",
            Self::Feature => "feature_<id>_<name>",
        }
    }

    /// Get the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Feature => "feature",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The id and symbolic name extracted from a unit directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitId {
    /// The matched prefix minus its trailing separator, e.g. `group_foo-001`.
    pub id: String,
    /// The remainder of the directory name, e.g. `foo`.
    pub name: String,
}

/// Parse a directory base name against a kind's naming convention.
///
/// Returns `None` when the name does not match at all; the caller turns
/// that into an `InvalidIdentifier` error naming the offending path.
pub fn parse(kind: UnitKind, dir_name: &str) -> Option<UnitId> {
    let rest = dir_name.strip_prefix(kind.prefix())?;
    let sep = rest.find('_')?;
    Some(UnitId {
        id: format!("{}{}", kind.prefix(), &rest[..sep]),
        name: rest[sep + 1..].to_string(),
    })
}
