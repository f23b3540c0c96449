//! CLI commands for the `feature-pack` binary.
//!
//! Each command runs a one-shot discovery over a features tree and
//! reports on it: `check` validates, `list` prints the catalog,
//! `routes` prints the route plan.

pub mod check;
pub mod list;
pub mod routes_cmd;

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::core::Registry;
use crate::discovery::{setup_with, SetupFlag};
use crate::error::Result;
use crate::hooks::HookRegistry;

pub use check::{CheckOptions, CheckOutput};
pub use list::{ListOptions, ListOutput};
pub use routes_cmd::{RoutesOptions, RoutesOutput};

/// Run discovery for a CLI invocation.
///
/// Each invocation is its own process, so the setup guard is scoped to
/// the call instead of the process-wide flag the host framework uses.
fn discover(root: &Path, features_dir: Option<&PathBuf>) -> Result<Registry> {
    let mut config = SetupConfig::new(root);
    if let Some(dir) = features_dir {
        config = config.with_features_dir(dir);
    }
    setup_with(config, HookRegistry::new(), &SetupFlag::new())
}
