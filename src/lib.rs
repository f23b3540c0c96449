//! feature-pack - Convention-over-configuration module loader
//!
//! Scans a directory tree for groups and features (self-contained
//! vertical slices of a web application, each with its own controller,
//! views, routes and manifest), validates their naming conventions and
//! builds an immutable in-memory registry the host framework queries to
//! wire up routing, view resolution and layout fallback.
//!
//! Setup runs exactly once at process start:
//!
//! ```no_run
//! use feature_pack::{setup, HookRegistry, SetupConfig};
//!
//! let registry = setup(SetupConfig::new("/srv/app"), HookRegistry::new())?;
//! let feature = registry.feature("foo", "bar");
//! # Ok::<(), feature_pack::FeaturePackError>(())
//! ```

pub mod aliases;
pub mod cli;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod hooks;
pub mod ident;
pub mod manifest;
pub mod paths;
pub mod routes;
pub mod util;
pub mod views;

pub use aliases::{AliasBindings, ConstResolver};
pub use config::SetupConfig;
pub use core::{Feature, Group, Registry};
pub use discovery::setup;
pub use error::{FeaturePackError, Result};
pub use hooks::{HookRegistry, HookResult};
pub use ident::{UnitId, UnitKind};
pub use manifest::{ConstAlias, Manifest};
pub use routes::{RouteEntry, RoutePlan};
pub use views::{LayoutPaths, TemplateStore};
