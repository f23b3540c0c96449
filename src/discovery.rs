//! Filesystem discovery and the one-time setup lifecycle.
//!
//! `setup` walks the features root, builds every group and then every
//! feature, populates the cross-cutting path lists, runs the registered
//! after-initialize hooks and returns the finished [`Registry`].
//! Any failure aborts the whole run: no partial registry is ever
//! exposed.
//!
//! Discovery order is deterministic (directories are sorted
//! lexicographically) so route registration order is reproducible
//! across restarts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};

use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::aliases::AliasBindings;
use crate::config::{
    SetupConfig, AFTER_INITIALIZE_FILE_NAME, CONTROLLER_FILE_NAME, GROUP_SPACE_DIR,
    MANIFEST_FILE_NAME, ROUTES_FILE_NAME,
};
use crate::core::{Feature, Group, Registry};
use crate::error::{FeaturePackError, Result};
use crate::hooks::HookRegistry;
use crate::ident::{self, UnitKind};
use crate::manifest::Manifest;
use crate::paths;

const IDLE: u8 = 0;
const RUNNING: u8 = 1;
const DONE: u8 = 2;

/// Atomic three-state setup guard.
///
/// Exactly one call may move Idle → Running; a failed run moves back to
/// Idle (the registry never existed, so a retry is permitted), a
/// successful one moves to Done permanently.
pub(crate) struct SetupFlag(AtomicU8);

impl SetupFlag {
    pub(crate) const fn new() -> Self {
        Self(AtomicU8::new(IDLE))
    }

    fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(IDLE, RUNNING, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn complete(&self) {
        self.0.store(DONE, Ordering::SeqCst);
    }

    fn abort(&self) {
        self.0.store(IDLE, Ordering::SeqCst);
    }
}

static SETUP_FLAG: SetupFlag = SetupFlag::new();

/// Run discovery and build the process-wide registry.
///
/// May complete successfully once per process; every later call fails
/// with [`FeaturePackError::AlreadySetup`], including calls racing a
/// still-running first call.
///
/// # Errors
///
/// Any discovery, manifest or hook failure aborts the run with no
/// registry exposed.
pub fn setup(config: SetupConfig, hooks: HookRegistry) -> Result<Registry> {
    setup_with(config, hooks, &SETUP_FLAG)
}

/// Setup against an explicit flag. The public entry point uses the
/// process-wide flag; in-crate callers with one-shot lifetimes (the
/// CLI, tests) supply their own.
pub(crate) fn setup_with(
    config: SetupConfig,
    hooks: HookRegistry,
    flag: &SetupFlag,
) -> Result<Registry> {
    if !flag.try_begin() {
        return Err(FeaturePackError::AlreadySetup);
    }
    match run_setup(config, hooks) {
        Ok(registry) => {
            flag.complete();
            info!(
                groups = registry.groups().len(),
                features = registry
                    .groups()
                    .iter()
                    .map(|g| g.features.len())
                    .sum::<usize>(),
                "feature pack setup complete"
            );
            Ok(registry)
        }
        Err(err) => {
            flag.abort();
            Err(err)
        }
    }
}

fn run_setup(config: SetupConfig, hooks: HookRegistry) -> Result<Registry> {
    let features_path = config.features_path();
    if !features_path.is_dir() {
        return Err(FeaturePackError::invalid_features_path(&features_path));
    }

    let javascript_paths = discover_javascript_files(&features_path)?;

    let mut group_controller_paths = Vec::new();
    let mut feature_controller_paths = Vec::new();
    let mut ignored_paths = Vec::new();

    let mut groups = Vec::new();
    for dir in paths::unit_dirs(&features_path)
        .map_err(|e| FeaturePackError::io(&features_path, e))?
    {
        let group = build_group(&config, &dir, &mut group_controller_paths)?;
        debug!(group = %group.name, id = %group.id, "discovered group");
        groups.push(group);
    }
    check_unique(
        UnitKind::Group,
        groups.iter().map(|g| (g.name.as_str(), g.id.as_str(), g.base_dir.as_str())),
    )?;

    for group in &mut groups {
        for dir in
            paths::unit_dirs(&group.path).map_err(|e| FeaturePackError::io(&group.path, e))?
        {
            let feature = build_feature(
                &config,
                &features_path,
                group,
                &dir,
                &mut feature_controller_paths,
                &mut ignored_paths,
            )?;
            debug!(group = %group.name, feature = %feature.name, "discovered feature");
            group.features.push(feature);
        }
        check_unique(
            UnitKind::Feature,
            group
                .features
                .iter()
                .map(|f| (f.name.as_str(), f.id.as_str(), f.sub_path.to_str().unwrap_or(""))),
        )?;
    }

    hooks.run(&mut groups)?;

    Ok(Registry {
        root_path: config.root,
        features_path,
        groups,
        ignored_paths,
        group_controller_paths,
        feature_controller_paths,
        javascript_paths,
    })
}

fn build_group(
    config: &SetupConfig,
    dir: &Path,
    group_controller_paths: &mut Vec<PathBuf>,
) -> Result<Group> {
    let base_dir = paths::base_dir_name(dir)
        .ok_or_else(|| FeaturePackError::invalid_identifier(UnitKind::Group, dir))?;
    let unit = ident::parse(UnitKind::Group, &base_dir)
        .ok_or_else(|| FeaturePackError::invalid_identifier(UnitKind::Group, dir))?;

    let metadata_path = crate::config::group_space_path(dir);
    let relative_path = paths::strip_root(&config.root, dir);

    // Existence check only; the routing collaborator draws the file.
    let routes_file = metadata_path
        .join(ROUTES_FILE_NAME)
        .is_file()
        .then(|| PathBuf::from(&base_dir).join(GROUP_SPACE_DIR).join("routes"));

    group_controller_paths.push(
        relative_path
            .join(GROUP_SPACE_DIR)
            .join(CONTROLLER_FILE_NAME),
    );

    let manifest = Manifest::load(&metadata_path.join(MANIFEST_FILE_NAME))?;
    let aliases = AliasBindings::from_manifest(&manifest);
    let type_name = format!(
        "{}::{}",
        config.namespace_root,
        unit.name.to_upper_camel_case()
    );

    Ok(Group {
        id: unit.id,
        name: unit.name,
        path: dir.to_path_buf(),
        relative_path,
        base_dir,
        metadata_path,
        routes_file,
        type_name,
        manifest,
        aliases,
        features: Vec::new(),
        state: IndexMap::new(),
    })
}

fn build_feature(
    config: &SetupConfig,
    features_path: &Path,
    group: &Group,
    dir: &Path,
    feature_controller_paths: &mut Vec<PathBuf>,
    ignored_paths: &mut Vec<PathBuf>,
) -> Result<Feature> {
    let base_dir = paths::base_dir_name(dir)
        .ok_or_else(|| FeaturePackError::invalid_identifier(UnitKind::Feature, dir))?;
    let unit = ident::parse(UnitKind::Feature, &base_dir)
        .ok_or_else(|| FeaturePackError::invalid_identifier(UnitKind::Feature, dir))?;

    let relative_path = paths::strip_root(&config.root, dir);
    let sub_path = paths::strip_root(features_path, dir);

    // These load through special paths (custom routes before the host's
    // default routes, controllers outside the autoloader, hook scripts
    // once at setup), so the autoloader must skip them. Recorded
    // whether or not the files exist.
    ignored_paths.push(relative_path.join(AFTER_INITIALIZE_FILE_NAME));
    ignored_paths.push(relative_path.join(ROUTES_FILE_NAME));
    let controller_path = relative_path.join(CONTROLLER_FILE_NAME);
    feature_controller_paths.push(controller_path.clone());
    ignored_paths.push(controller_path);

    let routes_file_path = dir.join(ROUTES_FILE_NAME);
    let routes_file = routes_file_path.is_file().then(|| sub_path.join("routes"));

    let manifest = Manifest::load(&dir.join(MANIFEST_FILE_NAME))?;
    let aliases = AliasBindings::from_manifest(&manifest);
    let type_name = format!("{}::{}", group.type_name, unit.name.to_upper_camel_case());

    Ok(Feature {
        id: unit.id,
        name: unit.name,
        group_name: group.name.clone(),
        group_base_dir: group.base_dir.clone(),
        absolute_path: dir.to_path_buf(),
        relative_path,
        sub_path: sub_path.clone(),
        routes_file_path,
        routes_file,
        views_absolute_path: dir.join("views"),
        views_relative_path: sub_path.join("views"),
        javascript_relative_path: sub_path.join("javascript"),
        type_name,
        manifest,
        aliases,
        state: IndexMap::new(),
    })
}

/// Duplicate names break the scan-based lookup and are fatal.
/// Duplicate ids are accepted, as the conventions never enforced them,
/// but flagged loudly.
fn check_unique<'a>(
    kind: UnitKind,
    units: impl Iterator<Item = (&'a str, &'a str, &'a str)>,
) -> Result<()> {
    let mut names: HashMap<&str, &str> = HashMap::new();
    let mut ids: HashMap<&str, &str> = HashMap::new();
    for (name, id, dir) in units {
        if names.insert(name, dir).is_some() {
            return Err(FeaturePackError::duplicate_unit(kind, name));
        }
        if let Some(first) = ids.insert(id, dir) {
            warn!(kind = %kind, id = %id, first = %first, second = %dir, "duplicate unit id");
        }
    }
    Ok(())
}

/// Collect `*.js` assets under every non-underscore top-level
/// directory, as features-root-relative paths, sorted.
fn discover_javascript_files(features_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in
        paths::unit_dirs(features_path).map_err(|e| FeaturePackError::io(features_path, e))?
    {
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                match e.into_io_error() {
                    Some(io_err) => FeaturePackError::io(path, io_err),
                    None => FeaturePackError::io(
                        path,
                        std::io::Error::other("filesystem loop while scanning assets"),
                    ),
                }
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "js")
            {
                files.push(paths::strip_root(features_path, entry.path()));
            }
        }
    }
    files.sort();
    Ok(files)
}
