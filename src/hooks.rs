//! One-time after-initialize hooks.
//!
//! Each unit may carry at most one initialization hook, registered by
//! the host before setup. Hooks run synchronously, exactly once,
//! strictly after full discovery of groups and features and strictly
//! before the registry is returned: a hook can rely on sibling state
//! within its own group but never across groups.
//!
//! Hooks receive the unit's mutable value, so they can stash
//! unit-scoped state or amend derived data. A hook error aborts the
//! entire setup.

use indexmap::IndexMap;
use tracing::warn;

use crate::core::{Feature, Group};
use crate::error::{FeaturePackError, Result};

/// Error type hooks may return; wrapped into
/// [`FeaturePackError::HookFailed`] by the runner.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for hook bodies.
pub type HookResult = std::result::Result<(), HookError>;

type GroupHook = Box<dyn FnOnce(&mut Group) -> HookResult>;
type FeatureHook = Box<dyn FnOnce(&mut Feature) -> HookResult>;

/// Registered after-initialize hooks, keyed by unit.
///
/// Registering a second hook for the same unit replaces the first, so
/// every unit runs at most one.
#[derive(Default)]
pub struct HookRegistry {
    group_hooks: IndexMap<String, GroupHook>,
    feature_hooks: IndexMap<(String, String), FeatureHook>,
}

impl HookRegistry {
    /// Create an empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.group_hooks.is_empty() && self.feature_hooks.is_empty()
    }

    /// Register the after-initialize hook for a group.
    pub fn on_group<F>(&mut self, group_name: impl Into<String>, hook: F)
    where
        F: FnOnce(&mut Group) -> HookResult + 'static,
    {
        let name = group_name.into();
        if self.group_hooks.insert(name.clone(), Box::new(hook)).is_some() {
            warn!(group = %name, "replacing previously registered group hook");
        }
    }

    /// Register the after-initialize hook for a feature.
    pub fn on_feature<F>(
        &mut self,
        group_name: impl Into<String>,
        feature_name: impl Into<String>,
        hook: F,
    ) where
        F: FnOnce(&mut Feature) -> HookResult + 'static,
    {
        let key = (group_name.into(), feature_name.into());
        if self.feature_hooks.insert(key.clone(), Box::new(hook)).is_some() {
            warn!(group = %key.0, feature = %key.1, "replacing previously registered feature hook");
        }
    }

    /// Run every registered hook against the discovered groups.
    ///
    /// Order is group-then-features, in discovery order: all of one
    /// group's processing completes before the next group begins.
    /// Hooks whose target unit was never discovered are skipped with a
    /// warning.
    pub(crate) fn run(mut self, groups: &mut [Group]) -> Result<()> {
        for group in groups.iter_mut() {
            if let Some(hook) = self.group_hooks.shift_remove(&group.name) {
                hook(group).map_err(|e| {
                    FeaturePackError::hook_failed(format!("group '{}'", group.name), e)
                })?;
            }
            let group_name = group.name.clone();
            for feature in group.features.iter_mut() {
                let key = (group_name.clone(), feature.name.clone());
                if let Some(hook) = self.feature_hooks.shift_remove(&key) {
                    hook(feature).map_err(|e| {
                        FeaturePackError::hook_failed(
                            format!("feature '{}/{}'", key.0, key.1),
                            e,
                        )
                    })?;
                }
            }
        }

        for name in self.group_hooks.keys() {
            warn!(group = %name, "hook registered for unknown group; skipping");
        }
        for (group, feature) in self.feature_hooks.keys() {
            warn!(group = %group, feature = %feature, "hook registered for unknown feature; skipping");
        }
        Ok(())
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("group_hooks", &self.group_hooks.keys().collect::<Vec<_>>())
            .field(
                "feature_hooks",
                &self.feature_hooks.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let hooks = HookRegistry::new();
        assert!(hooks.is_empty());
    }

    #[test]
    fn test_second_registration_replaces_first() {
        let mut hooks = HookRegistry::new();
        hooks.on_group("foo", |_| Err("first".into()));
        hooks.on_group("foo", |_| Ok(()));
        assert_eq!(hooks.group_hooks.len(), 1);

        hooks.on_feature("foo", "bar", |_| Ok(()));
        hooks.on_feature("foo", "bar", |_| Ok(()));
        assert_eq!(hooks.feature_hooks.len(), 1);
    }

    #[test]
    fn test_unknown_targets_are_skipped() {
        let mut hooks = HookRegistry::new();
        hooks.on_group("ghost", |_| Err("never runs".into()));
        hooks.on_feature("ghost", "phantom", |_| Err("never runs".into()));

        let mut groups: Vec<Group> = Vec::new();
        assert!(hooks.run(&mut groups).is_ok());
    }

    #[test]
    fn test_debug_lists_keys() {
        let mut hooks = HookRegistry::new();
        hooks.on_group("foo", |_| Ok(()));
        let rendered = format!("{hooks:?}");
        assert!(rendered.contains("foo"));
    }
}
