//! Constant alias resolution.
//!
//! A manifest may declare `const_aliases`, short names that resolve to
//! fully-qualified constants within the owning unit's namespace.
//! Bindings are plain data; resolution goes through a host-provided
//! [`ConstResolver`] on every access, with no caching. Resolution is
//! deliberately lazy: the host's symbol table may not be fully
//! populated at setup time, so a dangling target only surfaces as
//! [`crate::FeaturePackError::UnresolvedConst`] when the alias is
//! actually used.

use serde::Serialize;

use crate::error::{FeaturePackError, Result};
use crate::manifest::{ConstAlias, Manifest};

/// Lookup into the host's symbol table.
///
/// `Const` is whatever the host uses to represent a resolved type
/// reference.
pub trait ConstResolver {
    /// The host's resolved-constant representation.
    type Const;

    /// Resolve a fully-qualified constant path such as
    /// `FeaturePack::Foo::Bar::SomeType`.
    fn lookup(&self, qualified: &str) -> Option<Self::Const>;
}

/// The ordered alias bindings of one group or feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AliasBindings {
    entries: Vec<ConstAlias>,
}

impl AliasBindings {
    /// Build bindings from a unit's manifest, preserving declaration
    /// order.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            entries: manifest.const_aliases.clone(),
        }
    }

    /// Whether the unit declared any aliases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The alias names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.alias.as_str())
    }

    /// The declared target for an alias, if any.
    pub fn target(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.target.as_str())
    }

    /// The fully-qualified constant path an alias points at, given the
    /// owning unit's type name.
    pub fn qualified_target(&self, owner_type_name: &str, alias: &str) -> Option<String> {
        self.target(alias)
            .map(|target| format!("{owner_type_name}::{target}"))
    }

    /// Resolve an alias through the host's symbol table.
    ///
    /// # Errors
    ///
    /// `UnresolvedConst` when the alias is not declared or its target
    /// cannot be found.
    pub fn resolve<R: ConstResolver>(
        &self,
        owner_type_name: &str,
        alias: &str,
        resolver: &R,
    ) -> Result<R::Const> {
        let qualified = self
            .qualified_target(owner_type_name, alias)
            .ok_or_else(|| {
                FeaturePackError::unresolved_const(format!("{owner_type_name}::{alias}"))
            })?;
        resolver
            .lookup(&qualified)
            .ok_or_else(|| FeaturePackError::unresolved_const(qualified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Symbol table stub that records every lookup it serves.
    struct MapResolver {
        consts: HashMap<String, u32>,
        lookups: RefCell<Vec<String>>,
    }

    impl MapResolver {
        fn with(consts: &[(&str, u32)]) -> Self {
            Self {
                consts: consts
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
                lookups: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConstResolver for MapResolver {
        type Const = u32;

        fn lookup(&self, qualified: &str) -> Option<u32> {
            self.lookups.borrow_mut().push(qualified.to_string());
            self.consts.get(qualified).copied()
        }
    }

    fn bindings(pairs: &[(&str, &str)]) -> AliasBindings {
        let manifest = Manifest {
            const_aliases: pairs
                .iter()
                .map(|(alias, target)| ConstAlias {
                    alias: alias.to_string(),
                    target: target.to_string(),
                })
                .collect(),
            ..Manifest::default()
        };
        AliasBindings::from_manifest(&manifest)
    }

    #[test]
    fn test_resolve_within_owner_namespace() {
        let bindings = bindings(&[("Widget", "SomeType")]);
        let resolver = MapResolver::with(&[("FeaturePack::Foo::Bar::SomeType", 7)]);

        let resolved = bindings
            .resolve("FeaturePack::Foo::Bar", "Widget", &resolver)
            .unwrap();
        assert_eq!(resolved, 7);
    }

    #[test]
    fn test_missing_target_is_unresolved() {
        let bindings = bindings(&[("Widget", "SomeType")]);
        let resolver = MapResolver::with(&[]);

        let err = bindings
            .resolve("FeaturePack::Foo", "Widget", &resolver)
            .unwrap_err();
        assert!(matches!(err, FeaturePackError::UnresolvedConst { .. }));
        assert!(err.to_string().contains("FeaturePack::Foo::SomeType"));
    }

    #[test]
    fn test_unknown_alias_is_unresolved() {
        let bindings = bindings(&[("Widget", "SomeType")]);
        let resolver = MapResolver::with(&[]);

        let err = bindings
            .resolve("FeaturePack::Foo", "Gadget", &resolver)
            .unwrap_err();
        assert!(matches!(err, FeaturePackError::UnresolvedConst { .. }));
    }

    #[test]
    fn test_resolution_is_lazy_not_cached() {
        let bindings = bindings(&[("Widget", "SomeType")]);
        let resolver = MapResolver::with(&[("FeaturePack::Foo::SomeType", 1)]);

        bindings
            .resolve("FeaturePack::Foo", "Widget", &resolver)
            .unwrap();
        bindings
            .resolve("FeaturePack::Foo", "Widget", &resolver)
            .unwrap();
        assert_eq!(resolver.lookups.borrow().len(), 2);
    }

    #[test]
    fn test_names_keep_declaration_order() {
        let bindings = bindings(&[("Zeta", "Z"), ("Alpha", "A")]);
        let names: Vec<&str> = bindings.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }
}
