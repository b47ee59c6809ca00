//! Component references and the loader registry.
//!
//! The generator binds every route to a component through a creator
//! indirection keyed by chunk path and a short content hash. Here that
//! indirection is re-modeled as data: a [`ComponentRef`] in the tree, and
//! a [`ComponentRegistry`] lookup table on the rendering side mapping each
//! `(path, hash)` pair to the host's loadable page unit. The tree stays
//! decoupled from the rendering strategy.

use crate::router::RouteTree;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An opaque handle to a render unit: the chunk path plus the short
/// content hash the generator stamped into the manifest.
///
/// The hash changes whenever the page content does, so `(path, hash)`
/// uniquely identifies one built page bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    /// The chunk path, typically equal to the route path.
    pub path: String,
    /// The short content hash, absent only for the catch-all unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl ComponentRef {
    /// A reference carrying a content hash.
    pub fn new(path: impl Into<String>, hash: impl Into<String>) -> Self {
        ComponentRef {
            path: path.into(),
            hash: Some(hash.into()),
        }
    }

    /// A reference without a content hash.
    pub fn unhashed(path: impl Into<String>) -> Self {
        ComponentRef {
            path: path.into(),
            hash: None,
        }
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hash {
            Some(hash) => write!(f, "{}@{}", self.path, hash),
            None => write!(f, "{}", self.path),
        }
    }
}

/// A lookup table resolving a [`ComponentRef`] into the host's loadable
/// page unit `T` — a loader closure, a chunk handle, whatever the renderer
/// consumes.
///
/// ```
/// use siteroute::{ComponentRef, ComponentRegistry};
///
/// let mut registry = ComponentRegistry::new();
/// registry.register(ComponentRef::new("/blog", "b9d"), "blog-chunk.js");
/// registry.set_not_found("404-chunk.js");
///
/// assert_eq!(
///     registry.get(&ComponentRef::new("/blog", "b9d")),
///     Some(&"blog-chunk.js")
/// );
/// assert_eq!(registry.not_found(), Some(&"404-chunk.js"));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentRegistry<T> {
    units: HashMap<ComponentRef, T>,
    not_found: Option<T>,
}

impl<T> ComponentRegistry<T> {
    pub fn new() -> Self {
        ComponentRegistry {
            units: HashMap::new(),
            not_found: None,
        }
    }

    /// Registers the unit for a component reference, returning the unit it
    /// displaced. Last registration wins, matching generator output where
    /// later build steps overwrite earlier chunks.
    pub fn register(&mut self, component: ComponentRef, unit: T) -> Option<T> {
        self.units.insert(component, unit)
    }

    /// Sets the default unit rendered when resolution falls through every
    /// route and the tree has no catch-all.
    pub fn set_not_found(&mut self, unit: T) {
        self.not_found = Some(unit);
    }

    /// The default not-found unit, if one was registered.
    pub fn not_found(&self) -> Option<&T> {
        self.not_found.as_ref()
    }

    /// Looks up the unit for a component reference.
    pub fn get(&self, component: &ComponentRef) -> Option<&T> {
        self.units.get(component)
    }

    /// Checks that every component referenced by the tree has a registered
    /// unit, returning the references that are missing. A non-empty result
    /// means the manifest and the built chunks are out of sync.
    pub fn verify<'tree>(&self, tree: &'tree RouteTree) -> Vec<&'tree ComponentRef> {
        let missing: Vec<_> = tree
            .iter()
            .map(|node| node.component())
            .filter(|&component| !self.units.contains_key(component))
            .collect();
        for component in &missing {
            warn!("no unit registered for component {component}");
        }
        missing
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<T> Default for ComponentRegistry<T> {
    fn default() -> Self {
        ComponentRegistry::new()
    }
}
