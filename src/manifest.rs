//! Ingestion of the generated route manifest.
//!
//! The site build walks the content directory and the sidebar mapping and
//! emits the manifest as JSON: an ordered list of route descriptors, each
//! binding a path to a component reference, optionally nesting child
//! routes and naming a sidebar. This module is the serde model of that
//! output plus the read → parse → validate pipeline producing a
//! [`RouteTree`].

use crate::component::ComponentRef;
use crate::error::ManifestError;
use crate::router::RouteTree;
use crate::tree::RouteNode;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The route manifest of one site build: the ordered top-level sequence.
///
/// ```
/// use siteroute::RouteManifest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest = RouteManifest::from_json(
///     r#"[
///         {"path": "/blog", "component": {"path": "/blog", "hash": "b9d"}, "exact": true},
///         {"path": "*", "component": {"path": "*"}}
///     ]"#,
/// )?;
///
/// let tree = manifest.into_tree()?;
/// assert_eq!(tree.resolve("/blog")?.node.path(), "/blog");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteManifest {
    pub routes: Vec<RouteEntry>,
}

/// One route descriptor as emitted by the generator. Absent fields take
/// the generator's defaults: not exact, no children, no sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub component: ComponentRef,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exact: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl RouteManifest {
    /// Parses a manifest from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let manifest: RouteManifest = serde_json::from_str(raw)?;
        debug!(
            "parsed route manifest: {} top-level routes",
            manifest.routes.len()
        );
        Ok(manifest)
    }

    /// Reads and parses a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path)?;
        RouteManifest::from_json(&raw)
    }

    /// Converts the manifest into a validated [`RouteTree`]. Integrity
    /// violations — duplicate siblings, children escaping their parent,
    /// a misplaced catch-all — are rejected here, at build time, never
    /// tolerated by the resolver.
    pub fn into_tree(self) -> Result<RouteTree, ManifestError> {
        let roots = self.routes.into_iter().map(RouteEntry::into_node).collect();
        Ok(RouteTree::new(roots)?)
    }
}

impl RouteEntry {
    fn into_node(self) -> RouteNode {
        let mut node = if self.exact {
            RouteNode::exact(self.path, self.component)
        } else {
            RouteNode::new(self.path, self.component)
        };
        if let Some(sidebar) = self.sidebar {
            node = node.with_sidebar(sidebar);
        }
        if !self.routes.is_empty() {
            node = node.with_children(self.routes.into_iter().map(RouteEntry::into_node).collect());
        }
        node
    }
}
