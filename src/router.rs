//! The immutable route tree and its resolver.
//!
//! A [`RouteTree`] holds the ordered top-level route sequence of one site
//! build. Sibling order encodes precedence: the first node claiming a path
//! wins, and within that node the longest nested match wins. The generator
//! lists the `*` catch-all last, so it is the fallback by construction.
//!
//! The tree is validated once in [`RouteTree::new`] and read-only
//! afterwards; it is rebuilt wholesale on the next site build, never
//! patched incrementally.

use crate::component::ComponentRef;
use crate::error::{BuildError, ResolveError};
use crate::tree::RouteNode;

use std::collections::HashSet;

/// An ordered, statically-defined tree of route nodes.
///
/// ```
/// use siteroute::{ComponentRef, RouteNode, RouteTree};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = RouteTree::new(vec![
///     RouteNode::exact("/blog", ComponentRef::new("/blog", "b9d")),
///     RouteNode::catch_all(ComponentRef::unhashed("*")),
/// ])?;
///
/// assert_eq!(tree.resolve("/blog")?.node.path(), "/blog");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTree {
    roots: Vec<RouteNode>,
}

/// A successful resolution: the deepest matching node plus the chain of
/// section layouts enclosing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'tree> {
    /// The deepest node claiming the requested path.
    pub node: &'tree RouteNode,
    /// The enclosing layout nodes, outer to inner, excluding `node`.
    /// Nested routes render as nested layouts, so callers mount these
    /// around the page unit.
    pub trail: Vec<&'tree RouteNode>,
}

impl<'tree> Resolved<'tree> {
    /// The render unit reference of the matched node.
    pub fn component(&self) -> &'tree ComponentRef {
        self.node.component()
    }

    /// The sidebar identifier of the matched node, if any.
    pub fn sidebar(&self) -> Option<&'tree str> {
        self.node.sidebar()
    }

    /// Whether the path fell through to the terminal `*` node.
    pub fn is_catch_all(&self) -> bool {
        self.node.is_catch_all()
    }
}

impl RouteTree {
    /// Builds a tree from the top-level route sequence, rejecting
    /// generator output that violates the construction invariants:
    /// duplicate sibling paths, children escaping their parent's prefix,
    /// relative paths, and a `*` anywhere but the final top-level slot.
    pub fn new(roots: Vec<RouteNode>) -> Result<Self, BuildError> {
        validate(&roots, true)?;
        debug!(
            "route tree built: {} top-level routes, catch-all {}",
            roots.len(),
            if roots.last().is_some_and(RouteNode::is_catch_all) {
                "present"
            } else {
                "absent"
            }
        );
        Ok(RouteTree { roots })
    }

    /// Returns the node that should render `path`.
    ///
    /// `path` must already be normalized (no query string, trailing slash
    /// resolved); [`crate::path::normalize`] produces that form. Resolution
    /// is a pure function of the tree and the input: no allocation beyond
    /// the layout trail, no mutation, `&self` only.
    ///
    /// Any non-matching input — including malformed paths — resolves to
    /// the catch-all when one is registered. [`ResolveError::NotFound`] is
    /// only possible on a tree without one, and is never fatal: callers
    /// render their default not-found unit.
    pub fn resolve(&self, path: &str) -> Result<Resolved<'_>, ResolveError> {
        for root in &self.roots {
            let mut trail = Vec::new();
            if let Some(node) = root.descend(path, &mut trail) {
                if node.is_catch_all() {
                    trace!("no route claimed '{path}', falling back to catch-all");
                }
                return Ok(Resolved { node, trail });
            }
        }
        Err(ResolveError::NotFound)
    }

    /// The ordered top-level route sequence.
    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    /// The terminal `*` node, when the manifest registered one.
    pub fn catch_all(&self) -> Option<&RouteNode> {
        self.roots.last().filter(|node| node.is_catch_all())
    }

    /// Visits every node in definition order, depth-first. Useful for
    /// sitemap emission and registry consistency checks.
    pub fn iter(&self) -> Iter<'_> {
        let mut stack: Vec<&RouteNode> = self.roots.iter().collect();
        stack.reverse();
        Iter { stack }
    }
}

impl<'tree> IntoIterator for &'tree RouteTree {
    type Item = &'tree RouteNode;
    type IntoIter = Iter<'tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A depth-first iterator over every node of a [`RouteTree`].
pub struct Iter<'tree> {
    stack: Vec<&'tree RouteNode>,
}

impl<'tree> Iterator for Iter<'tree> {
    type Item = &'tree RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

fn validate(siblings: &[RouteNode], top_level: bool) -> Result<(), BuildError> {
    let mut seen = HashSet::with_capacity(siblings.len());

    for (i, node) in siblings.iter().enumerate() {
        if node.is_catch_all() {
            if !top_level || i + 1 != siblings.len() {
                return Err(BuildError::MisplacedCatchAll);
            }
            if !node.children.is_empty() {
                return Err(BuildError::CatchAllNotLeaf);
            }
        } else if !node.path.starts_with('/') {
            return Err(BuildError::RelativePath {
                path: node.path.clone(),
            });
        }

        if !seen.insert(node.path.as_str()) {
            return Err(BuildError::Conflict {
                with: node.path.clone(),
            });
        }

        // Descent relies on child paths sharing the parent prefix; a child
        // outside it would be unreachable.
        for child in &node.children {
            if !child.path.starts_with(node.path.as_str()) {
                return Err(BuildError::OutsideParent {
                    parent: node.path.clone(),
                    child: child.path.clone(),
                });
            }
        }

        validate(&node.children, false)?;
    }

    Ok(())
}
