use crate::component::ComponentRef;

/// A single binding from a URL path to a page component, possibly with
/// nested children.
///
/// Nodes come in three shapes, mirroring what the site generator emits:
///
/// - exact pages (`exact: true`), matched on path equality only;
/// - section layouts, matched on prefix containment, whose ordered
///   `children` carry the nested pages (children paths are always
///   prefixed by the parent path);
/// - the terminal `*` catch-all, which matches anything.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub(crate) path: String,
    pub(crate) component: ComponentRef,
    pub(crate) exact: bool,
    pub(crate) children: Vec<RouteNode>,
    pub(crate) sidebar: Option<String>,
}

impl RouteNode {
    /// Creates a prefix-matched node. Use [`with_children`](Self::with_children)
    /// to attach the nested pages of a section.
    pub fn new(path: impl Into<String>, component: ComponentRef) -> Self {
        RouteNode {
            path: path.into(),
            component,
            exact: false,
            children: Vec::new(),
            sidebar: None,
        }
    }

    /// Creates a node that only matches on exact path equality.
    pub fn exact(path: impl Into<String>, component: ComponentRef) -> Self {
        RouteNode {
            exact: true,
            ..RouteNode::new(path, component)
        }
    }

    /// Creates the terminal `*` node matching any otherwise-unmatched path.
    pub fn catch_all(component: ComponentRef) -> Self {
        RouteNode::new("*", component)
    }

    /// Attaches the ordered child nodes of a section.
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Attaches the sidebar configuration shown alongside the page.
    pub fn with_sidebar(mut self, id: impl Into<String>) -> Self {
        self.sidebar = Some(id.into());
        self
    }

    /// The URL path this node is bound to, or `*` for the catch-all.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The reference to the render unit for this node.
    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    /// Whether this node matches on exact path equality only.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Whether this is the terminal `*` node.
    pub fn is_catch_all(&self) -> bool {
        self.path == "*"
    }

    /// The ordered child nodes, empty for leaf pages.
    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }

    /// The sidebar identifier for this page, if any.
    pub fn sidebar(&self) -> Option<&str> {
        self.sidebar.as_deref()
    }

    // Whether this node claims `path` at all, ignoring children.
    fn claims(&self, path: &str) -> bool {
        if self.path == "*" {
            return true;
        }
        if self.exact {
            return self.path == path;
        }
        contains(&self.path, path)
    }

    // Returns the deepest node under `self` matching `path`, pushing the
    // enclosing layout nodes onto `trail` (outer to inner). Children are
    // tried in order and the first match wins; a section whose children
    // all miss matches itself.
    pub(crate) fn descend<'t>(
        &'t self,
        path: &str,
        trail: &mut Vec<&'t RouteNode>,
    ) -> Option<&'t RouteNode> {
        if !self.claims(path) {
            return None;
        }

        trail.push(self);
        for child in &self.children {
            if let Some(found) = child.descend(path, trail) {
                return Some(found);
            }
        }
        trail.pop();

        Some(self)
    }
}

// Prefix containment at a segment boundary: `/docs` contains `/docs` and
// `/docs/install`, but not `/docs-old`.
fn contains(node: &str, path: &str) -> bool {
    match path.strip_prefix(node) {
        Some("") => true,
        Some(rest) => node.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_boundaries() {
        assert!(contains("/docs", "/docs"));
        assert!(contains("/docs", "/docs/install"));
        assert!(contains("/docs/", "/docs/install"));
        assert!(!contains("/docs", "/docs-old"));
        assert!(!contains("/docs", "/doc"));
        assert!(!contains("/docs", "/"));
    }

    #[test]
    fn exact_does_not_claim_descendants() {
        let node = RouteNode::exact("/blog", ComponentRef::unhashed("/blog"));
        assert!(node.claims("/blog"));
        assert!(!node.claims("/blog/archive"));
    }

    #[test]
    fn section_matches_itself_when_children_miss() {
        let section = RouteNode::new("/docs", ComponentRef::unhashed("/docs")).with_children(vec![
            RouteNode::exact("/docs/install", ComponentRef::unhashed("/docs/install")),
        ]);

        let mut trail = Vec::new();
        let found = section.descend("/docs/unwritten", &mut trail).unwrap();
        assert_eq!(found.path(), "/docs");
        assert!(trail.is_empty());
    }
}
