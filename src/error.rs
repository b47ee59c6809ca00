use thiserror::Error;

/// Represents integrity violations rejected when a route tree is built.
///
/// A route tree is regenerated wholesale on every site build, so all of
/// these indicate a broken generator, not a runtime condition.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    /// A path was registered twice among the same siblings.
    #[error("route conflicts with previously registered sibling: {with}")]
    Conflict {
        /// The existing sibling route the insertion is conflicting with.
        with: String,
    },
    /// A child route escapes its parent's path prefix.
    #[error("child route '{child}' is not contained in parent '{parent}'")]
    OutsideParent { parent: String, child: String },
    /// Routes are registered with absolute paths.
    #[error("route paths must begin with '/', got '{path}'")]
    RelativePath { path: String },
    /// The `*` route is only valid as the final top-level entry.
    #[error("the catch-all route must be the final top-level entry")]
    MisplacedCatchAll,
    /// The `*` route matches everything, so children below it are dead.
    #[error("the catch-all route cannot have children")]
    CatchAllNotLeaf,
}

/// A failed resolution attempt.
///
/// ```
/// use siteroute::{ComponentRef, ResolveError, RouteNode, RouteTree};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // no catch-all registered
/// let tree = RouteTree::new(vec![RouteNode::exact(
///     "/home",
///     ComponentRef::new("/home", "2a5"),
/// )])?;
///
/// if let Err(err) = tree.resolve("/foobar") {
///     assert_eq!(err, ResolveError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ResolveError {
    /// No matching route was found.
    #[error("no route matched the requested path")]
    NotFound,
}

/// Errors produced while loading a generated route manifest.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read route manifest")]
    Io(#[from] std::io::Error),
    /// The manifest is not valid JSON of the expected shape.
    #[error("malformed route manifest")]
    Parse(#[from] serde_json::Error),
    /// The manifest parsed but violates a tree construction invariant.
    #[error(transparent)]
    Build(#[from] BuildError),
}
