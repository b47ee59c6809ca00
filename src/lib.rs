#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! An immutable route tree for generated documentation-site manifests.
//!
//! A static site build emits a route manifest: an ordered, nested list of
//! route descriptors binding URL paths to lazily-loaded page components,
//! terminated by a `*` catch-all. This crate consumes that manifest and
//! answers the one question the serving side asks: which node renders a
//! given request path?
//!
//! ```rust
//! use siteroute::{ComponentRef, RouteNode, RouteTree};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = RouteTree::new(vec![
//!     RouteNode::exact("/blog", ComponentRef::new("/blog", "b9d")),
//!     RouteNode::new("/docs", ComponentRef::new("/docs", "972")).with_children(vec![
//!         RouteNode::exact("/docs/install", ComponentRef::new("/docs/install", "6c6"))
//!             .with_sidebar("tutorialSidebar"),
//!     ]),
//!     RouteNode::catch_all(ComponentRef::unhashed("*")),
//! ])?;
//!
//! let page = tree.resolve("/docs/install")?;
//! assert_eq!(page.sidebar(), Some("tutorialSidebar"));
//!
//! // anything unmatched falls through to the catch-all
//! assert!(tree.resolve("/unknown")?.is_catch_all());
//! # Ok(())
//! # }
//! ```
//!
//! The tree is validated once at construction and never mutated afterwards;
//! [`RouteTree::resolve`] borrows `&self` only, so any number of concurrent
//! lookups may share one tree.

pub mod component;
pub mod error;
pub mod manifest;
pub mod path;
pub mod router;
pub mod tree;

#[macro_use]
extern crate log;

pub use component::{ComponentRef, ComponentRegistry};
pub use error::{BuildError, ManifestError, ResolveError};
pub use manifest::{RouteEntry, RouteManifest};
pub use router::{Resolved, RouteTree};
pub use tree::RouteNode;
