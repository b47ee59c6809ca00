use siteroute::{BuildError, ComponentRef, RouteNode, RouteTree};

struct BuildTest(Vec<RouteNode>, Result<(), BuildError>);

impl BuildTest {
    fn run(self) {
        let got = RouteTree::new(self.0).map(|_| ());
        assert_eq!(got, self.1);
    }
}

fn page(path: &str) -> RouteNode {
    RouteNode::exact(path, ComponentRef::unhashed(path))
}

fn section(path: &str, children: Vec<RouteNode>) -> RouteNode {
    RouteNode::new(path, ComponentRef::unhashed(path)).with_children(children)
}

fn catch_all() -> RouteNode {
    RouteNode::catch_all(ComponentRef::unhashed("*"))
}

fn conflict(with: &str) -> Result<(), BuildError> {
    Err(BuildError::Conflict { with: with.into() })
}

#[test]
fn sibling_conflict() {
    BuildTest(
        vec![page("/blog"), page("/docs"), page("/blog")],
        conflict("/blog"),
    )
    .run()
}

#[test]
fn nested_sibling_conflict() {
    BuildTest(
        vec![section(
            "/docs",
            vec![page("/docs/install"), page("/docs/install")],
        )],
        conflict("/docs/install"),
    )
    .run()
}

#[test]
fn same_path_on_different_levels_is_fine() {
    // the version overlay nests a layout under a layout with the same path
    BuildTest(
        vec![section(
            "/docs",
            vec![section("/docs", vec![page("/docs/install")])],
        )],
        Ok(()),
    )
    .run()
}

#[test]
fn child_outside_parent() {
    BuildTest(
        vec![section("/docs", vec![page("/blog/welcome")])],
        Err(BuildError::OutsideParent {
            parent: "/docs".into(),
            child: "/blog/welcome".into(),
        }),
    )
    .run()
}

#[test]
fn relative_path() {
    BuildTest(
        vec![page("docs")],
        Err(BuildError::RelativePath {
            path: "docs".into(),
        }),
    )
    .run()
}

#[test]
fn catch_all_must_be_last() {
    BuildTest(
        vec![catch_all(), page("/blog")],
        Err(BuildError::MisplacedCatchAll),
    )
    .run()
}

#[test]
fn catch_all_must_be_top_level() {
    BuildTest(
        vec![section("/docs", vec![catch_all()])],
        Err(BuildError::OutsideParent {
            parent: "/docs".into(),
            child: "*".into(),
        }),
    )
    .run()
}

#[test]
fn catch_all_must_be_a_leaf() {
    BuildTest(
        vec![RouteNode::catch_all(ComponentRef::unhashed("*")).with_children(vec![page("/x")])],
        Err(BuildError::CatchAllNotLeaf),
    )
    .run()
}

#[test]
fn well_formed_site() {
    BuildTest(
        vec![
            page("/blog"),
            page("/blog/archive"),
            section(
                "/docs",
                vec![
                    section("/docs/next", vec![page("/docs/next/api")]),
                    section("/docs", vec![page("/docs/api")]),
                ],
            ),
            page("/"),
            catch_all(),
        ],
        Ok(()),
    )
    .run()
}

#[test]
fn empty_tree_is_valid_but_resolves_nothing() {
    let tree = RouteTree::new(Vec::new()).unwrap();
    assert!(tree.resolve("/anything").is_err());
    assert!(tree.roots().is_empty());
}
