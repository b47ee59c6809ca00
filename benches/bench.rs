use criterion::{black_box, criterion_group, criterion_main, Criterion};
use siteroute::{ComponentRef, RouteNode, RouteTree};

fn page(path: &str) -> RouteNode {
    RouteNode::exact(path, ComponentRef::new(path, "bench"))
}

fn section(path: &str, children: Vec<RouteNode>) -> RouteNode {
    RouteNode::new(path, ComponentRef::new(path, "bench")).with_children(children)
}

fn site_tree() -> RouteTree {
    RouteTree::new(vec![
        page("/did-issuer-server/blog"),
        page("/did-issuer-server/blog/archive"),
        page("/did-issuer-server/blog/authors"),
        page("/did-issuer-server/blog/tags"),
        page("/did-issuer-server/blog/tags/docusaurus"),
        page("/did-issuer-server/blog/welcome"),
        page("/did-issuer-server/markdown-page"),
        section(
            "/did-issuer-server/docs",
            vec![
                section(
                    "/did-issuer-server/docs/next",
                    vec![section(
                        "/did-issuer-server/docs/next",
                        vec![
                            page("/did-issuer-server/docs/next/did-issuer-server/api/Issuer_API_ko"),
                            page("/did-issuer-server/docs/next/did-issuer-server/db/OpenDID_TableDefinition_Issuer"),
                        ],
                    )],
                ),
                section(
                    "/did-issuer-server/docs",
                    vec![section(
                        "/did-issuer-server/docs",
                        vec![
                            page("/did-issuer-server/docs/did-issuer-server/api/Issuer_API_ko"),
                            page("/did-issuer-server/docs/did-issuer-server/db/OpenDID_TableDefinition_Issuer"),
                        ],
                    )],
                ),
            ],
        ),
        page("/did-issuer-server/"),
        RouteNode::catch_all(ComponentRef::unhashed("*")),
    ])
    .unwrap()
}

fn resolve(c: &mut Criterion) {
    let tree = site_tree();
    let mut group = c.benchmark_group("resolve");

    group.bench_function("exact page", |b| {
        b.iter(|| {
            let found = tree
                .resolve(black_box("/did-issuer-server/blog/tags/docusaurus"))
                .unwrap();
            assert!(found.node.is_exact());
        });
    });

    group.bench_function("nested docs page", |b| {
        b.iter(|| {
            let found = tree
                .resolve(black_box(
                    "/did-issuer-server/docs/next/did-issuer-server/db/OpenDID_TableDefinition_Issuer",
                ))
                .unwrap();
            assert_eq!(found.trail.len(), 3);
        });
    });

    group.bench_function("catch-all fallback", |b| {
        b.iter(|| {
            let found = tree.resolve(black_box("/unknown/path")).unwrap();
            assert!(found.is_catch_all());
        });
    });

    group.finish();
}

criterion_group!(benches, resolve);
criterion_main!(benches);
