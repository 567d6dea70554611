use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pathpick::picker::{compute_visible, ExclusionSet};
use pathpick::{FilePicker, FileTree, Node};

/// A synthetic project: `width` packages, each with sources and a
/// `node_modules` directory.
fn build_tree(width: usize) -> FileTree {
    let packages = (0..width).map(|i| {
        let sources = (0..20).map(|j| Node::file(format!("mod_{}.rs", j), Some(1024 + j as u64)));
        let deps = (0..30).map(|j| {
            Node::directory(
                format!("dep_{}", j),
                (0..5).map(|k| Node::file(format!("index_{}.js", k), Some(512))),
            )
        });
        Node::directory(
            format!("pkg_{}", i),
            vec![
                Node::directory("src", sources),
                Node::directory("node_modules", deps),
                Node::file("Cargo.toml", Some(300)),
            ],
        )
    });
    FileTree::from_root(Node::directory("root", packages))
}

fn bench_visible(c: &mut Criterion) {
    let tree = build_tree(50);
    let paths = tree.all_paths();
    let mut exclusions = ExclusionSet::new();
    exclusions.insert("/pkg_3/node_modules");
    exclusions.insert("/pkg_7");

    c.bench_function("compute_visible/no_search", |b| {
        b.iter(|| compute_visible(black_box(&paths), "", &exclusions))
    });
    c.bench_function("compute_visible/search", |b| {
        b.iter(|| compute_visible(black_box(&paths), black_box("mod_1"), &exclusions))
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut picker = FilePicker::new(build_tree(50));
    picker.set_exclusion("/pkg_0/node_modules", true);

    c.bench_function("toggle_selection/package", |b| {
        b.iter(|| {
            picker.toggle_selection(black_box("/pkg_0"), true);
            picker.toggle_selection(black_box("/pkg_0"), false);
        })
    });
    c.bench_function("select_all_and_stats", |b| {
        b.iter(|| {
            picker.select_all();
            black_box(picker.stats())
        })
    });
}

criterion_group!(benches, bench_visible, bench_selection);
criterion_main!(benches);
