//! Performance benchmarks for newest

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use newest::test_utils::TestTree;
use newest::{Collector, Config, Entry, TimeField, Walker, sort_entries};

/// Build a tree with `dirs` directories of `files_per_dir` files each.
fn build_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file_with_mtime(
                &format!("dir{}/file{}.txt", d, f),
                "benchmark content",
                1_000_000 + ((d * files_per_dir + f) as i64),
            );
        }
    }
    tree
}

fn bench_walk(c: &mut Criterion) {
    let tree = build_tree(20, 50);
    let config = Config {
        count: 10,
        roots: vec![tree.path().to_path_buf()],
        ..Default::default()
    };

    c.bench_function("walk_1000_files", |b| {
        b.iter(|| {
            let mut collector = Collector::new(TimeField::Mtime);
            Walker::new(&config)
                .walk(black_box(tree.path()), &mut collector)
                .expect("walk should succeed");
            black_box(collector.into_entries())
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    // Timestamps deliberately interleaved so the sort does real work.
    let entries: Vec<Entry> = (0..10_000i64)
        .map(|i| Entry::new((i * 7919) % 10_000, format!("file{}", i)))
        .collect();

    c.bench_function("sort_10k_entries", |b| {
        b.iter(|| {
            let mut set = entries.clone();
            sort_entries(black_box(&mut set), false);
            black_box(set)
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let tree = build_tree(10, 20);
    let config = Config {
        count: 10,
        roots: vec![tree.path().to_path_buf()],
        ..Default::default()
    };

    c.bench_function("walk_and_sort_200_files", |b| {
        b.iter(|| {
            let mut collector = Collector::new(config.time_field);
            Walker::new(&config)
                .walk(tree.path(), &mut collector)
                .expect("walk should succeed");
            let mut entries = collector.into_entries();
            sort_entries(&mut entries, config.reverse);
            black_box(entries)
        })
    });
}

criterion_group!(benches, bench_walk, bench_sort, bench_pipeline);
criterion_main!(benches);
