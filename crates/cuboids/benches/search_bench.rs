//! Criterion benches for the full search on the unit cube.
//!
//! - parallel on the global pool vs. sequential on the calling thread
//! - dedicated pools of 1, 2 and 4 workers
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cuboids::search::{NetCollection, Search, SearchCfg};
use cuboids::Cuboid;

fn bench_unit_cube(c: &mut Criterion) {
    let cube = Cuboid::new(1, 1, 1);
    let mut group = c.benchmark_group("search_unit_cube");
    for (name, cfg) in [
        ("parallel", SearchCfg::default()),
        (
            "sequential",
            SearchCfg {
                parallel: false,
                threads: None,
            },
        ),
    ] {
        group.bench_function(BenchmarkId::new("mode", name), |b| {
            b.iter(|| {
                let results = NetCollection::new();
                let _ = Search::new(&cube).with_cfg(cfg).run(&results);
                results.len()
            })
        });
    }
    for threads in [1usize, 2, 4] {
        let cfg = SearchCfg {
            parallel: true,
            threads: Some(threads),
        };
        group.bench_function(BenchmarkId::new("threads", threads), |b| {
            b.iter(|| {
                let results = NetCollection::new();
                let _ = Search::new(&cube).with_cfg(cfg).run(&results);
                results.len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unit_cube);
criterion_main!(benches);
