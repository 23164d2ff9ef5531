//! Benchmarks for daily puzzle generation.
//!
//! Measures the complete generation pipeline per family — seed derivation,
//! parameter selection, structure construction, clue selection, and
//! uniqueness validation — over a set of fixed identifiers so runs stay
//! reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use puzzlemint_generator::{PuzzleKind, generate};

const IDS: [&str; 3] = ["2024-01-01", "2024-06-15", "2025-12-31"];

fn bench_family(c: &mut Criterion, name: &str, kind: PuzzleKind) {
    for id in IDS {
        c.bench_with_input(BenchmarkId::new(name, id), &id, |b, id| {
            b.iter(|| generate(kind, hint::black_box(id)));
        });
    }
}

fn bench_generate_path(c: &mut Criterion) {
    bench_family(c, "generate_path", PuzzleKind::Path);
}

fn bench_generate_topology(c: &mut Criterion) {
    bench_family(c, "generate_topology", PuzzleKind::Topology);
}

fn bench_generate_flow(c: &mut Criterion) {
    bench_family(c, "generate_flow", PuzzleKind::Flow);
}

fn bench_generate_identity(c: &mut Criterion) {
    bench_family(c, "generate_identity", PuzzleKind::Identity);
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets =
        bench_generate_path,
        bench_generate_topology,
        bench_generate_flow,
        bench_generate_identity
);
criterion_main!(benches);
