//! Registry performance benchmarks.
//!
//! The entity clock consults the registry every pass and the event bridge on
//! every damage event, so lookup and active-snapshot cost directly bound how
//! many governed entities a server can carry. These benchmarks size that
//! cost at a few population scales.
//!
//! Run with: `cargo bench --bench registry_benchmarks`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bestiary_core::engine::ObjectId;
use bestiary_core::kind::EntityKind;
use bestiary_core::kinds::{LlamaKind, WitherKind};
use bestiary_core::registry::EntityRegistry;
use bestiary_defs::attributes::AttributeBag;

/// Populate a registry with `count` entries; every other entry is active.
fn populated_registry(count: u64) -> EntityRegistry {
    let active: Arc<dyn EntityKind> = Arc::new(LlamaKind::configure(&AttributeBag::absent()));
    let quiet: Arc<dyn EntityKind> = Arc::new(WitherKind::configure(&AttributeBag::absent()));

    let mut registry = EntityRegistry::new();
    for raw in 0..count {
        let id = ObjectId::new(raw);
        if raw % 2 == 0 {
            registry.register(id, Arc::clone(&active), active.behavior());
        } else {
            registry.register(id, Arc::clone(&quiet), None);
        }
    }
    registry
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    for count in [100u64, 1_000, 10_000] {
        let registry = populated_registry(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                for raw in 0..count {
                    black_box(registry.lookup(ObjectId::new(raw)));
                }
            });
        });
    }
    group.finish();
}

fn bench_active_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_active_snapshot");
    for count in [100u64, 1_000, 10_000] {
        let registry = populated_registry(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(registry.active_ids()));
        });
    }
    group.finish();
}

fn bench_register_unregister(c: &mut Criterion) {
    let kind: Arc<dyn EntityKind> = Arc::new(LlamaKind::configure(&AttributeBag::absent()));
    c.bench_function("registry_register_unregister", |b| {
        let mut registry = EntityRegistry::new();
        b.iter(|| {
            let id = ObjectId::new(42);
            registry.register(id, Arc::clone(&kind), kind.behavior());
            black_box(registry.unregister(id));
        });
    });
}

criterion_group!(
    benches,
    bench_lookup,
    bench_active_snapshot,
    bench_register_unregister
);
criterion_main!(benches);
