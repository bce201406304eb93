//! Append throughput benchmarks for the message store.
//!
//! Measures steady-state appends into a full store (every append evicts) and
//! the cost of a disabled store, where deferred text is never rendered.
//!
//! Run with: cargo bench --bench append_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pullup_console::model::Severity;
use pullup_console::state::{MessageStore, StoreProfile};

fn full_store(profile: StoreProfile) -> MessageStore {
    let mut store = MessageStore::from_profile(profile).expect("valid profile");
    for i in 0..profile.capacity {
        store.append(format!("warmup {i}"), Severity::Debug);
    }
    store
}

fn bench_append_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_with_eviction");

    for (name, profile) in [
        ("preview_console", StoreProfile::PREVIEW_CONSOLE),
        ("preview_log", StoreProfile::PREVIEW_LOG),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &profile, |b, profile| {
            b.iter_batched_ref(
                || full_store(*profile),
                |store| {
                    for i in 0..100 {
                        black_box(store.append(format!("message {i}"), Severity::Info));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_append_with_listener(c: &mut Criterion) {
    c.bench_function("append_notifies_listener", |b| {
        let mut store = full_store(StoreProfile::PREVIEW_LOG);
        store.subscribe(|event| {
            black_box(event);
        });

        b.iter(|| black_box(store.append("observed", Severity::Trace)));
    });
}

fn bench_disabled_deferred(c: &mut Criterion) {
    c.bench_function("disabled_append_with", |b| {
        let mut store = full_store(StoreProfile::PREVIEW_LOG);
        store.set_enabled(false);

        b.iter(|| {
            black_box(store.append_with(Severity::Debug, || {
                (0..64).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
            }))
        });
    });
}

criterion_group!(
    benches,
    bench_append_with_eviction,
    bench_append_with_listener,
    bench_disabled_deferred
);
criterion_main!(benches);
