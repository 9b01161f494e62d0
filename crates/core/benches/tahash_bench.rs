//! Benchmark for the traffic-adaptive hash

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tahash_core::{SignalState, TrafficContext, hash_bytes};

fn bench_profiles(c: &mut Criterion) {
    let input = b"benchmark input data for testing traffic-adaptive hash performance";
    let profiles = [
        ("low_green", TrafficContext::new(0.2, SignalState::Green, 0)),
        ("medium_yellow", TrafficContext::new(0.5, SignalState::Yellow, 0)),
        ("high_red", TrafficContext::new(0.9, SignalState::Red, 0)),
        ("emergency", TrafficContext::new(0.5, SignalState::Emergency, 10)),
    ];

    for (name, ctx) in profiles.iter() {
        c.bench_function(&format!("tahash_{name}"), |b| {
            b.iter(|| hash_bytes(black_box(input), ctx))
        });
    }
}

fn bench_hash_varying_input(c: &mut Criterion) {
    let ctx = TrafficContext::default();

    c.bench_function("tahash_varying", |b| {
        let mut nonce: u64 = 0;
        b.iter(|| {
            let mut input = Vec::with_capacity(32);
            input.extend_from_slice(b"seed");
            input.extend_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            hash_bytes(black_box(&input), &ctx)
        })
    });
}

criterion_group!(benches, bench_profiles, bench_hash_varying_input);
criterion_main!(benches);
