// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rill_core::{EmitterExt, Publisher, StatefulStream, Stream};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fan_out");

    for &subs in &[1usize, 8, 64, 256] {
        group.throughput(Throughput::Elements(subs as u64));

        group.bench_with_input(BenchmarkId::new("stream", subs), &subs, |bencher, &subs| {
            let stream = Stream::<u64>::new();
            let total = Arc::new(AtomicU64::new(0));
            for _ in 0..subs {
                let total = Arc::clone(&total);
                stream.subscribe_fn(move |value| {
                    total.fetch_add(value, Ordering::Relaxed);
                });
            }
            bencher.iter(|| stream.publish(black_box(1)));
        });

        group.bench_with_input(
            BenchmarkId::new("stateful_stream", subs),
            &subs,
            |bencher, &subs| {
                let stream = StatefulStream::new(0u64);
                for _ in 0..subs {
                    stream.subscribe_fn(|value| {
                        black_box(value);
                    });
                }
                bencher.iter(|| stream.publish(black_box(1)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_publish_fan_out);
criterion_main!(benches);
