// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use pacer_rate::Debouncer;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::sync::mpsc;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_burst");
    let burst_sizes = [1u64, 100];

    for &burst in &burst_sizes {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(
            BenchmarkId::from_parameter(burst),
            &burst,
            |bencher, &burst| {
                bencher.iter(|| {
                    // 1. Setup a lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        // 2. Create the debouncer
                        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
                        let debouncer =
                            Debouncer::new(Duration::from_millis(10), move |value: u64| {
                                let _ = result_tx.send(value);
                            });

                        // 3. Record a burst of calls
                        for value in 0..burst {
                            debouncer.call(value);
                        }

                        // 4. Wait for the single coalesced invocation
                        let settled = result_rx.recv().await;
                        black_box(settled);
                    });
                });
            },
        );
    }

    group.finish();
}
