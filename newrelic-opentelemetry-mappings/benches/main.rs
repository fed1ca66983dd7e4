// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use newrelic_opentelemetry_mappings::transform_tests;

fn bench_span_transformation(c: &mut Criterion) {
    for test in transform_tests::test_cases() {
        c.bench_function(&format!("otel_span_to_nr_span/{}", test.name), |b| {
            b.iter_batched(
                || test.input_span.clone(),
                |input_span| {
                    black_box(newrelic_opentelemetry_mappings::otel_span_to_nr_span(
                        transform_tests::SERVICE,
                        input_span,
                    ));
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_span_transformation);
criterion_main!(benches);
