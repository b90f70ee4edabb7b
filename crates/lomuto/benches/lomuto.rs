use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_large_runtime_config, apply_small_runtime_config, default_rng, random_sequence};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lomuto::trace::NullSink;
use lomuto::{all_drivers, driver_name, sort_with_driver};

const SMALL_SIZES: [usize; 3] = [9, 64, 512];
const LARGE_SIZES: [usize; 2] = [4096, 32768];

fn bench_random(c: &mut Criterion) {
    let mut rng = default_rng();

    for (label, sizes) in [("small", &SMALL_SIZES[..]), ("large", &LARGE_SIZES[..])] {
        let mut group = c.benchmark_group(format!("lomuto/random/{label}"));
        if label == "small" {
            apply_small_runtime_config(&mut group);
        } else {
            apply_large_runtime_config(&mut group);
        }

        for &size in sizes {
            let base = random_sequence(&mut rng, size);

            for &driver in all_drivers() {
                group.bench_function(BenchmarkId::new(driver_name(driver), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort_with_driver(driver, &mut data, &mut NullSink);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_random);
criterion_main!(benches);
