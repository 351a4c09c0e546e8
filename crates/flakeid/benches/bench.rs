use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use flakeid::{
    Config, IdOption, RandSource, SeededRandom, SnowflakeGenerator, SystemClock, ThreadRandom,
    TimeSource,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

const AT_2024_02_01: i64 = 1_706_745_600_000;

/// Benchmarks one generator over a fixed option list.
fn bench_generator<T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator: &SnowflakeGenerator<T, R>,
    options: &[IdOption],
) where
    T: TimeSource,
    R: RandSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    black_box(generator.generate_from(options.iter().copied()).ok());
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a generator shared across threads.
fn bench_generator_contended<T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator: Arc<SnowflakeGenerator<T, R>>,
) where
    T: TimeSource + Send + Sync,
    R: RandSource + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.generate_from([IdOption::Randomize]).ok());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn bench_explicit(c: &mut Criterion) {
    let generator = SnowflakeGenerator::new(FixedMockTime { millis: AT_2024_02_01 }, ThreadRandom);
    bench_generator(
        c,
        "mock/explicit",
        &generator,
        &[
            IdOption::DatacenterId(31),
            IdOption::MachineId(15),
            IdOption::Sequence(1),
        ],
    );
}

fn bench_randomized(c: &mut Criterion) {
    let generator = SnowflakeGenerator::new(FixedMockTime { millis: AT_2024_02_01 }, ThreadRandom);
    bench_generator(c, "mock/thread_random", &generator, &[IdOption::Randomize]);

    let generator =
        SnowflakeGenerator::new(FixedMockTime { millis: AT_2024_02_01 }, SeededRandom::new(7));
    bench_generator(c, "mock/seeded_random", &generator, &[IdOption::Randomize]);
}

fn bench_system_clock(c: &mut Criterion) {
    let generator = SnowflakeGenerator::new(SystemClock, ThreadRandom);
    bench_generator(c, "system/thread_random", &generator, &[IdOption::Randomize]);

    let generator = Arc::new(SnowflakeGenerator::new(SystemClock, ThreadRandom));
    bench_generator_contended(c, "system/contended", generator);
}

fn bench_config(c: &mut Criterion) {
    let generator = SnowflakeGenerator::new(FixedMockTime { millis: AT_2024_02_01 }, ThreadRandom);
    let config = Config::builder()
        .datacenter_id(31)
        .and_then(|b| b.machine_id(15))
        .map(|b| b.build())
        .expect("valid config");

    let mut group = c.benchmark_group("mock/prebuilt_config");
    group.throughput(Throughput::Elements(1));
    group.bench_function("generate", |b| {
        b.iter(|| black_box(generator.generate(black_box(&config)).ok()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_explicit,
    bench_randomized,
    bench_system_clock,
    bench_config
);
criterion_main!(benches);
