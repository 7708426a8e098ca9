use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use student_sort::{
    patterns, stable, unstable, Algorithm, Sort, SortOrder, Student, StudentScanner,
};

const DEFAULT_SIZES: [usize; 5] = [10, 100, 1_000, 5_000, 20_000];

// The quadratic sorts get too slow to be worth benchmarking beyond this.
const QUADRATIC_MAX_SIZE: usize = 5_000;

fn bench_sizes() -> Vec<usize> {
    match env::var("BENCH_SIZES") {
        Ok(val) => val
            .split(',')
            .map(|size| {
                size.trim()
                    .parse()
                    .unwrap_or_else(|_| panic!("Invalid BENCH_SIZES entry: '{size}'"))
            })
            .collect(),
        Err(_) => DEFAULT_SIZES.to_vec(),
    }
}

#[inline(never)]
fn bench_impl<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    order: SortOrder,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<Student>,
    quadratic: bool,
) {
    if quadratic && test_size > QUADRATIC_MAX_SIZE {
        return;
    }

    let bench_name = S::name();
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{order}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || pattern_provider(test_size),
                |mut test_data| {
                    S::sort_by(black_box(test_data.as_mut_slice()), order.comparator())
                },
                batch_size,
            )
        },
    );
}

fn bench_scan(c: &mut Criterion, test_size: usize) {
    for algorithm in Algorithm::ALL {
        if !matches!(algorithm, Algorithm::MergeSort | Algorithm::QuickSort)
            && test_size > QUADRATIC_MAX_SIZE
        {
            continue;
        }

        let students = patterns::random(test_size);
        c.bench_function(&format!("scan-{algorithm}-random-{test_size}"), |b| {
            b.iter_batched(
                || StudentScanner::new(&students, algorithm).unwrap(),
                |mut scanner| scanner.scan().unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<Student>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| patterns::random_uniform(size, 4, 0..=4)),
        ("all_equal", patterns::all_equal),
        ("ascending", |size| patterns::ascending(size, SortOrder::Gpa)),
        ("descending", |size| patterns::descending(size, SortOrder::Gpa)),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        for order in SortOrder::ALL {
            // --- Stable sorts ---

            bench_impl::<stable::insertion::SortImpl>(
                c,
                test_size,
                order,
                pattern_name,
                pattern_provider,
                true,
            );

            bench_impl::<stable::merge::SortImpl>(
                c,
                test_size,
                order,
                pattern_name,
                pattern_provider,
                false,
            );

            // --- Unstable sorts ---

            bench_impl::<unstable::selection::SortImpl>(
                c,
                test_size,
                order,
                pattern_name,
                pattern_provider,
                true,
            );

            bench_impl::<unstable::quicksort::SortImpl>(
                c,
                test_size,
                order,
                pattern_name,
                pattern_provider,
                false,
            );
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    // Distribute patterns across the full range of possible values.
    patterns::disable_fixed_seed();

    for test_size in bench_sizes() {
        bench_patterns(c, test_size);
        bench_scan(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
