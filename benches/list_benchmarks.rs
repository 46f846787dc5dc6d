use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lazy_thunk::{Element, LazyList, Value, values};

fn sum(acc: i64, el: Element<i64>) -> i64 {
    acc + el.force_scalar().unwrap_or(0)
}

fn benchmark_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [1_000i64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("fold", size), &size, |b, &n| {
            b.iter(|| LazyList::range(0, Some(black_box(n))).fold(0, sum));
        });
        group.bench_with_input(BenchmarkId::new("length", size), &size, |b, &n| {
            b.iter(|| LazyList::range(0, Some(black_box(n))).length());
        });
        group.bench_with_input(BenchmarkId::new("map_filter", size), &size, |b, &n| {
            b.iter(|| {
                LazyList::range(0, Some(black_box(n)))
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .fold(0, sum)
            });
        });
    }

    group.finish();
}

fn benchmark_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversal");

    for size in [1_000i64, 100_000] {
        group.bench_with_input(BenchmarkId::new("reversed_last", size), &size, |b, &n| {
            b.iter(|| LazyList::range(0, Some(black_box(n))).reversed().last().ok());
        });
        group.bench_with_input(BenchmarkId::new("init_last", size), &size, |b, &n| {
            b.iter(|| {
                LazyList::range(0, Some(black_box(n)))
                    .init()
                    .and_then(|xs| xs.last())
                    .ok()
            });
        });
    }

    group.finish();
}

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let flat: Vec<Value<i64>> = (0..10_000).map(Value::Scalar).collect();
    group.bench_with_input(BenchmarkId::new("round_trip", "flat_10k"), &flat, |b, xs| {
        b.iter(|| LazyList::from_array(black_box(xs)).unsafe_to_array());
    });

    let nested: Vec<Value<i64>> = (0..1_000)
        .map(|_| Value::List(values![[1, 2], [3, [4, 5]], 6]))
        .collect();
    group.bench_with_input(BenchmarkId::new("round_trip", "nested_1k"), &nested, |b, xs| {
        b.iter(|| LazyList::from_array(black_box(xs)).unsafe_to_array());
    });

    group.finish();
}

criterion_group!(benches, benchmark_traversal, benchmark_reversal, benchmark_conversion);
criterion_main!(benches);
