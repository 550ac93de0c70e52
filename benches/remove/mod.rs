use avltree::AvlTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("middle_half", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [4, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to remove the middle half of a tree containing the
/// keys `1..=n_values`.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let t = (1..=n_values).collect::<AvlTree<_>>();

    let from = n_values / 4 + 1;
    let to = n_values / 4 + (n_values + 1) / 2;

    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements((to + 1 - from) as _)); // Keys removed per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || t.clone(),
            |mut t| {
                for v in from..=to {
                    t.remove(&v);
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}
