use avltree::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(v.bench_name, v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_sequential(n_values, &mut g);
        bench_random(n_values, &mut g);
    }
}

/// Generate a bench function measuring the time needed to insert `n_values`
/// keys produced by the given expression into an empty tree.
macro_rules! insert_bench {
    (
        $name:ident,
        |$i:ident, $rand:ident| $key:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<'_, M>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || (AvlTree::default(), Lfsr::default()),
                        |(mut t, mut rand)| {
                            for $i in 0..n_values {
                                let $rand = &mut rand;
                                t.insert($key);
                            }
                            t
                        },
                        criterion::BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

// The worst case for an unbalanced BST, rotating at every other insert.
insert_bench!(sequential, |i, _rand| i);
insert_bench!(random, |_i, rand| rand.next() as usize);
