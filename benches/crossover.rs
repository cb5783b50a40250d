use criterion::Criterion;
use snek::{
    crossover::{breed, crossover_random, Mutation},
    network::Topology,
    random::WyRng,
};

fn bench_crossover(bench: &mut Criterion) {
    let mut rng = WyRng::seeded(4);
    let topology = Topology::default();
    let l = topology.random_genome(0.1, 0.1, &mut rng);
    let r = topology.random_genome(0.1, 0.1, &mut rng);

    bench.bench_function("crossover", |b| b.iter(|| crossover_random(&l, &r, &mut rng)));

    let mutation = Mutation::default();
    let mut genome = l.clone();
    bench.bench_function("mutate", |b| b.iter(|| mutation.mutate(&mut genome, &mut rng)));

    bench.bench_function("breed", |b| b.iter(|| breed(&l, &r, &mutation, &mut rng)));
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_crossover(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
