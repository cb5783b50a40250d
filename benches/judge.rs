use criterion::Criterion;
use snek::{
    episode::{play, Limits},
    network::{Lookup, Simple, Topology},
    organism::Organism,
    random::WyRng,
    Judge,
};

fn bench_play(bench: &mut Criterion) {
    let mut rng = WyRng::seeded(6);
    let topology = Topology::default();
    let net = Simple::from_genome(topology, &topology.random_genome(0.1, 0.1, &mut rng)).unwrap();

    bench.bench_function("play-simple", |b| {
        b.iter(|| play(11, net.player(), Limits::default(), &mut rng, None))
    });
    bench.bench_function("play-lookup", |b| {
        b.iter(|| play(11, Lookup::default(), Limits::default(), &mut rng, None))
    });
}

fn bench_judge(bench: &mut Criterion) {
    let mut rng = WyRng::seeded(7);
    let topology = Topology::default();
    let judge = Judge::with_topology(11, topology).unwrap();
    let mut batch = (0..100)
        .map(|_| Organism::new(topology.random_genome(0.1, 0.1, &mut rng)))
        .collect::<Vec<_>>();

    bench.bench_function("judge-100", |b| {
        b.iter(|| {
            for organism in batch.iter_mut() {
                *organism = Organism::new(core::mem::take(&mut organism.genome));
            }
            judge.judge(&mut batch, &mut rng)
        })
    });
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(10)
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
    bench_play(&mut criterion);
    bench_judge(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
