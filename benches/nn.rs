use criterion::Criterion;
use snek::{
    game::{stimulus, Game},
    network::{Lookup, Simple, Topology},
    random::WyRng,
    ChooseMove,
};

fn bench_nn(bench: &mut Criterion) {
    let mut rng = WyRng::seeded(1);
    let topology = Topology::default();
    let net = Simple::from_genome(topology, &topology.random_genome(0.1, 0.1, &mut rng)).unwrap();
    let seen = stimulus(&Game::new(11, &mut rng));
    let memory = vec![0.3; topology.memories];

    bench.bench_function("simple-forward", |b| b.iter(|| net.forward(&seen, &memory)));

    let mut player = net.player();
    bench.bench_function("simple-choose", |b| b.iter(|| player.choose_move(&seen)));

    let mut lookup = Lookup::default();
    bench.bench_function("lookup-choose", |b| b.iter(|| lookup.choose_move(&seen)));

    let game = Game::new(11, &mut rng);
    bench.bench_function("stimulus", |b| b.iter(|| stimulus(&game)));
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
    bench_nn(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
