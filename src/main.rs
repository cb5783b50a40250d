use snek::{
    episode::play,
    random::{default_rng, WyRng},
    Config, EvolutionTarget, Evolver, Replay, Result, Simple, Stat,
};
use std::{
    env, fs,
    io::{self, BufWriter, Write},
    process::ExitCode,
    sync::mpsc::{sync_channel, Receiver},
    thread,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "reading config");
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let mut rng = default_rng(config.seed);
    let replay_rng = rng.fork();
    let (tx, rx) = sync_channel(config.stat_bound);
    let consumer = {
        let config = config.clone();
        thread::Builder::new()
            .name("stats".into())
            .spawn(move || consume(rx, &config, replay_rng))?
    };

    let mut evolver = Evolver::new(config, rng)?;
    let result = evolver.evolve(EvolutionTarget::Forever, &tx);
    drop(tx);
    if consumer.join().is_err() {
        error!("stats thread panicked");
    }
    result
}

/// Print every stat as a line of JSON, and write the champion's replay now and then
fn consume(rx: Receiver<Stat>, config: &Config, mut rng: WyRng) {
    let mut out = io::stdout().lock();
    for stat in rx {
        match stat.to_json() {
            Ok(line) => {
                if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
                    error!("can't write stat: {e}");
                    return;
                }
            }
            Err(e) => error!(generation = stat.generation, "can't encode stat: {e}"),
        }

        if config.replay_every != 0 && stat.generation % config.replay_every == 0 {
            match write_replay(&stat, config, &mut rng) {
                Ok(score) => info!(
                    generation = stat.generation,
                    score,
                    path = %config.replay_path.display(),
                    "wrote replay"
                ),
                Err(e) => error!(generation = stat.generation, "can't write replay: {e}"),
            }
        }
    }
}

fn write_replay(stat: &Stat, config: &Config, rng: &mut WyRng) -> Result<usize> {
    let net = Simple::from_genome(config.topology, &stat.best_model)?;
    let mut history = Vec::new();
    let score = play(
        config.board_size,
        net.player(),
        config.limits,
        rng,
        Some(&mut history),
    );
    let mut file = BufWriter::new(fs::File::create(&config.replay_path)?);
    Replay::from_history(&history).write(&mut file)?;
    file.flush()?;
    Ok(score)
}
