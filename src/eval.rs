//! Scoring organisms by playing games with them, across every available core.

use crate::{
    constants::SNEK_GAMES_PER_ORGANISM,
    episode::{play, Limits},
    error::Result,
    game::Game,
    network::{Simple, Topology},
    organism::Organism,
    random::WyRng,
};
use core::sync::atomic::{AtomicUsize, Ordering};
use rand::RngCore;
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::thread::available_parallelism;
use tracing::debug;

/// A long lived pool of workers who score organisms. Every organism plays `games` fresh games,
/// each with a fresh network built from its genome.
pub struct Judge {
    pool: ThreadPool,
    size: usize,
    topology: Topology,
    games: usize,
    limits: Limits,
}

impl Judge {
    /// `threads` defaults to the available hardware parallelism
    pub fn new(
        size: usize,
        topology: Topology,
        games: usize,
        limits: Limits,
        threads: Option<usize>,
    ) -> Result<Self> {
        let threads = threads
            .or_else(|| available_parallelism().ok().map(usize::from))
            .unwrap_or(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("judge-{idx}"))
            .build()?;
        debug!(threads, "judge pool started");

        Ok(Self {
            pool,
            size,
            topology,
            games,
            limits,
        })
    }

    /// A judge with default games and limits
    pub fn with_topology(size: usize, topology: Topology) -> Result<Self> {
        Self::new(
            size,
            topology,
            SNEK_GAMES_PER_ORGANISM,
            Limits::default(),
            None,
        )
    }

    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[inline]
    pub fn games(&self) -> usize {
        self.games
    }

    /// Play every organism's games, recording each score on it. Returns once the whole batch is
    /// scored. Each organism plays on its own rng, seeded from `rng` before any work is handed
    /// out, so the scores don't depend on how the work gets scheduled.
    ///
    /// `install` is the barrier. The completion counter only checks, in debug builds, that every
    /// organism of the batch was reached, and feeds the log line.
    pub fn judge(&self, batch: &mut [Organism], rng: &mut impl RngCore) -> Result<()> {
        let seeds = batch.iter().map(|_| rng.next_u64()).collect::<Vec<_>>();
        let done = AtomicUsize::new(0);

        self.pool.install(|| {
            batch
                .par_iter_mut()
                .zip(seeds.par_iter())
                .try_for_each(|(organism, seed)| -> Result<()> {
                    let net = Simple::from_genome(self.topology, &organism.genome)?;
                    let mut rng = WyRng::seeded(*seed);
                    for _ in 0..self.games {
                        organism.record(play(self.size, net.player(), self.limits, &mut rng, None));
                    }
                    done.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                })
        })?;

        let scored = done.load(Ordering::Relaxed);
        debug_assert_eq!(batch.len(), scored);
        debug!(scored, "batch judged");
        Ok(())
    }

    /// Play one game with `genome`, keeping every state along the way
    pub fn replay(&self, genome: &[f64], rng: &mut impl RngCore) -> Result<Vec<Game>> {
        let net = Simple::from_genome(self.topology, genome)?;
        let mut history = Vec::new();
        play(self.size, net.player(), self.limits, rng, Some(&mut history));
        Ok(history)
    }
}
