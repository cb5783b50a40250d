//! The generational loop: reproduce, judge, sort, report.

use crate::{
    config::Config,
    error::Result,
    eval::Judge,
    organism::{sort_by_score, Organism},
    reproduce::population_reproduce,
    specie::{speciate, tag, Specie},
    stats::Stat,
};
use rand::RngCore;
use std::{
    sync::mpsc::{SyncSender, TrySendError},
    time::Instant,
};
use tracing::{debug, info, warn};

/// When to stop evolving
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvolutionTarget {
    Forever,
    /// stop once this many generations have been bred
    Generation(usize),
    /// stop once the best organism scores at least this
    Score(f64),
}

impl EvolutionTarget {
    /// Checked before breeding, against the generations bred so far and the current best score
    fn satisfied(&self, generation: usize, best: f64) -> bool {
        match self {
            Self::Forever => false,
            Self::Generation(t) => *t <= generation,
            Self::Score(t) => *t <= best,
        }
    }
}

pub struct Evolver<R: RngCore> {
    config: Config,
    judge: Judge,
    population: Vec<Organism>,
    species: Vec<Specie>,
    generation: usize,
    rng: R,
}

impl<R: RngCore> Evolver<R> {
    /// Seed a population of random genomes, and score it once
    pub fn new(config: Config, mut rng: R) -> Result<Self> {
        config.validate()?;
        let judge = Judge::new(
            config.board_size,
            config.topology,
            config.games,
            config.limits,
            config.threads,
        )?;

        let population = (0..config.population)
            .map(|_| {
                Organism::new(config.topology.random_genome(
                    config.initial_mutate_rate,
                    config.initial_mutate_width,
                    &mut rng,
                ))
            })
            .collect::<Vec<_>>();

        let mut evolver = Self {
            config,
            judge,
            population,
            species: Vec::new(),
            generation: 0,
            rng,
        };
        evolver.settle(Vec::new())?;
        info!(
            population = evolver.population.len(),
            genome = evolver.config.topology.genome_len(),
            threads = evolver.judge.threads(),
            "initial population scored"
        );
        Ok(evolver)
    }

    #[inline]
    pub fn population(&self) -> &[Organism] {
        &self.population
    }

    #[inline]
    pub fn species(&self) -> &[Specie] {
        &self.species
    }

    /// Generations bred so far
    #[inline]
    pub fn generation_idx(&self) -> usize {
        self.generation
    }

    /// Score of the best organism
    #[inline]
    pub fn best(&self) -> f64 {
        self.population
            .first()
            .map_or(f64::NEG_INFINITY, Organism::score)
    }

    #[inline]
    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score a new population, sort it, and partition it for the next reproduction. An empty
    /// `population` means the current one.
    fn settle(&mut self, population: Vec<Organism>) -> Result<()> {
        if !population.is_empty() {
            self.population = population;
        }
        self.judge.judge(&mut self.population, &mut self.rng)?;
        sort_by_score(&mut self.population);
        self.species = speciate(&self.population, self.config.species_threshold)?;
        tag(&mut self.population, &self.species);
        Ok(())
    }

    /// Breed the next generation from this one, and score it
    pub fn generation(&mut self) -> Result<Stat> {
        let start = Instant::now();
        let children = population_reproduce(
            &self.population,
            &self.species,
            self.config.population,
            self.config.selection,
            self.config.interspecie_prob,
            &self.config.mutation,
            &mut self.rng,
        )?;
        self.settle(children)?;

        let stat = Stat::new(self.generation, &self.population);
        info!(
            generation = self.generation,
            species = self.species.len(),
            max = stat.max,
            avg = stat.avg,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation done"
        );
        self.generation += 1;
        Ok(stat)
    }

    /// Breed generations until `target` is met, handing each one's [Stat] to `out`. A target
    /// that's already met breeds nothing. A full channel drops the stat rather than waiting, and
    /// a closed one stops evolution.
    pub fn evolve(&mut self, target: EvolutionTarget, out: &SyncSender<Stat>) -> Result<()> {
        while !target.satisfied(self.generation, self.best()) {
            let stat = self.generation()?;
            match out.try_send(stat) {
                Ok(()) => {}
                Err(TrySendError::Full(stat)) => {
                    warn!(generation = stat.generation, "stat consumer is behind, dropping")
                }
                Err(TrySendError::Disconnected(_)) => {
                    debug!("stat consumer hung up");
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
