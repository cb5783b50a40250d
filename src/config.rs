//! Everything a run is configured with. Read once at startup, and fixed from then on.

use crate::{
    constants::{
        SNEK_BOARD_SIZE, SNEK_GAMES_PER_ORGANISM, SNEK_INITIAL_MUTATE_RATE,
        SNEK_INITIAL_MUTATE_WIDTH, SNEK_INTERSPECIE_PROB, SNEK_POPULATION, SNEK_REPLAY_PATH,
        SNEK_SPECIE_THRESHOLD, SNEK_STAT_BOUND,
    },
    crossover::Mutation,
    episode::Limits,
    error::{Error, Result},
    network::Topology,
    reproduce::Selection,
};
use serde::{Deserialize, Serialize};
use core::str::FromStr;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: usize,
    pub topology: Topology,
    pub population: usize,
    pub selection: Selection,
    pub species_threshold: f64,
    pub interspecie_prob: f64,
    pub mutation: Mutation,
    pub initial_mutate_rate: f64,
    pub initial_mutate_width: f64,
    pub games: usize,
    pub limits: Limits,
    /// worker threads, or every available core
    pub threads: Option<usize>,
    /// seed for the whole run, or one from the OS
    pub seed: Option<u64>,
    pub stat_bound: usize,
    /// write the champion's replay every this many generations, or never if 0
    pub replay_every: usize,
    pub replay_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: SNEK_BOARD_SIZE,
            topology: Topology::default(),
            population: SNEK_POPULATION,
            selection: Selection::default(),
            species_threshold: SNEK_SPECIE_THRESHOLD,
            interspecie_prob: SNEK_INTERSPECIE_PROB,
            mutation: Mutation::default(),
            initial_mutate_rate: SNEK_INITIAL_MUTATE_RATE,
            initial_mutate_width: SNEK_INITIAL_MUTATE_WIDTH,
            games: SNEK_GAMES_PER_ORGANISM,
            limits: Limits::default(),
            threads: None,
            seed: None,
            stat_bound: SNEK_STAT_BOUND,
            replay_every: 0,
            replay_path: PathBuf::from(SNEK_REPLAY_PATH),
        }
    }
}

/// Parse and validate a JSON config
impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        fs::read_to_string(path)?.parse()
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(Error::Config(msg));
        if self.board_size < 3 {
            return fail(format!("board_size {} is below 3", self.board_size));
        }
        if self.topology.neurons == 0 {
            return fail("topology needs at least one neuron".into());
        }
        if self.population < 2 {
            return fail(format!("population {} is below 2", self.population));
        }
        if let Selection::Elitist { save } = self.selection {
            if save == 0 || save > self.population {
                return fail(format!(
                    "elitist save {save} must be within 1..={}",
                    self.population
                ));
            }
        }
        if !(0. ..=1.).contains(&self.interspecie_prob) {
            return fail(format!(
                "interspecie_prob {} is not a probability",
                self.interspecie_prob
            ));
        }
        if !(0. ..=1.).contains(&self.mutation.meta_rate) {
            return fail(format!(
                "mutation.meta_rate {} is not a probability",
                self.mutation.meta_rate
            ));
        }
        if self.games == 0 {
            return fail("games must be at least 1".into());
        }
        if self.limits.steps == 0 {
            return fail("limits.steps must be at least 1".into());
        }
        if self.stat_bound == 0 {
            return fail("stat_bound must be at least 1".into());
        }
        if self.threads == Some(0) {
            return fail("threads must be at least 1".into());
        }
        Ok(())
    }
}
