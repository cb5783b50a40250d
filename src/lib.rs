//! Neuroevolution of snake players. A population of flat genomes, each the weights of a small
//! tanh network, is scored by playing snake, partitioned into species by weight distance, and
//! bred by fitness proportionate selection with crossover and self adaptive mutation.

#[macro_use]
pub mod macros;

pub mod config;
pub mod constants;
pub mod crossover;
pub mod episode;
pub mod error;
pub mod eval;
pub mod evolve;
pub mod game;
pub mod network;
pub mod organism;
pub mod random;
pub mod replay;
pub mod reproduce;
pub mod specie;
pub mod stats;

pub use config::Config;
pub use crossover::Mutation;
pub use episode::Limits;
pub use error::{Error, Result};
pub use eval::Judge;
pub use evolve::{EvolutionTarget, Evolver};
pub use game::{Game, Move};
pub use network::{ChooseMove, Simple, Topology};
pub use organism::Organism;
pub use replay::Replay;
pub use reproduce::Selection;
pub use specie::Specie;
pub use stats::Stat;
