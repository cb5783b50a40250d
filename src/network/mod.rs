//! Move choosers. The evolved one is [Simple], a two layer tanh network with recurrent memory,
//! whose weights are a flat genome. [Lookup] and [Wander] are fixed baselines.

pub mod lookup;
pub mod simple;
pub mod wander;

pub use lookup::Lookup;
pub use simple::{Player, Simple};
pub use wander::Wander;

use crate::{
    constants::{SNEK_MEMORIES, SNEK_MUTATE_PARAMS, SNEK_NEURONS},
    game::{Move, STIMULUS_LEN},
    random::gaussian,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Anything that can pick a move from what the snake sees
pub trait ChooseMove {
    fn choose_move(&mut self, stimulus: &[f64]) -> Move;
}

impl<T: ChooseMove + ?Sized> ChooseMove for &mut T {
    fn choose_move(&mut self, stimulus: &[f64]) -> Move {
        (**self).choose_move(stimulus)
    }
}

/// Index of the largest value, preferring the first of equals
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |best, (idx, v)| if values[best] < *v { idx } else { best })
}

/// Shape of a [Simple] network. Fixed for a whole run, and determines the genome length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    pub neurons: usize,
    pub memories: usize,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            neurons: SNEK_NEURONS,
            memories: SNEK_MEMORIES,
        }
    }
}

impl Topology {
    pub fn new(neurons: usize, memories: usize) -> Self {
        Self { neurons, memories }
    }

    /// stimulus and memory
    #[inline]
    pub fn inputs(&self) -> usize {
        STIMULUS_LEN + self.memories
    }

    /// move logits and memory
    #[inline]
    pub fn outputs(&self) -> usize {
        Move::ALL.len() + self.memories
    }

    /// Weight count of each layer, bias columns included
    #[inline]
    pub fn layer_sizes(&self) -> (usize, usize) {
        (
            (self.inputs() + 1) * self.neurons,
            (self.neurons + 1) * self.outputs(),
        )
    }

    pub fn genome_len(&self) -> usize {
        let (l1, l2) = self.layer_sizes();
        SNEK_MUTATE_PARAMS + l1 + l2
    }

    /// A genome of standard normal weights, with its mutation slots set to `rate` and `width`
    pub fn random_genome(&self, rate: f64, width: f64, rng: &mut impl RngCore) -> Vec<f64> {
        let mut genome = (0..self.genome_len())
            .map(|_| gaussian(rng))
            .collect::<Vec<_>>();
        genome[0] = rate;
        genome[1] = width;
        genome
    }
}
