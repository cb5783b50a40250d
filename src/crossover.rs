//! Producing a child genome from two parents: single point crossover, followed by a mutation
//! whose rate and width are themselves carried in the genome.

use crate::{
    constants::{SNEK_META_MUTATE_RATE, SNEK_META_MUTATE_WIDTH, SNEK_MUTATE_PARAMS},
    error::{Error, Result},
    random::{gaussian, happens, sigmoid},
};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// `l` before `cut`, `r` from `cut` onward
pub fn crossover(l: &[f64], r: &[f64], cut: usize) -> Result<Vec<f64>> {
    if l.len() != r.len() {
        return Err(Error::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    let cut = cut.min(l.len());
    let mut child = Vec::with_capacity(l.len());
    child.extend_from_slice(&l[..cut]);
    child.extend_from_slice(&r[cut..]);
    Ok(child)
}

/// [crossover] at a uniformly random cut in `0..=len`
pub fn crossover_random(l: &[f64], r: &[f64], rng: &mut impl RngCore) -> Result<Vec<f64>> {
    crossover(l, r, rng.random_range(0..=l.len()))
}

/// How the mutation slots of a genome are themselves mutated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mutation {
    pub meta_rate: f64,
    pub meta_width: f64,
}

impl Default for Mutation {
    fn default() -> Self {
        Self {
            meta_rate: SNEK_META_MUTATE_RATE,
            meta_width: SNEK_META_MUTATE_WIDTH,
        }
    }
}

impl Mutation {
    /// Each mutation slot is scaled by `1 + meta_width * N(0, 1)` with probability `meta_rate`.
    /// Then with rate `sigmoid(slot 0)` and width `slot 1`, every weight is scaled by
    /// `1 + width * N(0, 1)` with probability `sigmoid(rate)`.
    pub fn mutate(&self, genome: &mut [f64], rng: &mut impl RngCore) {
        if genome.len() < SNEK_MUTATE_PARAMS {
            return;
        }

        let (params, weights) = genome.split_at_mut(SNEK_MUTATE_PARAMS);
        for p in params.iter_mut() {
            if happens(rng, self.meta_rate) {
                *p *= 1. + self.meta_width * gaussian(rng);
            }
        }

        let rate = sigmoid(params[0]);
        let width = params[1];
        let p = sigmoid(rate);
        for w in weights.iter_mut() {
            if happens(rng, p) {
                *w *= 1. + gaussian(rng) * width;
            }
        }
    }
}

/// Cross `l` and `r` at a random point, and mutate the child
pub fn breed(l: &[f64], r: &[f64], mutation: &Mutation, rng: &mut impl RngCore) -> Result<Vec<f64>> {
    let mut child = crossover_random(l, r, rng)?;
    mutation.mutate(&mut child, rng);
    Ok(child)
}
