//! Functions related to reproducing a whole population into the next generation.

use crate::{
    constants::SNEK_ELITE_SAVE,
    crossover::{breed, Mutation},
    error::{Error, Result},
    organism::Organism,
    random::happens,
    specie::Specie,
};
use rand::{seq::IndexedRandom, Rng, RngCore};
use serde::{Deserialize, Serialize};

/// How parents are picked for the next generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Fitness proportionate, with fitness shared among specie members, and mostly
    /// intra-specie crossover
    #[default]
    Speciated,
    /// Keep the best `save` unchanged, and breed the rest from them uniformly
    Elitist {
        #[serde(default = "elite_save")]
        save: usize,
    },
}

fn elite_save() -> usize {
    SNEK_ELITE_SAVE
}

/// Index drawn with probability proportional to its weight. Negative and non-finite weights
/// count as zero, and if nothing is left, the draw is uniform.
pub fn weighted_index(weights: &[f64], rng: &mut impl RngCore) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let clean = |w: &f64| if w.is_finite() && *w > 0. { *w } else { 0. };
    let total = weights.iter().map(clean).sum::<f64>();
    if total <= 0. {
        return Some(rng.random_range(0..weights.len()));
    }

    let mut threshold = rng.random::<f64>() * total;
    for (idx, w) in weights.iter().map(clean).enumerate() {
        if w > 0. && threshold < w {
            return Some(idx);
        }
        threshold -= w;
    }

    // float error can leave us just past the end
    weights.iter().rposition(|w| clean(w) > 0.)
}

/// Shared fitness of every organism: its score divided by the size of its specie
pub fn shared_fitness(population: &[Organism], species: &[Specie]) -> Vec<f64> {
    let mut weights = vec![0.; population.len()];
    for specie in species {
        let l = specie.len() as f64;
        for &member in specie.members.iter() {
            weights[member] = population[member].score() / l;
        }
    }
    weights
}

/// Breed `size` children. The first parent is drawn by shared fitness from the whole
/// population. The second is drawn uniformly from the first's specie, or with probability
/// `interspecie` from the whole population.
pub fn reproduce_speciated(
    population: &[Organism],
    species: &[Specie],
    size: usize,
    interspecie: f64,
    mutation: &Mutation,
    rng: &mut impl RngCore,
) -> Result<Vec<Organism>> {
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }

    let mut home = vec![0; population.len()];
    for (s_idx, specie) in species.iter().enumerate() {
        for &member in specie.members.iter() {
            home[member] = s_idx;
        }
    }

    let weights = shared_fitness(population, species);
    (0..size)
        .map(|_| {
            let l = weighted_index(&weights, rng).ok_or(Error::EmptyPopulation)?;
            let r = match species.get(home[l]) {
                Some(specie) if !happens(rng, interspecie) => {
                    *specie.members.choose(rng).ok_or(Error::EmptyPopulation)?
                }
                _ => rng.random_range(0..population.len()),
            };
            breed(&population[l].genome, &population[r].genome, mutation, rng).map(Organism::new)
        })
        .collect()
}

/// Keep the first `save` organisms of a sorted population as they are, and fill up to `size`
/// with children of two uniformly drawn elites.
pub fn reproduce_elitist(
    population: &[Organism],
    save: usize,
    size: usize,
    mutation: &Mutation,
    rng: &mut impl RngCore,
) -> Result<Vec<Organism>> {
    let elite = &population[..save.min(population.len())];
    if elite.is_empty() {
        return Err(Error::EmptyPopulation);
    }

    let mut pop = elite.iter().take(size).cloned().collect::<Vec<_>>();
    while pop.len() < size {
        let (l, r) = (
            elite.choose(rng).ok_or(Error::EmptyPopulation)?,
            elite.choose(rng).ok_or(Error::EmptyPopulation)?,
        );
        pop.push(Organism::new(breed(&l.genome, &r.genome, mutation, rng)?));
    }
    Ok(pop)
}

/// Reproduce a sorted, speciated population into a new one of `size`
pub fn population_reproduce(
    population: &[Organism],
    species: &[Specie],
    size: usize,
    selection: Selection,
    interspecie: f64,
    mutation: &Mutation,
    rng: &mut impl RngCore,
) -> Result<Vec<Organism>> {
    match selection {
        Selection::Speciated => {
            reproduce_speciated(population, species, size, interspecie, mutation, rng)
        }
        Selection::Elitist { save } => reproduce_elitist(population, save, size, mutation, rng),
    }
}
