use serde::{Deserialize, Serialize};

/// A genome, and how well it has played so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub genome: Vec<f64>,
    pub num_games: usize,
    pub total_score: usize,
    /// index of the specie this organism was last sorted into
    pub species: usize,
}

impl Organism {
    pub fn new(genome: Vec<f64>) -> Self {
        Self {
            genome,
            num_games: 0,
            total_score: 0,
            species: 0,
        }
    }

    /// Mean score over every game played. NaN until the first game is recorded.
    #[inline]
    pub fn score(&self) -> f64 {
        self.total_score as f64 / self.num_games as f64
    }

    #[inline]
    pub fn record(&mut self, score: usize) {
        self.num_games += 1;
        self.total_score += score;
    }
}

/// Stable sort, best score first
pub fn sort_by_score(population: &mut [Organism]) {
    population.sort_by(|l, r| r.score().total_cmp(&l.score()));
}
