use super::{argmax, ChooseMove};
use crate::{
    constants::SNEK_EYE_SCALARS,
    game::{Move, STIMULUS_LEN},
};

const MOVES: usize = Move::ALL.len();

/// A fixed linear scorer: one row of weights per move, dotted with the stimulus.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    weights: [[f64; STIMULUS_LEN]; MOVES],
    bias: [f64; MOVES],
}

impl Lookup {
    pub fn new(weights: [[f64; STIMULUS_LEN]; MOVES], bias: [f64; MOVES]) -> Self {
        Self { weights, bias }
    }

    pub fn scores(&self, stimulus: &[f64]) -> [f64; MOVES] {
        let mut scores = self.bias;
        for (score, row) in scores.iter_mut().zip(&self.weights) {
            *score += row.iter().zip(stimulus).map(|(w, s)| w * s).sum::<f64>();
        }
        scores
    }
}

/// Each move only looks through its own eye: favour room to the wall, a visible fruit, and
/// distance from the body.
impl Default for Lookup {
    fn default() -> Self {
        const EYE: [f64; SNEK_EYE_SCALARS] = [1., -0.1, 0.1];
        let mut weights = [[0.; STIMULUS_LEN]; MOVES];
        for (idx, row) in weights.iter_mut().enumerate() {
            row[idx * SNEK_EYE_SCALARS..(idx + 1) * SNEK_EYE_SCALARS].copy_from_slice(&EYE);
        }
        Self::new(weights, [0.; MOVES])
    }
}

impl ChooseMove for Lookup {
    fn choose_move(&mut self, stimulus: &[f64]) -> Move {
        Move::from_index(argmax(&self.scores(stimulus)))
    }
}
