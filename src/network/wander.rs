use super::ChooseMove;
use crate::{
    game::Move,
    random::{default_rng, WyRng},
};
use rand::{seq::IndexedRandom, RngCore};

/// Ignores what it sees, and picks uniformly at random
#[derive(Debug, Clone)]
pub struct Wander<R: RngCore> {
    rng: R,
}

impl<R: RngCore> Wander<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for Wander<WyRng> {
    fn default() -> Self {
        Self::new(default_rng(None))
    }
}

impl<R: RngCore> ChooseMove for Wander<R> {
    fn choose_move(&mut self, _: &[f64]) -> Move {
        *Move::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Move::Center)
    }
}
