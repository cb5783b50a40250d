//! Playing a whole game with some [ChooseMove].

use crate::{
    constants::{SNEK_EPISODE_STAGNATION, SNEK_EPISODE_STEPS},
    game::{stimulus, Game},
    network::ChooseMove,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// When to give up on a game that isn't over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// moves before the game is cut off
    pub steps: usize,
    /// moves without growing before the game is cut off
    pub stagnation: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            steps: SNEK_EPISODE_STEPS,
            stagnation: SNEK_EPISODE_STAGNATION,
        }
    }
}

/// Play a fresh game of `size` until it's dead or `limits` cut it off, returning the final
/// body length. When `history` is given, it's filled with the initial state and then the state
/// after every move.
pub fn play(
    size: usize,
    mut chooser: impl ChooseMove,
    limits: Limits,
    rng: &mut impl RngCore,
    mut history: Option<&mut Vec<Game>>,
) -> usize {
    let mut game = Game::new(size, rng);
    if let Some(h) = history.as_deref_mut() {
        h.clear();
        h.push(game.clone());
    }

    let mut last_len = game.len();
    let mut last_growth = 0;
    for step in 0..limits.steps {
        if !game.is_live() {
            break;
        }

        let mv = chooser.choose_move(&stimulus(&game));
        game.advance(mv, rng);
        if let Some(h) = history.as_deref_mut() {
            h.push(game.clone());
        }

        if last_len < game.len() {
            last_len = game.len();
            last_growth = step;
        }
        if last_growth + limits.stagnation < step {
            break;
        }
    }

    game.len()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        game::{Move, State},
        network::{Lookup, Simple, Topology, Wander},
        random::WyRng,
        test_t,
    };

    struct Straight;

    impl ChooseMove for Straight {
        fn choose_move(&mut self, _: &[f64]) -> Move {
            Move::Center
        }
    }

    /// circles a 2x2 block forever without growing
    struct Spin;

    impl ChooseMove for Spin {
        fn choose_move(&mut self, _: &[f64]) -> Move {
            Move::Right
        }
    }

    #[test]
    fn test_straight_dies_at_wall() {
        let mut rng = WyRng::seeded(15);
        for _ in 0..200 {
            let mut history = vec![];
            let len = play(11, Straight, Limits::default(), &mut rng, Some(&mut history));
            let last = history.last().unwrap();
            assert_eq!(State::Dead, last.state);
            let ate = history.windows(2).any(|w| w[1].len() > w[0].len());
            if !ate {
                assert_eq!(2, len);
                // 5 moves up to row 0, and the 6th leaves the board
                assert_eq!(1 + 11 / 2 + 1, history.len());
                assert_eq!(0, last.head().y);
            }
        }
    }

    /// step of the last move that grew the snake, or 0 if none did
    fn last_growth(history: &[Game]) -> usize {
        history
            .windows(2)
            .rposition(|w| w[1].len() > w[0].len())
            .unwrap_or(0)
    }

    #[test]
    fn test_stagnation_cutoff() {
        let limits = Limits {
            steps: 10_000,
            stagnation: 50,
        };
        let mut still = 0;
        for seed in 0..20 {
            let mut history = vec![];
            let len = play(11, Spin, limits, &mut WyRng::seeded(seed), Some(&mut history));
            assert!(history.last().unwrap().is_live());
            if len == 2 {
                // the initial state, then moves 0 through 51: the last one is the first more
                // than 50 moves past step 0
                assert_eq!(1 + 52, history.len());
                still += 1;
            }
        }
        assert!(still > 0);
    }

    #[test]
    fn test_stagnation_restarts_on_growth() {
        // on a 3x3 board the spin covers 4 of the 7 free cells, so it often eats on the way
        let limits = Limits {
            steps: 10_000,
            stagnation: 20,
        };
        let (mut grew, mut still) = (0, 0);
        for seed in 0..100 {
            let mut history = vec![];
            let len = play(3, Spin, limits, &mut WyRng::seeded(seed), Some(&mut history));
            assert!(history.last().unwrap().is_live());
            assert_eq!(len, history.last().unwrap().len());

            let last = last_growth(&history);
            assert_eq!(1 + last + limits.stagnation + 2, history.len());
            if len > 2 {
                grew += 1;
            } else {
                still += 1;
            }
        }
        assert!(grew > 0 && still > 0, "{grew} {still}");
    }

    #[test]
    fn test_step_cap() {
        let mut rng = WyRng::seeded(17);
        let mut history = vec![];
        let limits = Limits {
            steps: 7,
            stagnation: 1_000,
        };
        play(11, Spin, limits, &mut rng, Some(&mut history));
        assert_eq!(8, history.len());
    }

    #[test]
    fn test_history_is_optional() {
        let mut rng = WyRng::seeded(18);
        assert!(play(11, Wander::new(WyRng::seeded(1)), Limits::default(), &mut rng, None) >= 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let topology = Topology::new(6, 2);
        let genome = topology.random_genome(0.1, 0.1, &mut WyRng::seeded(19));
        let net = Simple::from_genome(topology, &genome).unwrap();
        let (mut l, mut r) = (vec![], vec![]);
        play(11, net.player(), Limits::default(), &mut WyRng::seeded(20), Some(&mut l));
        play(11, net.player(), Limits::default(), &mut WyRng::seeded(20), Some(&mut r));
        assert_eq!(l, r);
    }

    test_t!(chooser_finishes[T: Lookup | Straight | Spin]() {
        let mut rng = WyRng::seeded(21);
        let limits = Limits { steps: 2_000, stagnation: 200 };
        for _ in 0..20 {
            let mut history = vec![];
            let len = play(9, T::default(), limits, &mut rng, Some(&mut history));
            assert_eq!(len, history.last().unwrap().len());
            assert!(history.len() <= limits.steps + 1);
            let grown = history.windows(2).filter(|w| w[1].len() > w[0].len()).count();
            assert_eq!(2 + grown, len);
        }
    });

    impl Default for Straight {
        fn default() -> Self {
            Self
        }
    }

    impl Default for Spin {
        fn default() -> Self {
            Self
        }
    }
}
