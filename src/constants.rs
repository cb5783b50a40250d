//! Centralized defaults for snek evolution parameters.
//!
//! All configurable parameters are defined here with the `SNEK_` prefix, and every field of
//! [crate::Config] defaults to one of them.

// ============================================================================
// Game Parameters
// ============================================================================

/// Width and height of the square board
pub const SNEK_BOARD_SIZE: usize = 11;

/// Number of directional eyes, each reporting wall, fruit and body distance
pub const SNEK_EYES: usize = 3;

/// Scalars reported by a single eye
pub const SNEK_EYE_SCALARS: usize = 3;

/// Distance reported by an eye who can't see the fruit or any body segment
pub const SNEK_EYE_BLIND: i32 = 100;

// ============================================================================
// Episode Parameters
// ============================================================================

/// Games played per organism per evaluation
pub const SNEK_GAMES_PER_ORGANISM: usize = 5;

/// Hard cap on moves in a single episode
pub const SNEK_EPISODE_STEPS: usize = 10_000;

/// Moves without growth before an episode is cut short
pub const SNEK_EPISODE_STAGNATION: usize = 1_000;

// ============================================================================
// Network Parameters
// ============================================================================

/// Hidden neurons in the first dense layer
pub const SNEK_NEURONS: usize = 16;

/// Recurrent memory slots carried between moves of an episode
pub const SNEK_MEMORIES: usize = 8;

/// Leading genome slots reserved for self-adaptive mutation rate and width
pub const SNEK_MUTATE_PARAMS: usize = 2;

/// Initial value of the mutation rate slot
pub const SNEK_INITIAL_MUTATE_RATE: f64 = 0.1;

/// Initial value of the mutation width slot
pub const SNEK_INITIAL_MUTATE_WIDTH: f64 = 0.1;

// ============================================================================
// Population Parameters
// ============================================================================

/// Organisms per generation
pub const SNEK_POPULATION: usize = 500;

/// Mean genome distance under which an organism joins a specie
pub const SNEK_SPECIE_THRESHOLD: f64 = 0.7;

/// Probability that the second parent is drawn from the whole population
pub const SNEK_INTERSPECIE_PROB: f64 = 0.01;

/// Organisms carried unchanged by elitist selection, when a config doesn't say
pub const SNEK_ELITE_SAVE: usize = 50;

// ============================================================================
// Mutation Parameters
// ============================================================================

/// Probability of perturbing each of the mutation slots
pub const SNEK_META_MUTATE_RATE: f64 = 0.1;

/// Width of the perturbation applied to the mutation slots
pub const SNEK_META_MUTATE_WIDTH: f64 = 0.1;

// ============================================================================
// Output Parameters
// ============================================================================

/// Stats buffered for a slow consumer before new ones are dropped
pub const SNEK_STAT_BOUND: usize = 16;

/// Default location of the champion replay
pub const SNEK_REPLAY_PATH: &str = "replay.json";
