//! What a snake can see: three eyes looking left, ahead, and right of its heading, each
//! reporting how far away the wall, the fruit, and the nearest body segment are.

use super::{Direction, Game, Move, Point};
use crate::constants::{SNEK_EYES, SNEK_EYE_BLIND, SNEK_EYE_SCALARS};

pub const STIMULUS_LEN: usize = SNEK_EYES * SNEK_EYE_SCALARS;

pub type Stimulus = [f64; STIMULUS_LEN];

/// Eyes for [Move::Left], [Move::Center] and [Move::Right], in that order
pub fn stimulus(game: &Game) -> Stimulus {
    let mut out = [0.; STIMULUS_LEN];
    for (chunk, mv) in out.chunks_exact_mut(SNEK_EYE_SCALARS).zip(Move::ALL) {
        for (slot, v) in chunk.iter_mut().zip(eye(game, game.direction.turn(mv))) {
            *slot = v as f64;
        }
    }
    out
}

/// wall, fruit, and body distance along `dir` from the head.
/// The wall distance counts the out of bounds cell, so a head against a wall sees it at 1.
pub fn eye(game: &Game, dir: Direction) -> [i32; SNEK_EYE_SCALARS] {
    let head = game.head();
    let size = game.size as i32;
    let wall = match dir {
        Direction::Right => size - head.x,
        Direction::Left => head.x + 1,
        Direction::Down => size - head.y,
        Direction::Up => head.y + 1,
    };

    let fruit = along(game.fruit - head, dir).unwrap_or(SNEK_EYE_BLIND);

    let body = game.body[1..]
        .iter()
        .filter_map(|b| along(*b - head, dir))
        .fold(SNEK_EYE_BLIND, i32::min);

    [wall, fruit, body]
}

/// How many steps along `dir` reach `offset`, if it lies on the ray at all
fn along(offset: Point, dir: Direction) -> Option<i32> {
    let d = dir.delta();
    if offset.x.signum() != d.x.signum() || offset.y.signum() != d.y.signum() {
        return None;
    }
    let steps = offset.x * d.x.signum() + offset.y * d.y.signum();
    (steps > 0).then_some(steps)
}
