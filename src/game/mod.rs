//! A deterministic game of snake on a square board. The only source of nondeterminism is fruit
//! placement, which draws from a caller-provided rng.

pub mod sense;

pub use sense::{stimulus, Stimulus, STIMULUS_LEN};

use core::ops::{Add, Sub};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    fn within(&self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A turn relative to the snake's current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Center,
    Right,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Left, Move::Center, Move::Right];

    /// The move at `idx` of [Move::ALL]. Anything past it is a broken chooser, so we panic.
    pub fn from_index(idx: usize) -> Self {
        match Self::ALL.get(idx) {
            Some(mv) => *mv,
            None => panic!("no move at index {idx}"),
        }
    }
}

/// A heading on the board. y grows downward, so [Direction::Up] is (0, -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }

    const fn from_delta(p: Point) -> Self {
        match (p.x, p.y) {
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            (-1, 0) => Self::Left,
            (1, 0) => Self::Right,
            _ => panic!("not a unit direction"),
        }
    }

    /// Rotate by -90, 0, or +90 degrees
    pub const fn turn(self, mv: Move) -> Self {
        let d = self.delta();
        match mv {
            Move::Center => self,
            Move::Left => Self::from_delta(Point::new(d.y, -d.x)),
            Move::Right => Self::from_delta(Point::new(-d.y, d.x)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Live,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub size: usize,
    pub state: State,
    pub fruit: Point,
    /// head first, tail last
    pub body: Vec<Point>,
    pub direction: Direction,
}

impl Game {
    /// A two cell snake in the center of the board, heading up, and a fruit somewhere off of it
    pub fn new(size: usize, rng: &mut impl RngCore) -> Self {
        let center = Point::new((size / 2) as i32, (size / 2) as i32);
        let direction = Direction::Up;
        let body = vec![center, center - direction.delta()];
        let mut game = Self {
            size,
            state: State::Live,
            fruit: center,
            body,
            direction,
        };
        match game.free_cell(rng) {
            Some(fruit) => game.fruit = fruit,
            None => game.state = State::Dead,
        }
        game
    }

    #[inline]
    pub fn head(&self) -> Point {
        self.body[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.state == State::Live
    }

    /// A uniformly random cell outside of the body, or None if the body covers the board
    fn free_cell(&self, rng: &mut impl RngCore) -> Option<Point> {
        if self.body.len() >= self.size * self.size {
            return None;
        }
        let size = self.size as i32;
        loop {
            let p = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            if !self.body.contains(&p) {
                break Some(p);
            }
        }
    }

    /// Turn by `mv` and step forward once. Leaving the board or running into ourselves is fatal,
    /// and a dead game doesn't move.
    pub fn advance(&mut self, mv: Move, rng: &mut impl RngCore) {
        if !self.is_live() {
            return;
        }

        let direction = self.direction.turn(mv);
        let head = self.head() + direction.delta();
        if !head.within(self.size as i32) {
            self.state = State::Dead;
            return;
        }

        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.push(head);
        body.extend_from_slice(&self.body);

        let ate = head == self.fruit;
        if !ate {
            body.pop();
        }

        if body[1..].contains(&head) {
            self.state = State::Dead;
            return;
        }

        self.body = body;
        self.direction = direction;
        if ate {
            match self.free_cell(rng) {
                Some(fruit) => self.fruit = fruit,
                // nothing left to eat
                None => self.state = State::Dead,
            }
        }
    }
}
