//! The replay format read by the web viewer: board dimensions, and a list of steps, each a
//! comment and the points to draw.

use crate::{
    error::Result,
    game::{stimulus, Game},
};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Fruit,
    Snake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayPoint {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub comment: String,
    pub pts: Vec<ReplayPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub width: usize,
    pub height: usize,
    pub steps: Vec<ReplayStep>,
}

impl Replay {
    /// One step per state: the fruit first, then the body from head to tail. The comment is the
    /// step index and what the snake saw.
    pub fn from_history(history: &[Game]) -> Self {
        let size = history.first().map_or(0, |g| g.size);
        let steps = history
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                let mut pts = Vec::with_capacity(game.body.len() + 1);
                pts.push(ReplayPoint {
                    x: game.fruit.x,
                    y: game.fruit.y,
                    kind: PointKind::Fruit,
                });
                pts.extend(game.body.iter().map(|p| ReplayPoint {
                    x: p.x,
                    y: p.y,
                    kind: PointKind::Snake,
                }));
                ReplayStep {
                    comment: format!("{idx}: {:?}", stimulus(game)),
                    pts,
                }
            })
            .collect();

        Self {
            width: size,
            height: size,
            steps,
        }
    }

    pub fn write(&self, out: impl Write) -> Result<()> {
        serde_json::to_writer(out, self)?;
        Ok(())
    }
}
