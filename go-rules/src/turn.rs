use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::color::Stone;

/// What kind of action a turn was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
    Resign,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Play => "play",
            Move::Pass => "pass",
            Move::Resign => "resign",
        };
        f.write_str(name)
    }
}

/// One entry of the game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Turn {
    Play {
        stone: Stone,
        point: Point,
        /// Opponent stones removed by this play.
        captured: u32,
    },
    Pass {
        stone: Stone,
    },
    Resign {
        stone: Stone,
    },
}

impl Turn {
    pub fn stone(&self) -> Stone {
        match *self {
            Turn::Play { stone, .. } | Turn::Pass { stone } | Turn::Resign { stone } => stone,
        }
    }

    pub fn kind(&self) -> Move {
        match self {
            Turn::Play { .. } => Move::Play,
            Turn::Pass { .. } => Move::Pass,
            Turn::Resign { .. } => Move::Resign,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match *self {
            Turn::Play { point, .. } => Some(point),
            _ => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Turn::Pass { .. })
    }

    pub fn is_resign(&self) -> bool {
        matches!(self, Turn::Resign { .. })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.stone().letter();
        match self {
            Turn::Play {
                point: (col, row), ..
            } => write!(f, "{letter} {col},{row}"),
            other => write!(f, "{letter} {}", other.kind()),
        }
    }
}
