use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Point;
use crate::color::Stone;
use crate::config::RulesConfig;
use crate::engine::Engine;
use crate::error::{ConfigError, PlayError};
use crate::resolver::Placement;
use crate::score::GameScore;
use crate::turn::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Unstarted,
    BlackToPlay,
    WhiteToPlay,
    Finished,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::Unstarted | Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Unstarted => write!(f, "unstarted"),
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Finished => write!(f, "finished"),
        }
    }
}

/// Turn order, passing and the end of the game on top of an `Engine`.
///
/// Black moves first. Two consecutive passes or a resignation finish the game.
#[derive(Debug, Clone)]
pub struct Game {
    engine: Engine,
    moves: Vec<Turn>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            engine: Engine::default(),
            moves: Vec::new(),
        }
    }
}

impl Game {
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        Ok(Game {
            engine: Engine::new(config)?,
            moves: Vec::new(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn current_turn_stone(&self) -> Stone {
        match self.moves.last() {
            None => Stone::Black,
            Some(t) => t.stone().opp(),
        }
    }

    pub fn stage(&self) -> Stage {
        if self.moves.is_empty() {
            Stage::Unstarted
        } else if self.is_finished() {
            Stage::Finished
        } else {
            match self.current_turn_stone() {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.moves.last(), Some(t) if t.is_resign())
            || matches!(self.moves.as_slice(), [.., a, b] if a.is_pass() && b.is_pass())
    }

    fn check_turn(&self, stone: Stone) -> Result<(), PlayError> {
        if self.is_finished() {
            return Err(PlayError::GameOver);
        }
        if stone != self.current_turn_stone() {
            return Err(PlayError::OutOfTurn);
        }
        Ok(())
    }

    // -- Game actions --

    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<Placement, PlayError> {
        self.check_turn(stone)?;
        let placement = self.engine.place(point, stone)?;
        self.moves.push(Turn::Play {
            stone,
            point,
            captured: placement.captured.len() as u32,
        });
        Ok(placement)
    }

    pub fn try_pass(&mut self, stone: Stone) -> Result<Stage, PlayError> {
        self.check_turn(stone)?;
        self.engine.pass();
        self.moves.push(Turn::Pass { stone });
        if self.is_finished() {
            debug!(result = %self.score().result(), "game ended by two passes");
        }
        Ok(self.stage())
    }

    pub fn try_resign(&mut self, stone: Stone) -> Result<Stage, PlayError> {
        if self.is_finished() {
            return Err(PlayError::GameOver);
        }
        self.moves.push(Turn::Resign { stone });
        debug!(%stone, "resigned");
        Ok(self.stage())
    }

    /// Start over on an empty board of the same size.
    pub fn reset(&mut self) {
        self.engine.clear();
        self.moves.clear();
    }

    // -- Results --

    pub fn score(&self) -> GameScore {
        GameScore::new(
            self.engine.grid(),
            &self.engine.recompute_territory(),
            self.engine.config().komi,
        )
    }

    /// `None` while the game is in progress.
    pub fn winner(&self) -> Option<Stone> {
        match self.moves.last() {
            Some(t) if t.is_resign() => Some(t.stone().opp()),
            _ if self.is_finished() => Some(self.score().winner()),
            _ => None,
        }
    }

    /// "B+R" style for resignations, otherwise the score difference.
    pub fn result(&self) -> Option<String> {
        match self.moves.last() {
            Some(t) if t.is_resign() => Some(format!("{}+R", t.stone().opp().letter())),
            _ if self.is_finished() => Some(self.score().result()),
            _ => None,
        }
    }
}
