use serde::Serialize;

use crate::color::Stone;
use crate::grid::GridState;
use crate::map::Territory;

/// Per-color score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerPoints {
    pub territory: u32,
    pub captures: u32,
}

impl PlayerPoints {
    pub fn total(&self) -> u32 {
        self.territory + self.captures
    }
}

/// Territory + captures for one color. Komi is not included.
pub fn player_points(grid: &GridState, territory: &Territory, stone: Stone) -> PlayerPoints {
    PlayerPoints {
        territory: territory.of(stone).count(),
        captures: grid.captures().get(stone),
    }
}

/// Full score for both players, with komi credited to White.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameScore {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
    pub komi: f64,
}

impl GameScore {
    pub fn new(grid: &GridState, territory: &Territory, komi: f64) -> Self {
        GameScore {
            black: player_points(grid, territory, Stone::Black),
            white: player_points(grid, territory, Stone::White),
            komi,
        }
    }

    pub fn black_total(&self) -> f64 {
        self.black.total() as f64
    }

    pub fn white_total(&self) -> f64 {
        self.white.total() as f64 + self.komi
    }

    /// Black wins only with a strictly greater total.
    pub fn winner(&self) -> Stone {
        if self.black_total() > self.white_total() {
            Stone::Black
        } else {
            Stone::White
        }
    }

    pub fn result(&self) -> String {
        format_result(self.black_total(), self.white_total())
    }
}

/// Returns "B+{diff}" when Black is strictly ahead, otherwise "W+{diff}".
pub fn format_result(black_score: f64, white_score: f64) -> String {
    if black_score > white_score {
        format!("B+{}", black_score - white_score)
    } else {
        format!("W+{}", white_score - black_score)
    }
}
