use tracing::debug;

use crate::Point;
use crate::color::{Color, Stone};
use crate::config::RulesConfig;
use crate::error::{ConfigError, Reason, Rejection};
use crate::grid::{GameState, GridState};
use crate::life_death::{self, GroupStatus};
use crate::map::{Influence, SafetyMap, Territory};
use crate::preview::{self, Preview};
use crate::resolver::Placement;
use crate::score::player_points;
use crate::territory::{confirmed_territory, influence_zones};

/// Owns the canonical grid and answers every rules query against it.
///
/// Derived views (territory, influence, safety) are recomputed on each call and never cached here.
#[derive(Debug, Clone)]
pub struct Engine {
    config: RulesConfig,
    grid: GridState,
}

impl Default for Engine {
    fn default() -> Self {
        let config = RulesConfig::default();
        Engine {
            grid: GridState::new(config.board_size),
            config,
        }
    }
}

impl Engine {
    /// An empty grid sized by `config`, which must pass `RulesConfig::validate`.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridState::new(config.board_size);
        Ok(Engine { config, grid })
    }

    pub fn with_size(size: u8) -> Result<Self, ConfigError> {
        Self::new(RulesConfig::with_board_size(size))
    }

    /// Rebuild an engine around a saved snapshot. The board size is taken from the snapshot.
    pub fn from_state(config: RulesConfig, state: GameState) -> Result<Self, ConfigError> {
        let grid = GridState::from_state(state).ok_or_else(|| {
            ConfigError::Invalid("snapshot cell count does not match its size".to_string())
        })?;
        let config = RulesConfig {
            board_size: grid.size(),
            ..config
        };
        config.validate()?;
        Ok(Engine { config, grid })
    }

    // -- Accessors --

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn color_at(&self, point: Point) -> Color {
        self.grid.color_at(point)
    }

    pub fn captures(&self, stone: Stone) -> u32 {
        self.grid.captures().get(stone)
    }

    pub fn game_state(&self) -> GameState {
        self.grid.game_state()
    }

    // -- Mutation --

    /// Empty grid of `size`, zero captures, no ko. An out-of-range size leaves the engine untouched.
    pub fn reset(&mut self, size: u8) -> Result<(), ConfigError> {
        let config = RulesConfig {
            board_size: size,
            ..self.config.clone()
        };
        config.validate()?;
        debug!(size, "resetting grid");
        self.config = config;
        self.grid.reset(size);
        Ok(())
    }

    /// Empty the current grid, keeping its size.
    pub fn clear(&mut self) {
        self.grid.reset(self.grid.size());
    }

    pub fn place(&mut self, point: Point, stone: Stone) -> Result<Placement, Rejection> {
        self.grid.place(point, stone)
    }

    pub fn pass(&mut self) {
        self.grid.pass();
    }

    // -- Legality --

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.grid.is_legal(point, stone)
    }

    pub fn legality_reason(&self, point: Point, stone: Stone) -> Reason {
        self.grid.legality(point, stone)
    }

    // -- Groups --

    pub fn group_at(&self, point: Point) -> Vec<Point> {
        self.grid.group(point)
    }

    pub fn liberties_of(&self, group: &[Point]) -> Vec<Point> {
        self.grid.liberties(group)
    }

    // -- Derived views --

    pub fn recompute_territory(&self) -> Territory {
        confirmed_territory(&self.grid)
    }

    pub fn recompute_influence(&self) -> Influence {
        influence_zones(&self.grid, self.config.influence_radius)
    }

    pub fn safety_map(&self) -> SafetyMap {
        life_death::safety_map(&self.grid, &self.config.safety)
    }

    pub fn eyes_of(&self, group: &[Point]) -> u32 {
        life_death::count_eyes(&self.grid, group)
    }

    pub fn status_of(&self, group: &[Point]) -> GroupStatus {
        life_death::group_status(&self.grid, group, &self.config.safety)
    }

    pub fn safety_of(&self, group: &[Point]) -> u8 {
        self.status_of(group).safety
    }

    pub fn is_alive(&self, group: &[Point]) -> bool {
        life_death::is_alive(&self.grid, group, &self.config.safety)
    }

    /// Opponent plies needed to capture the group made by playing `stone` at `point`.
    ///
    /// `depth` defaults to the configured search depth.
    pub fn capture_horizon(&self, point: Point, stone: Stone, depth: Option<u32>) -> Option<u32> {
        let depth = depth.unwrap_or(self.config.capture_search_depth as u32);
        life_death::capture_horizon(&self.grid, point, stone, depth)
    }

    /// Confirmed territory plus captures. Komi is left to the caller.
    pub fn score(&self, stone: Stone) -> u32 {
        player_points(&self.grid, &self.recompute_territory(), stone).total()
    }

    /// The placement pipeline on a scratch copy; canonical state is untouched.
    pub fn preview(&self, point: Point, stone: Stone) -> Result<Preview, Rejection> {
        preview::preview(&self.grid, point, stone, &self.config)
    }
}
