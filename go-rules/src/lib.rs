pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod grid;
pub mod ko;
pub mod life_death;
pub mod map;
pub mod preview;
pub mod resolver;
pub mod score;
pub mod territory;
pub mod turn;

/// `(x, y)` with the origin at the top-left corner.
pub type Point = (u8, u8);

pub use color::{Color, Stone};
pub use config::{RulesConfig, SafetyThresholds};
pub use engine::Engine;
pub use error::{ConfigError, PlayError, Reason, Rejection};
pub use game::{Game, Stage};
pub use grid::{Captures, GameState, GridState};
pub use ko::Ko;
pub use life_death::GroupStatus;
pub use map::{BoardMap, Influence, InfluenceMap, SafetyMap, Territory, TerritoryMap};
pub use preview::{Preview, PreviewCache};
pub use resolver::Placement;
pub use score::{GameScore, PlayerPoints};
pub use turn::{Move, Turn};
