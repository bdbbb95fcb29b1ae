use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::Point;
use crate::color::Stone;
use crate::config::RulesConfig;
use crate::error::Rejection;
use crate::grid::GridState;
use crate::life_death::safety_map;
use crate::map::{Influence, SafetyMap, Territory};
use crate::resolver::Placement;
use crate::territory::{confirmed_territory, influence_zones};

/// What the board would look like after a hypothetical placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    #[serde(skip)]
    pub grid: GridState,
    pub placement: Placement,
    pub territory: Territory,
    pub influence: Influence,
    pub safety: SafetyMap,
}

/// Run the full placement pipeline on a scratch copy of `grid`.
pub fn preview(
    grid: &GridState,
    point: Point,
    stone: Stone,
    config: &RulesConfig,
) -> Result<Preview, Rejection> {
    let mut scratch = grid.clone();
    let placement = scratch.place(point, stone)?;
    let territory = confirmed_territory(&scratch);
    let influence = influence_zones(&scratch, config.influence_radius);
    let safety = safety_map(&scratch, &config.safety);

    Ok(Preview {
        grid: scratch,
        placement,
        territory,
        influence,
        safety,
    })
}

const DEFAULT_CAPACITY: usize = 256;

type PreviewKey = (u64, Point, Stone);

/// Memoizes previews by position and candidate move, under one fixed config.
#[derive(Debug)]
pub struct PreviewCache {
    config: RulesConfig,
    entries: HashMap<PreviewKey, Result<Preview, Rejection>>,
    capacity: usize,
}

impl PreviewCache {
    pub fn new(config: RulesConfig) -> Self {
        Self::with_capacity(config, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(config: RulesConfig, capacity: usize) -> Self {
        PreviewCache {
            config,
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get_or_compute(
        &mut self,
        grid: &GridState,
        point: Point,
        stone: Stone,
    ) -> &Result<Preview, Rejection> {
        let key = (grid.position_hash(), point, stone);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            trace!(entries = self.entries.len(), "preview cache full, clearing");
            self.entries.clear();
        }
        let config = &self.config;
        self.entries
            .entry(key)
            .or_insert_with(|| preview(grid, point, stone, config))
    }
}
