use serde::Serialize;

use crate::Point;
use crate::color::Stone;

/// A per-point layer over a square board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardMap<T> {
    size: u8,
    cells: Vec<T>,
}

impl<T: Clone + Default> BoardMap<T> {
    pub fn new(size: u8) -> Self {
        BoardMap {
            size,
            cells: vec![T::default(); size as usize * size as usize],
        }
    }
}

impl<T> BoardMap<T> {
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// `None` when the point is off the board.
    pub fn get(&self, (col, row): Point) -> Option<&T> {
        if col < self.size && row < self.size {
            self.cells.get(row as usize * self.size as usize + col as usize)
        } else {
            None
        }
    }

    pub fn set(&mut self, (col, row): Point, value: T) {
        if col < self.size && row < self.size {
            let i = row as usize * self.size as usize + col as usize;
            self.cells[i] = value;
        }
    }

    pub fn iter_points(&self) -> impl Iterator<Item = (Point, &T)> {
        let size = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (((i % size) as u8, (i / size) as u8), v))
    }
}

impl BoardMap<bool> {
    pub fn is_set(&self, point: Point) -> bool {
        self.get(point).copied().unwrap_or(false)
    }

    pub fn count(&self) -> u32 {
        self.cells.iter().filter(|&&b| b).count() as u32
    }
}

pub type TerritoryMap = BoardMap<bool>;
pub type InfluenceMap = BoardMap<bool>;
/// Safety rating of the group covering each point, `None` on empty points.
pub type SafetyMap = BoardMap<Option<u8>>;

/// Confirmed territory of both colors. Never both true at one point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Territory {
    pub black: TerritoryMap,
    pub white: TerritoryMap,
}

impl Territory {
    pub fn of(&self, stone: Stone) -> &TerritoryMap {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    pub fn owner_at(&self, point: Point) -> Option<Stone> {
        if self.black.is_set(point) {
            Some(Stone::Black)
        } else if self.white.is_set(point) {
            Some(Stone::White)
        } else {
            None
        }
    }
}

/// Zones of influence, one independent flag per color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Influence {
    pub black: InfluenceMap,
    pub white: InfluenceMap,
}

impl Influence {
    pub fn of(&self, stone: Stone) -> &InfluenceMap {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    pub fn is_contested(&self, point: Point) -> bool {
        self.black.is_set(point) && self.white.is_set(point)
    }

    /// The single color influencing `point`, or `None` when neither or both do.
    pub fn sole_owner(&self, point: Point) -> Option<Stone> {
        match (self.black.is_set(point), self.white.is_set(point)) {
            (true, false) => Some(Stone::Black),
            (false, true) => Some(Stone::White),
            _ => None,
        }
    }
}
