use std::collections::VecDeque;
use std::hash::{DefaultHasher, Hash, Hasher};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::color::{Color, Stone};
use crate::ko::Ko;

/// Captures indexed by the color that made them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Serializable snapshot of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Color>,
    pub size: u8,
    pub captures: Captures,
    pub ko: Option<Ko>,
}

/// The square grid of cells, stored row-major, plus capture counters and ko.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    board: Vec<Color>,
    size: u8,
    captures: Captures,
    ko: Option<Ko>,
}

impl GridState {
    pub fn new(size: u8) -> Self {
        GridState {
            board: vec![Color::Empty; size as usize * size as usize],
            size,
            captures: Captures::new(),
            ko: None,
        }
    }

    /// Empty the grid, zero the captures and clear ko.
    pub fn reset(&mut self, size: u8) {
        *self = GridState::new(size);
    }

    /// Build a grid from ASCII rows. 'B' = Black, 'W' = White, anything else = Empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let size = layout.len() as u8;

        assert!(
            layout.iter().all(|row| row.chars().count() == size as usize),
            "layout must be square"
        );

        let board = layout
            .iter()
            .flat_map(|row| {
                row.chars().map(|c| match c {
                    'B' => Color::Black,
                    'W' => Color::White,
                    _ => Color::Empty,
                })
            })
            .collect();

        GridState {
            board,
            size,
            captures: Captures::new(),
            ko: None,
        }
    }

    /// Restore a grid from a snapshot. Returns `None` if the cell count does not match the size.
    pub fn from_state(state: GameState) -> Option<Self> {
        if state.board.len() != state.size as usize * state.size as usize {
            return None;
        }
        Some(GridState {
            board: state.board,
            size: state.size,
            captures: state.captures,
            ko: state.ko,
        })
    }

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.clone(),
            size: self.size,
            captures: self.captures.clone(),
            ko: self.ko,
        }
    }

    // -- Accessors --

    pub fn cells(&self) -> &[Color] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<Ko> {
        self.ko
    }

    /// `Color::Empty` for off-board points as well as empty ones.
    pub fn color_at(&self, point: Point) -> Color {
        if self.on_board(point) {
            self.board[self.idx(point)]
        } else {
            Color::Empty
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.color_at(point).stone()
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|c| c.is_empty())
    }

    pub fn stone_count(&self, stone: Stone) -> u32 {
        let color = Color::from(stone);
        self.board.iter().filter(|&&c| c == color).count() as u32
    }

    /// Stable within a process; used to key memoized previews.
    pub fn position_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Passing clears ko.
    pub fn pass(&mut self) {
        self.ko = None;
    }

    // -- Graph algorithms --

    /// 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        result
    }

    /// Connected group of same-colored stones containing `point`; empty for an empty point.
    pub fn group(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.board.len()];
        self.group_from(point, &mut visited)
    }

    /// Breadth-first flood fill over cells of the color at `point`, sharing a visited matrix.
    pub(crate) fn group_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        if self.stone_at(point).is_none() {
            return Vec::new();
        }
        self.flood(point, visited)
    }

    /// Maximal 4-connected region of empty cells containing `point`.
    pub fn empty_region(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.board.len()];
        self.empty_region_from(point, &mut visited)
    }

    pub(crate) fn empty_region_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        if !self.on_board(point) || !self.color_at(point).is_empty() {
            return Vec::new();
        }
        self.flood(point, visited)
    }

    fn flood(&self, start: Point, visited: &mut [bool]) -> Vec<Point> {
        let color = self.color_at(start);
        let si = self.idx(start);
        if visited[si] {
            return Vec::new();
        }
        visited[si] = true;

        let mut result = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(p) = queue.pop_front() {
            result.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.board[ni] == color {
                    visited[ni] = true;
                    queue.push_back(n);
                }
            }
        }

        result
    }

    /// Every group on the grid, scanned row-major. Together they partition the stones.
    pub fn groups(&self) -> Vec<Vec<Point>> {
        let mut visited = vec![false; self.board.len()];
        let mut groups = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let group = self.group_from((col, row), &mut visited);
                if !group.is_empty() {
                    groups.push(group);
                }
            }
        }
        groups
    }

    /// Distinct empty points orthogonally adjacent to the group.
    pub fn liberties(&self, group: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.board.len()];
        let mut libs = Vec::new();
        for &p in group {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.board[ni].is_empty() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    pub fn has_liberty(&self, group: &[Point]) -> bool {
        group
            .iter()
            .any(|&p| self.neighbors(p).iter().any(|&n| self.color_at(n).is_empty()))
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (col, row): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub(crate) fn set_color(&mut self, point: Point, color: Color) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = color;
        }
    }

    pub(crate) fn set_ko(&mut self, ko: Option<Ko>) {
        self.ko = ko;
    }

    pub(crate) fn add_captures(&mut self, stone: Stone, count: u32) {
        self.captures.add(stone, count);
    }
}
