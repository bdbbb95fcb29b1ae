use std::collections::VecDeque;

use tracing::trace;

use crate::color::{Color, Stone};
use crate::grid::GridState;
use crate::map::{BoardMap, Influence, InfluenceMap, Territory};

/// Classify every empty region bordered by exactly one color as that color's territory.
///
/// Regions touching both colors, or no stone at all, belong to nobody.
pub fn confirmed_territory(grid: &GridState) -> Territory {
    let size = grid.size();
    let mut black = BoardMap::new(size);
    let mut white = BoardMap::new(size);
    let mut visited = vec![false; grid.cells().len()];

    for row in 0..size {
        for col in 0..size {
            let region = grid.empty_region_from((col, row), &mut visited);
            if region.is_empty() {
                continue;
            }

            // bit 0 = Black seen, bit 1 = White seen
            let mut border_colors: u8 = 0;
            for &p in &region {
                for n in grid.neighbors(p) {
                    match grid.color_at(n) {
                        Color::Black => border_colors |= 1,
                        Color::White => border_colors |= 2,
                        Color::Empty => {}
                    }
                }
            }

            let owner = match border_colors {
                1 => &mut black,
                2 => &mut white,
                _ => continue,
            };
            for &p in &region {
                owner.set(p, true);
            }
        }
    }

    trace!(black = black.count(), white = white.count(), "territory recomputed");
    Territory { black, white }
}

/// Mark empty points within `radius` of a color and closer to it than to the other color.
///
/// The two maps are computed independently. With this rule a point equidistant from both
/// colors is marked for neither.
pub fn influence_zones(grid: &GridState, radius: u8) -> Influence {
    let black_dist = distance_field(grid, Stone::Black, radius);
    let white_dist = distance_field(grid, Stone::White, radius);

    let size = grid.size();
    let mut black: InfluenceMap = BoardMap::new(size);
    let mut white: InfluenceMap = BoardMap::new(size);

    for (i, &cell) in grid.cells().iter().enumerate() {
        if !cell.is_empty() {
            continue;
        }
        let point = ((i % size as usize) as u8, (i / size as usize) as u8);
        if dominates(black_dist[i], white_dist[i]) {
            black.set(point, true);
        }
        if dominates(white_dist[i], black_dist[i]) {
            white.set(point, true);
        }
    }

    Influence { black, white }
}

/// `None` stands for "farther than the radius".
fn dominates(own: Option<u8>, other: Option<u8>) -> bool {
    match (own, other) {
        (Some(_), None) => true,
        (Some(d), Some(o)) => d < o,
        (None, _) => false,
    }
}

/// Manhattan distance to the nearest stone of `stone`, capped at `radius`.
///
/// Multi-source BFS over the whole grid: stones do not block distance.
fn distance_field(grid: &GridState, stone: Stone, radius: u8) -> Vec<Option<u8>> {
    let color = Color::from(stone);
    let mut dist: Vec<Option<u8>> = vec![None; grid.cells().len()];
    let mut queue = VecDeque::new();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.color_at((col, row)) == color {
                dist[grid.idx((col, row))] = Some(0);
                queue.push_back((col, row));
            }
        }
    }

    while let Some(p) = queue.pop_front() {
        let d = dist[grid.idx(p)].unwrap_or(0);
        if d >= radius {
            continue;
        }
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }

    dist
}
