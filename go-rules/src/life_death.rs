use serde::Serialize;
use tracing::trace;

use crate::Point;
use crate::color::{Color, Stone};
use crate::config::SafetyThresholds;
use crate::grid::GridState;
use crate::map::{BoardMap, SafetyMap};

/// Everything behind a group's safety rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStatus {
    pub eyes: u32,
    pub liberties: u32,
    /// Distinct opposing stones orthogonally adjacent to the group.
    pub enemy_contacts: u32,
    /// 0 = certain death .. 3 = safe.
    pub safety: u8,
}

/// Count the empty points next to `group` whose every on-board neighbor is the group's color.
///
/// Corner points have only two neighbors and never count.
pub fn count_eyes(grid: &GridState, group: &[Point]) -> u32 {
    let Some(&first) = group.first() else {
        return 0;
    };
    let color = grid.color_at(first);
    if color.is_empty() {
        return 0;
    }

    grid.liberties(group)
        .into_iter()
        .filter(|&candidate| {
            let neighbors = grid.neighbors(candidate);
            neighbors.len() >= 3 && neighbors.iter().all(|&n| grid.color_at(n) == color)
        })
        .count() as u32
}

pub fn enemy_contacts(grid: &GridState, group: &[Point]) -> u32 {
    let Some(stone) = group.first().and_then(|&p| grid.stone_at(p)) else {
        return 0;
    };
    let enemy = Color::from(stone.opp());
    let mut seen = vec![false; grid.cells().len()];
    let mut count = 0;
    for &p in group {
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if !seen[ni] && grid.color_at(n) == enemy {
                seen[ni] = true;
                count += 1;
            }
        }
    }
    count
}

pub fn group_status(grid: &GridState, group: &[Point], thresholds: &SafetyThresholds) -> GroupStatus {
    if group.is_empty() {
        return GroupStatus {
            eyes: 0,
            liberties: 0,
            enemy_contacts: 0,
            safety: 0,
        };
    }

    let eyes = count_eyes(grid, group);
    let liberties = grid.liberties(group).len() as u32;
    GroupStatus {
        eyes,
        liberties,
        enemy_contacts: enemy_contacts(grid, group),
        safety: thresholds.rate(eyes, liberties),
    }
}

pub fn group_safety(grid: &GridState, group: &[Point], thresholds: &SafetyThresholds) -> u8 {
    group_status(grid, group, thresholds).safety
}

pub fn is_alive(grid: &GridState, group: &[Point], thresholds: &SafetyThresholds) -> bool {
    !group.is_empty() && group_safety(grid, group, thresholds) >= 2
}

/// Rate every group once and write the rating onto each of its stones.
pub fn safety_map(grid: &GridState, thresholds: &SafetyThresholds) -> SafetyMap {
    let mut map = BoardMap::new(grid.size());
    for group in grid.groups() {
        let safety = group_safety(grid, &group, thresholds);
        for &p in &group {
            map.set(p, Some(safety));
        }
    }
    map
}

/// Plies the opponent of `stone` needs to capture the group formed by playing `stone` at `point`.
///
/// `None` if the placement is illegal or no capture is found within `depth` attacking moves.
pub fn capture_horizon(grid: &GridState, point: Point, stone: Stone, depth: u32) -> Option<u32> {
    let mut scratch = grid.clone();
    let placement = scratch.place(point, stone).ok()?;
    // atari is one ply from capture, even when the last liberty is the ko point
    let plies = if scratch.liberties(&placement.group).len() == 1 {
        Some(1)
    } else {
        moves_to_capture(&scratch, point, stone.opp(), depth)
    };
    trace!(?point, %stone, depth, ?plies, "capture horizon");
    plies
}

/// Shortest sequence of `attacker` moves on liberties of the group at `target` that removes it.
///
/// Every simulated move goes through the regular placement rules on a scratch grid.
pub fn moves_to_capture(
    grid: &GridState,
    target: Point,
    attacker: Stone,
    depth: u32,
) -> Option<u32> {
    let defender = grid.stone_at(target)?;
    if defender == attacker || depth == 0 {
        return None;
    }

    let group = grid.group(target);
    let liberties = grid.liberties(&group);
    // each attacking move removes at most one liberty
    if liberties.len() as u32 > depth {
        return None;
    }

    let mut best: Option<u32> = None;
    for lib in liberties {
        let mut scratch = grid.clone();
        if scratch.place(lib, attacker).is_err() {
            continue;
        }
        if scratch.stone_at(target) != Some(defender) {
            return Some(1);
        }
        let remaining = best.map_or(depth - 1, |b| (b - 1).min(depth - 1));
        if let Some(n) = moves_to_capture(&scratch, target, attacker, remaining) {
            best = Some(best.map_or(n + 1, |b| b.min(n + 1)));
        }
    }
    best
}
