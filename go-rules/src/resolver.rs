use serde::Serialize;
use tracing::debug;

use crate::Point;
use crate::color::{Color, Stone};
use crate::error::{Reason, Rejection};
use crate::grid::GridState;
use crate::ko::Ko;

/// A successful placement, kept for UI feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub point: Point,
    pub stone: Stone,
    /// Every removed opponent stone.
    pub captured: Vec<Point>,
    /// The mover's group after captures.
    pub group: Vec<Point>,
    pub ko: Option<Ko>,
}

impl GridState {
    /// Validate and apply a placement. This is the only path that mutates stones on a grid.
    pub fn place(&mut self, point: Point, stone: Stone) -> Result<Placement, Rejection> {
        if let Err(rejection) = self.check_vacant(point) {
            debug!(?point, %stone, %rejection, "placement rejected");
            return Err(rejection);
        }

        self.set_color(point, Color::from(stone));

        // Remove opponent groups left without liberties
        let opponent = stone.opp();
        let mut visited = vec![false; self.cells().len()];
        let mut captured_groups: Vec<Vec<Point>> = Vec::new();
        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) {
                continue;
            }
            let group = self.group_from(n, &mut visited);
            if !group.is_empty() && !self.has_liberty(&group) {
                for &p in &group {
                    self.set_color(p, Color::Empty);
                }
                captured_groups.push(group);
            }
        }

        let group = self.group(point);
        if !self.has_liberty(&group) {
            for &p in captured_groups.iter().flatten() {
                self.set_color(p, Color::from(opponent));
            }
            self.set_color(point, Color::Empty);
            debug!(?point, %stone, "placement rejected: suicide");
            return Err(Rejection::Suicide);
        }

        let ko = match captured_groups.as_slice() {
            [single] if single.len() == 1 && group.len() == 1 => Some(Ko { pos: single[0] }),
            _ => None,
        };
        self.set_ko(ko);

        let captured: Vec<Point> = captured_groups.into_iter().flatten().collect();
        self.add_captures(stone, captured.len() as u32);

        debug!(
            ?point,
            %stone,
            captured = captured.len(),
            ko = ?ko.map(|k| k.pos),
            "stone placed"
        );

        Ok(Placement {
            point,
            stone,
            captured,
            group,
            ko,
        })
    }

    /// Same verdict as `place`, without touching the grid.
    pub fn legality(&self, point: Point, stone: Stone) -> Reason {
        match self.check_vacant(point) {
            Err(rejection) => rejection.into(),
            Ok(()) if self.is_suicide(point, stone) => Reason::Suicide,
            Ok(()) => Reason::Legal,
        }
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.legality(point, stone).is_legal()
    }

    fn check_vacant(&self, point: Point) -> Result<(), Rejection> {
        if !self.on_board(point) {
            return Err(Rejection::OutOfBounds);
        }
        if !self.color_at(point).is_empty() {
            return Err(Rejection::Occupied);
        }
        if self.ko().is_some_and(|ko| ko.pos == point) {
            return Err(Rejection::Ko);
        }
        Ok(())
    }

    /// Whether a stone at the vacant `point` would end with no liberties.
    fn is_suicide(&self, point: Point, stone: Stone) -> bool {
        let mut visited = vec![false; self.cells().len()];
        for n in self.neighbors(point) {
            let Some(neighbor) = self.stone_at(n) else {
                return false;
            };
            let group = self.group_from(n, &mut visited);
            if group.is_empty() {
                continue;
            }
            let other_liberty = self.liberties(&group).iter().any(|&l| l != point);
            if neighbor == stone && other_liberty {
                return false;
            }
            if neighbor != stone && !other_liberty {
                // captures, which frees a liberty
                return false;
            }
        }
        true
    }
}
