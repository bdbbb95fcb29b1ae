use std::collections::HashSet;

use go_rules::{GridState, Point, Reason, Stone};
use rand::prelude::*;

use crate::common::init_tracing;

fn assert_partition(grid: &GridState) {
    let size = grid.size();
    let occupied: HashSet<Point> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (col, row)))
        .filter(|&p| grid.stone_at(p).is_some())
        .collect();

    let mut distinct: Vec<Vec<Point>> = Vec::new();
    for &p in &occupied {
        let mut group = grid.group(p);
        group.sort_unstable();
        assert!(group.contains(&p));
        if !distinct.contains(&group) {
            distinct.push(group);
        }
    }

    let mut seen = HashSet::new();
    for group in &distinct {
        let color = grid.color_at(group[0]);
        for &p in group {
            assert_eq!(grid.color_at(p), color);
            assert!(seen.insert(p), "{p:?} appears in two groups");
        }
    }
    assert_eq!(seen, occupied);
    assert_eq!(distinct.len(), grid.groups().len());
}

#[test]
fn groups_partition_the_stones() {
    init_tracing();
    for layout in [
        &["+++", "+++", "+++"][..],
        &["BWB", "WBW", "BWB"][..],
        &["BBW+", "B+WW", "+BB+", "WW+B"][..],
        &["BBBBB", "B+W+B", "BWWWB", "B+W+B", "BBBBB"][..],
    ] {
        assert_partition(&GridState::from_layout(layout));
    }
}

#[test]
fn random_play_keeps_invariants() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    for size in [2u8, 3, 5, 7] {
        let mut grid = GridState::new(size);
        let mut stone = Stone::Black;
        for _ in 0..400 {
            // one past the edge so out-of-bounds attempts are exercised too
            let point = (rng.random_range(0..=size), rng.random_range(0..=size));
            if rng.random_range(0..20) == 0 {
                grid.pass();
                stone = stone.opp();
                continue;
            }

            let before = grid.clone();
            let expected = grid.legality(point, stone);
            match grid.place(point, stone) {
                Ok(_) => {
                    assert_eq!(expected, Reason::Legal, "{stone} at {point:?}");
                    stone = stone.opp();
                }
                Err(rejection) => {
                    assert_eq!(expected, Reason::from(rejection), "{stone} at {point:?}");
                    assert_eq!(grid, before, "rejected {stone} at {point:?} changed the grid");
                }
            }

            for group in grid.groups() {
                assert!(grid.has_liberty(&group), "group at {:?} has no liberty", group[0]);
            }
            assert_partition(&grid);
        }
    }
}
