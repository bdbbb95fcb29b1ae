use go_rules::{Color, GridState, Stone};

use crate::common::{SURROUND_1_1, init_tracing, play_all, sorted};

#[test]
fn surrounded_stone_is_captured() {
    init_tracing();
    let mut grid = GridState::new(9);
    play_all(&mut grid, &[(Stone::Black, (1, 1))]);
    let (last, setup) = SURROUND_1_1.split_last().unwrap();
    for &p in setup {
        grid.place(p, Stone::White).unwrap();
    }
    assert_eq!(grid.color_at((1, 1)), Color::Black);

    let placement = grid.place(*last, Stone::White).unwrap();
    assert_eq!(placement.captured, vec![(1, 1)]);
    assert_eq!(grid.color_at((1, 1)), Color::Empty);
    assert_eq!(grid.captures().white, 1);
    assert_eq!(grid.captures().black, 0);
}

#[test]
fn one_move_captures_several_groups() {
    init_tracing();
    let mut grid = GridState::from_layout(&[
        "WB+++",
        "+WB++",
        "WB+++",
        "B++++",
        "+++++",
    ]);
    let placement = grid.place((0, 1), Stone::Black).unwrap();
    assert_eq!(sorted(placement.captured), vec![(0, 0), (0, 2), (1, 1)]);
    assert_eq!(grid.captures().black, 3);
    assert!(grid.ko().is_none());
}
