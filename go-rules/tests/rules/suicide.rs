use go_rules::{GridState, Reason, Rejection, Stone};

use crate::common::{SURROUND_1_1, init_tracing};

#[test]
fn surrounded_point_is_suicide() {
    init_tracing();
    let mut grid = GridState::new(9);
    for p in SURROUND_1_1 {
        grid.place(p, Stone::White).unwrap();
    }
    let before = grid.clone();

    assert_eq!(grid.legality((1, 1), Stone::Black), Reason::Suicide);
    assert_eq!(grid.place((1, 1), Stone::Black), Err(Rejection::Suicide));
    assert_eq!(grid, before);
    assert_eq!(grid.captures().black, 0);
    assert_eq!(grid.captures().white, 0);
}

#[test]
fn filling_own_eye_is_allowed() {
    init_tracing();
    let mut grid = GridState::new(9);
    for p in SURROUND_1_1 {
        grid.place(p, Stone::White).unwrap();
    }
    assert!(grid.place((1, 1), Stone::White).is_ok());
    assert_eq!(grid.group((1, 1)).len(), 5);
}

#[test]
fn multi_stone_suicide_is_rolled_back() {
    init_tracing();
    let mut grid = GridState::from_layout(&[
        "+BW++",
        "BBW++",
        "WW+++",
        "+++++",
        "+++++",
    ]);
    let before = grid.clone();
    assert_eq!(grid.place((0, 0), Stone::Black), Err(Rejection::Suicide));
    assert_eq!(grid, before);
}
