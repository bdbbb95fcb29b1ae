use go_rules::{GridState, Reason, Rejection, Stone};

use crate::common::{SURROUND_1_1, init_tracing, play_all};

/// Capture at (1,1) by White's stone at (1,2).
fn after_single_capture() -> GridState {
    let mut grid = GridState::new(9);
    play_all(&mut grid, &[(Stone::Black, (1, 1))]);
    for p in SURROUND_1_1 {
        grid.place(p, Stone::White).unwrap();
    }
    grid
}

#[test]
fn immediate_replay_at_captured_point_is_ko() {
    init_tracing();
    let mut grid = after_single_capture();
    assert_eq!(grid.ko().map(|k| k.pos), Some((1, 1)));
    assert_eq!(grid.legality((1, 1), Stone::White), Reason::Ko);

    let before = grid.clone();
    assert_eq!(grid.place((1, 1), Stone::Black), Err(Rejection::Ko));
    assert_eq!(grid, before);
}

#[test]
fn intervening_move_lifts_ko() {
    init_tracing();
    let mut grid = after_single_capture();
    grid.place((6, 6), Stone::Black).unwrap();
    assert!(grid.ko().is_none());
    assert_eq!(grid.legality((1, 1), Stone::White), Reason::Legal);
    assert!(grid.place((1, 1), Stone::White).is_ok());
}

/// Build the ko shape on a 9×9 board.
///
/// ```
///      c0  c1  c2  c3
/// r0:   .   B   W   .
/// r1:   B   W   .   W
/// r2:   .   B   W   .
/// ```
fn ko_shape() -> GridState {
    let mut grid = GridState::new(9);
    play_all(
        &mut grid,
        &[
            (Stone::Black, (1, 0)),
            (Stone::White, (2, 0)),
            (Stone::Black, (0, 1)),
            (Stone::White, (1, 1)),
            (Stone::Black, (1, 2)),
            (Stone::White, (3, 1)),
            (Stone::Black, (8, 8)),
            (Stone::White, (2, 2)),
        ],
    );
    grid
}

#[test]
fn ko_recapture_blocked_then_allowed() {
    init_tracing();
    let mut grid = ko_shape();

    let placement = grid.place((2, 1), Stone::Black).unwrap();
    assert_eq!(placement.captured, vec![(1, 1)]);
    assert_eq!(grid.legality((1, 1), Stone::White), Reason::Ko);
    assert_eq!(grid.place((1, 1), Stone::White), Err(Rejection::Ko));

    // ko threat and answer
    grid.place((7, 7), Stone::White).unwrap();
    grid.place((7, 6), Stone::Black).unwrap();

    let recapture = grid.place((1, 1), Stone::White).unwrap();
    assert_eq!(recapture.captured, vec![(2, 1)]);
    assert_eq!(grid.ko().map(|k| k.pos), Some((2, 1)));
}

#[test]
fn pass_lifts_ko() {
    init_tracing();
    let mut grid = ko_shape();
    grid.place((2, 1), Stone::Black).unwrap();
    grid.pass();
    assert!(grid.is_legal((1, 1), Stone::White));
}
