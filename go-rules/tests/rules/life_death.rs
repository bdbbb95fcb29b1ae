use go_rules::life_death::moves_to_capture;
use go_rules::{Engine, GridState, Stone};

use crate::common::{engine_from_layout, init_tracing};

#[test]
fn single_enclosed_point_is_one_eye() {
    init_tracing();
    let engine = engine_from_layout(&["+++++", "+BBB+", "+B+B+", "+BBB+", "+++++"]);
    let group = engine.group_at((1, 1));
    assert_eq!(group.len(), 8);
    assert_eq!(engine.eyes_of(&group), 1);
}

#[test]
fn two_separate_eyes_rate_safe() {
    init_tracing();
    let engine = engine_from_layout(&[
        "+++++++",
        "+BBBBB+",
        "+B+B+B+",
        "+BBBBB+",
        "+++++++",
        "+++++++",
        "+++++++",
    ]);
    let group = engine.group_at((1, 1));
    assert_eq!(engine.eyes_of(&group), 2);
    assert_eq!(engine.safety_of(&group), 3);
    assert!(engine.is_alive(&group));
    let safety = engine.safety_map();
    assert!(group.iter().all(|&p| safety.get(p) == Some(&Some(3))));
}

#[test]
fn thresholds_come_from_config() {
    init_tracing();
    let mut config = go_rules::RulesConfig::with_board_size(5);
    config.safety.safe_eyes = 1;
    config.safety.stable_eyes = 0;
    let grid = GridState::from_layout(&["+++++", "+BBB+", "+B+B+", "+BBB+", "+++++"]);
    let engine = Engine::from_state(config, grid.game_state()).unwrap();
    let group = engine.group_at((1, 1));
    assert_eq!(engine.eyes_of(&group), 1);
    assert_eq!(engine.safety_of(&group), 3);
}

#[test]
fn single_liberty_is_captured_next_move() {
    init_tracing();
    let engine = engine_from_layout(&["+W+++", "+W+++", "+++++", "+++++", "+++++"]);
    assert_eq!(engine.capture_horizon((0, 0), Stone::Black, None), Some(1));

    let grid = GridState::from_layout(&["BW+++", "+W+++", "+++++", "+++++", "+++++"]);
    assert_eq!(moves_to_capture(&grid, (0, 0), Stone::White, 3), Some(1));
}

#[test]
fn unreachable_capture_is_none() {
    init_tracing();
    let engine = Engine::with_size(9).unwrap();
    assert_eq!(engine.capture_horizon((4, 4), Stone::Black, Some(3)), None);

    let living = GridState::from_layout(&[
        "B+B+BW+",
        "BBBBBW+",
        "WWWWWW+",
        "+++++++",
        "+++++++",
        "+++++++",
        "+++++++",
    ]);
    assert_eq!(moves_to_capture(&living, (0, 0), Stone::White, 5), None);
}

#[test]
fn search_is_uniform_across_the_board() {
    init_tracing();
    let engine = Engine::with_size(9).unwrap();
    // the same corner shape in every corner gives the same answer
    for corner in [(0, 0), (8, 0), (0, 8), (8, 8)] {
        assert_eq!(engine.capture_horizon(corner, Stone::White, None), Some(2));
    }
}
