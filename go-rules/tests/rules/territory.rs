use go_rules::Stone;

use crate::common::{engine_from_layout, init_tracing};

const WALLS: [&str; 5] = ["+B+W+", "+B+W+", "+B+W+", "+B+W+", "+B+W+"];

#[test]
fn recompute_is_idempotent() {
    init_tracing();
    let engine = engine_from_layout(&["+B+W+", "BB+WW", "+++++", "WW+BB", "+W+B+"]);
    let first = engine.recompute_territory();
    let second = engine.recompute_territory();
    assert_eq!(first, second);
    assert_eq!(engine.recompute_influence(), engine.recompute_influence());
}

#[test]
fn walls_split_the_board() {
    init_tracing();
    let engine = engine_from_layout(&WALLS);
    let territory = engine.recompute_territory();
    assert_eq!(territory.black.count(), 5);
    assert_eq!(territory.white.count(), 5);
    // middle column touches both walls
    assert_eq!(territory.owner_at((2, 2)), None);
    assert_eq!(territory.owner_at((0, 4)), Some(Stone::Black));
    assert_eq!(territory.owner_at((4, 0)), Some(Stone::White));
}

#[test]
fn territory_and_stones_never_overlap() {
    init_tracing();
    let engine = engine_from_layout(&WALLS);
    let territory = engine.recompute_territory();
    let influence = engine.recompute_influence();
    for (point, &black) in territory.black.iter_points() {
        let white = territory.white.is_set(point);
        assert!(!(black && white));
        if engine.grid().stone_at(point).is_some() {
            assert!(!black && !white);
            assert!(!influence.black.is_set(point) && !influence.white.is_set(point));
        }
    }
}

#[test]
fn influence_reaches_radius() {
    init_tracing();
    let mut engine = go_rules::Engine::with_size(9).unwrap();
    engine.place((4, 4), Stone::Black).unwrap();
    let influence = engine.recompute_influence();
    assert!(influence.black.is_set((4, 2)));
    assert!(influence.black.is_set((5, 5)));
    assert!(!influence.black.is_set((4, 1)));
    assert_eq!(influence.black.count(), 12);
    assert_eq!(influence.white.count(), 0);
}
