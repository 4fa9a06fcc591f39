//! Property tests for the move algorithm.

use proptest::prelude::*;
use tui_2048::core::{traversal, Collaborators, EngineConfig, GameEngine, SimpleRng};
use tui_2048::types::{Direction, Position};

fn cell_value() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        2 => Just(2u32),
        2 => Just(4u32),
        1 => Just(8u32),
        1 => Just(16u32),
    ]
}

fn board() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(cell_value(), 16)
}

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

fn engine(seed: u32, values: &[u32], score: u32) -> GameEngine {
    let mut game =
        GameEngine::new(EngineConfig::instant(), Collaborators::new(SimpleRng::new(seed))).unwrap();
    game.load_values(values, score).unwrap();
    game
}

proptest! {
    #[test]
    fn ineffective_moves_change_nothing(values in board(), dir in direction(), seed in any::<u32>()) {
        let mut game = engine(seed, &values, 40);
        if !game.attempt_move(dir) {
            prop_assert_eq!(game.grid().values(), values);
            prop_assert_eq!(game.score(), 40);
            prop_assert!(game.history().is_none());
        }
    }

    #[test]
    fn tile_sum_grows_by_exactly_the_spawn(values in board(), dir in direction(), seed in any::<u32>()) {
        let before: u32 = values.iter().sum();
        let mut game = engine(seed, &values, 0);
        if game.attempt_move(dir) {
            let after: u32 = game.grid().values().iter().sum();
            let spawned = game
                .annotations()
                .spawned()
                .and_then(|id| game.grid().find(id))
                .map_or(0, |t| t.value);
            prop_assert!(spawned == 2 || spawned == 4);
            prop_assert_eq!(after, before + spawned);
        }
    }

    #[test]
    fn score_gain_is_sum_of_merge_products(values in board(), dir in direction(), seed in any::<u32>()) {
        let mut game = engine(seed, &values, 0);
        game.attempt_move(dir);
        let merged: u32 = game
            .grid()
            .tiles()
            .filter(|t| game.annotations().is_merge_product(t.id))
            .map(|t| t.value)
            .sum();
        prop_assert_eq!(game.score(), merged);
    }

    #[test]
    fn undo_restores_values_and_score(values in board(), dir in direction(), seed in any::<u32>()) {
        let mut game = engine(seed, &values, 12);
        if game.attempt_move(dir) {
            prop_assert!(game.undo().is_ok());
            prop_assert_eq!(game.grid().values(), values);
            prop_assert_eq!(game.score(), 12);
        }
    }

    #[test]
    fn merges_never_exceed_half_the_tiles(values in board(), dir in direction(), seed in any::<u32>()) {
        let tiles_before = values.iter().filter(|&&v| v != 0).count();
        let mut game = engine(seed, &values, 0);
        game.attempt_move(dir);
        prop_assert!(game.annotations().merge_count() * 2 <= tiles_before);
    }

    #[test]
    fn traversal_visits_every_cell_once(size in 2usize..=8, dir in direction()) {
        let mut seen: Vec<Position> = traversal(size, dir.vector()).positions().collect();
        prop_assert_eq!(seen.len(), size * size);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), size * size);
    }
}
