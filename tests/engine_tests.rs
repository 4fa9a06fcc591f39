//! End-to-end engine behaviour through the facade crate.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use tui_2048::core::{
    Collaborators, EngineConfig, EngineError, EventSink, FixedSequence, GameEngine, Phase,
    SimpleRng,
};
use tui_2048::store::{JsonFileBestScore, MemoryBestScore};
use tui_2048::types::{Direction, GameAction, GameEvent};

#[derive(Clone, Default)]
struct Events(Rc<RefCell<Vec<GameEvent>>>);

impl EventSink for Events {
    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        self.0.borrow_mut().push(event.clone());
        Ok(())
    }
}

impl Events {
    fn names(&self) -> Vec<&'static str> {
        self.0.borrow().iter().map(|e| e.name()).collect()
    }
}

fn scripted() -> Collaborators {
    Collaborators::new(FixedSequence::new(vec![0.99, 0.5]))
}

fn first_row(values: [u32; 4]) -> Vec<u32> {
    let mut all = vec![0; 16];
    all[..4].copy_from_slice(&values);
    all
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut game =
            GameEngine::new(EngineConfig::instant(), Collaborators::new(SimpleRng::new(99)))
                .unwrap();
        for dir in Direction::ALL.iter().cycle().take(40) {
            game.attempt_move(*dir);
        }
        (game.grid().values(), game.score())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_event_sequence_for_merge_move() {
    let events = Events::default();
    let mut game =
        GameEngine::new(EngineConfig::instant(), scripted().with_events(events.clone())).unwrap();
    game.load_values(&first_row([2, 2, 0, 0]), 0).unwrap();

    assert!(game.attempt_move(Direction::Left));
    assert_eq!(events.names(), vec!["merge", "move"]);
    assert_eq!(
        events.0.borrow()[1],
        GameEvent::Move {
            direction: Direction::Left,
            score: 4
        }
    );
}

#[test]
fn test_new_game_event_carries_best() {
    let events = Events::default();
    let mut game = GameEngine::new(
        EngineConfig::instant(),
        scripted()
            .with_events(events.clone())
            .with_best_score(MemoryBestScore::new(512)),
    )
    .unwrap();

    game.apply_action(GameAction::NewGame);
    assert_eq!(events.0.borrow().last(), Some(&GameEvent::NewGame { best: 512 }));
    assert_eq!(game.best_score(), 512);
}

#[test]
fn test_best_score_persists_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");

    let mut game = GameEngine::new(
        EngineConfig::instant(),
        scripted().with_best_score(JsonFileBestScore::new(&path)),
    )
    .unwrap();
    game.load_values(&first_row([64, 64, 0, 0]), 0).unwrap();
    assert!(game.attempt_move(Direction::Left));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["best_score"], 128);

    // A fresh engine picks it up
    let reloaded = GameEngine::new(
        EngineConfig::instant(),
        scripted().with_best_score(JsonFileBestScore::new(&path)),
    )
    .unwrap();
    assert_eq!(reloaded.best_score(), 128);
}

#[test]
fn test_corrupt_best_score_file_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    std::fs::write(&path, "{oops").unwrap();

    let game = GameEngine::new(
        EngineConfig::instant(),
        scripted().with_best_score(JsonFileBestScore::new(&path)),
    )
    .unwrap();
    assert_eq!(game.best_score(), 0);
}

#[test]
fn test_win_then_continue_then_lose() {
    let mut game = GameEngine::new(EngineConfig::instant().with_win_value(8), scripted()).unwrap();
    game.load_values(&first_row([4, 4, 0, 0]), 0).unwrap();

    assert!(game.attempt_move(Direction::Left));
    assert_eq!(game.phase(), Phase::Won);
    assert!(game.apply_action(GameAction::KeepPlaying));
    assert_eq!(game.phase(), Phase::Continuing);

    let dead: Vec<u32> = (0..16)
        .map(|i| if (i / 4 + i % 4) % 2 == 0 { 16 } else { 32 })
        .collect();
    game.load_values(&dead, 100).unwrap();
    assert!(!game.attempt_move(Direction::Up));
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_larger_grid() {
    let mut game = GameEngine::new(EngineConfig::instant().with_size(5), scripted()).unwrap();
    let mut values = vec![0; 25];
    values[..5].copy_from_slice(&[2, 2, 2, 2, 2]);
    game.load_values(&values, 0).unwrap();

    assert!(game.attempt_move(Direction::Left));
    assert_eq!(game.grid().row_values(0), vec![4, 4, 2, 0, 0]);
    assert_eq!(game.score(), 8);
}

#[test]
fn test_two_by_two_grid_can_fill_up() {
    let mut game = GameEngine::new(EngineConfig::instant().with_size(2), scripted()).unwrap();
    game.load_values(&[2, 4, 0, 0], 0).unwrap();

    assert!(game.attempt_move(Direction::Down));
    // [0,0 / 2,4] plus a spawn in the last empty cell
    assert_eq!(game.grid().tiles().count(), 3);
    assert_eq!(game.grid().values(), vec![0, 2, 2, 4]);
}

#[test]
fn test_invalid_named_move_leaves_state() {
    let mut game = GameEngine::new(EngineConfig::instant(), scripted()).unwrap();
    let before = game.snapshot();
    assert_eq!(
        game.attempt_named_move("sideways"),
        Err(EngineError::InvalidDirection("sideways".to_string()))
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_undo_twice_after_one_move_fails() {
    let mut game = GameEngine::new(EngineConfig::instant(), scripted()).unwrap();
    game.load_values(&first_row([0, 0, 0, 2]), 0).unwrap();
    assert!(game.apply_action(GameAction::Move(Direction::Left)));
    assert!(game.apply_action(GameAction::Undo));
    assert!(!game.apply_action(GameAction::Undo));
    assert_eq!(game.grid().values(), first_row([0, 0, 0, 2]));
}
