use tui_2048::best_score::{BestScoreStore, MemoryBestScore};
use tui_2048::core::grid::Grid;
use tui_2048::core::{GameState, MoveOutcome, SequenceRng, SimpleRng};
use tui_2048::types::{Direction, GameAction, SpawnPolicy};

fn nearly_stuck() -> Grid {
    // One Left move merges the leading pair and leaves a terminal board.
    Grid::from_rows(&[
        [2, 2, 8, 4],
        [8, 16, 2, 4],
        [2, 4, 8, 16],
        [4, 8, 16, 32],
    ])
    .unwrap()
}

#[test]
fn same_seed_same_game() {
    let mut a = GameState::<SimpleRng>::new(5, 777).unwrap();
    let mut b = GameState::<SimpleRng>::new(5, 777).unwrap();
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        a.apply_move(dir).unwrap();
        b.apply_move(dir).unwrap();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn no_op_move_spawns_nothing_on_change_policy() {
    let grid = Grid::from_rows(&[[2, 0, 0], [4, 0, 0], [0, 0, 0]]).unwrap();
    let mut game = GameState::from_grid(grid.clone(), SequenceRng::default());

    let outcome = game.apply_move(Direction::Left).unwrap();
    assert!(!outcome.board_changed());
    assert_eq!(game.grid(), &grid);
    assert_eq!(game.moves(), 0);
}

#[test]
fn no_op_move_still_spawns_on_always_policy() {
    let grid = Grid::from_rows(&[[2, 0, 0], [4, 0, 0], [0, 0, 0]]).unwrap();
    let mut game = GameState::from_grid(grid, SequenceRng::default())
        .with_spawn_policy(SpawnPolicy::Always);
    assert_eq!(game.spawn_policy(), SpawnPolicy::Always);

    let outcome = game.apply_move(Direction::Left).unwrap();
    assert!(matches!(
        outcome,
        MoveOutcome::Applied {
            changed: false,
            spawned: Some(1),
            ..
        }
    ));
    assert_eq!(game.grid().empty_count(), 6);
    assert_eq!(game.moves(), 0);
}

#[test]
fn game_over_closes_the_session_and_raises_best() {
    let mut game = GameState::from_grid(nearly_stuck(), SequenceRng::default()).with_best(2);

    let outcome = game.apply_move(Direction::Left).unwrap();
    assert!(matches!(outcome, MoveOutcome::Applied { game_over: true, .. }));
    assert!(game.game_over());
    assert_eq!(game.score(), 4);
    assert_eq!(game.best(), 4);
    assert_eq!(game.take_new_best(), Some(4));
    assert_eq!(game.take_new_best(), None);

    assert_eq!(
        game.apply_move(Direction::Right).unwrap(),
        MoveOutcome::Blocked
    );
    assert_eq!(game.take_new_best(), None);
}

#[test]
fn restart_after_game_over_keeps_best() {
    let mut game = GameState::from_grid(nearly_stuck(), SequenceRng::default());
    game.apply_move(Direction::Left).unwrap();
    assert!(game.game_over());

    assert!(game.apply_action(GameAction::Restart).unwrap());
    assert!(!game.game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.best(), 4);
    assert_eq!(game.grid().size(), 4);
    assert_eq!(game.grid().empty_count(), 14);
}

#[test]
fn resize_actions_respect_bounds() {
    let mut game = GameState::<SimpleRng>::new(3, 5).unwrap();
    assert!(!game.apply_action(GameAction::ShrinkBoard).unwrap());
    assert!(game.apply_action(GameAction::GrowBoard).unwrap());
    assert_eq!(game.size(), 4);
    assert_eq!(game.snapshot().cells.len(), 16);

    let mut big = GameState::<SimpleRng>::new(20, 5).unwrap();
    assert!(!big.apply_action(GameAction::GrowBoard).unwrap());
    assert!(big.resize(21).is_err());
}

#[test]
fn best_is_persisted_once_per_raise() {
    let mut store = MemoryBestScore {
        value: Some("2".to_string()),
        saves: 0,
    };
    let best = store.load().unwrap();
    let mut game = GameState::from_grid(nearly_stuck(), SequenceRng::default()).with_best(best);

    game.apply_move(Direction::Left).unwrap();
    if let Some(b) = game.take_new_best() {
        store.save(b).unwrap();
    }
    game.end_session();
    if let Some(b) = game.take_new_best() {
        store.save(b).unwrap();
    }

    assert_eq!(store.saves, 1);
    assert_eq!(store.load().unwrap(), 4);
}

#[test]
fn corrupt_best_score_is_an_error() {
    let mut store = MemoryBestScore {
        value: Some("twelve".to_string()),
        saves: 0,
    };
    assert!(store.load().is_err());
}
