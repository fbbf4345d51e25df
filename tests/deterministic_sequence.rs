use tick_snake::collision::DeathReason;
use tick_snake::config::GameConfig;
use tick_snake::game::{GameSetup, GameState, GameStatus, TickOutcome};
use tick_snake::grid::{Bounds, Cell};
use tick_snake::input::{Direction, GameInput};

fn game(snake: Vec<Cell>, direction: Direction, x_max: i32, seed: u64) -> GameState {
    let setup = GameSetup {
        bounds: Bounds::new(0, x_max, 0, 9).expect("bounds should be valid"),
        initial_snake: snake,
        initial_direction: direction,
        score_increment: 10,
    };
    GameState::new_with_seed(setup, seed).expect("setup should be valid")
}

fn body(state: &GameState) -> Vec<Cell> {
    state.snake.segments().copied().collect()
}

#[test]
fn growth_relocates_food_away_from_the_snake() {
    let mut state = game(vec![Cell::new(5, 5)], Direction::Right, 9, 1);
    state.food = Cell::new(6, 5);

    assert_eq!(state.tick(), TickOutcome::Ate);

    assert_eq!(body(&state), vec![Cell::new(6, 5), Cell::new(5, 5)]);
    assert_eq!(state.score, 10);
    assert_ne!(state.food, Cell::new(6, 5));
    assert_ne!(state.food, Cell::new(5, 5));
}

#[test]
fn plain_move_drops_the_tail() {
    let mut state = game(vec![Cell::new(5, 5), Cell::new(4, 5)], Direction::Right, 9, 2);
    state.food = Cell::new(9, 9);

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(body(&state), vec![Cell::new(6, 5), Cell::new(5, 5)]);
}

#[test]
fn loop_self_collision_ends_the_game() {
    let start = vec![
        Cell::new(5, 5),
        Cell::new(6, 5),
        Cell::new(6, 6),
        Cell::new(5, 6),
    ];
    let mut state = game(start.clone(), Direction::Right, 9, 3);
    state.food = Cell::new(0, 0);

    assert_eq!(state.tick(), TickOutcome::Died(DeathReason::SelfCollision));
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(body(&state), start);

    let frozen = state.snapshot();
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.snapshot(), frozen);
}

#[test]
fn right_wall_ends_the_game() {
    let mut state = game(vec![Cell::new(9, 5)], Direction::Right, 9, 4);
    state.food = Cell::new(0, 0);

    assert_eq!(state.tick(), TickOutcome::Died(DeathReason::Wall));
    assert_eq!(state.status, GameStatus::GameOver);
}

#[test]
fn queue_keeps_only_the_first_request_per_tick() {
    let mut state = game(vec![Cell::new(5, 5)], Direction::Right, 9, 5);

    assert!(state.queue_direction(Direction::Up));
    assert!(!state.queue_direction(Direction::Left));
    assert_eq!(state.queued_direction(), Some(Direction::Up));

    let mut state = game(vec![Cell::new(5, 5)], Direction::Right, 9, 5);

    assert!(state.queue_direction(Direction::Down));
    assert!(!state.queue_direction(Direction::Up));
    assert_eq!(state.effective_direction(), Direction::Down);
}

#[test]
fn paused_ticks_change_nothing_until_resumed() {
    let mut state = game(vec![Cell::new(5, 5)], Direction::Right, 9, 6);
    state.food = Cell::new(0, 9);

    state.apply_input(GameInput::Pause).expect("pause should succeed");
    let paused = state.snapshot();
    for _ in 0..5 {
        assert_eq!(state.tick(), TickOutcome::Idle);
    }
    assert_eq!(state.snapshot(), paused);

    state.apply_input(GameInput::Pause).expect("resume should succeed");
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Cell::new(6, 5));
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = game(vec![Cell::new(1, 1)], Direction::Right, 5, 42);
    state.food = Cell::new(2, 1);

    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Cell::new(2, 1));

    state.food = Cell::new(5, 9);
    state
        .apply_input(GameInput::Direction(Direction::Up))
        .expect("direction input should succeed");
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Cell::new(2, 0));

    assert_eq!(state.tick(), TickOutcome::Died(DeathReason::Wall));
    assert_eq!(state.score, 10);

    state.apply_input(GameInput::Reload).expect("reload should succeed");
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(body(&state), vec![Cell::new(1, 1)]);
}

#[test]
fn same_seed_replays_the_same_game() {
    let config = GameConfig::default();
    let bounds = Bounds::new(0, 19, 0, 19).expect("bounds should be valid");

    let run = |seed| {
        let mut state =
            GameState::new_with_seed(config.setup(bounds), seed).expect("setup should be valid");
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for step in 0..40 {
            if step % 5 == 0 {
                let _ = state.queue_direction(turns[(step / 5) % turns.len()]);
            }
            let _ = state.tick();
        }
        state.snapshot()
    };

    assert_eq!(run(99), run(99));
}
