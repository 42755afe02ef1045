//! Session lifecycle integration tests.
//!
//! Verifies the clock-driven tick cadence, input ordering, and the
//! cancel/re-arm semantics around game over, restart, and submission.

use std::time::{Duration, Instant};

use grid_snake::{
    CollisionKind, Direction, GameBuilder, GameConfig, Key, Position, Session, TickOutcome,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// No tick runs before the first interval elapses.
#[test]
fn test_no_tick_before_interval() {
    let t0 = Instant::now();
    let mut session = Session::start(GameConfig::default(), 42, t0);

    assert!(session.pump(t0 + ms(199)).is_empty());
    assert_eq!(session.engine().state().ticks, 0);
}

/// Ticks run on the configured cadence.
#[test]
fn test_tick_cadence() {
    let t0 = Instant::now();
    let mut session = Session::start(GameConfig::default(), 42, t0);

    assert_eq!(session.pump(t0 + ms(200)), vec![TickOutcome::Moved]);
    assert_eq!(
        session.pump(t0 + ms(600)),
        vec![TickOutcome::Moved, TickOutcome::Moved]
    );
    assert_eq!(session.engine().state().snake.head(), Position::new(13, 10));
}

/// Queued keys apply before the next tick; the last valid one wins.
#[test]
fn test_input_applies_before_tick() {
    let t0 = Instant::now();
    let mut session = Session::start(GameConfig::default(), 42, t0);

    // Up applies; Down is then an opposite-reversal and is filtered;
    // Left applies on top of Up.
    session.push_key(Key::ArrowUp);
    session.push_key(Key::ArrowDown);
    session.push_key(Key::ArrowLeft);
    session.push_key(Key::Other);

    session.pump(t0 + ms(200));
    assert_eq!(session.engine().state().snake.head(), Position::new(9, 10));
}

/// A reversal key queued alone is filtered out.
#[test]
fn test_reversal_key_filtered() {
    let t0 = Instant::now();
    let mut session = Session::start(GameConfig::default(), 42, t0);

    session.push_key(Key::ArrowLeft);
    session.pump(t0 + ms(200));

    assert_eq!(session.engine().state().snake.head(), Position::new(11, 10));
}

/// A fatal tick cancels the clock; later pumps do nothing.
#[test]
fn test_game_over_stops_the_clock() {
    let t0 = Instant::now();
    // Small board, snake one step from the right wall.
    let config = GameBuilder::new()
        .grid_size(4)
        .initial_snake(Position::new(2, 2))
        .initial_food(Position::new(0, 0))
        .build();
    let mut session = Session::start(config, 42, t0);

    let outcomes = session.pump(t0 + ms(1000));
    assert_eq!(
        outcomes.last(),
        Some(&TickOutcome::Fatal(CollisionKind::Wall))
    );
    assert!(!session.clock().is_armed());

    assert!(session.pump(t0 + ms(5000)).is_empty());
    assert!(session.engine().is_over());
}

/// Restart cancels the old schedule and arms a fresh one.
#[test]
fn test_restart_rearms_clock() {
    let t0 = Instant::now();
    let mut session = Session::start(GameConfig::default(), 42, t0);
    session.pump(t0 + ms(200));
    session.push_key(Key::ArrowDown);

    let t1 = t0 + ms(350);
    session.restart(t1);

    // Queued input was discarded with the old run.
    assert_eq!(
        session.engine().state().direction,
        Direction::Right
    );
    // The old schedule is gone: nothing due until one period after t1.
    assert!(session.pump(t1 + ms(199)).is_empty());
    assert_eq!(session.pump(t1 + ms(200)), vec![TickOutcome::Moved]);
}

/// Submitting a score resets the run and restarts the cadence.
#[test]
fn test_submit_score_restarts_session() {
    let t0 = Instant::now();
    let config = GameBuilder::new()
        .grid_size(4)
        .initial_snake(Position::new(2, 2))
        .initial_food(Position::new(0, 0))
        .build();
    let mut session = Session::start(config, 42, t0);
    session.pump(t0 + ms(1000));
    assert!(session.engine().is_over());

    let before = session.engine().leaderboard().len();
    let t1 = t0 + ms(2000);
    assert!(session.submit_score("Kim", t1));

    assert_eq!(session.engine().leaderboard().len(), before + 1);
    assert!(!session.engine().is_over());
    assert!(session.clock().is_armed());
    assert_eq!(session.pump(t1 + ms(200)), vec![TickOutcome::Moved]);
}

/// A blank name leaves the session in its terminal state.
#[test]
fn test_submit_blank_name_keeps_terminal_state() {
    let t0 = Instant::now();
    let config = GameBuilder::new()
        .grid_size(4)
        .initial_snake(Position::new(2, 2))
        .initial_food(Position::new(0, 0))
        .build();
    let mut session = Session::start(config, 42, t0);
    session.pump(t0 + ms(1000));

    assert!(!session.submit_score("   ", t0 + ms(2000)));
    assert!(session.engine().is_over());
    assert!(!session.clock().is_armed());
}
