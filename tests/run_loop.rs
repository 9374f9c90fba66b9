//=========================================================================
// Run Loop Scenarios
//=========================================================================
//
// End-to-end runs of the session without a window: input in, ticks,
// snapshots and persisted high scores out.
//
//=========================================================================

use rooftop_runner::core::config::{RunnerConfig, SpawnRange};
use rooftop_runner::core::input::GameInput;
use rooftop_runner::core::session::{Session, SessionState};
use rooftop_runner::core::store::{MemoryScoreStore, RonScoreStore, ScoreStore};

const DT: f32 = 1.0 / 120.0;

//--- Helpers -------------------------------------------------------------

/// Every recycled platform is 400 wide with a 150 gap before it.
fn fixed_gap_config() -> RunnerConfig {
    let mut config = RunnerConfig {
        seed: Some(11),
        ..RunnerConfig::default()
    };
    config.track.width_range = SpawnRange::new(400, 401);
    config.track.gap_range = SpawnRange::new(150, 151);
    config
}

fn continuous_config() -> RunnerConfig {
    let mut config = fixed_gap_config();
    config.track.gap_range = SpawnRange::new(0, 1);
    config
}

fn start(config: &RunnerConfig, store: Box<dyn ScoreStore>) -> Session {
    let mut session = Session::new(config, store);
    session.start_run();
    assert_eq!(session.state(), SessionState::Running);
    session
}

/// Taps jump once the current platform ends within six ticks.
fn bot_tick(session: &mut Session) {
    let track = session.track();
    let reference = track.config().reference_x;
    let to_edge = track.trailing_edge(track.current_index()) - reference;

    if !session.player().is_jumping() && to_edge > 0.0 && to_edge <= 48.0 {
        session.handle_input(GameInput::JumpPressed);
        session.handle_input(GameInput::JumpReleased);
    }
    session.tick(DT);
}

fn tick_until(session: &mut Session, limit: usize, done: impl Fn(&Session) -> bool) {
    for _ in 0..limit {
        session.tick(DT);
        if done(session) {
            return;
        }
    }
    panic!("condition not reached within {} ticks", limit);
}

//=========================================================================
// Scenarios
//=========================================================================

#[test]
fn continuous_track_runs_forever_without_scoring() {
    let mut session = start(&continuous_config(), Box::new(MemoryScoreStore::new()));

    for _ in 0..1000 {
        session.tick(DT);
    }

    assert_eq!(session.score(), 0);
    assert!(!session.player().is_dead());
    assert_eq!(session.player().position(), (100.0, 428.0));
}

#[test]
fn timed_jumps_clear_every_gap() {
    let mut session = start(&fixed_gap_config(), Box::new(MemoryScoreStore::new()));

    for _ in 0..3000 {
        bot_tick(&mut session);
        assert!(!session.player().is_dead(), "fell at score {}", session.score());
    }

    // 24000 units scrolled over a 550-unit period after the first 2000.
    assert!(session.score() >= 40);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.best(), snapshot.score);
    assert_eq!(snapshot.state, SessionState::Running);
}

#[test]
fn idle_runner_dies_in_first_gap_and_high_score_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.ron");
    let config = fixed_gap_config();

    let mut session = start(&config, Box::new(RonScoreStore::new(&path)));

    // The fifth initial platform ends at x=2000 and clears the reference
    // on tick 238.
    for _ in 0..237 {
        session.tick(DT);
    }
    assert_eq!(session.state(), SessionState::Running);
    session.tick(DT);
    assert_eq!(session.state(), SessionState::PostDeath);
    assert_eq!(session.score(), 1);

    tick_until(&mut session, 130, |s| s.state() == SessionState::Running);

    assert_eq!(session.score(), 0);
    assert!(session.high_score() >= 1);
    assert!(!session.player().is_dead());

    let reopened = Session::new(&config, Box::new(RonScoreStore::new(&path)));
    assert_eq!(reopened.high_score(), session.high_score());
}

#[test]
fn pause_freezes_run_and_main_menu_abandons_it() {
    let mut session = start(&fixed_gap_config(), Box::new(MemoryScoreStore::new()));

    for _ in 0..600 {
        bot_tick(&mut session);
    }
    let score = session.score();
    assert!(score >= 2);

    session.handle_input(GameInput::PauseToggled);
    let frozen = session.snapshot();
    for _ in 0..200 {
        session.tick(DT);
    }
    let still = session.snapshot();
    assert_eq!(frozen.platforms, still.platforms);
    assert_eq!(frozen.player, still.player);
    assert_eq!(frozen.scenery, still.scenery);

    // Main Menu button on the pause screen.
    session.handle_input(GameInput::PointerDown(640.0, 345.0));
    session.handle_input(GameInput::PointerUp(640.0, 345.0));

    assert_eq!(session.state(), SessionState::Main);
    assert_eq!(session.high_score(), 0);

    // Play starts a fresh run.
    session.handle_input(GameInput::PointerUp(640.0, 320.0));
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.score(), 0);
}

#[test]
fn same_seed_replays_identically() {
    let config = RunnerConfig {
        seed: Some(2024),
        ..RunnerConfig::default()
    };
    let mut a = start(&config, Box::new(MemoryScoreStore::new()));
    let mut b = start(&config, Box::new(MemoryScoreStore::new()));

    for _ in 0..2000 {
        a.tick(DT);
        b.tick(DT);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn quit_from_main_menu() {
    let mut session = Session::new(&RunnerConfig::default(), Box::new(MemoryScoreStore::new()));

    session.handle_input(GameInput::PointerDown(630.0, 420.0));
    session.handle_input(GameInput::PointerUp(630.0, 420.0));

    assert!(session.quit_requested());
    assert_eq!(session.state(), SessionState::Main);
}
