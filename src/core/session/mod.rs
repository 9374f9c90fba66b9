//=========================================================================
// Session
//=========================================================================
//
// Run loop state machine tying the player, the platform track and the
// scenery together.
//
// States:
// ```text
//   Main ──Play──► Running ──player dead──► PostDeath
//                    ▲                          │ death_delay elapsed
//                    │                          ▼
//                    └──── commit + reset ── ResetPending
//
//   Running | PostDeath ──pause──► Paused ──pause/Resume──► previous
//   Paused ──Main Menu──► Main
// ```
//
// Per tick while Running or PostDeath:
//   scenery.tick → track.tick → track.update_current_index
//   → track.update_gap → player.tick(dt, gap, holding)
//
// Paused freezes everything. The high score is written to the store
// only on the way through ResetPending.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod menu;
mod snapshot;

//=== Public API ==========================================================

pub use menu::{MenuButton, MenuKind, MenuState};
pub use snapshot::Snapshot;

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::config::RunnerConfig;
use crate::core::input::GameInput;
use crate::core::sim::{Player, PlatformTrack, Scenery};
use crate::core::store::ScoreStore;

/// Platforms sit at `height / 1.4` and extend `height / 2.5` down.
const PLATFORM_TOP_DIVISOR: f32 = 1.4;
const PLATFORM_HEIGHT_DIVISOR: f32 = 2.5;

//=== SessionState ========================================================

/// Phase a pause returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    PostDeath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Main menu. Scenery moves, the run does not.
    Main,
    Running,
    Paused { previous: RunPhase },
    /// Player dead, world still scrolling until the countdown expires.
    PostDeath,
    /// Transient: high score commit and reset in progress.
    ResetPending,
}

impl From<RunPhase> for SessionState {
    fn from(phase: RunPhase) -> Self {
        match phase {
            RunPhase::Running => Self::Running,
            RunPhase::PostDeath => Self::PostDeath,
        }
    }
}

//=== Session =============================================================

/// One game session, created at startup and reused across runs.
pub struct Session {
    config: RunnerConfig,
    player: Player,
    track: PlatformTrack,
    scenery: Scenery,
    state: SessionState,
    menu: MenuState,
    death_elapsed: Option<f32>,
    high_score: u32,
    store: Box<dyn ScoreStore>,
    rng: StdRng,
    quit_requested: bool,
    ticks: u64,
}

impl Session {
    //--- Construction -----------------------------------------------------

    /// Creates a session on the main menu.
    ///
    /// Randomness is seeded from `config.seed`, or from entropy if unset.
    /// The high score is read once from `store`; if the store is
    /// unavailable the session starts from 0.
    pub fn new(config: &RunnerConfig, store: Box<dyn ScoreStore>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, store, rng)
    }

    pub fn with_rng(config: &RunnerConfig, store: Box<dyn ScoreStore>, rng: StdRng) -> Self {
        let high_score = match store.get() {
            Ok(score) => score,
            Err(e) => {
                warn!(target: "store", "{}; using in-memory high score 0", e);
                0
            }
        };
        info!(target: "session", "Session created (high score {})", high_score);

        let mut track = PlatformTrack::new(&config.track);
        track.create_initial(config.track.buffer_size);

        Self {
            config: config.clone(),
            player: Player::new(&config.player, config.track.scroll_speed),
            track,
            scenery: Scenery::new(&config.scenery, config.window.width),
            state: SessionState::Main,
            menu: MenuState::new(),
            death_elapsed: None,
            high_score,
            store,
            rng,
            quit_requested: false,
            ticks: 0,
        }
    }

    //--- Input ------------------------------------------------------------

    /// Applies one input event. Called for every event drained this tick,
    /// before [`tick`](Self::tick).
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::JumpPressed => {
                self.player.set_holding_jump(true);
                if self.is_simulating() && self.player.jump() {
                    debug!(target: "session", "Jump");
                }
            }
            GameInput::JumpReleased => self.player.set_holding_jump(false),
            GameInput::PauseToggled => self.toggle_pause(),
            GameInput::PointerDown(x, y) => {
                if let Some(kind) = self.menu_kind() {
                    self.menu.pointer_down(kind, x, y);
                }
            }
            GameInput::PointerUp(x, y) => {
                if let Some(kind) = self.menu_kind() {
                    if let Some(button) = self.menu.pointer_up(kind, x, y) {
                        self.activate(button);
                    }
                }
            }
            GameInput::Quit => {
                info!(target: "session", "Quit requested");
                self.quit_requested = true;
            }
        }
    }

    fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused { previous: RunPhase::Running },
            SessionState::PostDeath => SessionState::Paused { previous: RunPhase::PostDeath },
            SessionState::Paused { previous } => {
                self.menu.clear();
                previous.into()
            }
            other => {
                debug!(target: "session", "Pause ignored in {:?}", other);
                return;
            }
        };
        info!(target: "session", "State → {:?}", self.state);
    }

    fn activate(&mut self, button: MenuButton) {
        debug!(target: "session", "Menu button {:?}", button);
        match button {
            MenuButton::Play => self.start_run(),
            MenuButton::Resume => {
                if let SessionState::Paused { previous } = self.state {
                    self.state = previous.into();
                }
            }
            MenuButton::MainMenu => {
                info!(target: "session", "Run abandoned at score {}", self.score());
                self.state = SessionState::Main;
            }
            MenuButton::Quit => self.quit_requested = true,
        }
    }

    //--- Simulation -------------------------------------------------------

    /// Leaves the menu and starts a fresh run.
    pub fn start_run(&mut self) {
        self.reset();
        self.state = SessionState::Running;
        info!(target: "session", "Run started (high score {})", self.high_score);
    }

    /// Advances the session by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.ticks += 1;

        match self.state {
            SessionState::Main => self.scenery.tick(dt, &mut self.rng),
            SessionState::Paused { .. } | SessionState::ResetPending => {}
            SessionState::Running => {
                self.advance_world(dt);
                if self.player.is_dead() {
                    info!(target: "session", "Player died at score {}", self.score());
                    self.state = SessionState::PostDeath;
                    self.death_elapsed = Some(0.0);
                }
            }
            SessionState::PostDeath => {
                self.advance_world(dt);
                let elapsed = self.death_elapsed.get_or_insert(0.0);
                *elapsed += dt;
                if *elapsed >= self.config.run.death_delay {
                    self.state = SessionState::ResetPending;
                    self.commit_and_reset();
                }
            }
        }
    }

    fn advance_world(&mut self, dt: f32) {
        self.scenery.tick(dt, &mut self.rng);

        self.track.tick(self.config.track.scroll_speed, &mut self.rng);
        self.track.update_current_index();
        let update = self.track.update_gap();
        if update.score_delta > 0 {
            debug!(target: "session", "Score {}", self.track.score());
        }

        let holding = self.player.is_holding_jump();
        self.player.tick(dt, self.track.gap(), holding);
    }

    fn commit_and_reset(&mut self) {
        let score = self.score();
        if score > self.high_score {
            info!(target: "session", "New high score {} (was {})", score, self.high_score);
            if let Err(e) = self.store.set(score) {
                warn!(target: "store", "{}; high score kept in memory only", e);
            }
            self.high_score = score;
        }

        self.reset();
        self.state = SessionState::Running;
        info!(target: "session", "Run reset");
    }

    /// Reinitializes the track, the player and the score. The high score
    /// and the session state are left untouched.
    pub fn reset(&mut self) {
        self.track.reset();
        self.player.reset();
        self.death_elapsed = None;
        self.menu.clear();
    }

    //--- Queries ----------------------------------------------------------

    fn is_simulating(&self) -> bool {
        matches!(self.state, SessionState::Running | SessionState::PostDeath)
    }

    fn menu_kind(&self) -> Option<MenuKind> {
        match self.state {
            SessionState::Main => Some(MenuKind::Main),
            SessionState::Paused { .. } => Some(MenuKind::Pause),
            _ => None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.track.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn track(&self) -> &PlatformTrack {
        &self.track
    }

    pub fn death_elapsed(&self) -> Option<f32> {
        self.death_elapsed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            state: self.state,
            player: self.player.snapshot(),
            platforms: self.track.ordered(),
            platform_top: self.config.window.height / PLATFORM_TOP_DIVISOR,
            platform_height: self.config.window.height / PLATFORM_HEIGHT_DIVISOR,
            score: self.score(),
            high_score: self.high_score,
            scenery: self.scenery.snapshot(),
            highlighted: self.menu.highlighted(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
