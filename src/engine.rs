//=========================================================================
// Runner Engine
//=========================================================================
//
// Main entry point: wires the session, the logic thread and the window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_score_store()         blocks until exit
//         └─ with_snapshot_sender()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{RunnerConfig, WindowConfig};
use crate::core::error::PlatformError;
use crate::core::input::InputMapper;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::session::{Session, Snapshot};
use crate::core::store::{RonScoreStore, ScoreStore};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// TPS and channel capacity default to the values in
/// [`RunnerConfig::run`]. Without an explicit store the high score is
/// kept in a RON file at [`RunnerConfig::score_path`].
///
/// # Examples
///
/// ```no_run
/// use rooftop_runner::EngineBuilder;
/// use rooftop_runner::core::config::RunnerConfig;
///
/// let config = RunnerConfig::default();
/// EngineBuilder::new(config)
///     .with_tps(144.0)
///     .build()
///     .run()
///     .ok();
/// ```
///
/// Receiving frames for a renderer:
/// ```no_run
/// # use rooftop_runner::EngineBuilder;
/// # use rooftop_runner::core::config::RunnerConfig;
/// let (tx, rx) = crossbeam_channel::bounded(2);
/// std::thread::spawn(move || {
///     for snapshot in rx {
///         let _: rooftop_runner::core::session::Snapshot = snapshot;
///     }
/// });
///
/// EngineBuilder::new(RunnerConfig::default())
///     .with_snapshot_sender(tx)
///     .build()
///     .run()
///     .ok();
/// ```
pub struct EngineBuilder {
    config: RunnerConfig,
    tps: f64,
    channel_capacity: usize,
    store: Option<Box<dyn ScoreStore>>,
    snapshot_sender: Option<Sender<Snapshot>>,
}

impl EngineBuilder {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            tps: config.run.tps,
            channel_capacity: config.run.channel_capacity,
            config,
            store: None,
            snapshot_sender: None,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the default RON file store.
    pub fn with_score_store(mut self, store: Box<dyn ScoreStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Publishes one [`Snapshot`] per tick on `sender`. Frames are dropped
    /// while the channel is full.
    pub fn with_snapshot_sender(mut self, sender: Sender<Snapshot>) -> Self {
        self.snapshot_sender = Some(sender);
        self
    }

    /// Builds the engine, reading the stored high score.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let store = self
            .store
            .unwrap_or_else(|| Box::new(RonScoreStore::new(&self.config.score_path)));
        let session = Session::new(&self.config, store);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(
                session,
                InputMapper::with_default_bindings(),
                self.snapshot_sender,
            ),
            window: self.config.window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

//=== Engine ==============================================================

/// Runner runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputMapper → Session → Snapshot
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    window: WindowConfig,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes or the game
    /// quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel and the shutdown signal
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the logic thread
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the window system fails. The logic
    /// thread is still joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, shutdown_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, shutdown_rx, self.window);
        let result = platform.run();

        match &result {
            Ok(()) => info!("Platform event loop exited"),
            Err(e) => error!("Platform error: {}", e),
        }

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        if let Err(e) = core_handle.join() {
            error!("Core thread panicked: {:?}", e);
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
