//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Drives the game session on the logic (non-platform) thread.
//
// Architecture:
// ```text
//   Receiver<PlatformEvent>
//         ↓ EventCollector::collect_frame()
//   Vec<InputEvent>
//         ↓ InputMapper::map_batch()
//   Vec<GameInput> ──► Session::handle_input()
//                      Session::tick(dt)
//                            ↓
//                      Sender<Snapshot> (optional, try_send)
// ```
//
// Each tick runs at a fixed rate (TPS); `dt` is the measured wall-clock
// time since the previous tick. The loop ends when the window closes,
// the platform disconnects, or the session asks to quit. Dropping the
// shutdown sender on exit tells the platform to close its window.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod sim;
pub mod store;

pub(crate) mod platform_bridge;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use input::{GameInput, InputEvent, InputMapper};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use session::{Session, Snapshot};

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    session: Session,
    mapper: InputMapper,
    snapshot_sender: Option<Sender<Snapshot>>,
    inputs: Vec<GameInput>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        session: Session,
        mapper: InputMapper,
        snapshot_sender: Option<Sender<Snapshot>>,
    ) -> Self {
        Self {
            session,
            mapper,
            snapshot_sender,
            inputs: Vec::with_capacity(16),
        }
    }

    //--- Thread Loop ------------------------------------------------------

    /// Spawns the logic thread ticking the session at `tps`.
    ///
    /// `shutdown` is held for the thread's lifetime and dropped on exit;
    /// the platform watches the paired receiver.
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        shutdown: Sender<()>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let _shutdown = shutdown;
            let mut collector = EventCollector::new(receiver);
            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();
                let dt = frame_start.duration_since(last_tick).as_secs_f32();
                last_tick = frame_start;

                //--- Step 1: Gather platform events ------------------------
                let control = collector.collect_frame();

                //--- Step 2: Input, simulation, snapshot -------------------
                if self.run_frame(collector.events(), dt) == TickControl::Exit {
                    info!(target: "core", "Session requested quit");
                    break;
                }

                if control == TickControl::Exit {
                    self.session.handle_input(GameInput::Quit);
                    info!(target: "core", "Platform gone, core thread exiting");
                    break;
                }

                //--- Step 3: Maintain fixed pacing -------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            info!(
                target: "core",
                "Core thread stopped after {} ticks (high score {})",
                self.session.snapshot().tick,
                self.session.high_score()
            );
        })
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one tick: maps `events`, feeds them to the session, advances
    /// it by `dt` and publishes a snapshot.
    ///
    /// Returns [`TickControl::Exit`] once the session has requested quit.
    pub(crate) fn run_frame(&mut self, events: &[InputEvent], dt: f32) -> TickControl {
        self.inputs.clear();
        self.mapper.map_batch(events, &mut self.inputs);

        for input in self.inputs.drain(..) {
            self.session.handle_input(input);
        }

        if self.session.quit_requested() {
            return TickControl::Exit;
        }

        self.session.tick(dt);
        self.publish();
        TickControl::Continue
    }

    fn publish(&mut self) {
        let Some(sender) = &self.snapshot_sender else {
            return;
        };

        match sender.try_send(self.session.snapshot()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                trace!(target: "core", "Snapshot channel full, frame dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(target: "core", "Snapshot receiver gone, publishing stopped");
                self.snapshot_sender = None;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &Session {
        &self.session
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RunnerConfig;
    use crate::core::input::{KeyCode, MouseButton};
    use crate::core::session::SessionState;
    use crate::core::store::MemoryScoreStore;
    use crossbeam_channel::{bounded, unbounded};

    const DT: f32 = 1.0 / 120.0;

    fn orchestrator(snapshots: Option<Sender<Snapshot>>) -> CoreSystemsOrchestrator {
        let config = RunnerConfig {
            seed: Some(7),
            ..RunnerConfig::default()
        };
        let session = Session::new(&config, Box::new(MemoryScoreStore::new()));
        CoreSystemsOrchestrator::new(session, InputMapper::default(), snapshots)
    }

    fn click(x: f32, y: f32) -> Vec<InputEvent> {
        vec![
            InputEvent::MouseButtonDown { button: MouseButton::Left, x, y },
            InputEvent::MouseButtonUp { button: MouseButton::Left, x, y },
        ]
    }

    #[test]
    fn click_on_play_starts_run() {
        let mut core = orchestrator(None);

        assert_eq!(core.run_frame(&click(640.0, 320.0), DT), TickControl::Continue);

        assert_eq!(core.session().state(), SessionState::Running);
    }

    #[test]
    fn keyboard_drives_jump_and_pause() {
        let mut core = orchestrator(None);
        core.run_frame(&click(640.0, 320.0), DT);

        core.run_frame(&[InputEvent::KeyDown(KeyCode::Space)], DT);
        assert!(core.session().player().is_jumping());

        core.run_frame(&[InputEvent::KeyDown(KeyCode::Escape)], DT);
        assert!(matches!(core.session().state(), SessionState::Paused { .. }));
    }

    #[test]
    fn quit_button_ends_loop_before_ticking() {
        let mut core = orchestrator(None);
        let before = core.session().snapshot().tick;

        assert_eq!(core.run_frame(&click(630.0, 420.0), DT), TickControl::Exit);
        assert_eq!(core.session().snapshot().tick, before);
    }

    #[test]
    fn snapshot_published_every_tick() {
        let (tx, rx) = unbounded();
        let mut core = orchestrator(Some(tx));

        for _ in 0..3 {
            core.run_frame(&[], DT);
        }

        let ticks: Vec<u64> = rx.try_iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![1, 2, 3]);
    }

    #[test]
    fn full_snapshot_channel_drops_frames() {
        let (tx, rx) = bounded(1);
        let mut core = orchestrator(Some(tx));

        core.run_frame(&[], DT);
        core.run_frame(&[], DT);

        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn disconnected_snapshot_receiver_stops_publishing() {
        let (tx, rx) = bounded(1);
        let mut core = orchestrator(Some(tx));
        drop(rx);

        core.run_frame(&[], DT);

        assert!(core.snapshot_sender.is_none());
        assert_eq!(core.run_frame(&[], DT), TickControl::Continue);
    }

    #[test]
    fn core_thread_exits_on_window_close() {
        let (tx, rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let handle = orchestrator(None).spawn_core_thread(rx, shutdown_tx, 240.0);

        tx.send(PlatformEvent::WindowClosed).unwrap();
        handle.join().unwrap();

        assert!(shutdown_rx.recv().is_err());
    }

    #[test]
    fn core_thread_exits_on_quit_click() {
        let (tx, rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let handle = orchestrator(None).spawn_core_thread(rx, shutdown_tx, 240.0);

        tx.send(PlatformEvent::Inputs {
            discrete: click(630.0, 420.0),
            continuous: vec![],
        })
        .unwrap();
        handle.join().unwrap();

        assert!(shutdown_rx.recv().is_err());
        drop(tx);
    }
}
