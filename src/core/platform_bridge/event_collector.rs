//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiving end of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events (arrival order)
//                                             → TickControl
//
// Polling is bounded per tick so a flood of input cannot starve the
// simulation. The collector never blocks: the orchestrator owns pacing.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

/// Channel messages drained per tick before deferring to the next one.
const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(32),
        }
    }

    /// Drains pending platform messages for this tick.
    ///
    /// Returns [`TickControl::Exit`] on `WindowClosed` or once every
    /// sender is gone. Events received before the exit are kept.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();

        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.events.extend(discrete);
                    self.events.extend(continuous);
                }
                Ok(PlatformEvent::WindowClosed) => {
                    debug!(target: "core", "Window closed");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "core", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        warn!(
            target: "core",
            "Event queue backlog: {} messages this tick, rest deferred",
            MAX_EVENTS_PER_FRAME
        );
        TickControl::Continue
    }

    /// Events collected by the last [`collect_frame`](Self::collect_frame).
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
