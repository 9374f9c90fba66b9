//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the window layer (winit) and the core thread.
//
// Components:
// - `interface`: the channel message type
// - `event_collector`: core-side draining of the channel each tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
