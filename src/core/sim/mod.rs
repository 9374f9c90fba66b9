//=========================================================================
// Simulation
//=========================================================================
//
// Per-tick world state: the runner, the platform ring and the scenery.
// Nothing in here knows about menus, persistence or threads.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod platform_track;
pub mod player;
pub mod scenery;

//=== Public API ==========================================================

pub use platform_track::{GapUpdate, Platform, PlatformTrack};
pub use player::{Player, PlayerSnapshot};
pub use scenery::{ParallaxLayer, Scenery, ScenerySnapshot, ShipSnapshot};
