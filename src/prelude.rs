//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use rooftop_runner::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration and errors
pub use crate::core::config::{RunnerConfig, SpawnRange};
pub use crate::core::error::{ConfigError, PlatformError, StoreError};

// Input
pub use crate::core::input::{GameInput, InputMapper, KeyBinding, KeyCode, MouseButton};

// Session
pub use crate::core::session::{MenuButton, Session, SessionState, Snapshot};

// Simulation
pub use crate::core::sim::{Platform, PlatformTrack, Player, Scenery};

// Persistence
pub use crate::core::store::{MemoryScoreStore, RonScoreStore, ScoreStore};
