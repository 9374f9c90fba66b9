//=========================================================================
// Input
//=========================================================================
//
// Raw platform input (`InputEvent`) and the game-level inputs the session
// consumes (`GameInput`).
//
// Components:
// - `event`: portable keyboard/mouse event types
// - `mapper`: bindings and edge detection, InputEvent → GameInput
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
pub mod mapper;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use mapper::{InputMapper, KeyBinding};

//=== GameInput ===========================================================

/// Input events as the session sees them.
///
/// Pointer coordinates are in window space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    JumpPressed,
    JumpReleased,
    PauseToggled,
    PointerDown(f32, f32),
    PointerUp(f32, f32),
    /// Window closed or shutdown requested by the platform.
    Quit,
}
