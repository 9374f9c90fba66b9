//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// The only message type crossing from the platform (main) thread to the
// core (logic) thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input gathered between two redraws.
    ///
    /// `discrete` keeps arrival order (keys, buttons with cursor position).
    /// `continuous` holds at most the last cursor position.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window closed; the core records a quit and stops ticking.
    WindowClosed,
}
