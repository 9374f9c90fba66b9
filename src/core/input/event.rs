//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-independent representation of raw keyboard and mouse input.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputMapper (bindings, edge detection)
//         ↓
//    GameInput → Session
// ```
//
// Only the keys the runner can bind are represented; everything else
// arrives as `Unidentified` and is dropped by the platform layer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,
    Right,
    Middle,

    /// Side buttons, thumb buttons, macro keys.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier (location, not character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Letter Keys ------------------------------------------------------

    KeyP,
    KeyW,

    //--- Special Keys -----------------------------------------------------

    Space,
    Escape,

    /// Key not represented above.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Mouse button events carry the cursor position at the time of the
/// press, in window space (pixels, top-left origin).
///
/// # Equality & Hashing Semantics
///
/// Coordinates never take part in equality or hashing, so repeated
/// `MouseMoved` events coalesce (last position wins) and a double
/// report of one button press is deduplicated.
///
/// ```text
/// KeyDown(Space)              == KeyDown(Space)              ✓
/// KeyDown(Space)              == KeyUp(Space)                ✗
/// MouseButtonDown{Left, a}    == MouseButtonDown{Left, b}    ✓
/// MouseMoved{..}              == MouseMoved{..}              ✓
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),

    MouseButtonDown { button: MouseButton, x: f32, y: f32 },
    MouseButtonUp { button: MouseButton, x: f32, y: f32 },

    /// Cursor moved. Coalesced per frame by the platform layer.
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event; ignored downstream.
    Unidentified,
}

impl InputEvent {
    /// Cursor position carried by the event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::MouseButtonDown { x, y, .. }
            | Self::MouseButtonUp { x, y, .. }
            | Self::MouseMoved { x, y } => Some((x, y)),
            _ => None,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) | (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown { button: a, .. }, MouseButtonDown { button: b, .. })
            | (MouseButtonUp { button: a, .. }, MouseButtonUp { button: b, .. }) => a == b,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button, consistent with `PartialEq`.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => key.hash(state),
            Self::MouseButtonDown { button, .. } | Self::MouseButtonUp { button, .. } => {
                button.hash(state)
            }
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
