//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame store for input gathered between two redraws.
//
//   discrete:   keys and buttons, arrival order, consecutive duplicates
//               dropped
//   continuous: cursor motion, coalesced to the last position
//
// Drained on every RedrawRequested; capacity is kept across frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    /// Inserts or replaces a continuous input (latest wins).
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a discrete input unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Takes this frame's events, or `None` if nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = self.discrete.drain(..).collect();
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, MouseButton};

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        buffer.push_discrete(InputEvent::KeyUp(KeyCode::Space));
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 3);
    }

    #[test]
    fn cursor_motion_keeps_last_position() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        buffer.push_continuous(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        assert_eq!(continuous[0].position(), Some((20.0, 30.0)));
    }

    #[test]
    fn discrete_order_is_preserved() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::MouseButtonDown { button: MouseButton::Left, x: 1.0, y: 1.0 });
        buffer.push_discrete(InputEvent::KeyDown(KeyCode::Escape));
        buffer.push_discrete(InputEvent::MouseButtonUp { button: MouseButton::Left, x: 1.0, y: 1.0 });

        let (discrete, _) = buffer.drain().unwrap();
        assert!(matches!(discrete[0], InputEvent::MouseButtonDown { .. }));
        assert_eq!(discrete[1], InputEvent::KeyDown(KeyCode::Escape));
        assert!(matches!(discrete[2], InputEvent::MouseButtonUp { .. }));
    }

    #[test]
    fn drain_empties_buffer_and_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for _ in 0..100 {
            buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
            buffer.push_discrete(InputEvent::KeyUp(KeyCode::Space));
        }
        let cap_before = buffer.discrete.capacity();

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.discrete.capacity(), cap_before);
        assert!(buffer.drain().is_none());
    }
}
