//=========================================================================
// Render Snapshot
//=========================================================================
//
// Read-only copy of everything a renderer needs for one frame. The core
// never draws; it hands one of these out per tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::menu::MenuButton;
use super::SessionState;
use crate::core::sim::{Platform, PlayerSnapshot, ScenerySnapshot};

//=== Snapshot ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Ticks processed since the session was created, paused ones included.
    pub tick: u64,
    pub state: SessionState,
    pub player: PlayerSnapshot,
    /// Platforms in screen order, left to right.
    pub platforms: Vec<Platform>,
    /// Shared vertical placement of every platform.
    pub platform_top: f32,
    pub platform_height: f32,
    pub score: u32,
    pub high_score: u32,
    pub scenery: ScenerySnapshot,
    /// Menu button held under the pointer, if a menu is showing.
    pub highlighted: Option<MenuButton>,
}

impl Snapshot {
    /// Score to show as "Highest": the live score once it passes the record.
    pub fn best(&self) -> u32 {
        self.score.max(self.high_score)
    }
}
