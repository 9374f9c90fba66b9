//=========================================================================
// Player
//=========================================================================
//
// Vertical physics, death state and sprite animation for the runner.
//
// Architecture:
//   tick(dt, in_gap, holding)
//     ├─ integrate position by velocity
//     ├─ apply gravity tier (airborne or dead only)
//     ├─ ground collision → land | die
//     ├─ clamp fall speed
//     └─ advance animation by dt
//
// The player never moves horizontally while alive; the world scrolls
// instead. Once dead it drifts left with the world until reset.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::PlayerConfig;

//=== PlayerSnapshot ======================================================

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub frame_index: usize,
    pub dead: bool,
}

//=== Player ==============================================================

/// The runner.
///
/// Velocities are in screen units per tick (positive y is down).
/// `dead` is terminal until [`Player::reset`].
#[derive(Debug, Clone)]
pub struct Player {
    config: PlayerConfig,
    drift_speed: f32,

    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,

    jumping: bool,
    dead: bool,
    holding_jump: bool,

    anim_frame: usize,
    anim_elapsed: f32,
}

impl Player {
    //--- Construction -----------------------------------------------------

    /// Creates a player standing at the spawn point.
    ///
    /// `drift_speed` is the world scroll speed, mirrored horizontally
    /// once the player dies.
    pub fn new(config: &PlayerConfig, drift_speed: f32) -> Self {
        Self {
            config: config.clone(),
            drift_speed,
            x: config.spawn_x,
            y: config.ground_y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            jumping: false,
            dead: false,
            holding_jump: false,
            anim_frame: 0,
            anim_elapsed: 0.0,
        }
    }

    //--- Simulation -------------------------------------------------------

    /// Advances the player by one tick.
    ///
    /// Gravity applies while airborne (`in_gap || jumping`) or dead. The
    /// lighter tier is used while the jump control is held on the way up.
    /// Reaching the platform top while descending either lands the player
    /// or, over a gap, kills it.
    pub fn tick(&mut self, dt: f32, in_gap: bool, holding_jump: bool) {
        self.holding_jump = holding_jump;

        self.x += self.velocity_x;
        self.y += self.velocity_y;

        let gravity = if self.holding_jump && self.velocity_y < 0.0 {
            self.config.gravity_hold
        } else {
            self.config.gravity_fall
        };

        if self.dead {
            self.velocity_y += gravity;
        } else if in_gap || self.jumping {
            self.velocity_y += gravity;

            if self.y >= self.config.ground_y && self.velocity_y >= 0.0 {
                if in_gap {
                    self.die();
                } else {
                    self.y = self.config.ground_y;
                    self.velocity_y = 0.0;
                }
                self.jumping = false;
            }
        }

        if self.velocity_y > self.config.max_fall_speed {
            self.velocity_y = self.config.max_fall_speed;
        }

        self.animate(dt);
    }

    /// Starts a jump. Returns `false` (no-op) when airborne or dead.
    pub fn jump(&mut self) -> bool {
        if self.jumping || self.dead {
            return false;
        }
        self.velocity_y = -self.config.jump_impulse;
        self.jumping = true;
        true
    }

    /// Records whether the jump control is held (selects the gravity tier).
    pub fn set_holding_jump(&mut self, holding: bool) {
        self.holding_jump = holding;
    }

    /// Restores the spawn state for a new run.
    pub fn reset(&mut self) {
        self.dead = false;
        self.jumping = false;
        self.x = self.config.spawn_x;
        self.y = self.config.ground_y;
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.anim_frame = 0;
        self.anim_elapsed = 0.0;
    }

    //--- Internal Helpers -------------------------------------------------

    fn die(&mut self) {
        self.dead = true;
        self.velocity_x = -self.drift_speed;
        self.velocity_y = self.config.max_fall_speed;
    }

    fn animate(&mut self, dt: f32) {
        let interval = if !self.jumping && !self.dead {
            self.config.ground_frame_interval
        } else {
            self.config.air_frame_interval
        };

        self.anim_elapsed += dt;
        if self.anim_elapsed >= interval {
            self.anim_frame = (self.anim_frame + 1) % self.config.sprite_frames;
            self.anim_elapsed = 0.0;
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_holding_jump(&self) -> bool {
        self.holding_jump
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.velocity_x, self.velocity_y)
    }

    pub fn frame_index(&self) -> usize {
        self.anim_frame
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            x: self.x,
            y: self.y,
            frame_index: self.anim_frame,
            dead: self.dead,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
