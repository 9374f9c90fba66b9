//=========================================================================
// Scenery
//=========================================================================
//
// Decorative background: two parallax building layers, flickering
// background lasers and a ship crossing the sky with a re-aimed laser.
//
// Nothing here feeds back into gameplay. Randomness and time are
// injected so runs replay exactly from a seed.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::config::SceneryConfig;

/// Ship is drawn once its x reaches this value.
const SHIP_VISIBLE_FROM: f32 = -100.0;

//=== ParallaxLayer =======================================================

/// Two copies of one background image scrolling at a fixed speed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    positions: [f32; 2],
    width: f32,
    speed: f32,
}

impl ParallaxLayer {
    fn new(width: f32, speed: f32) -> Self {
        Self {
            positions: [0.0, width],
            width,
            speed,
        }
    }

    fn tick(&mut self) {
        for pos in &mut self.positions {
            if *pos <= -self.width {
                *pos = self.width;
            }
            *pos -= self.speed;
        }
    }

    pub fn positions(&self) -> [f32; 2] {
        self.positions
    }
}

//=== Ship ================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipSnapshot {
    pub x: f32,
    pub y: f32,
    /// Index of the laser sprite currently aimed.
    pub laser: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct Ship {
    x: f32,
    y: f32,
    speed: f32,
    laser: usize,
    laser_elapsed: f32,
}

//=== ScenerySnapshot =====================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ScenerySnapshot {
    pub far: [f32; 2],
    pub near: [f32; 2],
    pub lasers_visible: bool,
    /// `None` while the ship is still off-screen to the left.
    pub ship: Option<ShipSnapshot>,
}

//=== Scenery =============================================================

#[derive(Debug, Clone)]
pub struct Scenery {
    config: SceneryConfig,
    screen_width: f32,
    far: ParallaxLayer,
    near: ParallaxLayer,
    ship: Ship,
    laser_elapsed: f32,
}

impl Scenery {
    pub fn new(config: &SceneryConfig, screen_width: f32) -> Self {
        Self {
            config: config.clone(),
            screen_width,
            far: ParallaxLayer::new(config.far_layer_width, config.far_speed),
            near: ParallaxLayer::new(config.near_layer_width, config.near_speed),
            ship: Ship {
                x: config.ship_start.0,
                y: config.ship_start.1,
                speed: config.ship_speed,
                laser: 0,
                laser_elapsed: 0.0,
            },
            laser_elapsed: 0.0,
        }
    }

    /// Scrolls the layers, moves the ship and advances the flicker timers.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.far.tick();
        self.near.tick();
        self.tick_ship(rng);
        self.tick_lasers(dt, rng);
    }

    fn tick_ship<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cfg = &self.config;
        if self.ship.x >= self.screen_width {
            self.ship.speed = rng.gen_range(cfg.ship_speed_range.as_range()) as f32;
            self.ship.y = rng.gen_range(cfg.ship_y_range.as_range()) as f32;
            self.ship.x = rng.gen_range(cfg.ship_respawn_x_range.as_range()) as f32;
        }
        self.ship.x += self.ship.speed;
    }

    fn tick_lasers<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.laser_elapsed += dt;
        if self.lasers_visible()
            && self.laser_elapsed > rng.gen_range(0.0..self.config.laser_flicker_max)
        {
            self.laser_elapsed = 0.0;
        }

        self.ship.laser_elapsed += dt;
        if self.ship.laser_elapsed > rng.gen_range(0.0..self.config.ship_laser_flicker_max) {
            self.ship.laser_elapsed = 0.0;
            self.ship.laser = rng.gen_range(0..self.config.ship_laser_count);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn lasers_visible(&self) -> bool {
        self.laser_elapsed > self.config.laser_visible_after
    }

    pub fn far(&self) -> &ParallaxLayer {
        &self.far
    }

    pub fn near(&self) -> &ParallaxLayer {
        &self.near
    }

    pub fn snapshot(&self) -> ScenerySnapshot {
        let ship = (self.ship.x >= SHIP_VISIBLE_FROM).then_some(ShipSnapshot {
            x: self.ship.x,
            y: self.ship.y,
            laser: self.ship.laser,
        });

        ScenerySnapshot {
            far: self.far.positions(),
            near: self.near.positions(),
            lasers_visible: self.lasers_visible(),
            ship,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
