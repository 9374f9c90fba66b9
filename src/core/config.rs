//=========================================================================
// Runner Configuration
//=========================================================================
//
// Tunable constants for the simulation, loaded from a RON file.
//
// Layout:
//   RunnerConfig
//     ├─ window:  screen size + title
//     ├─ track:   ring size, scroll speed, reference x, spawn ranges
//     ├─ player:  spawn, gravity tiers, jump impulse, animation
//     ├─ scenery: parallax layers + decorative ship
//     ├─ run:     tick rate, channel capacity, death countdown
//     ├─ seed:    optional RNG seed (None = entropy)
//     └─ score_path
//
// Every field has a default, so a partial file (or no file) is valid.
// `validate()` is the single gate between user input and the core.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::ConfigError;

//=== SpawnRange ==========================================================

/// Half-open `[min, max)` range sampled by the random sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> SpawnRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> Range<T> {
        self.min..self.max
    }

    fn is_empty(&self) -> bool {
        !(self.min < self.max)
    }
}

//=== WindowConfig ========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Runner".into(),
        }
    }
}

//=== TrackConfig =========================================================

/// Platform ring tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Number of platforms alive at once (ring capacity).
    pub buffer_size: usize,

    /// World scroll per tick, in screen units.
    pub scroll_speed: f32,

    /// Screen x used to decide which platform is under the player.
    pub reference_x: f32,

    /// Width of each platform laid out by `create_initial`.
    pub initial_width: f32,

    /// Width assigned on recycle.
    pub width_range: SpawnRange<u32>,

    /// Spacing between a recycled platform and its predecessor.
    pub gap_range: SpawnRange<u32>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            buffer_size: 5,
            scroll_speed: 8.0,
            reference_x: 100.0,
            initial_width: 400.0,
            width_range: SpawnRange::new(200, 800),
            gap_range: SpawnRange::new(100, 550),
        }
    }
}

//=== PlayerConfig ========================================================

/// Player physics and animation tunables.
///
/// Velocities are in screen units per tick. Intervals are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn_x: f32,

    /// Player y while standing on a platform top.
    pub ground_y: f32,

    /// Gravity while the jump control is held and the player rises.
    pub gravity_hold: f32,

    /// Gravity in every other airborne case.
    pub gravity_fall: f32,

    pub jump_impulse: f32,
    pub max_fall_speed: f32,

    pub sprite_frames: usize,
    pub ground_frame_interval: f32,
    pub air_frame_interval: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_x: 100.0,
            ground_y: 428.0,
            gravity_hold: 0.25,
            gravity_fall: 0.55,
            jump_impulse: 10.0,
            max_fall_speed: 10.0,
            sprite_frames: 12,
            ground_frame_interval: 0.03,
            air_frame_interval: 0.1,
        }
    }
}

//=== SceneryConfig =======================================================

/// Decorative background tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub far_layer_width: f32,
    pub near_layer_width: f32,
    pub far_speed: f32,
    pub near_speed: f32,

    pub ship_start: (f32, f32),
    pub ship_speed: f32,
    pub ship_speed_range: SpawnRange<i32>,
    pub ship_y_range: SpawnRange<i32>,
    pub ship_respawn_x_range: SpawnRange<i32>,
    pub ship_laser_count: usize,

    /// Seconds after a flicker before the background lasers show again.
    pub laser_visible_after: f32,
    /// Upper bound of the random background laser flicker period.
    pub laser_flicker_max: f32,
    /// Upper bound of the random ship laser re-aim period.
    pub ship_laser_flicker_max: f32,
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            far_layer_width: 1280.0,
            near_layer_width: 1280.0,
            far_speed: 1.0,
            near_speed: 4.0,
            ship_start: (-200.0, 150.0),
            ship_speed: 10.0,
            ship_speed_range: SpawnRange::new(2, 11),
            ship_y_range: SpawnRange::new(150, 601),
            ship_respawn_x_range: SpawnRange::new(-3000, -99),
            ship_laser_count: 4,
            laser_visible_after: 0.1,
            laser_flicker_max: 1.0,
            ship_laser_flicker_max: 2.0,
        }
    }
}

//=== LoopConfig ==========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Logic ticks per second.
    pub tps: f64,

    /// Capacity of the platform → core event channel.
    pub channel_capacity: usize,

    /// Seconds the world keeps scrolling after death before the reset.
    pub death_delay: f32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tps: 120.0,
            channel_capacity: 128,
            death_delay: 1.0,
        }
    }
}

//=== RunnerConfig ========================================================

/// Root configuration.
///
/// # Example
///
/// ```
/// use rooftop_runner::core::config::RunnerConfig;
///
/// let config = RunnerConfig::from_ron_str("(track: (scroll_speed: 6.0), seed: Some(7))").unwrap();
/// assert_eq!(config.track.scroll_speed, 6.0);
/// assert_eq!(config.track.buffer_size, 5);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub window: WindowConfig,
    pub track: TrackConfig,
    pub player: PlayerConfig,
    pub scenery: SceneryConfig,
    pub run: LoopConfig,
    pub seed: Option<u64>,
    pub score_path: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            track: TrackConfig::default(),
            player: PlayerConfig::default(),
            scenery: SceneryConfig::default(),
            run: LoopConfig::default(),
            seed: None,
            score_path: PathBuf::from("score.ron"),
        }
    }
}

impl RunnerConfig {
    //--- Loading ----------------------------------------------------------

    /// Loads and validates a config file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot
    /// be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!(target: "core", "No config at {}, using defaults", path.display());
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = ron::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        info!(target: "core", "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a config from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    //--- Validation -------------------------------------------------------

    /// Rejects tunables the simulation cannot run with.
    ///
    /// Every float must be finite; NaN fails each check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if !positive(w.width) || !positive(w.height) {
            return Err(ConfigError::invalid(
                "window",
                format!("screen size must be positive, got {}x{}", w.width, w.height),
            ));
        }

        let t = &self.track;
        // The gap check compares the current platform with the next slot.
        if t.buffer_size < 2 {
            return Err(ConfigError::invalid(
                "track.buffer_size",
                format!("must be at least 2, got {}", t.buffer_size),
            ));
        }
        if !positive(t.scroll_speed) {
            return Err(ConfigError::invalid("track.scroll_speed", "must be positive"));
        }
        if !t.reference_x.is_finite() {
            return Err(ConfigError::invalid("track.reference_x", "must be finite"));
        }
        if !positive(t.initial_width) {
            return Err(ConfigError::invalid("track.initial_width", "must be positive"));
        }
        if t.width_range.is_empty() || t.width_range.min == 0 {
            return Err(ConfigError::invalid(
                "track.width_range",
                format!("needs 0 < min < max, got {:?}", t.width_range),
            ));
        }
        if t.gap_range.is_empty() {
            return Err(ConfigError::invalid(
                "track.gap_range",
                format!("needs min < max, got {:?}", t.gap_range),
            ));
        }

        let p = &self.player;
        if !p.spawn_x.is_finite() || !p.ground_y.is_finite() {
            return Err(ConfigError::invalid("player.spawn", "position must be finite"));
        }
        if !positive(p.gravity_hold) || !positive(p.gravity_fall) {
            return Err(ConfigError::invalid("player.gravity", "both tiers must be positive"));
        }
        if !positive(p.jump_impulse) {
            return Err(ConfigError::invalid("player.jump_impulse", "must be positive"));
        }
        if !positive(p.max_fall_speed) {
            return Err(ConfigError::invalid("player.max_fall_speed", "must be positive"));
        }
        if p.sprite_frames == 0 {
            return Err(ConfigError::invalid("player.sprite_frames", "must be at least 1"));
        }
        if !positive(p.ground_frame_interval) || !positive(p.air_frame_interval) {
            return Err(ConfigError::invalid("player.frame_interval", "must be positive"));
        }

        let s = &self.scenery;
        if !positive(s.far_layer_width) || !positive(s.near_layer_width) {
            return Err(ConfigError::invalid("scenery.layer_width", "must be positive"));
        }
        if !s.far_speed.is_finite()
            || !s.near_speed.is_finite()
            || !s.ship_speed.is_finite()
            || !s.ship_start.0.is_finite()
            || !s.ship_start.1.is_finite()
        {
            return Err(ConfigError::invalid("scenery.motion", "speeds and positions must be finite"));
        }
        if s.ship_speed_range.is_empty()
            || s.ship_y_range.is_empty()
            || s.ship_respawn_x_range.is_empty()
        {
            return Err(ConfigError::invalid("scenery.ship", "spawn ranges need min < max"));
        }
        if s.ship_laser_count == 0 {
            return Err(ConfigError::invalid("scenery.ship_laser_count", "must be at least 1"));
        }
        if !non_negative(s.laser_visible_after) {
            return Err(ConfigError::invalid("scenery.laser_visible_after", "must not be negative"));
        }
        if !positive(s.laser_flicker_max) || !positive(s.ship_laser_flicker_max) {
            return Err(ConfigError::invalid("scenery.flicker", "periods must be positive"));
        }

        let r = &self.run;
        if !(r.tps > 0.0 && r.tps.is_finite()) {
            return Err(ConfigError::invalid("run.tps", format!("must be positive, got {}", r.tps)));
        }
        if r.channel_capacity == 0 {
            return Err(ConfigError::invalid("run.channel_capacity", "must be at least 1"));
        }
        if !non_negative(r.death_delay) {
            return Err(ConfigError::invalid("run.death_delay", "must not be negative"));
        }

        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value > 0.0 && value.is_finite()
}

fn non_negative(value: f32) -> bool {
    value >= 0.0 && value.is_finite()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_tunables() {
        let config = RunnerConfig::default();
        assert_eq!(config.track.buffer_size, 5);
        assert_eq!(config.track.scroll_speed, 8.0);
        assert_eq!(config.track.reference_x, 100.0);
        assert_eq!(config.track.width_range, SpawnRange::new(200, 800));
        assert_eq!(config.track.gap_range, SpawnRange::new(100, 550));
        assert_eq!(config.player.gravity_hold, 0.25);
        assert_eq!(config.player.gravity_fall, 0.55);
        assert_eq!(config.player.jump_impulse, 10.0);
        assert_eq!(config.player.max_fall_speed, 10.0);
        assert_eq!((config.window.width, config.window.height), (1280.0, 720.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let mut config = RunnerConfig::default();
        config.track.buffer_size = 0;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "track.buffer_size"),
            other => panic!("expected invalid buffer size, got {:?}", other),
        }
    }

    #[test]
    fn single_platform_buffer_is_rejected() {
        let mut config = RunnerConfig::default();
        config.track.buffer_size = 1;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "track.buffer_size"),
            other => panic!("expected invalid buffer size, got {:?}", other),
        }

        config.track.buffer_size = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nan_tunables_are_rejected() {
        let mut config = RunnerConfig::default();
        config.track.scroll_speed = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.player.gravity_fall = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.run.death_delay = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.track.reference_x = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn nan_in_ron_file_fails_validation() {
        let err = RunnerConfig::from_ron_str("(player: (max_fall_speed: NaN))").unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player.max_fall_speed"),
            other => panic!("expected invalid fall speed, got {:?}", other),
        }
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let mut config = RunnerConfig::default();
        config.track.gap_range = SpawnRange::new(300, 300);
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.track.width_range = SpawnRange::new(0, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_tps_is_rejected() {
        let mut config = RunnerConfig::default();
        config.run.tps = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_ron_keeps_remaining_defaults() {
        let config = RunnerConfig::from_ron_str("(player: (jump_impulse: 12.0))").unwrap();
        assert_eq!(config.player.jump_impulse, 12.0);
        assert_eq!(config.player.gravity_fall, 0.55);
        assert_eq!(config.track, TrackConfig::default());
    }

    #[test]
    fn malformed_ron_is_parse_error() {
        let err = RunnerConfig::from_ron_str("(track: (buffer_size: \"five\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let config = RunnerConfig::load("this/file/does/not/exist.ron").unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn load_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(track: (buffer_size: 7), seed: Some(99))").unwrap();

        let config = RunnerConfig::load(file.path()).unwrap();
        assert_eq!(config.track.buffer_size, 7);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn load_invalid_file_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(track: (buffer_size: 0))").unwrap();

        let err = RunnerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn spawn_range_is_half_open() {
        let range = SpawnRange::new(200u32, 800u32);
        assert_eq!(range.as_range(), 200..800);
        assert!(range.as_range().contains(&799));
        assert!(!range.as_range().contains(&800));
        assert!(SpawnRange::new(5u32, 5u32).is_empty());
    }
}
