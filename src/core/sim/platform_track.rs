//=========================================================================
// Platform Track
//=========================================================================
//
// Fixed-capacity ring of platforms scrolled right-to-left past a fixed
// reference x on screen.
//
// Ring layout (N = 5):
// ```text
//   slots:   [0] [1] [2] [3] [4]
//             ▲           ▲
//             current      last (rightmost, most recently placed)
//
//   screen:  |--ref_x--|
//            [ 2 ]   [ 3 ]     [ 4 ]  [ 0 ]   [ 1 ]
// ```
// Slots are reused forever: once a platform's trailing edge leaves the
// screen it is re-placed after `last` with a fresh width and spacing.
//
// Per tick (driven by the session):
//   tick() → update_current_index() → update_gap()
//
// `current_index_consumed` pins `current_index` to one advance per
// platform: update_gap() releases it when the reference point clears the
// trailing edge, update_current_index() consumes it on the next advance.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::config::TrackConfig;

//=== Platform ============================================================

/// A platform's horizontal extent. Vertical placement is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
}

impl Platform {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    pub fn leading_edge(&self) -> f32 {
        self.x
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

//=== GapUpdate ===========================================================

/// Result of one gap-state evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GapUpdate {
    /// The gap flag flipped this tick.
    pub changed: bool,

    /// Points earned this tick (0 or 1).
    pub score_delta: u32,
}

//=== PlatformTrack =======================================================

/// Ring of platforms with gap detection and scoring.
#[derive(Debug, Clone)]
pub struct PlatformTrack {
    config: TrackConfig,
    platforms: Vec<Platform>,
    last_index: usize,
    current_index: usize,
    current_index_consumed: bool,
    gap: bool,
    score: u32,
}

impl PlatformTrack {
    //--- Construction -----------------------------------------------------

    /// Creates an empty track. Call [`create_initial`](Self::create_initial)
    /// before the first tick.
    pub fn new(config: &TrackConfig) -> Self {
        Self {
            config: config.clone(),
            platforms: Vec::new(),
            last_index: 0,
            current_index: 0,
            current_index_consumed: true,
            gap: false,
            score: 0,
        }
    }

    /// Creates a track from explicit platforms, given in ring order
    /// (left to right). The first platform is the one under the player.
    pub fn from_layout(config: &TrackConfig, platforms: Vec<Platform>) -> Self {
        let mut track = Self::new(config);
        track.last_index = platforms.len().saturating_sub(1);
        track.platforms = platforms;
        track
    }

    /// Lays out `n` default-width platforms back to back from x = 0.
    pub fn create_initial(&mut self, n: usize) {
        let width = self.config.initial_width;

        self.platforms.clear();
        self.platforms
            .extend((0..n).map(|i| Platform::new(i as f32 * width, width)));

        self.last_index = n.saturating_sub(1);
        self.current_index = 0;
        self.current_index_consumed = true;
        self.gap = false;
        self.score = 0;

        debug!(target: "core", "Track initialized with {} platforms", n);
    }

    /// Re-creates the initial layout at the configured buffer size.
    pub fn reset(&mut self) {
        self.create_initial(self.config.buffer_size);
    }

    //--- Per-Tick Operations ----------------------------------------------

    /// Recycles every platform that has left the screen, then scrolls all
    /// platforms left by `scroll_speed`.
    pub fn tick<R: Rng + ?Sized>(&mut self, scroll_speed: f32, rng: &mut R) {
        for slot in 0..self.platforms.len() {
            if self.trailing_edge(slot) < 0.0 {
                self.recycle(slot, rng);
            }
        }

        for platform in &mut self.platforms {
            platform.x -= scroll_speed;
        }
    }

    /// Moves `slot` to the right end of the track with a random width and
    /// a random spacing after the current rightmost platform.
    pub fn recycle<R: Rng + ?Sized>(&mut self, slot: usize, rng: &mut R) {
        if self.platforms.is_empty() {
            return;
        }
        let slot = slot % self.platforms.len();

        let width = rng.gen_range(self.config.width_range.as_range()) as f32;
        let spacing = rng.gen_range(self.config.gap_range.as_range()) as f32;
        let x = self.trailing_edge(self.last_index) + spacing;

        self.platforms[slot] = Platform::new(x, width);
        self.last_index = slot;

        trace!(
            target: "core",
            "Recycled slot {} → x={} width={} spacing={}",
            slot,
            x,
            width,
            spacing
        );
    }

    /// Advances `current_index` once the reference point has cleared the
    /// current platform, at most once per release by [`update_gap`](Self::update_gap).
    ///
    /// Returns `true` if the index advanced.
    pub fn update_current_index(&mut self) -> bool {
        if self.platforms.is_empty() || self.current_index_consumed {
            return false;
        }

        if self.trailing_edge(self.current_index) < self.config.reference_x {
            self.current_index = (self.current_index + 1) % self.platforms.len();
            self.current_index_consumed = true;
            return true;
        }

        false
    }

    /// Runs the gap state machine and scores gap entries.
    ///
    /// - gap → platform: the reference point lies within the current platform.
    /// - platform → gap (+1): the reference point cleared the current
    ///   platform and the next one has not reached it yet. Adjacent
    ///   platforms (zero spacing) never open a gap.
    ///
    /// Clearing the current platform always releases `current_index` for
    /// one advance, whether or not a gap opened.
    pub fn update_gap(&mut self) -> GapUpdate {
        if self.platforms.is_empty() {
            return GapUpdate::default();
        }

        let reference = self.config.reference_x;
        let current = self.current_index;
        let next = (current + 1) % self.platforms.len();

        if self.gap
            && self.leading_edge(current) < reference
            && self.trailing_edge(current) > reference
        {
            self.gap = false;
            trace!(target: "core", "Landed zone: platform {} under reference", current);
            return GapUpdate {
                changed: true,
                score_delta: 0,
            };
        }

        if !self.gap && self.trailing_edge(current) < reference {
            self.current_index_consumed = false;

            if self.leading_edge(next) > reference {
                self.gap = true;
                self.score += 1;
                debug!(target: "core", "Gap entered after platform {} (score {})", current, self.score);
                return GapUpdate {
                    changed: true,
                    score_delta: 1,
                };
            }
        }

        GapUpdate::default()
    }

    //--- Accessors --------------------------------------------------------

    /// Leading (left) edge of ring slot `index`; 0 on an empty track.
    pub fn leading_edge(&self, index: usize) -> f32 {
        if self.platforms.is_empty() {
            return 0.0;
        }
        self.platforms[index % self.platforms.len()].leading_edge()
    }

    /// Trailing (right) edge of ring slot `index`; 0 on an empty track.
    pub fn trailing_edge(&self, index: usize) -> f32 {
        if self.platforms.is_empty() {
            return 0.0;
        }
        self.platforms[index % self.platforms.len()].trailing_edge()
    }

    pub fn gap(&self) -> bool {
        self.gap
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platforms in ring-slot order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Platforms in screen order (left to right).
    pub fn ordered(&self) -> Vec<Platform> {
        let mut ordered = self.platforms.clone();
        ordered.sort_by(|a, b| a.x.total_cmp(&b.x));
        ordered
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
