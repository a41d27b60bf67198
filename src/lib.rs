//! Pico Arcade - two-button minigames as a headless game-state engine
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (input edges, both minigames,
//!   the mode selector, render snapshots)
//! - `highscores`: In-memory session leaderboard
//!
//! Rendering, asset loading and device polling live in whatever shell drives
//! the engine; `src/main.rs` is a headless demo shell.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;
pub use sim::{ArcadeState, RenderSnapshot, TickInput};

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions (pixels)
    pub const SCREEN_W: i32 = 960;
    pub const SCREEN_H: i32 = 540;

    /// Nominal frame period; `dt` is normalized so 1.0 equals one such frame
    pub const FRAME_MS: f32 = 16.6667;

    /// Iceberg pair defaults
    pub const BERG_WIDTH: i32 = 120;
    pub const GAP_BASE: i32 = 220;
    /// Gap shrink per difficulty level above 1
    pub const GAP_STEP: i32 = 8;
    pub const GAP_MIN: i32 = 140;
    /// Vertical band for gap centers: this far from either screen edge
    pub const GAP_CENTER_MARGIN: i32 = 140;
    /// Scroll speed (pixels per nominal frame) and growth per level
    pub const SCROLL_BASE_SPEED: f32 = 4.0;
    pub const SCROLL_SPEED_STEP: f32 = 0.45;
    /// Spawn cadence and floor
    pub const SPAWN_BASE_MS: u64 = 1500;
    pub const SPAWN_STEP_MS: u64 = 80;
    pub const SPAWN_MIN_MS: u64 = 700;
    /// New pairs enter this far beyond the right screen edge
    pub const SPAWN_X_OFFSET: i32 = 40;
    /// Pairs are pruned once fully this far past the left edge
    pub const OFFSCREEN_SLACK: f32 = 10.0;
    /// Collision slit: fraction of nominal width that can actually hit
    pub const BERG_HITBOX_SCALE_X: f32 = 0.01;

    /// Ship defaults
    pub const SHIP_W: i32 = 96;
    pub const SHIP_H: i32 = 64;
    /// Vertical speed (pixels per nominal frame)
    pub const SHIP_SPEED: f32 = 4.5;
    /// Ship stays this many pixels inside the top/bottom edges
    pub const SHIP_MARGIN: i32 = 20;
    /// Hitbox shrink per dimension (fraction of the full rect)
    pub const SHIP_HITBOX_SHRINK: f32 = 0.2;

    /// Star pickups
    pub const STAR_SIZE: i32 = 32;
    /// Extra clearance between a star and the gap edge, beyond star_h/2
    pub const STAR_GAP_PAD: i32 = 8;

    pub const INITIAL_LIVES: u8 = 3;
    /// Spawn holdoff after game start and after losing a life
    pub const RESPAWN_GRACE_MS: u64 = 1000;

    /// Difficulty bands: one level per this many points, capped
    pub const SCORE_PER_LEVEL: u32 = 5;
    pub const LEVEL_CAP: u32 = 10;

    /// Memory game timing
    pub const MEM_SHOW_MS: u64 = 650;
    pub const MEM_GAP_MS: u64 = 350;
    pub const MEM_DEBOUNCE_MS: u64 = 200;
    pub const MEM_SUCCESS_MS: u64 = 1000;
}
