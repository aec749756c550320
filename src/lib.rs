//! Ribosome Rush - collect amino acids in the right order before time runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sequence, scoring, spawning, motion, collisions, round state)
//! - `tuning`: Data-driven game balance
//! - `ui`: Presentation-side helpers (HUD slot marks, end-of-round reveal)

pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

/// Game configuration defaults (see [`Tuning`] for the runtime values)
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// HUD band at the top, excluded from the playfield
    pub const HUD_HEIGHT: f32 = 80.0;

    /// Round length
    pub const ROUND_SECONDS: u32 = 180;
    pub const TARGET_LENGTH: usize = 10;
    pub const WIN_THRESHOLD_PERCENT: f32 = 50.0;

    /// Sprite sizes (square boxes)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;

    /// Player speed in units per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player speed while touching an obstacle
    pub const PLAYER_SLOWED_SPEED: f32 = 2.0;

    /// Spawn odds: one in N per tick
    pub const COLLECTIBLE_SPAWN_ODDS: u32 = 60;
    pub const OBSTACLE_SPAWN_ODDS: u32 = 120;

    /// Obstacle speed range (units per tick)
    pub const OBSTACLE_MIN_SPEED: f32 = 1.0;
    pub const OBSTACLE_MAX_SPEED: f32 = 3.0;

    pub const COLLECTIBLE_LIFETIME_SECS: u32 = 10;
    /// Wobble offset amplitude (units) and angular rate (radians per tick)
    pub const WOBBLE_AMPLITUDE: f32 = 6.0;
    pub const WOBBLE_RATE: f32 = 0.1;
}

/// Whole seconds elapsed after `ticks` at `tick_rate`
#[inline]
pub fn ticks_to_secs(ticks: u64, tick_rate: u32) -> u64 {
    ticks / tick_rate.max(1) as u64
}
