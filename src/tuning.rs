//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the
//! standard game; a JSON document can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Aabb;

/// Rejected tuning input
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the HUD band reserved at the top of the screen
    pub hud_height: f32,

    // === Clock ===
    pub tick_rate: u32,
    pub round_seconds: u32,

    // === Sequence ===
    pub target_length: usize,
    /// Minimum score percentage that counts as a win
    pub win_threshold_percent: f32,

    // === Sprites ===
    pub player_size: f32,
    pub collectible_size: f32,
    pub obstacle_size: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_slowed_speed: f32,

    // === Spawning (one in N per tick) ===
    pub collectible_spawn_odds: u32,
    pub obstacle_spawn_odds: u32,

    // === Obstacles (units per tick) ===
    pub obstacle_min_speed: f32,
    pub obstacle_max_speed: f32,

    // === Collectibles ===
    pub collectible_lifetime_secs: u32,
    pub wobble_amplitude: f32,
    /// Radians per tick
    pub wobble_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            hud_height: HUD_HEIGHT,

            tick_rate: TICK_RATE,
            round_seconds: ROUND_SECONDS,

            target_length: TARGET_LENGTH,
            win_threshold_percent: WIN_THRESHOLD_PERCENT,

            player_size: PLAYER_SIZE,
            collectible_size: COLLECTIBLE_SIZE,
            obstacle_size: OBSTACLE_SIZE,

            player_speed: PLAYER_SPEED,
            player_slowed_speed: PLAYER_SLOWED_SPEED,

            collectible_spawn_odds: COLLECTIBLE_SPAWN_ODDS,
            obstacle_spawn_odds: OBSTACLE_SPAWN_ODDS,

            obstacle_min_speed: OBSTACLE_MIN_SPEED,
            obstacle_max_speed: OBSTACLE_MAX_SPEED,

            collectible_lifetime_secs: COLLECTIBLE_LIFETIME_SECS,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            wobble_rate: WOBBLE_RATE,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON (missing fields keep their defaults) and validate
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_size", self.player_size),
            ("collectible_size", self.collectible_size),
            ("obstacle_size", self.obstacle_size),
            ("player_speed", self.player_speed),
            ("player_slowed_speed", self.player_slowed_speed),
            ("obstacle_min_speed", self.obstacle_min_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !(self.hud_height.is_finite() && self.hud_height >= 0.0) {
            return Err(invalid("hud_height", "must be non-negative"));
        }
        let playfield_height = self.screen_height - self.hud_height;
        let largest = self
            .player_size
            .max(self.collectible_size)
            .max(self.obstacle_size);
        if playfield_height < largest || self.screen_width < largest {
            return Err(invalid(
                "hud_height",
                format!("playfield {}x{playfield_height} cannot fit a {largest} sprite", self.screen_width),
            ));
        }

        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be at least 1"));
        }
        if self.target_length == 0 {
            return Err(invalid("target_length", "must be at least 1"));
        }
        if self.collectible_spawn_odds == 0 {
            return Err(invalid("collectible_spawn_odds", "must be at least 1"));
        }
        if self.obstacle_spawn_odds == 0 {
            return Err(invalid("obstacle_spawn_odds", "must be at least 1"));
        }
        if !(self.obstacle_max_speed.is_finite() && self.obstacle_max_speed >= self.obstacle_min_speed) {
            return Err(invalid(
                "obstacle_max_speed",
                format!("must be >= obstacle_min_speed ({})", self.obstacle_min_speed),
            ));
        }
        if !(0.0..=100.0).contains(&self.win_threshold_percent) {
            return Err(invalid("win_threshold_percent", "must be within 0-100"));
        }
        if !self.wobble_amplitude.is_finite() {
            return Err(invalid("wobble_amplitude", "must be finite"));
        }
        if !self.wobble_rate.is_finite() {
            return Err(invalid("wobble_rate", "must be finite"));
        }
        Ok(())
    }

    /// Whole screen, HUD band included
    pub fn screen(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.screen_width, self.screen_height))
    }

    /// Screen minus the HUD band
    pub fn playfield(&self) -> Aabb {
        Aabb::new(
            Vec2::new(0.0, self.hud_height),
            Vec2::new(self.screen_width, self.screen_height),
        )
    }

    pub fn round_ticks(&self) -> u64 {
        self.round_seconds as u64 * self.tick_rate as u64
    }

    pub fn lifetime_ticks(&self) -> u64 {
        self.collectible_lifetime_secs as u64 * self.tick_rate as u64
    }

    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        tuning.validate().unwrap();
        assert_eq!(tuning.round_ticks(), 180 * 60);
        assert_eq!(tuning.lifetime_ticks(), 600);
        assert_eq!(tuning.playfield().min, Vec2::new(0.0, 80.0));
        assert_eq!(tuning.playfield().max, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "target_length": 5, "win_threshold_percent": 80 }"#).unwrap();
        assert_eq!(tuning.target_length, 5);
        assert_eq!(tuning.win_threshold_percent, 80.0);
        assert_eq!(tuning.tick_rate, TICK_RATE);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let cases = [
            r#"{ "tick_rate": 0 }"#,
            r#"{ "target_length": 0 }"#,
            r#"{ "obstacle_spawn_odds": 0 }"#,
            r#"{ "obstacle_min_speed": 4.0 }"#,
            r#"{ "win_threshold_percent": 120 }"#,
            r#"{ "hud_height": 590 }"#,
            r#"{ "player_size": 0 }"#,
        ];
        for json in cases {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, TuningError::Invalid { .. }), "{json} -> {err}");
        }
    }

    #[test]
    fn test_wobble_errors_name_their_field() {
        // JSON has no NaN/inf, so build the values directly
        let rate = Tuning {
            wobble_rate: f32::NAN,
            ..Tuning::default()
        };
        let err = rate.validate().unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "wobble_rate", .. }), "{err}");

        let amplitude = Tuning {
            wobble_amplitude: f32::INFINITY,
            ..Tuning::default()
        };
        let err = amplitude.validate().unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "wobble_amplitude", .. }), "{err}");
    }
}
