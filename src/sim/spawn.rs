//! Per-tick spawn decisions
//!
//! Two independent rolls each tick: one for a collectible, one for an
//! obstacle. A tick can produce zero, one or both spawns.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::amino::AminoAcid;
use crate::Tuning;

/// Redraws of an obstacle's aim point before falling back to the playfield center
const MAX_AIM_ATTEMPTS: u32 = 4;

/// Screen edge an obstacle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectibleSpawn {
    pub symbol: AminoAcid,
    /// Wobble origin (box center)
    pub position: Vec2,
    /// Fixed wobble direction, radians
    pub wobble_angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSpawn {
    pub edge: Edge,
    /// Box center, just outside the playfield
    pub position: Vec2,
    /// Units per tick
    pub velocity: Vec2,
}

/// What to add to the round this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnDecision {
    pub collectible: Option<CollectibleSpawn>,
    pub obstacle: Option<ObstacleSpawn>,
}

impl SpawnDecision {
    pub fn is_none(&self) -> bool {
        self.collectible.is_none() && self.obstacle.is_none()
    }
}

/// Roll both spawn checks for one tick
pub fn decide<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> SpawnDecision {
    let collectible = roll_collectible(rng, tuning);
    let obstacle = roll_obstacle(rng, tuning);
    SpawnDecision {
        collectible,
        obstacle,
    }
}

/// One-in-`collectible_spawn_odds` chance of a new collectible
pub fn roll_collectible<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Option<CollectibleSpawn> {
    if rng.random_range(1..=tuning.collectible_spawn_odds) != 1 {
        return None;
    }
    Some(collectible_spawn(rng, tuning))
}

/// One-in-`obstacle_spawn_odds` chance of a new obstacle
pub fn roll_obstacle<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Option<ObstacleSpawn> {
    if rng.random_range(1..=tuning.obstacle_spawn_odds) != 1 {
        return None;
    }
    Some(obstacle_spawn(rng, tuning))
}

/// Random symbol at a uniform point inside the playfield
pub fn collectible_spawn<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> CollectibleSpawn {
    let symbol = AminoAcid::ALL[rng.random_range(0..AminoAcid::ALL.len())];
    let position = tuning.playfield().random_point(rng);
    let wobble_angle = rng.random_range(0.0..std::f32::consts::TAU);
    CollectibleSpawn {
        symbol,
        position,
        wobble_angle,
    }
}

/// Obstacle entering from a random edge, aimed at a random point on screen
pub fn obstacle_spawn<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> ObstacleSpawn {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let position = edge_position(edge, rng, tuning);
    let heading = aim(position, rng, tuning);
    let speed = rng.random_range(tuning.obstacle_min_speed..=tuning.obstacle_max_speed);
    ObstacleSpawn {
        edge,
        position,
        velocity: heading * speed,
    }
}

/// Box center placed just outside the playfield on `edge`, at a uniform offset along it
fn edge_position<R: Rng + ?Sized>(edge: Edge, rng: &mut R, tuning: &Tuning) -> Vec2 {
    let field = tuning.playfield();
    let half = tuning.obstacle_size / 2.0;
    let along_x = |rng: &mut R| rng.random_range(field.min.x + half..=field.max.x - half);
    let along_y = |rng: &mut R| rng.random_range(field.min.y + half..=field.max.y - half);
    match edge {
        Edge::Top => Vec2::new(along_x(rng), field.min.y - half),
        Edge::Bottom => Vec2::new(along_x(rng), field.max.y + half),
        Edge::Left => Vec2::new(field.min.x - half, along_y(rng)),
        Edge::Right => Vec2::new(field.max.x + half, along_y(rng)),
    }
}

/// Unit heading from `from` toward a random point on screen.
/// A zero-length direction is redrawn, then falls back to the playfield center.
fn aim<R: Rng + ?Sized>(from: Vec2, rng: &mut R, tuning: &Tuning) -> Vec2 {
    let screen = tuning.screen();
    for _ in 0..MAX_AIM_ATTEMPTS {
        let target = screen.random_point(rng);
        if let Some(dir) = (target - from).try_normalize() {
            return dir;
        }
    }
    (tuning.playfield().center() - from)
        .try_normalize()
        .unwrap_or(Vec2::Y)
}
