//! Demo-mode steering
//!
//! Heads for the collectible matching the next target symbol, settles for a
//! same-group one when no exact match is on screen, and otherwise drifts
//! back toward the playfield center. Nearby obstacles push the heading away.

use glam::Vec2;

use super::motion::Direction;
use super::state::RoundState;

/// Obstacles closer than this (center to center) repel the player
const AVOID_RADIUS: f32 = 90.0;
/// Heading components below this do not press a key
const DEADZONE: f32 = 0.3;

/// Pick this tick's directional input
pub fn steer(state: &RoundState) -> Direction {
    let player = state.player.pos;

    let goal = state.sequence.current().and_then(|wanted| {
        let nearest = |same_group: bool| {
            state
                .collectibles
                .iter()
                .filter(|c| {
                    if same_group {
                        c.symbol.same_group(wanted)
                    } else {
                        c.symbol == wanted
                    }
                })
                .min_by(|a, b| {
                    a.pos
                        .distance_squared(player)
                        .partial_cmp(&b.pos.distance_squared(player))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|c| c.pos)
        };
        nearest(false).or_else(|| nearest(true))
    });
    let goal = goal.unwrap_or_else(|| state.tuning.playfield().center());

    let mut heading = (goal - player).normalize_or_zero();

    for obstacle in &state.obstacles {
        let away = player - obstacle.pos;
        let dist = away.length();
        if dist < AVOID_RADIUS {
            let push = 1.0 - dist / AVOID_RADIUS;
            heading += away.normalize_or_zero() * push * 2.0;
        }
    }

    to_direction(heading)
}

fn to_direction(heading: Vec2) -> Direction {
    let heading = heading.normalize_or_zero();
    let axis = |v: f32| {
        if v > DEADZONE {
            1
        } else if v < -DEADZONE {
            -1
        } else {
            0
        }
    };
    Direction::new(axis(heading.x), axis(heading.y))
}
