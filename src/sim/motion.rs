//! Per-kind movement and lifetime rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::state::{Collectible, Obstacle, Player};
use crate::Tuning;

/// Net directional input, each axis in {-1, 0, 1} (+y is down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };

    /// Any magnitude collapses to its sign
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum() as i8,
            dy: dy.signum() as i8,
        }
    }

    /// From held keys, opposing keys cancel
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self::new(right as i32 - left as i32, down as i32 - up as i32)
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.dx as f32, self.dy as f32)
    }
}

/// Step the player by its current speed, then keep it fully inside the playfield
pub fn move_player(player: &mut Player, direction: Direction, playfield: &Aabb) {
    let step = direction.as_vec2() * player.speed;
    player.pos = playfield.clamp_center(player.pos + step, player.size);
}

/// Wobble displacement from the origin after `age` ticks
pub fn wobble_offset(age: u64, angle: f32, amplitude: f32, rate: f32) -> Vec2 {
    Vec2::from_angle(angle) * amplitude * (age as f32 * rate).sin()
}

/// Reposition a collectible along its wobble. Returns false once it has outlived its lifetime.
pub fn update_collectible(collectible: &mut Collectible, now_tick: u64, tuning: &Tuning) -> bool {
    let age = collectible.age(now_tick);
    if age > tuning.lifetime_ticks() {
        log::trace!("Collectible {} ({}) expired", collectible.id, collectible.symbol);
        return false;
    }
    collectible.pos = collectible.origin
        + wobble_offset(
            age,
            collectible.wobble_angle,
            tuning.wobble_amplitude,
            tuning.wobble_rate,
        );
    true
}

/// Drift an obstacle in a straight line. Returns false once it has left the screen.
pub fn update_obstacle(obstacle: &mut Obstacle, tuning: &Tuning) -> bool {
    obstacle.pos += obstacle.vel;
    if is_off_screen(&obstacle.bounds(), tuning) {
        log::trace!("Obstacle {} left the screen", obstacle.id);
        return false;
    }
    true
}

/// Box lies entirely beyond one screen edge. The top edge is the
/// playfield top, so debris drifting into the HUD band is dropped.
pub fn is_off_screen(bounds: &Aabb, tuning: &Tuning) -> bool {
    let field = tuning.playfield();
    bounds.max.x < field.min.x
        || bounds.min.x > field.max.x
        || bounds.max.y < field.min.y
        || bounds.min.y > field.max.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::{Edge, obstacle_spawn};
    use crate::sim::AminoAcid;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn collectible_at(origin: Vec2, spawn_tick: u64) -> Collectible {
        Collectible {
            id: 1,
            symbol: AminoAcid::Glycine,
            spawn_tick,
            origin,
            wobble_angle: 0.0,
            pos: origin,
            size: 30.0,
        }
    }

    #[test]
    fn test_direction_from_keys() {
        assert_eq!(Direction::from_keys(true, true, false, false), Direction::NONE);
        assert_eq!(Direction::from_keys(true, false, true, false), Direction { dx: -1, dy: -1 });
        assert_eq!(Direction::new(7, -3), Direction { dx: 1, dy: -1 });
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let tuning = Tuning::default();
        let field = tuning.playfield();
        let mut player = Player::new(Vec2::new(400.0, 300.0), &tuning);

        move_player(&mut player, Direction::new(1, 1), &field);
        assert_eq!(player.pos, Vec2::new(405.0, 305.0));

        for _ in 0..200 {
            move_player(&mut player, Direction::new(-1, -1), &field);
        }
        // Box top-left pinned at the playfield corner, below the HUD band
        assert_eq!(player.pos, Vec2::new(25.0, 105.0));

        player.speed = tuning.player_slowed_speed;
        move_player(&mut player, Direction::new(1, 0), &field);
        assert_eq!(player.pos, Vec2::new(27.0, 105.0));
    }

    #[test]
    fn test_collectible_wobbles_then_expires() {
        let tuning = Tuning::default();
        let origin = Vec2::new(300.0, 300.0);
        let mut c = collectible_at(origin, 100);

        assert!(update_collectible(&mut c, 100, &tuning));
        assert_eq!(c.pos, origin);

        assert!(update_collectible(&mut c, 115, &tuning));
        let expected = origin.x + tuning.wobble_amplitude * (15.0 * tuning.wobble_rate).sin();
        assert!((c.pos.x - expected).abs() < 1e-3);
        assert!((c.pos.y - origin.y).abs() < 1e-3);
        assert!(c.pos.distance(origin) <= tuning.wobble_amplitude + 1e-3);

        // Lifetime is inclusive of the last tick
        assert!(update_collectible(&mut c, 100 + 600, &tuning));
        assert!(!update_collectible(&mut c, 100 + 601, &tuning));
    }

    #[test]
    fn test_obstacle_drifts_and_exits() {
        let tuning = Tuning::default();
        let mut o = Obstacle {
            id: 1,
            edge: Edge::Left,
            pos: Vec2::new(-20.0, 300.0),
            vel: Vec2::new(3.0, 0.0),
            size: 40.0,
        };
        assert!(update_obstacle(&mut o, &tuning));
        assert_eq!(o.pos, Vec2::new(-17.0, 300.0));

        // Moving up into the HUD band removes it once fully above the playfield
        let mut o = Obstacle {
            id: 2,
            edge: Edge::Top,
            pos: Vec2::new(400.0, 60.0),
            vel: Vec2::new(0.0, -1.0),
            size: 40.0,
        };
        assert!(!update_obstacle(&mut o, &tuning));
    }

    #[test]
    fn test_obstacles_always_expire() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(31337);
        let screen = tuning.screen();
        let span = Vec2::new(
            screen.width() + 2.0 * tuning.obstacle_size,
            screen.height() + 2.0 * tuning.obstacle_size,
        )
        .length();
        let max_ticks = (span / tuning.obstacle_min_speed).ceil() as u32 + 2;

        for _ in 0..2000 {
            let spawn = obstacle_spawn(&mut rng, &tuning);
            let mut o = Obstacle {
                id: 0,
                edge: spawn.edge,
                pos: spawn.position,
                vel: spawn.velocity,
                size: tuning.obstacle_size,
            };
            let mut ticks = 0;
            while update_obstacle(&mut o, &tuning) {
                ticks += 1;
                assert!(ticks <= max_ticks, "obstacle {spawn:?} still alive after {ticks} ticks");
            }
        }
    }
}
