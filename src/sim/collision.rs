//! Pickup and obstacle-contact resolution
//!
//! Collectibles touching the player are consumed in spawn order and appended
//! to the collected sequence. Obstacles are never consumed; touching any of
//! them slows the player for the current tick.

use super::amino::AminoAcid;
use super::sequence::SequenceModel;
use super::state::{Collectible, Obstacle, Player};
use crate::Tuning;

/// What collision resolution did this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Symbols picked up, in the order they were appended
    pub collected: Vec<AminoAcid>,
    /// Player overlaps at least one obstacle
    pub obstacle_contact: bool,
}

/// Apply pickups and the obstacle slow-down for one tick.
///
/// `collectibles` must be sorted by id so simultaneous pickups append in spawn order.
pub fn resolve(
    player: &mut Player,
    collectibles: &mut Vec<Collectible>,
    obstacles: &[Obstacle],
    sequence: &mut SequenceModel,
    tuning: &Tuning,
) -> CollisionOutcome {
    let player_box = player.bounds();
    let mut collected = Vec::new();

    collectibles.retain(|collectible| {
        if collectible.bounds().intersects(&player_box) {
            sequence.record_pickup(collectible.symbol);
            collected.push(collectible.symbol);
            false // Remove collected
        } else {
            true // Keep
        }
    });

    // Recomputed from scratch every tick
    let obstacle_contact = obstacles
        .iter()
        .any(|o| o.bounds().intersects(&player_box));
    player.obstacle_contact = obstacle_contact;
    player.speed = if obstacle_contact {
        tuning.player_slowed_speed
    } else {
        tuning.player_speed
    };

    CollisionOutcome {
        collected,
        obstacle_contact,
    }
}
