//! Fixed timestep simulation tick
//!
//! Core round loop that advances the simulation deterministically.

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::collision;
use super::motion::{self, Direction};
use super::spawn;
use super::state::{EndReason, RoundEvent, RoundPhase, RoundState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Currently held movement keys
    pub direction: Direction,
    /// Start a fresh round (confirm / play again)
    pub reset: bool,
    /// Demo mode - the autopilot steers instead of `direction`
    pub autopilot: bool,
}

/// Advance the round by one fixed timestep
pub fn tick(state: &mut RoundState, input: &TickInput) -> Vec<RoundEvent> {
    let mut events = Vec::new();

    if input.reset {
        state.reset();
        events.push(RoundEvent::RoundReset);
        return events;
    }

    // Nothing moves once the round is over
    if state.phase == RoundPhase::Ended {
        return events;
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    // Player
    let direction = if input.autopilot {
        autopilot::steer(state)
    } else {
        input.direction
    };
    let playfield = state.tuning.playfield();
    motion::move_player(&mut state.player, direction, &playfield);

    // Spawns
    let decision = spawn::decide(&mut state.rng, &state.tuning);
    if let Some(c) = decision.collectible {
        let id = state.add_collectible(c);
        log::debug!("Spawned collectible {} ({}) at {:?}", id, c.symbol, c.position);
        events.push(RoundEvent::CollectibleSpawned { id, symbol: c.symbol });
    }
    if let Some(o) = decision.obstacle {
        let id = state.add_obstacle(o);
        log::debug!("Spawned obstacle {} from {:?}", id, o.edge);
        events.push(RoundEvent::ObstacleSpawned { id, edge: o.edge });
    }

    // Motion and lifetimes
    let tuning = &state.tuning;
    state
        .collectibles
        .retain_mut(|c| motion::update_collectible(c, now, tuning));
    state
        .obstacles
        .retain_mut(|o| motion::update_obstacle(o, tuning));

    // Collisions
    state.normalize_order();
    let was_slowed = state.player.is_slowed();
    let first_new = state.sequence.collected().len();
    let outcome = collision::resolve(
        &mut state.player,
        &mut state.collectibles,
        &state.obstacles,
        &mut state.sequence,
        &state.tuning,
    );
    for (offset, symbol) in outcome.collected.into_iter().enumerate() {
        let position = first_new + offset;
        log::debug!(
            "Collected {} ({}) as position {}",
            symbol,
            symbol.group().as_str(),
            position + 1
        );
        events.push(RoundEvent::Collected { symbol, position });
    }
    match (was_slowed, outcome.obstacle_contact) {
        (false, true) => events.push(RoundEvent::Slowed),
        (true, false) => events.push(RoundEvent::Recovered),
        _ => {}
    }

    // Termination
    let reason = if state.sequence.is_exhausted() {
        Some(EndReason::SequenceComplete)
    } else if state.is_time_up() {
        Some(EndReason::TimeUp)
    } else {
        None
    };
    if let Some(reason) = reason {
        end_round(state, reason, &mut events);
    }

    events
}

fn end_round(state: &mut RoundState, reason: EndReason, events: &mut Vec<RoundEvent>) {
    let report = state.sequence.score();
    log::info!(
        "Round {} ended ({:?}) after {}s: {}",
        state.round_number,
        reason,
        state.elapsed_secs(),
        report.headline(state.tuning.win_threshold_percent)
    );
    events.push(RoundEvent::RoundEnded {
        reason,
        total: report.total,
    });
    state.report = Some(report);
    state.phase = RoundPhase::Ended;
}
