//! Round state and entity types
//!
//! Everything a round needs to advance deterministically lives here:
//! the seeded RNG, the tick clock, all entities and the sequence model.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::amino::AminoAcid;
use super::bounds::Aabb;
use super::scoring::{AlignmentReport, RoundOutcome};
use super::sequence::SequenceModel;
use super::spawn::{CollectibleSpawn, Edge, ObstacleSpawn};
use crate::{Tuning, TuningError, ticks_to_secs};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Active,
    /// Final report is available; only a reset leaves this phase
    Ended,
}

/// Which condition closed the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    TimeUp,
    SequenceComplete,
}

/// Notable things that happened during a tick (for audio/visual feedback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    CollectibleSpawned { id: u32, symbol: AminoAcid },
    ObstacleSpawned { id: u32, edge: Edge },
    Collected { symbol: AminoAcid, position: usize },
    /// Player started touching an obstacle
    Slowed,
    /// Player stopped touching all obstacles
    Recovered,
    RoundEnded { reason: EndReason, total: u32 },
    RoundReset,
}

/// The ribosome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Box center
    pub pos: Vec2,
    pub size: f32,
    /// Units per tick
    pub speed: f32,
    /// Touching at least one obstacle as of the last collision pass
    pub obstacle_contact: bool,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.player_size,
            speed: tuning.player_speed,
            obstacle_contact: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn is_slowed(&self) -> bool {
        self.obstacle_contact
    }
}

/// An amino acid floating in the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub symbol: AminoAcid,
    pub spawn_tick: u64,
    /// Center the wobble oscillates around
    pub origin: Vec2,
    /// Wobble direction, radians
    pub wobble_angle: f32,
    pub pos: Vec2,
    pub size: f32,
}

impl Collectible {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn age(&self, now_tick: u64) -> u64 {
        now_tick.saturating_sub(self.spawn_tick)
    }
}

/// Debris drifting across the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub edge: Edge,
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Borrowed view of any entity, in draw order
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Player(&'a Player),
    Collectible(&'a Collectible),
    Obstacle(&'a Obstacle),
}

impl Entity<'_> {
    pub fn pos(&self) -> Vec2 {
        match self {
            Entity::Player(p) => p.pos,
            Entity::Collectible(c) => c.pos,
            Entity::Obstacle(o) => o.pos,
        }
    }

    pub fn bounds(&self) -> Aabb {
        match self {
            Entity::Player(p) => p.bounds(),
            Entity::Collectible(c) => c.bounds(),
            Entity::Obstacle(o) => o.bounds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub id: u32,
    pub symbol: AminoAcid,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub pos: Vec2,
}

/// Read-only copy of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
    pub player: Vec2,
    pub player_slowed: bool,
    pub collectibles: Vec<CollectibleView>,
    pub obstacles: Vec<ObstacleView>,
    pub target: Vec<AminoAcid>,
    pub cursor: usize,
    pub collected: Vec<AminoAcid>,
    pub report: Option<AlignmentReport>,
    pub outcome: Option<RoundOutcome>,
}

/// Complete round state (deterministic for a given seed and input tape)
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    pub phase: RoundPhase,
    /// Ticks since the round started
    pub time_ticks: u64,
    pub player: Player,
    /// Active collectibles (sorted by id)
    pub collectibles: Vec<Collectible>,
    /// Active obstacles (sorted by id)
    pub obstacles: Vec<Obstacle>,
    pub sequence: SequenceModel,
    /// Set once the round ends
    pub report: Option<AlignmentReport>,
    /// Rounds started with this state, including the current one
    pub round_number: u32,
    next_id: u32,
}

impl RoundState {
    /// Validate `tuning`, then create a new round with the given seed
    pub fn try_new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::new(seed, tuning))
    }

    /// Create a new round with the given seed.
    ///
    /// `tuning` must already pass [`Tuning::validate`]; spawning panics on a
    /// playfield too small for its sprites. Use [`RoundState::try_new`] for
    /// unchecked input.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sequence = SequenceModel::generate(tuning.target_length, &AminoAcid::ALL, &mut rng);
        let player = Player::new(tuning.screen().center(), &tuning);
        let state = Self {
            seed,
            tuning,
            rng,
            phase: RoundPhase::Active,
            time_ticks: 0,
            player,
            collectibles: Vec::new(),
            obstacles: Vec::new(),
            sequence,
            report: None,
            round_number: 1,
            next_id: 1,
        };
        state.log_start();
        state
    }

    /// Tear everything down and start a fresh round.
    /// The RNG stream continues, so the new target differs from the last one.
    pub fn reset(&mut self) {
        self.collectibles.clear();
        self.obstacles.clear();
        self.player = Player::new(self.tuning.screen().center(), &self.tuning);
        self.sequence =
            SequenceModel::generate(self.tuning.target_length, &AminoAcid::ALL, &mut self.rng);
        self.time_ticks = 0;
        self.report = None;
        self.phase = RoundPhase::Active;
        self.next_id = 1;
        self.round_number += 1;
        self.log_start();
    }

    fn log_start(&self) {
        log::info!(
            "Round {} started (seed {}): target {}",
            self.round_number,
            self.seed,
            super::amino::format_sequence(self.sequence.target())
        );
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_collectible(&mut self, spawn: CollectibleSpawn) -> u32 {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible {
            id,
            symbol: spawn.symbol,
            spawn_tick: self.time_ticks,
            origin: spawn.position,
            wobble_angle: spawn.wobble_angle,
            pos: spawn.position,
            size: self.tuning.collectible_size,
        });
        id
    }

    pub fn add_obstacle(&mut self, spawn: ObstacleSpawn) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            edge: spawn.edge,
            pos: spawn.position,
            vel: spawn.velocity,
            size: self.tuning.obstacle_size,
        });
        id
    }

    /// Whole seconds since the round started
    pub fn elapsed_secs(&self) -> u64 {
        ticks_to_secs(self.time_ticks, self.tuning.tick_rate)
    }

    /// Countdown shown in the HUD
    pub fn remaining_secs(&self) -> u64 {
        (self.tuning.round_seconds as u64).saturating_sub(self.elapsed_secs())
    }

    pub fn is_time_up(&self) -> bool {
        self.time_ticks >= self.tuning.round_ticks()
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.report
            .as_ref()
            .map(|r| r.outcome(self.tuning.win_threshold_percent))
    }

    /// All entities in draw order: player, collectibles, obstacles
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        std::iter::once(Entity::Player(&self.player))
            .chain(self.collectibles.iter().map(Entity::Collectible))
            .chain(self.obstacles.iter().map(Entity::Obstacle))
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase,
            elapsed_secs: self.elapsed_secs(),
            remaining_secs: self.remaining_secs(),
            player: self.player.pos,
            player_slowed: self.player.is_slowed(),
            collectibles: self
                .collectibles
                .iter()
                .map(|c| CollectibleView {
                    id: c.id,
                    symbol: c.symbol,
                    pos: c.pos,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView { id: o.id, pos: o.pos })
                .collect(),
            target: self.sequence.target().to_vec(),
            cursor: self.sequence.cursor(),
            collected: self.sequence.collected().to_vec(),
            report: self.report.clone(),
            outcome: self.outcome(),
        }
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.collectibles.sort_by_key(|c| c.id);
        self.obstacles.sort_by_key(|o| o.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn;

    #[test]
    fn test_new_round() {
        let state = RoundState::new(1234, Tuning::default());
        assert_eq!(state.phase, RoundPhase::Active);
        assert_eq!(state.sequence.target().len(), 10);
        assert_eq!(state.sequence.cursor(), 0);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.remaining_secs(), 180);
        assert!(state.report.is_none());
        assert_eq!(state.entities().count(), 1);
    }

    #[test]
    fn test_try_new_rejects_degenerate_tuning() {
        // Narrower than an obstacle: edge placement would have an empty range
        let tuning = Tuning {
            screen_width: 30.0,
            ..Tuning::default()
        };
        let err = RoundState::try_new(1, tuning).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "hud_height", .. }));

        let state = RoundState::try_new(1, Tuning::default()).unwrap();
        assert_eq!(state.phase, RoundPhase::Active);
    }

    #[test]
    fn test_entities_report_their_own_bounds() {
        let mut state = RoundState::new(12, Tuning::default());
        let tuning = state.tuning.clone();
        let c = spawn::collectible_spawn(&mut state.rng, &tuning);
        state.add_collectible(c);
        let o = spawn::obstacle_spawn(&mut state.rng, &tuning);
        state.add_obstacle(o);

        let entities: Vec<Entity> = state.entities().collect();
        assert_eq!(entities.len(), 3);
        for entity in &entities {
            assert!(entity.bounds().center().abs_diff_eq(entity.pos(), 1e-3));
        }
        assert!(matches!(entities[0], Entity::Player(_)));
        assert_eq!(entities[0].bounds().width(), tuning.player_size);
    }

    #[test]
    fn test_same_seed_same_target() {
        let a = RoundState::new(77, Tuning::default());
        let b = RoundState::new(77, Tuning::default());
        assert_eq!(a.sequence, b.sequence);
    }

    #[test]
    fn test_reset_restores_fresh_round() {
        let mut state = RoundState::new(5, Tuning::default());
        let tuning = state.tuning.clone();
        let first_target = state.sequence.target().to_vec();

        let c = spawn::collectible_spawn(&mut state.rng, &tuning);
        state.add_collectible(c);
        let o = spawn::obstacle_spawn(&mut state.rng, &tuning);
        state.add_obstacle(o);
        state.sequence.record_pickup(AminoAcid::Alanine);
        state.time_ticks = 500;
        state.player.pos = Vec2::new(10.0, 90.0);
        state.report = Some(state.sequence.score());
        state.phase = RoundPhase::Ended;

        state.reset();
        assert_eq!(state.phase, RoundPhase::Active);
        assert_eq!(state.sequence.cursor(), 0);
        assert!(state.sequence.collected().is_empty());
        assert_eq!(state.sequence.target().len(), 10);
        assert_ne!(state.sequence.target(), first_target.as_slice());
        assert!(state.collectibles.is_empty());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.time_ticks, 0);
        assert!(state.report.is_none());
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.round_number, 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = RoundState::new(8, Tuning::default());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Active\""));
        assert!(json.contains("\"remaining_secs\":180"));
    }

    #[test]
    fn test_clock() {
        let mut state = RoundState::new(8, Tuning::default());
        state.time_ticks = 59;
        assert_eq!(state.elapsed_secs(), 0);
        state.time_ticks = 60 * 179 + 59;
        assert_eq!(state.remaining_secs(), 1);
        assert!(!state.is_time_up());
        state.time_ticks = 60 * 180;
        assert_eq!(state.remaining_secs(), 0);
        assert!(state.is_time_up());
    }
}
