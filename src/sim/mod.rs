//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod amino;
pub mod autopilot;
pub mod bounds;
pub mod collision;
pub mod motion;
pub mod scoring;
pub mod sequence;
pub mod spawn;
pub mod state;
pub mod tick;

pub use amino::{AminoAcid, AminoGroup};
pub use bounds::Aabb;
pub use collision::{CollisionOutcome, resolve};
pub use motion::Direction;
pub use scoring::{AlignmentReport, MatchReason, PositionResult, RoundOutcome, score};
pub use sequence::SequenceModel;
pub use spawn::{CollectibleSpawn, Edge, ObstacleSpawn, SpawnDecision};
pub use state::{
    Collectible, Entity, EndReason, Obstacle, Player, RoundEvent, RoundPhase, RoundSnapshot,
    RoundState,
};
pub use tick::{TickInput, tick};
