//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use difficulty::Difficulty;
pub use state::{
    Bird, BirdColor, Bullet, Cloud, Explosion, GameEvent, GamePhase, GameState, HeartPickup,
    PickupEffect, Player,
};
pub use tick::{TickInput, tick};
