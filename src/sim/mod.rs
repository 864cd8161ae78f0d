//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time delta only, no clocks
//! - No randomness
//! - Stable iteration order (buildings in insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod explosion;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod turn;

pub use collision::{Aabb, boxes_overlap};
pub use explosion::Explosion;
pub use projectile::{Projectile, ballistic_position};
pub use state::{Building, GameEvent, MatchState, Player};
pub use tick::{FlightOutcome, TickInput, tick};
pub use turn::PlayerId;
