//! Skyline Duel - A two-player artillery game over a city skyline
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ballistics, collisions, turns, explosion)
//! - `renderer`: Read-only render snapshot for a graphics layer
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena rectangle; a projectile outside it ends the turn
    pub const ARENA_MIN: Vec2 = Vec2::new(-12.0, -5.0);
    pub const ARENA_MAX: Vec2 = Vec2::new(12.0, 15.0);

    /// Horizontal lanes the players may move within (bottom-left x)
    pub const P1_LANE: (f32, f32) = (-10.0, -6.0);
    pub const P2_LANE: (f32, f32) = (6.0, 9.0);

    /// Player start boxes (bottom-left corner)
    pub const P1_START: Vec2 = Vec2::new(-8.5, 1.0);
    pub const P2_START: Vec2 = Vec2::new(8.0, 1.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 1.0);

    /// Launch origins used before a player has fired for the first time
    pub const P1_LAUNCH_ORIGIN: Vec2 = Vec2::new(-8.0, 1.5);
    pub const P2_LAUNCH_ORIGIN: Vec2 = Vec2::new(8.0, 1.5);

    /// Aim clamps
    pub const ANGLE_MIN_DEG: f32 = 0.0;
    pub const ANGLE_MAX_DEG: f32 = 90.0;
    pub const POWER_MIN: f32 = 1.0;
    pub const POWER_MAX: f32 = 20.0;

    /// Skyline, in insertion order: (base, size)
    pub const BUILDINGS: [(Vec2, Vec2); 3] = [
        (Vec2::new(-3.0, 0.0), Vec2::new(2.0, 3.0)),
        (Vec2::new(0.0, 0.0), Vec2::new(2.0, 5.0)),
        (Vec2::new(3.0, 0.0), Vec2::new(2.0, 4.0)),
    ];
}

/// Center of a box anchored at its bottom-left corner
#[inline]
pub fn box_center(bottom_left: Vec2, size: Vec2) -> Vec2 {
    bottom_left + size * 0.5
}

/// True if `pos` lies outside the arena rectangle
#[inline]
pub fn outside_arena(pos: Vec2) -> bool {
    pos.x < consts::ARENA_MIN.x
        || pos.x > consts::ARENA_MAX.x
        || pos.y < consts::ARENA_MIN.y
        || pos.y > consts::ARENA_MAX.y
}
