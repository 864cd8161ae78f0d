//! Ballistic projectile
//!
//! A single projectile is shared by both players. While idle it rests in the
//! current player's hand; once fired its position is a closed-form function
//! of elapsed flight time, so no velocity is integrated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Position on a drag-free ballistic arc at time `t` after launch
///
/// `direction` is +1 for a throw to the right and -1 for a throw to the left.
/// At `t = 0` this is exactly `origin`.
pub fn ballistic_position(
    origin: Vec2,
    angle_deg: f32,
    power: f32,
    gravity: f32,
    direction: f32,
    t: f32,
) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(
        origin.x + direction * power * rad.cos() * t,
        origin.y + power * rad.sin() * t - 0.5 * gravity * t * t,
    )
}

/// The thrown projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub in_flight: bool,
    /// Seconds since launch (0 while idle)
    pub flight_time: f32,
    /// Launch angle in degrees, within [ANGLE_MIN_DEG, ANGLE_MAX_DEG]
    pub angle_deg: f32,
    /// Launch power, within [POWER_MIN, POWER_MAX]
    pub power: f32,
}

impl Projectile {
    pub fn new(angle_deg: f32, power: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            in_flight: false,
            flight_time: 0.0,
            angle_deg: clamp_angle(angle_deg),
            power: clamp_power(power),
        }
    }

    /// Back to the idle state at `hold`
    pub fn reset(&mut self, hold: Vec2) {
        self.in_flight = false;
        self.flight_time = 0.0;
        self.pos = hold;
    }

    /// Follow the holder while idle; no-op in flight
    pub fn track(&mut self, hold: Vec2) {
        if !self.in_flight {
            self.pos = hold;
        }
    }

    /// Start a flight. Returns false if already in flight.
    pub fn launch(&mut self, origin: Vec2) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.flight_time = 0.0;
        self.pos = origin;
        true
    }

    /// Advance along the arc started at `origin`
    pub fn advance(&mut self, origin: Vec2, gravity: f32, direction: f32, dt: f32) {
        if !self.in_flight {
            return;
        }
        self.flight_time += dt;
        self.pos = ballistic_position(
            origin,
            self.angle_deg,
            self.power,
            gravity,
            direction,
            self.flight_time,
        );
    }

    pub fn adjust_angle(&mut self, delta_deg: f32) {
        self.angle_deg = clamp_angle(self.angle_deg + delta_deg);
    }

    pub fn adjust_power(&mut self, delta: f32) {
        self.power = clamp_power(self.power + delta);
    }
}

#[inline]
fn clamp_angle(deg: f32) -> f32 {
    deg.clamp(ANGLE_MIN_DEG, ANGLE_MAX_DEG)
}

#[inline]
fn clamp_power(power: f32) -> f32 {
    power.clamp(POWER_MIN, POWER_MAX)
}
