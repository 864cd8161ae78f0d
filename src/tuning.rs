//! Gameplay tuning values
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.
//! Arena geometry is not tunable and lives in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Balance knobs for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// How long an explosion stays visible (seconds)
    pub explosion_duration: f32,
    /// Side of the square box used for projectile collisions
    pub projectile_size: f32,
    /// Projectile offset from the holding player's bottom-left corner
    pub hold_offset: Vec2,
    /// Launch angle at match start (degrees)
    pub initial_angle_deg: f32,
    /// Launch power at match start
    pub initial_power: f32,

    // === Held-input rates ===
    /// Horizontal movement (units/s)
    pub move_speed: f32,
    /// Aim change (degrees/s)
    pub angle_speed: f32,
    /// Power change (units/s)
    pub power_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            explosion_duration: 0.5,
            projectile_size: 0.4,
            hold_offset: Vec2::new(0.5, 0.5),
            initial_angle_deg: 45.0,
            initial_power: 5.0,

            move_speed: 0.3,
            angle_speed: 12.0,
            power_speed: 1.2,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (unknown fields are ignored, missing ones defaulted)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-domain values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.gravity) {
            self.gravity = defaults.gravity;
        }
        if !positive(self.explosion_duration) {
            self.explosion_duration = defaults.explosion_duration;
        }
        if !positive(self.projectile_size) {
            self.projectile_size = defaults.projectile_size;
        }
        if !self.hold_offset.is_finite() {
            self.hold_offset = defaults.hold_offset;
        }
        if !self.initial_angle_deg.is_finite() {
            self.initial_angle_deg = defaults.initial_angle_deg;
        }
        if !self.initial_power.is_finite() {
            self.initial_power = defaults.initial_power;
        }
        if !non_negative(self.move_speed) {
            self.move_speed = defaults.move_speed;
        }
        if !non_negative(self.angle_speed) {
            self.angle_speed = defaults.angle_speed;
        }
        if !non_negative(self.power_speed) {
            self.power_speed = defaults.power_speed;
        }
        self
    }
}
