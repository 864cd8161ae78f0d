//! Explosion effect timer
//!
//! Purely cosmetic. There is exactly one explosion; triggering it again
//! restarts it at the new position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub active: bool,
    /// Seconds since the last trigger
    pub elapsed: f32,
    /// Seconds until the effect switches itself off
    pub duration: f32,
    pub pos: Vec2,
}

impl Explosion {
    pub fn new(duration: f32) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            duration,
            pos: Vec2::ZERO,
        }
    }

    /// Start (or restart) the effect at `pos`
    pub fn trigger(&mut self, pos: Vec2) {
        self.active = true;
        self.elapsed = 0.0;
        self.pos = pos;
    }

    /// Advance the timer; deactivates once `duration` is reached
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.active = false;
        }
    }

    /// Normalized progress in [0, 1] (0 when inactive)
    pub fn progress(&self) -> f32 {
        if !self.active {
            return 0.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lifecycle() {
        let mut ex = Explosion::new(0.5);
        assert!(!ex.active);

        ex.trigger(Vec2::new(1.0, 2.0));
        assert!(ex.active);
        assert_eq!(ex.elapsed, 0.0);

        ex.tick(0.5 - 0.01);
        assert!(ex.active);

        ex.tick(0.02);
        assert!(!ex.active);

        // Stays off until re-triggered
        ex.tick(0.3);
        assert!(!ex.active);
        assert_eq!(ex.progress(), 0.0);
    }

    #[test]
    fn test_deactivates_exactly_at_duration() {
        let mut ex = Explosion::new(0.5);
        ex.trigger(Vec2::ZERO);
        ex.tick(0.25);
        assert!(ex.active);
        // elapsed == duration (exact in f32) ends the effect
        ex.tick(0.25);
        assert_eq!(ex.elapsed, ex.duration);
        assert!(!ex.active);
    }

    #[test]
    fn test_progress() {
        let mut ex = Explosion::new(0.5);
        ex.trigger(Vec2::ZERO);
        ex.tick(0.25);
        assert!((ex.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_retrigger_restarts_at_new_position() {
        let mut ex = Explosion::new(0.5);
        ex.trigger(Vec2::new(1.0, 1.0));
        ex.tick(0.4);

        ex.trigger(Vec2::new(-3.0, 2.0));
        assert!(ex.active);
        assert_eq!(ex.elapsed, 0.0);
        assert_eq!(ex.pos, Vec2::new(-3.0, 2.0));

        // Full duration again from the re-trigger
        ex.tick(0.4);
        assert!(ex.active);
    }

    proptest! {
        #[test]
        fn prop_retrigger_always_resets(first in 0.0f32..2.0, x in -10.0f32..10.0, y in -5.0f32..15.0) {
            let mut ex = Explosion::new(0.5);
            ex.trigger(Vec2::ZERO);
            ex.tick(first);
            ex.trigger(Vec2::new(x, y));
            prop_assert!(ex.active);
            prop_assert_eq!(ex.elapsed, 0.0);
            prop_assert_eq!(ex.pos, Vec2::new(x, y));
        }
    }
}
