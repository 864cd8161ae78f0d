//! Per-frame simulation tick
//!
//! Input is applied first, then the projectile advances and is resolved
//! against the skyline, the opponent and the arena bounds (in that order),
//! then the explosion timer runs.

use glam::Vec2;

use super::collision::Aabb;
use super::state::{GameEvent, MatchState};
use crate::outside_arena;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal movement of the current player (-1 left .. 1 right)
    pub move_axis: f32,
    /// Aim change (-1 flatter .. 1 steeper)
    pub aim_axis: f32,
    /// Power change (-1 weaker .. 1 stronger)
    pub power_axis: f32,
    /// Throw (one-shot)
    pub fire: bool,
}

/// What a tick did to the projectile in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    /// Not flying this tick
    Idle,
    /// Still flying
    InFlight,
    /// Hit the building at this index
    HitBuilding(usize),
    /// Hit the opponent; the thrower scored
    HitOpponent,
    /// Left the arena
    OutOfBounds,
}

impl FlightOutcome {
    /// True if this outcome ended the turn
    pub fn ends_turn(self) -> bool {
        matches!(
            self,
            FlightOutcome::HitBuilding(_) | FlightOutcome::HitOpponent | FlightOutcome::OutOfBounds
        )
    }
}

/// Advance the match by one frame
///
/// Held axes are scaled by `dt` and the tuning rates; with a non-positive
/// `dt` they have no effect. `fire` is not time-scaled and is always honored.
///
/// Events left over from the previous frame are discarded first, so after
/// this returns the event queue holds only this frame's events.
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) -> FlightOutcome {
    state.events.clear();

    if dt > 0.0 {
        let rates = (
            state.tuning.move_speed,
            state.tuning.angle_speed,
            state.tuning.power_speed,
        );
        if input.move_axis != 0.0 {
            state.move_current_player(input.move_axis.clamp(-1.0, 1.0) * rates.0 * dt);
        }
        if input.aim_axis != 0.0 {
            state.adjust_angle(input.aim_axis.clamp(-1.0, 1.0) * rates.1 * dt);
        }
        if input.power_axis != 0.0 {
            state.adjust_power(input.power_axis.clamp(-1.0, 1.0) * rates.2 * dt);
        }
    }

    if input.fire {
        state.fire();
    }

    state.step(dt)
}

impl MatchState {
    /// Run the projectile simulator then the explosion timer
    ///
    /// A non-positive (or NaN) `dt` is a zero-length tick: nothing moves
    /// and no transition happens.
    pub(crate) fn step(&mut self, dt: f32) -> FlightOutcome {
        if dt.is_nan() || dt <= 0.0 {
            return if self.projectile.in_flight {
                FlightOutcome::InFlight
            } else {
                FlightOutcome::Idle
            };
        }

        let outcome = self.update_projectile(dt);
        self.explosion.tick(dt);
        outcome
    }

    fn update_projectile(&mut self, dt: f32) -> FlightOutcome {
        if !self.projectile.in_flight {
            let hold = self.hold_position(self.current);
            self.projectile.track(hold);
            return FlightOutcome::Idle;
        }

        let id = self.current;
        let origin = self.launch_origin(id);
        self.projectile
            .advance(origin, self.tuning.gravity, id.direction(), dt);

        self.resolve_flight()
    }

    /// Check the projectile's current position for a turn-ending event
    ///
    /// Buildings are tested in insertion order and win over the opponent;
    /// the opponent wins over leaving the arena.
    pub(crate) fn resolve_flight(&mut self) -> FlightOutcome {
        let pos = self.projectile.pos;
        let shot = Aabb::new(pos, Vec2::splat(self.tuning.projectile_size));
        let thrower = self.current;

        if let Some(index) = self.buildings.iter().position(|b| b.aabb().overlaps(&shot)) {
            log::info!("{} hit building {}", thrower, index + 1);
            self.events.push(GameEvent::BuildingHit {
                player: thrower,
                building: index,
                at: pos,
            });
            self.explosion.trigger(pos);
            self.advance_turn();
            return FlightOutcome::HitBuilding(index);
        }

        let target = self.opponent();
        if self.player(target).aabb().overlaps(&shot) {
            // The thrower scores, not the player who was hit
            self.player_mut(thrower).score += 1;
            log::info!("{} hit {}!", thrower, target);
            log::info!("Score -> P1={}  P2={}", self.p1.score, self.p2.score);
            self.events.push(GameEvent::PlayerHit {
                attacker: thrower,
                at: pos,
            });
            self.explosion.trigger(pos);
            self.advance_turn();
            return FlightOutcome::HitOpponent;
        }

        if outside_arena(pos) {
            log::info!("{}'s throw left the arena", thrower);
            self.events.push(GameEvent::OutOfBounds {
                player: thrower,
                at: pos,
            });
            self.advance_turn();
            return FlightOutcome::OutOfBounds;
        }

        FlightOutcome::InFlight
    }
}
