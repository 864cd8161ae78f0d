//! Match state and world entities
//!
//! `MatchState` is the single owner of everything the simulation touches.
//! Mutators take `&mut MatchState`; renderers only ever see `&MatchState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::explosion::Explosion;
use super::projectile::Projectile;
use super::turn::PlayerId;
use crate::Tuning;
use crate::consts::*;

/// A static building, anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Building {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_bottom_left(self.pos, self.size)
    }
}

/// One of the two duelists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left corner of the player's box
    pub pos: Vec2,
    pub size: Vec2,
    /// Hits landed on the opponent
    pub score: u32,
    /// Where this player's last throw started from
    pub launch_origin: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, launch_origin: Vec2) -> Self {
        Self {
            pos,
            size: PLAYER_SIZE,
            score: 0,
            launch_origin,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_bottom_left(self.pos, self.size)
    }
}

/// Notable things that happened during a command or tick
///
/// Consumed by presentation layers (log, audio, HUD); the simulation never
/// reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A throw started
    Fired {
        player: PlayerId,
        origin: Vec2,
        angle_deg: f32,
        power: f32,
    },
    /// The throw struck a building (index in insertion order)
    BuildingHit {
        player: PlayerId,
        building: usize,
        at: Vec2,
    },
    /// The throw struck the opponent; `attacker` scored
    PlayerHit { attacker: PlayerId, at: Vec2 },
    /// The throw left the arena
    OutOfBounds { player: PlayerId, at: Vec2 },
    /// The turn passed to `player`
    TurnChanged { player: PlayerId },
}

/// Complete match state
///
/// Serializable for debug snapshots only; matches are never loaded back.
#[derive(Debug, Clone, Serialize)]
pub struct MatchState {
    pub(crate) tuning: Tuning,
    /// Skyline in insertion order; collision priority follows this order
    pub(crate) buildings: Vec<Building>,
    pub(crate) p1: Player,
    pub(crate) p2: Player,
    pub(crate) projectile: Projectile,
    pub(crate) explosion: Explosion,
    pub(crate) current: PlayerId,
    /// Throws made this match
    pub(crate) shots_fired: u32,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a match ready for player 1's first throw
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            buildings: Vec::new(),
            p1: Player::new(P1_START, P1_LAUNCH_ORIGIN),
            p2: Player::new(P2_START, P2_LAUNCH_ORIGIN),
            projectile: Projectile::new(tuning.initial_angle_deg, tuning.initial_power),
            explosion: Explosion::new(tuning.explosion_duration),
            current: PlayerId::One,
            shots_fired: 0,
            events: Vec::new(),
            tuning,
        };
        state.initialize();
        state
    }

    /// (Re)start the match: fixed skyline, players home with zero score,
    /// player 1 to throw
    pub fn initialize(&mut self) {
        self.buildings = BUILDINGS
            .iter()
            .map(|&(pos, size)| Building::new(pos, size))
            .collect();
        self.p1 = Player::new(P1_START, P1_LAUNCH_ORIGIN);
        self.p2 = Player::new(P2_START, P2_LAUNCH_ORIGIN);
        self.projectile = Projectile::new(self.tuning.initial_angle_deg, self.tuning.initial_power);
        self.explosion = Explosion::new(self.tuning.explosion_duration);
        self.current = PlayerId::One;
        self.shots_fired = 0;
        self.events.clear();
        self.reset_projectile();
    }

    // === Queries ===

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.p1,
            PlayerId::Two => &self.p2,
        }
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::One => &mut self.p1,
            PlayerId::Two => &mut self.p2,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The player who is not throwing
    pub fn opponent(&self) -> PlayerId {
        self.current.other()
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn explosion(&self) -> &Explosion {
        &self.explosion
    }

    pub fn score(&self, id: PlayerId) -> u32 {
        self.player(id).score
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn launch_origin(&self, id: PlayerId) -> Vec2 {
        self.player(id).launch_origin
    }

    /// Where the projectile rests while `id` holds it
    pub fn hold_position(&self, id: PlayerId) -> Vec2 {
        self.player(id).pos + self.tuning.hold_offset
    }

    /// Take the events recorded since the last drain
    ///
    /// `tick` discards undrained events from earlier frames, so this never
    /// holds more than one frame's worth plus any direct commands since.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Move the current player horizontally, clamped to their lane
    pub fn move_current_player(&mut self, dx: f32) {
        if !dx.is_finite() {
            return;
        }
        let id = self.current;
        let (lo, hi) = id.lane();
        let player = self.player_mut(id);
        player.pos.x = (player.pos.x + dx).clamp(lo, hi);

        let hold = self.hold_position(id);
        self.projectile.track(hold);
    }

    /// Change the launch angle (degrees), clamped to [0, 90]
    pub fn adjust_angle(&mut self, delta_deg: f32) {
        if !delta_deg.is_finite() {
            return;
        }
        self.projectile.adjust_angle(delta_deg);
        log::debug!(
            "Angle={:.1} Power={:.2}",
            self.projectile.angle_deg,
            self.projectile.power
        );
    }

    /// Change the launch power, clamped to [1, 20]
    pub fn adjust_power(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.projectile.adjust_power(delta);
        log::debug!(
            "Angle={:.1} Power={:.2}",
            self.projectile.angle_deg,
            self.projectile.power
        );
    }

    /// Throw from the current player's hand
    ///
    /// Returns false (and does nothing) if the projectile is already flying.
    pub fn fire(&mut self) -> bool {
        if self.projectile.in_flight {
            return false;
        }
        let id = self.current;
        let origin = self.hold_position(id);
        self.player_mut(id).launch_origin = origin;
        self.projectile.launch(origin);
        self.shots_fired += 1;

        log::info!(
            "{} fires | Angle={:.1} Power={:.2}",
            id,
            self.projectile.angle_deg,
            self.projectile.power
        );
        self.events.push(GameEvent::Fired {
            player: id,
            origin,
            angle_deg: self.projectile.angle_deg,
            power: self.projectile.power,
        });
        true
    }

    /// Put the projectile back in the current player's hand
    pub(crate) fn reset_projectile(&mut self) {
        let hold = self.hold_position(self.current);
        self.projectile.reset(hold);
    }
}
