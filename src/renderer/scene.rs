//! Scene and HUD extraction from match state

use glam::Vec2;
use serde::Serialize;

use super::instance::{InstanceKind, SceneInstance, colors};
use crate::box_center;
use crate::sim::{MatchState, PlayerId};

/// Explosion sphere starts at this fraction of the projectile's size
const EXPLOSION_START_SCALE: f32 = 0.2;
/// ...and grows by this much over its lifetime
const EXPLOSION_GROWTH: f32 = 1.3;

/// Instances for the current frame, back to front
///
/// Buildings first (insertion order), then both players, the projectile,
/// and the explosion if it is active.
pub fn build_scene(state: &MatchState) -> Vec<SceneInstance> {
    let mut out = Vec::with_capacity(state.buildings().len() + 4);

    for b in state.buildings() {
        out.push(SceneInstance::new(
            InstanceKind::Building,
            box_center(b.pos, b.size),
            b.size,
            colors::BUILDING,
        ));
    }

    for (id, kind, color) in [
        (PlayerId::One, InstanceKind::PlayerOne, colors::PLAYER_ONE),
        (PlayerId::Two, InstanceKind::PlayerTwo, colors::PLAYER_TWO),
    ] {
        let p = state.player(id);
        out.push(SceneInstance::new(kind, box_center(p.pos, p.size), p.size, color));
    }

    let size = state.tuning().projectile_size;
    out.push(SceneInstance::new(
        InstanceKind::Projectile,
        state.projectile().pos,
        Vec2::splat(size),
        colors::PROJECTILE,
    ));

    let explosion = state.explosion();
    if explosion.active {
        let t = explosion.progress();
        let scale = EXPLOSION_START_SCALE + EXPLOSION_GROWTH * t;
        out.push(SceneInstance::new(
            InstanceKind::Explosion,
            explosion.pos,
            Vec2::splat(size * scale),
            colors::explosion(t),
        ));
    }

    out
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub current_player: PlayerId,
    pub score_p1: u32,
    pub score_p2: u32,
    pub angle_deg: f32,
    pub power: f32,
    pub in_flight: bool,
    /// Explosion progress in [0, 1], `None` when no explosion is showing
    pub explosion: Option<f32>,
}

pub fn hud(state: &MatchState) -> Hud {
    let projectile = state.projectile();
    let explosion = state.explosion();
    Hud {
        current_player: state.current_player(),
        score_p1: state.score(PlayerId::One),
        score_p2: state.score(PlayerId::Two),
        angle_deg: projectile.angle_deg,
        power: projectile.power,
        in_flight: projectile.in_flight,
        explosion: explosion.active.then(|| explosion.progress()),
    }
}
