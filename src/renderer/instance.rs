//! Instance records for box and sphere drawing

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// What an instance depicts (selects mesh and texture on the GPU side)
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Building = 0,
    PlayerOne = 1,
    PlayerTwo = 2,
    Projectile = 3,
    Explosion = 4,
}

/// One drawable: a box (buildings, players) or a sphere (projectile, explosion)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneInstance {
    /// World-space center
    pub center: [f32; 2],
    /// Full width/height (spheres use `size[0]` as diameter)
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub kind: u32,
}

impl SceneInstance {
    pub fn new(kind: InstanceKind, center: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            color,
            kind: kind as u32,
        }
    }

    pub fn kind(&self) -> Option<InstanceKind> {
        match self.kind {
            0 => Some(InstanceKind::Building),
            1 => Some(InstanceKind::PlayerOne),
            2 => Some(InstanceKind::PlayerTwo),
            3 => Some(InstanceKind::Projectile),
            4 => Some(InstanceKind::Explosion),
            _ => None,
        }
    }
}

/// Colors for game elements (tints; textured meshes multiply by these)
pub mod colors {
    pub const BUILDING: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_ONE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_TWO: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Explosion fades from yellow to red as it ages
    pub fn explosion(progress: f32) -> [f32; 4] {
        let t = progress.clamp(0.0, 1.0);
        [1.0, 1.0 - t, 0.0, 1.0]
    }
}
