//! Render snapshot
//!
//! Everything a graphics layer needs to draw one frame, flattened into
//! GPU-ready instance records. Built from `&MatchState`; never mutates it.

pub mod instance;
pub mod scene;

pub use instance::{InstanceKind, SceneInstance, colors};
pub use scene::{Hud, build_scene, hud};
