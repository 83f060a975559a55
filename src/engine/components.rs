// ECS components for the showcase scene
// Cube faces, orbiting planets and background stars are entities; the
// renderer queries them every frame.

use bevy_ecs::prelude::*;
use glam::Vec2;

use super::dispatch::{CubeFace, Region};

/// Clickable region this entity stands for.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTag(pub Region);

/// One face of the showcase cube.
#[derive(Component, Debug, Clone, Copy)]
pub struct Face {
    pub face: CubeFace,
}

/// A body on the shared orbit. Its angle is `base_angle + phase_offset`.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitBody {
    pub phase_offset: f32,
    /// Ellipse half-axes in screen points.
    pub radii: Vec2,
    /// Diameter in screen points.
    pub size: f32,
}

/// Position in egui screen points, refreshed each frame by the systems.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ScreenPos(pub Vec2);

/// Two-stop colour (sRGB). Flat surfaces use `from`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub from: [u8; 3],
    pub to:   [u8; 3],
}

impl Tint {
    pub const fn flat(rgb: [u8; 3]) -> Self {
        Self { from: rgb, to: rgb }
    }

    pub fn linear_rgba(&self, alpha: f32) -> [f32; 4] {
        let c = |v: u8| (v as f32 / 255.0).powf(2.2);
        [c(self.from[0]), c(self.from[1]), c(self.from[2]), alpha]
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Label(pub &'static str);

/// Background star. `anchor` is in [0, 1]² of the widget rectangle.
#[derive(Component, Debug, Clone, Copy)]
pub struct Star {
    pub anchor: Vec2,
    pub phase: f32,
    pub twinkle_speed: f32,
    pub size: f32,
    pub brightness: f32,
}
