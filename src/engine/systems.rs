// ECS systems for the showcase scene
// Each runs once per frame over the components it needs.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec2};

use super::camera::{ShowcaseCamera, Viewport};
use super::components::*;
use super::dispatch::Region;
use super::mesh::face_normal;
use super::rotation::orbit_position;

/// Place every orbit body around `center` for the current base angle.
pub fn orbit_system(world: &mut World, base_angle: f32, center: Vec2) {
    let mut query = world.query::<(&OrbitBody, &mut ScreenPos)>();
    for (body, mut pos) in query.iter_mut(world) {
        pos.0 = orbit_position(center, base_angle, body.phase_offset, body.radii);
    }
}

/// Update star brightness from elapsed seconds.
pub fn twinkle_system(world: &mut World, time: f32) {
    let mut query = world.query::<&mut Star>();
    for mut star in query.iter_mut(world) {
        star.brightness = 0.55 + 0.45 * (time * star.twinkle_speed + star.phase).sin();
    }
}

/// One face label, already projected to egui screen points.
pub struct FaceLabelDraw {
    pub pos: Vec2,
    pub text: &'static str,
    /// How squarely the face points at the camera, in (0, 1].
    pub facing: f32,
}

/// Labels for the faces currently turned toward the camera.
pub fn face_label_system(
    world: &mut World,
    orientation: Quat,
    half_extent: f32,
    camera: &ShowcaseCamera,
    viewport: &Viewport,
) -> Vec<FaceLabelDraw> {
    let mut draws = Vec::new();
    let mut query = world.query::<(&Face, &Label)>();
    for (face, label) in query.iter(world) {
        let normal = orientation * face_normal(face.face);
        let center = normal * half_extent;
        let facing = normal.dot((camera.eye - center).normalize_or_zero());
        if facing <= 0.05 {
            continue;
        }
        if let Some(pos) = camera.project(center, viewport) {
            draws.push(FaceLabelDraw { pos, text: label.0, facing });
        }
    }
    draws
}

/// The orbit body under `pointer`, if any. Overlaps go to the nearest centre.
pub fn pick_body(world: &mut World, pointer: Vec2) -> Option<Region> {
    let mut query = world.query::<(&RegionTag, &OrbitBody, &ScreenPos)>();
    query
        .iter(world)
        .filter_map(|(region, body, pos)| {
            let dist = pos.0.distance(pointer);
            (dist <= body.size * 0.5).then_some((region.0, dist))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(region, _)| region)
}
