// Showcase scene setup
// Spawns the cube faces, orbit planets and background stars into one ECS
// world. Colours follow the topic each region is bound to.

use bevy_ecs::prelude::*;
use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::components::*;
use super::dispatch::{CubeFace, Region, RegionBindings, Topic};
use super::rotation::phase_offset;

/// Half size of the showcase cube in world units.
pub const CUBE_HALF_EXTENT: f32 = 0.75;

/// Planet diameter in screen points.
pub const PLANET_SIZE: f32 = 50.0;

/// Ellipse half-axes for each planet, innermost first.
pub const PLANET_ORBITS: [Vec2; 3] = [
    Vec2::new(140.0, 90.0),
    Vec2::new(190.0, 120.0),
    Vec2::new(240.0, 150.0),
];

pub fn face_tint(topic: Topic) -> Tint {
    match topic {
        Topic::Coding => Tint::flat([0x00, 0xf0, 0xff]),
        Topic::Certification => Tint::flat([0x7b, 0xff, 0x00]),
        Topic::Status => Tint::flat([0xb3, 0x00, 0xff]),
    }
}

pub fn planet_tint(topic: Topic) -> Tint {
    match topic {
        Topic::Coding => Tint { from: [0x5e, 0xe7, 0xdf], to: [0xb4, 0x90, 0xca] },
        Topic::Status => Tint { from: [0xa8, 0xff, 0x78], to: [0x78, 0xff, 0xd6] },
        Topic::Certification => Tint { from: [0xf6, 0xd3, 0x65], to: [0xfd, 0xa0, 0x85] },
    }
}

fn face_label(topic: Topic) -> &'static str {
    match topic {
        Topic::Coding => "Coding",
        Topic::Certification => "Certifications",
        Topic::Status => "Present Status",
    }
}

pub struct Scene {
    pub world: World,
}

impl Scene {
    pub fn new(bindings: &RegionBindings, star_count: usize, star_seed: u64) -> Self {
        let mut world = World::new();
        spawn_cube_faces(&mut world, bindings);
        spawn_planets(&mut world, bindings);
        spawn_stars(&mut world, star_count, star_seed);
        Self { world }
    }

    /// Face colours for the GPU mesh.
    pub fn face_color(&mut self, face: CubeFace) -> [f32; 4] {
        let mut query = self.world.query::<(&Face, &Tint)>();
        query
            .iter(&self.world)
            .find(|(f, _)| f.face == face)
            .map(|(_, tint)| tint.linear_rgba(0.9))
            .unwrap_or([0.5, 0.5, 0.5, 0.9])
    }
}

/// Faces without a binding are skipped: they render grey and stay inert.
fn spawn_cube_faces(world: &mut World, bindings: &RegionBindings) {
    for face in CubeFace::ALL {
        let region = Region::Face(face);
        if let Some(topic) = bindings.topic_of(region) {
            world.spawn((
                RegionTag(region),
                Face { face },
                face_tint(topic),
                Label(face_label(topic)),
            ));
        }
    }
}

fn spawn_planets(world: &mut World, bindings: &RegionBindings) {
    let count = PLANET_ORBITS.len();
    for (i, radii) in PLANET_ORBITS.into_iter().enumerate() {
        let region = Region::Planet(i as u8);
        let Some(topic) = bindings.topic_of(region) else {
            continue;
        };
        world.spawn((
            RegionTag(region),
            OrbitBody {
                phase_offset: phase_offset(i, count),
                radii,
                size: PLANET_SIZE,
            },
            ScreenPos::default(),
            planet_tint(topic),
            Label(topic.display_name()),
        ));
    }
}

fn spawn_stars(world: &mut World, count: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..count {
        world.spawn(Star {
            anchor: Vec2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            twinkle_speed: rng.gen_range(0.5..2.5),
            size: rng.gen_range(0.6..1.8),
            brightness: 1.0,
        });
    }

    log::debug!("Spawned {} stars", count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_scene_contents() {
        let mut scene = Scene::new(&RegionBindings::portfolio(), 40, 7);
        let faces = scene.world.query::<&Face>().iter(&scene.world).count();
        let planets = scene.world.query::<&OrbitBody>().iter(&scene.world).count();
        let stars = scene.world.query::<&Star>().iter(&scene.world).count();
        assert_eq!((faces, planets, stars), (6, 3, 40));
    }

    #[test]
    fn test_opposite_faces_share_colour() {
        let mut scene = Scene::new(&RegionBindings::portfolio(), 0, 0);
        assert_eq!(scene.face_color(CubeFace::Front), scene.face_color(CubeFace::Back));
        assert_ne!(scene.face_color(CubeFace::Front), scene.face_color(CubeFace::Top));
    }

    #[test]
    fn test_unbound_regions_are_not_spawned() {
        let bindings = RegionBindings::empty().bind(Region::Face(CubeFace::Top), Topic::Status);
        let mut scene = Scene::new(&bindings, 0, 0);
        assert_eq!(scene.world.query::<&RegionTag>().iter(&scene.world).count(), 1);
        assert_eq!(scene.face_color(CubeFace::Front), [0.5, 0.5, 0.5, 0.9]);
    }

    #[test]
    fn test_star_field_is_seeded() {
        let mut a = Scene::new(&RegionBindings::empty(), 5, 99);
        let mut b = Scene::new(&RegionBindings::empty(), 5, 99);
        let anchors = |s: &mut Scene| -> Vec<Vec2> {
            s.world.query::<&Star>().iter(&s.world).map(|star| star.anchor).collect()
        };
        assert_eq!(anchors(&mut a), anchors(&mut b));
    }
}
