// Showcase camera and pointer picking
//
// Camera model:
//   - Fixed eye on the +Z axis looking at the origin (the cube's centre)
//   - Perspective projection with wgpu's [0, 1] depth range
//   - A Viewport maps normalized device coordinates to the widget's screen
//     rectangle (egui points), so projection and picking use the same space

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use super::dispatch::CubeFace;

/// Screen-space rectangle the widget is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn aspect(&self) -> f32 {
        if self.size.y > 0.0 { self.size.x / self.size.y } else { 1.0 }
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.min + self.size).all()
    }

    fn to_ndc(&self, p: Vec2) -> Vec2 {
        let local = (p - self.min) / self.size;
        Vec2::new(local.x * 2.0 - 1.0, 1.0 - local.y * 2.0)
    }

    fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        self.min + Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5) * self.size
    }
}

pub struct ShowcaseCamera {
    pub eye: Vec3,
    pub target: Vec3,

    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl ShowcaseCamera {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix ready to upload to the GPU.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Project a world-space point to screen points. `None` if behind the eye.
    pub fn project(&self, world: Vec3, viewport: &Viewport) -> Option<Vec2> {
        let clip = self.view_projection(viewport.aspect()) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(viewport.from_ndc(Vec2::new(ndc.x, ndc.y)))
    }

    /// World-space ray (origin, unit direction) through a screen point.
    pub fn pointer_ray(&self, pointer: Vec2, viewport: &Viewport) -> (Vec3, Vec3) {
        let ndc = viewport.to_ndc(pointer);
        let inv = self.view_projection(viewport.aspect()).inverse();
        let near = unproject(inv, ndc, 0.0);
        let far = unproject(inv, ndc, 1.0);
        (near, (far - near).normalize_or_zero())
    }
}

fn unproject(inv_view_proj: Mat4, ndc: Vec2, depth: f32) -> Vec3 {
    let p = inv_view_proj * Vec4::new(ndc.x, ndc.y, depth, 1.0);
    p.truncate() / p.w
}

// ============================================================================
// PICKING
// ============================================================================

/// Which face of an axis-aligned cube of half size `half_extent`, rotated by
/// `orientation`, the pointer is over. `None` if the ray misses the cube.
///
/// Slab test in object space: the entering face is the axis whose slab is
/// entered last, on the side the ray comes from.
pub fn pick_face(
    camera: &ShowcaseCamera,
    orientation: Quat,
    half_extent: f32,
    pointer: Vec2,
    viewport: &Viewport,
) -> Option<CubeFace> {
    if !viewport.contains(pointer) {
        return None;
    }
    let (origin, dir) = camera.pointer_ray(pointer, viewport);
    let to_object = orientation.inverse();
    let o = to_object * origin;
    let d = to_object * dir;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;

    for axis in 0..3 {
        if d[axis].abs() < 1e-6 {
            if o[axis].abs() > half_extent {
                return None;
            }
            continue;
        }
        let t1 = (-half_extent - o[axis]) / d[axis];
        let t2 = (half_extent - o[axis]) / d[axis];
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > t_enter {
            t_enter = near;
            enter_axis = axis;
        }
        t_exit = t_exit.min(far);
    }

    if t_enter > t_exit || t_enter < 0.0 {
        return None;
    }

    let positive = o[enter_axis] + d[enter_axis] * t_enter > 0.0;
    Some(match (enter_axis, positive) {
        (0, true) => CubeFace::Right,
        (0, false) => CubeFace::Left,
        (1, true) => CubeFace::Top,
        (1, false) => CubeFace::Bottom,
        (_, true) => CubeFace::Front,
        (_, false) => CubeFace::Back,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn viewport() -> Viewport {
        Viewport::new(Vec2::new(100.0, 50.0), Vec2::new(400.0, 400.0))
    }

    #[test]
    fn test_center_click_hits_front() {
        let cam = ShowcaseCamera::new();
        let vp = viewport();
        assert_eq!(
            pick_face(&cam, Quat::IDENTITY, 0.75, vp.center(), &vp),
            Some(CubeFace::Front)
        );
    }

    #[test]
    fn test_quarter_turns_bring_other_faces_forward() {
        let cam = ShowcaseCamera::new();
        let vp = viewport();
        let yaw = Quat::from_rotation_y(FRAC_PI_2);
        assert_eq!(pick_face(&cam, yaw, 0.75, vp.center(), &vp), Some(CubeFace::Left));
        let pitch = Quat::from_rotation_x(FRAC_PI_2);
        assert_eq!(pick_face(&cam, pitch, 0.75, vp.center(), &vp), Some(CubeFace::Top));
        let half = Quat::from_rotation_y(FRAC_PI_2 * 2.0);
        assert_eq!(pick_face(&cam, half, 0.75, vp.center(), &vp), Some(CubeFace::Back));
    }

    #[test]
    fn test_miss_outside_cube_and_viewport() {
        let cam = ShowcaseCamera::new();
        let vp = viewport();
        assert_eq!(pick_face(&cam, Quat::IDENTITY, 0.75, vp.min + Vec2::splat(5.0), &vp), None);
        assert_eq!(pick_face(&cam, Quat::IDENTITY, 0.75, Vec2::ZERO, &vp), None);
    }

    #[test]
    fn test_project_origin_lands_on_center() {
        let cam = ShowcaseCamera::new();
        let vp = viewport();
        let p = cam.project(Vec3::ZERO, &vp).unwrap();
        assert!((p - vp.center()).length() < 1e-3);
        assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), &vp).is_none());
    }

    #[test]
    fn test_projection_and_ray_agree() {
        let cam = ShowcaseCamera::new();
        let vp = viewport();
        let world = Vec3::new(0.5, -0.25, 0.75);
        let screen = cam.project(world, &vp).unwrap();
        let (origin, dir) = cam.pointer_ray(screen, &vp);
        let to_point = (world - origin).normalize();
        assert!(to_point.dot(dir) > 0.9999);
    }
}
