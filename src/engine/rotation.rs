// Rotation and orbit engines
// Both advance by rate * dt each frame while unfrozen and hold their value
// while frozen. Angles are kept wrapped into [0, 2π).

use std::f32::consts::TAU;

use glam::{EulerRot, Quat, Vec2, Vec3};

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

fn usable_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

// ============================================================================
// SPIN (cube)
// ============================================================================

/// Tumbling 3-axis rotation. Distinct per-axis rates give a tumble rather
/// than a pure spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angles: Vec3,
    /// Radians per second on X, Y and Z.
    pub rates: Vec3,
}

impl Spin {
    pub fn new(rates: Vec3) -> Self {
        Self { angles: Vec3::ZERO, rates }
    }

    pub fn with_angles(rates: Vec3, angles: Vec3) -> Self {
        Self {
            angles: Vec3::new(wrap_angle(angles.x), wrap_angle(angles.y), wrap_angle(angles.z)),
            rates,
        }
    }

    pub fn advance(&mut self, dt: f32, frozen: bool) {
        if frozen {
            return;
        }
        let step = self.rates * usable_dt(dt);
        self.angles = Vec3::new(
            wrap_angle(self.angles.x + step.x),
            wrap_angle(self.angles.y + step.y),
            wrap_angle(self.angles.z + step.z),
        );
    }

    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    /// Object-to-world rotation (X, then Y, then Z).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}

// ============================================================================
// ORBIT (planets)
// ============================================================================

/// Shared base angle for a ring of bodies. Every body sits at
/// `base_angle + phase_offset(i, n)` on its own ellipse, so they all move in
/// lockstep without per-body state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    base_angle: f32,
    /// Radians per second.
    pub speed: f32,
}

impl Orbit {
    pub fn new(speed: f32) -> Self {
        Self { base_angle: 0.0, speed }
    }

    pub fn advance(&mut self, dt: f32, frozen: bool) {
        if frozen {
            return;
        }
        self.base_angle = wrap_angle(self.base_angle + self.speed * usable_dt(dt));
    }

    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }
}

/// Even phase spacing for body `index` out of `count`.
pub fn phase_offset(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * TAU / count as f32
}

/// Screen position of a body on an axis-aligned ellipse around `center`.
pub fn orbit_position(center: Vec2, base_angle: f32, offset: f32, radii: Vec2) -> Vec2 {
    let angle = base_angle + offset;
    center + Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y)
}

// ============================================================================
// MOTION
// ============================================================================

/// The widget's continuous motion: either a tumbling cube or orbiting planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Spin(Spin),
    Orbit(Orbit),
}

impl Motion {
    pub fn advance(&mut self, dt: f32, frozen: bool) {
        match self {
            Motion::Spin(spin) => spin.advance(dt, frozen),
            Motion::Orbit(orbit) => orbit.advance(dt, frozen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_spin_advances_at_configured_rates() {
        let mut spin = Spin::new(Vec3::new(0.2, 0.3, 0.0));
        for _ in 0..10 {
            spin.advance(0.1, false);
        }
        let a = spin.angles();
        assert!((a.x - 0.2).abs() < EPS);
        assert!((a.y - 0.3).abs() < EPS);
        assert_eq!(a.z, 0.0);
    }

    #[test]
    fn test_spin_is_held_while_frozen() {
        let mut spin = Spin::new(Vec3::new(0.2, 0.3, 0.0));
        spin.advance(1.0, false);
        let held = spin.angles();
        for _ in 0..50 {
            spin.advance(0.016, true);
        }
        assert_eq!(spin.angles(), held);

        // Unfreezing resumes from the held value, not from zero.
        spin.advance(1.0, false);
        assert!((spin.angles().y - 0.6).abs() < EPS);
    }

    #[test]
    fn test_spin_wraps_into_full_turn() {
        let mut spin = Spin::new(Vec3::new(1.0, 0.0, 0.0));
        spin.advance(TAU + 0.5, false);
        assert!((spin.angles().x - 0.5).abs() < EPS);
        assert!(spin.angles().x < TAU);
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut spin = Spin::new(Vec3::ONE);
        spin.advance(-1.0, false);
        spin.advance(f32::NAN, false);
        assert_eq!(spin.angles(), Vec3::ZERO);
    }

    #[test]
    fn test_orbit_advances_and_freezes() {
        let speed = std::f32::consts::PI / 8.0;
        let mut orbit = Orbit::new(speed);
        orbit.advance(2.0, false);
        assert!((orbit.base_angle() - speed * 2.0).abs() < EPS);
        orbit.advance(5.0, true);
        assert!((orbit.base_angle() - speed * 2.0).abs() < EPS);
    }

    #[test]
    fn test_bodies_sit_on_their_ellipse() {
        let center = Vec2::new(250.0, 150.0);
        let radii = Vec2::new(140.0, 90.0);
        for i in 0..3 {
            let p = orbit_position(center, 1.3, phase_offset(i, 3), radii) - center;
            let on_ellipse = (p.x / radii.x).powi(2) + (p.y / radii.y).powi(2);
            assert!((on_ellipse - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_phase_offsets_are_even() {
        assert_eq!(phase_offset(0, 3), 0.0);
        assert!((phase_offset(1, 3) - TAU / 3.0).abs() < EPS);
        assert!((phase_offset(2, 3) - 2.0 * TAU / 3.0).abs() < EPS);
        assert_eq!(phase_offset(4, 0), 0.0);
    }

    #[test]
    fn test_first_body_starts_on_positive_x() {
        let p = orbit_position(Vec2::ZERO, 0.0, phase_offset(0, 3), Vec2::new(140.0, 90.0));
        assert!((p.x - 140.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }
}
