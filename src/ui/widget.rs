// Interactive widget area
// Resolves pointer hover and clicks to regions and draws everything of the
// widget that egui can draw: stars, face labels, and for the orbit widget the
// orbits and planets themselves. The cube body is drawn by the scene pass into
// the returned viewport.

use std::time::Duration;

use egui::{Align2, Color32, FontId, Sense, Shape, Stroke, Ui};
use glam::Vec2;

use super::{pos2, theme, vec2};
use crate::engine::camera::{ShowcaseCamera, Viewport, pick_face};
use crate::engine::components::{Label, OrbitBody, ScreenPos, Star, Tint};
use crate::engine::dispatch::{Navigator, Region};
use crate::engine::rotation::Motion;
use crate::engine::scene::{CUBE_HALF_EXTENT, Scene};
use crate::engine::showcase::Showcase;
use crate::engine::systems::{face_label_system, orbit_system, pick_body, twinkle_system};

const ORBIT_SEGMENTS: usize = 72;

/// Lay out the widget in the remaining space of `ui`. Returns the viewport
/// the cube must be rendered into, or `None` for the orbit widget.
pub fn show(
    ui: &mut Ui,
    showcase: &mut Showcase,
    scene: &mut Scene,
    camera: &ShowcaseCamera,
    now: Duration,
    nav: &mut dyn Navigator,
) -> Option<Viewport> {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
    let viewport = Viewport::new(vec2(rect.min), vec2(rect.max) - vec2(rect.min));
    let painter = ui.painter_at(rect);

    twinkle_system(&mut scene.world, now.as_secs_f32());

    let pointer = response.hover_pos().map(vec2);
    let (picked, cube_viewport) = match *showcase.motion() {
        Motion::Spin(spin) => {
            let orientation = spin.orientation();
            let pick = |p: Vec2| pick_face(camera, orientation, CUBE_HALF_EXTENT, p, &viewport);

            draw_stars(&painter, scene, &viewport, |p| pick(p).is_some());

            for label in face_label_system(
                &mut scene.world,
                orientation,
                CUBE_HALF_EXTENT,
                camera,
                &viewport,
            ) {
                painter.text(
                    pos2(label.pos),
                    Align2::CENTER_CENTER,
                    label.text,
                    FontId::proportional(13.0 + 5.0 * label.facing),
                    Color32::WHITE.gamma_multiply(label.facing),
                );
            }

            (pointer.and_then(pick).map(Region::Face), Some(viewport))
        }
        Motion::Orbit(orbit) => {
            draw_stars(&painter, scene, &viewport, |_| false);
            orbit_system(&mut scene.world, orbit.base_angle(), viewport.center());
            draw_orbits(&painter, scene, viewport.center());
            (pointer.and_then(|p| pick_body(&mut scene.world, p)), None)
        }
    };

    showcase.hover(picked);
    let response = if showcase.hovered().is_some() {
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        response
    };

    if response.clicked() {
        match picked {
            Some(region) => showcase.click(region, now, nav),
            None => log::debug!("click on empty widget space"),
        }
    }

    if showcase.is_frozen() {
        painter.text(
            rect.center_bottom() - egui::vec2(0.0, 12.0),
            Align2::CENTER_BOTTOM,
            "Paused while a dashboard is open",
            FontId::proportional(12.0),
            theme::MUTED,
        );
    }

    cube_viewport
}

/// Stars behind the widget. `hidden` masks stars covered by the scene pass.
fn draw_stars(
    painter: &egui::Painter,
    scene: &mut Scene,
    viewport: &Viewport,
    hidden: impl Fn(Vec2) -> bool,
) {
    let mut query = scene.world.query::<&Star>();
    for star in query.iter(&scene.world) {
        let pos = viewport.min + star.anchor * viewport.size;
        if hidden(pos) {
            continue;
        }
        painter.circle_filled(
            pos2(pos),
            star.size,
            Color32::WHITE.gamma_multiply(star.brightness.clamp(0.0, 1.0)),
        );
    }
}

fn draw_orbits(painter: &egui::Painter, scene: &mut Scene, center: Vec2) {
    painter.circle_filled(pos2(center), 22.0, theme::CYAN.gamma_multiply(0.25));
    painter.circle_filled(pos2(center), 14.0, theme::CYAN.gamma_multiply(0.6));

    let mut query = scene.world.query::<(&OrbitBody, &ScreenPos, &Tint, &Label)>();
    let bodies: Vec<_> = query.iter(&scene.world).map(|(b, p, t, l)| (*b, *p, *t, *l)).collect();

    let orbit_stroke = Stroke::new(1.0, Color32::WHITE.gamma_multiply(0.15));
    for (body, _, _, _) in &bodies {
        let points = (0..ORBIT_SEGMENTS)
            .map(|i| {
                let t = i as f32 / ORBIT_SEGMENTS as f32 * std::f32::consts::TAU;
                pos2(center + Vec2::new(t.cos(), t.sin()) * body.radii)
            })
            .collect();
        painter.add(Shape::closed_line(points, orbit_stroke));
    }

    for (body, pos, tint, label) in &bodies {
        let radius = body.size * 0.5;
        // Two-stop gradient approximated with an offset highlight.
        painter.circle_filled(pos2(pos.0), radius, theme::rgb(tint.to));
        painter.circle_filled(
            pos2(pos.0 - Vec2::splat(radius * 0.2)),
            radius * 0.7,
            theme::rgb(tint.from),
        );
        painter.text(
            pos2(pos.0 + Vec2::new(0.0, radius + 4.0)),
            Align2::CENTER_TOP,
            label.0,
            FontId::proportional(12.0),
            Color32::WHITE,
        );
    }
}
