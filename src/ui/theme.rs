// Dark neon palette shared by the page, widget and dashboards.

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x05, 0x06, 0x12);
pub const SURFACE: Color32 = Color32::from_rgb(0x0d, 0x10, 0x24);
pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xf0, 0xff);
pub const LIME: Color32 = Color32::from_rgb(0x7b, 0xff, 0x00);
pub const PURPLE: Color32 = Color32::from_rgb(0xb3, 0x00, 0xff);
pub const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);

/// Clear colour for the scene pass (linear).
pub const CLEAR: wgpu::Color = wgpu::Color { r: 0.0015, g: 0.002, b: 0.006, a: 1.0 };

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SURFACE;
    visuals.window_stroke = egui::Stroke::new(1.0, CYAN.gamma_multiply(0.4));
    visuals.hyperlink_color = CYAN;
    visuals.selection.bg_fill = CYAN.gamma_multiply(0.35);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, CYAN);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
