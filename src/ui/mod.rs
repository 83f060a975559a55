// egui front end
// Page, widget and dashboards are immediate-mode views over the engine state.
// All state changes go back through the Showcase; nothing here owns state
// except page scrolling.

pub mod dashboard;
pub mod page;
pub mod theme;
pub mod widget;

use crate::engine::dispatch::{NavigateError, Navigator};

const OPENABLE_SCHEMES: [&str; 4] = ["https://", "http://", "mailto:", "tel:"];

pub fn is_openable(url: &str) -> bool {
    OPENABLE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Opens URLs through egui. The request is carried out by egui-winit when the
/// frame's platform output is handled, so this only works inside a pass.
pub struct EguiNavigator<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiNavigator<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl Navigator for EguiNavigator<'_> {
    fn open(&mut self, url: &str) -> Result<(), NavigateError> {
        if !is_openable(url) {
            return Err(NavigateError::Refused {
                url: url.to_string(),
                reason: "unsupported scheme".to_string(),
            });
        }
        log::info!("opening {url}");
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

pub(crate) fn pos2(v: glam::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn vec2(p: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(p.x, p.y)
}
