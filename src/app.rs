// Application state
// Everything that is not GPU plumbing: clock, showcase, typewriter, scene and
// page. main.rs drives it from winit events; frame() builds the egui pass.

use std::time::Instant;

use glam::{Quat, Vec3};

use crate::config::{Config, ShowcaseConfig, WidgetKind};
use crate::content::{HACKERRANK_URL, LEETCODE_URL};
use crate::engine::camera::{ShowcaseCamera, Viewport};
use crate::engine::overlay::{self, DebugStats, FrameTimer};
use crate::engine::scene::Scene;
use crate::engine::scheduler::{TickHandle, TickScheduler};
use crate::engine::{
    Action, Clock, CubeFace, Dispatcher, MonotonicClock, Motion, Orbit, PanelState, Region,
    RegionBindings, Showcase, Spin, Topic, Typewriter,
};
use crate::error::AppError;
use crate::ui::page::{self, PageState};
use crate::ui::{EguiNavigator, dashboard, theme, widget};

/// Width of the page column on the right of the window, in points.
const PAGE_WIDTH: f32 = 560.0;

/// What the scene pass needs to draw the cube this frame.
pub struct CubeDraw {
    /// Viewport in egui points.
    pub viewport: Viewport,
    pub orientation: Quat,
}

pub struct App {
    clock: MonotonicClock,
    showcase: Showcase,
    typewriter: Typewriter,
    scene: Scene,
    camera: ShowcaseCamera,
    page: PageState,
    frame_timer: FrameTimer,
    widget: WidgetKind,
    theme_applied: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let dispatcher = build_dispatcher(&config.showcase);
        let scene = Scene::new(
            dispatcher.bindings(),
            config.scene.star_count,
            config.scene.star_seed,
        );
        let typewriter = Typewriter::new(config.typewriter.words.clone(), config.typewriter.timings())?;

        Ok(Self {
            clock: MonotonicClock::new(),
            showcase: Showcase::new(build_motion(&config.showcase), dispatcher),
            typewriter,
            scene,
            camera: ShowcaseCamera::new(),
            page: PageState::new(),
            frame_timer: FrameTimer::new(),
            widget: config.showcase.widget,
            theme_applied: false,
        })
    }

    pub fn mount(&mut self, ticks: &mut dyn TickScheduler) {
        self.showcase.mount(ticks);
        self.typewriter.mount(self.clock.now());
        log::info!("Showcase mounted ({} widget)", self.widget.name());
    }

    pub fn unmount(&mut self, ticks: &mut dyn TickScheduler) {
        self.showcase.unmount(ticks);
        self.typewriter.unmount();
        log::info!("Showcase unmounted");
    }

    /// Advance motion for a fired animation tick and record frame timing.
    pub fn on_redraw(&mut self, fired: Option<TickHandle>, ticks: &mut dyn TickScheduler) {
        let now = self.clock.now();
        if let Some(handle) = fired {
            self.showcase.on_tick(handle, now, ticks);
        }
        self.frame_timer.record(now);
    }

    pub fn close_panel(&mut self) {
        self.showcase.close();
    }

    pub fn camera(&self) -> &ShowcaseCamera {
        &self.camera
    }

    pub fn face_color(&mut self, face: CubeFace) -> [f32; 4] {
        self.scene.face_color(face)
    }

    /// Earliest pending timer as a wakeup instant for the event loop.
    pub fn next_wakeup(&self) -> Option<Instant> {
        [self.showcase.next_deadline(), self.typewriter.next_deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|due| self.clock.instant_at(due))
    }

    pub fn debug_stats(&self, resolution: (u32, u32)) -> DebugStats {
        let (fps, avg, min, max) = self.frame_timer.published();
        DebugStats {
            fps,
            frame_time_avg_ms: avg,
            frame_time_min_ms: min,
            frame_time_max_ms: max,
            resolution,
            widget: self.widget.name(),
            panel: match self.showcase.panel_state() {
                PanelState::Idle => "idle".to_string(),
                PanelState::Open(topic) => format!("open({})", topic.id()),
            },
            hovered: self
                .showcase
                .hovered()
                .map(|r| format!("{r:?}"))
                .unwrap_or_else(|| "-".to_string()),
            pending_timers: self.showcase.pending_navigations(),
        }
    }

    /// Build the whole egui pass. Runs timers first so that any URL they open
    /// lands in this frame's platform output.
    pub fn frame(&mut self, ctx: &egui::Context, stats: Option<&DebugStats>) -> Option<CubeDraw> {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        let now = self.clock.now();
        let mut nav = EguiNavigator::new(ctx);
        self.typewriter.update(now);
        self.showcase.update(now, &mut nav);

        egui::SidePanel::right("page")
            .resizable(false)
            .exact_width(PAGE_WIDTH)
            .frame(
                egui::Frame::none()
                    .fill(theme::BACKGROUND)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| page::show(ui, &mut self.page, &self.typewriter));

        let mut viewport = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if self.showcase.panel_state() == PanelState::Idle {
                    egui::TopBottomPanel::bottom("call_to_action")
                        .frame(egui::Frame::none().inner_margin(egui::Margin::same(12.0)))
                        .show_inside(ui, |ui| {
                            if let Some(topic) = dashboard::call_to_action(ui) {
                                self.showcase.click(Region::Shortcut(topic), now, &mut nav);
                            }
                        });
                }
                viewport = widget::show(
                    ui,
                    &mut self.showcase,
                    &mut self.scene,
                    &self.camera,
                    now,
                    &mut nav,
                );
            });

        if let PanelState::Open(topic) = self.showcase.panel_state() {
            if dashboard::show(ctx, topic) {
                self.showcase.close();
            }
        }

        if let Some(stats) = stats {
            overlay::stats_panel(ctx, stats);
        }

        let orientation = match self.showcase.motion() {
            Motion::Spin(spin) => spin.orientation(),
            Motion::Orbit(_) => Quat::IDENTITY,
        };
        viewport.map(|viewport| CubeDraw { viewport, orientation })
    }
}

fn build_motion(config: &ShowcaseConfig) -> Motion {
    match config.widget {
        WidgetKind::Cube => Motion::Spin(Spin::new(Vec3::from(config.spin_rates))),
        WidgetKind::Orbit => Motion::Orbit(Orbit::new(config.orbit_speed)),
    }
}

/// Portfolio bindings. Only the coding topic leaves the page: LeetCode at
/// once, HackerRank after the configured delay.
fn build_dispatcher(config: &ShowcaseConfig) -> Dispatcher {
    Dispatcher::new(RegionBindings::portfolio()).with_navigation(
        Topic::Coding,
        vec![
            Action::Navigate(LEETCODE_URL.to_string()),
            Action::Delay(config.navigation_delay(), HACKERRANK_URL.to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::typewriter::TypewriterError;
    use std::time::Duration;

    #[test]
    fn test_dispatcher_opens_profiles_for_coding() {
        let dispatcher = build_dispatcher(&ShowcaseConfig::default());
        let actions = dispatcher.dispatch(Region::Face(CubeFace::Back));
        assert_eq!(
            actions,
            vec![
                Action::Navigate(LEETCODE_URL.to_string()),
                Action::Delay(Duration::from_millis(500), HACKERRANK_URL.to_string()),
                Action::OpenPanel(Topic::Coding),
            ]
        );
        assert_eq!(
            dispatcher.dispatch(Region::Planet(1)),
            vec![Action::OpenPanel(Topic::Status)]
        );
    }

    #[test]
    fn test_motion_follows_widget_kind() {
        let mut config = ShowcaseConfig::default();
        assert!(matches!(build_motion(&config), Motion::Spin(_)));
        config.widget = WidgetKind::Orbit;
        assert!(matches!(build_motion(&config), Motion::Orbit(o) if o.speed == config.orbit_speed));
    }

    #[test]
    fn test_app_rejects_empty_word_list() {
        let mut config = Config::default();
        config.typewriter.words.clear();
        assert!(matches!(App::new(&config), Err(AppError::Typewriter(_))));
    }

    #[test]
    fn test_app_rejects_zero_blink() {
        let mut config = Config::default();
        config.typewriter.blink_ms = 0;
        assert!(matches!(
            App::new(&config),
            Err(AppError::Typewriter(TypewriterError::ZeroPeriod("blink")))
        ));
    }
}
