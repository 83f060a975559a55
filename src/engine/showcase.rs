// Interactive showcase component
// Owns one widget instance: its motion (spin or orbit), the region dispatcher,
// the panel selection and the deferred navigations. The panel selection is the
// freeze flag: while a topic is open the motion holds still.

use std::time::Duration;

use super::dispatch::{Action, Dispatcher, Navigator, Region};
use super::panel::{PanelController, PanelState};
use super::rotation::Motion;
use super::scheduler::{AnimationLoop, TickHandle, TickScheduler};
use super::timers::TimerQueue;

/// Work left behind by a `Delay` action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    Navigate(String),
}

pub struct Showcase {
    motion: Motion,
    dispatcher: Dispatcher,
    panel: PanelController,
    deferred: TimerQueue<Deferred>,
    frames: AnimationLoop,
    hovered: Option<Region>,
    mounted: bool,
}

impl Showcase {
    pub fn new(motion: Motion, dispatcher: Dispatcher) -> Self {
        Self {
            motion,
            dispatcher,
            panel: PanelController::new(),
            deferred: TimerQueue::new(),
            frames: AnimationLoop::new(),
            hovered: None,
            mounted: false,
        }
    }

    pub fn mount(&mut self, ticks: &mut dyn TickScheduler) {
        self.mounted = true;
        self.frames.start(ticks);
    }

    /// Stop the frame loop and drop pending deferred navigations.
    pub fn unmount(&mut self, ticks: &mut dyn TickScheduler) {
        self.frames.stop(ticks);
        self.deferred.clear();
        self.hovered = None;
        self.mounted = false;
    }

    /// Advance the motion for one fired tick.
    pub fn on_tick(&mut self, handle: TickHandle, now: Duration, ticks: &mut dyn TickScheduler) {
        if !self.mounted {
            return;
        }
        if let Some(dt) = self.frames.on_tick(handle, Some(now), ticks) {
            self.motion.advance(dt, self.panel.is_frozen());
        }
    }

    /// Resolve a click and run its actions. Unbound regions are ignored.
    pub fn click(&mut self, region: Region, now: Duration, nav: &mut dyn Navigator) {
        if !self.mounted {
            return;
        }
        let actions = self.dispatcher.dispatch(region);
        if actions.is_empty() {
            log::debug!("click on unbound region {region:?} ignored");
            return;
        }
        log::debug!("click on {region:?} -> {} action(s)", actions.len());
        self.execute(actions, now, nav);
    }

    fn execute(&mut self, actions: Vec<Action>, now: Duration, nav: &mut dyn Navigator) {
        for action in actions {
            match action {
                Action::Navigate(url) => open_external(nav, &url),
                Action::Delay(delay, url) => {
                    self.deferred.schedule(now + delay, Deferred::Navigate(url));
                }
                Action::OpenPanel(topic) => self.panel.open(topic),
            }
        }
    }

    /// Fire deferred navigations that have come due.
    pub fn update(&mut self, now: Duration, nav: &mut dyn Navigator) {
        if !self.mounted {
            return;
        }
        while let Some((_, deferred)) = self.deferred.pop_due(now) {
            match deferred {
                Deferred::Navigate(url) => open_external(nav, &url),
            }
        }
    }

    pub fn close(&mut self) {
        self.panel.close();
    }

    /// Track which region the pointer is over. Only bound regions count.
    pub fn hover(&mut self, region: Option<Region>) {
        self.hovered = region.filter(|r| self.dispatcher.bindings().is_bound(*r));
    }

    pub fn hovered(&self) -> Option<Region> {
        self.hovered
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn is_frozen(&self) -> bool {
        self.panel.is_frozen()
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_animating(&self) -> bool {
        self.frames.is_running()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.deferred.next_deadline()
    }

    pub fn pending_navigations(&self) -> usize {
        self.deferred.len()
    }
}

// Navigation and panel display are independent: a refused open is only logged.
fn open_external(nav: &mut dyn Navigator, url: &str) {
    if let Err(err) = nav.open(url) {
        log::warn!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::{Clock, FakeClock};
    use crate::engine::dispatch::{CubeFace, RecordingNavigator, RegionBindings, Topic};
    use crate::engine::rotation::{Orbit, Spin};
    use crate::engine::scheduler::ManualTicks;
    use glam::Vec3;

    const LEETCODE: &str = "https://leetcode.example/u/me";
    const HACKERRANK: &str = "https://hackerrank.example/me";

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(RegionBindings::portfolio()).with_navigation(
            Topic::Coding,
            vec![
                Action::Navigate(LEETCODE.into()),
                Action::Delay(Duration::from_millis(500), HACKERRANK.into()),
            ],
        )
    }

    fn spinning() -> Showcase {
        Showcase::new(Motion::Spin(Spin::new(Vec3::new(0.2, 0.3, 0.0))), dispatcher())
    }

    fn spin_angles(showcase: &Showcase) -> Vec3 {
        match showcase.motion() {
            Motion::Spin(spin) => spin.angles(),
            Motion::Orbit(_) => panic!("expected spin"),
        }
    }

    /// Fire `frames` ticks, `step_ms` apart.
    fn run_frames(
        showcase: &mut Showcase,
        ticks: &mut ManualTicks,
        clock: &FakeClock,
        frames: usize,
        step_ms: u64,
    ) {
        for _ in 0..frames {
            clock.advance_ms(step_ms);
            let handle = ticks.fire().expect("loop should stay armed");
            showcase.on_tick(handle, clock.now(), ticks);
        }
    }

    #[test]
    fn test_unfrozen_ticks_advance_orientation() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut showcase = spinning();
        showcase.mount(&mut ticks);

        // First tick only establishes the time base.
        let h = ticks.fire().unwrap();
        showcase.on_tick(h, clock.now(), &mut ticks);
        run_frames(&mut showcase, &mut ticks, &clock, 100, 10);

        let a = spin_angles(&showcase);
        assert!((a.x - 0.2).abs() < 1e-3);
        assert!((a.y - 0.3).abs() < 1e-3);
    }

    #[test]
    fn test_click_selects_topic_and_freezes() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator::default();
        let mut showcase = spinning();
        showcase.mount(&mut ticks);
        run_frames(&mut showcase, &mut ticks, &clock, 20, 16);

        let cases = [
            (Region::Face(CubeFace::Right), Topic::Certification),
            (Region::Face(CubeFace::Bottom), Topic::Status),
            (Region::Planet(0), Topic::Coding),
            (Region::Shortcut(Topic::Status), Topic::Status),
        ];
        for (region, topic) in cases {
            showcase.click(region, clock.now(), &mut nav);
            assert_eq!(showcase.panel_state(), PanelState::Open(topic));
            assert!(showcase.is_frozen());
        }

        let held = spin_angles(&showcase);
        run_frames(&mut showcase, &mut ticks, &clock, 30, 16);
        assert_eq!(spin_angles(&showcase), held);
    }

    #[test]
    fn test_close_unfreezes_and_resumes() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator::default();
        let mut showcase = spinning();
        showcase.mount(&mut ticks);
        run_frames(&mut showcase, &mut ticks, &clock, 5, 16);

        showcase.click(Region::Face(CubeFace::Top), clock.now(), &mut nav);
        let held = spin_angles(&showcase);
        showcase.close();
        assert_eq!(showcase.panel_state(), PanelState::Idle);
        assert!(!showcase.is_frozen());

        run_frames(&mut showcase, &mut ticks, &clock, 5, 16);
        assert!(spin_angles(&showcase).y > held.y);
    }

    #[test]
    fn test_coding_opens_both_profiles() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator::default();
        let mut showcase = spinning();
        showcase.mount(&mut ticks);

        showcase.click(Region::Face(CubeFace::Back), clock.now(), &mut nav);
        assert_eq!(nav.opened, vec![LEETCODE.to_string()]);
        assert_eq!(showcase.panel_state(), PanelState::Open(Topic::Coding));

        clock.advance_ms(499);
        showcase.update(clock.now(), &mut nav);
        assert_eq!(nav.opened.len(), 1);

        clock.advance_ms(1);
        showcase.update(clock.now(), &mut nav);
        assert_eq!(nav.opened, vec![LEETCODE.to_string(), HACKERRANK.to_string()]);

        clock.advance_ms(5_000);
        showcase.update(clock.now(), &mut nav);
        assert_eq!(nav.opened.len(), 2);
    }

    #[test]
    fn test_refused_navigation_still_opens_panel() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator { refuse: true, ..Default::default() };
        let mut showcase = spinning();
        showcase.mount(&mut ticks);

        showcase.click(Region::Face(CubeFace::Front), clock.now(), &mut nav);
        clock.advance_ms(600);
        showcase.update(clock.now(), &mut nav);

        assert!(nav.opened.is_empty());
        assert_eq!(showcase.panel_state(), PanelState::Open(Topic::Coding));
        assert!(showcase.is_frozen());
    }

    #[test]
    fn test_unbound_region_changes_nothing() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator::default();
        let mut showcase = spinning();
        showcase.mount(&mut ticks);
        run_frames(&mut showcase, &mut ticks, &clock, 3, 16);

        let before = spin_angles(&showcase);
        showcase.click(Region::Planet(42), clock.now(), &mut nav);
        assert_eq!(showcase.panel_state(), PanelState::Idle);
        assert_eq!(spin_angles(&showcase), before);
        assert!(nav.opened.is_empty());

        showcase.click(Region::Face(CubeFace::Left), clock.now(), &mut nav);
        showcase.click(Region::Planet(42), clock.now(), &mut nav);
        assert_eq!(showcase.panel_state(), PanelState::Open(Topic::Certification));
    }

    #[test]
    fn test_hover_tracks_bound_regions_only() {
        let mut showcase = spinning();
        showcase.hover(Some(Region::Planet(2)));
        assert_eq!(showcase.hovered(), Some(Region::Planet(2)));
        showcase.hover(Some(Region::Planet(7)));
        assert_eq!(showcase.hovered(), None);
    }

    #[test]
    fn test_teardown_stops_everything() {
        let clock = FakeClock::new();
        let mut ticks = ManualTicks::new();
        let mut nav = RecordingNavigator::default();
        let mut showcase = Showcase::new(
            Motion::Orbit(Orbit::new(std::f32::consts::PI / 8.0)),
            dispatcher(),
        );
        showcase.mount(&mut ticks);
        run_frames(&mut showcase, &mut ticks, &clock, 10, 16);

        showcase.click(Region::Planet(0), clock.now(), &mut nav);
        showcase.close();
        let stale = ticks.fire();
        showcase.unmount(&mut ticks);
        let motion = *showcase.motion();

        assert_eq!(ticks.armed(), 0);
        assert!(!showcase.is_animating());
        assert_eq!(showcase.next_deadline(), None);

        clock.advance_ms(10_000);
        showcase.update(clock.now(), &mut nav);
        if let Some(handle) = stale {
            showcase.on_tick(handle, clock.now(), &mut ticks);
        }
        showcase.click(Region::Planet(1), clock.now(), &mut nav);

        assert_eq!(nav.opened, vec![LEETCODE.to_string()]);
        assert_eq!(*showcase.motion(), motion);
        assert_eq!(showcase.panel_state(), PanelState::Idle);
    }
}
