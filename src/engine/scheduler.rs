// Frame scheduling
// The animation loop never owns the event loop. It asks an injectable
// TickScheduler for the next frame and gets a handle back, the same shape as
// requestAnimationFrame/cancelAnimationFrame. The window implementation turns
// a request into a winit redraw; tests use ManualTicks and fire by hand.

use std::sync::Arc;
use std::time::Duration;

use winit::window::Window;

/// Fixed step used when a tick arrives without a clock reading.
pub const FALLBACK_FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

pub trait TickScheduler {
    /// Arm one future tick. The returned handle identifies it when it fires.
    fn request_tick(&mut self) -> TickHandle;
    /// Disarm a tick that has not fired yet. Unknown handles are ignored.
    fn cancel_tick(&mut self, handle: TickHandle);
}

// ============================================================================
// WINDOW TICKS
// ============================================================================

/// Ticks delivered as `WindowEvent::RedrawRequested`.
pub struct WindowTicks {
    window: Arc<Window>,
    armed: Option<TickHandle>,
    next_id: u64,
}

impl WindowTicks {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window, armed: None, next_id: 0 }
    }

    /// Take the armed tick when a redraw arrives. `None` means the redraw
    /// came from something else (resize, egui repaint) and no loop is waiting.
    pub fn take_fired(&mut self) -> Option<TickHandle> {
        self.armed.take()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl TickScheduler for WindowTicks {
    fn request_tick(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.armed = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.armed == Some(handle) {
            self.armed = None;
        }
    }
}

// ============================================================================
// MANUAL TICKS (tests)
// ============================================================================

#[cfg(test)]
#[derive(Default)]
pub struct ManualTicks {
    armed: Vec<TickHandle>,
    next_id: u64,
}

#[cfg(test)]
impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the oldest armed tick, as a display refresh would.
    pub fn fire(&mut self) -> Option<TickHandle> {
        if self.armed.is_empty() {
            None
        } else {
            Some(self.armed.remove(0))
        }
    }

    pub fn armed(&self) -> usize {
        self.armed.len()
    }
}

#[cfg(test)]
impl TickScheduler for ManualTicks {
    fn request_tick(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.armed.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.armed.retain(|h| *h != handle);
    }
}

// ============================================================================
// ANIMATION LOOP
// ============================================================================

/// Self re-arming frame loop that turns ticks into frame deltas.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    pending: Option<TickHandle>,
    last_tick: Option<Duration>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start(&mut self, ticks: &mut dyn TickScheduler) {
        if self.pending.is_none() {
            self.pending = Some(ticks.request_tick());
            self.last_tick = None;
        }
    }

    /// Handle a fired tick and re-arm. Returns the elapsed seconds since the
    /// previous tick, or `None` if `handle` is not the tick this loop armed.
    ///
    /// The first tick after `start` reports 0. Without a clock reading the
    /// loop falls back to `FALLBACK_FRAME_DT`.
    pub fn on_tick(
        &mut self,
        handle: TickHandle,
        now: Option<Duration>,
        ticks: &mut dyn TickScheduler,
    ) -> Option<f32> {
        if self.pending != Some(handle) {
            return None;
        }

        let dt = match now {
            Some(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.saturating_sub(last).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_tick = Some(now);
                dt
            }
            None => FALLBACK_FRAME_DT,
        };

        self.pending = Some(ticks.request_tick());
        Some(dt)
    }

    pub fn stop(&mut self, ticks: &mut dyn TickScheduler) {
        if let Some(handle) = self.pending.take() {
            ticks.cancel_tick(handle);
        }
        self.last_tick = None;
    }
}
