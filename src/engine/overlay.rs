// egui integration
// One egui pass per frame on top of the scene pass. The page, the widget
// decorations, dashboards and the F3 stats panel are all built inside run();
// paint() uploads and draws what run() produced.

use std::time::Duration;

pub struct DebugStats {
    pub fps: u32,
    pub frame_time_avg_ms: f32,
    pub frame_time_min_ms: f32,
    pub frame_time_max_ms: f32,
    pub resolution: (u32, u32),
    pub widget: &'static str,
    pub panel: String,
    pub hovered: String,
    pub pending_timers: usize,
}

// ============================================================================
// FRAME TIMER
// ============================================================================

/// Frame-time accumulator for the stats panel. Publishes once per second.
#[derive(Debug, Default)]
pub struct FrameTimer {
    last_frame: Option<Duration>,
    window_start: Duration,
    frames: u32,
    sum_ms: f32,
    min_ms: f32,
    max_ms: f32,
    published: (u32, f32, f32, f32),
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, now: Duration) {
        if let Some(last) = self.last_frame {
            let ms = now.saturating_sub(last).as_secs_f32() * 1000.0;
            if self.frames == 0 {
                self.min_ms = ms;
                self.max_ms = ms;
            } else {
                self.min_ms = self.min_ms.min(ms);
                self.max_ms = self.max_ms.max(ms);
            }
            self.sum_ms += ms;
            self.frames += 1;
        } else {
            self.window_start = now;
        }
        self.last_frame = Some(now);

        if now.saturating_sub(self.window_start) >= Duration::from_secs(1) {
            let avg = if self.frames > 0 { self.sum_ms / self.frames as f32 } else { 0.0 };
            self.published = (self.frames, avg, self.min_ms, self.max_ms);
            self.window_start = now;
            self.frames = 0;
            self.sum_ms = 0.0;
        }
    }

    /// (fps, avg ms, min ms, max ms) for the last complete second.
    pub fn published(&self) -> (u32, f32, f32, f32) {
        self.published
    }
}

// ============================================================================
// OVERLAY
// ============================================================================

/// Output of one egui pass, ready for `Overlay::paint`.
pub struct EguiFrame {
    tris: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    /// How soon egui wants another frame (`Duration::MAX` for never).
    pub repaint_after: Duration,
}

pub struct Overlay {
    pub stats_visible: bool,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(
        window: &winit::window::Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        stats_visible: bool,
    ) -> Self {
        let egui_ctx = egui::Context::default();

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface_format,
            None,  // no depth
            1,     // msaa samples
            false, // no dithering
        );

        Self {
            stats_visible,
            egui_ctx,
            egui_state,
            egui_renderer,
        }
    }

    pub fn context(&self) -> &egui::Context {
        &self.egui_ctx
    }

    pub fn toggle_stats(&mut self) {
        self.stats_visible = !self.stats_visible;
    }

    pub fn handle_window_event(
        &mut self,
        window: &winit::window::Window,
        event: &winit::event::WindowEvent,
    ) -> egui_winit::EventResponse {
        self.egui_state.on_window_event(window, event)
    }

    /// Run one egui pass. Platform output (cursor icon, opened URLs) is
    /// handed to winit before returning.
    pub fn run(
        &mut self,
        window: &winit::window::Window,
        build: impl FnMut(&egui::Context),
    ) -> EguiFrame {
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, build);

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let repaint_after = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|v| v.repaint_delay)
            .unwrap_or(Duration::MAX);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        EguiFrame {
            tris,
            textures_delta: full_output.textures_delta,
            repaint_after,
        }
    }

    /// Draw a prepared egui frame over whatever is already in `view`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
        frame: EguiFrame,
    ) {
        for (id, image_delta) in &frame.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, &frame.tris, screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &frame.tris, screen_descriptor);
        }

        for id in &frame.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

/// F3 stats panel, pinned to the bottom-left corner.
pub fn stats_panel(ctx: &egui::Context, stats: &DebugStats) {
    egui::Area::new(egui::Id::new("debug_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_premultiplied(0, 0, 0, 180))
                .inner_margin(egui::Margin::same(8.0))
                .rounding(4.0)
                .show(ui, |ui: &mut egui::Ui| {
                    ui.style_mut().override_font_id = Some(egui::FontId::monospace(13.0));
                    ui.label(format!("FPS: {}", stats.fps));
                    ui.label(format!(
                        "Frame: {:.2} ms (min: {:.1} | max: {:.1})",
                        stats.frame_time_avg_ms, stats.frame_time_min_ms, stats.frame_time_max_ms
                    ));
                    ui.label(format!(
                        "Resolution: {} x {}",
                        stats.resolution.0, stats.resolution.1
                    ));
                    ui.label(format!("Widget: {}  Panel: {}", stats.widget, stats.panel));
                    ui.label(format!(
                        "Hover: {}  Timers: {}",
                        stats.hovered, stats.pending_timers
                    ));
                });
        });
}
