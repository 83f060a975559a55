// Portfolio with an interactive topic cube
// A scrollable egui page beside a tumbling cube (or orbiting planets). Clicking
// a face opens that topic's dashboard and freezes the motion until it closes.

mod app;
mod config;
mod content;
mod engine;
mod error;
mod ui;

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::{
    event::{ElementState, Event as WinitEvent, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use app::{App, CubeDraw};
use config::{CliArgs, Config};
use engine::CubeFace;
use engine::mesh::{GpuVertex, cube_mesh};
use engine::overlay::Overlay;
use engine::scene::CUBE_HALF_EXTENT;
use engine::scheduler::WindowTicks;
use error::AppError;

// ============================================================================
// UNIFORM DATA
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
}

impl Uniforms {
    fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

// ============================================================================
// RENDER STATE
// ============================================================================

struct State {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    overlay: Overlay,
}

impl State {
    async fn new(
        window: Arc<Window>,
        settings: &Config,
        face_colors: &HashMap<CubeFace, [f32; 4]>,
    ) -> Result<Self, AppError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let (surface_format, alpha_mode) = choose_surface_format(&surface_caps)?;

        let present_mode = if settings.window.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("cube.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[Uniforms::new()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("uniform_bind_group_layout"),
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("uniform_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&uniform_bind_group_layout],
                push_constant_ranges: &[],
            });

        // Back-face culling alone hides the far side of a convex cube, so no
        // depth buffer is needed.
        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[GpuVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let mesh = cube_mesh(CUBE_HALF_EXTENT, |face| {
            face_colors.get(&face).copied().unwrap_or([0.5, 0.5, 0.5, 0.9])
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        let overlay = Overlay::new(&window, &device, surface_format, settings.debug.show_stats);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            render_pipeline,
            vertex_buffer,
            index_buffer,
            num_indices: mesh.index_count() as u32,
            uniform_buffer,
            uniform_bind_group,
            overlay,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Cube viewport in physical pixels, clipped to the surface.
    fn physical_viewport(&self, cube: &CubeDraw) -> Option<(f32, f32, f32, f32)> {
        let ppp = self.overlay.context().pixels_per_point();
        let min = (cube.viewport.min * ppp).max(glam::Vec2::ZERO);
        let max = ((cube.viewport.min + cube.viewport.size) * ppp)
            .min(glam::Vec2::new(self.config.width as f32, self.config.height as f32));
        let size = max - min;
        (size.x >= 1.0 && size.y >= 1.0).then_some((min.x, min.y, size.x, size.y))
    }

    /// Draw one frame. Returns how soon egui asked to be repainted.
    fn render(&mut self, app: &mut App) -> Result<Duration, wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let stats = self
            .overlay
            .stats_visible
            .then(|| app.debug_stats((self.size.width, self.size.height)));

        let mut cube = None;
        let window = self.window.clone();
        let egui_frame = self
            .overlay
            .run(&window, |ctx| cube = app.frame(ctx, stats.as_ref()));

        let viewport = cube.as_ref().and_then(|c| self.physical_viewport(c));
        if let (Some(cube), Some((_, _, w, h))) = (&cube, viewport) {
            let uniforms = Uniforms {
                view_proj: app.camera().view_projection(w / h).to_cols_array_2d(),
                model: Mat4::from_quat(cube.orientation).to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ui::theme::CLEAR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some((x, y, w, h)) = viewport {
                render_pass.set_viewport(x, y, w, h, 0.0, 1.0);
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
            }
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: self.overlay.context().pixels_per_point(),
        };
        let repaint_after = egui_frame.repaint_after;
        self.overlay.paint(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            &screen_descriptor,
            egui_frame,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(repaint_after)
    }
}

/// Prefer an sRGB format; otherwise take what the adapter lists first.
fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), AppError> {
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or(AppError::NoSurfaceFormat)?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or(AppError::NoSurfaceFormat)?;
    Ok((format, alpha_mode))
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(config::default_config_dir);
    let (mut settings, source) = Config::open(&config_dir)?;
    settings.apply_cli_overrides(&args);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&settings.debug.log_level),
    )
    .init();
    log::info!("{source}");

    let event_loop = EventLoop::new()?;

    let window_attributes = Window::default_attributes()
        .with_title(settings.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ));

    let window = Arc::new(event_loop.create_window(window_attributes)?);
    log::info!(
        "Window created ({} x {})",
        settings.window.width,
        settings.window.height
    );

    let mut app = App::new(&settings)?;
    let face_colors: HashMap<CubeFace, [f32; 4]> = CubeFace::ALL
        .into_iter()
        .map(|face| (face, app.face_color(face)))
        .collect();
    let mut state = pollster::block_on(State::new(window.clone(), &settings, &face_colors))?;

    let mut ticks = WindowTicks::new(window.clone());
    app.mount(&mut ticks);

    event_loop.run(move |event, control_flow| {
        match event {
            WinitEvent::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = state.overlay.handle_window_event(&window, event);
                if response.repaint {
                    window.request_redraw();
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.unmount(&mut ticks);
                        control_flow.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(code),
                                repeat: false,
                                ..
                            },
                        ..
                    } if !response.consumed => match code {
                        KeyCode::Escape => {
                            app.close_panel();
                            window.request_redraw();
                        }
                        KeyCode::F3 => {
                            state.overlay.toggle_stats();
                            window.request_redraw();
                        }
                        _ => {}
                    },
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        app.on_redraw(ticks.take_fired(), &mut ticks);
                        match state.render(&mut app) {
                            Ok(repaint_after) => {
                                if repaint_after.is_zero() {
                                    window.request_redraw();
                                }
                            }
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                state.resize(state.size)
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("GPU out of memory");
                                app.unmount(&mut ticks);
                                control_flow.exit();
                            }
                            Err(e) => log::warn!("{:?}", e),
                        }
                    }
                    _ => {}
                }
            }
            WinitEvent::AboutToWait => {
                // The animation loop keeps a redraw armed while mounted; without
                // one, sleep until the next timer is due.
                let flow = match (ticks.is_armed(), app.next_wakeup()) {
                    (true, _) => {
                        window.request_redraw();
                        ControlFlow::Wait
                    }
                    (false, Some(at)) if at <= Instant::now() => {
                        window.request_redraw();
                        ControlFlow::Wait
                    }
                    (false, Some(at)) => ControlFlow::WaitUntil(at),
                    (false, None) => ControlFlow::Wait,
                };
                control_flow.set_control_flow(flow);
            }
            _ => {}
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_without_formats_is_an_error() {
        let caps = wgpu::SurfaceCapabilities::default();
        assert!(matches!(choose_surface_format(&caps), Err(AppError::NoSurfaceFormat)));

        let caps = wgpu::SurfaceCapabilities {
            formats: vec![wgpu::TextureFormat::Bgra8Unorm],
            ..Default::default()
        };
        assert!(matches!(choose_surface_format(&caps), Err(AppError::NoSurfaceFormat)));
    }

    #[test]
    fn test_surface_prefers_srgb() {
        let caps = wgpu::SurfaceCapabilities {
            formats: vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        };
        let (format, alpha) = choose_surface_format(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(alpha, wgpu::CompositeAlphaMode::Opaque);

        let caps = wgpu::SurfaceCapabilities {
            formats: vec![wgpu::TextureFormat::Rgba8Unorm],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        };
        assert_eq!(choose_surface_format(&caps).unwrap().0, wgpu::TextureFormat::Rgba8Unorm);
    }
}
