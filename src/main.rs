//! Hyperwire - N-dimensional polytope wireframe renderer
//!
//! Animates plane rotations of hypercubes, simplices, and cross-polytopes
//! in dimensions 2 through 8, projected down to a 3D orbit camera.

mod config;

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use hyperwire_core::{Catalog, RenderSession, Selection};
use hyperwire_input::{SelectionCommand, SelectionInput, ViewController};
use hyperwire_render::{
    camera::OrbitCamera,
    context::RenderContext,
    pipeline::{WirePipeline, WireUniforms},
    store::WireframeStore,
};

use config::AppConfig;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<WirePipeline>,
    store: Option<WireframeStore>,
    /// Selection, animation clock, and catalog ownership
    session: RenderSession,
    camera: OrbitCamera,
    selection_input: SelectionInput,
    view_controller: ViewController,
    last_frame: std::time::Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Build the full object catalog. A bad table row is a data
        // authoring bug; fail before any window exists.
        let catalog = Catalog::built_in()
            .unwrap_or_else(|e| panic!("Failed to build polytope catalog: {}", e));
        log::info!("Catalog ready: {} objects", catalog.len());

        let initial = Selection::new(config.selection.family, config.selection.dimensions);
        let mut session = RenderSession::new(catalog, initial)
            .unwrap_or_else(|e| panic!("Invalid initial selection: {}", e));
        session.set_time_scale(config.animation.time_scale);

        let camera = OrbitCamera::new()
            .with_radius(config.camera.radius)
            .with_height(config.camera.height)
            .with_fov(config.camera.fov);

        let selection_input =
            SelectionInput::new().with_time_scale_step(config.animation.time_scale_step);

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            store: None,
            session,
            camera,
            selection_input,
            view_controller: ViewController::new(),
            last_frame: std::time::Instant::now(),
        }
    }

    fn apply_selection_command(&mut self, command: SelectionCommand) {
        match command {
            SelectionCommand::SetDimension(dimensions) => {
                // A miss keeps the previous object bound; the session
                // already logs it.
                let _ = self.session.set_dimension(dimensions);
            }
            SelectionCommand::NextFamily => {
                let _ = self.session.cycle_family(true);
            }
            SelectionCommand::PrevFamily => {
                let _ = self.session.cycle_family(false);
            }
            SelectionCommand::AdjustTimeScale(delta) => {
                self.session.adjust_time_scale(delta);
                log::info!("time scale {:.2}", self.session.time_scale());
            }
            SelectionCommand::TogglePause => {
                let paused = self.session.toggle_paused();
                log::info!("animation {}", if paused { "paused" } else { "resumed" });
            }
            SelectionCommand::ResetClock => {
                self.session.reset_clock();
            }
        }
    }

    fn update_window_title(&self) {
        if let Some(window) = &self.window {
            let obj = self.session.current();
            let title = format!(
                "{} - {} ({} edges) x{:.1}{}",
                self.config.window.title,
                obj.name(),
                obj.edge_count(),
                self.session.time_scale(),
                if self.session.is_paused() { " [paused]" } else { "" },
            );
            window.set_title(&title);
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        // Frame delta. Cap to avoid a giant first step after focus loss.
        let now = std::time::Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
        self.last_frame = now;

        // 1. Advance the animation clock.
        self.session.advance(dt);

        // Drain accumulated mouse input into the camera.
        self.view_controller.apply(&mut self.camera);

        // 2-3. Resolve the active object and compose its rotation matrix.
        let rotation = self.session.rotation_matrix();
        let obj = self.session.current();
        let selection = self.session.selection();

        let (Some(ctx), Some(pipeline), Some(store)) =
            (&self.render_context, &self.pipeline, &self.store)
        else {
            return;
        };

        // 4. Hand rotation, scale, and camera matrices to the shader.
        let mut edge_uniforms = WireUniforms::default();
        edge_uniforms.view_matrix = self.camera.view_matrix();
        edge_uniforms.projection_matrix = self.camera.projection_matrix(ctx.aspect_ratio());
        edge_uniforms.set_rotation(&rotation);
        edge_uniforms.scale = obj.scale();
        edge_uniforms.projection_depth = self.config.rendering.projection_depth;
        edge_uniforms.color = self.config.rendering.edge_color;

        let mut point_uniforms = edge_uniforms;
        point_uniforms.color = self.config.rendering.point_color;

        pipeline.update_uniforms(&ctx.queue, &edge_uniforms, &point_uniforms);

        // 5. Draw the bound buffer as lines, then as vertex markers.
        let bound = store
            .get(selection.family, selection.dimensions)
            .expect("store is initialized from the same catalog as the session");

        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(ctx.size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Wire Encoder"),
            });

        let bg = &self.config.rendering.background_color;
        pipeline.render(
            &mut encoder,
            &view,
            &bound.vertex_buffer,
            bound.vertex_count,
            bound.dimensions,
            bound.render_edges,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.update_window_title();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(window.clone()));

            // Build the pipeline variants for every registered dimension.
            let mut pipeline =
                WirePipeline::new(&render_context.device, render_context.config.format);
            for obj in self.session.catalog().iter() {
                pipeline.prepare_dimension(&render_context.device, obj.dimensions());
            }
            pipeline.ensure_depth_texture(
                &render_context.device,
                render_context.size.width,
                render_context.size.height,
            );

            // Upload every object's vertex buffer, exactly once. A failure
            // here means the process cannot render at all.
            let store = match WireframeStore::initialize_all(
                &render_context.device,
                self.session.catalog(),
            ) {
                Ok(store) => store,
                Err(e) => {
                    log::error!("Failed to initialize GPU resources: {}", e);
                    std::process::exit(1);
                }
            };

            log::info!(
                "Ready: {} objects uploaded, {} pipeline variants",
                store.len(),
                pipeline.prepared_dimensions()
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.store = Some(store);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(pipeline)) =
                    (&self.render_context, &mut self.pipeline)
                {
                    pipeline.ensure_depth_texture(
                        &ctx.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    if let Some(command) =
                        self.selection_input.process_keyboard(key, event.state)
                    {
                        self.apply_selection_command(command);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.view_controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.view_controller.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.view_controller.process_mouse_motion(delta.0, delta.1);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release GPU geometry exactly once at shutdown.
        if let Some(store) = self.store.take() {
            store.teardown_all();
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Hyperwire");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
