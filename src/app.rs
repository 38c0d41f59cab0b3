use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{camera::ArcCamera, rendering::RenderEngine};
use crate::house::{build_house_scene, CameraAnimator, HouseParams, HouseScene, LightAnimator};

/// Upper bound on a single frame's dt, so a suspended window does not fling
/// the animation forward on resume.
const MAX_FRAME_DT: f32 = 0.25;

pub struct GableApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    house: HouseScene,
    camera: ArcCamera,
    camera_animator: CameraAnimator,
    light_animator: LightAnimator,
    last_frame: Instant,
}

impl GableApp {
    /// Creates the application with the given scene parameters
    ///
    /// Builds the scene and both animators up front; GPU resources follow
    /// once the window exists.
    pub fn new(params: HouseParams) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;

        let house = build_house_scene(&params);
        let camera_animator = CameraAnimator::new(house.layout, params.arc_duration_secs);
        let light_animator = LightAnimator::new(params.light_rotation_secs);

        let initial = camera_animator.current_state();
        let camera = ArcCamera::new(initial.position, initial.look, initial.up, initial.fovy, 1.5);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                house,
                camera,
                camera_animator,
                light_animator,
                last_frame: Instant::now(),
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("Event loop terminated with an error")?;
        Ok(())
    }
}

impl AppState {
    /// One animation step: measured dt, both animators, camera refresh
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now
            .duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame = now;

        let view = self.camera_animator.advance(dt);
        self.camera.set_view(view.position, view.look, view.up);
        self.camera.update_view_proj();

        let directions = self.light_animator.advance(dt);
        self.house.scene.lighting.set_directions(directions);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("gable")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();
            self.camera.resize_projection(width, height);

            let window_clone = window_handle.clone();
            let renderer =
                pollster::block_on(
                    async move { RenderEngine::new(window_clone, width, height).await },
                );

            self.house
                .scene
                .init_gpu_resources(renderer.device(), renderer.queue());

            self.render_engine = Some(renderer);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        if self.render_engine.is_none() {
            return;
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera.resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.update(self.camera.uniform, &self.house.scene.lighting);
                    render_engine.render_frame(&self.house.scene);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
