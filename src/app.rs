//! Window, OpenGL context and the frame loop.
//!
//! The window comes from [winit], the context and surface from [glutin].
//! Once the platform resumes the application, a [`Running`] bundle is built
//! holding the scene and everything it depends on; dropping that bundle
//! releases the GL objects while the context is still current.
//!
//! [winit]: https://docs.rs/winit
//! [glutin]: https://docs.rs/glutin

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::driver::{Driver, GlowDriver};
use crate::renderer::Renderer;
use crate::scene::Scene;

/// Open the window and draw until it is closed.
///
/// # Errors
///
/// Returns an error if the event loop, window, GL context or scene cannot be
/// created.
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: FrameLoop::Pending,
        failure: None,
    };
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

enum FrameLoop {
    /// Waiting for the platform to allow window creation.
    Pending,
    Running(Box<Running>),
    Terminated,
}

struct App {
    config: AppConfig,
    state: FrameLoop,
    failure: Option<anyhow::Error>,
}

/// Everything alive while frames are being drawn.
struct Running {
    // GL objects first: fields drop in declaration order and the context
    // must still exist when they are released.
    scene: Scene<GlowDriver>,
    renderer: Renderer<GlowDriver>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl Running {
    fn create(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| anyhow!("failed to create window: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let display = gl_config.display();
        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                config.gl.major,
                config.gl.minor,
            ))))
            .build(raw_window_handle);

        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }
            .with_context(|| {
                format!(
                    "failed to create OpenGL {}.{} core context",
                    config.gl.major, config.gl.minor
                )
            })?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("window has no native handle")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .context("failed to create window surface")?;
        let context = not_current
            .make_current(&surface)
            .context("failed to make OpenGL context current")?;

        let interval = if config.window.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
        };
        // SAFETY: `context` is current on this thread, and `Running` keeps it
        // alive for as long as the scene and renderer holding the driver.
        let driver = Arc::new(unsafe { GlowDriver::new(gl) });
        log::info!("OpenGL {}", driver.version());

        let size = window.inner_size();
        let renderer = Renderer::new(Arc::clone(&driver));
        renderer.set_clear_color(config.clear_color);
        renderer.set_viewport(size.width, size.height);

        let scene = Scene::new(&driver, &config.shader_path, [size.width, size.height])
            .with_context(|| format!("failed to build scene from {}", config.shader_path.display()))?;

        Ok(Self {
            scene,
            renderer,
            surface,
            context,
            window,
        })
    }

    fn frame(&mut self) {
        self.renderer.clear();
        self.scene.render(&self.renderer);

        self.window.pre_present_notify();
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            log::error!("failed to swap buffers: {e}");
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        self.surface.resize(&self.context, w, h);
        self.renderer.set_viewport(width, height);
        self.scene.resize(width, height);
    }
}

/// Prefer the config with the fewest samples; the scene needs no MSAA.
///
/// # Panics
///
/// Panics if the display offers no configs at all, which glutin reports as
/// an error before calling the picker.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .min_by_key(GlConfig::num_samples)
        .expect("display offered no GL configs")
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.state, FrameLoop::Pending) {
            return;
        }

        match Running::create(event_loop, &self.config) {
            Ok(running) => {
                running.window.request_redraw();
                self.state = FrameLoop::Running(Box::new(running));
            }
            Err(e) => {
                self.failure = Some(e);
                self.state = FrameLoop::Terminated;
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let FrameLoop::Running(running) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.state = FrameLoop::Terminated;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => running.resize(size.width, size.height),
            WindowEvent::RedrawRequested => running.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let FrameLoop::Running(running) = &self.state {
            running.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.state = FrameLoop::Terminated;
    }
}
