//! The winit host driving the scene.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};
use wandervox_app::{Scene, SceneConfig};
use wandervox_input::DesktopInput;
use wandervox_loader::WorldSource;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::Config;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

/// Per-second frame counter, logged rather than drawn.
struct FpsCounter {
    count: u32,
    last_tick: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            count: 0,
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self, now: Instant) {
        self.count += 1;
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = (self.count as f32 / elapsed).round();
            debug!(fps, "frame rate");
            self.count = 0;
            self.last_tick = now;
        }
    }
}

/// Viewer application state.
pub struct Viewer {
    config: Config,
    window: Option<Window>,
    input: DesktopInput,
    scene: Scene,
    clock: Option<Instant>,
    fps: FpsCounter,
}

impl Viewer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let scene = Scene::new(&SceneConfig {
            render_radius: config.render_radius,
            auto_update_chunks: config.auto_update_render_radius,
        });
        Self {
            config,
            window: None,
            input: DesktopInput::new(),
            scene,
            clock: None,
            fps: FpsCounter::new(),
        }
    }

    fn load_dropped_file(&mut self, path: &Path) {
        if !self.config.enable_drag_and_drop {
            return;
        }
        match std::fs::read(path) {
            Ok(bytes) => {
                info!(path = %path.display(), "loading dropped world");
                self.scene.load(WorldSource::Bytes(bytes));
            }
            Err(err) => error!(path = %path.display(), "could not read dropped file: {err}"),
        }
    }

    fn select_menu_entry(&mut self, code: KeyCode) {
        let index = match code {
            KeyCode::Digit1 => 0,
            KeyCode::Digit2 => 1,
            KeyCode::Digit3 => 2,
            KeyCode::Digit4 => 3,
            KeyCode::Digit5 => 4,
            KeyCode::Digit6 => 5,
            KeyCode::Digit7 => 6,
            KeyCode::Digit8 => 7,
            KeyCode::Digit9 => 8,
            _ => return,
        };
        if let Some(entry) = self.config.world_menu.get(index) {
            info!(name = %entry.name, "loading world from menu");
            let url = entry.url.clone();
            self.scene.reset_world();
            self.scene.load(WorldSource::Url(url));
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("Wandervox")
            .with_inner_size(LogicalSize::new(WIDTH, HEIGHT));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.scene.on_resize(WIDTH, HEIGHT);
                self.window = Some(window);
                if let Some(url) = self.config.initial_world_url.clone() {
                    self.scene.load(WorldSource::Url(url));
                }
                info!("viewer ready");
            }
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!("close requested");
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.scene.on_resize(size.width, size.height);
            }
            WindowEvent::DroppedFile(path) => {
                let path = path.clone();
                self.load_dropped_file(&path);
            }
            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.state == ElementState::Pressed && !key.repeat {
                    if let PhysicalKey::Code(code) = key.physical_key {
                        self.select_menu_entry(code);
                    }
                }
            }
            _ => {}
        }
        self.input.process_window_event(&event);
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta = self
            .clock
            .replace(now)
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32())
            .min(1.0);
        let snapshot = self.input.on_animation_tick();
        self.scene.on_animation_tick(delta, &snapshot, None);
        self.fps.tick(now);
    }
}
