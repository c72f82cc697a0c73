//! Keyboard/mouse translation into normalized snapshots.

use glam::Vec2;
use tracing::trace;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::button::ButtonState;
use crate::snapshot::InputSnapshot;

/// Radians of look per pixel of mouse motion.
const LOOK_SENSITIVITY: f32 = 0.003;
/// Speed change per scroll line.
const SPEED_WHEEL_STEP: f32 = 0.5;
const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 32.0;
/// Default base speed in world units per second.
const DEFAULT_SPEED: f32 = 6.0;

/// Desktop input translation.
///
/// Feed winit window and device events in as they arrive, then call
/// [`DesktopInput::on_animation_tick`] once per frame to take the normalized
/// snapshot. Taking the snapshot consumes accumulated look deltas and
/// advances button edges.
#[derive(Debug)]
pub struct DesktopInput {
    forward: ButtonState,
    back: ButtonState,
    left: ButtonState,
    right: ButtonState,
    run: ButtonState,
    interact: ButtonState,
    look_accum: Vec2,
    speed: f32,
}

impl Default for DesktopInput {
    fn default() -> Self {
        Self {
            forward: ButtonState::default(),
            back: ButtonState::default(),
            left: ButtonState::default(),
            right: ButtonState::default(),
            run: ButtonState::default(),
            interact: ButtonState::default(),
            look_accum: Vec2::ZERO,
            speed: DEFAULT_SPEED,
        }
    }
}

impl DesktopInput {
    /// Create a translation layer with the default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current base speed (adjusted by the scroll wheel).
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Process a window event. Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state == ElementState::Pressed);
                }
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 20.0) as f32,
                };
                self.adjust_speed(lines);
                true
            }
            _ => false,
        }
    }

    /// Process a device event (raw mouse motion for look).
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_look(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Build the snapshot for this tick and advance edge state.
    pub fn on_animation_tick(&mut self) -> InputSnapshot {
        let axis = |positive: bool, negative: bool| {
            f32::from(i8::from(positive) - i8::from(negative))
        };
        let mut movement = Vec2::new(
            axis(self.right.is_pressed(), self.left.is_pressed()),
            axis(self.forward.is_pressed(), self.back.is_pressed()),
        );
        let length = movement.length();
        if length > 1.0 {
            movement /= length;
        }

        let snapshot = InputSnapshot {
            movement,
            look: self.look_accum,
            run: self.run.is_pressed(),
            interact_down: self.interact.is_just_pressed(),
            speed: self.speed,
        };

        self.look_accum = Vec2::ZERO;
        self.forward.end_frame();
        self.back.end_frame();
        self.left.end_frame();
        self.right.end_frame();
        self.run.end_frame();
        self.interact.end_frame();

        snapshot
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        let button = match code {
            KeyCode::KeyW | KeyCode::ArrowUp => &mut self.forward,
            KeyCode::KeyS | KeyCode::ArrowDown => &mut self.back,
            KeyCode::KeyA | KeyCode::ArrowLeft => &mut self.left,
            KeyCode::KeyD | KeyCode::ArrowRight => &mut self.right,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => &mut self.run,
            KeyCode::KeyE => &mut self.interact,
            _ => return,
        };
        if pressed {
            button.press();
        } else {
            button.release();
        }
    }

    fn add_look(&mut self, dx: f32, dy: f32) {
        // Mouse right turns right (negative yaw), mouse up looks up.
        self.look_accum.x -= dx * LOOK_SENSITIVITY;
        self.look_accum.y -= dy * LOOK_SENSITIVITY;
    }

    fn adjust_speed(&mut self, lines: f32) {
        self.speed = (self.speed + lines * SPEED_WHEEL_STEP).clamp(MIN_SPEED, MAX_SPEED);
        trace!(speed = self.speed, "base speed adjusted");
    }
}
