//! Player state.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Camera height above the player's feet, in world units.
pub const EYE_HEIGHT: f32 = 1.6;

/// The player's camera, local to the player frame.
///
/// `yaw`/`pitch` are the damped actual orientation; the matching targets live
/// on [`Player`]. Roll is always zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Offset from the player's feet.
    pub offset: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Player locomotion state.
///
/// `position` and the camera orientation are continuous: every tick they damp
/// toward `target_position` / `target_yaw` / `target_pitch`, which input and
/// collision logic update instantaneously. Nothing writes the damped values
/// directly except the spawn reset on a successful world load.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// World-space feet position (damped).
    pub position: Vec3,
    /// Horizontal frame orientation; identity until immersive snap-turns
    /// accumulate.
    pub rotation: Quat,
    pub camera: Camera,
    /// Camera world position as of the last tick, consumed by the
    /// chunk-streaming radius logic.
    pub head: Vec3,
    /// Locomotion goal `position` damps toward.
    pub target_position: Vec3,
    /// Floor height the vertical target damps toward while walking.
    pub target_floor: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    /// Walking (ground-constrained) vs. flying.
    pub is_walking: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player standing at the origin, flying, looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        let camera = Camera::default();
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            camera,
            head: camera.offset,
            target_position: Vec3::ZERO,
            target_floor: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            is_walking: false,
        }
    }

    /// Player-to-world transform.
    #[must_use]
    pub fn world_from_player(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Camera world position for the desktop rig.
    #[must_use]
    pub fn camera_world_position(&self) -> Vec3 {
        self.position + self.rotation * self.camera.offset
    }

    /// Camera world orientation for the desktop rig (YXZ euler under the
    /// player frame).
    #[must_use]
    pub fn camera_world_rotation(&self) -> Quat {
        self.rotation * Quat::from_euler(EulerRot::YXZ, self.camera.yaw, self.camera.pitch, 0.0)
    }

    /// Re-seat the desktop camera after an immersive session: canonical eye
    /// offset, orientation snapped to the rotation targets.
    pub fn restore_desktop_camera(&mut self) {
        self.camera.offset = Vec3::new(0.0, EYE_HEIGHT, 0.0);
        self.camera.yaw = self.target_yaw;
        self.camera.pitch = self.target_pitch;
    }

    /// Restore the canonical eye-height camera with zero rotation, and sync
    /// the rotation targets to match.
    pub fn reset_camera(&mut self) {
        self.camera.offset = Vec3::new(0.0, EYE_HEIGHT, 0.0);
        self.camera.yaw = 0.0;
        self.camera.pitch = 0.0;
        self.target_yaw = 0.0;
        self.target_pitch = 0.0;
    }
}
