//! Per-tick locomotion integration.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::{Mat4, Quat, Vec2, Vec3};
use wandervox_core::math::damp;
use wandervox_input::{Handedness, InputSnapshot, XrFrame};
use wandervox_world::VoxelWorld;

use crate::player::Player;
use crate::probe::GroundProbe;

/// Where the camera orientation comes from this tick.
///
/// Desktop/gamepad and immersive sessions are the same controller with two
/// dispatch arms, not two controllers.
#[derive(Clone, Copy)]
pub enum ViewInput<'a> {
    /// Mouse/gamepad look: orientation damps toward accumulated targets.
    Desktop,
    /// Head tracking: orientation is taken from the device, undamped.
    Xr(&'a XrFrame),
}

/// Tuning for the locomotion controller.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionConfig {
    /// Per-second convergence rate of camera yaw/pitch toward their targets.
    pub look_damping: f32,
    /// Per-second convergence rate of position (and the vertical floor
    /// target) toward their targets.
    pub move_damping: f32,
    /// Largest floor-height change a walking step may commit to. Rejecting
    /// anything larger keeps the player off ledges and unconnected floors.
    pub max_floor_step: f32,
    /// Snap-turn increment for immersive sessions.
    pub snap_turn_angle: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            look_damping: 20.0,
            move_damping: 10.0,
            max_floor_step: 2.0,
            snap_turn_angle: FRAC_PI_4,
        }
    }
}

/// World-space camera pose resolved for the current tick.
#[derive(Clone, Copy)]
struct CameraPose {
    position: Vec3,
    rotation: Quat,
}

/// Integrates normalized input into the player, once per animation tick.
#[derive(Debug, Clone, Default)]
pub struct LocomotionController {
    pub config: LocomotionConfig,
}

impl LocomotionController {
    #[must_use]
    pub fn new(config: LocomotionConfig) -> Self {
        Self { config }
    }

    /// Advance the player by one tick.
    ///
    /// Order within the tick is fixed: resolve the camera pose (damped look
    /// or head tracking, including immersive snap turns), integrate movement
    /// with ground probing, damp position toward its targets, then recompute
    /// the head position for the streaming radius logic.
    pub fn tick(
        &self,
        player: &mut Player,
        world: &VoxelWorld,
        input: &InputSnapshot,
        view: ViewInput<'_>,
        delta: f32,
    ) {
        let mut movement = input.movement;
        let mut running = input.run;

        let camera = match view {
            ViewInput::Desktop => {
                if input.look != Vec2::ZERO {
                    player.target_yaw += input.look.x;
                    player.target_pitch =
                        (player.target_pitch + input.look.y).clamp(-FRAC_PI_2, FRAC_PI_2);
                }
                player.camera.yaw = damp(
                    player.camera.yaw,
                    player.target_yaw,
                    self.config.look_damping,
                    delta,
                );
                player.camera.pitch = damp(
                    player.camera.pitch,
                    player.target_pitch,
                    self.config.look_damping,
                    delta,
                );
                CameraPose {
                    position: player.camera_world_position(),
                    rotation: player.camera_world_rotation(),
                }
            }
            ViewInput::Xr(frame) => {
                let mut pose = tracked_camera(player, frame);
                for (hand, controller) in frame.hands() {
                    match hand {
                        Handedness::Left => {
                            if controller.joystick != Vec2::ZERO {
                                movement = controller.joystick;
                                running = controller.buttons.tertiary;
                            }
                        }
                        Handedness::Right => {
                            if controller.buttons.leftwards_down
                                || controller.buttons.rightwards_down
                            {
                                let angle = if controller.buttons.leftwards_down {
                                    self.config.snap_turn_angle
                                } else {
                                    -self.config.snap_turn_angle
                                };
                                snap_turn(player, pose.position, angle);
                                player.target_position = player.position;
                                pose = tracked_camera(player, frame);
                            }
                        }
                    }
                }
                pose
            }
        };

        if movement != Vec2::ZERO {
            let mut forward = camera.rotation * Vec3::NEG_Z;
            if player.is_walking {
                forward.y = 0.0;
                forward = forward.normalize_or_zero();
            }
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let mut direction = right * movement.x + forward * movement.y;
            let length = direction.length();
            if length > 1.0 {
                direction /= length;
            }
            let step = input.speed * if running { 2.0 } else { 1.0 } * delta;
            // Probe where the head would end up, not the feet: the candidate
            // is the camera's world position carried over to the new target.
            let candidate =
                camera.position - player.position + player.target_position + direction * step;
            if player.is_walking {
                if let Some(floor) = GroundProbe::new(world).height(candidate) {
                    if (floor - player.target_floor).abs() < self.config.max_floor_step {
                        player.target_position += direction * step;
                        player.target_floor = floor;
                    }
                }
            } else {
                player.target_position += direction * step;
            }
        }

        if player.is_walking {
            player.target_position.y = damp(
                player.target_position.y,
                player.target_floor,
                self.config.move_damping,
                delta,
            );
        }
        player.position.x = damp(
            player.position.x,
            player.target_position.x,
            self.config.move_damping,
            delta,
        );
        player.position.y = damp(
            player.position.y,
            player.target_position.y,
            self.config.move_damping,
            delta,
        );
        player.position.z = damp(
            player.position.z,
            player.target_position.z,
            self.config.move_damping,
            delta,
        );

        player.head = match view {
            ViewInput::Desktop => player.camera_world_position(),
            ViewInput::Xr(frame) => tracked_camera(player, frame).position,
        };
    }

    /// Flip between walking and flying.
    ///
    /// On entry into walking the floor target snaps to the probed height at
    /// the locomotion goal; an unresolvable probe leaves the vertical target
    /// alone rather than yanking the player anywhere.
    pub fn toggle_walking(&self, player: &mut Player, world: &VoxelWorld) {
        player.is_walking = !player.is_walking;
        if player.is_walking {
            if let Some(floor) = GroundProbe::new(world).height(player.target_position) {
                player.target_floor = floor;
            }
        }
        tracing::debug!(walking = player.is_walking, "locomotion mode toggled");
    }
}

/// Compose the tracked head pose with the player transform.
fn tracked_camera(player: &Player, frame: &XrFrame) -> CameraPose {
    CameraPose {
        position: player.world_from_player().transform_point3(frame.head.position),
        rotation: player.rotation * frame.head.rotation,
    }
}

/// Rotate the player's horizontal frame about the vertical axis through the
/// head's ground projection: translate to the pivot, rotate, translate back.
fn snap_turn(player: &mut Player, camera_world: Vec3, angle: f32) {
    let pivot = Vec3::new(camera_world.x, player.position.y, camera_world.z);
    let spin = Mat4::from_translation(pivot)
        * Mat4::from_rotation_y(angle)
        * Mat4::from_translation(-pivot);
    let (_, rotation, position) = (spin * player.world_from_player())
        .to_scale_rotation_translation();
    player.rotation = rotation;
    player.position = position;
}
