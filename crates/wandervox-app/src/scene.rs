//! The gameplay scene: world + player + loader, driven once per frame.

use glam::Vec3;
use tracing::{debug, error, info};
use wandervox_input::{InputSnapshot, XrFrame};
use wandervox_loader::{LoadError, LoadState, WorldLoader, WorldSource};
use wandervox_player::{GroundProbe, LocomotionController, Player, ViewInput};
use wandervox_world::{VoxelWorld, WorldMetadata};

/// Longest name/author fragment shown in the world label.
const LABEL_LIMIT: usize = 50;
/// Label shown when a world carries no metadata.
const DEFAULT_LABEL: &str = "wandervox";

/// Scene construction options.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Streaming radius handed to the world store, in chunks.
    pub render_radius: i32,
    /// Re-anchor chunk streaming around the player's head every tick.
    pub auto_update_chunks: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            render_radius: 10,
            auto_update_chunks: false,
        }
    }
}

/// The walkable world scene.
///
/// Owns the voxel store, the player, and the loader. The player is created
/// once and reset in place on each successful load; the store is mutated
/// only by the load path, synchronously within the tick that drains the
/// loader.
pub struct Scene {
    world: VoxelWorld,
    player: Player,
    locomotion: LocomotionController,
    loader: WorldLoader,
    load_state: LoadState,
    world_label: Option<String>,
    auto_update_chunks: bool,
    end_session_requested: bool,
    viewport: (u32, u32),
}

impl Scene {
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            world: VoxelWorld::new(config.render_radius),
            player: Player::new(),
            locomotion: LocomotionController::default(),
            loader: WorldLoader::new(),
            load_state: LoadState::default(),
            world_label: None,
            auto_update_chunks: config.auto_update_chunks,
            end_session_requested: false,
            viewport: (0, 0),
        }
    }

    /// Start loading a world. Resolves asynchronously over later ticks.
    ///
    /// Calls are not mutually exclusive: a second load before the first
    /// resolves races it, and the loading indicator clears on the first
    /// completion.
    pub fn load(&mut self, source: WorldSource) {
        self.load_state.begin();
        self.loader.begin(source);
    }

    /// Drop every chunk, e.g. before loading a menu selection.
    pub fn reset_world(&mut self) {
        self.world.reset();
    }

    /// Advance the scene by one frame.
    ///
    /// Fixed order: apply finished loads, sample input (mode toggle and
    /// session buttons), integrate locomotion, then re-anchor streaming
    /// around the head unless a load is still in progress.
    pub fn on_animation_tick(&mut self, delta: f32, input: &InputSnapshot, xr: Option<&XrFrame>) {
        self.drain_loads();
        self.process_input(input, xr);
        let view = xr.map_or(ViewInput::Desktop, ViewInput::Xr);
        self.locomotion
            .tick(&mut self.player, &self.world, input, view, delta);
        if self.auto_update_chunks && !self.load_state.is_loading {
            self.world.update_chunks(self.player.head);
        }
    }

    /// The host entered an immersive session.
    pub fn on_enter_vr(&mut self) {
        self.end_session_requested = false;
        info!("immersive session started");
    }

    /// The immersive session ended: restore the desktop camera from the
    /// rotation targets and detach tracked controllers.
    pub fn on_exit_vr(&mut self) {
        self.player.restore_desktop_camera();
        self.end_session_requested = false;
        info!("immersive session ended");
    }

    /// The host window changed size.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        debug!(width, height, "viewport resized");
    }

    /// True once per secondary-button press inside an immersive session; the
    /// host reacts by tearing the session down and calling
    /// [`Scene::on_exit_vr`].
    pub fn take_end_session_request(&mut self) -> bool {
        std::mem::take(&mut self.end_session_requested)
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub const fn world(&self) -> &VoxelWorld {
        &self.world
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn world_label(&self) -> Option<&str> {
        self.world_label.as_deref()
    }

    #[must_use]
    pub fn loads_in_flight(&self) -> usize {
        self.loader.in_flight()
    }

    #[must_use]
    pub const fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn process_input(&mut self, input: &InputSnapshot, xr: Option<&XrFrame>) {
        let mut interact = input.interact_down;
        if let Some(frame) = xr {
            for (_, controller) in frame.hands() {
                if controller.buttons.secondary_down {
                    self.end_session_requested = true;
                }
                interact = interact || controller.buttons.primary_down;
            }
        }
        if interact {
            self.locomotion.toggle_walking(&mut self.player, &self.world);
        }
    }

    fn drain_loads(&mut self) {
        let outcomes = self.loader.poll();
        for outcome in outcomes {
            let outcome = outcome.and_then(|payload| {
                self.world
                    .import_chunks(&payload)
                    .map_err(|err| LoadError::Import(err.to_string()))
            });
            self.finish_load(outcome);
        }
    }

    /// The single completion funnel: both arms clear the loading indicator.
    fn finish_load(&mut self, outcome: Result<WorldMetadata, LoadError>) {
        match outcome {
            Ok(meta) => {
                self.apply_spawn(&meta);
                let label = world_label(&meta);
                info!(label = %label, "world loaded");
                self.world_label = Some(label);
                self.load_state.finish(None);
            }
            Err(err) => {
                error!("world load failed: {err}");
                self.load_state.finish(Some(err.to_string()));
            }
        }
    }

    /// Reset the player onto the imported world's spawn point.
    fn apply_spawn(&mut self, meta: &WorldMetadata) {
        self.player.position = Vec3::from_array(meta.spawn);
        if let Some(floor) = GroundProbe::new(&self.world).height(self.player.position) {
            self.player.position.y = floor;
            self.player.target_floor = floor;
            self.player.is_walking = true;
        } else {
            self.player.is_walking = false;
        }
        self.player.target_position = self.player.position;
        self.player.reset_camera();
        self.player.head = self.player.camera_world_position();
    }
}

/// `"name by author"`, either half optional, both trimmed and clipped.
fn world_label(meta: &WorldMetadata) -> String {
    let clip = |value: &Option<String>| {
        value
            .as_deref()
            .map(|v| v.trim().chars().take(LABEL_LIMIT).collect::<String>())
            .filter(|v| !v.is_empty())
    };
    match (clip(&meta.name), clip(&meta.author)) {
        (Some(name), Some(author)) => format!("{name} by {author}"),
        (Some(single), None) | (None, Some(single)) => single,
        (None, None) => DEFAULT_LABEL.to_string(),
    }
}
