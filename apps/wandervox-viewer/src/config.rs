//! Viewer configuration.

/// One entry in the world menu, selectable with the digit keys.
#[derive(Debug, Clone)]
pub struct WorldEntry {
    pub name: String,
    pub url: String,
}

/// Host configuration assembled from CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// World fetched at startup.
    pub initial_world_url: Option<String>,
    /// Streaming radius in chunks.
    pub render_radius: i32,
    /// Re-anchor chunk streaming around the player's head every tick.
    pub auto_update_render_radius: bool,
    /// Accept world files dropped onto the window.
    pub enable_drag_and_drop: bool,
    /// Worlds selectable with the digit keys.
    pub world_menu: Vec<WorldEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_world_url: None,
            render_radius: 10,
            auto_update_render_radius: false,
            enable_drag_and_drop: true,
            world_menu: Vec::new(),
        }
    }
}
