//! Wandervox Viewer
//!
//! Walks and flies through streamed sparse voxel worlds loaded from a URL or
//! a file dropped onto the window.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p wandervox-viewer -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `-w, --world <URL>`: World to load at startup
//! - `--menu <NAME=URL>`: Add a world to the digit-key menu (repeatable)
//! - `--render-radius <N>`: Streaming radius in chunks (default: 10)
//! - `--auto-stream`: Re-anchor streaming around the player every tick
//! - `--no-drop`: Ignore files dropped onto the window
//! - `-h, --help`: Print help message
//!
//! ## Controls
//!
//! W/A/S/D move, Shift runs, mouse looks, E toggles walk/fly, the scroll
//! wheel sets the base speed, and digit keys pick menu worlds.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;
mod config;

use anyhow::bail;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::Viewer;
use crate::config::{Config, WorldEntry};

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = parse_args(std::env::args().skip(1))?;
    info!("Wandervox viewer starting...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut viewer = Viewer::new(config);
    event_loop.run_app(&mut viewer)?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-w" | "--world" => {
                let Some(url) = args.next() else {
                    bail!("{arg} expects a URL");
                };
                config.initial_world_url = Some(url);
            }
            "--menu" => {
                let Some(entry) = args.next() else {
                    bail!("--menu expects NAME=URL");
                };
                let Some((name, url)) = entry.split_once('=') else {
                    bail!("--menu expects NAME=URL, got {entry:?}");
                };
                config.world_menu.push(WorldEntry {
                    name: name.to_string(),
                    url: url.to_string(),
                });
            }
            "--render-radius" => {
                let Some(value) = args.next() else {
                    bail!("--render-radius expects a number");
                };
                config.render_radius = value.parse()?;
            }
            "--auto-stream" => config.auto_update_render_radius = true,
            "--no-drop" => config.enable_drag_and_drop = false,
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    Ok(config)
}

fn print_help() {
    eprintln!(
        "Wandervox Viewer

USAGE:
    cargo run -p wandervox-viewer -- [OPTIONS]

OPTIONS:
    -w, --world <URL>       World to load at startup
    --menu <NAME=URL>       Add a world to the digit-key menu (repeatable)
    --render-radius <N>     Streaming radius in chunks (default: 10)
    --auto-stream           Re-anchor streaming around the player every tick
    --no-drop               Ignore files dropped onto the window
    -h, --help              Print this help message

CONTROLS:
    W A S D                 Move
    Shift                   Run
    Mouse                   Look
    E                       Walk/Fly
    Wheel                   Set speed
    1-9                     Load menu world

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        parse_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_world_and_radius() {
        let config = parse(&["--world", "http://example.com/a.bin", "--render-radius", "6"])
            .unwrap();
        assert_eq!(
            config.initial_world_url.as_deref(),
            Some("http://example.com/a.bin")
        );
        assert_eq!(config.render_radius, 6);
    }

    #[test]
    fn parses_menu_entries_in_order() {
        let config = parse(&["--menu", "Museum=http://a/1.bin", "--menu", "Bedroom=http://a/2.bin"])
            .unwrap();
        assert_eq!(config.world_menu.len(), 2);
        assert_eq!(config.world_menu[0].name, "Museum");
        assert_eq!(config.world_menu[1].url, "http://a/2.bin");
    }

    #[test]
    fn rejects_unknown_flags_and_bad_menu_entries() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--menu", "no-equals-sign"]).is_err());
        assert!(parse(&["--world"]).is_err());
    }

    #[test]
    fn flags_toggle_streaming_and_drop() {
        let config = parse(&["--auto-stream", "--no-drop"]).unwrap();
        assert!(config.auto_update_render_radius);
        assert!(!config.enable_drag_and_drop);
    }
}
