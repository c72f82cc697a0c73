//! Asynchronous world loading for the Wandervox viewer.
//!
//! A world payload travels as an opaque DEFLATE-compressed byte stream. The
//! loader's job is the off-tick half of the pipeline: fetching bytes for URL
//! sources and inflating them, on a background worker so the animation tick
//! never blocks. The inflated payload is handed back through a non-blocking
//! poll; importing it into the world store stays on the caller's thread.

pub mod error;
pub mod pipeline;
pub mod state;

pub use error::LoadError;
pub use pipeline::{deflate, inflate, WorldLoader, WorldSource};
pub use state::LoadState;
