//! Starlet engine: window/context creation, scene management, and the run loop.
//!
//! The [`Engine`] is driven in a fixed order: set the asset root, initialize
//! the window context, load a scene, then run until the window closes.

mod engine;
mod error;
pub mod game_loop;
mod handler;

pub use engine::{Engine, EngineState, WindowSettings};
pub use error::EngineError;
