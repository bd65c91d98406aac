//! Optional hooks around the engine live here.
//!
//! Keep extensions observational and avoid coupling them into core paths.

pub mod observers;

pub use observers::{EngineContext, EngineEvent, EngineObserver};
