//! Core game module containing the game state, shared types, events, and constants.

mod components;
mod constants;
mod events;
mod resources;
mod state;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
pub use state::*;
