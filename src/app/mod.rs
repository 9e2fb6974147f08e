pub mod cli;
pub mod config;
pub mod events;
pub mod keys;
pub mod slots;
pub mod state;
pub mod surface;

pub use slots::{ArtSlot, DisplaySlots, PlayGlyph, Progress};
pub use state::*;
