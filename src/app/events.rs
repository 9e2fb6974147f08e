use crossterm::event::Event;
use crate::app::{ArtworkState, DisplaySlots};

pub enum AppEvent {
    Input(Event),
    Render(DisplaySlots),
    Helper(String),
    /// Artwork download finished for the given URL
    ArtworkUpdate(String, ArtworkState),
    Tick,
}
