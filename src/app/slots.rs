use crate::api::PlaybackState;

pub const NOTHING_PLAYING: &str = "Nothing is playing";
pub const UNKNOWN_TRACK: &str = "Unknown track";
pub const NO_ACTIVE_DEVICE: &str = "No active device";
pub const ACTIVE_DEVICE: &str = "Active device";

/// Glyph on the play/pause control. Shows the action a press would take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayGlyph {
    #[default]
    Play,
    Pause,
}

impl PlayGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            PlayGlyph::Play => "▶",
            PlayGlyph::Pause => "⏸",
        }
    }
}

/// Album art slot: either the image at a URL or the placeholder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtSlot {
    #[default]
    Placeholder,
    Image(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position_ms: u64,
    pub duration_ms: u64,
}

/// Contents of every now-playing UI slot 🎵
///
/// Built from scratch for each poll; nothing carries over from the previous render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySlots {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub glyph: PlayGlyph,
    pub art: ArtSlot,
    pub device: String,
    pub progress: Option<Progress>,
    pub volume: Option<u8>,
    pub playing: bool,
    /// Whether the device line names a device that is currently active
    pub device_active: bool,
}

impl Default for DisplaySlots {
    fn default() -> Self {
        Self::from_state(&PlaybackState::default())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl DisplaySlots {
    pub fn from_state(state: &PlaybackState) -> Self {
        if !state.playing {
            return Self {
                title: present(&state.message).unwrap_or(NOTHING_PLAYING).to_string(),
                artist: String::new(),
                album: None,
                glyph: PlayGlyph::Play,
                art: ArtSlot::Placeholder,
                device: present(&state.device).unwrap_or(NO_ACTIVE_DEVICE).to_string(),
                progress: None,
                volume: None,
                playing: false,
                device_active: false,
            };
        }

        let art = match present(&state.image_url) {
            Some(url) => ArtSlot::Image(url.to_string()),
            None => ArtSlot::Placeholder,
        };

        let progress = match (state.progress_ms, state.duration_ms) {
            (Some(position_ms), Some(duration_ms)) if duration_ms > 0 => Some(Progress {
                position_ms: position_ms.min(duration_ms),
                duration_ms,
            }),
            _ => None,
        };

        Self {
            title: present(&state.title).unwrap_or(UNKNOWN_TRACK).to_string(),
            artist: present(&state.artist).unwrap_or_default().to_string(),
            album: present(&state.album).map(str::to_string),
            glyph: PlayGlyph::Pause,
            art,
            device: present(&state.device).unwrap_or(ACTIVE_DEVICE).to_string(),
            progress,
            volume: state.volume.map(|v| v.min(100)),
            playing: true,
            // Older backends omit the flag; playback implies a device
            device_active: state.device_active.unwrap_or(true),
        }
    }
}
