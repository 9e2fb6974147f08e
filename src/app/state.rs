use super::keys::KeyConfig;
use crate::api::CommandRequest;
use crossterm::event::KeyEvent;
use super::slots::{ArtSlot, DisplaySlots};
use crate::theme::Theme;
use image::DynamicImage;
use std::time::Instant;

pub enum ArtworkState {
    Idle,
    Loading,
    Loaded(DynamicImage),
    Failed,
}

pub struct App {
    pub theme: Theme,
    pub is_running: bool,
    /// Fixed at startup. When false nothing polls and only quit is handled.
    pub authorized: bool,
    pub slots: DisplaySlots,
    /// Advisory line; empty means nothing to report
    pub helper: String,
    pub artwork: ArtworkState,
    /// URL the current artwork belongs to
    pub artwork_url: Option<String>,
    pub last_render: Option<Instant>,
    pub keys: KeyConfig,
    pub volume_step: i32,
}

impl App {
    pub fn new(authorized: bool, keys: KeyConfig, volume_step: i32, theme: Theme) -> Self {
        Self {
            theme,
            is_running: true,
            authorized,
            slots: DisplaySlots::default(),
            helper: String::new(),
            artwork: ArtworkState::Idle,
            artwork_url: None,
            last_render: None,
            keys,
            volume_step,
        }
    }

    /// Replace every slot. Returns the artwork URL to download when it changed.
    pub fn apply_render(&mut self, slots: DisplaySlots) -> Option<String> {
        let fetch = match &slots.art {
            ArtSlot::Image(url) if self.artwork_url.as_deref() != Some(url.as_str()) => {
                self.artwork = ArtworkState::Loading;
                self.artwork_url = Some(url.clone());
                Some(url.clone())
            }
            ArtSlot::Image(_) => None,
            ArtSlot::Placeholder => {
                self.artwork = ArtworkState::Idle;
                self.artwork_url = None;
                None
            }
        };

        self.slots = slots;
        self.last_render = Some(Instant::now());
        fetch
    }

    /// Handle a key press. Quit always works; commands only once linked.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<CommandRequest> {
        if self.keys.is_quit(key) {
            self.is_running = false;
            return None;
        }
        if !self.authorized {
            return None;
        }
        self.keys.command_for(key, self.volume_step)
    }

    pub fn apply_helper(&mut self, message: String) {
        self.helper = message;
    }

    /// Store a finished download unless the art slot has moved on
    pub fn apply_artwork(&mut self, url: &str, state: ArtworkState) {
        if self.artwork_url.as_deref() == Some(url) {
            self.artwork = state;
        }
    }

    /// Playback position, advanced locally between polls while playing
    pub fn get_current_position_ms(&self) -> u64 {
        let Some(progress) = self.slots.progress else {
            return 0;
        };
        if self.slots.playing {
            if let Some(last_render) = self.last_render {
                let elapsed = last_render.elapsed().as_millis() as u64;
                // Clamp to duration to prevent overshooting
                return (progress.position_ms + elapsed).min(progress.duration_ms);
            }
        }
        progress.position_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlaybackState;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(true, KeyConfig::default(), 10, Theme::default())
    }

    fn with_art(url: Option<&str>) -> DisplaySlots {
        DisplaySlots::from_state(&PlaybackState {
            playing: true,
            title: Some("Song A".to_string()),
            image_url: url.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_artwork_fetched_only_when_url_changes() {
        let mut app = app();
        assert_eq!(app.apply_render(with_art(Some("http://a"))).as_deref(), Some("http://a"));
        assert!(matches!(app.artwork, ArtworkState::Loading));
        assert_eq!(app.apply_render(with_art(Some("http://a"))), None);
        assert_eq!(app.apply_render(with_art(Some("http://b"))).as_deref(), Some("http://b"));
    }

    #[test]
    fn test_placeholder_resets_artwork() {
        let mut app = app();
        app.apply_render(with_art(Some("http://a")));
        assert_eq!(app.apply_render(with_art(None)), None);
        assert!(matches!(app.artwork, ArtworkState::Idle));
        assert!(app.artwork_url.is_none());
    }

    #[test]
    fn test_stale_artwork_download_is_ignored() {
        let mut app = app();
        app.apply_render(with_art(Some("http://a")));
        app.apply_render(with_art(Some("http://b")));

        app.apply_artwork("http://a", ArtworkState::Failed);
        assert!(matches!(app.artwork, ArtworkState::Loading));

        app.apply_artwork("http://b", ArtworkState::Failed);
        assert!(matches!(app.artwork, ArtworkState::Failed));
    }

    #[test]
    fn test_render_replaces_previous_slots() {
        let mut app = app();
        app.apply_render(with_art(None));
        app.apply_render(DisplaySlots::from_state(&PlaybackState::default()));
        assert_eq!(app.slots.title, "Nothing is playing");
        assert!(app.slots.artist.is_empty());
        assert_eq!(app.get_current_position_ms(), 0);
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_unlinked_app_ignores_command_keys() {
        let mut app = App::new(false, KeyConfig::default(), 10, Theme::default());
        for c in ['p', 'n', ' ', '-', '+'] {
            assert_eq!(app.handle_key(press(c)), None, "key {c:?}");
        }
        assert!(app.is_running);

        app.handle_key(press('q'));
        assert!(!app.is_running);
    }

    #[test]
    fn test_linked_app_maps_command_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(press('n')), Some(CommandRequest::Next));
        assert_eq!(
            app.handle_key(press('-')),
            Some(CommandRequest::Volume { delta: -10 })
        );
        assert_eq!(app.handle_key(press('q')), None);
        assert!(!app.is_running);
    }
}
