pub mod layout;
pub mod utils;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if !app.authorized {
        widgets::inert::render(f, area, app);
        return;
    }

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Now playing card
    widgets::player::render(f, main_layout.body_area, app);

    // 3. Advisory line
    widgets::helper::render(f, main_layout.helper_area, app);

    // 4. Key hints
    widgets::helper::render_key_hints(f, main_layout.footer_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlaybackState;
    use crate::app::keys::KeyConfig;
    use crate::app::DisplaySlots;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn test_playing_screen() {
        let mut app = App::new(true, KeyConfig::default(), 10, Theme::default());
        app.apply_render(DisplaySlots::from_state(&PlaybackState {
            playing: true,
            title: Some("Song A".to_string()),
            artist: Some("Artist X".to_string()),
            device: Some("Kitchen".to_string()),
            ..Default::default()
        }));

        let screen = draw(&mut app);
        assert!(screen.contains("Song A"));
        assert!(screen.contains("Artist X"));
        assert!(screen.contains("Kitchen"));
        assert!(screen.contains("⏸"));
        assert!(screen.contains("No Album"));
    }

    #[test]
    fn test_helper_line_is_drawn() {
        let mut app = App::new(true, KeyConfig::default(), 10, Theme::default());
        app.apply_helper("Network error".to_string());
        assert!(draw(&mut app).contains("Network error"));
    }

    #[test]
    fn test_unlinked_screen() {
        let mut app = App::new(false, KeyConfig::default(), 10, Theme::default());
        let screen = draw(&mut app);
        assert!(screen.contains("Spotify is not linked"));
        assert!(!screen.contains("Now Playing"));
    }
}
