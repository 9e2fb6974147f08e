use crate::api::CommandRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub quit: String,
    pub play_pause: String,
    pub next_track: String,
    pub prev_track: String,
    pub volume_up: String,
    pub volume_down: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            play_pause: "Space".to_string(),
            next_track: "n".to_string(),
            prev_track: "p".to_string(),
            volume_up: "+".to_string(),
            volume_down: "-".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Check for shift modifier if char is uppercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    pub fn is_quit(&self, event: KeyEvent) -> bool {
        self.matches(event, &self.quit)
            || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Command bound to this key, if any
    pub fn command_for(&self, event: KeyEvent, volume_step: i32) -> Option<CommandRequest> {
        if self.matches(event, &self.prev_track) {
            Some(CommandRequest::Previous)
        } else if self.matches(event, &self.next_track) {
            Some(CommandRequest::Next)
        } else if self.matches(event, &self.play_pause) {
            Some(CommandRequest::PlayPause)
        } else if self.matches(event, &self.volume_down) {
            Some(CommandRequest::Volume {
                delta: volume_step.saturating_neg(),
            })
        } else if self.matches(event, &self.volume_up) {
            Some(CommandRequest::Volume { delta: volume_step })
        } else {
            None
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Space" => "Space".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}
