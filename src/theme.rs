use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
}

impl Default for Theme {
    // Catppuccin Mocha
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
            cyan: Color::Rgb(148, 226, 213),
        }
    }
}

/// On-disk layout: a `[theme]` table. A flat palette is read as well.
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

fn parse_theme(content: &str) -> Option<Theme> {
    toml::from_str::<ThemeFile>(content)
        .map(|file| file.theme)
        .or_else(|_| toml::from_str::<Theme>(content))
        .ok()
}

fn write_default(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = ThemeFile {
        theme: Theme::default(),
    };
    fs::write(path, toml::to_string_pretty(&file)?)?;
    Ok(())
}

/// Load `theme.toml`, creating it with the default palette if missing
pub fn load_theme(path: &Path) -> Theme {
    if !path.exists() {
        if let Err(e) = write_default(path) {
            warn!(path = %path.display(), error = %e, "Could not write default theme");
        }
        return Theme::default();
    }

    match fs::read_to_string(path).ok().as_deref().and_then(parse_theme) {
        Some(theme) => theme,
        None => {
            warn!(path = %path.display(), "Unreadable theme, using default");
            Theme::default()
        }
    }
}
