use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub mod art;
pub mod controls;
pub mod info;
pub mod progress;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    // --- NOW PLAYING CARD ---
    let music_title = Line::from(vec![Span::styled(
        " Now Playing ",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )]);

    let music_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(music_title)
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let inner = music_block.inner(area);
    f.render_widget(music_block, area);

    // Title, artist, album, device
    let info_height = if app.slots.album.is_some() { 4 } else { 3 };
    let m_height = inner.height;

    let constraints = if m_height < 10 {
        // Tiny Mode: no artwork, no gauge
        vec![
            Constraint::Length(0),
            Constraint::Length(m_height.saturating_sub(2).max(1)),
            Constraint::Length(0),
            Constraint::Length(0),
            Constraint::Length(0),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Min(0),              // 0: Artwork (Elastic!)
            Constraint::Length(info_height), // 1: Info
            Constraint::Length(1),           // 2: Spacer
            Constraint::Length(1),           // 3: Gauge
            Constraint::Length(1),           // 4: Time
            Constraint::Length(3),           // 5: Controls
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    if chunks[0].height > 1 {
        art::render(f, chunks[0], app);
    }
    info::render(f, chunks[1], app);
    if chunks[3].height > 0 {
        progress::render_progress(f, chunks[3], app);
    }
    if chunks[4].height > 0 {
        progress::render_time(f, chunks[4], app);
    }
    if chunks[5].height > 0 {
        controls::render(f, chunks[5], app);
    }
}
