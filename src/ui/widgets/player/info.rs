use crate::app::App;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let slots = &app.slots;

    // -4 for padding/prefixes
    let max_width = area.width.saturating_sub(4) as usize;

    let mut info_text = vec![Line::from(Span::styled(
        format!("🎵 {}", truncate(&slots.title, max_width.saturating_sub(2))),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))];

    // Artist line stays even when empty so the layout doesn't jump
    info_text.push(if slots.artist.is_empty() {
        Line::default()
    } else {
        Line::from(vec![
            Span::raw("🎤 "),
            Span::styled(
                truncate(&slots.artist, max_width.saturating_sub(2)),
                Style::default().fg(theme.magenta),
            ),
        ])
    });

    if let Some(album) = &slots.album {
        info_text.push(Line::from(vec![
            Span::raw("💿 "),
            Span::styled(
                truncate(album, max_width.saturating_sub(2)),
                Style::default().fg(theme.cyan).add_modifier(Modifier::DIM),
            ),
        ]));
    }

    let device_color = if slots.device_active {
        theme.green
    } else {
        theme.overlay
    };
    info_text.push(Line::from(vec![
        Span::raw("🔊 "),
        Span::styled(
            truncate(&slots.device, max_width.saturating_sub(2)),
            Style::default().fg(device_color),
        ),
    ]));

    let info = Paragraph::new(info_text)
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(Color::Reset)));
    f.render_widget(info, area);
}
