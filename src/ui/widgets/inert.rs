use crate::app::App;
use crate::ui::layout::centered;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Shown when the kiosk is not linked to an account
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay))
        .style(Style::default().bg(Color::Reset));

    let text = vec![
        Line::from(Span::styled(
            "Spotify is not linked",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Sign in to Spotify on the kiosk server, then restart.",
            Style::default().fg(theme.overlay),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.quit)),
                Style::default().fg(theme.overlay).add_modifier(Modifier::BOLD),
            ),
            Span::styled("quit", Style::default().fg(theme.overlay)),
        ]),
    ];

    let card = centered(area, 60, 6);
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        card,
    );
}
