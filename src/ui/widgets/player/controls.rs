use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let btn_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let prev_str = "   ⏮   ";
    let next_str = "   ⏭   ";
    let play_str = format!("   {}   ", app.slots.glyph.symbol());

    // Buttons on top, volume bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Volume Bar
        ])
        .split(area);

    let center = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(36),
                Constraint::Fill(1),
            ])
            .split(row)[1]
    };

    let buttons = Line::from(vec![
        Span::styled(prev_str, btn_style),
        Span::raw("   "),
        Span::styled(play_str, btn_style),
        Span::raw("   "),
        Span::styled(next_str, btn_style),
    ]);
    let buttons_widget = Paragraph::new(buttons)
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(buttons_widget, center(chunks[0]));

    if chunks[2].height == 0 {
        return;
    }

    if let Some(volume) = app.slots.volume {
        let bar_width = 20;
        let filled_width = (bar_width as f64 * volume as f64 / 100.0).round() as usize;

        let mut bar_spans = vec![Span::styled("- ", Style::default().fg(theme.overlay))];
        for i in 0..bar_width {
            if i < filled_width {
                bar_spans.push(Span::styled("━", Style::default().fg(theme.magenta)));
            } else {
                bar_spans.push(Span::styled("─", Style::default().fg(theme.surface)));
            }
        }
        bar_spans.push(Span::styled(" +", Style::default().fg(theme.overlay)));
        bar_spans.push(Span::styled(
            format!(" {:>3}%", volume),
            Style::default().fg(theme.overlay),
        ));

        let vol_widget = Paragraph::new(Line::from(bar_spans))
            .alignment(Alignment::Center)
            .block(Block::default());
        f.render_widget(vol_widget, center(chunks[2]));
    }
}
