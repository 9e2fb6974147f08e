use crate::app::App;
use crate::ui::utils::format_time;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render_progress(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let Some(progress) = app.slots.progress else {
        return;
    };

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area)[1];

    let ratio = app.get_current_position_ms() as f64 / progress.duration_ms as f64;

    let width = gauge_area.width as usize;
    let occupied_width = (width as f64 * ratio.clamp(0.0, 1.0)) as usize;
    let fill_style = Style::default().fg(theme.magenta);
    let empty_style = Style::default().fg(theme.surface);

    let mut bar_spans: Vec<Span> = Vec::with_capacity(width);
    for i in 0..width {
        if i < occupied_width {
            if i == occupied_width.saturating_sub(1) {
                // Playhead knob
                bar_spans.push(Span::styled("●", fill_style));
            } else {
                bar_spans.push(Span::styled("━", fill_style));
            }
        } else {
            bar_spans.push(Span::styled("─", empty_style));
        }
    }

    let gauge = Paragraph::new(Line::from(bar_spans))
        .alignment(Alignment::Left)
        .block(Block::default().style(Style::default().bg(Color::Reset)));
    f.render_widget(gauge, gauge_area);
}

pub fn render_time(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    if let Some(progress) = app.slots.progress {
        let time_str = format!(
            "{} / {}",
            format_time(app.get_current_position_ms()),
            format_time(progress.duration_ms)
        );
        let time_label = Paragraph::new(time_str)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay));
        f.render_widget(time_label, area);
    }
}
