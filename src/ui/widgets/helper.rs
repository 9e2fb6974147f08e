use crate::app::App;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Advisory line. Renders nothing when there is no advisory.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.helper.is_empty() {
        return;
    }
    let theme = &app.theme;
    let text = truncate(&app.helper, area.width.saturating_sub(4) as usize);
    let line = Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(theme.yellow)),
        Span::styled(text, Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_key_hints(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;
    let key_style = Style::default().fg(theme.overlay).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.overlay);

    let mut spans = Vec::new();
    for (key, label) in [
        (&keys.prev_track, "prev"),
        (&keys.play_pause, "play/pause"),
        (&keys.next_track, "next"),
        (&keys.volume_down, "vol-"),
        (&keys.volume_up, "vol+"),
        (&keys.quit, "quit"),
    ] {
        spans.push(Span::styled(format!(" {} ", keys.display(key)), key_style));
        spans.push(Span::styled(label, label_style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}
