use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub body_area: Rect,
    pub helper_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Helper and footer always get one line each at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Helper
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        helper_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_reserves_bottom_lines() {
        let layout = get_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.body_area.height, 22);
        assert_eq!(layout.helper_area.y, 22);
        assert_eq!(layout.footer_area.y, 23);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 40, 2), Rect::new(0, 1, 10, 2));
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
    }
}
