use crate::app::{App, ArtworkState};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if area.height < 1 {
        return;
    }

    match &app.artwork {
        ArtworkState::Loaded(image) => {
            let art = Paragraph::new(half_blocks(image, area))
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().bg(Color::Reset)));
            f.render_widget(art, area);
        }
        ArtworkState::Loading => {
            let p = Paragraph::new(vertical_pad("Loading...", area.height))
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().fg(theme.yellow).bg(Color::Reset)));
            f.render_widget(p, area);
        }
        ArtworkState::Failed | ArtworkState::Idle => {
            // Placeholder
            let p = Paragraph::new(vertical_pad("♪\nNo Album\nArt", area.height))
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().fg(theme.overlay).bg(Color::Reset)));
            f.render_widget(p, area);
        }
    }
}

/// Draw `image` with "▀" cells: foreground is the upper pixel, background the lower.
/// The result is centred vertically in `area`.
fn half_blocks(image: &DynamicImage, area: Rect) -> Vec<Line<'static>> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let scaled = image.resize(
        u32::from(area.width),
        u32::from(area.height) * 2,
        FilterType::Triangle,
    );
    let (width, height) = scaled.dimensions();
    let rows = height.div_ceil(2);
    let top_pad = u32::from(area.height).saturating_sub(rows) / 2;

    let mut lines = vec![Line::default(); top_pad as usize];
    for y in (0..height).step_by(2) {
        let cells = (0..width).map(|x| {
            let upper = scaled.get_pixel(x, y);
            let lower = scaled.get_pixel(x, (y + 1).min(height - 1));
            Span::styled(
                "▀",
                Style::default()
                    .fg(Color::Rgb(upper[0], upper[1], upper[2]))
                    .bg(Color::Rgb(lower[0], lower[1], lower[2])),
            )
        });
        lines.push(Line::from(cells.collect::<Vec<_>>()));
    }
    lines
}

fn vertical_pad(text: &str, height: u16) -> String {
    let lines = text.lines().count() as u16;
    let pad = height.saturating_sub(lines) / 2;
    format!("{}{}", "\n".repeat(pad as usize), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_half_blocks_pair_rows_and_centre() {
        // Red over blue, 2x2
        let mut img = RgbImage::new(2, 2);
        for x in 0..2 {
            img.put_pixel(x, 0, Rgb([255, 0, 0]));
            img.put_pixel(x, 1, Rgb([0, 0, 255]));
        }
        let lines = half_blocks(&DynamicImage::ImageRgb8(img), Rect::new(0, 0, 2, 3));

        // One image row, one padding row above it
        assert_eq!(lines.len(), 2);
        assert!(lines[0].spans.is_empty());
        assert_eq!(lines[1].spans.len(), 2);
        let style = lines[1].spans[0].style;
        // Resampling may blend the edge, so only check which colour dominates
        let Some(Color::Rgb(fr, _, fb)) = style.fg else {
            panic!("fg not set: {style:?}");
        };
        let Some(Color::Rgb(br, _, bb)) = style.bg else {
            panic!("bg not set: {style:?}");
        };
        assert!(fr > fb, "upper pixel should be red");
        assert!(bb > br, "lower pixel should be blue");
    }

    #[test]
    fn test_half_blocks_empty_area() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        assert!(half_blocks(&img, Rect::new(0, 0, 0, 5)).is_empty());
    }
}
