use unicode_width::UnicodeWidthChar;

/// Truncate to `max_width` terminal columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out + "…"
}

/// mm:ss
pub fn format_time(ms: u64) -> String {
    format!("{:02}:{:02}", ms / 60000, (ms % 60000) / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Song A", 10), "Song A");
        assert_eq!(truncate("A very long title", 6), "A ver…");
        // Wide characters count double
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(61_500), "01:01");
    }
}
