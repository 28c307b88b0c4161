use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::ResolvedTheme;
use crate::time::format_relative;

/// Lists older than this are shown undimmed to hint at a refresh.
const STALE_AFTER_SECS: u64 = 300;

/// Render an error message in a bordered block.
pub fn render_error(frame: &mut Frame, error: &str, theme: &ResolvedTheme, area: Rect) {
    let widget = Paragraph::new(error).style(theme.error_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title("Error"),
    );
    frame.render_widget(widget, area);
}

/// Render a line with an optional right-aligned timestamp showing when data was fetched.
/// If `fetched_at` is Some, shows "loaded Xm ago" (dimmed if <5m, normal if >=5m).
pub fn render_with_timestamp(
    frame: &mut Frame,
    content_line: Line,
    fetched_at: Option<u64>,
    now: DateTime<Utc>,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let Some(ts) = fetched_at else {
        frame.render_widget(Paragraph::new(content_line), area);
        return;
    };

    let age_text = format!("loaded {}", format_relative(ts, now));
    let age_secs = (now.timestamp().max(0) as u64).saturating_sub(ts);
    let style = if age_secs >= STALE_AFTER_SECS {
        Style::default().fg(theme.foreground)
    } else {
        theme.dim_style()
    };
    let timestamp_span = Span::styled(age_text, style);
    let timestamp_width = timestamp_span.width() as u16;
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(timestamp_width)]).split(area);
    frame.render_widget(Paragraph::new(content_line), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(timestamp_span)), chunks[1]);
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Cuts `text` to at most `max_width` display columns, ending in "…" when shortened.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
