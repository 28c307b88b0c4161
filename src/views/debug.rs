use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::catalog;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let dim = Style::default().fg(theme.foreground_dim);

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(dim);

    let mut lines = Vec::new();

    let task_count = app.debug.running_tasks.len();
    lines.push(Line::from(vec![
        Span::styled("Tasks: ", dim),
        Span::styled(
            task_count.to_string(),
            Style::default().fg(if task_count > 0 {
                theme.view_count
            } else {
                theme.foreground
            }),
        ),
        Span::styled("  Generation: ", dim),
        Span::styled(app.generation.to_string(), Style::default().fg(theme.foreground)),
        Span::styled("  Filter: ", dim),
        Span::styled(
            format!(
                "{} / {}",
                app.filter.region,
                catalog::category_label(app.filter.category.as_deref())
            ),
            Style::default().fg(theme.foreground),
        ),
    ]));

    for task in &app.debug.running_tasks {
        let elapsed = task.started_at.elapsed();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[{}] ", task.id), dim),
            Span::styled(&task.description, Style::default().fg(theme.foreground)),
            Span::styled(format!(" ({:.1?})", elapsed), Style::default().fg(theme.spinner)),
        ]));
    }

    if !app.debug.running_tasks.is_empty() {
        lines.push(Line::from(""));
    }

    // Newest first, as many as fit
    let available_lines = area.height.saturating_sub(3) as usize;
    let log_lines = available_lines.saturating_sub(app.debug.running_tasks.len() + 1);

    for entry in app.debug.log.iter().rev().take(log_lines) {
        lines.push(Line::from(Span::styled(format!("  {}", entry.message), dim)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
