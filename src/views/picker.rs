use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, PickerKind};
use crate::catalog::REGIONS;
use crate::help::picker_help;
use crate::keys::picker_keymap;
use crate::views::common::centered_rect;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(picker) = &app.picker else {
        return;
    };

    let theme = &app.theme;

    let popup_width = 40.min(area.width.saturating_sub(4));
    let popup_height = 16.min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Options
        Constraint::Length(1), // Help line
    ])
    .split(popup_area);

    let items: Vec<ListItem> = match picker.kind {
        PickerKind::Region => REGIONS
            .iter()
            .map(|r| ListItem::new(format!("{} ({})", r.name, r.code)))
            .collect(),
        PickerKind::Category => picker
            .kind
            .options()
            .into_iter()
            .map(ListItem::new)
            .collect(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(picker.kind.title()),
        )
        .highlight_style(theme.selection_style())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(picker.selected));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let help = Paragraph::new(picker_help().format(&picker_keymap())).style(theme.dim_style());
    frame.render_widget(help, chunks[1]);
}
