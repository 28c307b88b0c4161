//! The trending screen: filter header, top-3 podium, ranked grid and status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Phase};
use crate::catalog;
use crate::format::format_views;
use crate::help::trending_help;
use crate::keys::{global_keymap, trending_keymap};
use crate::layout::{Medal, Podium, PodiumSlot, Ranked, RankedLayout};
use crate::theme::ResolvedTheme;
use crate::views::common::{centered_rect, render_error, render_with_timestamp, truncate};
use crate::views::spinner::spinner_frame;
use crate::views::status_bar::StatusBar;

const PODIUM_HEIGHT: u16 = 9;
/// Side cards sit this many rows lower than the center card.
const PODIUM_STEP: u16 = 2;
const MAX_TITLE_LINES: usize = 3;
const GRID_CARD_HEIGHT: u16 = 5;
const GRID_CARD_MIN_WIDTH: u16 = 32;
const GRID_MAX_COLUMNS: usize = 4;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Filter header
        Constraint::Min(0),    // Podium and grid
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled("Trending in ", theme.dim_style()),
        Span::styled(
            catalog::region_label(&app.filter.region),
            theme.active_tab_style(),
        ),
        Span::styled("  Category: ", theme.dim_style()),
        Span::styled(
            catalog::category_label(app.filter.category.as_deref()),
            theme.active_tab_style(),
        ),
    ];

    if app.load.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            spinner_frame(app.load.loading_start),
            theme.spinner_style(),
        ));
    }

    render_with_timestamp(
        frame,
        Line::from(spans),
        app.load.fetched_at,
        app.clock.now(),
        theme,
        area,
    );
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if app.phase() == Phase::Loading {
        render_placeholder(frame, "Loading trending videos...", theme, area);
        return;
    }

    let layout = app.layout();
    if layout.is_empty() {
        match &app.load.error {
            Some(err) => render_error(frame, &format!("{err} Press r to retry."), theme, area),
            None => render_placeholder(frame, "No trending videos for this filter.", theme, area),
        }
        return;
    }

    let grid_area = match &layout.podium {
        Some(podium) => {
            let chunks =
                Layout::vertical([Constraint::Length(PODIUM_HEIGHT), Constraint::Min(0)])
                    .split(area);
            render_podium(frame, podium, app.selected_index, theme, chunks[0]);
            chunks[1]
        }
        None => area,
    };

    if layout.grid.is_empty() || grid_area.height == 0 {
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(grid_area);
    let heading = Line::from(Span::styled(
        layout.grid_heading(),
        theme.video_title_style().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(heading), chunks[0]);
    render_grid(frame, &layout, app.selected_index, theme, chunks[1]);
}

fn render_placeholder(frame: &mut Frame, text: &str, theme: &ResolvedTheme, area: Rect) {
    let rect = centered_rect(area.width, 1, area);
    let widget = Paragraph::new(text)
        .style(theme.dim_style())
        .alignment(Alignment::Center);
    frame.render_widget(widget, rect);
}

fn render_podium(
    frame: &mut Frame,
    podium: &Podium,
    selected: usize,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (column, (slot, ranked)) in columns.iter().zip(podium.slots()) {
        let card_area = match slot {
            PodiumSlot::Center => *column,
            PodiumSlot::Left | PodiumSlot::Right => {
                Layout::vertical([Constraint::Length(PODIUM_STEP), Constraint::Min(0)])
                    .split(*column)[1]
            }
        };
        render_podium_card(frame, &ranked, ranked.index == selected, theme, card_area);
    }
}

fn render_podium_card(
    frame: &mut Frame,
    ranked: &Ranked,
    is_selected: bool,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let medal_color = Medal::for_rank(ranked.rank)
        .map(|m| theme.medal_color(m))
        .unwrap_or(theme.primary);
    let badge = Medal::for_rank(ranked.rank)
        .map(|m| m.badge().to_string())
        .unwrap_or_else(|| format!("#{}", ranked.rank));

    let block = card_block(is_selected, Style::default().fg(medal_color), theme).title(
        Span::styled(
            format!(" {badge} "),
            Style::default()
                .fg(medal_color)
                .add_modifier(Modifier::BOLD),
        ),
    );
    let inner = block.inner(area);
    let width = inner.width as usize;

    // Channel and views always get a row each; the title takes what remains.
    let title_rows = (inner.height as usize).saturating_sub(2).min(MAX_TITLE_LINES);
    let mut lines: Vec<Line> = wrap_title(&ranked.video.title, width, title_rows)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, theme.video_title_style())))
        .collect();
    lines.push(channel_line(ranked, width, theme));
    lines.push(views_line(ranked, width, theme));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_grid(
    frame: &mut Frame,
    layout: &RankedLayout,
    selected: usize,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let columns = grid_columns(area.width);
    let visible_rows = (area.height / GRID_CARD_HEIGHT).max(1) as usize;
    let first_row = layout
        .grid_position(selected)
        .map(|pos| (pos / columns + 1).saturating_sub(visible_rows))
        .unwrap_or(0);

    let row_areas =
        Layout::vertical(vec![Constraint::Length(GRID_CARD_HEIGHT); visible_rows]).split(area);

    for (row_area, row) in row_areas
        .iter()
        .zip(layout.grid.chunks(columns).skip(first_row))
    {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (cell, ranked) in cells.iter().zip(row) {
            render_grid_card(frame, ranked, ranked.index == selected, theme, *cell);
        }
    }
}

fn render_grid_card(
    frame: &mut Frame,
    ranked: &Ranked,
    is_selected: bool,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let block = card_block(is_selected, theme.border_style(), theme).title(Span::styled(
        format!(" #{} ", ranked.rank),
        theme.dim_style(),
    ));
    let width = block.inner(area).width as usize;

    let lines = vec![
        Line::from(Span::styled(
            truncate(&ranked.video.title, width),
            theme.video_title_style(),
        )),
        channel_line(ranked, width, theme),
        views_line(ranked, width, theme),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn card_block<'a>(is_selected: bool, border: Style, theme: &ResolvedTheme) -> Block<'a> {
    let block = Block::default().borders(Borders::ALL);
    if is_selected {
        block
            .border_type(BorderType::Thick)
            .border_style(theme.active_tab_style())
    } else {
        block.border_style(border)
    }
}

fn channel_line<'a>(ranked: &Ranked, width: usize, theme: &ResolvedTheme) -> Line<'a> {
    Line::from(Span::styled(
        truncate(&ranked.video.channel_title, width),
        Style::default().fg(theme.video_channel),
    ))
}

fn views_line<'a>(ranked: &Ranked, width: usize, theme: &ResolvedTheme) -> Line<'a> {
    let text = format!("{} views", format_views(&ranked.video.view_count));
    Line::from(Span::styled(
        truncate(&text, width),
        Style::default().fg(theme.view_count),
    ))
}

/// Word-wraps `title` into at most `max_lines` lines, marking the cut with "…".
fn wrap_title(title: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(title, width);
    let mut lines: Vec<String> = wrapped
        .iter()
        .take(max_lines)
        .map(|l| l.to_string())
        .collect();
    if wrapped.len() > max_lines
        && let Some(last) = lines.last_mut()
    {
        *last = truncate(&format!("{last} …"), width);
    }
    lines
}

fn grid_columns(width: u16) -> usize {
    ((width / GRID_CARD_MIN_WIDTH) as usize).clamp(1, GRID_MAX_COLUMNS)
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let keymap = global_keymap().extend(trending_keymap());
    let help_text = trending_help().format(&keymap);
    let label = catalog::region_label(&app.filter.region);
    let loading_text = format!("{} Loading...", spinner_frame(app.load.loading_start));

    let mut bar = StatusBar::new(&app.theme)
        .label(&label)
        .error(app.load.error.as_deref())
        .help(&help_text);
    if app.load.loading {
        bar = bar.loading(&loading_text);
    }
    if !app.videos.is_empty() {
        bar = bar.position(app.selected_index + 1, app.videos.len());
    }
    bar.render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FilterState;
    use crate::test_utils::{TestAppBuilder, VideoBuilder, sample_videos};
    use crate::views::tests::render_to_string;

    fn render_app(app: &App, width: u16, height: u16) -> String {
        render_to_string(width, height, |frame| {
            render(frame, app, frame.area());
        })
    }

    /// (row, column) of the first occurrence of `needle`.
    fn locate(output: &str, needle: &str) -> Option<(usize, usize)> {
        output.lines().enumerate().find_map(|(row, line)| {
            line.find(needle)
                .map(|byte| (row, line[..byte].chars().count()))
        })
    }

    #[test]
    fn loading_shows_placeholder_instead_of_list() {
        let app = TestAppBuilder::new()
            .with_videos(sample_videos(5))
            .loading()
            .build();
        let output = render_app(&app, 100, 30);

        assert!(output.contains("Loading trending videos..."));
        assert!(!output.contains("1st"));
        assert!(!output.contains("Big Label Records"));
    }

    #[test]
    fn podium_places_first_in_the_center_and_raised() {
        let app = TestAppBuilder::new().with_videos(sample_videos(5)).build();
        let output = render_app(&app, 100, 30);

        let (first_row, first_col) = locate(&output, "1st").expect("1st badge");
        let (second_row, second_col) = locate(&output, "2nd").expect("2nd badge");
        let (third_row, third_col) = locate(&output, "3rd").expect("3rd badge");

        assert!(second_col < first_col && first_col < third_col);
        assert!(first_row < second_row);
        assert_eq!(second_row, third_row);
    }

    #[test]
    fn grid_holds_ranks_four_and_up() {
        let app = TestAppBuilder::new().with_videos(sample_videos(5)).build();
        let output = render_app(&app, 100, 30);

        assert!(output.contains("Other trending videos"));
        assert!(output.contains("#4"));
        assert!(output.contains("#5"));
        assert!(!output.contains("#1 "));
        assert!(output.contains("How Transistors Actually Work"));
    }

    #[test]
    fn view_counts_are_grouped() {
        let app = TestAppBuilder::new().with_videos(sample_videos(4)).build();
        let output = render_app(&app, 100, 30);

        assert!(output.contains("48,213,977 views"));
        assert!(output.contains("1,204,556 views"));
    }

    #[test]
    fn unparseable_view_count_is_shown_verbatim() {
        let videos = vec![VideoBuilder::new().views("n/a").build()];
        let app = TestAppBuilder::new().with_videos(videos).build();
        let output = render_app(&app, 100, 20);

        assert!(output.contains("n/a views"));
    }

    #[test]
    fn short_list_renders_in_grid_without_podium() {
        let app = TestAppBuilder::new().with_videos(sample_videos(2)).build();
        let output = render_app(&app, 100, 20);

        assert!(!output.contains("1st"));
        assert!(output.contains("Trending videos"));
        assert!(!output.contains("Other trending videos"));
        assert!(output.contains("#1"));
        assert!(output.contains("#2"));
    }

    #[test]
    fn exactly_three_fills_podium_and_hides_grid() {
        let app = TestAppBuilder::new().with_videos(sample_videos(3)).build();
        let output = render_app(&app, 100, 30);

        assert!(output.contains("3rd"));
        assert!(!output.contains("Other trending videos"));
    }

    #[test]
    fn empty_list_has_empty_state() {
        let app = TestAppBuilder::new().build();
        let output = render_app(&app, 80, 20);

        assert!(output.contains("No trending videos for this filter."));
    }

    #[test]
    fn error_without_list_shows_error_block() {
        let app = TestAppBuilder::new().error("Request timed out.").build();
        let output = render_app(&app, 80, 20);

        assert!(output.contains("Error"));
        assert!(output.contains("Request timed out. Press r to retry."));
    }

    #[test]
    fn error_with_list_keeps_list_and_reports_in_status_bar() {
        let app = TestAppBuilder::new()
            .with_videos(sample_videos(5))
            .error("Request timed out.")
            .build();
        let output = render_app(&app, 160, 30);

        assert!(output.contains("1st"));
        assert!(output.contains("Request timed out. r:retry"));
    }

    #[test]
    fn header_shows_filters_and_age() {
        let app = TestAppBuilder::new()
            .filter(FilterState::new("GB", Some("10".into())))
            .with_videos(sample_videos(3))
            .fetched_secs_ago(600)
            .build();
        let output = render_app(&app, 100, 20);
        let header = output.lines().next().unwrap_or_default();

        assert!(header.contains("Trending in United Kingdom"));
        assert!(header.contains("Category: Music"));
        assert!(header.contains("loaded 10m ago"));
    }

    #[test]
    fn status_bar_shows_position() {
        let app = TestAppBuilder::new()
            .with_videos(sample_videos(8))
            .selected(4)
            .build();
        let output = render_app(&app, 120, 30);
        let status = output.lines().last().unwrap_or_default();

        assert!(status.contains("Tunisia"));
        assert!(status.contains("5/8"));
    }

    #[test]
    fn grid_scrolls_to_keep_selection_visible() {
        let app = TestAppBuilder::new()
            .with_videos(sample_videos(20))
            .selected(19)
            .build();
        // 100 columns fit three cards per row; the grid has room for two rows.
        let output = render_app(&app, 100, 22);

        assert!(output.contains("#20"));
        assert!(!output.contains("#4 "));
    }

    #[test]
    fn wrap_title_limits_lines() {
        let lines = wrap_title("one two three four five six seven", 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| unicode_width::UnicodeWidthStr::width(l.as_str()) <= 10));

        assert_eq!(wrap_title("short", 10, 3), vec!["short".to_string()]);
        assert!(wrap_title("anything", 0, 3).is_empty());
    }

    #[test]
    fn grid_columns_scale_with_width() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(400), GRID_MAX_COLUMNS);
    }
}
