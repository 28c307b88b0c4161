use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::{ApiError, FilterState, TrendingClient, Video};
use crate::catalog::{self, CATEGORIES, REGIONS};
use crate::layout::RankedLayout;
use crate::settings::{self, Settings};
use crate::theme::ResolvedTheme;
use crate::time::Clock;

pub enum AsyncResult {
    Videos {
        generation: u64,
        task_id: u64,
        result: Result<Vec<Video>, ApiError>,
    },
}

#[derive(Debug)]
pub struct TaskInfo {
    pub id: u64,
    pub description: String,
    pub started_at: Instant,
}

#[derive(Debug)]
pub struct LogEntry {
    pub message: String,
}

/// Debug panel state: task tracking and log messages.
#[derive(Debug, Default)]
pub struct DebugState {
    pub visible: bool,
    pub running_tasks: Vec<TaskInfo>,
    pub log: VecDeque<LogEntry>,
    next_task_id: u64,
}

impl DebugState {
    const MAX_LOG_ENTRIES: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, msg: impl Into<String>) {
        self.log.push_back(LogEntry {
            message: msg.into(),
        });
        if self.log.len() > Self::MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
    }

    pub fn start_task(&mut self, description: impl Into<String>) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        let desc = description.into();
        self.log(format!("Started: {}", desc));
        self.running_tasks.push(TaskInfo {
            id,
            description: desc,
            started_at: Instant::now(),
        });
        id
    }

    pub fn end_task(&mut self, id: u64, outcome: &str) {
        if let Some(pos) = self.running_tasks.iter().position(|t| t.id == id) {
            let task = self.running_tasks.remove(pos);
            let elapsed = task.started_at.elapsed();
            self.log(format!("{} {}: {:.2?}", task.description, outcome, elapsed));
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Fetch state for the current list.
#[derive(Debug, Default)]
pub struct LoadState {
    pub loading: bool,
    pub loading_start: Option<Instant>,
    pub error: Option<String>,
    /// Unix time of the last successful fetch.
    pub fetched_at: Option<u64>,
}

impl LoadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.loading_start = loading.then(Instant::now);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }
}

/// What the view shows: a placeholder while a fetch is in flight, otherwise the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Region,
    Category,
}

impl PickerKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Region => "Country",
            Self::Category => "Category",
        }
    }

    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Self::Region => REGIONS.iter().map(|r| r.name).collect(),
            Self::Category => CATEGORIES.iter().map(|c| c.name).collect(),
        }
    }
}

/// State for the region/category picker popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPicker {
    pub kind: PickerKind,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    OpenVideo,
    OpenThumbnail,
    Refresh,
    NextRegion,
    PrevRegion,
    NextCategory,
    PrevCategory,
    OpenRegionPicker,
    OpenCategoryPicker,
    PickerUp,
    PickerDown,
    ConfirmPicker,
    ClosePicker,
    ToggleHelp,
    ToggleDebug,
    Quit,
}

pub struct App {
    pub filter: FilterState,
    pub videos: Vec<Video>,
    pub selected_index: usize,
    pub load: LoadState,
    pub should_quit: bool,
    pub help_overlay: bool,
    pub client: TrendingClient,
    pub theme: ResolvedTheme,
    pub clock: Arc<dyn Clock>,
    // Async task management
    pub result_tx: mpsc::Sender<AsyncResult>,
    pub result_rx: mpsc::Receiver<AsyncResult>,
    pub generation: u64,
    pub in_flight: Option<(u64, CancellationToken)>,
    pub debug: DebugState,
    pub picker: Option<FilterPicker>,
    // Config directory for persisting the last filters
    pub config_dir: Option<PathBuf>,
}

impl App {
    pub fn new(
        theme: ResolvedTheme,
        client: TrendingClient,
        filter: FilterState,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let (result_tx, result_rx) = mpsc::channel(10);
        Self {
            filter,
            videos: Vec::new(),
            selected_index: 0,
            load: LoadState::new(),
            should_quit: false,
            help_overlay: false,
            client,
            theme,
            clock: crate::time::system_clock(),
            result_tx,
            result_rx,
            generation: 0,
            in_flight: None,
            debug: DebugState::new(),
            picker: None,
            config_dir,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.load.loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    pub fn layout(&self) -> RankedLayout<'_> {
        RankedLayout::new(&self.videos)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.videos.get(self.selected_index)
    }

    pub fn handle_async_result(&mut self, result: AsyncResult) {
        match result {
            AsyncResult::Videos {
                generation,
                task_id,
                result,
            } => {
                if generation != self.generation {
                    self.debug.end_task(task_id, "discarded (stale)");
                    return;
                }
                if self.in_flight.as_ref().is_some_and(|(id, _)| *id == task_id) {
                    self.in_flight = None;
                }
                self.debug.end_task(
                    task_id,
                    if result.is_ok() {
                        "completed"
                    } else {
                        "failed"
                    },
                );
                match result {
                    Ok(videos) => {
                        info!(
                            region = %self.filter.region,
                            count = videos.len(),
                            "trending list updated"
                        );
                        self.videos = videos;
                        self.selected_index = 0;
                        self.load.fetched_at = Some(self.clock.now().timestamp().max(0) as u64);
                    }
                    Err(e) => {
                        warn!(error = ?e, "failed to fetch trending videos");
                        self.debug.log(format!("Fetch failed: {e:?}"));
                        self.load.set_error(e.user_message());
                    }
                }
                self.load.set_loading(false);
            }
        }
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::SelectNext => self.select_next(),
            Message::SelectPrev => self.select_prev(),
            Message::SelectFirst => self.selected_index = 0,
            Message::SelectLast => self.select_last(),
            Message::OpenVideo => self.open_video(),
            Message::OpenThumbnail => self.open_thumbnail(),
            Message::Refresh => self.load_videos(),
            Message::NextRegion => self.cycle_region(1),
            Message::PrevRegion => self.cycle_region(-1),
            Message::NextCategory => self.cycle_category(1),
            Message::PrevCategory => self.cycle_category(-1),
            Message::OpenRegionPicker => self.open_picker(PickerKind::Region),
            Message::OpenCategoryPicker => self.open_picker(PickerKind::Category),
            Message::PickerUp => self.picker_up(),
            Message::PickerDown => self.picker_down(),
            Message::ConfirmPicker => self.confirm_picker(),
            Message::ClosePicker => self.picker = None,
            Message::ToggleHelp => self.help_overlay = !self.help_overlay,
            Message::ToggleDebug => self.debug.toggle(),
            Message::Quit => self.should_quit = true,
        }
    }

    /// Starts a fetch for the current filter, superseding any fetch in flight.
    pub fn load_videos(&mut self) {
        self.generation += 1;
        self.load.set_loading(true);
        self.load.clear_error();
        self.spawn_videos_fetch();
    }

    /// Applies a new filter. Unchanged filters do not refetch.
    pub fn set_filter(&mut self, filter: FilterState) {
        if self.filter != filter {
            debug!(?filter, "filter changed");
            self.filter = filter;
            self.selected_index = 0;
            self.load_videos();
        }
    }

    fn select_next(&mut self) {
        let count = self.videos.len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn select_last(&mut self) {
        self.selected_index = self.videos.len().saturating_sub(1);
    }

    fn open_video(&mut self) {
        if let Some(url) = self.selected_video().map(Video::watch_url) {
            self.open_url(&url);
        }
    }

    fn open_thumbnail(&mut self) {
        if let Some(url) = self.selected_video().and_then(|v| v.thumbnail_url.clone()) {
            self.open_url(&url);
        }
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(%url, error = %e, "failed to open browser");
            self.debug.log(format!("Failed to open {}: {}", url, e));
        }
    }

    fn cycle_region(&mut self, direction: i32) {
        let current = catalog::region_index(&self.filter.region);
        let next = cycle_index(current, direction, REGIONS.len());
        let filter = self.filter.with_region(REGIONS[next].code);
        self.set_filter(filter);
    }

    fn cycle_category(&mut self, direction: i32) {
        let current = catalog::category_index(self.filter.category.as_deref());
        let next = cycle_index(current, direction, CATEGORIES.len());
        let filter = self
            .filter
            .with_category(CATEGORIES[next].id.map(String::from));
        self.set_filter(filter);
    }

    fn open_picker(&mut self, kind: PickerKind) {
        let selected = match kind {
            PickerKind::Region => catalog::region_index(&self.filter.region),
            PickerKind::Category => catalog::category_index(self.filter.category.as_deref()),
        }
        .unwrap_or(0);
        self.picker = Some(FilterPicker { kind, selected });
    }

    fn picker_up(&mut self) {
        if let Some(picker) = &mut self.picker
            && picker.selected > 0
        {
            picker.selected -= 1;
        }
    }

    fn picker_down(&mut self) {
        if let Some(picker) = &mut self.picker
            && picker.selected + 1 < picker.kind.options().len()
        {
            picker.selected += 1;
        }
    }

    fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let filter = match picker.kind {
            PickerKind::Region => self.filter.with_region(REGIONS[picker.selected].code),
            PickerKind::Category => self
                .filter
                .with_category(CATEGORIES[picker.selected].id.map(String::from)),
        };
        self.set_filter(filter);
    }

    /// Writes the current filters back to the settings file, keeping other keys.
    pub fn persist_filters(&self) -> Result<()> {
        let Some(config_dir) = &self.config_dir else {
            return Ok(());
        };
        let path = settings::settings_path(config_dir);
        let mut current = Settings::load(&path)?;
        current.region = Some(self.filter.region.clone());
        current.category = self.filter.category.clone();
        current.save(&path)
    }

    /// Spawn an async task to fetch the list for the current filter.
    ///
    /// The previous task, if any, is cancelled. Its result could still race in
    /// before cancellation lands, so results also carry the generation they
    /// were issued under and stale ones are dropped on arrival.
    fn spawn_videos_fetch(&mut self) {
        if let Some((task_id, token)) = self.in_flight.take() {
            token.cancel();
            self.debug.end_task(task_id, "cancelled");
        }

        let client = self.client.clone();
        let filter = self.filter.clone();
        let tx = self.result_tx.clone();
        let generation = self.generation;
        let token = CancellationToken::new();

        let task_id = self.debug.start_task(format!(
            "Load {} / {}",
            catalog::region_label(&filter.region),
            catalog::category_label(filter.category.as_deref())
        ));
        self.in_flight = Some((task_id, token.clone()));

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                result = client.fetch_trending(&filter) => {
                    let _ = tx
                        .send(AsyncResult::Videos {
                            generation,
                            task_id,
                            result,
                        })
                        .await;
                }
            }
        });
    }
}

fn cycle_index(current: Option<usize>, direction: i32, len: usize) -> usize {
    match current {
        Some(idx) => (idx as i32 + direction).rem_euclid(len as i32) as usize,
        None => 0,
    }
}
