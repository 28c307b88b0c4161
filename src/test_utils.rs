//! Test data builders for view and state testing.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::{DEFAULT_PROXY_URL, FilterState, TrendingClient, Video};
use crate::app::{App, DebugState, FilterPicker, LoadState, PickerKind};
use crate::theme::{ResolvedTheme, ThemeVariant, default_for_variant};
use crate::time::{Clock, fixed_clock};

/// Fixed timestamp for deterministic tests: 2023-11-16 00:00:00 UTC.
pub const TEST_NOW: i64 = 1700092800;

pub struct VideoBuilder {
    id: String,
    title: String,
    channel_title: String,
    thumbnail_url: Option<String>,
    view_count: String,
}

impl Default for VideoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl VideoBuilder {
    pub fn new() -> Self {
        Self {
            id: "vid1".to_string(),
            title: "Test Video".to_string(),
            channel_title: "Test Channel".to_string(),
            thumbnail_url: Some("https://i.ytimg.com/vi/vid1/maxresdefault.jpg".to_string()),
            view_count: "1000".to_string(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn channel(mut self, channel: &str) -> Self {
        self.channel_title = channel.to_string();
        self
    }

    pub fn thumbnail(mut self, url: &str) -> Self {
        self.thumbnail_url = Some(url.to_string());
        self
    }

    pub fn no_thumbnail(mut self) -> Self {
        self.thumbnail_url = None;
        self
    }

    pub fn views(mut self, views: &str) -> Self {
        self.view_count = views.to_string();
        self
    }

    pub fn build(self) -> Video {
        Video {
            id: self.id,
            title: self.title,
            channel_title: self.channel_title,
            thumbnail_url: self.thumbnail_url,
            view_count: self.view_count,
        }
    }
}

const SAMPLE_TITLES: &[(&str, &str, &str)] = &[
    ("Official Music Video 2023", "Big Label Records", "48213977"),
    ("We Built a House in 24 Hours", "Outdoor Builds", "9120443"),
    ("Champions League Highlights", "Football Daily", "3874120"),
    ("How Transistors Actually Work", "Circuit School", "1204556"),
    ("Speedrun World Record Attempt", "Retro Runs", "845001"),
    ("Street Food Tour of Tunis", "Hungry Travels", "412987"),
    ("Evening News Roundup", "News Now", "220341"),
    ("Learning Rust in One Week", "Dev Diaries", "98765"),
];

/// `n` distinct videos in rank order. Titles repeat past the sample set but ids stay unique.
pub fn sample_videos(n: usize) -> Vec<Video> {
    (0..n)
        .map(|i| {
            let (title, channel, views) = SAMPLE_TITLES[i % SAMPLE_TITLES.len()];
            let id = format!("vid{}", i + 1);
            VideoBuilder::new()
                .thumbnail(&format!("https://i.ytimg.com/vi/{id}/maxresdefault.jpg"))
                .id(&id)
                .title(title)
                .channel(channel)
                .views(views)
                .build()
        })
        .collect()
}

pub struct TestAppBuilder {
    filter: FilterState,
    videos: Vec<Video>,
    selected_index: usize,
    loading: bool,
    error: Option<String>,
    fetched_at: Option<u64>,
    help_overlay: bool,
    picker: Option<FilterPicker>,
    generation: u64,
    client: Option<TrendingClient>,
    theme: ResolvedTheme,
    clock: Arc<dyn Clock>,
    config_dir: Option<PathBuf>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            filter: FilterState::default(),
            videos: Vec::new(),
            selected_index: 0,
            loading: false,
            error: None,
            fetched_at: None,
            help_overlay: false,
            picker: None,
            generation: 0,
            client: None,
            theme: default_for_variant(ThemeVariant::Dark),
            clock: fixed_clock(TEST_NOW),
            config_dir: None,
        }
    }

    pub fn filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn error(mut self, msg: &str) -> Self {
        self.error = Some(msg.to_string());
        self
    }

    /// Marks the list as fetched `secs_ago` seconds before [`TEST_NOW`].
    pub fn fetched_secs_ago(mut self, secs_ago: u64) -> Self {
        self.fetched_at = Some(TEST_NOW as u64 - secs_ago);
        self
    }

    pub fn help_overlay(mut self) -> Self {
        self.help_overlay = true;
        self
    }

    pub fn picker(mut self, kind: PickerKind, selected: usize) -> Self {
        self.picker = Some(FilterPicker { kind, selected });
        self
    }

    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn client(mut self, client: TrendingClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn theme(mut self, theme: ResolvedTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn build(self) -> App {
        let (result_tx, result_rx) = mpsc::channel(10);

        let load = LoadState {
            loading: self.loading,
            loading_start: self.loading.then(Instant::now),
            error: self.error,
            fetched_at: self.fetched_at,
        };

        let client = match self.client {
            Some(client) => client,
            None => TrendingClient::new(DEFAULT_PROXY_URL).expect("default client"),
        };

        App {
            filter: self.filter,
            videos: self.videos,
            selected_index: self.selected_index,
            load,
            should_quit: false,
            help_overlay: self.help_overlay,
            client,
            theme: self.theme,
            clock: self.clock,
            result_tx,
            result_rx,
            generation: self.generation,
            in_flight: None,
            debug: DebugState::new(),
            picker: self.picker,
            config_dir: self.config_dir,
        }
    }
}
