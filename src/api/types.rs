use serde::Deserialize;

use crate::catalog::DEFAULT_REGION;

/// Body of `GET /api/videos`, which is the YouTube `videos.list` response relayed as-is.
#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Option<Vec<RawVideo>>,
}

impl VideoListResponse {
    /// Converts the relayed items into displayable videos, keeping upstream order.
    pub fn into_videos(self) -> Vec<Video> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .filter_map(Video::from_raw)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    pub id: Option<String>,
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub maxres: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest resolution available: maxres, then high, then medium.
    pub fn best_url(&self) -> Option<&str> {
        self.maxres
            .as_ref()
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: Option<String>,
    /// Upstream view count, an integer encoded as a string.
    pub view_count: String,
}

impl Video {
    pub fn from_raw(raw: RawVideo) -> Option<Self> {
        let snippet = raw.snippet?;
        Some(Video {
            id: raw.id?,
            title: snippet.title?,
            channel_title: snippet.channel_title.unwrap_or_default(),
            thumbnail_url: snippet.thumbnails.best_url().map(String::from),
            view_count: raw
                .statistics
                .and_then(|s| s.view_count)
                .unwrap_or_else(|| "0".to_string()),
        })
    }

    /// URL of the video's watch page.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// The user's current filter choice. Drives every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub region: String,
    pub category: Option<String>,
}

impl FilterState {
    /// Builds a filter, treating an empty category as "all categories".
    pub fn new(region: impl Into<String>, category: Option<String>) -> Self {
        let region = region.into();
        Self {
            region: if region.is_empty() {
                DEFAULT_REGION.to_string()
            } else {
                region
            },
            category: category.filter(|c| !c.is_empty()),
        }
    }

    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self::new(region, self.category.clone())
    }

    pub fn with_category(&self, category: Option<String>) -> Self {
        Self::new(self.region.clone(), category)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Video> {
        serde_json::from_str::<VideoListResponse>(json)
            .unwrap()
            .into_videos()
    }

    #[test]
    fn parses_videos_in_upstream_order() {
        let videos = parse(
            r#"{
                "kind": "youtube#videoListResponse",
                "items": [
                    {"id": "a", "snippet": {"title": "First", "channelTitle": "Chan",
                        "thumbnails": {"medium": {"url": "https://i.ytimg.com/a/m.jpg"}}},
                     "statistics": {"viewCount": "1234567"}},
                    {"id": "b", "snippet": {"title": "Second", "thumbnails": {}},
                     "statistics": {"viewCount": "42"}}
                ]
            }"#,
        );

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "a");
        assert_eq!(videos[0].channel_title, "Chan");
        assert_eq!(videos[0].view_count, "1234567");
        assert_eq!(videos[1].id, "b");
        assert_eq!(videos[1].thumbnail_url, None);
    }

    #[test]
    fn missing_items_yields_empty_list() {
        assert!(parse(r#"{"kind": "youtube#videoListResponse"}"#).is_empty());
        assert!(parse(r#"{"items": null}"#).is_empty());
    }

    #[test]
    fn skips_items_without_id_or_title() {
        let videos = parse(
            r#"{"items": [
                {"snippet": {"title": "No id"}},
                {"id": "x"},
                {"id": "y", "snippet": {"channelTitle": "No title"}},
                {"id": "z", "snippet": {"title": "Kept"}}
            ]}"#,
        );
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "z");
        assert_eq!(videos[0].view_count, "0");
    }

    #[test]
    fn thumbnail_prefers_maxres_over_high_over_medium() {
        let thumbs: Thumbnails = serde_json::from_str(
            r#"{"maxres": {"url": "max"}, "high": {"url": "high"}, "medium": {"url": "med"}}"#,
        )
        .unwrap();
        assert_eq!(thumbs.best_url(), Some("max"));

        let thumbs: Thumbnails =
            serde_json::from_str(r#"{"high": {"url": "high"}, "medium": {"url": "med"}}"#)
                .unwrap();
        assert_eq!(thumbs.best_url(), Some("high"));
    }

    #[test]
    fn thumbnail_falls_back_to_medium() {
        let thumbs: Thumbnails =
            serde_json::from_str(r#"{"default": {"url": "tiny"}, "medium": {"url": "med"}}"#)
                .unwrap();
        assert_eq!(thumbs.best_url(), Some("med"));
        assert_eq!(Thumbnails::default().best_url(), None);
    }

    #[test]
    fn watch_url_uses_video_id() {
        let video = Video {
            id: "dQw4w9WgXcQ".to_string(),
            title: "t".to_string(),
            channel_title: String::new(),
            thumbnail_url: None,
            view_count: "0".to_string(),
        };
        assert_eq!(
            video.watch_url(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn filter_normalises_empty_values() {
        let filter = FilterState::new("US", Some(String::new()));
        assert_eq!(filter.category, None);

        let filter = FilterState::new("", Some("10".to_string()));
        assert_eq!(filter.region, DEFAULT_REGION);
        assert_eq!(filter.category.as_deref(), Some("10"));
    }

    #[test]
    fn filter_builders_keep_other_field() {
        let filter = FilterState::new("US", Some("10".to_string()));
        assert_eq!(filter.with_region("FR").category.as_deref(), Some("10"));
        assert_eq!(filter.with_category(None).region, "US");
    }
}
