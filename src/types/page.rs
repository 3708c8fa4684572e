use serde::Serialize;

use super::result::{DestinationResult, VideoResult};

pub const PAGE_TITLE: &str = "Browse - MyVacation";
pub const PAGE_DESCRIPTION: &str = "Browse destination - MyVacation";
pub const FAILED_TO_LOAD: &str = "Failed to load";

/// Number of placeholder cards shown while a search is in flight.
pub const DESTINATION_PLACEHOLDERS: usize = 4;
pub const VIDEO_PLACEHOLDERS: usize = 3;

/// Everything a frontend needs to draw the browse page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub description: &'static str,
    pub query_input: String,
    pub content: PageContent,
    pub tiles: Vec<BrowseTile>,
    pub preview: VideoPreview,
}

/// Main body of the page, one state at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    /// The fetch failed; nothing else is shown.
    Error { message: String },
    /// A query is active and its results have not arrived.
    Searching {
        query: String,
        destination_placeholders: usize,
        video_placeholders: usize,
    },
    /// The query matched nothing.
    NoResults { query: String },
    Results {
        query: String,
        destinations: Vec<DestinationCard>,
        videos: Vec<VideoCard>,
    },
    /// No active query: recent search history, possibly empty.
    History {
        destinations: Vec<DestinationCard>,
        videos: Vec<VideoCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationCard {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub href: String,
}

impl From<&DestinationResult> for DestinationCard {
    fn from(d: &DestinationResult) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            image_url: d.image_url.clone(),
            href: d.detail_href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&VideoResult> for VideoCard {
    fn from(v: &VideoResult) -> Self {
        Self {
            id: v.id.clone(),
            title: v.title.clone(),
            url: v.video_url.clone(),
        }
    }
}

/// Shortcut tile to a category listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseTile {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BROWSE_TILES: [BrowseTile; 5] = [
    BrowseTile { label: "Destination", href: "/destination" },
    BrowseTile { label: "Category", href: "/category" },
    BrowseTile { label: "Island", href: "/island" },
    BrowseTile { label: "Province", href: "/province" },
    BrowseTile { label: "Video", href: "/video" },
];

/// Modal video preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VideoPreview {
    pub open: bool,
    pub title: String,
    pub video_url: String,
    /// Player URL, present when the video URL names a YouTube video.
    pub embed_url: Option<String>,
}
