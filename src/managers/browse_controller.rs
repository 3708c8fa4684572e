//! Browse page controller.
//!
//! Holds the page state a frontend needs between events: the active query
//! from the route, the search box text, the in-flight or finished fetch, and
//! the video preview dialog. Fetches go through tickets so that only the
//! most recently started search can commit its results.

use tracing::{debug, info, warn};

use crate::managers::history_store::KeyValueStore;
use crate::managers::search_history_manager::{SearchHistoryManager, SearchHistoryManagerTrait};
use crate::services::video_embed;
use crate::types::errors::SearchError;
use crate::types::history::SearchHistoryState;
use crate::types::page::{
    DestinationCard, PageContent, PageView, VideoCard, VideoPreview, BROWSE_TILES,
    DESTINATION_PLACEHOLDERS, FAILED_TO_LOAD, PAGE_DESCRIPTION, PAGE_TITLE, VIDEO_PLACEHOLDERS,
};
use crate::types::result::{SearchResults, VideoResult};
use crate::types::route::Route;

/// State of the current search fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading { seq: u64 },
    Loaded(SearchResults),
    Failed(String),
}

/// Proof that a fetch was started, carrying its sequence number and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Results were applied to the page (and history).
    Applied,
    /// The fetch failed; the page shows the error state.
    Failed,
    /// A newer search was started meanwhile; the response was dropped.
    Stale,
}

/// Page controller for the browse screen.
#[derive(Debug)]
pub struct BrowseController {
    active_query: String,
    query_input: String,
    fetch: FetchState,
    preview: VideoPreview,
    last_seq: u64,
}

impl Default for BrowseController {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseController {
    pub fn new() -> Self {
        Self {
            active_query: String::new(),
            query_input: String::new(),
            fetch: FetchState::Idle,
            preview: VideoPreview::default(),
            last_seq: 0,
        }
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn preview(&self) -> &VideoPreview {
        &self.preview
    }

    /// Applies a route. The search box follows the route's query whenever
    /// that query changes; an unchanged route leaves the box alone.
    ///
    /// Returns `true` when the active query changed, i.e. a new fetch is due.
    pub fn navigate(&mut self, route: &Route) -> bool {
        let query = route.query();
        if query == self.active_query {
            return false;
        }

        debug!(from = %self.active_query, to = %query, "browse query changed");
        self.active_query = query.to_string();
        self.query_input = query.to_string();
        self.fetch = FetchState::Idle;
        true
    }

    pub fn set_query_input(&mut self, text: impl Into<String>) {
        self.query_input = text.into();
    }

    /// Submits the search box: non-empty text becomes `/browse?q=<text>`,
    /// empty text the bare `/browse`. The route is applied and returned.
    pub fn submit(&mut self) -> Route {
        let route = Route::for_query(&self.query_input);
        self.navigate(&route);
        route
    }

    /// Starts a fetch for the active query, or `None` when there is no query.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> Option<SearchTicket> {
        if self.active_query.is_empty() {
            return None;
        }

        self.last_seq += 1;
        self.fetch = FetchState::Loading { seq: self.last_seq };
        debug!(seq = self.last_seq, query = %self.active_query, "search started");
        Some(SearchTicket {
            seq: self.last_seq,
            query: self.active_query.clone(),
        })
    }

    /// Applies the response for `ticket`.
    ///
    /// Successful results are merged into `history` per non-empty category;
    /// a history write failure is logged and does not fail the page.
    pub fn complete_fetch<S: KeyValueStore>(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchResults, SearchError>,
        history: &mut SearchHistoryManager<S>,
    ) -> FetchOutcome {
        if ticket.seq != self.last_seq || ticket.query != self.active_query {
            debug!(
                seq = ticket.seq,
                latest = self.last_seq,
                query = %ticket.query,
                "dropping stale search response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(results) => {
                info!(
                    query = %ticket.query,
                    destinations = results.destination.len(),
                    videos = results.video.len(),
                    "search results received"
                );
                if !results.destination.is_empty() {
                    if let Err(e) = history.add_to_history(&results.destination) {
                        warn!(error = %e, "failed to record destination history");
                    }
                }
                if !results.video.is_empty() {
                    if let Err(e) = history.add_to_history(&results.video) {
                        warn!(error = %e, "failed to record video history");
                    }
                }
                self.fetch = FetchState::Loaded(results);
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!(query = %ticket.query, error = %e, "search failed");
                self.fetch = FetchState::Failed(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    pub fn open_preview(&mut self, video: &VideoResult) {
        self.preview = VideoPreview {
            open: true,
            title: video.title.clone(),
            video_url: video.video_url.clone(),
            embed_url: video_embed::embed_url(&video.video_url),
        };
    }

    /// Closes the dialog; its last title and URL are kept, like the player it hides.
    pub fn close_preview(&mut self) {
        self.preview.open = false;
    }

    /// Derives the render model for the current state.
    pub fn view(&self, history: &SearchHistoryState) -> PageView {
        let content = self.content(history);
        let tiles = match content {
            PageContent::Error { .. } => Vec::new(),
            _ => BROWSE_TILES.to_vec(),
        };

        PageView {
            title: PAGE_TITLE,
            description: PAGE_DESCRIPTION,
            query_input: self.query_input.clone(),
            content,
            tiles,
            preview: self.preview.clone(),
        }
    }

    fn content(&self, history: &SearchHistoryState) -> PageContent {
        if let FetchState::Failed(_) = self.fetch {
            return PageContent::Error {
                message: FAILED_TO_LOAD.to_string(),
            };
        }

        if self.active_query.is_empty() {
            return PageContent::History {
                destinations: history.destination.iter().map(DestinationCard::from).collect(),
                videos: history.video.iter().map(VideoCard::from).collect(),
            };
        }

        match &self.fetch {
            FetchState::Loaded(results) if results.is_empty() => {
                let query = if self.query_input.is_empty() {
                    self.active_query.clone()
                } else {
                    self.query_input.clone()
                };
                PageContent::NoResults { query }
            }
            FetchState::Loaded(results) => PageContent::Results {
                query: self.active_query.clone(),
                destinations: results.destination.iter().map(DestinationCard::from).collect(),
                videos: results.video.iter().map(VideoCard::from).collect(),
            },
            _ => PageContent::Searching {
                query: self.active_query.clone(),
                destination_placeholders: DESTINATION_PLACEHOLDERS,
                video_placeholders: VIDEO_PLACEHOLDERS,
            },
        }
    }
}
