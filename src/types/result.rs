use serde::{Deserialize, Deserializer, Serialize};

use super::history::{Category, SearchHistoryState};

/// A destination returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationResult {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

impl DestinationResult {
    /// Path of the destination detail page.
    pub fn detail_href(&self) -> String {
        format!("/destination/detail/{}", self.id)
    }
}

/// A video returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub video_url: String,
}

/// Response body of the search API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub destination: Vec<DestinationResult>,
    #[serde(default)]
    pub video: Vec<VideoResult>,
}

impl SearchResults {
    /// True when the search matched nothing in either category.
    pub fn is_empty(&self) -> bool {
        self.destination.is_empty() && self.video.is_empty()
    }
}

/// An item that can be kept in the search history.
///
/// Each implementor belongs to exactly one [`Category`] and knows which list
/// of [`SearchHistoryState`] holds it.
pub trait HistoryItem: Clone + PartialEq {
    const CATEGORY: Category;

    fn id(&self) -> &str;
    fn list(state: &SearchHistoryState) -> &Vec<Self>;
    fn list_mut(state: &mut SearchHistoryState) -> &mut Vec<Self>;
}

impl HistoryItem for DestinationResult {
    const CATEGORY: Category = Category::Destination;

    fn id(&self) -> &str {
        &self.id
    }

    fn list(state: &SearchHistoryState) -> &Vec<Self> {
        &state.destination
    }

    fn list_mut(state: &mut SearchHistoryState) -> &mut Vec<Self> {
        &mut state.destination
    }
}

impl HistoryItem for VideoResult {
    const CATEGORY: Category = Category::Video;

    fn id(&self) -> &str {
        &self.id
    }

    fn list(state: &SearchHistoryState) -> &Vec<Self> {
        &state.video
    }

    fn list_mut(state: &mut SearchHistoryState) -> &mut Vec<Self> {
        &mut state.video
    }
}

/// The search API sends numeric ids; older stored history has string ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Str(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Str(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}
