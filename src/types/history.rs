use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::HistoryError;
use super::result::{DestinationResult, VideoResult};

/// One of the two result kinds tracked independently in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Destination,
    Video,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Destination => "destination",
            Category::Video => "video",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destination" => Ok(Category::Destination),
            "video" => Ok(Category::Video),
            other => Err(HistoryError::UnknownCategory(other.to_string())),
        }
    }
}

/// Recent search history, one list per category.
///
/// Each list is ordered oldest-first and holds no two entries with the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryState {
    #[serde(default)]
    pub destination: Vec<DestinationResult>,
    #[serde(default)]
    pub video: Vec<VideoResult>,
}

impl SearchHistoryState {
    pub fn is_empty(&self) -> bool {
        self.destination.is_empty() && self.video.is_empty()
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Destination => self.destination.len(),
            Category::Video => self.video.len(),
        }
    }
}
