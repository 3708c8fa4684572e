use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub history: HistorySettings,
}

/// Where and how to reach the search API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub search_path: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            search_path: "/api/search".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Persistence of the recent search history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    /// Key the serialized history is stored under.
    pub storage_key: String,
    /// SQLite file name inside the data directory.
    pub database_file: String,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            storage_key: "search-history".to_string(),
            database_file: "myvacation.db".to_string(),
        }
    }
}
