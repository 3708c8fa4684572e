//! App Core for MyVacation.
//!
//! Central struct holding settings, the search history, the browse page
//! controller and the search API client.

use std::path::Path;

use tracing::info;

use crate::database::{Database, SqliteStore};
use crate::managers::browse_controller::{BrowseController, FetchOutcome, SearchTicket};
use crate::managers::search_history_manager::{SearchHistoryManager, SearchHistoryManagerTrait};
use crate::platform;
use crate::services::search_client::HttpSearchClient;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SearchError;
use crate::types::page::PageView;
use crate::types::result::SearchResults;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub history: SearchHistoryManager<SqliteStore>,
    pub controller: BrowseController,
    pub search_client: HttpSearchClient,
}

impl App {
    /// Creates an App using the platform config and data directories.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let data_dir = platform::get_data_dir();
        std::fs::create_dir_all(&data_dir)?;
        Self::with_paths(None, &data_dir)
    }

    /// Creates an App with an explicit config file (or the platform default)
    /// and the directory holding the history database.
    pub fn with_paths(
        config_path: Option<String>,
        data_dir: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        let db_path = data_dir.join(&settings.history.database_file);
        let db = Database::open(&db_path)?;
        let history = SearchHistoryManager::load(SqliteStore::new(db), settings.history.storage_key.clone());
        let search_client = HttpSearchClient::new(&settings.api)?;

        info!(
            db = %db_path.display(),
            endpoint = %search_client.endpoint(),
            "app initialized"
        );

        Ok(Self {
            settings_engine,
            history,
            controller: BrowseController::new(),
            search_client,
        })
    }

    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        self.controller.begin_fetch()
    }

    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchResults, SearchError>,
    ) -> FetchOutcome {
        self.controller.complete_fetch(ticket, result, &mut self.history)
    }

    pub fn view(&self) -> PageView {
        self.controller.view(self.history.state())
    }
}
