// MyVacation state managers
// Managers own mutable state: the browse page controller and the persisted search history.

pub mod browse_controller;
pub mod history_store;
pub mod search_history_manager;
