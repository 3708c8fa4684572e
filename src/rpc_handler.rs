//! RPC method handler for the MyVacation JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! [`dispatch`] applies a method call to the browse controller and the search
//! history held by [`App`]. It never awaits, so the server can run every
//! request in arrival order. Only `browse.search` leaves work behind: the
//! HTTP round trip, finished by [`finish_search`].

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::browse_controller::{FetchOutcome, SearchTicket};
use crate::managers::search_history_manager::SearchHistoryManagerTrait;
use crate::services::search_client::{HttpSearchClient, SearchSource};
use crate::types::history::Category;
use crate::types::result::VideoResult;
use crate::types::route::Route;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn category_param(params: &Value) -> Result<Category, String> {
    str_param(params, "category")?
        .parse::<Category>()
        .map_err(|e| e.to_string())
}

fn outcome_name(outcome: Option<FetchOutcome>) -> &'static str {
    match outcome {
        None => "idle",
        Some(FetchOutcome::Applied) => "applied",
        Some(FetchOutcome::Failed) => "failed",
        Some(FetchOutcome::Stale) => "stale",
    }
}

fn view_json(app: &App) -> Result<Value, String> {
    serde_json::to_value(app.view()).map_err(|e| e.to_string())
}

/// A search that has been started and now waits on the API.
#[derive(Debug)]
pub struct PendingSearch {
    ticket: SearchTicket,
    client: HttpSearchClient,
}

impl PendingSearch {
    pub fn query(&self) -> &str {
        self.ticket.query()
    }
}

/// Result of dispatching one method call.
#[derive(Debug)]
pub enum Dispatch {
    /// The call is complete.
    Reply(Value),
    /// The call started a search; reply with [`finish_search`].
    Search(PendingSearch),
}

/// Dispatch a JSON-RPC method call against the app state.
///
/// Returns `Err(String)` with an error message when the call fails.
pub fn dispatch(app: &Mutex<App>, method: &str, params: &Value) -> Result<Dispatch, String> {
    let reply = match method {
        "ping" => json!({"pong": true}),

        // ─── Browse ───
        "browse.navigate" => {
            let route = Route::parse(str_param(params, "path")?).map_err(|e| e.to_string())?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let changed = a.controller.navigate(&route);
            json!({"route": route.to_path(), "changed": changed, "view": view_json(&a)?})
        }
        "browse.input" => {
            let text = str_param(params, "text")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.controller.set_query_input(text);
            json!({"ok": true})
        }
        "browse.submit" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let Some(text) = params.get("text").and_then(|v| v.as_str()) {
                a.controller.set_query_input(text);
            }
            let route = a.controller.submit();
            json!({"route": route.to_path(), "query": route.query()})
        }
        "browse.search" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ticket = a.begin_search();
            match ticket {
                Some(ticket) => {
                    return Ok(Dispatch::Search(PendingSearch {
                        ticket,
                        client: a.search_client.clone(),
                    }));
                }
                None => json!({"outcome": outcome_name(None), "view": view_json(&a)?}),
            }
        }
        "browse.view" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            view_json(&a)?
        }

        // ─── History ───
        "history.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.history.state()).map_err(|e| e.to_string())?
        }
        "history.remove" => {
            let category = category_param(params)?;
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a
                .history
                .remove_from_history(category, id)
                .map_err(|e| e.to_string())?;
            json!({"removed": removed})
        }
        "history.clear" => {
            let category = category_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.history.reset_history(category).map_err(|e| e.to_string())?;
            json!({"ok": true})
        }
        "history.clear_all" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.history.reset_all().map_err(|e| e.to_string())?;
            json!({"ok": true})
        }

        // ─── Video preview ───
        "preview.open" => {
            let video = VideoResult {
                id: params
                    .get("id")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                title: str_param(params, "title")?.to_string(),
                video_url: str_param(params, "video_url")?.to_string(),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.controller.open_preview(&video);
            serde_json::to_value(a.controller.preview()).map_err(|e| e.to_string())?
        }
        "preview.close" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.controller.close_preview();
            json!({"ok": true})
        }

        _ => return Err(format!("unknown method: {}", method)),
    };

    Ok(Dispatch::Reply(reply))
}

/// Runs the API request of a started search and applies its response.
///
/// The app lock is not held while the request is in flight; a search started
/// meanwhile makes this one stale.
pub async fn finish_search(app: &Mutex<App>, pending: PendingSearch) -> Result<Value, String> {
    let PendingSearch { ticket, client } = pending;
    let result = client.search(ticket.query()).await;

    let mut a = app.lock().map_err(|e| e.to_string())?;
    let outcome = a.complete_search(ticket, result);
    Ok(json!({"outcome": outcome_name(Some(outcome)), "view": view_json(&a)?}))
}

/// Dispatches a method call and, for `browse.search`, waits for the response.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match dispatch(app, method, params)? {
        Dispatch::Reply(value) => Ok(value),
        Dispatch::Search(pending) => finish_search(app, pending).await,
    }
}
