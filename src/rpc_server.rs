//! MyVacation RPC Server — JSON-RPC over stdin/stdout for the browse frontend.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"browse.submit", "params":{"text":"bali"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Requests are applied in the order they arrive. A `browse.search` reply is
//! sent once the API answers, so it may follow replies to later requests.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use myvacation::app::App;
use myvacation::rpc_handler::{dispatch, finish_search, Dispatch};

const LOG_ENV: &str = "MYVACATION_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let app = match App::new() {
        Ok(app) => Arc::new(Mutex::new(app)),
        Err(e) => {
            error!(error = %e, "failed to initialize MyVacation");
            std::process::exit(1);
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<Value>();

    let writer = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while let Some(message) = rx.recv().await {
            let line = format!("{}\n", message);
            if stdout.write_all(line.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
                break;
            }
        }
    });

    let _ = tx.send(json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));
    info!("rpc server ready");

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "stdin read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let _ = tx.send(json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        // Requests apply in arrival order; only a search's API round trip
        // runs in the background.
        match dispatch(&app, method, &params) {
            Ok(Dispatch::Reply(val)) => {
                let _ = tx.send(json!({"id": id, "result": val}));
            }
            Ok(Dispatch::Search(pending)) => {
                let app = Arc::clone(&app);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let response = match finish_search(&app, pending).await {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    };
                    let _ = tx.send(response);
                });
            }
            Err(err) => {
                let _ = tx.send(json!({"id": id, "error": err}));
            }
        }
    }

    drop(tx);
    let _ = writer.await;
}
