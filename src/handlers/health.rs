use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

/// Liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Social API running" }))
}

/// Best-effort diagnostics: configuration presence plus a live connectivity
/// probe. Always answers 200; failures are truncated and embedded in the
/// body rather than surfaced as HTTP errors.
pub async fn diagnostics(State(state): State<AppState>) -> Json<Value> {
    let mut response = json!({
        "backend": "running",
        "database": "not available",
        "connection_status": "not connected",
        "database_url": if state.config.database_url.is_some() { "set" } else { "not set" },
        "database_name": if state.config.database_name.is_some() { "set" } else { "not set" },
        "collections": [],
    });

    if !state.store.is_initialized() {
        return Json(response);
    }

    match state.store.collection_names().await {
        Ok(names) => {
            response["database"] = json!("connected");
            response["connection_status"] = json!("connected");
            response["collections"] = json!(names.into_iter().take(10).collect::<Vec<_>>());
        }
        Err(e) => {
            response["database"] = json!(format!("error: {}", truncate(&e.to_string(), 50)));
        }
    }

    Json(response)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
