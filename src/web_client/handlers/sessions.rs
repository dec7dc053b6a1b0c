//! Scheduled skill sessions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::sessions::{past, upcoming};
use crate::web_client::state::SharedState;
use crate::web_client::utils::{require_session, session_to_json};

pub async fn list_sessions_handler(State(state): State<SharedState>) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let upcoming_json: Vec<serde_json::Value> = upcoming(&st.sessions)
        .into_iter()
        .map(session_to_json)
        .collect();
    let past_json: Vec<serde_json::Value> =
        past(&st.sessions).into_iter().map(session_to_json).collect();
    let body = serde_json::json!({ "upcoming": upcoming_json, "past": past_json });
    (StatusCode::OK, axum::Json(body)).into_response()
}
