//! Skill catalog lookup for the skill picker.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::web_client::state::SharedState;
use crate::web_client::utils::require_session;

#[derive(Deserialize)]
pub struct SkillsQuery {
    q: Option<String>,
}

pub async fn list_skills_handler(
    State(state): State<SharedState>,
    Query(params): Query<SkillsQuery>,
) -> Response {
    let st = state.lock().await;
    if let Err(resp) = require_session(&st) {
        return resp;
    }
    let hits = st.catalog.search(params.q.as_deref().unwrap_or(""));
    let body = serde_json::json!({ "categories": hits });
    (StatusCode::OK, axum::Json(body)).into_response()
}
