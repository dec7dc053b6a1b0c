//! Health check endpoint. Answers whether or not a user is signed in.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::web_client::state::SharedState;

pub async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let st = state.lock().await;
    let body = serde_json::json!({
        "status": "ok",
        "signed_in": st.session.is_some(),
        "user_id": st.session.as_ref().map(|s| s.user_id.as_str()),
        "conversations": st.store.conversations().len(),
    });
    (StatusCode::OK, axum::Json(body))
}
